use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use crate::error::{BenchError, Result};

/// Overrides the directory test files are written to.
pub const HOME_ENV: &str = "REVBENCH_HOME";

pub fn test_file_name(size_mb: usize) -> String {
    format!("test_{}MB.txt", size_mb)
}

/// `$REVBENCH_HOME` if set, the current directory otherwise.
pub fn output_dir() -> PathBuf {
    match std::env::var_os(HOME_ENV) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => PathBuf::from("."),
    }
}

pub fn try_write_file(path: &Path, data: &[u8]) -> Result<()> {
    let mut out = File::create(path).map_err(|source| BenchError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    out.write_all(data)?;
    out.flush()?;
    Ok(())
}

pub fn try_read_file(path: &Path) -> Result<Vec<u8>> {
    let mut input = File::open(path).map_err(|source| BenchError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    let mut data = Vec::new();
    input.read_to_end(&mut data)?;
    Ok(data)
}

/// Writes `data` to `path`. Failures are reported on stderr and otherwise ignored.
pub fn write_file(path: &Path, data: &[u8]) {
    if let Err(e) = try_write_file(path, data) {
        eprintln!("Error writing {}: {}", path.display(), e);
        crate::debug_log!("write failed for {}: {}", path.display(), e);
    }
}

/// Reads all of `path`. Returns an empty buffer when the file cannot be read;
/// callers treat empty as failure.
pub fn read_file(path: &Path) -> Vec<u8> {
    match try_read_file(path) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Error reading {}: {}", path.display(), e);
            crate::debug_log!("read failed for {}: {}", path.display(), e);
            Vec::new()
        }
    }
}

fn is_test_file_name(name: &str) -> bool {
    name.strip_prefix("test_")
        .and_then(|rest| rest.strip_suffix("MB.txt"))
        .is_some_and(|digits| {
            !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
        })
}

/// Deletes every `test_<N>MB.txt` file directly inside `dir`.
pub fn remove_test_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut removed = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name();
        if !is_test_file_name(&name.to_string_lossy()) {
            continue;
        }

        let path = entry.path();
        match fs::remove_file(&path) {
            Ok(()) => removed.push(path),
            Err(e) => eprintln!("Failed to remove {}: {}", path.display(), e),
        }
    }

    removed.sort();
    Ok(removed)
}
