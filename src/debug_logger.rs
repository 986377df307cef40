use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

pub const DEBUG_LOG_ENV: &str = "REVBENCH_DEBUG_LOG";

lazy_static::lazy_static! {
    static ref DEBUG_FILE: Mutex<Option<File>> = Mutex::new(None);
}

/// Opens the debug log named by `REVBENCH_DEBUG_LOG`, if set.
/// Returns whether logging is active.
pub fn init_from_env() -> bool {
    match std::env::var_os(DEBUG_LOG_ENV) {
        Some(path) if !path.is_empty() => init_debug_log(Path::new(&path)),
        _ => false,
    }
}

pub fn init_debug_log(path: &Path) -> bool {
    match OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => {
            if let Ok(mut guard) = DEBUG_FILE.lock() {
                *guard = Some(file);
                return true;
            }
            false
        }
        Err(e) => {
            eprintln!("Could not open debug log {}: {}", path.display(), e);
            false
        }
    }
}

pub fn debug_log(msg: &str) {
    if let Ok(mut guard) = DEBUG_FILE.lock() {
        if let Some(ref mut file) = *guard {
            let _ = writeln!(
                file,
                "[{}] {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                msg
            );
            let _ = file.flush();
        }
    }
}

#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        $crate::debug_logger::debug_log(&format!($($arg)*));
    };
}
