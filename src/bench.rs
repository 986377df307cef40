use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::content::{bytes_for_megabytes, generate_content};
use crate::file_io::{read_file, test_file_name, write_file};
use crate::report::ConsoleReporter;
use crate::reverse::{hardware_concurrency, parallel_reverse, sequential_reverse};

/// Test file sizes, in decimal megabytes.
pub const FILE_SIZES_MB: [usize; 8] = [5, 13, 20, 41, 74, 141, 197, 265];

/// Requested worker counts for the parallel variant.
pub const THREAD_COUNTS: [usize; 4] = [2, 4, 8, 16];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantTiming {
    /// `None` for the sequential baseline.
    pub threads: Option<usize>,
    pub elapsed: Duration,
    pub matches: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SizeOutcome {
    /// The file could not be read back, or was empty.
    Skipped,
    Measured {
        sequential: VariantTiming,
        parallel: Vec<VariantTiming>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeReport {
    pub size_mb: usize,
    pub path: PathBuf,
    pub bytes: usize,
    pub outcome: SizeOutcome,
}

impl SizeReport {
    pub fn mismatches(&self) -> usize {
        match &self.outcome {
            SizeOutcome::Skipped => 0,
            SizeOutcome::Measured { parallel, .. } => {
                parallel.iter().filter(|t| !t.matches).count()
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub hardware_threads: usize,
    pub reports: Vec<SizeReport>,
}

impl RunSummary {
    pub fn mismatch_count(&self) -> usize {
        self.reports.iter().map(SizeReport::mismatches).sum()
    }

    pub fn skipped_count(&self) -> usize {
        self.reports
            .iter()
            .filter(|r| r.outcome == SizeOutcome::Skipped)
            .count()
    }

    pub fn measured_count(&self) -> usize {
        self.reports.len() - self.skipped_count()
    }
}

pub fn time_it<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}

/// Runs the full matrix with the built-in sizes and thread counts.
pub fn run_default(dir: &Path, reporter: &ConsoleReporter) -> RunSummary {
    run_matrix(dir, &FILE_SIZES_MB, &THREAD_COUNTS, reporter)
}

/// For every size: generate, write, read back, then time the sequential
/// baseline and each parallel thread count against it. Never fails; I/O
/// problems skip the size and mismatches are reported as warnings.
pub fn run_matrix(
    dir: &Path,
    sizes_mb: &[usize],
    thread_counts: &[usize],
    reporter: &ConsoleReporter,
) -> RunSummary {
    let hardware_threads = hardware_concurrency();
    reporter.hardware(hardware_threads);
    crate::debug_log!(
        "run started: sizes {:?} MB, threads {:?}, dir {}",
        sizes_mb,
        thread_counts,
        dir.display()
    );

    let mut reports = Vec::with_capacity(sizes_mb.len());
    for &size_mb in sizes_mb {
        reports.push(run_size(dir, size_mb, thread_counts, reporter));
    }
    reporter.separator();

    let summary = RunSummary {
        hardware_threads,
        reports,
    };
    reporter.summary(&summary);
    summary
}

fn run_size(
    dir: &Path,
    size_mb: usize,
    thread_counts: &[usize],
    reporter: &ConsoleReporter,
) -> SizeReport {
    let path = dir.join(test_file_name(size_mb));

    reporter.separator();
    reporter.generating(&path, size_mb);
    let content = generate_content(bytes_for_megabytes(size_mb));
    write_file(&path, &content);
    drop(content);

    let input = read_file(&path);
    if input.is_empty() {
        reporter.read_failed(&path);
        return SizeReport {
            size_mb,
            path,
            bytes: 0,
            outcome: SizeOutcome::Skipped,
        };
    }
    reporter.read_ok(&path, input.len());

    let (baseline, elapsed) = time_it(|| sequential_reverse(&input));
    let sequential = VariantTiming {
        threads: None,
        elapsed,
        matches: true,
    };
    reporter.timing(&sequential);
    crate::debug_log!("{} MB sequential: {:?}", size_mb, elapsed);

    let mut parallel = Vec::with_capacity(thread_counts.len());
    for &threads in thread_counts {
        let (result, elapsed) = time_it(|| parallel_reverse(&input, threads));
        let matches = match result {
            Ok(output) => output == baseline,
            Err(e) => {
                eprintln!("Parallel reversal with {} threads failed: {}", threads, e);
                false
            }
        };
        if !matches {
            reporter.mismatch(threads);
        }

        let timing = VariantTiming {
            threads: Some(threads),
            elapsed,
            matches,
        };
        reporter.timing(&timing);
        crate::debug_log!(
            "{} MB parallel x{}: {:?} (matches: {})",
            size_mb,
            threads,
            elapsed,
            matches
        );
        parallel.push(timing);
    }

    SizeReport {
        size_mb,
        path,
        bytes: input.len(),
        outcome: SizeOutcome::Measured {
            sequential,
            parallel,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_time_it_returns_value() {
        let (value, elapsed) = time_it(|| 6 * 7);
        assert_eq!(value, 42);
        assert!(elapsed < Duration::from_secs(5));
    }

    #[test]
    fn test_default_matrix() {
        assert_eq!(FILE_SIZES_MB.len(), 8);
        assert_eq!(THREAD_COUNTS, [2, 4, 8, 16]);
    }

    #[test]
    fn test_run_matrix_small_sizes() {
        let temp_dir = TempDir::new().unwrap();
        let summary = run_matrix(
            temp_dir.path(),
            &[1, 2],
            &[1, 2, 3],
            &ConsoleReporter::quiet(),
        );

        assert!(summary.hardware_threads >= 1);
        assert_eq!(summary.reports.len(), 2);
        assert_eq!(summary.skipped_count(), 0);
        assert_eq!(summary.mismatch_count(), 0);
        assert_eq!(summary.measured_count(), 2);
        assert!(summary
            .to_string()
            .ends_with("2 sizes measured, 0 skipped, 0 mismatches"));

        let first = &summary.reports[0];
        assert_eq!(first.bytes, 1_000_000);
        assert_eq!(first.path, temp_dir.path().join("test_1MB.txt"));
        assert!(first.path.exists());
        match &first.outcome {
            SizeOutcome::Measured {
                sequential,
                parallel,
            } => {
                assert_eq!(sequential.threads, None);
                let threads: Vec<_> = parallel.iter().map(|t| t.threads).collect();
                assert_eq!(threads, vec![Some(1), Some(2), Some(3)]);
            }
            SizeOutcome::Skipped => panic!("size should have been measured"),
        }
    }

    #[test]
    fn test_run_matrix_skips_zero_size() {
        let temp_dir = TempDir::new().unwrap();
        let summary = run_matrix(temp_dir.path(), &[0], &[2], &ConsoleReporter::quiet());
        assert_eq!(summary.skipped_count(), 1);
        assert_eq!(summary.reports[0].outcome, SizeOutcome::Skipped);
    }

    #[test]
    fn test_run_matrix_skips_unwritable_dir() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing");
        let summary = run_matrix(&missing, &[1], &[2], &ConsoleReporter::quiet());
        assert_eq!(summary.skipped_count(), 1);
        assert_eq!(summary.mismatch_count(), 0);
        assert!(summary
            .to_string()
            .ends_with("0 sizes measured, 1 skipped, 0 mismatches"));
    }

    #[test]
    fn test_invalid_thread_count_counts_as_mismatch() {
        let temp_dir = TempDir::new().unwrap();
        let summary = run_matrix(temp_dir.path(), &[1], &[0, 2], &ConsoleReporter::quiet());
        assert_eq!(summary.mismatch_count(), 1);
    }
}
