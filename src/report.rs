use std::fmt;
use std::path::Path;
use std::time::Duration;

use crate::bench::{RunSummary, SizeOutcome, SizeReport, VariantTiming};

pub const SEPARATOR: &str = "--------------------------------------------------";

pub fn hardware_line(threads: usize) -> String {
    format!("Available logical cores: {}", threads)
}

pub fn generating_line(path: &Path, size_mb: usize) -> String {
    format!("Generating file {} of {} MB...", path.display(), size_mb)
}

pub fn read_ok_line(path: &Path, bytes: usize) -> String {
    format!(
        "File {} read successfully, size: {} bytes",
        path.display(),
        bytes
    )
}

pub fn read_failed_line(path: &Path) -> String {
    format!("Could not read file {}", path.display())
}

pub fn mismatch_line(threads: usize) -> String {
    format!(
        "Error: parallel reversal with {} threads does not match the sequential result.",
        threads
    )
}

/// Prints benchmark progress. Progress goes to stdout, problems to stderr.
pub struct ConsoleReporter {
    quiet: bool,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        ConsoleReporter { quiet: false }
    }

    /// A reporter that only emits stderr diagnostics.
    pub fn quiet() -> Self {
        ConsoleReporter { quiet: true }
    }

    fn out(&self, line: impl fmt::Display) {
        if !self.quiet {
            println!("{}", line);
        }
    }

    pub fn hardware(&self, threads: usize) {
        self.out(hardware_line(threads));
    }

    pub fn separator(&self) {
        self.out(SEPARATOR);
    }

    pub fn generating(&self, path: &Path, size_mb: usize) {
        self.out(generating_line(path, size_mb));
    }

    pub fn read_ok(&self, path: &Path, bytes: usize) {
        self.out(read_ok_line(path, bytes));
    }

    pub fn read_failed(&self, path: &Path) {
        eprintln!("{}", read_failed_line(path));
    }

    pub fn timing(&self, timing: &VariantTiming) {
        self.out(timing);
    }

    pub fn mismatch(&self, threads: usize) {
        eprintln!("{}", mismatch_line(threads));
    }

    pub fn summary(&self, summary: &RunSummary) {
        self.out(summary);
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.reports.is_empty() {
            return write!(f, "No sizes benchmarked");
        }

        writeln!(f, "SUMMARY\n")?;
        for report in &self.reports {
            writeln!(f, "{}", report)?;
        }
        write!(
            f,
            "\n{} sizes measured, {} skipped, {} mismatches",
            self.measured_count(),
            self.skipped_count(),
            self.mismatch_count()
        )
    }
}

pub fn format_millis(elapsed: Duration) -> String {
    format!("{} ms", elapsed.as_millis())
}

impl fmt::Display for VariantTiming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.threads {
            None => write!(f, "Sequential: {}", format_millis(self.elapsed)),
            Some(threads) => write!(
                f,
                "Parallel with {} threads: {}",
                threads,
                format_millis(self.elapsed)
            ),
        }
    }
}

impl fmt::Display for SizeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            SizeOutcome::Skipped => write!(f, "{:>4} MB │ skipped", self.size_mb),
            SizeOutcome::Measured {
                sequential,
                parallel,
            } => {
                write!(
                    f,
                    "{:>4} MB │ seq {:>6}",
                    self.size_mb,
                    format_millis(sequential.elapsed)
                )?;
                for timing in parallel {
                    let threads = timing.threads.unwrap_or(1);
                    let flag = if timing.matches { "" } else { " !" };
                    write!(
                        f,
                        " │ {:>2}t {:>6}{}",
                        threads,
                        format_millis(timing.elapsed),
                        flag
                    )?;
                }
                Ok(())
            }
        }
    }
}
