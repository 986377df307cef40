use revbench::file_io::output_dir;
use revbench::{run_default, ConsoleReporter};

/// Runs the benchmark matrix. I/O failures and mismatches are reported but
/// never change the exit status.
pub fn handle_run() {
    let dir = output_dir();
    let reporter = ConsoleReporter::new();
    let summary = run_default(&dir, &reporter);

    if summary.mismatch_count() > 0 {
        eprintln!(
            "Warning: {} parallel run(s) did not match the sequential result.",
            summary.mismatch_count()
        );
    }
}
