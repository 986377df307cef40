use revbench::bench::THREAD_COUNTS;
use revbench::file_io::{output_dir, remove_test_files};
use revbench::verify::verify_reversers;
use revbench::{hardware_concurrency, Result};

/// Verifies both reversers on every length up to `max_len`
pub fn handle_verify(max_len: usize) -> Result<()> {
    let mut thread_counts = vec![1];
    thread_counts.extend_from_slice(&THREAD_COUNTS);

    println!(
        "Verifying lengths 0..={} with {:?} threads ({} logical cores)...",
        max_len,
        thread_counts,
        hardware_concurrency()
    );

    let outcome = verify_reversers(max_len, &thread_counts)?;
    if !outcome.passed() {
        for (len, threads) in &outcome.failures {
            eprintln!("Mismatch: length {} with {} threads", len, threads);
        }
    }

    let checked = outcome.into_result()?;
    println!("All {} cases match", checked);
    Ok(())
}

/// Removes generated test files from the output directory
pub fn handle_clean() -> Result<()> {
    let dir = output_dir();
    let removed = remove_test_files(&dir)?;

    for path in &removed {
        println!("Removed {}", path.display());
    }
    println!("Cleanup complete: {} file(s) removed", removed.len());
    Ok(())
}
