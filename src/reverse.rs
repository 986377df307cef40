use std::ops::Range;
use std::thread::{self, ScopedJoinHandle};

use crate::error::{BenchError, Result};

/// Number of logical CPUs reported by the OS, or 1 if unknown.
pub fn hardware_concurrency() -> usize {
    thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

pub fn sequential_reverse(input: &[u8]) -> Vec<u8> {
    let mut result = input.to_vec();
    result.reverse();
    result
}

/// Splits `[0, len)` into `parts` contiguous ranges. Each range holds
/// `len / parts` elements and the first `len % parts` get one more.
/// Ranges are empty when `parts > len`.
pub fn partition(len: usize, parts: usize) -> Vec<Range<usize>> {
    if parts == 0 {
        return Vec::new();
    }

    let per_part = len / parts;
    let remainder = len % parts;

    let mut ranges = Vec::with_capacity(parts);
    let mut start = 0;
    for i in 0..parts {
        let end = start + per_part + usize::from(i < remainder);
        ranges.push(start..end);
        start = end;
    }
    ranges
}

/// Number of workers `parallel_reverse` launches for `len` bytes when asked
/// for `requested` threads: capped by hardware concurrency and by `len`.
pub fn effective_threads(len: usize, requested: usize) -> usize {
    requested.min(hardware_concurrency()).min(len)
}

/// Reverses `input` with one scoped thread per partition.
///
/// The worker for input range `[start, end)` fills output range
/// `[len - end, len - start)`, so every worker owns a disjoint slice of the
/// output and no synchronisation is needed beyond the final join.
pub fn parallel_reverse(input: &[u8], threads: usize) -> Result<Vec<u8>> {
    if threads == 0 {
        return Err(BenchError::InvalidThreadCount(threads));
    }

    let len = input.len();
    let workers = effective_threads(len, threads);
    let mut output = vec![0u8; len];
    if workers == 0 {
        return Ok(output);
    }

    let ranges = partition(len, workers);
    crate::debug_log!(
        "parallel_reverse: {} bytes, {} requested, {} workers, ranges {:?}",
        len,
        threads,
        workers,
        ranges
    );

    let mut rest: &mut [u8] = &mut output;
    thread::scope(|scope| -> Result<()> {
        let mut handles = Vec::with_capacity(workers);

        // The last input range maps to the front of the output.
        for (index, range) in ranges.iter().enumerate().rev() {
            let (chunk, tail) = std::mem::take(&mut rest).split_at_mut(range.len());
            rest = tail;
            let source = &input[range.clone()];

            let handle = scope.spawn(move || reverse_segment(source, chunk));
            handles.push((index, handle));
        }

        join_workers(handles)
    })?;

    Ok(output)
}

/// Joins every worker, even after a failure, and returns the first panic seen.
fn join_workers(handles: Vec<(usize, ScopedJoinHandle<'_, ()>)>) -> Result<()> {
    let mut first_error = None;
    for (index, handle) in handles {
        if handle.join().is_err() && first_error.is_none() {
            first_error = Some(BenchError::WorkerPanicked(index));
        }
    }
    first_error.map_or(Ok(()), Err)
}

fn reverse_segment(source: &[u8], dest: &mut [u8]) {
    for (dst, src) in dest.iter_mut().zip(source.iter().rev()) {
        *dst = *src;
    }
}
