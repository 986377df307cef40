use crate::content::generate_content;
use crate::error::{BenchError, Result};
use crate::reverse::{parallel_reverse, sequential_reverse};

pub const DEFAULT_MAX_LEN: usize = 257;

#[derive(Debug, Default)]
pub struct VerifyOutcome {
    pub checked: usize,
    pub failures: Vec<(usize, usize)>,
}

impl VerifyOutcome {
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }

    /// The first failing case as an error, if any.
    pub fn into_result(self) -> Result<usize> {
        match self.failures.first() {
            Some(&(len, threads)) => Err(BenchError::Mismatch { len, threads }),
            None => Ok(self.checked),
        }
    }
}

/// Checks every length in `0..=max_len` against every thread count, in memory.
pub fn verify_reversers(max_len: usize, thread_counts: &[usize]) -> Result<VerifyOutcome> {
    let mut outcome = VerifyOutcome::default();

    for len in 0..=max_len {
        let input = generate_content(len);
        let expected = sequential_reverse(&input);
        if sequential_reverse(&expected) != input {
            outcome.failures.push((len, 1));
        }

        for &threads in thread_counts {
            let actual = parallel_reverse(&input, threads)?;
            if actual != expected {
                crate::debug_log!("verify mismatch: len {} threads {}", len, threads);
                outcome.failures.push((len, threads));
            }
            outcome.checked += 1;
        }
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_passes() {
        let outcome = verify_reversers(64, &[1, 2, 4, 8, 16]).unwrap();
        assert!(outcome.passed());
        assert_eq!(outcome.checked, 65 * 5);
        assert_eq!(outcome.into_result().unwrap(), 65 * 5);
    }

    #[test]
    fn test_verify_rejects_zero_threads() {
        assert!(matches!(
            verify_reversers(4, &[0]),
            Err(BenchError::InvalidThreadCount(0))
        ));
    }

    #[test]
    fn test_failure_becomes_mismatch_error() {
        let outcome = VerifyOutcome {
            checked: 3,
            failures: vec![(7, 2)],
        };
        assert!(!outcome.passed());
        assert!(matches!(
            outcome.into_result(),
            Err(BenchError::Mismatch { len: 7, threads: 2 })
        ));
    }
}
