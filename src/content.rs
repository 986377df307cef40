/// Alphabet the synthetic test content cycles through.
pub const PATTERN: &[u8; 62] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Decimal megabyte, matching how test file sizes are labelled.
pub const BYTES_PER_MB: usize = 1_000_000;

/// Generates `len` bytes where byte `i` is `PATTERN[i % 62]`.
pub fn generate_content(len: usize) -> Vec<u8> {
    PATTERN.iter().copied().cycle().take(len).collect()
}

pub fn bytes_for_megabytes(size_mb: usize) -> usize {
    size_mb * BYTES_PER_MB
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_prefix() {
        assert_eq!(generate_content(5), b"ABCDE");
    }

    #[test]
    fn test_generate_empty() {
        assert!(generate_content(0).is_empty());
    }

    #[test]
    fn test_generate_wraps_around_pattern() {
        let content = generate_content(200);
        assert_eq!(content.len(), 200);
        assert_eq!(&content[..62], PATTERN);
        assert_eq!(content[61], b'9');
        assert_eq!(content[62], b'A');
        for (i, byte) in content.iter().enumerate() {
            assert_eq!(*byte, content[i % PATTERN.len()]);
        }
    }

    #[test]
    fn test_bytes_for_megabytes() {
        assert_eq!(bytes_for_megabytes(0), 0);
        assert_eq!(bytes_for_megabytes(5), 5_000_000);
    }
}
