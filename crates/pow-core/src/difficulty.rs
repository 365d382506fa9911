//! Leading-zero-bit difficulty checks.

use crate::error::{Result, SolveError};

/// Highest supported difficulty: one bit per bit of a SHA256 digest.
pub const MAX_DIFFICULTY: u32 = 256;

/// Reject difficulties outside `1..=MAX_DIFFICULTY`.
pub fn validate_difficulty(difficulty: u32) -> Result<()> {
    if difficulty == 0 || difficulty > MAX_DIFFICULTY {
        return Err(SolveError::DifficultyOutOfRange { difficulty });
    }
    Ok(())
}

/// Check if a digest starts with at least `difficulty` zero bits.
///
/// The first `difficulty / 8` bytes must be zero, and when the difficulty is
/// not byte aligned the top `difficulty % 8` bits of the next byte must be
/// zero as well. A difficulty wider than the digest never matches.
#[inline]
pub fn meets_difficulty(digest: &[u8], difficulty: u32) -> bool {
    let full_bytes = (difficulty / 8) as usize;
    let remaining_bits = difficulty % 8;

    if full_bytes > digest.len() {
        return false;
    }

    if digest[..full_bytes].iter().any(|&byte| byte != 0x00) {
        return false;
    }

    if remaining_bits == 0 {
        return true;
    }

    match digest.get(full_bytes) {
        Some(&byte) => {
            let mask = 0xFFu8 << (8 - remaining_bits);
            byte & mask == 0x00
        }
        None => false,
    }
}

/// Largest power of two an `f64` can hold is 2^1023.
const MAX_FINITE_EXPONENT: u32 = 1023;

/// Average number of candidates needed to hit a difficulty (2^difficulty).
///
/// Saturates to infinity past 2^1023.
pub fn expected_attempts(difficulty: u32) -> f64 {
    if difficulty > MAX_FINITE_EXPONENT {
        return f64::INFINITY;
    }
    let mut attempts = 1.0f64;
    for _ in 0..difficulty {
        attempts *= 2.0;
    }
    attempts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digest_with_prefix(prefix: &[u8]) -> [u8; 32] {
        let mut digest = [0xFFu8; 32];
        digest[..prefix.len()].copy_from_slice(prefix);
        digest
    }

    #[test]
    fn test_validate_difficulty() {
        assert!(validate_difficulty(1).is_ok());
        assert!(validate_difficulty(256).is_ok());
        assert_eq!(
            validate_difficulty(0),
            Err(SolveError::DifficultyOutOfRange { difficulty: 0 })
        );
        assert_eq!(
            validate_difficulty(257),
            Err(SolveError::DifficultyOutOfRange { difficulty: 257 })
        );
    }

    #[test]
    fn test_byte_aligned() {
        let digest = digest_with_prefix(&[0x00, 0x00]);
        assert!(meets_difficulty(&digest, 8));
        assert!(meets_difficulty(&digest, 16));
        assert!(!meets_difficulty(&digest, 17));
        assert!(!meets_difficulty(&digest, 24));
    }

    #[test]
    fn test_remainder_masks() {
        // 0x0F = 0b0000_1111: four zero bits after two zero bytes
        let digest = digest_with_prefix(&[0x00, 0x00, 0x0F]);

        // mask 0xF0
        assert!(meets_difficulty(&digest, 20));
        // masks 0xF8, 0xFC, 0xFE, 0xFF all overlap the low nibble
        for difficulty in 21..=24 {
            assert!(!meets_difficulty(&digest, difficulty), "difficulty {}", difficulty);
        }
    }

    #[test]
    fn test_single_top_bit() {
        assert!(meets_difficulty(&digest_with_prefix(&[0x7F]), 1));
        assert!(!meets_difficulty(&digest_with_prefix(&[0x80]), 1));
    }

    #[test]
    fn test_full_width() {
        let zeros = [0u8; 32];
        assert!(meets_difficulty(&zeros, 256));

        let mut last_set = [0u8; 32];
        last_set[31] = 0x01;
        assert!(meets_difficulty(&last_set, 255));
        assert!(!meets_difficulty(&last_set, 256));
    }

    #[test]
    fn test_wider_than_digest() {
        let short = [0u8; 4];
        assert!(meets_difficulty(&short, 32));
        assert!(!meets_difficulty(&short, 33));
        assert!(!meets_difficulty(&short, 40));
        assert!(!meets_difficulty(&[], 1));
    }

    #[test]
    fn test_monotonic() {
        let digests = [
            digest_with_prefix(&[0x00, 0x00, 0x0F]),
            digest_with_prefix(&[0x00, 0x3A]),
            digest_with_prefix(&[0x01]),
            [0u8; 32],
        ];

        for digest in &digests {
            for strict in 1..=MAX_DIFFICULTY {
                if meets_difficulty(digest, strict) {
                    for loose in 1..strict {
                        assert!(meets_difficulty(digest, loose));
                    }
                }
            }
        }
    }

    #[test]
    fn test_expected_attempts() {
        assert_eq!(expected_attempts(0), 1.0);
        assert_eq!(expected_attempts(1), 2.0);
        assert_eq!(expected_attempts(22), 4_194_304.0);
    }

    #[test]
    fn test_expected_attempts_saturates() {
        assert!(expected_attempts(1023).is_finite());
        assert_eq!(expected_attempts(1024), f64::INFINITY);
        assert_eq!(expected_attempts(u32::MAX), f64::INFINITY);
    }
}
