//! SHA256 hashing helpers.

use sha2::{Digest, Sha256};

/// Length of a SHA256 digest in bytes.
pub const DIGEST_LEN: usize = 32;

/// Single SHA256 hash.
#[inline]
pub fn sha256(data: &[u8]) -> [u8; DIGEST_LEN] {
    Sha256::digest(data).into()
}

/// Lowercase hex rendering of a digest.
pub fn digest_to_hex(digest: &[u8; DIGEST_LEN]) -> alloc::string::String {
    hex::encode(digest)
}

/// Count leading zero bits, most significant bit of the first byte first.
pub fn leading_zero_bits(digest: &[u8]) -> u32 {
    let mut zeros = 0u32;
    for byte in digest {
        if *byte == 0 {
            zeros += 8;
        } else {
            zeros += byte.leading_zeros();
            break;
        }
    }
    zeros
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_vector() {
        let expected =
            hex::decode("2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824").unwrap();
        assert_eq!(sha256(b"hello").as_slice(), expected.as_slice());
    }

    #[test]
    fn test_digest_to_hex() {
        let digest = sha256(b"");
        assert_eq!(
            digest_to_hex(&digest),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_leading_zero_bits() {
        assert_eq!(leading_zero_bits(&[0x00; 32]), 256);

        let mut digest = [0xFF; 32];
        digest[0] = 0x00;
        digest[1] = 0x00;
        digest[2] = 0x0F;
        assert_eq!(leading_zero_bits(&digest), 20);

        assert_eq!(leading_zero_bits(&[0x80]), 0);
    }
}
