//! Hashing helpers built on `rapidhash`, used for parse-cache fingerprints and snippet ids.

use rapidhash::rapidhash;

/// A fast, platform-stable 64-bit hash of `bytes`.
///
/// Used for the parse cache's fingerprint and the content-hash suffix of a snippet id.
/// Not a cryptographic hash — collision resistance at this scale is not a correctness
/// requirement, only stability across runs and platforms.
#[must_use]
pub fn hash_bytes(bytes: &[u8]) -> u64 {
    rapidhash(bytes)
}

/// An 8-hex-character content hash, as used in snippet ids (`<type>_<line>_<hash>`).
#[must_use]
pub fn short_hash_hex(bytes: &[u8]) -> String {
    format!("{:08x}", hash_bytes(bytes) & 0xFFFF_FFFF)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_hash_is_eight_hex_chars() {
        let h = short_hash_hex(b"fn main() {}");
        assert_eq!(h.len(), 8);
        assert!(h.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn hash_is_stable_for_identical_input() {
        assert_eq!(hash_bytes(b"same"), hash_bytes(b"same"));
    }
}
