use crate::error::TypesError;
use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};
use std::fmt;
use std::str::FromStr;

/// Blake2b with a 256-bit digest, the hash function the chain uses for
/// address derivation and transaction digests.
type Blake2b256 = Blake2b<U32>;

/// 32-byte Blake2b-256 digest.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Hash([u8; 32]);

impl Hash {
    pub const ZERO: Self = Self([0u8; 32]);
    pub const LEN: usize = 32;

    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Create from a byte slice
    pub fn from_slice(slice: &[u8]) -> Result<Self, TypesError> {
        if slice.len() != 32 {
            return Err(TypesError::InvalidHashLength(slice.len()));
        }
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(slice);
        Ok(Self(bytes))
    }

    /// Compute the Blake2b-256 hash of data
    pub fn compute(data: &[u8]) -> Self {
        Self::compute_multi(&[data])
    }

    /// Compute the Blake2b-256 hash of multiple concatenated slices
    pub fn compute_multi(parts: &[&[u8]]) -> Self {
        let mut hasher = Blake2b256::new();
        for part in parts {
            hasher.update(part);
        }
        Self(hasher.finalize().into())
    }

    /// Check if this is the zero hash
    pub fn is_zero(&self) -> bool {
        self == &Self::ZERO
    }

    /// Convert to hex string without 0x prefix
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash(0x{})", hex::encode(self.0))
    }
}

impl FromStr for Hash {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(s)?;
        Self::from_slice(&bytes)
    }
}

impl AsRef<[u8]> for Hash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_deterministic() {
        let h1 = Hash::compute(b"test");
        let h2 = Hash::compute(b"test");
        assert_eq!(h1, h2);
        assert!(!h1.is_zero());

        let h3 = Hash::compute(b"test2");
        assert_ne!(h1, h3);
    }

    #[test]
    fn test_compute_multi_matches_concat() {
        let h1 = Hash::compute_multi(&[b"hello ", b"world"]);
        let h2 = Hash::compute(b"hello world");
        assert_eq!(h1, h2);
    }

    #[test]
    fn test_blake2b_256_known_vector() {
        // blake2b-256("abc"), from the BLAKE2 reference test vectors
        let h = Hash::compute(b"abc");
        assert_eq!(
            h.to_hex(),
            "bddd813c634239723171ef3fee98579b94964e3bb1cb3e427262c8c068d52319"
        );
    }

    #[test]
    fn test_hex_roundtrip() {
        let h = Hash::compute(b"roundtrip");
        let parsed: Hash = h.to_string().parse().unwrap();
        assert_eq!(h, parsed);
    }

    #[test]
    fn test_from_slice_wrong_length() {
        assert_eq!(
            Hash::from_slice(&[0u8; 31]),
            Err(TypesError::InvalidHashLength(31))
        );
    }
}
