use crate::error::TypesError;
use crate::hash::Hash;
use crate::scheme::SignatureScheme;
use crate::signature::Ed25519PublicKey;
use std::fmt;
use std::str::FromStr;

/// 32-byte account address derived from an ed25519 public key.
/// Display format: `0x` + 64 lowercase hex characters (66 total).
///
/// # Derivation
/// `address = blake2b_256(scheme_flag || ed25519_pubkey)`
///
/// The flag byte scopes the hash to the address-derivation domain; it is
/// distinct in meaning from the signature-envelope flag even though both
/// are `0x00` for Ed25519.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Address([u8; 32]);

impl Address {
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
            return Err(TypesError::InvalidAddressLength(slice.len()));
        }
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(slice);
        Ok(Self(bytes))
    }

    /// Derive the account address from an ed25519 public key.
    /// Blake2b-256 over the scheme flag byte followed by the key.
    pub fn from_public_key(pubkey: &Ed25519PublicKey) -> Self {
        let flag = [SignatureScheme::Ed25519.flag()];
        let hash = Hash::compute_multi(&[&flag, pubkey.as_bytes()]);
        Self(*hash.as_bytes())
    }

    /// Check if this is the zero address
    pub fn is_zero(&self) -> bool {
        self == &Self::ZERO
    }

    /// Convert to hex string without 0x prefix
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address(0x{})", hex::encode(self.0))
    }
}

impl fmt::LowerHex for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl FromStr for Address {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some(stripped) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) else {
            return Err(TypesError::InvalidAddressFormat(s.to_string()));
        };
        let bytes = hex::decode(stripped)?;
        Self::from_slice(&bytes)
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
