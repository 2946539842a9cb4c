use crate::error::TypesError;
use std::fmt;
use std::str::FromStr;

/// Signature scheme a key or signature belongs to.
///
/// The chain tags key material and signatures with a single flag byte.
/// Only Ed25519 (flag `0x00`) is supported; the enum exists so the flag
/// mapping lives in one place when more schemes arrive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SignatureScheme {
    #[default]
    Ed25519,
}

impl SignatureScheme {
    /// Flag byte prefixed to keystore blobs and signature envelopes.
    pub const fn flag(&self) -> u8 {
        match self {
            SignatureScheme::Ed25519 => 0x00,
        }
    }

    /// Canonical lowercase scheme name.
    pub const fn name(&self) -> &'static str {
        match self {
            SignatureScheme::Ed25519 => "ed25519",
        }
    }

    /// Resolve a scheme from its flag byte.
    pub fn from_flag(flag: u8) -> Result<Self, TypesError> {
        match flag {
            0x00 => Ok(SignatureScheme::Ed25519),
            other => Err(TypesError::UnsupportedSchemeFlag(other)),
        }
    }
}

impl fmt::Display for SignatureScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SignatureScheme {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ed25519" => Ok(SignatureScheme::Ed25519),
            other => Err(TypesError::UnsupportedScheme(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_mapping() {
        assert_eq!(SignatureScheme::Ed25519.flag(), 0x00);
        assert_eq!(
            SignatureScheme::from_flag(0x00),
            Ok(SignatureScheme::Ed25519)
        );
        assert_eq!(
            SignatureScheme::from_flag(0x01),
            Err(TypesError::UnsupportedSchemeFlag(0x01))
        );
    }

    #[test]
    fn test_name_roundtrip() {
        let scheme: SignatureScheme = "ed25519".parse().unwrap();
        assert_eq!(scheme, SignatureScheme::Ed25519);
        assert_eq!(scheme.to_string(), "ed25519");

        assert!("secp256k1".parse::<SignatureScheme>().is_err());
    }
}
