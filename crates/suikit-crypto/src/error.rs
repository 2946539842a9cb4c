use suikit_types::TypesError;
use thiserror::Error;

/// Errors that can occur in cryptographic operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CryptoError {
    #[error("Invalid encoding: {0}")]
    InvalidEncoding(String),

    #[error("Invalid key length: expected {expected}, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    #[error("Invalid seed length: expected 32, got {0}")]
    InvalidSeedLength(usize),

    #[error("Unsupported signature scheme flag: 0x{0:02x}")]
    UnsupportedSchemeFlag(u8),

    #[error("Signature verification failed")]
    VerificationFailed,

    /// Unused with Ed25519 alone; kept so multi-scheme signers have a
    /// failure variant to map onto.
    #[error("Signing failed: {0}")]
    SigningFailure(String),

    #[error("Type error: {0}")]
    Types(#[from] TypesError),
}

impl From<hex::FromHexError> for CryptoError {
    fn from(e: hex::FromHexError) -> Self {
        CryptoError::InvalidEncoding(format!("hex: {}", e))
    }
}

impl From<base64::DecodeError> for CryptoError {
    fn from(e: base64::DecodeError) -> Self {
        CryptoError::InvalidEncoding(format!("base64: {}", e))
    }
}

impl From<ed25519_dalek::SignatureError> for CryptoError {
    fn from(_: ed25519_dalek::SignatureError) -> Self {
        CryptoError::VerificationFailed
    }
}
