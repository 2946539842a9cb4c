//! Error types for the SDK.

use crate::types::RpcError;
use suikit_crypto::CryptoError;
use suikit_types::TypesError;
use thiserror::Error;

/// SDK result type.
pub type Result<T> = std::result::Result<T, SdkError>;

/// SDK errors.
#[derive(Error, Debug)]
pub enum SdkError {
    /// HTTP transport failure
    #[error("Connection error: {0}")]
    Connection(String),

    /// Non-200 HTTP status from the node
    #[error("HTTP status {0}")]
    HttpStatus(u16),

    /// Structured JSON-RPC error returned by the node
    #[error("RPC error: {0}")]
    Rpc(RpcError),

    /// Response body missing both result and error
    #[error("Invalid RPC response: {0}")]
    InvalidResponse(String),

    /// Cryptographic or encoding failure
    #[error(transparent)]
    Crypto(#[from] CryptoError),

    /// Type-level failure (addresses, hashes, keys)
    #[error(transparent)]
    Types(#[from] TypesError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Timed out waiting on the node
    #[error("Timeout: {0}")]
    Timeout(String),
}

impl From<reqwest::Error> for SdkError {
    fn from(e: reqwest::Error) -> Self {
        SdkError::Connection(e.to_string())
    }
}

impl From<serde_json::Error> for SdkError {
    fn from(e: serde_json::Error) -> Self {
        SdkError::Serialization(e.to_string())
    }
}
