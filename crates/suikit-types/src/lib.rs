//! suikit Types - Core type definitions for the suikit Sui client toolkit.
//!
//! This crate provides the fundamental value types used throughout suikit:
//! - Addresses (32-byte, `0x`-prefixed hex)
//! - Hashes (32-byte, Blake2b-256 digests)
//! - Ed25519 public keys and signatures
//! - Signature scheme flags

pub mod address;
pub mod error;
pub mod hash;
pub mod scheme;
pub mod signature;

pub use address::Address;
pub use error::TypesError;
pub use hash::Hash;
pub use scheme::SignatureScheme;
pub use signature::{Ed25519PublicKey, Ed25519Signature};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Address, Ed25519PublicKey, Ed25519Signature, Hash, SignatureScheme, TypesError};
}
