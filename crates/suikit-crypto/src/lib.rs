//! suikit Crypto - Cryptographic core for the suikit Sui client toolkit.
//!
//! This crate provides:
//! - Ed25519 keypairs with deterministic seed derivation
//! - The flag-prefixed Base64 keystore blob codec
//! - Intent-prefixed transaction signing and the signature envelope

pub mod ed25519;
pub mod error;
pub mod intent;
pub mod keystore;

pub use ed25519::{verify as ed25519_verify, Keypair};
pub use error::CryptoError;
pub use intent::{
    sign_transaction, sign_transaction_base64, sign_with_hex_key, signing_digest,
    SignatureEnvelope, INTENT_PREFIX,
};
pub use keystore::{decode_keystore, encode_keystore, KeyInfo};
