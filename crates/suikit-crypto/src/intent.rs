//! Transaction signing with the chain's intent-prefix protocol.
//!
//! Unsigned transaction bytes are never signed directly: a fixed 3-byte
//! intent prefix is prepended, the result is hashed with Blake2b-256, and
//! the digest is what the Ed25519 key signs. The submitted signature is a
//! Base64 envelope of `flag || signature || public_key`.

use crate::ed25519::Keypair;
use crate::error::CryptoError;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use suikit_types::{Ed25519PublicKey, Ed25519Signature, Hash, SignatureScheme};

/// Intent prefix for transaction data: intent scope, version, and app id,
/// all zero. Protocol-fixed, identical across mainnet/testnet/devnet.
pub const INTENT_PREFIX: [u8; 3] = [0x00, 0x00, 0x00];

/// Compute the digest the chain expects a transaction signature to cover:
/// `blake2b_256(intent_prefix || tx_bytes)`. Empty `tx_bytes` is valid;
/// payload validity is the chain's call, not ours.
pub fn signing_digest(tx_bytes: &[u8]) -> Hash {
    Hash::compute_multi(&[&INTENT_PREFIX, tx_bytes])
}

/// Sign raw transaction bytes, producing the Base64 signature envelope
/// ready for `sui_executeTransactionBlock`.
pub fn sign_transaction(keypair: &Keypair, tx_bytes: &[u8]) -> String {
    let digest = signing_digest(tx_bytes);
    let signature = keypair.sign(digest.as_bytes());
    SignatureEnvelope::new(signature, keypair.public_key()).to_base64()
}

/// Sign Base64-encoded transaction bytes, as returned by the `unsafe_`
/// transaction-build RPC methods.
pub fn sign_transaction_base64(keypair: &Keypair, tx_base64: &str) -> Result<String, CryptoError> {
    let tx_bytes = BASE64.decode(tx_base64)?;
    Ok(sign_transaction(keypair, &tx_bytes))
}

/// One-shot signing from a hex private key and Base64 transaction bytes.
pub fn sign_with_hex_key(private_key_hex: &str, tx_base64: &str) -> Result<String, CryptoError> {
    let keypair = Keypair::from_hex(private_key_hex)?;
    sign_transaction_base64(&keypair, tx_base64)
}

/// Serialized signature the chain accepts alongside transaction bytes:
/// `flag(1) || signature(64) || public_key(32)`, 97 bytes, Base64 on the
/// wire. Built fresh per signing call and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignatureEnvelope {
    pub scheme: SignatureScheme,
    pub signature: Ed25519Signature,
    pub public_key: Ed25519PublicKey,
}

impl SignatureEnvelope {
    pub const LEN: usize = 1 + Ed25519Signature::LEN + Ed25519PublicKey::LEN;

    pub fn new(signature: Ed25519Signature, public_key: Ed25519PublicKey) -> Self {
        Self {
            scheme: SignatureScheme::Ed25519,
            signature,
            public_key,
        }
    }

    pub fn to_bytes(&self) -> [u8; Self::LEN] {
        let mut bytes = [0u8; Self::LEN];
        bytes[0] = self.scheme.flag();
        bytes[1..65].copy_from_slice(self.signature.as_bytes());
        bytes[65..].copy_from_slice(self.public_key.as_bytes());
        bytes
    }

    pub fn to_base64(&self) -> String {
        BASE64.encode(self.to_bytes())
    }

    /// Parse a Base64 envelope back into its parts.
    pub fn from_base64(encoded: &str) -> Result<Self, CryptoError> {
        let bytes = BASE64.decode(encoded)?;
        if bytes.len() != Self::LEN {
            return Err(CryptoError::InvalidKeyLength {
                expected: Self::LEN,
                actual: bytes.len(),
            });
        }
        let scheme = SignatureScheme::from_flag(bytes[0])
            .map_err(|_| CryptoError::UnsupportedSchemeFlag(bytes[0]))?;
        Ok(Self {
            scheme,
            signature: Ed25519Signature::from_slice(&bytes[1..65])?,
            public_key: Ed25519PublicKey::from_slice(&bytes[65..])?,
        })
    }

    /// Verify the envelope against the transaction bytes it claims to
    /// cover, using the public key it carries.
    pub fn verify(&self, tx_bytes: &[u8]) -> Result<(), CryptoError> {
        let digest = signing_digest(tx_bytes);
        crate::ed25519::verify(&self.public_key, digest.as_bytes(), &self.signature)
    }
}
