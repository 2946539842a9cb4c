//! Wallet management for the SDK.

use crate::errors::Result;
use suikit_crypto::{decode_keystore, encode_keystore, intent, Keypair};
use suikit_types::{Address, Ed25519PublicKey, Ed25519Signature, SignatureScheme};

/// Wallet holding an Ed25519 keypair and its derived account address.
/// Immutable once constructed.
#[derive(Debug)]
pub struct Wallet {
    keypair: Keypair,
    address: Address,
}

impl Wallet {
    /// Create a new random wallet.
    pub fn new() -> Self {
        Self::from_keypair(Keypair::generate())
    }

    /// Build a wallet around an existing keypair.
    pub fn from_keypair(keypair: Keypair) -> Self {
        let address = keypair.address();
        Self { keypair, address }
    }

    /// Load a wallet from a 32-byte seed.
    pub fn from_seed(seed: &[u8]) -> Result<Self> {
        Ok(Self::from_keypair(Keypair::from_seed_slice(seed)?))
    }

    /// Load a wallet from a hex private key.
    pub fn from_hex(private_key_hex: &str) -> Result<Self> {
        Ok(Self::from_keypair(Keypair::from_hex(private_key_hex)?))
    }

    /// Load a wallet from a Base64 keystore blob.
    pub fn from_keystore(blob: &str) -> Result<Self> {
        Ok(Self::from_keypair(decode_keystore(blob)?.keypair()?))
    }

    /// Get the wallet address.
    pub fn address(&self) -> Address {
        self.address
    }

    /// Get the public key.
    pub fn public_key(&self) -> Ed25519PublicKey {
        self.keypair.public_key()
    }

    /// Sign arbitrary bytes. Plain Ed25519; no intent prefix.
    pub fn sign_message(&self, message: &[u8]) -> Ed25519Signature {
        self.keypair.sign(message)
    }

    /// Verify a signature against this wallet's public key.
    pub fn verify(&self, message: &[u8], signature: &Ed25519Signature) -> bool {
        self.keypair.verify(message, signature)
    }

    /// Sign raw transaction bytes with the chain's intent protocol,
    /// returning the Base64 signature envelope.
    pub fn sign_transaction(&self, tx_bytes: &[u8]) -> String {
        intent::sign_transaction(&self.keypair, tx_bytes)
    }

    /// Sign Base64 transaction bytes, as returned by the build RPC calls.
    pub fn sign_transaction_base64(&self, tx_base64: &str) -> Result<String> {
        Ok(intent::sign_transaction_base64(&self.keypair, tx_base64)?)
    }

    /// Export the private key as hex (careful!).
    pub fn export_hex(&self) -> String {
        self.keypair.to_hex()
    }

    /// Export the private key as a keystore blob (careful!).
    pub fn export_keystore(&self) -> Result<String> {
        Ok(encode_keystore(
            &self.keypair.to_hex(),
            SignatureScheme::Ed25519,
        )?)
    }
}

impl Default for Wallet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wallet_creation() {
        let wallet = Wallet::new();
        assert!(!wallet.address().is_zero());
    }

    #[test]
    fn test_wallet_known_address() {
        let wallet =
            Wallet::from_hex("0e51bb6e96264505b7c36c71d6a7f8053ed73b20f6f4476fb4f7877b8934ae6b")
                .unwrap();
        assert_eq!(
            wallet.address().to_string(),
            "0x353a47f8fedca2d8cd1352222300f06b1f36789a55fffdecc6fe414ee1998969"
        );
    }

    #[test]
    fn test_wallet_hex_roundtrip() {
        let wallet = Wallet::new();
        let imported = Wallet::from_hex(&wallet.export_hex()).unwrap();
        assert_eq!(wallet.address(), imported.address());
    }

    #[test]
    fn test_wallet_keystore_roundtrip() {
        let wallet = Wallet::new();
        let blob = wallet.export_keystore().unwrap();
        let imported = Wallet::from_keystore(&blob).unwrap();
        assert_eq!(wallet.address(), imported.address());
        assert_eq!(wallet.export_hex(), imported.export_hex());
    }

    #[test]
    fn test_wallet_from_keystore_vector() {
        let wallet = Wallet::from_keystore("AN81Pxp9PFqCh0SlRMTkfDOP0cSm7U/MxsJiqsWL0KF+").unwrap();
        assert_eq!(
            wallet.address().to_string(),
            "0x91831805d421e28461324f44f9ba5b629886a36f1015baa8c01f668118098b26"
        );
    }

    #[test]
    fn test_wallet_sign_and_verify_message() {
        let wallet = Wallet::new();
        let message = b"hello sui";

        let signature = wallet.sign_message(message);
        assert!(wallet.verify(message, &signature));
        assert!(!wallet.verify(b"other", &signature));
    }

    #[test]
    fn test_wallet_sign_transaction_envelope() {
        use base64::engine::general_purpose::STANDARD as BASE64;
        use base64::Engine;

        let wallet = Wallet::new();
        let encoded = wallet.sign_transaction(b"tx payload");

        let bytes = BASE64.decode(&encoded).unwrap();
        assert_eq!(bytes.len(), 97);
        assert_eq!(bytes[0], 0x00);
    }

    #[test]
    fn test_wallet_from_seed_bad_length() {
        assert!(Wallet::from_seed(&[0u8; 16]).is_err());
    }
}
