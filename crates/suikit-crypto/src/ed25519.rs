use crate::error::CryptoError;
use ed25519_dalek::{Signer, Verifier};
use rand::rngs::OsRng;
use std::fmt;
use suikit_types::{Address, Ed25519PublicKey, Ed25519Signature};
use zeroize::Zeroize;

/// Ed25519 keypair for account derivation and transaction signing.
/// Private key is zeroized on drop.
pub struct Keypair {
    signing_key: ed25519_dalek::SigningKey,
}

impl Keypair {
    /// Generate a new random keypair
    pub fn generate() -> Self {
        let mut csprng = OsRng;
        let signing_key = ed25519_dalek::SigningKey::generate(&mut csprng);
        Self { signing_key }
    }

    /// Create from a 32-byte seed (RFC 8032 key expansion)
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        let signing_key = ed25519_dalek::SigningKey::from_bytes(seed);
        Self { signing_key }
    }

    /// Create from a seed slice, rejecting anything but exactly 32 bytes
    pub fn from_seed_slice(seed: &[u8]) -> Result<Self, CryptoError> {
        let seed: &[u8; 32] = seed
            .try_into()
            .map_err(|_| CryptoError::InvalidSeedLength(seed.len()))?;
        Ok(Self::from_seed(seed))
    }

    /// Create from a hex-encoded 32-byte private key
    pub fn from_hex(private_key_hex: &str) -> Result<Self, CryptoError> {
        let hex = private_key_hex.strip_prefix("0x").unwrap_or(private_key_hex);
        let mut bytes = hex::decode(hex)?;
        let keypair = Self::from_seed_slice(&bytes);
        bytes.zeroize();
        keypair
    }

    /// Get the public key
    pub fn public_key(&self) -> Ed25519PublicKey {
        let bytes = self.signing_key.verifying_key().to_bytes();
        Ed25519PublicKey::from_bytes(bytes)
    }

    /// Get the account address derived from this keypair
    pub fn address(&self) -> Address {
        Address::from_public_key(&self.public_key())
    }

    /// Sign a message. Plain Ed25519 over the bytes exactly as given;
    /// transaction intent framing is the signer module's job.
    pub fn sign(&self, message: &[u8]) -> Ed25519Signature {
        let signature = self.signing_key.sign(message);
        Ed25519Signature::from_bytes(signature.to_bytes())
    }

    /// Verify a signature against this keypair's own public key.
    pub fn verify(&self, message: &[u8], signature: &Ed25519Signature) -> bool {
        verify(&self.public_key(), message, signature).is_ok()
    }

    /// Export private key bytes (CAUTION: sensitive)
    pub fn to_bytes(&self) -> [u8; 32] {
        self.signing_key.to_bytes()
    }

    /// Export the private key as hex (CAUTION: sensitive)
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }
}

impl fmt::Debug for Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Keypair({})", self.address())
    }
}

impl Clone for Keypair {
    fn clone(&self) -> Self {
        Self::from_seed(&self.to_bytes())
    }
}

impl Drop for Keypair {
    fn drop(&mut self) {
        let mut bytes = self.signing_key.to_bytes();
        bytes.zeroize();
    }
}

/// Verify an ed25519 signature.
pub fn verify(
    public_key: &Ed25519PublicKey,
    message: &[u8],
    signature: &Ed25519Signature,
) -> Result<(), CryptoError> {
    let pk = ed25519_dalek::VerifyingKey::from_bytes(public_key.as_bytes())?;
    let sig = ed25519_dalek::Signature::from_bytes(signature.as_bytes());
    pk.verify(message, &sig)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_keypair_generation() {
        let keypair = Keypair::generate();
        assert!(!keypair.address().is_zero());
        assert!(!keypair.public_key().is_zero());
    }

    #[test]
    fn test_keypair_from_seed_deterministic() {
        let seed = [42u8; 32];
        let kp1 = Keypair::from_seed(&seed);
        let kp2 = Keypair::from_seed(&seed);

        assert_eq!(kp1.public_key(), kp2.public_key());
        assert_eq!(kp1.address(), kp2.address());
        assert_eq!(kp1.sign(b"msg"), kp2.sign(b"msg"));
    }

    #[test]
    fn test_from_seed_slice_rejects_bad_length() {
        assert_eq!(
            Keypair::from_seed_slice(&[0u8; 31]).unwrap_err(),
            CryptoError::InvalidSeedLength(31)
        );
        assert_eq!(
            Keypair::from_seed_slice(&[0u8; 33]).unwrap_err(),
            CryptoError::InvalidSeedLength(33)
        );
    }

    #[test]
    fn test_from_hex_rejects_bad_hex() {
        assert!(matches!(
            Keypair::from_hex("not-hex").unwrap_err(),
            CryptoError::InvalidEncoding(_)
        ));
    }

    #[test]
    fn test_known_address_vector_1() {
        let kp =
            Keypair::from_hex("0e51bb6e96264505b7c36c71d6a7f8053ed73b20f6f4476fb4f7877b8934ae6b")
                .unwrap();
        assert_eq!(
            kp.address().to_string(),
            "0x353a47f8fedca2d8cd1352222300f06b1f36789a55fffdecc6fe414ee1998969"
        );
    }

    #[test]
    fn test_known_address_vector_2() {
        // Leading zero byte in the private key
        let kp =
            Keypair::from_hex("00375b3392d6463bb2d1a8e2ae66f1f83a388bc9ab4d4d0b8a378757350b37f7")
                .unwrap();
        assert_eq!(
            kp.address().to_string(),
            "0x19795c983a7a50c0be1fb4b3d040faa5150d8d9a39fbdb613397a4e74574d91b"
        );
    }

    #[test]
    fn test_known_address_vector_3() {
        let kp =
            Keypair::from_hex("e4c450f61ba740ae8cc1af0b0fb6a135012747b302154410ad635bde12b411c9")
                .unwrap();
        assert_eq!(
            kp.address().to_string(),
            "0xe9507e4d5add8cf5570a4d302550fb9a8ad778a101550c1e377ca4e354c404e6"
        );
    }

    #[test]
    fn test_sign_and_verify() {
        let keypair = Keypair::generate();
        let message = b"hello sui";

        let signature = keypair.sign(message);
        assert!(!signature.is_zero());
        assert!(keypair.verify(message, &signature));

        // Wrong message should fail
        assert!(!keypair.verify(b"wrong message", &signature));

        // Tampered signature should fail
        let mut bad = *signature.as_bytes();
        bad[0] ^= 0x01;
        assert!(!keypair.verify(message, &Ed25519Signature::from_bytes(bad)));
    }

    #[test]
    fn test_verify_fn_wrong_key() {
        let kp1 = Keypair::generate();
        let kp2 = Keypair::generate();

        let sig = kp1.sign(b"payload");
        assert!(verify(&kp1.public_key(), b"payload", &sig).is_ok());
        assert_eq!(
            verify(&kp2.public_key(), b"payload", &sig).unwrap_err(),
            CryptoError::VerificationFailed
        );
    }

    #[test]
    fn test_hex_roundtrip() {
        let kp = Keypair::generate();
        let restored = Keypair::from_hex(&kp.to_hex()).unwrap();
        assert_eq!(kp.address(), restored.address());
    }

    #[test]
    fn test_keypair_clone() {
        let kp1 = Keypair::generate();
        let kp2 = kp1.clone();
        assert_eq!(kp1.public_key(), kp2.public_key());
        assert_eq!(kp1.sign(b"test"), kp2.sign(b"test"));
    }

    proptest! {
        #[test]
        fn prop_determinism(seed in prop::array::uniform32(any::<u8>())) {
            let kp1 = Keypair::from_seed(&seed);
            let kp2 = Keypair::from_seed(&seed);
            prop_assert_eq!(kp1.address(), kp2.address());
            prop_assert_eq!(kp1.public_key(), kp2.public_key());
        }

        #[test]
        fn prop_address_format(seed in prop::array::uniform32(any::<u8>())) {
            let addr = Keypair::from_seed(&seed).address().to_string();
            prop_assert_eq!(addr.len(), 66);
            prop_assert!(addr.starts_with("0x"));
            prop_assert!(addr[2..].chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
        }

        #[test]
        fn prop_sign_verify(seed in prop::array::uniform32(any::<u8>()), msg in prop::collection::vec(any::<u8>(), 0..256)) {
            let kp = Keypair::from_seed(&seed);
            let sig = kp.sign(&msg);
            prop_assert!(kp.verify(&msg, &sig));
        }
    }
}
