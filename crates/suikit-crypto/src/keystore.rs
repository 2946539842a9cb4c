use crate::ed25519::Keypair;
use crate::error::CryptoError;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use suikit_types::SignatureScheme;

/// Decoded keystore record.
///
/// The keystore wire format is `base64(flag_byte || private_key)`: one
/// scheme flag byte followed by the 32-byte private key. This is the
/// format `sui.keystore` entries and the `sui keytool convert` command
/// use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInfo {
    /// Original Base64 blob, flag included, preserved verbatim.
    pub base64_with_flag: String,
    /// Hex encoding of the 32-byte private key, flag stripped.
    pub private_key_hex: String,
    /// Signature scheme named by the flag byte.
    pub scheme: SignatureScheme,
}

impl KeyInfo {
    /// Build a keypair from the decoded private key.
    pub fn keypair(&self) -> Result<Keypair, CryptoError> {
        Keypair::from_hex(&self.private_key_hex)
    }
}

/// Decoded blob length: 1 flag byte + 32 key bytes.
const KEYSTORE_BLOB_LEN: usize = 1 + 32;

/// Decode a Base64 keystore blob into its key info.
pub fn decode_keystore(blob: &str) -> Result<KeyInfo, CryptoError> {
    let bytes = BASE64.decode(blob)?;

    if bytes.len() != KEYSTORE_BLOB_LEN {
        return Err(CryptoError::InvalidKeyLength {
            expected: KEYSTORE_BLOB_LEN,
            actual: bytes.len(),
        });
    }

    let scheme = SignatureScheme::from_flag(bytes[0])
        .map_err(|_| CryptoError::UnsupportedSchemeFlag(bytes[0]))?;

    Ok(KeyInfo {
        base64_with_flag: blob.to_string(),
        private_key_hex: hex::encode(&bytes[1..]),
        scheme,
    })
}

/// Encode a hex private key into the Base64 keystore blob format.
/// The reverse of [`decode_keystore`].
pub fn encode_keystore(
    private_key_hex: &str,
    scheme: SignatureScheme,
) -> Result<String, CryptoError> {
    let key = hex::decode(private_key_hex)?;

    if key.len() != 32 {
        return Err(CryptoError::InvalidKeyLength {
            expected: 32,
            actual: key.len(),
        });
    }

    let mut bytes = Vec::with_capacity(KEYSTORE_BLOB_LEN);
    bytes.push(scheme.flag());
    bytes.extend_from_slice(&key);

    Ok(BASE64.encode(bytes))
}
