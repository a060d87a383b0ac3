//! # Secret Scalar
//!
//! The 32-byte private secret behind a token id. Each accepted input format
//! has its own constructor; callers pick the format explicitly.
//!
//! ## Security
//!
//! - The bytes are zeroized when the value is dropped.
//! - `Debug` is redacted and there is no `Display`.
//! - Equality is constant time.

use crate::errors::EncodingError;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use bip39::{Language, Mnemonic};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Width of a secret, in bytes.
pub const SECRET_LEN: usize = 32;

/// A 32-byte big-endian private secret.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretScalar([u8; SECRET_LEN]);

impl SecretScalar {
    pub fn from_bytes(bytes: [u8; SECRET_LEN]) -> Self {
        Self(bytes)
    }

    /// Accepts exactly 32 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, EncodingError> {
        if bytes.len() != SECRET_LEN {
            return Err(EncodingError::InvalidSecretEncoding("secret must be 32 bytes"));
        }
        let mut out = [0u8; SECRET_LEN];
        out.copy_from_slice(bytes);
        Ok(Self(out))
    }

    /// Parse `0x`-prefixed hex.
    pub fn from_hex(s: &str) -> Result<Self, EncodingError> {
        let digits = s
            .trim()
            .strip_prefix("0x")
            .ok_or(EncodingError::InvalidSecretEncoding("hex secret needs 0x prefix"))?;
        let bytes = Zeroizing::new(
            hex::decode(digits).map_err(|_| EncodingError::InvalidSecretEncoding("invalid hex"))?,
        );
        Self::from_slice(&bytes)
    }

    /// Parse standard (padded) base64.
    pub fn from_base64(s: &str) -> Result<Self, EncodingError> {
        let bytes = Zeroizing::new(
            BASE64
                .decode(s.trim())
                .map_err(|_| EncodingError::InvalidSecretEncoding("invalid base64"))?,
        );
        Self::from_slice(&bytes)
    }

    /// SHA-256 of the UTF-8 phrase.
    ///
    /// Brain seeds are guessable; only use them for throwaway keys.
    pub fn from_brainseed(phrase: &str) -> Self {
        let digest = Sha256::digest(phrase.as_bytes());
        let mut out = [0u8; SECRET_LEN];
        out.copy_from_slice(&digest);
        Self(out)
    }

    /// Recover the secret from a 24-word English BIP-39 mnemonic.
    ///
    /// The mnemonic encodes the raw secret as entropy; no seed stretching.
    pub fn from_mnemonic(phrase: &str) -> Result<Self, EncodingError> {
        let mnemonic = Mnemonic::from_phrase(phrase.trim(), Language::English)
            .map_err(|_| EncodingError::InvalidSecretEncoding("invalid mnemonic"))?;
        Self::from_slice(mnemonic.entropy())
    }

    pub fn as_bytes(&self) -> &[u8; SECRET_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> Zeroizing<String> {
        Zeroizing::new(format!("0x{}", hex::encode(self.0)))
    }

    pub fn to_base64(&self) -> Zeroizing<String> {
        Zeroizing::new(BASE64.encode(self.0))
    }

    /// 24-word English mnemonic for the secret bytes.
    pub fn to_mnemonic(&self) -> Result<Zeroizing<String>, EncodingError> {
        let mnemonic = Mnemonic::from_entropy(&self.0, Language::English)
            .map_err(|_| EncodingError::InvalidSecretEncoding("mnemonic encoding failed"))?;
        Ok(Zeroizing::new(mnemonic.phrase().to_string()))
    }
}

impl PartialEq for SecretScalar {
    fn eq(&self, other: &Self) -> bool {
        self.0.ct_eq(&other.0).into()
    }
}

impl Eq for SecretScalar {}

impl std::fmt::Debug for SecretScalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SecretScalar([REDACTED])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn one() -> SecretScalar {
        let mut bytes = [0u8; 32];
        bytes[31] = 1;
        SecretScalar::from_bytes(bytes)
    }

    /// Test: Debug never prints key material
    #[test]
    fn test_debug_is_redacted() {
        let rendered = format!("{:?}", one());
        assert_eq!(rendered, "SecretScalar([REDACTED])");
        assert!(!rendered.contains("01"));
    }

    #[test]
    fn test_hex_parser() {
        let hex = format!("0x{}01", "00".repeat(31));
        let secret = SecretScalar::from_hex(&hex).unwrap();
        assert_eq!(secret, one());
        assert_eq!(secret.to_hex().as_str(), hex);

        assert!(SecretScalar::from_hex(&hex[2..]).is_err());
        assert!(SecretScalar::from_hex("0x0102").is_err());
        assert!(SecretScalar::from_hex(&format!("0x{}", "gg".repeat(32))).is_err());
    }

    #[test]
    fn test_base64_parser() {
        let b64 = one().to_base64();
        assert_eq!(b64.as_str(), "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAE=");
        assert_eq!(SecretScalar::from_base64(&b64).unwrap(), one());

        // 31 bytes
        let short = BASE64.encode([7u8; 31]);
        assert_eq!(
            SecretScalar::from_base64(&short),
            Err(EncodingError::InvalidSecretEncoding("secret must be 32 bytes"))
        );
        assert!(SecretScalar::from_base64("not base64!").is_err());
    }

    /// Test: brain seed is sha256 of the phrase
    #[test]
    fn test_brainseed() {
        let secret = SecretScalar::from_brainseed("abc");
        assert_eq!(
            hex::encode(secret.as_bytes()),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_mnemonic_round_trip() {
        let phrase = one().to_mnemonic().unwrap();
        assert_eq!(phrase.split_whitespace().count(), 24);
        assert_eq!(SecretScalar::from_mnemonic(&phrase).unwrap(), one());
        assert!(SecretScalar::from_mnemonic("abandon abandon").is_err());
    }

    /// Test: 12-word mnemonics decode to 16 bytes and are rejected
    #[test]
    fn test_mnemonic_rejects_short_entropy() {
        let twelve = "abandon abandon abandon abandon abandon abandon \
                      abandon abandon abandon abandon abandon about";
        assert!(matches!(
            SecretScalar::from_mnemonic(twelve),
            Err(EncodingError::InvalidSecretEncoding(_))
        ));
    }

    proptest! {
        #[test]
        fn prop_text_encodings_are_lossless(bytes in any::<[u8; 32]>()) {
            let secret = SecretScalar::from_bytes(bytes);
            prop_assert_eq!(&SecretScalar::from_hex(&secret.to_hex()).unwrap(), &secret);
            prop_assert_eq!(&SecretScalar::from_base64(&secret.to_base64()).unwrap(), &secret);
            prop_assert_eq!(&SecretScalar::from_mnemonic(&secret.to_mnemonic().unwrap()).unwrap(), &secret);
        }
    }
}
