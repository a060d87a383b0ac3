//! # Symmetric Encryption
//!
//! Deoxys-II-256-128 authenticated encryption, the cipher the issuing
//! contract seals revealed secrets with.
//!
//! ## Security Properties
//!
//! - **Deoxys-II**: 120-bit nonce, 128-bit tag, nonce-misuse resistant
//! - No associated data is bound; callers that need it must extend the API

use crate::CryptoError;
use deoxys::{
    aead::{Aead, Key, KeyInit, Nonce as AeadNonce},
    DeoxysII256,
};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Deoxys-II nonce length in bytes.
pub const NONCE_SIZE: usize = 15;

/// Authentication tag length in bytes.
pub const TAG_SIZE: usize = 16;

/// Secret key (256-bit).
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey([u8; 32]);

impl SecretKey {
    /// Create from bytes.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get inner bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl std::fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SecretKey([REDACTED])")
    }
}

/// Nonce for encryption.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Nonce([u8; NONCE_SIZE]);

impl Nonce {
    /// Create from bytes.
    pub fn from_bytes(bytes: [u8; NONCE_SIZE]) -> Self {
        Self(bytes)
    }

    /// Get inner bytes.
    pub fn as_bytes(&self) -> &[u8; NONCE_SIZE] {
        &self.0
    }
}

/// Encrypt plaintext with Deoxys-II-256-128.
///
/// Returns `ciphertext || tag`.
///
/// # Errors
///
/// Returns `CryptoError::EncryptionFailed` if encryption fails.
pub fn encrypt(key: &SecretKey, nonce: &Nonce, plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
    let cipher = DeoxysII256::new(Key::<DeoxysII256>::from_slice(key.as_bytes()));

    cipher
        .encrypt(AeadNonce::<DeoxysII256>::from_slice(nonce.as_bytes()), plaintext)
        .map_err(|_| CryptoError::EncryptionFailed)
}

/// Decrypt `ciphertext || tag` with Deoxys-II-256-128.
///
/// # Errors
///
/// Returns `CryptoError::DecryptionFailed` for a wrong key, a wrong nonce or
/// any tampering. The cases are indistinguishable.
pub fn decrypt(key: &SecretKey, nonce: &Nonce, ciphertext: &[u8]) -> Result<Vec<u8>, CryptoError> {
    if ciphertext.len() < TAG_SIZE {
        return Err(CryptoError::DecryptionFailed);
    }
    let cipher = DeoxysII256::new(Key::<DeoxysII256>::from_slice(key.as_bytes()));

    cipher
        .decrypt(AeadNonce::<DeoxysII256>::from_slice(nonce.as_bytes()), ciphertext)
        .map_err(|_| CryptoError::DecryptionFailed)
}
