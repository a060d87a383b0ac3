//! Crypto error types.

use thiserror::Error;

/// Cryptographic operation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CryptoError {
    /// Encryption failed
    #[error("Encryption failed")]
    EncryptionFailed,

    /// Authentication tag did not verify. Carries no detail.
    #[error("Decryption failed")]
    DecryptionFailed,

    /// Peer public key produced an all-zero shared secret
    #[error("Non-contributory key exchange")]
    NonContributory,
}
