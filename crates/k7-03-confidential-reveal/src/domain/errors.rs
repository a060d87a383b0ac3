//! # Reveal Errors
//!
//! Every error is terminal. A session that returned one cannot be retried.

use crate::ports::outbound::SourceError;
use k7_01_curve_codec::CodecError;
use shared_types::TokenId;
use thiserror::Error;

/// Errors that can occur while sealing or revealing a secret.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RevealError {
    /// Wrong key, wrong nonce, tampered ciphertext or a low-order peer key.
    /// Deliberately carries no detail.
    #[error("Authentication failure")]
    AuthenticationFailure,

    /// The revealed secret does not re-derive the burned token id
    #[error("Revealed secret does not match token id")]
    TokenIdMismatch,

    /// Authenticated plaintext has the wrong size for a secret
    #[error("Invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Ciphertext exceeds the policy limit
    #[error("Ciphertext too long: {len} > {max}")]
    CiphertextTooLong { len: usize, max: usize },

    /// Event field is not valid hex
    #[error("Invalid hex in {0}")]
    InvalidHex(&'static str),

    /// The session already revealed or failed
    #[error("Reveal session is closed")]
    SessionClosed,

    /// Encryption failed while sealing
    #[error("Sealing failed")]
    SealingFailed,

    /// Policy values are out of range
    #[error("Invalid reveal policy: {0}")]
    InvalidPolicy(String),

    /// No burn event for the token
    #[error("No burn event for token {0}")]
    EventNotFound(TokenId),

    /// The event source failed
    #[error("Event source error: {0}")]
    Source(#[from] SourceError),

    /// Re-deriving the token id failed
    #[error(transparent)]
    Codec(#[from] CodecError),
}
