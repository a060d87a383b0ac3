//! # Error Types
//!
//! Defines the parsing errors shared by all subsystems.

use thiserror::Error;

/// Errors raised while parsing identifiers, selectors and secrets.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EncodingError {
    /// Decoded byte length does not match the fixed width.
    #[error("Invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Hex string is missing its `0x` prefix.
    #[error("Missing 0x prefix")]
    MissingHexPrefix,

    /// Input is not valid hexadecimal.
    #[error("Invalid hex: {0}")]
    InvalidHex(String),

    /// Input is not a valid unsigned 256-bit decimal number.
    #[error("Invalid decimal: {0}")]
    InvalidDecimal(String),

    /// Curve selector is not one of the supported literals.
    #[error("Unsupported curve: {0}")]
    UnsupportedCurve(String),

    /// Chain tag is not one of the supported literals.
    #[error("Unsupported chain: {0}")]
    UnsupportedChain(String),

    /// Secret input could not be decoded to exactly 32 bytes.
    #[error("Invalid secret encoding: {0}")]
    InvalidSecretEncoding(&'static str),
}
