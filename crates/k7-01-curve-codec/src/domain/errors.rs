//! # Codec Errors
//!
//! Error types for token id encoding and decoding.

use shared_types::{CurveKind, EncodingError};
use thiserror::Error;

/// Errors that can occur while mapping between token ids and points.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CodecError {
    /// Input is not exactly 32 bytes
    #[error("Invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// No point on the curve has this encoding
    #[error("Point not on curve {0}")]
    PointNotOnCurve(CurveKind),

    /// Secret reduces to zero modulo the group order
    #[error("Invalid scalar for {0}")]
    InvalidScalar(CurveKind),

    /// Parsing failed before reaching the codec
    #[error(transparent)]
    Encoding(#[from] EncodingError),
}
