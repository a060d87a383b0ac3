//! # Inbound Ports (Driving Ports / API)
//!
//! Traits that define the public API of this subsystem.

use crate::domain::errors::CodecError;
use crate::domain::point::{Candidates, CurvePoint};
use crate::domain::registry::CurveParams;
use shared_types::{CurveKind, SecretScalar, TokenId};

/// Primary Curve Codec API.
///
/// Implementations must be thread-safe (`Send + Sync`).
pub trait CurveCodecApi: Send + Sync {
    // =========================================================================
    // Single Operations
    // =========================================================================

    /// Token id for a point.
    fn encode(&self, point: &CurvePoint) -> Result<TokenId, CodecError>;

    /// All points on `curve` that `id` may stand for.
    fn decode(&self, curve: CurveKind, id: &[u8]) -> Result<Candidates, CodecError>;

    /// Public point for a secret.
    fn secret_to_point(
        &self,
        curve: CurveKind,
        secret: &SecretScalar,
    ) -> Result<CurvePoint, CodecError>;

    /// Token id for a secret.
    fn secret_to_token_id(
        &self,
        curve: CurveKind,
        secret: &SecretScalar,
    ) -> Result<TokenId, CodecError>;

    /// Domain parameters, `None` for the mock curve.
    fn params(&self, curve: CurveKind) -> Option<&'static CurveParams>;

    // =========================================================================
    // Batch Operations
    // =========================================================================

    /// Decode many ids in parallel. Results keep the input order.
    fn decode_batch(
        &self,
        curve: CurveKind,
        ids: &[TokenId],
    ) -> Vec<Result<Candidates, CodecError>>;
}
