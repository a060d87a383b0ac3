//! # Curve Codec Service
//!
//! Application service layer that implements the `CurveCodecApi` trait and
//! delegates to the domain layer.

use crate::domain::codec;
use crate::domain::errors::CodecError;
use crate::domain::point::{Candidates, CurvePoint};
use crate::domain::registry::{self, CurveParams};
use crate::ports::inbound::CurveCodecApi;
use rayon::prelude::*;
use shared_types::{CurveKind, SecretScalar, TokenId};
use tracing::debug;

/// Curve Codec Service.
///
/// Stateless; cheap to construct and share.
#[derive(Debug, Default, Clone, Copy)]
pub struct CurveCodecService;

impl CurveCodecService {
    pub fn new() -> Self {
        Self
    }
}

impl CurveCodecApi for CurveCodecService {
    fn encode(&self, point: &CurvePoint) -> Result<TokenId, CodecError> {
        codec::encode(point)
    }

    fn decode(&self, curve: CurveKind, id: &[u8]) -> Result<Candidates, CodecError> {
        codec::decode(curve, id)
    }

    fn secret_to_point(
        &self,
        curve: CurveKind,
        secret: &SecretScalar,
    ) -> Result<CurvePoint, CodecError> {
        codec::secret_to_point(curve, secret)
    }

    fn secret_to_token_id(
        &self,
        curve: CurveKind,
        secret: &SecretScalar,
    ) -> Result<TokenId, CodecError> {
        codec::secret_to_token_id(curve, secret)
    }

    fn params(&self, curve: CurveKind) -> Option<&'static CurveParams> {
        registry::params(curve)
    }

    fn decode_batch(
        &self,
        curve: CurveKind,
        ids: &[TokenId],
    ) -> Vec<Result<Candidates, CodecError>> {
        debug!(%curve, count = ids.len(), "batch decode");
        ids.par_iter()
            .map(|id| codec::decode(curve, id.as_bytes()))
            .collect()
    }
}
