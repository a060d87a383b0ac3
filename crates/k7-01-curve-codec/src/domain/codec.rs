//! # Codec Dispatch
//!
//! Curve-generic entry points. Every function matches exhaustively on the
//! curve, so a new `CurveKind` cannot be half supported.

use crate::domain::errors::CodecError;
use crate::domain::point::{Candidates, CurvePoint};
use crate::domain::{bn254, ed25519, passthrough, secp256k1};
use shared_types::{CurveKind, SecretScalar, TokenId, TOKEN_ID_LEN};
use tracing::debug;

/// Token id for `point`.
pub fn encode(point: &CurvePoint) -> Result<TokenId, CodecError> {
    match point {
        CurvePoint::Secp256k1(p) => secp256k1::encode(p),
        CurvePoint::Bn254(p) => bn254::encode(p),
        CurvePoint::Ed25519(p) => Ok(ed25519::encode(p)),
        CurvePoint::Opaque { id, .. } => Ok(*id),
    }
}

/// Every point on `curve` whose token id is `id`.
///
/// # Errors
///
/// - `InvalidLength` when `id` is not 32 bytes
/// - `PointNotOnCurve` when no point has this encoding
pub fn decode(curve: CurveKind, id: &[u8]) -> Result<Candidates, CodecError> {
    let id = TokenId::from_slice(id).map_err(|_| CodecError::InvalidLength {
        expected: TOKEN_ID_LEN,
        actual: id.len(),
    })?;

    let candidates = match curve {
        CurveKind::Secp256k1 => {
            let [even, odd] = secp256k1::decode(&id)?;
            Candidates::Pair([CurvePoint::Secp256k1(even), CurvePoint::Secp256k1(odd)])
        }
        CurveKind::Bn254 => Candidates::Single(CurvePoint::Bn254(bn254::decode(&id)?)),
        CurveKind::Ed25519 => Candidates::Single(CurvePoint::Ed25519(ed25519::decode(&id))),
        CurveKind::X25519 | CurveKind::Mock => Candidates::Single(CurvePoint::Opaque { curve, id }),
    };

    debug!(%curve, token_id = %id, candidates = candidates.len(), "decoded token id");
    Ok(candidates)
}

/// Public point for `secret` on `curve`.
///
/// secp256k1 and bn254 reduce the secret modulo the group order; ed25519
/// treats it as an RFC 8032 seed; x25519 clamps it.
pub fn secret_to_point(curve: CurveKind, secret: &SecretScalar) -> Result<CurvePoint, CodecError> {
    match curve {
        CurveKind::Secp256k1 => secp256k1::from_secret(secret).map(CurvePoint::Secp256k1),
        CurveKind::Bn254 => bn254::from_secret(secret).map(CurvePoint::Bn254),
        CurveKind::Ed25519 => Ok(CurvePoint::Ed25519(ed25519::from_secret(secret))),
        CurveKind::X25519 => Ok(CurvePoint::Opaque {
            curve,
            id: passthrough::x25519_id(secret),
        }),
        CurveKind::Mock => Ok(CurvePoint::Opaque {
            curve,
            id: passthrough::mock_id(secret),
        }),
    }
}

/// Token id the issuer mints for `secret` on `curve`.
pub fn secret_to_token_id(curve: CurveKind, secret: &SecretScalar) -> Result<TokenId, CodecError> {
    encode(&secret_to_point(curve, secret)?)
}
