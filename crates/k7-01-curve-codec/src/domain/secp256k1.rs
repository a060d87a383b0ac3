//! # secp256k1 Encoding
//!
//! The token id is the x coordinate alone. The y parity is dropped, so every
//! id names both `P` and `-P`, and every secret `k` has a twin `n - k` that
//! owns the same token.

use crate::domain::errors::CodecError;
use crate::domain::point::{Candidates, CurvePoint};
use k256::elliptic_curve::ops::Reduce;
use k256::elliptic_curve::sec1::{FromEncodedPoint, ToEncodedPoint};
use k256::{AffinePoint, EncodedPoint, FieldBytes, ProjectivePoint, Scalar, U256};
use shared_crypto::keccak256;
use shared_types::{CurveKind, SecretScalar, TokenId};
use subtle::ConstantTimeEq;

const SEC1_EVEN: u8 = 0x02;
const SEC1_ODD: u8 = 0x03;

/// Token id of `point`: its 32-byte x coordinate.
pub fn encode(point: &AffinePoint) -> Result<TokenId, CodecError> {
    let encoded = point.to_encoded_point(true);
    let x = encoded
        .x()
        .ok_or(CodecError::PointNotOnCurve(CurveKind::Secp256k1))?;
    TokenId::from_slice(x).map_err(CodecError::from)
}

/// Both decompressions of `id`, even y first.
pub fn decode(id: &TokenId) -> Result<[AffinePoint; 2], CodecError> {
    Ok([
        decompress(SEC1_EVEN, id)?,
        decompress(SEC1_ODD, id)?,
    ])
}

fn decompress(tag: u8, id: &TokenId) -> Result<AffinePoint, CodecError> {
    let mut sec1 = [0u8; 33];
    sec1[0] = tag;
    sec1[1..].copy_from_slice(id.as_bytes());

    let encoded = EncodedPoint::from_bytes(sec1)
        .map_err(|_| CodecError::PointNotOnCurve(CurveKind::Secp256k1))?;
    Option::from(AffinePoint::from_encoded_point(&encoded))
        .ok_or(CodecError::PointNotOnCurve(CurveKind::Secp256k1))
}

/// `G * (secret mod n)`.
pub fn from_secret(secret: &SecretScalar) -> Result<AffinePoint, CodecError> {
    let k = scalar(secret)?;
    Ok((ProjectivePoint::GENERATOR * k).to_affine())
}

fn scalar(secret: &SecretScalar) -> Result<Scalar, CodecError> {
    let k = <Scalar as Reduce<U256>>::reduce_bytes(FieldBytes::from_slice(secret.as_bytes()));
    if k == Scalar::ZERO {
        return Err(CodecError::InvalidScalar(CurveKind::Secp256k1));
    }
    Ok(k)
}

/// `-P`, the other point sharing the token id of `P`.
pub fn negate(point: &AffinePoint) -> AffinePoint {
    (-ProjectivePoint::from(*point)).to_affine()
}

/// `n - k`, the secret of the negated point.
pub fn negate_secret(secret: &SecretScalar) -> Result<SecretScalar, CodecError> {
    let k = scalar(secret)?;
    let mut out = [0u8; 32];
    out.copy_from_slice(&(-k).to_bytes());
    Ok(SecretScalar::from_bytes(out))
}

/// SEC1 uncompressed encoding, `04 || x || y`.
pub fn uncompressed(point: &AffinePoint) -> Result<[u8; 65], CodecError> {
    point
        .to_encoded_point(false)
        .as_bytes()
        .try_into()
        .map_err(|_| CodecError::PointNotOnCurve(CurveKind::Secp256k1))
}

/// SEC1 compressed encoding, `02|03 || x`.
pub fn compressed(point: &AffinePoint) -> Result<[u8; 33], CodecError> {
    point
        .to_encoded_point(true)
        .as_bytes()
        .try_into()
        .map_err(|_| CodecError::PointNotOnCurve(CurveKind::Secp256k1))
}

/// 20-byte Ethereum account of `point`, `keccak256(x || y)[12..]`.
pub fn eth_address_bytes(point: &AffinePoint) -> Result<[u8; 20], CodecError> {
    let sec1 = uncompressed(point)?;
    let digest = keccak256(&sec1[1..]);
    let mut out = [0u8; 20];
    out.copy_from_slice(&digest[12..]);
    Ok(out)
}

/// Pick the candidate whose Ethereum account is `expected`.
///
/// Which member of a decoded pair the issuer meant is not recoverable from
/// the id; integrators that know the owning account disambiguate with it.
/// Non-secp256k1 candidates never match.
pub fn select_by_eth_address(candidates: &Candidates, expected: &[u8; 20]) -> Option<CurvePoint> {
    candidates.iter().copied().find(|candidate| match candidate {
        CurvePoint::Secp256k1(p) => eth_address_bytes(p)
            .map(|addr| bool::from(addr.ct_eq(expected)))
            .unwrap_or(false),
        _ => false,
    })
}
