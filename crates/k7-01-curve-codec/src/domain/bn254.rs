//! # bn254 Encoding
//!
//! The token id is the x coordinate with the parity of y (its lowest bit)
//! stored in bit 255. Field elements are below 2^254, so the top bit is
//! free and decoding yields exactly one point.

use crate::domain::errors::CodecError;
use ark_bn254::{Fq, Fr, G1Affine};
use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::{BigInt, BigInteger, PrimeField};
use shared_types::{CurveKind, SecretScalar, TokenId};

const PARITY_BIT: u8 = 0x80;

fn is_odd(y: &Fq) -> bool {
    y.into_bigint().is_odd()
}

/// Big-endian 32-byte rendering of a base field element.
pub fn fq_to_bytes(value: &Fq) -> [u8; 32] {
    let be = value.into_bigint().to_bytes_be();
    let mut out = [0u8; 32];
    out[32 - be.len()..].copy_from_slice(&be);
    out
}

fn fq_from_bytes(bytes: &[u8; 32]) -> Option<Fq> {
    let mut limbs = [0u64; 4];
    for (i, limb) in limbs.iter_mut().enumerate() {
        let start = 32 - 8 * (i + 1);
        let mut word = [0u8; 8];
        word.copy_from_slice(&bytes[start..start + 8]);
        *limb = u64::from_be_bytes(word);
    }
    Fq::from_bigint(BigInt::new(limbs))
}

/// Token id of `point`: `x | (y & 1) << 255`.
pub fn encode(point: &G1Affine) -> Result<TokenId, CodecError> {
    if point.is_zero() {
        return Err(CodecError::PointNotOnCurve(CurveKind::Bn254));
    }
    let mut bytes = fq_to_bytes(&point.x);
    if is_odd(&point.y) {
        bytes[0] |= PARITY_BIT;
    }
    Ok(TokenId::from_bytes(bytes))
}

/// The unique point for `id`.
pub fn decode(id: &TokenId) -> Result<G1Affine, CodecError> {
    let mut bytes = *id.as_bytes();
    let want_odd = bytes[0] & PARITY_BIT != 0;
    bytes[0] &= !PARITY_BIT;

    let x = fq_from_bytes(&bytes).ok_or(CodecError::PointNotOnCurve(CurveKind::Bn254))?;
    let (a, b) = G1Affine::get_ys_from_x_unchecked(x)
        .ok_or(CodecError::PointNotOnCurve(CurveKind::Bn254))?;

    let y = [a, b]
        .into_iter()
        .find(|y| is_odd(y) == want_odd)
        .ok_or(CodecError::PointNotOnCurve(CurveKind::Bn254))?;

    // The G1 cofactor is 1, so any point on the curve is in the group.
    Ok(G1Affine::new_unchecked(x, y))
}

/// `G * (secret mod r)`.
pub fn from_secret(secret: &SecretScalar) -> Result<G1Affine, CodecError> {
    let k = Fr::from_be_bytes_mod_order(secret.as_bytes());
    if k == Fr::from(0u64) {
        return Err(CodecError::InvalidScalar(CurveKind::Bn254));
    }
    Ok((G1Affine::generator() * k).into_affine())
}
