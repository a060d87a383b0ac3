//! # Curve Points
//!
//! A tagged public point, plus the candidate set returned by decoding.

use shared_types::{CurveKind, TokenId};

/// A public point on one of the supported curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurvePoint {
    Secp256k1(k256::AffinePoint),
    Bn254(ark_bn254::G1Affine),
    /// Compressed Edwards y with the x sign bit, as RFC 8032 encodes it.
    Ed25519([u8; 32]),
    /// Curves whose token id is not a point the codec can inspect
    /// (x25519 public keys and mock hashes).
    Opaque { curve: CurveKind, id: TokenId },
}

impl CurvePoint {
    pub fn curve(&self) -> CurveKind {
        match self {
            CurvePoint::Secp256k1(_) => CurveKind::Secp256k1,
            CurvePoint::Bn254(_) => CurveKind::Bn254,
            CurvePoint::Ed25519(_) => CurveKind::Ed25519,
            CurvePoint::Opaque { curve, .. } => *curve,
        }
    }
}

/// Every point a token id may stand for.
///
/// secp256k1 ids drop the y parity, so they decode to a pair; every other
/// curve decodes to exactly one point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Candidates {
    /// Even-y point first, then odd-y.
    Pair([CurvePoint; 2]),
    Single(CurvePoint),
}

impl Candidates {
    pub fn as_slice(&self) -> &[CurvePoint] {
        match self {
            Candidates::Pair(pair) => pair,
            Candidates::Single(point) => std::slice::from_ref(point),
        }
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CurvePoint> {
        self.as_slice().iter()
    }

    pub fn contains(&self, point: &CurvePoint) -> bool {
        self.as_slice().contains(point)
    }

    /// The single point, or the even-y member of a pair.
    pub fn first(&self) -> CurvePoint {
        self.as_slice()[0]
    }
}

impl<'a> IntoIterator for &'a Candidates {
    type Item = &'a CurvePoint;
    type IntoIter = std::slice::Iter<'a, CurvePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
