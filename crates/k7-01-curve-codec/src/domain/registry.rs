//! # Curve Registry
//!
//! Static domain parameters for every supported curve. All values are
//! big-endian and decoded at compile time.

use shared_types::CurveKind;

/// Curve equation family and its coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveModel {
    /// `y^2 = x^3 + a*x + b`
    ShortWeierstrass { a: u64, b: u64 },
    /// `-x^2 + y^2 = 1 + d*x^2*y^2`
    TwistedEdwards { d: [u8; 32] },
    /// `y^2 = x^3 + a*x^2 + x`, base point given by u only
    Montgomery { a: u64 },
}

/// Domain parameters of one curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveParams {
    pub kind: CurveKind,
    pub field_modulus: [u8; 32],
    pub group_order: [u8; 32],
    pub model: CurveModel,
    pub generator_x: [u8; 32],
    /// Absent for Montgomery curves.
    pub generator_y: Option<[u8; 32]>,
}

const fn nibble(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => panic!("invalid hex digit in curve constant"),
    }
}

/// Decode 64 hex digits at compile time.
const fn hex32(s: &str) -> [u8; 32] {
    let bytes = s.as_bytes();
    assert!(bytes.len() == 64, "curve constant must be 64 hex digits");
    let mut out = [0u8; 32];
    let mut i = 0;
    while i < 32 {
        out[i] = (nibble(bytes[2 * i]) << 4) | nibble(bytes[2 * i + 1]);
        i += 1;
    }
    out
}

/// Small integer as a 32-byte big-endian value.
const fn small32(v: u8) -> [u8; 32] {
    let mut out = [0u8; 32];
    out[31] = v;
    out
}

// =============================================================================
// PARAMETERS
// =============================================================================

pub static SECP256K1: CurveParams = CurveParams {
    kind: CurveKind::Secp256k1,
    field_modulus: hex32("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F"),
    group_order: hex32("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141"),
    model: CurveModel::ShortWeierstrass { a: 0, b: 7 },
    generator_x: hex32("79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798"),
    generator_y: Some(hex32(
        "483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8",
    )),
};

/// alt_bn128 G1, as used by the EVM precompiles.
pub static BN254: CurveParams = CurveParams {
    kind: CurveKind::Bn254,
    field_modulus: hex32("30644E72E131A029B85045B68181585D97816A916871CA8D3C208C16D87CFD47"),
    group_order: hex32("30644E72E131A029B85045B68181585D2833E84879B9709143E1F593F0000001"),
    model: CurveModel::ShortWeierstrass { a: 0, b: 3 },
    generator_x: small32(1),
    generator_y: Some(small32(2)),
};

pub static ED25519: CurveParams = CurveParams {
    kind: CurveKind::Ed25519,
    field_modulus: hex32("7FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFED"),
    group_order: hex32("1000000000000000000000000000000014DEF9DEA2F79CD65812631A5CF5D3ED"),
    model: CurveModel::TwistedEdwards {
        d: hex32("52036CEE2B6FFE738CC740797779E89800700A4D4141D8AB75EB4DCA135978A3"),
    },
    generator_x: hex32("216936D3CD6E53FEC0A4E231FDD6DC5C692CC7609525A7B2C9562D608F25D51A"),
    generator_y: Some(hex32(
        "6666666666666666666666666666666666666666666666666666666666666658",
    )),
};

pub static X25519: CurveParams = CurveParams {
    kind: CurveKind::X25519,
    field_modulus: hex32("7FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFED"),
    group_order: hex32("1000000000000000000000000000000014DEF9DEA2F79CD65812631A5CF5D3ED"),
    model: CurveModel::Montgomery { a: 486662 },
    generator_x: small32(9),
    generator_y: None,
};

/// Parameters for `kind`. The mock curve has none.
pub fn params(kind: CurveKind) -> Option<&'static CurveParams> {
    match kind {
        CurveKind::Secp256k1 => Some(&SECP256K1),
        CurveKind::Bn254 => Some(&BN254),
        CurveKind::Ed25519 => Some(&ED25519),
        CurveKind::X25519 => Some(&X25519),
        CurveKind::Mock => None,
    }
}
