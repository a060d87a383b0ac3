//! # Address Dispatch
//!
//! Which chains each curve supports, and how to render each one.

use crate::domain::bitcoin::{p2pkh_address, segwit_address};
use crate::domain::entities::AddressSet;
use crate::domain::errors::AddressError;
use crate::domain::ethereum::to_checksum_address;
use crate::domain::oasis::oasis_address;
use k7_01_curve_codec::domain::secp256k1;
use k7_01_curve_codec::{encode, CurvePoint};
use shared_types::{Address, Chain, CurveKind};

const SECP256K1_CHAINS: &[Chain] = &[
    Chain::Secp256k1Xy,
    Chain::Secp256k1Compact,
    Chain::Eth,
    Chain::Btc,
    Chain::Segwit,
    Chain::Key721Id,
];
const ED25519_CHAINS: &[Chain] = &[Chain::Oasis, Chain::Key721Id];
const ID_ONLY_CHAINS: &[Chain] = &[Chain::Key721Id];

/// Chains with an address format for `curve`, in output order.
pub fn supported_chains(curve: CurveKind) -> &'static [Chain] {
    match curve {
        CurveKind::Secp256k1 => SECP256K1_CHAINS,
        CurveKind::Ed25519 => ED25519_CHAINS,
        CurveKind::Bn254 | CurveKind::X25519 | CurveKind::Mock => ID_ONLY_CHAINS,
    }
}

/// Render the `chain` address of `point`.
///
/// # Errors
///
/// `UnsupportedAddressFormat` when the chain has no format for the curve.
pub fn derive(point: &CurvePoint, chain: Chain) -> Result<Address, AddressError> {
    let unsupported = || AddressError::UnsupportedAddressFormat {
        curve: point.curve(),
        chain,
    };

    let value = match (point, chain) {
        (_, Chain::Key721Id) => encode(point)?.to_hex(),

        (CurvePoint::Secp256k1(p), Chain::Eth) => {
            to_checksum_address(&secp256k1::eth_address_bytes(p)?)
        }
        (CurvePoint::Secp256k1(p), Chain::Btc) => p2pkh_address(&secp256k1::compressed(p)?),
        (CurvePoint::Secp256k1(p), Chain::Segwit) => segwit_address(&secp256k1::compressed(p)?)?,
        (CurvePoint::Secp256k1(p), Chain::Secp256k1Xy) => hex::encode(secp256k1::uncompressed(p)?),
        (CurvePoint::Secp256k1(p), Chain::Secp256k1Compact) => {
            hex::encode(secp256k1::compressed(p)?)
        }
        (CurvePoint::Secp256k1(_), Chain::Oasis) => return Err(unsupported()),

        (CurvePoint::Ed25519(pk), Chain::Oasis) => oasis_address(pk)?,
        (CurvePoint::Ed25519(_), _) => return Err(unsupported()),

        (CurvePoint::Bn254(_), _) | (CurvePoint::Opaque { .. }, _) => return Err(unsupported()),
    };

    Ok(Address::new(chain, value))
}

/// Every supported address of `point`.
pub fn derive_all(point: &CurvePoint) -> Result<AddressSet, AddressError> {
    let curve = point.curve();
    let addresses = supported_chains(curve)
        .iter()
        .map(|chain| derive(point, *chain))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(AddressSet { curve, addresses })
}
