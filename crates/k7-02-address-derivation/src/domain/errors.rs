//! # Address Errors

use k7_01_curve_codec::CodecError;
use shared_types::{Chain, CurveKind};
use thiserror::Error;

/// Errors that can occur while deriving addresses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AddressError {
    /// The chain has no address format for points on this curve
    #[error("No {chain} address format for {curve} points")]
    UnsupportedAddressFormat { curve: CurveKind, chain: Chain },

    /// Bech32 encoding rejected the payload
    #[error("Bech32 encoding failed: {0}")]
    Bech32(String),

    /// Point decoding or encoding failed
    #[error(transparent)]
    Codec(#[from] CodecError),
}

impl From<bech32::Error> for AddressError {
    fn from(e: bech32::Error) -> Self {
        AddressError::Bech32(e.to_string())
    }
}
