//! # Inbound Ports (Driving Ports / API)

use crate::domain::entities::AddressSet;
use crate::domain::errors::AddressError;
use k7_01_curve_codec::CurvePoint;
use shared_types::{Address, Chain, CurveKind, SecretScalar, TokenId};

/// Primary Address Derivation API.
///
/// Implementations must be thread-safe (`Send + Sync`).
pub trait AddressDerivationApi: Send + Sync {
    /// One address of a point.
    fn derive(&self, point: &CurvePoint, chain: Chain) -> Result<Address, AddressError>;

    /// All addresses of a point.
    fn derive_all(&self, point: &CurvePoint) -> Result<AddressSet, AddressError>;

    /// Address sets a secret controls.
    ///
    /// secp256k1 returns two sets: the point and its negation, since both
    /// share the token id and the issuer may have minted either.
    fn secret_to_addresses(
        &self,
        curve: CurveKind,
        secret: &SecretScalar,
    ) -> Result<Vec<AddressSet>, AddressError>;

    /// One address set per decode candidate of `id`.
    fn token_id_to_addresses(
        &self,
        curve: CurveKind,
        id: &TokenId,
    ) -> Result<Vec<AddressSet>, AddressError>;

    /// `token_id_to_addresses` over many ids in parallel, input order kept.
    fn token_ids_to_addresses(
        &self,
        curve: CurveKind,
        ids: &[TokenId],
    ) -> Vec<Result<Vec<AddressSet>, AddressError>>;
}
