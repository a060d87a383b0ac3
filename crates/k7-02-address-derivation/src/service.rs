//! # Address Derivation Service
//!
//! Implements `AddressDerivationApi` on top of a `CurveCodecApi`.

use crate::domain::deriver;
use crate::domain::entities::AddressSet;
use crate::domain::errors::AddressError;
use crate::ports::inbound::AddressDerivationApi;
use k7_01_curve_codec::domain::secp256k1;
use k7_01_curve_codec::{CurveCodecApi, CurveCodecService, CurvePoint};
use rayon::prelude::*;
use shared_types::{Address, Chain, CurveKind, SecretScalar, TokenId};
use tracing::debug;

/// Address Derivation Service.
pub struct AddressDerivationService<C: CurveCodecApi> {
    codec: C,
}

impl<C: CurveCodecApi> AddressDerivationService<C> {
    /// Create a new service over `codec`.
    pub fn new(codec: C) -> Self {
        Self { codec }
    }
}

impl Default for AddressDerivationService<CurveCodecService> {
    fn default() -> Self {
        Self::new(CurveCodecService::new())
    }
}

impl<C: CurveCodecApi> AddressDerivationApi for AddressDerivationService<C> {
    fn derive(&self, point: &CurvePoint, chain: Chain) -> Result<Address, AddressError> {
        deriver::derive(point, chain)
    }

    fn derive_all(&self, point: &CurvePoint) -> Result<AddressSet, AddressError> {
        deriver::derive_all(point)
    }

    fn secret_to_addresses(
        &self,
        curve: CurveKind,
        secret: &SecretScalar,
    ) -> Result<Vec<AddressSet>, AddressError> {
        let point = self.codec.secret_to_point(curve, secret)?;
        let mut sets = vec![deriver::derive_all(&point)?];

        if let CurvePoint::Secp256k1(p) = point {
            let twin = CurvePoint::Secp256k1(secp256k1::negate(&p));
            sets.push(deriver::derive_all(&twin)?);
        }

        debug!(%curve, sets = sets.len(), "derived addresses from secret");
        Ok(sets)
    }

    fn token_id_to_addresses(
        &self,
        curve: CurveKind,
        id: &TokenId,
    ) -> Result<Vec<AddressSet>, AddressError> {
        let candidates = self.codec.decode(curve, id.as_bytes())?;
        let sets = candidates
            .iter()
            .map(deriver::derive_all)
            .collect::<Result<Vec<_>, _>>()?;

        debug!(%curve, token_id = %id, sets = sets.len(), "derived addresses from token id");
        Ok(sets)
    }

    fn token_ids_to_addresses(
        &self,
        curve: CurveKind,
        ids: &[TokenId],
    ) -> Vec<Result<Vec<AddressSet>, AddressError>> {
        ids.par_iter()
            .map(|id| self.token_id_to_addresses(curve, id))
            .collect()
    }
}
