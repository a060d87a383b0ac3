//! # Address Sets

use serde::{Deserialize, Serialize};
use shared_types::{Address, Chain, CurveKind};

/// Every address one point controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressSet {
    pub curve: CurveKind,
    pub addresses: Vec<Address>,
}

impl AddressSet {
    /// Rendered address for `chain`, if the set has one.
    pub fn get(&self, chain: Chain) -> Option<&str> {
        self.addresses
            .iter()
            .find(|a| a.chain == chain)
            .map(|a| a.value.as_str())
    }
}
