//! # Address Derivation Subsystem (K7-02)
//!
//! Renders the chain addresses a Key721 point controls: Ethereum, Bitcoin
//! (P2PKH and native segwit) and raw SEC1 forms for secp256k1, Oasis for
//! ed25519, and the token id itself for every curve.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): One module per address family, plus the
//!   per-curve dispatch in `deriver.rs`
//! - **Ports Layer** (`ports/`): The inbound `AddressDerivationApi`
//! - **Service Layer** (`service.rs`): Wires the codec to the derivers
//!
//! ## Security Notes
//!
//! - Brain-seed and mnemonic secrets enter through `SecretScalar`; this
//!   crate never logs them.

pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use domain::deriver::{derive, derive_all, supported_chains};
pub use domain::entities::AddressSet;
pub use domain::errors::AddressError;
pub use domain::ethereum::to_checksum_address;
pub use ports::inbound::AddressDerivationApi;
pub use service::AddressDerivationService;
