//! # Confidential Reveal Subsystem (K7-03)
//!
//! Recovers a Key721 token's secret when the token is burned.
//!
//! ## Protocol
//!
//! 1. The holder generates an ephemeral X25519 pair and sends the public
//!    half with the burn call.
//! 2. The contract answers with its own ephemeral public key and the secret
//!    sealed under Deoxys-II-256-128.
//! 3. Both sides key the cipher with
//!    `HMAC-SHA-512/256("MRAE_Box_Deoxys-II-256-128", X25519(secret, peer))`
//!    and use `keccak256(holder public)[..15]` as the nonce.
//! 4. The holder opens the ciphertext and checks the secret re-derives the
//!    burned token id.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): key schedule, sealing, the reveal session
//! - **Ports Layer** (`ports/`): `ConfidentialRevealApi` in,
//!   `BurnEventSource` out
//! - **Adapters** (`adapters/`): in-memory event source
//! - **Service Layer** (`service.rs`): fetches the burn event and runs a session
//!
//! ## Security Notes
//!
//! - Authentication failures carry no detail: a wrong key and a tampered
//!   ciphertext are indistinguishable.
//! - A session consumes its ephemeral secret; there are no retries.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use adapters::memory::InMemoryBurnEvents;
pub use domain::config::{RevealPolicy, RevealPolicyBuilder};
pub use domain::decryptor::{RevealPhase, RevealSession};
pub use domain::errors::RevealError;
pub use domain::key_exchange::{derive_key, KDF_CONTEXT};
pub use domain::nonce::reveal_nonce;
pub use domain::sealed::{BurnEvent, RevealedSecret, SealedReveal, SEALED_SECRET_LEN};
pub use domain::sealer::RevealSealer;
pub use ports::inbound::ConfidentialRevealApi;
pub use ports::outbound::{BurnEventSource, SourceError};
pub use service::RevealService;
