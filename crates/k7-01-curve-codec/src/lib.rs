//! # Curve Codec Subsystem (K7-01)
//!
//! Maps 256-bit Key721 token ids to public points on the supported curves
//! and back.
//!
//! ## Architecture
//!
//! This subsystem follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): Pure curve arithmetic and encodings, no I/O
//! - **Ports Layer** (`ports/`): The inbound `CurveCodecApi`
//! - **Service Layer** (`service.rs`): Implements the API, adds batch decoding
//!
//! ## Encodings
//!
//! | Curve | Token id | Decode result |
//! |-------|----------|---------------|
//! | secp256k1 | x coordinate | both y parities |
//! | bn254 | x with y parity in bit 255 | one point |
//! | ed25519 | compressed point | the same bytes |
//! | x25519 / mock | opaque | the same bytes |

pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use domain::codec::{decode, encode, secret_to_point, secret_to_token_id};
pub use domain::errors::CodecError;
pub use domain::point::{Candidates, CurvePoint};
pub use domain::registry::{params, CurveModel, CurveParams};
pub use domain::secp256k1::{negate_secret, select_by_eth_address};
pub use ports::inbound::CurveCodecApi;
pub use service::CurveCodecService;
