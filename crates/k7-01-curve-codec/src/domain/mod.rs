//! # Domain Layer
//!
//! Pure curve logic with no I/O dependencies.
//! This is the inner layer of the hexagonal architecture.

pub mod bn254;
pub mod codec;
pub mod ed25519;
pub mod errors;
pub mod passthrough;
pub mod point;
pub mod registry;
pub mod secp256k1;
