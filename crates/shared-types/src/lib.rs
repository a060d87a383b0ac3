//! # Shared Types Crate
//!
//! This crate contains the identity entities used by every Key721 subsystem.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: `TokenId`, `CurveKind`, `Address` and
//!   `SecretScalar` are defined once, here.
//! - **Closed Curve Set**: `CurveKind` is an exhaustive enum; adding a curve
//!   forces every `match` in the workspace to handle it.
//! - **Explicit Parsing**: every accepted input format has its own named
//!   constructor. Nothing sniffs the format of a string.

pub mod entities;
pub mod errors;
pub mod secret;

pub use entities::*;
pub use errors::*;
pub use secret::SecretScalar;
