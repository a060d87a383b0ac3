//! # Adapters
//!
//! Implementations of the outbound ports.

pub mod memory;
