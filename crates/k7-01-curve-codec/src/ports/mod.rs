//! # Ports Layer
//!
//! Trait definitions for the hexagonal architecture.
//! - **Inbound (Driving)**: API that external callers use
//!
//! The codec is pure and needs no outbound ports.

pub mod inbound;
