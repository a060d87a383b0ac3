//! # Ports Layer
//!
//! - **Inbound (Driving)**: API that external callers use
//! - **Outbound (Driven)**: Where burn events come from

pub mod inbound;
pub mod outbound;
