//! # Key721 Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── benchmarks/       # Criterion benchmarks per subsystem
//! │   ├── k7_01_curve_codec.rs
//! │   └── k7_03_reveal.rs
//! │
//! └── integration/      # Cross-subsystem flows
//!     ├── flows.rs      # mint -> burn -> reveal
//!     └── properties.rs # proptest invariants
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p k7-tests
//!
//! # By category
//! cargo test -p k7-tests integration::flows
//! cargo test -p k7-tests integration::properties
//!
//! # Benchmarks
//! cargo bench -p k7-tests
//! ```

pub mod benchmarks;
pub mod integration;
