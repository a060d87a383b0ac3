//! K7-Keytool: offline Key721 key tooling
//!
//! Everything the holder does without a node: derive addresses for a secret
//! or token id, generate the burn-time X25519 pair, and open the sealed
//! secret from a burn event.

pub mod commands;
pub mod config;
pub mod logging;

pub use config::KeytoolConfig;
