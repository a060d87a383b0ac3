//! # Domain Layer
//!
//! Key schedule, sealing and the reveal state machine. No I/O.

pub mod config;
pub mod decryptor;
pub mod errors;
pub mod key_exchange;
pub mod nonce;
pub mod sealed;
pub mod sealer;
