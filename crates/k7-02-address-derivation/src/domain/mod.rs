//! # Domain Layer
//!
//! Pure address encodings with no I/O dependencies.

pub mod bitcoin;
pub mod deriver;
pub mod entities;
pub mod errors;
pub mod ethereum;
pub mod oasis;
