//! # Shared Crypto - Key721 Cryptographic Primitives
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `symmetric` | Deoxys-II-256-128 | Sealing revealed secrets |
//! | `hashing` | Keccak-256, SHA-256, SHA-512/256, RIPEMD-160, HMAC | Ids, addresses, key schedule |
//! | `exchange` | X25519 | Ephemeral key agreement at burn time |
//! | `ed25519` | Ed25519 | Public keys from 32-byte seeds |
//!
//! ## Security Properties
//!
//! - **Deoxys-II**: nonce-misuse resistant; a repeated nonce leaks only equality
//! - **X25519**: non-contributory (low order) peers are rejected
//! - Secret material is zeroized on drop

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ed25519;
pub mod errors;
pub mod exchange;
pub mod hashing;
pub mod symmetric;

// Re-exports
pub use ed25519::ed25519_public_key;
pub use errors::CryptoError;
pub use exchange::{x25519_public_key, EphemeralKeyPair};
pub use hashing::{hash160, hmac_sha512_256, keccak256, sha256, sha512_256, Hash};
pub use symmetric::{decrypt, encrypt, Nonce, SecretKey, NONCE_SIZE, TAG_SIZE};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
