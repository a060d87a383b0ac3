//! Reveal policy and validation
//!
//! # Example
//!
//! ```ignore
//! use k7_03_confidential_reveal::RevealPolicyBuilder;
//!
//! let policy = RevealPolicyBuilder::new()
//!     .verify_token_id(true)
//!     .max_ciphertext_len(256)
//!     .build()
//!     .expect("Valid policy");
//! ```

use crate::domain::errors::RevealError;
use crate::domain::sealed::SEALED_SECRET_LEN;
use serde::{Deserialize, Serialize};

/// Upper bound on `max_ciphertext_len`.
pub const MAX_CIPHERTEXT_LIMIT: usize = 64 * 1024;

/// How a reveal session treats what it opens.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealPolicy {
    /// Re-derive the token id from the secret and compare with the event
    pub verify_token_id: bool,
    /// Ciphertexts longer than this are rejected before decryption
    pub max_ciphertext_len: usize,
}

impl Default for RevealPolicy {
    fn default() -> Self {
        Self {
            verify_token_id: true,
            max_ciphertext_len: 1024,
        }
    }
}

impl RevealPolicy {
    /// Validate the limits.
    pub fn validate(&self) -> Result<(), RevealError> {
        if self.max_ciphertext_len < SEALED_SECRET_LEN {
            return Err(RevealError::InvalidPolicy(format!(
                "max_ciphertext_len must be at least {SEALED_SECRET_LEN}"
            )));
        }

        if self.max_ciphertext_len > MAX_CIPHERTEXT_LIMIT {
            return Err(RevealError::InvalidPolicy(format!(
                "max_ciphertext_len must be at most {MAX_CIPHERTEXT_LIMIT}"
            )));
        }

        Ok(())
    }

    /// Builder-style method to toggle token id verification
    pub fn with_verify_token_id(mut self, verify: bool) -> Self {
        self.verify_token_id = verify;
        self
    }
}

/// Builder for RevealPolicy with validation
#[derive(Default)]
pub struct RevealPolicyBuilder {
    verify_token_id: Option<bool>,
    max_ciphertext_len: Option<usize>,
}

impl RevealPolicyBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Check the revealed secret against the burned token id
    pub fn verify_token_id(mut self, verify: bool) -> Self {
        self.verify_token_id = Some(verify);
        self
    }

    /// Set the largest accepted ciphertext, in bytes
    pub fn max_ciphertext_len(mut self, len: usize) -> Self {
        self.max_ciphertext_len = Some(len);
        self
    }

    /// Build the RevealPolicy, validating all parameters
    pub fn build(self) -> Result<RevealPolicy, RevealError> {
        let defaults = RevealPolicy::default();

        let policy = RevealPolicy {
            verify_token_id: self.verify_token_id.unwrap_or(defaults.verify_token_id),
            max_ciphertext_len: self.max_ciphertext_len.unwrap_or(defaults.max_ciphertext_len),
        };

        policy.validate()?;
        Ok(policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid_and_verifies() {
        let policy = RevealPolicy::default();
        assert!(policy.validate().is_ok());
        assert!(policy.verify_token_id);
    }

    #[test]
    fn test_builder_overrides() {
        let policy = RevealPolicyBuilder::new()
            .verify_token_id(false)
            .max_ciphertext_len(SEALED_SECRET_LEN)
            .build()
            .unwrap();
        assert!(!policy.verify_token_id);
        assert_eq!(policy.max_ciphertext_len, 48);
    }

    #[test]
    fn test_builder_rejects_out_of_range_limits() {
        assert!(matches!(
            RevealPolicyBuilder::new().max_ciphertext_len(47).build(),
            Err(RevealError::InvalidPolicy(_))
        ));
        assert!(RevealPolicyBuilder::new()
            .max_ciphertext_len(MAX_CIPHERTEXT_LIMIT + 1)
            .build()
            .is_err());
    }
}
