//! # Outbound Ports (Driven Ports / SPI)
//!
//! Burn events come from a transaction-log monitor or an RPC receipt
//! decoder. Neither lives in this crate; both sit behind `BurnEventSource`.

use crate::domain::sealed::BurnEvent;
use shared_types::TokenId;
use thiserror::Error;

/// Error from an event source.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SourceError {
    /// The backing store or node could not be reached
    #[error("Event source unavailable: {0}")]
    Unavailable(String),

    /// An event was found but could not be parsed
    #[error("Malformed event: {0}")]
    Malformed(String),
}

/// Source of parsed `RevealSecret` events.
#[async_trait::async_trait]
pub trait BurnEventSource: Send + Sync {
    /// The burn event for `token_id`, if the token has been burned.
    ///
    /// # Errors
    /// * `SourceError::Unavailable` - The source could not be queried
    /// * `SourceError::Malformed` - The stored event is unreadable
    async fn burn_event(&self, token_id: &TokenId) -> Result<Option<BurnEvent>, SourceError>;
}
