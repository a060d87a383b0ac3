//! # In-Memory Event Source
//!
//! Holds burn events in a map. Used by offline tooling and tests in place
//! of a log monitor.

use crate::domain::sealed::BurnEvent;
use crate::ports::outbound::{BurnEventSource, SourceError};
use shared_types::TokenId;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Burn events keyed by token id.
#[derive(Debug, Default)]
pub struct InMemoryBurnEvents {
    events: RwLock<HashMap<TokenId, BurnEvent>>,
}

impl InMemoryBurnEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an event, replacing any earlier one for the same token.
    pub async fn insert(&self, event: BurnEvent) {
        self.events.write().await.insert(event.token_id, event);
    }

    pub async fn len(&self) -> usize {
        self.events.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.events.read().await.is_empty()
    }
}

impl FromIterator<BurnEvent> for InMemoryBurnEvents {
    fn from_iter<I: IntoIterator<Item = BurnEvent>>(iter: I) -> Self {
        let events = iter.into_iter().map(|e| (e.token_id, e)).collect();
        Self {
            events: RwLock::new(events),
        }
    }
}

#[async_trait::async_trait]
impl BurnEventSource for InMemoryBurnEvents {
    async fn burn_event(&self, token_id: &TokenId) -> Result<Option<BurnEvent>, SourceError> {
        Ok(self.events.read().await.get(token_id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(byte: u8) -> BurnEvent {
        BurnEvent {
            token_id: TokenId::from_bytes([byte; 32]),
            contract_ephemeral_public: format!("0x{}", "11".repeat(32)),
            ciphertext_hex: "0x00".into(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_lookup() {
        let source = InMemoryBurnEvents::new();
        assert!(source.is_empty().await);
        source.insert(event(1)).await;
        source.insert(event(1)).await;
        assert_eq!(source.len().await, 1);

        let found = source.burn_event(&TokenId::from_bytes([1; 32])).await.unwrap();
        assert_eq!(found, Some(event(1)));
        let missing = source.burn_event(&TokenId::from_bytes([2; 32])).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_from_iter() {
        let source: InMemoryBurnEvents = (1..=3).map(event).collect();
        assert_eq!(source.len().await, 3);
    }
}
