//! # Confidential Reveal Service
//!
//! Implements `ConfidentialRevealApi`: fetches the burn event through the
//! `BurnEventSource` port and runs the holder's reveal session on it.

use crate::domain::config::RevealPolicy;
use crate::domain::decryptor::RevealSession;
use crate::domain::errors::RevealError;
use crate::domain::sealed::RevealedSecret;
use crate::ports::inbound::ConfidentialRevealApi;
use crate::ports::outbound::BurnEventSource;
use rand::{CryptoRng, RngCore};
use shared_crypto::EphemeralKeyPair;
use shared_types::{CurveKind, TokenId};
use tracing::debug;

/// Confidential Reveal Service.
pub struct RevealService<S: BurnEventSource> {
    source: S,
    policy: RevealPolicy,
}

impl<S: BurnEventSource> RevealService<S> {
    /// Create a new service, validating `policy`.
    pub fn new(source: S, policy: RevealPolicy) -> Result<Self, RevealError> {
        policy.validate()?;
        Ok(Self { source, policy })
    }

    pub fn policy(&self) -> &RevealPolicy {
        &self.policy
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

#[async_trait::async_trait]
impl<S: BurnEventSource> ConfidentialRevealApi for RevealService<S> {
    fn begin<R: RngCore + CryptoRng>(&self, curve: CurveKind, rng: &mut R) -> RevealSession {
        RevealSession::generate(curve, self.policy.clone(), rng)
    }

    fn resume(&self, curve: CurveKind, ephemeral_secret: [u8; 32]) -> RevealSession {
        RevealSession::new(
            curve,
            EphemeralKeyPair::from_secret_bytes(ephemeral_secret),
            self.policy.clone(),
        )
    }

    async fn reveal(
        &self,
        mut session: RevealSession,
        token_id: &TokenId,
    ) -> Result<RevealedSecret, RevealError> {
        let event = self
            .source
            .burn_event(token_id)
            .await?
            .ok_or(RevealError::EventNotFound(*token_id))?;
        debug!(token_id = %token_id, "fetched burn event");

        let (event_token, sealed) = event.into_sealed()?;
        if event_token != *token_id {
            return Err(RevealError::TokenIdMismatch);
        }

        session.reveal(sealed, Some(token_id))
    }
}
