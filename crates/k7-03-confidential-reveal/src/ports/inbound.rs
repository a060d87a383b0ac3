//! # Inbound Ports (Driving Ports / API)

use crate::domain::decryptor::RevealSession;
use crate::domain::errors::RevealError;
use crate::domain::sealed::RevealedSecret;
use rand::{CryptoRng, RngCore};
use shared_types::{CurveKind, TokenId};

/// Primary Confidential Reveal API.
#[async_trait::async_trait]
pub trait ConfidentialRevealApi: Send + Sync {
    /// Start a reveal for a token on `curve`. Send
    /// `session.local_public()` with the burn call.
    fn begin<R: RngCore + CryptoRng>(&self, curve: CurveKind, rng: &mut R) -> RevealSession;

    /// Rebuild a session from an ephemeral secret kept since the burn call.
    fn resume(&self, curve: CurveKind, ephemeral_secret: [u8; 32]) -> RevealSession;

    /// Fetch the burn event for `token_id` and open it with `session`.
    async fn reveal(
        &self,
        session: RevealSession,
        token_id: &TokenId,
    ) -> Result<RevealedSecret, RevealError>;
}
