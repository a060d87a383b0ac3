//! # Reveal Session
//!
//! Holder-side state machine: `Awaiting -> Revealed | Failed`.
//! Both outcomes are terminal. The ephemeral secret leaves the session on
//! the first `reveal` call whatever the result, so a failed session cannot
//! be retried with a different ciphertext.

use crate::domain::config::RevealPolicy;
use crate::domain::errors::RevealError;
use crate::domain::key_exchange::agree;
use crate::domain::nonce::reveal_nonce;
use crate::domain::sealed::{RevealedSecret, SealedReveal};
use k7_01_curve_codec::secret_to_token_id;
use rand::{CryptoRng, RngCore};
use shared_crypto::{decrypt, EphemeralKeyPair};
use shared_types::secret::SECRET_LEN;
use shared_types::{CurveKind, SecretScalar, TokenId};
use subtle::ConstantTimeEq;
use tracing::{debug, info, warn};
use zeroize::Zeroizing;

/// Observable phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    Awaiting,
    Revealed,
    Failed,
}

enum State {
    Awaiting(EphemeralKeyPair),
    Revealed,
    Failed,
}

/// One burn-time reveal attempt.
pub struct RevealSession {
    curve: CurveKind,
    policy: RevealPolicy,
    local_public: [u8; 32],
    state: State,
}

impl RevealSession {
    /// Start a session with an existing ephemeral pair.
    pub fn new(curve: CurveKind, keypair: EphemeralKeyPair, policy: RevealPolicy) -> Self {
        Self {
            curve,
            policy,
            local_public: keypair.public_bytes(),
            state: State::Awaiting(keypair),
        }
    }

    /// Start a session with a fresh ephemeral pair.
    pub fn generate<R: RngCore + CryptoRng>(
        curve: CurveKind,
        policy: RevealPolicy,
        rng: &mut R,
    ) -> Self {
        Self::new(curve, EphemeralKeyPair::generate(rng), policy)
    }

    /// The public key to send with the burn call.
    pub fn local_public(&self) -> [u8; 32] {
        self.local_public
    }

    pub fn curve(&self) -> CurveKind {
        self.curve
    }

    pub fn phase(&self) -> RevealPhase {
        match self.state {
            State::Awaiting(_) => RevealPhase::Awaiting,
            State::Revealed => RevealPhase::Revealed,
            State::Failed => RevealPhase::Failed,
        }
    }

    /// Open `sealed` and recover the secret.
    ///
    /// When `expected` is given and the policy enables verification, the
    /// secret must re-derive `expected` on the session's curve.
    ///
    /// # Errors
    ///
    /// - `SessionClosed` if the session already finished
    /// - `CiphertextTooLong` if the policy limit is exceeded
    /// - `AuthenticationFailure` for any key or ciphertext problem
    /// - `InvalidLength` if the authenticated plaintext is not 32 bytes
    /// - `TokenIdMismatch` if verification fails
    pub fn reveal(
        &mut self,
        sealed: SealedReveal,
        expected: Option<&TokenId>,
    ) -> Result<RevealedSecret, RevealError> {
        let keypair = match std::mem::replace(&mut self.state, State::Failed) {
            State::Awaiting(keypair) => keypair,
            _ => return Err(RevealError::SessionClosed),
        };

        match self.open(keypair, sealed, expected) {
            Ok(revealed) => {
                self.state = State::Revealed;
                info!(curve = %self.curve, verified = revealed.verified, "secret revealed");
                Ok(revealed)
            }
            Err(e) => {
                warn!(curve = %self.curve, "reveal failed");
                Err(e)
            }
        }
    }

    fn open(
        &self,
        keypair: EphemeralKeyPair,
        sealed: SealedReveal,
        expected: Option<&TokenId>,
    ) -> Result<RevealedSecret, RevealError> {
        let len = sealed.ciphertext().len();
        if len > self.policy.max_ciphertext_len {
            return Err(RevealError::CiphertextTooLong {
                len,
                max: self.policy.max_ciphertext_len,
            });
        }

        let key = agree(keypair, sealed.contract_ephemeral_public())?;
        let nonce = reveal_nonce(&self.local_public);
        let plaintext = Zeroizing::new(
            decrypt(&key, &nonce, sealed.ciphertext())
                .map_err(|_| RevealError::AuthenticationFailure)?,
        );

        if plaintext.len() != SECRET_LEN {
            return Err(RevealError::InvalidLength {
                expected: SECRET_LEN,
                actual: plaintext.len(),
            });
        }
        let secret = SecretScalar::from_slice(&plaintext)
            .map_err(|_| RevealError::AuthenticationFailure)?;

        let verified = match expected {
            Some(expected) if self.policy.verify_token_id => {
                let derived = secret_to_token_id(self.curve, &secret)?;
                if !bool::from(derived.as_bytes().ct_eq(expected.as_bytes())) {
                    return Err(RevealError::TokenIdMismatch);
                }
                debug!(token_id = %expected, "revealed secret matches token id");
                true
            }
            _ => false,
        };

        Ok(RevealedSecret::new(
            self.curve,
            expected.copied(),
            verified,
            secret,
        ))
    }
}

impl std::fmt::Debug for RevealSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RevealSession")
            .field("curve", &self.curve)
            .field("phase", &self.phase())
            .finish_non_exhaustive()
    }
}
