//! Command implementations, kept free of argument parsing and printing.

use crate::config::KeytoolConfig;
use anyhow::{bail, Context};
use k7_02_address_derivation::{AddressDerivationApi, AddressDerivationService, AddressSet};
use k7_03_confidential_reveal::{
    BurnEvent, ConfidentialRevealApi, InMemoryBurnEvents, RevealSealer, RevealService,
    RevealSession, RevealedSecret, SealedReveal,
};
use rand::{CryptoRng, RngCore};
use serde::Serialize;
use shared_crypto::EphemeralKeyPair;
use shared_types::{CurveKind, SecretScalar, TokenId};
use tracing::info;
use zeroize::Zeroizing;

/// Where a `pubkeys` request gets its key material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyInput {
    SecretHex(String),
    SecretBase64(String),
    Brainseed(String),
    Mnemonic(String),
    /// Hex (`0x`) or decimal token id.
    TokenId(String),
}

/// Parse a token id given as `0x` hex or decimal.
pub fn parse_token_id(s: &str) -> anyhow::Result<TokenId> {
    let id = if s.starts_with("0x") || s.starts_with("0X") {
        TokenId::from_hex(s)
    } else {
        TokenId::from_decimal(s)
    };
    id.with_context(|| format!("invalid token id {s:?}"))
}

fn parse_key32(label: &str, s: &str) -> anyhow::Result<Zeroizing<[u8; 32]>> {
    let digits = s.strip_prefix("0x").unwrap_or(s);
    let bytes =
        Zeroizing::new(hex::decode(digits).with_context(|| format!("{label} is not hex"))?);
    if bytes.len() != 32 {
        bail!("{label} must be 32 bytes, got {}", bytes.len());
    }
    let mut out = Zeroizing::new([0u8; 32]);
    out.copy_from_slice(&bytes);
    Ok(out)
}

fn secret_from(input: &KeyInput) -> anyhow::Result<Option<SecretScalar>> {
    let secret = match input {
        KeyInput::SecretHex(s) => SecretScalar::from_hex(s).context("invalid hex secret")?,
        KeyInput::SecretBase64(s) => {
            SecretScalar::from_base64(s).context("invalid base64 secret")?
        }
        KeyInput::Brainseed(s) => SecretScalar::from_brainseed(s),
        KeyInput::Mnemonic(s) => SecretScalar::from_mnemonic(s).context("invalid mnemonic")?,
        KeyInput::TokenId(_) => return Ok(None),
    };
    Ok(Some(secret))
}

/// Address sets for a secret or a token id.
pub fn pubkeys(curve: CurveKind, input: &KeyInput) -> anyhow::Result<Vec<AddressSet>> {
    let service = AddressDerivationService::default();
    let sets = match (input, secret_from(input)?) {
        (_, Some(secret)) => service
            .secret_to_addresses(curve, &secret)
            .with_context(|| format!("cannot derive {curve} addresses"))?,
        (KeyInput::TokenId(s), None) => {
            let id = parse_token_id(s)?;
            service
                .token_id_to_addresses(curve, &id)
                .with_context(|| format!("token id {id} is not a {curve} key"))?
        }
        (_, None) => bail!("no key material given"),
    };
    Ok(sets)
}

/// A freshly generated holder pair.
#[derive(Debug, Serialize)]
pub struct Keygen {
    pub x25519_public: String,
    pub x25519_secret: String,
}

/// Generate the ephemeral pair a holder sends with a burn call.
pub fn keygen<R: RngCore + CryptoRng>(rng: &mut R) -> Keygen {
    let pair = EphemeralKeyPair::generate(rng);
    Keygen {
        x25519_public: format!("0x{}", hex::encode(pair.public_bytes())),
        x25519_secret: format!("0x{}", hex::encode(*pair.secret_bytes())),
    }
}

/// Play the contract's side of a burn: seal `secret` for `holder_public`.
pub fn burn<R: RngCore + CryptoRng>(
    curve: CurveKind,
    secret_hex: &str,
    holder_public: &str,
    rng: &mut R,
) -> anyhow::Result<BurnEvent> {
    let secret = SecretScalar::from_hex(secret_hex).context("invalid hex secret")?;
    let holder_public = parse_key32("holder public key", holder_public)?;
    let token_id = k7_01_curve_codec::secret_to_token_id(curve, &secret)
        .with_context(|| format!("cannot mint a {curve} token id"))?;

    let event = RevealSealer::new()
        .burn(token_id, &secret, &holder_public, rng)
        .context("sealing failed")?;
    info!(%curve, token_id = %token_id, "burn event sealed");
    Ok(event)
}

/// What the holder knows when opening a burn.
#[derive(Debug, Clone)]
pub struct RevealRequest {
    pub curve: CurveKind,
    pub x25519_secret: String,
    pub contract_public: String,
    pub ciphertext: String,
    pub token_id: Option<String>,
}

/// Open a sealed secret with the holder's X25519 secret.
///
/// With a token id the event goes through `RevealService`, which checks the
/// secret against it unless the configuration disables verification.
pub async fn reveal(
    config: &KeytoolConfig,
    request: &RevealRequest,
) -> anyhow::Result<RevealedSecret> {
    let ephemeral = parse_key32("x25519 secret", &request.x25519_secret)?;
    let sealed = SealedReveal::from_hex(&request.contract_public, &request.ciphertext)
        .context("invalid burn event")?;

    let revealed = match &request.token_id {
        Some(id) => {
            let token_id = parse_token_id(id)?;
            let source: InMemoryBurnEvents =
                std::iter::once(BurnEvent::new(token_id, &sealed)).collect();
            let service = RevealService::new(source, config.reveal_policy())
                .context("invalid reveal policy")?;
            let session = service.resume(request.curve, *ephemeral);
            service
                .reveal(session, &token_id)
                .await
                .context("reveal failed")?
        }
        None => {
            let mut session = RevealSession::new(
                request.curve,
                EphemeralKeyPair::from_secret_bytes(*ephemeral),
                config.reveal_policy(),
            );
            session.reveal(sealed, None).context("reveal failed")?
        }
    };
    Ok(revealed)
}
