//! Key721 offline key tool.
//!
//! Usage:
//!   k7-keytool pubkeys secp256k1 --secret-hex 0x...
//!   k7-keytool pubkeys bn254 --token-id 0x...
//!   k7-keytool keygen
//!   k7-keytool reveal ed25519 --x25519 0x... --contract-public 0x... --ciphertext 0x...

use anyhow::Context;
use clap::{Args as ClapArgs, Parser, Subcommand};
use k7_02_address_derivation::{AddressDerivationApi, AddressDerivationService};
use k7_keytool::commands::{self, KeyInput, RevealRequest};
use k7_keytool::config::KeytoolConfig;
use k7_keytool::logging::init_logging;
use shared_types::CurveKind;

#[derive(Parser, Debug)]
#[command(name = "k7-keytool")]
#[command(about = "Key721 addresses, burn keys and secret reveal", long_about = None)]
struct Args {
    /// Log level (overrides K7_LOG_LEVEL)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Emit JSON logs on stderr
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every address a secret or token id maps to
    Pubkeys {
        /// Curve (defaults to K7_DEFAULT_CURVE)
        curve: Option<CurveKind>,

        #[command(flatten)]
        key: KeySource,
    },

    /// Generate the X25519 pair to send with a burn call
    Keygen,

    /// Seal a secret as the contract does on burn
    Burn {
        curve: Option<CurveKind>,

        /// Token secret, 0x-prefixed hex
        #[arg(long)]
        secret_hex: String,

        /// Holder X25519 public key
        #[arg(long)]
        holder_public: String,
    },

    /// Open the sealed secret from a burn event
    Reveal {
        curve: Option<CurveKind>,

        /// Holder X25519 secret from `keygen`
        #[arg(long = "x25519")]
        x25519_secret: String,

        /// Contract ephemeral public key from the event
        #[arg(long)]
        contract_public: String,

        /// Ciphertext from the event
        #[arg(long)]
        ciphertext: String,

        /// Burned token id; enables verification
        #[arg(long)]
        token_id: Option<String>,

        /// Also print every encoding and address of the secret to stderr
        #[arg(long)]
        debug: bool,
    },
}

#[derive(ClapArgs, Debug)]
#[group(required = true, multiple = false)]
struct KeySource {
    /// 0x-prefixed hex secret
    #[arg(long)]
    secret_hex: Option<String>,

    /// Base64 secret
    #[arg(long)]
    secret_b64: Option<String>,

    /// Passphrase hashed with SHA-256
    #[arg(long)]
    brainseed: Option<String>,

    /// 24-word BIP-39 mnemonic
    #[arg(long)]
    mnemonic: Option<String>,

    /// Token id, 0x hex or decimal
    #[arg(long)]
    token_id: Option<String>,
}

impl KeySource {
    fn into_input(self) -> Option<KeyInput> {
        self.secret_hex
            .map(KeyInput::SecretHex)
            .or(self.secret_b64.map(KeyInput::SecretBase64))
            .or(self.brainseed.map(KeyInput::Brainseed))
            .or(self.mnemonic.map(KeyInput::Mnemonic))
            .or(self.token_id.map(KeyInput::TokenId))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = KeytoolConfig::from_env()
        .context("invalid environment")?
        .with_overrides(args.log_level, args.json_logs);
    init_logging(&config)?;

    match args.command {
        Command::Pubkeys { curve, key } => {
            let curve = curve.unwrap_or(config.default_curve);
            let input = key.into_input().context("no key material given")?;
            let sets = commands::pubkeys(curve, &input)?;
            println!("{}", serde_json::to_string_pretty(&sets)?);
        }
        Command::Keygen => {
            let pair = commands::keygen(&mut rand::thread_rng());
            println!("{}", serde_json::to_string_pretty(&pair)?);
        }
        Command::Burn {
            curve,
            secret_hex,
            holder_public,
        } => {
            let curve = curve.unwrap_or(config.default_curve);
            let event =
                commands::burn(curve, &secret_hex, &holder_public, &mut rand::thread_rng())?;
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        Command::Reveal {
            curve,
            x25519_secret,
            contract_public,
            ciphertext,
            token_id,
            debug,
        } => {
            let request = RevealRequest {
                curve: curve.unwrap_or(config.default_curve),
                x25519_secret,
                contract_public,
                ciphertext,
                token_id,
            };
            let revealed = commands::reveal(&config, &request).await?;
            let secret = revealed.secret();

            if debug {
                eprintln!("curve:    {}", revealed.curve);
                eprintln!("verified: {}", revealed.verified);
                eprintln!("hex:      {}", secret.to_hex().as_str());
                eprintln!("base64:   {}", secret.to_base64().as_str());
                eprintln!("bip39:    {}", secret.to_mnemonic()?.as_str());
                eprintln!("x25519:   {}", request.x25519_secret);
                let sets = AddressDerivationService::default()
                    .secret_to_addresses(revealed.curve, secret)?;
                eprintln!("{}", serde_json::to_string_pretty(&sets)?);
            }
            println!("{}", secret.to_hex().as_str());
        }
    }

    Ok(())
}
