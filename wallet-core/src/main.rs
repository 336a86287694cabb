// wallet-core/src/main.rs

//! # phrase-wallet CLI
//!
//! Prints the EVM account derived from a secret phrase and optional 25th word.

use clap::Parser;
use phrase_wallet::{
    generate_account, generate_accounts, DerivationConfig, DerivationPaths, SecretPhrase,
};
use tracing_subscriber::EnvFilter;

/// Derive an EVM address from a secret phrase.
#[derive(Parser)]
#[command(name = "phrase-wallet", version, about)]
struct Cli {
    /// Secret phrase, space-separated words (used verbatim, no wordlist check).
    #[arg(long, env = "PHRASE_WALLET_PHRASE", hide_env_values = true)]
    phrase: String,

    /// Optional 25th word, appended to the "mnemonic" salt.
    #[arg(
        long,
        env = "PHRASE_WALLET_PASSPHRASE",
        default_value = "",
        hide_env_values = true
    )]
    passphrase: String,

    /// Derivation path (default: m/44'/60'/0'/0/0).
    #[arg(long, default_value = DerivationPaths::EVM_0)]
    path: String,

    /// Derive this many consecutive address indices, starting at the last
    /// level of --path. That level must be a normal (non-hardened) index.
    #[arg(long)]
    count: Option<u32>,

    /// Print EIP-55 checksummed addresses instead of lowercase.
    #[arg(long)]
    checksum: bool,

    /// Also print the phrase, the 25th word and the private key.
    #[arg(long)]
    show_private_key: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let phrase = SecretPhrase::new(cli.phrase)?;
    let config = DerivationConfig::ethereum(phrase)
        .with_passphrase(cli.passphrase)
        .with_path(cli.path);

    if cli.show_private_key {
        println!("Mnemonic: {}", config.phrase.phrase());
        println!("25th Word: {}", config.passphrase.as_str());
    }

    let accounts = match cli.count {
        Some(count) => generate_accounts(&config, config.batch_range(count)?)?,
        None => vec![generate_account(&config)?],
    };

    for account in &accounts {
        let address = if cli.checksum {
            account.address_checksum()
        } else {
            account.address_hex()
        };

        if accounts.len() > 1 {
            println!("Path: {}", account.path());
        }
        if cli.show_private_key {
            println!("Private Key: {}", account.private_key_hex().as_str());
        }
        println!("Address: {address}");
    }

    Ok(())
}
