// wallet-core/src/lib.rs

//! # phrase-wallet
//!
//! Deterministic EVM account derivation from a free-form secret phrase.
//!
//! ```text
//! phrase + "mnemonic"‖passphrase ─PBKDF2─▶ seed ─HMAC─▶ master ─m/44'/60'/0'/0/0─▶ key ─Keccak─▶ 0x…
//! ```
//!
//! The phrase is used verbatim as the PBKDF2 password; no BIP-39 wordlist
//! or checksum is involved.

pub mod api;
pub mod chains;
pub mod config;
pub mod crypto;
pub mod error;

pub use api::{generate_account, generate_accounts, AccountCredential};
pub use chains::evm::EvmAddress;
pub use config::DerivationConfig;
pub use crypto::{
    CurveOps, DerivationIndex, DerivationPaths, ExtendedKey, KeyDeriver, SecretPhrase, Seed,
    SeedDeriver,
};
pub use error::{CryptoError, WalletError, WalletResult};
