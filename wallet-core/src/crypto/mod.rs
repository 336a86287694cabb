// wallet-core/src/crypto/mod.rs

//! Core Cryptography Module
//!
//! This module implements the key-derivation pipeline of the wallet:
//!
//! - **Seed Derivation**: PBKDF2-HMAC-SHA512 seed from a free-form secret phrase via [`SeedDeriver`].
//! - **Key Derivation**: BIP-32 style master + child derivation on secp256k1 via [`KeyDeriver`].
//! - **Curve Operations**: Scalar arithmetic mod n and point multiplication via [`CurveOps`].
//! - **Derivation Paths**: BIP-44 path builders and parsing via [`DerivationPaths`].

pub mod curve;
pub mod key_deriver;
pub mod mnemonic;
pub mod paths;

// Re-exports for cleaner API access
pub use curve::CurveOps;
pub use key_deriver::{ExtendedKey, KeyDeriver, Secp256k1Deriver};
pub use mnemonic::{SecretPhrase, Seed, SeedDeriver};
pub use paths::{DerivationIndex, DerivationPaths};
