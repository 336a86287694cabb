// wallet-core/src/chains/evm/mod.rs

//! Ethereum Virtual Machine (EVM) Chain Support
//!
//! This module provides address encoding for Ethereum and EVM-compatible chains (BSC, Polygon, Avalanche, Base, etc.).
//!
//! # Key Features
//! - **Address Derivation**: Keccak-256 address generation, lowercase or EIP-55 checksummed, via [`EvmAddress`].

pub mod address;

// Re-exports for cleaner API access
pub use address::{EvmAddress, ADDRESS_LEN};
