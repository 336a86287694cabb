// wallet-core/src/chains/mod.rs

//! Chain-specific encoders. Only EVM for now.

pub mod evm;
