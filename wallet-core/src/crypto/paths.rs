// wallet-core/src/crypto/paths.rs
//
// Derivation Paths Module - EVM HD Wallet Path Generator
// BIP-44 (Purpose), SLIP-44 (Coin Types)

use crate::error::{CryptoError, WalletError, WalletResult};
use bip32::DerivationPath;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// SLIP-44 COIN TYPES
// =============================================================================
/// SLIP-44 Registered Coin Types
/// Ref: https://github.com/satoshilabs/slips/blob/master/slip-0044.md
pub mod coin_type {
    pub const ETHEREUM: u32 = 60; // EVM chains dùng chung coin_type 60
}

/// BIP-44 purpose level.
pub const PURPOSE_BIP44: u32 = 44;

// =============================================================================
// DERIVATION INDEX
// =============================================================================
/// One level of a derivation path.
///
/// Bit 31 set means hardened (`44'`), clear means normal (`0`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DerivationIndex(u32);

impl DerivationIndex {
    pub const HARDENED_FLAG: u32 = 0x8000_0000;

    /// Hardened index `index'`. The top bit of `index` is ignored.
    #[inline]
    pub const fn hardened(index: u32) -> Self {
        Self(index | Self::HARDENED_FLAG)
    }

    /// Normal index. The top bit of `index` is ignored.
    #[inline]
    pub const fn normal(index: u32) -> Self {
        Self(index & !Self::HARDENED_FLAG)
    }

    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn is_hardened(self) -> bool {
        self.0 & Self::HARDENED_FLAG != 0
    }

    /// `ser32(i)`
    #[inline]
    pub const fn to_be_bytes(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    /// Next index in the same half (hardened stays hardened).
    ///
    /// `None` once the half is exhausted.
    pub fn next(self) -> Option<Self> {
        let next = self.0.checked_add(1)?;
        if (next & Self::HARDENED_FLAG) != (self.0 & Self::HARDENED_FLAG) {
            return None;
        }
        Some(Self(next))
    }
}

impl fmt::Display for DerivationIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_hardened() {
            write!(f, "{}'", self.0 & !Self::HARDENED_FLAG)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

// =============================================================================
// DERIVATION PATHS
// =============================================================================
/// Pre-built Derivation Paths cho EVM wallet
///
/// # Conventions
/// - BIP-44: `m/44'/coin'/account'/change/index` (secp256k1)
pub struct DerivationPaths;

impl DerivationPaths {
    // =========================================================================
    // EVM CHAINS (secp256k1) — BIP-44, coin_type = 60
    // Ethereum, BSC, Polygon, Arbitrum, Optimism, Avalanche, Base, zkSync...
    // =========================================================================
    pub const EVM_0: &'static str = "m/44'/60'/0'/0/0";

    /// Base path tới trước address index
    pub const EVM_BASE: &'static str = "m/44'/60'/0'/0";

    /// EVM path with custom address index
    #[inline]
    pub fn evm(index: u32) -> String {
        format!("m/44'/60'/0'/0/{}", index)
    }

    /// EVM path with custom account & index (multi-account)
    #[inline]
    pub fn evm_account(account: u32, index: u32) -> String {
        format!("m/44'/60'/{}'/0/{}", account, index)
    }

    /// `m/44'/60'/0'/0/0` as indices, no parsing involved.
    pub const fn ethereum_default() -> [DerivationIndex; 5] {
        [
            DerivationIndex::hardened(PURPOSE_BIP44),
            DerivationIndex::hardened(coin_type::ETHEREUM),
            DerivationIndex::hardened(0),
            DerivationIndex::normal(0),
            DerivationIndex::normal(0),
        ]
    }

    // =========================================================================
    // CUSTOM PATH BUILDER
    // =========================================================================
    /// Tạo BIP-44 path tùy chỉnh
    ///
    /// # Arguments
    /// * `purpose` - 44 (BIP-44)
    /// * `coin_type` - SLIP-44 coin type (dùng constants từ `coin_type::*`)
    /// * `account` - Account index (thường 0)
    /// * `change` - 0 = external, 1 = internal
    /// * `index` - Address index
    #[inline]
    pub fn bip44(purpose: u32, coin_type: u32, account: u32, change: u32, index: u32) -> String {
        format!(
            "m/{}'/{}'/{}'/{}/{}",
            purpose, coin_type, account, change, index
        )
    }

    // =========================================================================
    // PARSING
    // =========================================================================
    /// Parse `"m/44'/60'/0'/0/0"` thành list of indices
    ///
    /// `"m"` alone is the master key and yields an empty list.
    pub fn parse(path: &str) -> WalletResult<Vec<DerivationIndex>> {
        let path = path.trim();
        let parsed = DerivationPath::from_str(path).map_err(|e| {
            WalletError::Crypto(CryptoError::DerivationFailed(format!(
                "Invalid path '{}': {}",
                path, e
            )))
        })?;

        Ok(parsed
            .into_iter()
            .map(|child| {
                if child.is_hardened() {
                    DerivationIndex::hardened(child.index())
                } else {
                    DerivationIndex::normal(child.index())
                }
            })
            .collect())
    }

    /// Render indices back into `m/...` form.
    pub fn format(indices: &[DerivationIndex]) -> String {
        let mut path = String::from("m");
        for index in indices {
            path.push_str(&format!("/{}", index));
        }
        path
    }

    /// Validate path format
    #[inline]
    pub fn is_valid(path: &str) -> bool {
        Self::parse(path).is_ok()
    }
}

// =============================================================================
// TESTS
// =============================================================================
