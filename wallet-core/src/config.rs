// wallet-core/src/config.rs

use crate::crypto::mnemonic::{SecretPhrase, SeedDeriver};
use crate::crypto::paths::{coin_type, DerivationIndex, DerivationPaths, PURPOSE_BIP44};
use crate::error::{WalletError, WalletResult};
use std::ops::Range;
use zeroize::Zeroizing;

/// Inputs cho một lần derivation: phrase + 25th word + path
#[derive(Clone)]
pub struct DerivationConfig {
    pub phrase: SecretPhrase,
    /// Optional 25th word, appended to the `"mnemonic"` salt
    pub passphrase: Zeroizing<String>,
    pub path: String,
}

// Custom Debug - KHÔNG hiển thị phrase / passphrase
impl std::fmt::Debug for DerivationConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivationConfig")
            .field("phrase", &self.phrase)
            .field("passphrase", &"[REDACTED]")
            .field("path", &self.path)
            .finish()
    }
}

impl DerivationConfig {
    /// Ethereum account #0: `m/44'/60'/0'/0/0`, no passphrase.
    pub fn ethereum(phrase: SecretPhrase) -> Self {
        Self {
            phrase,
            passphrase: Zeroizing::new(String::new()),
            path: DerivationPaths::EVM_0.to_string(),
        }
    }

    pub fn with_passphrase(mut self, passphrase: impl Into<String>) -> Self {
        self.passphrase = Zeroizing::new(passphrase.into());
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// `m/44'/60'/{account}'/0/{index}`
    pub fn with_account(self, account: u32, index: u32) -> Self {
        self.with_path(DerivationPaths::evm_account(account, index))
    }

    /// PBKDF2 salt, `"mnemonic"` + passphrase
    pub fn salt(&self) -> Zeroizing<String> {
        Zeroizing::new(SeedDeriver::salt(&self.passphrase))
    }

    /// Parsed path.
    ///
    /// # Errors
    /// `Config` if the path does not parse.
    pub fn indices(&self) -> WalletResult<Vec<DerivationIndex>> {
        DerivationPaths::parse(&self.path)
            .map_err(|e| WalletError::Config(format!("derivation path: {}", e)))
    }

    /// Last level of the path, which must be a normal index.
    ///
    /// # Errors
    /// `Config` nếu path rỗng hoặc level cuối là hardened.
    pub fn address_index(&self) -> WalletResult<u32> {
        match self.indices()?.last() {
            Some(index) if !index.is_hardened() => Ok(index.raw()),
            Some(index) => Err(WalletError::Config(format!(
                "last path level {} is hardened, batches need a normal address level",
                index
            ))),
            None => Err(WalletError::Config(
                "derivation path has no address level".to_string(),
            )),
        }
    }

    /// `count` consecutive address indices starting at the path's own index.
    pub fn batch_range(&self, count: u32) -> WalletResult<Range<u32>> {
        let start = self.address_index()?;
        Ok(start..start.saturating_add(count))
    }

    /// Path of the parent node, used as the fan-out base for batches.
    pub fn base_path(&self) -> WalletResult<String> {
        self.address_index()?;
        let mut indices = self.indices()?;
        indices.pop();
        Ok(DerivationPaths::format(&indices))
    }

    /// True when the path is the standard Ethereum BIP-44 layout.
    pub fn is_ethereum_path(&self) -> bool {
        match self.indices() {
            Ok(indices) => {
                indices.len() == 5
                    && indices[0] == DerivationIndex::hardened(PURPOSE_BIP44)
                    && indices[1] == DerivationIndex::hardened(coin_type::ETHEREUM)
            }
            Err(_) => false,
        }
    }
}
