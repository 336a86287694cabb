// wallet-core/src/api/mod.rs
//
// Public API - phrase → (private key, address)

use crate::chains::evm::{EvmAddress, ADDRESS_LEN};
use crate::config::DerivationConfig;
use crate::crypto::key_deriver::{ExtendedKey, KeyDeriver};
use crate::crypto::paths::DerivationPaths;
use crate::error::WalletResult;
use tracing::{debug, info};
use zeroize::Zeroizing;

/// Kết quả cuối cùng của pipeline: private key + address
pub struct AccountCredential {
    path: String,
    private_key: Zeroizing<[u8; 32]>,
    address: [u8; ADDRESS_LEN],
}

// Custom Debug - KHÔNG BAO GIỜ hiển thị private key
impl std::fmt::Debug for AccountCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountCredential")
            .field("path", &self.path)
            .field("address", &self.address_hex())
            .finish_non_exhaustive()
    }
}

impl AccountCredential {
    fn from_extended_key(path: String, key: &ExtendedKey) -> WalletResult<Self> {
        let address = EvmAddress::from_private_key(key.private_key())?;
        Ok(Self {
            path,
            private_key: Zeroizing::new(*key.private_key()),
            address,
        })
    }

    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// # Warning
    /// Cẩn thận khi hiển thị hoặc log giá trị này!
    #[inline]
    pub fn private_key(&self) -> &[u8; 32] {
        &self.private_key
    }

    /// `"0x"` + 64 lowercase hex chars
    pub fn private_key_hex(&self) -> Zeroizing<String> {
        Zeroizing::new(format!("0x{}", hex::encode(&self.private_key[..])))
    }

    #[inline]
    pub fn address(&self) -> &[u8; ADDRESS_LEN] {
        &self.address
    }

    /// `"0x"` + 40 lowercase hex chars
    pub fn address_hex(&self) -> String {
        EvmAddress::to_hex(&self.address)
    }

    /// EIP-55 checksummed address
    pub fn address_checksum(&self) -> String {
        EvmAddress::checksum(&self.address)
    }
}

/// Full pipeline: phrase + passphrase → seed → master → path → address
///
/// The credential's path is the one actually derived, which differs from
/// `config.path` only if an out-of-range child forced a retry.
pub fn generate_account(config: &DerivationConfig) -> WalletResult<AccountCredential> {
    let indices = config.indices()?;
    let seed = config.phrase.to_seed(Some(config.passphrase.as_str()))?;
    debug!(path = %config.path, "seed derived");

    let (key, resolved) = KeyDeriver::derive_resolved(&seed, &indices)?;
    let path = DerivationPaths::format(&resolved);
    let credential = AccountCredential::from_extended_key(path, &key)?;

    info!(path = %credential.path, address = %credential.address_hex(), "account derived");
    Ok(credential)
}

/// Derive several address indices below the parent of `config.path`.
///
/// The seed and the base node are computed once. Each credential is
/// labelled with the index it was derived at.
///
/// # Errors
/// `Config` if the last level of `config.path` is hardened.
pub fn generate_accounts(
    config: &DerivationConfig,
    indices: std::ops::Range<u32>,
) -> WalletResult<Vec<AccountCredential>> {
    let base_path = config.base_path()?;
    let seed = config.phrase.to_seed(Some(config.passphrase.as_str()))?;

    let keys = KeyDeriver::derive_batch(&seed, &base_path, indices)?;
    let accounts = keys
        .iter()
        .map(|(index, key)| {
            AccountCredential::from_extended_key(format!("{}/{}", base_path, index), key)
        })
        .collect::<WalletResult<Vec<_>>>()?;

    info!(base_path = %base_path, count = accounts.len(), "accounts derived");
    Ok(accounts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::mnemonic::SecretPhrase;
    use crate::error::WalletError;

    const TEST_PHRASE: &str = "one two three four five six seven eight nine ten eleven twelve";

    fn config() -> DerivationConfig {
        DerivationConfig::ethereum(SecretPhrase::new(TEST_PHRASE).unwrap())
    }

    #[test]
    fn test_generate_account_default() {
        let account = generate_account(&config()).unwrap();
        assert_eq!(account.path(), "m/44'/60'/0'/0/0");
        assert_eq!(
            account.address_hex(),
            "0x27ea1eaf09453181d946b1171adde62c0c31ca0e"
        );
    }

    #[test]
    fn test_private_key_hex_shape() {
        let account = generate_account(&config()).unwrap();
        let hex_key = account.private_key_hex();
        assert_eq!(hex_key.len(), 66);
        assert!(hex_key.starts_with("0x"));
        assert_eq!(
            EvmAddress::derive_from_slice(account.private_key()).unwrap(),
            account.address_hex()
        );
    }

    #[test]
    fn test_checksum_matches_lowercase() {
        let account = generate_account(&config()).unwrap();
        assert!(EvmAddress::equals(
            &account.address_checksum(),
            &account.address_hex()
        ));
    }

    #[test]
    fn test_generate_accounts_matches_single() {
        let config = config();
        let batch = generate_accounts(&config, 0..3).unwrap();
        assert_eq!(batch.len(), 3);

        for (i, account) in batch.iter().enumerate() {
            let single = generate_account(&config.clone().with_account(0, i as u32)).unwrap();
            assert_eq!(account.path(), single.path());
            assert_eq!(account.address(), single.address());
        }
        assert_eq!(
            batch[0].address_hex(),
            "0x27ea1eaf09453181d946b1171adde62c0c31ca0e"
        );
    }

    #[test]
    fn test_generate_accounts_rejects_hardened_level() {
        let config = config().with_path("m/44'/60'/0'");
        assert!(matches!(
            generate_accounts(&config, 0..2),
            Err(WalletError::Config(_))
        ));
    }

    #[test]
    fn test_debug_does_not_leak_private_key() {
        let account = generate_account(&config()).unwrap();
        let debug_output = format!("{:?}", account);
        assert!(!debug_output.contains(&hex::encode(account.private_key())));
        assert!(debug_output.contains(&account.address_hex()));
    }
}
