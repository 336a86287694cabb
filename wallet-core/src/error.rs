// wallet-core/src/error.rs

use thiserror::Error;

pub type WalletResult<T> = std::result::Result<T, WalletError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WalletError {
    #[error("Cryptography Error: {0}")]
    Crypto(#[from] CryptoError),

    #[error("Validation Error: {0}")]
    Validation(String),

    #[error("Config Error: {0}")]
    Config(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CryptoError {
    #[error("Seed stretching failed: {0}")]
    KdfFailure(String),

    #[error("Master key is out of range for secp256k1")]
    InvalidMasterKey,

    #[error("Child key at index {index:#010x} is out of range for secp256k1")]
    InvalidChildKey { index: u32 },

    #[error("Scalar is zero or not below the curve order")]
    InvalidScalar,

    #[error("Key derivation failed: {0}")]
    DerivationFailed(String),

    #[error("Invalid key format: {0}")]
    InvalidKeyFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crypto_error_converts() {
        let err: WalletError = CryptoError::InvalidMasterKey.into();
        assert_eq!(err, WalletError::Crypto(CryptoError::InvalidMasterKey));
    }

    #[test]
    fn test_child_key_error_shows_index() {
        let err = CryptoError::InvalidChildKey { index: 0x8000002C };
        assert!(err.to_string().contains("0x8000002c"));
    }
}
