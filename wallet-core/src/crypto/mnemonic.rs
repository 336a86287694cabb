// wallet-core/src/crypto/mnemonic.rs
//
// Seed Module - Phrase → 64-byte Seed
// PBKDF2-HMAC-SHA512, 2048 rounds, salt = "mnemonic" || passphrase
//
// Phrase KHÔNG được map qua BIP-39 wordlist: từng byte UTF-8 của phrase
// được dùng trực tiếp làm password. Với một phrase BIP-39 hợp lệ kết quả
// trùng với BIP-39 seed, nhưng phrase tùy ý (không có checksum) vẫn hợp lệ.

use crate::error::{CryptoError, WalletError, WalletResult};
use hmac::Hmac;
use sha2::Sha512;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Seed length in bytes
pub const SEED_LEN: usize = 64;

/// PBKDF2 iteration count
pub const PBKDF2_ROUNDS: u32 = 2048;

/// Salt prefix, passphrase (the "25th word") gets appended
pub const SALT_PREFIX: &str = "mnemonic";

// =============================================================================
// SEED
// =============================================================================
/// 64-byte stretched seed, zeroed on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Seed([u8; SEED_LEN]);

impl Seed {
    #[inline]
    pub fn from_bytes(bytes: [u8; SEED_LEN]) -> Self {
        Self(bytes)
    }

    /// Copy a raw seed buffer.
    ///
    /// # Errors
    /// `Validation` if the buffer is not exactly 64 bytes.
    pub fn from_slice(bytes: &[u8]) -> WalletResult<Self> {
        let bytes: [u8; SEED_LEN] = bytes.try_into().map_err(|_| {
            WalletError::Validation(format!(
                "Invalid seed length: expected {} bytes, got {}",
                SEED_LEN,
                bytes.len()
            ))
        })?;
        Ok(Self(bytes))
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; SEED_LEN] {
        &self.0
    }
}

impl AsRef<[u8]> for Seed {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl PartialEq for Seed {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for Seed {}

impl std::fmt::Debug for Seed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Seed").field(&"[REDACTED]").finish()
    }
}

// =============================================================================
// SEED DERIVER
// =============================================================================
pub struct SeedDeriver;

impl SeedDeriver {
    /// Build the PBKDF2 salt: `"mnemonic"` + passphrase.
    #[inline]
    pub fn salt(passphrase: &str) -> String {
        format!("{}{}", SALT_PREFIX, passphrase)
    }

    /// PBKDF2-HMAC-SHA512(phrase, salt, 2048) → 64 bytes
    ///
    /// Blocking call. Identical `(phrase, salt)` always yields the identical seed.
    pub fn derive_seed(phrase: &str, salt: &str) -> WalletResult<Seed> {
        let mut out = [0u8; SEED_LEN];
        pbkdf2::pbkdf2::<Hmac<Sha512>>(phrase.as_bytes(), salt.as_bytes(), PBKDF2_ROUNDS, &mut out)
            .map_err(|e| WalletError::Crypto(CryptoError::KdfFailure(e.to_string())))?;

        let seed = Seed::from_bytes(out);
        out.zeroize();
        Ok(seed)
    }
}

// =============================================================================
// SECRET PHRASE
// =============================================================================
/// Secret phrase dùng làm PBKDF2 password
///
/// # Security Architecture
/// - **ZeroizeOnDrop**: Phrase được tự động ghi đè bằng 0 khi struct bị drop
/// - **No Debug Leak**: Custom Debug impl không hiển thị phrase
///
/// Không validate wordlist hay checksum. The phrase is kept byte-for-byte
/// as given, whitespace included.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretPhrase {
    phrase: String,
}

// Custom Debug - KHÔNG BAO GIỜ hiển thị phrase
impl std::fmt::Debug for SecretPhrase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretPhrase")
            .field("word_count", &self.word_count())
            .field("phrase", &"[REDACTED]")
            .finish()
    }
}

impl SecretPhrase {
    /// Wrap a phrase.
    ///
    /// # Errors
    /// `Validation` nếu phrase rỗng. Whitespace-only phrases are kept
    /// as is: every byte feeds PBKDF2.
    pub fn new(phrase: impl Into<String>) -> WalletResult<Self> {
        let phrase = phrase.into();
        if phrase.is_empty() {
            return Err(WalletError::Validation(
                "Secret phrase must not be empty".to_string(),
            ));
        }
        Ok(Self { phrase })
    }

    /// Lấy phrase
    ///
    /// # Warning
    /// Cẩn thận khi hiển thị hoặc log giá trị này!
    #[inline]
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    /// Lấy danh sách các words
    pub fn words(&self) -> Vec<&str> {
        self.phrase.split_whitespace().collect()
    }

    #[inline]
    pub fn word_count(&self) -> usize {
        self.phrase.split_whitespace().count()
    }

    /// Tạo seed từ phrase
    ///
    /// # Arguments
    /// * `passphrase` - Optional 25th word, appended to the `"mnemonic"` salt
    pub fn to_seed(&self, passphrase: Option<&str>) -> WalletResult<Seed> {
        let salt = SeedDeriver::salt(passphrase.unwrap_or(""));
        SeedDeriver::derive_seed(&self.phrase, &salt)
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================
