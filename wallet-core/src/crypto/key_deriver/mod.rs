// wallet-core/src/crypto/key_deriver/mod.rs
//
// Key Derivation Engine - secp256k1 / BIP-32 style
//
// Kiến trúc:
// ┌─────────────────────────────────────────────────┐
// │  Seed (64 bytes, PBKDF2 từ secret phrase)       │
// │                    │                            │
// │                    ▼                            │
// │  Master: HMAC-SHA512("Bitcoin seed", seed)      │
// │                    │                            │
// │                    ▼                            │
// │  Child fold: m/44'/60'/0'/0/0                   │
// │  ├─ hardened: 0x00 || k_par || ser32(i)         │
// │  └─ normal:   point(k_par) (65B) || ser32(i)    │
// │                    │                            │
// │                    ▼                            │
// │  ExtendedKey (private key + chain code)         │
// └─────────────────────────────────────────────────┘

pub mod secp256k1;

// Re-exports
pub use secp256k1::Secp256k1Deriver;

use crate::crypto::curve::CurveOps;
use crate::crypto::mnemonic::Seed;
use crate::crypto::paths::{DerivationIndex, DerivationPaths};
use crate::error::{CryptoError, WalletError, WalletResult};
use k256::elliptic_curve::PrimeField;
use k256::{PublicKey, Scalar};
use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop};

// =============================================================================
// COMMON TYPES
// =============================================================================
/// A node of the derivation tree: private key + chain code.
///
/// # Invariant
/// `1 <= private_key < n`. Both constructors enforce it, so every value of
/// this type holds a usable secp256k1 secret.
///
/// # Security
/// - Zeroized on drop
/// - Debug output redacted
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct ExtendedKey {
    private_key: [u8; 32],
    chain_code: [u8; 32],
}

impl std::fmt::Debug for ExtendedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtendedKey")
            .field("private_key", &"[REDACTED]")
            .field("chain_code", &"[REDACTED]")
            .finish()
    }
}

impl ExtendedKey {
    /// Build an extended key, checking the private key range.
    ///
    /// # Errors
    /// `InvalidScalar` nếu private key bằng 0 hoặc `>= n`.
    pub fn new(private_key: [u8; 32], chain_code: [u8; 32]) -> WalletResult<Self> {
        let scalar = CurveOps::scalar_from_bytes(&private_key)
            .ok_or(WalletError::Crypto(CryptoError::InvalidScalar))?;
        if scalar == Scalar::ZERO {
            return Err(WalletError::Crypto(CryptoError::InvalidScalar));
        }
        Ok(Self {
            private_key,
            chain_code,
        })
    }

    /// Caller guarantees `scalar != 0`.
    pub(crate) fn from_scalar(scalar: &Scalar, chain_code: [u8; 32]) -> Self {
        Self {
            private_key: scalar.to_repr().into(),
            chain_code,
        }
    }

    #[inline]
    pub fn private_key(&self) -> &[u8; 32] {
        &self.private_key
    }

    #[inline]
    pub fn chain_code(&self) -> &[u8; 32] {
        &self.chain_code
    }

    pub fn to_scalar(&self) -> WalletResult<Scalar> {
        CurveOps::scalar_from_bytes(&self.private_key)
            .ok_or(WalletError::Crypto(CryptoError::InvalidScalar))
    }

    /// `private_key * G`
    pub fn public_key(&self) -> WalletResult<PublicKey> {
        CurveOps::public_point(&self.private_key)
    }
}

// =============================================================================
// UNIFIED DERIVER
// =============================================================================
/// Entry point: seed + path string → ExtendedKey
pub struct KeyDeriver;

impl KeyDeriver {
    /// Derive the extended key at `path`
    ///
    /// # Arguments
    /// * `seed` - 64-byte seed
    /// * `path` - Derivation path (e.g., "m/44'/60'/0'/0/0")
    pub fn derive(seed: &Seed, path: &str) -> WalletResult<ExtendedKey> {
        let indices = DerivationPaths::parse(path)?;
        debug!(path, "deriving extended key");
        Self::derive_indices(seed, &indices)
    }

    /// Derive along already-parsed indices.
    pub fn derive_indices(seed: &Seed, indices: &[DerivationIndex]) -> WalletResult<ExtendedKey> {
        Self::derive_resolved(seed, indices).map(|(key, _)| key)
    }

    /// Like [`derive_indices`](Self::derive_indices), also returning the
    /// indices actually used after any out-of-range retry.
    pub fn derive_resolved(
        seed: &Seed,
        indices: &[DerivationIndex],
    ) -> WalletResult<(ExtendedKey, Vec<DerivationIndex>)> {
        let master = Secp256k1Deriver::master_key_generate(seed.as_ref())?;
        Secp256k1Deriver::derive_path_resolved(master, indices)
    }

    /// Same as [`derive`](Self::derive) for a raw seed buffer.
    pub fn derive_from_slice(seed: &[u8], path: &str) -> WalletResult<ExtendedKey> {
        let seed = Seed::from_slice(seed)?;
        Self::derive(&seed, path)
    }

    /// Batch derive: derive tới base_path 1 lần, rồi derive từng index
    ///
    /// Hiệu quả hơn N lần gọi `derive()` vì master → base chỉ tính 1 lần.
    ///
    /// # Arguments
    /// * `seed` - 64 bytes
    /// * `base_path` - Path tới trước index cuối (e.g. "m/44'/60'/0'/0")
    /// * `indices` - Range of normal address indices (e.g. 0..10), `Validation`
    ///   error if it reaches the hardened half
    ///
    /// Mỗi key đi kèm index thực sự được dùng (khác index yêu cầu nếu retry).
    pub fn derive_batch(
        seed: &Seed,
        base_path: &str,
        indices: std::ops::Range<u32>,
    ) -> WalletResult<Vec<(DerivationIndex, ExtendedKey)>> {
        let base = Self::derive(seed, base_path)?;

        // Fan-out từ base
        Secp256k1Deriver::derive_children_with(&base, indices, Secp256k1Deriver::child_key_derive)
    }
}

// =============================================================================
// TESTS
// =============================================================================
