// wallet-core/src/crypto/key_deriver/secp256k1.rs
//
// secp256k1 Key Derivation — BIP-32 / BIP-44
//
// Dùng cho: Ethereum/EVM
// Algorithm: HMAC-SHA512 hierarchical deterministic derivation
// Reference: https://github.com/bitcoin/bips/blob/master/bip-0032.mediawiki
//
// QUAN TRỌNG: normal (non-hardened) steps hash the full 65-byte
// uncompressed public key, not the 33-byte compressed form used by
// BIP-32. Addresses derived here therefore differ from standard wallets
// for any path containing a normal level; the layout must stay as is
// for existing accounts to keep resolving.

use super::ExtendedKey;
use crate::crypto::curve::{CurveOps, UNCOMPRESSED_POINT_LEN};
use crate::crypto::paths::DerivationIndex;
use crate::error::{CryptoError, WalletError, WalletResult};
use hmac::{Hmac, Mac};
use k256::NonZeroScalar;
use sha2::Sha512;
use std::ops::Range;
use tracing::{debug, warn};
use zeroize::{Zeroize, Zeroizing};

type HmacSha512 = Hmac<Sha512>;

/// secp256k1 Key Deriver
///
/// # Security
/// - Private key + chain code tự động zeroize (`ExtendedKey`)
/// - HMAC output và data buffer được zeroize sau khi dùng
/// - Không lưu intermediate keys: mỗi bước consume parent và trả về child mới
pub struct Secp256k1Deriver;

impl Secp256k1Deriver {
    /// BIP-32 master key seed constant
    const MASTER_SECRET: &'static [u8] = b"Bitcoin seed";

    // =========================================================================
    // MASTER KEY
    // =========================================================================

    /// Derive master key từ seed
    ///
    /// I = HMAC-SHA512(Key = "Bitcoin seed", Data = seed)
    /// IL (32 bytes) = private key
    /// IR (32 bytes) = chain code
    ///
    /// # Errors
    /// `InvalidMasterKey` if IL is zero or `>= n`.
    pub fn master_key_generate(seed: &[u8]) -> WalletResult<ExtendedKey> {
        let mut mac = Self::hmac(Self::MASTER_SECRET)?;
        mac.update(seed);
        let digest = Self::finalize(mac);

        Self::master_from_digest(&digest)
    }

    fn master_from_digest(digest: &[u8; 64]) -> WalletResult<ExtendedKey> {
        let (mut key, chain_code) = Self::split(digest);
        let result = ExtendedKey::new(key, chain_code)
            .map_err(|_| WalletError::Crypto(CryptoError::InvalidMasterKey));
        key.zeroize();
        result
    }

    // =========================================================================
    // CHILD KEY
    // =========================================================================

    /// Derive one child key
    ///
    /// I = HMAC-SHA512(Key = parent_chain_code, Data = child_data(parent, index))
    /// k_child = (IL + k_par) mod n, chain_child = IR
    ///
    /// # Errors
    /// `InvalidChildKey` if IL `>= n` or k_child is zero. No retry happens
    /// here; see [`derive_path`](Self::derive_path).
    pub fn child_key_derive(
        parent: &ExtendedKey,
        index: DerivationIndex,
    ) -> WalletResult<ExtendedKey> {
        let data = Self::child_data(parent, index)?;

        let mut mac = Self::hmac(parent.chain_code())?;
        mac.update(&data);
        let digest = Self::finalize(mac);

        Self::child_from_digest(parent, index, &digest)
    }

    /// HMAC input for one derivation step.
    ///
    /// - hardened: `0x00 || k_par (32) || ser32(i)` (37 bytes)
    /// - normal:   `0x04 || X (32) || Y (32) || ser32(i)` (69 bytes)
    pub fn child_data(
        parent: &ExtendedKey,
        index: DerivationIndex,
    ) -> WalletResult<Zeroizing<Vec<u8>>> {
        let mut data = Zeroizing::new(Vec::with_capacity(UNCOMPRESSED_POINT_LEN + 4));

        if index.is_hardened() {
            data.push(0x00);
            data.extend_from_slice(parent.private_key());
        } else {
            let point = parent.public_key()?;
            data.extend_from_slice(&CurveOps::serialize_uncompressed(&point));
        }
        data.extend_from_slice(&index.to_be_bytes());

        Ok(data)
    }

    fn child_from_digest(
        parent: &ExtendedKey,
        index: DerivationIndex,
        digest: &[u8; 64],
    ) -> WalletResult<ExtendedKey> {
        let invalid = || {
            WalletError::Crypto(CryptoError::InvalidChildKey {
                index: index.raw(),
            })
        };

        let (mut il, chain_code) = Self::split(digest);
        let tweak = CurveOps::scalar_from_bytes(&il);
        il.zeroize();

        let tweak = tweak.ok_or_else(invalid)?;
        let child = CurveOps::add_mod_n(&tweak, &parent.to_scalar()?);
        let child: Option<NonZeroScalar> = Option::from(NonZeroScalar::new(child));
        let child = child.ok_or_else(invalid)?;

        Ok(ExtendedKey::from_scalar(child.as_ref(), chain_code))
    }

    // =========================================================================
    // PATH FOLD
    // =========================================================================

    /// Fold `child_key_derive` over `path`, left to right.
    ///
    /// An out-of-range child is retried with the next index in the same
    /// half of the index space, as BIP-32 prescribes.
    pub fn derive_path(master: ExtendedKey, path: &[DerivationIndex]) -> WalletResult<ExtendedKey> {
        Self::derive_path_resolved(master, path).map(|(key, _)| key)
    }

    /// [`derive_path`](Self::derive_path), also returning the indices that
    /// were actually used. They differ from `path` only where a step retried.
    pub fn derive_path_resolved(
        master: ExtendedKey,
        path: &[DerivationIndex],
    ) -> WalletResult<(ExtendedKey, Vec<DerivationIndex>)> {
        Self::derive_path_with(master, path, Self::child_key_derive)
    }

    /// [`derive_path_resolved`](Self::derive_path_resolved) with a
    /// caller-supplied step function.
    pub fn derive_path_with<F>(
        master: ExtendedKey,
        path: &[DerivationIndex],
        mut step: F,
    ) -> WalletResult<(ExtendedKey, Vec<DerivationIndex>)>
    where
        F: FnMut(&ExtendedKey, DerivationIndex) -> WalletResult<ExtendedKey>,
    {
        let mut resolved = Vec::with_capacity(path.len());
        let key = path
            .iter()
            .enumerate()
            .try_fold(master, |parent, (depth, &index)| {
                let (child, used) = Self::derive_step(&parent, index, &mut step)?;
                debug!(depth = depth + 1, index = %used, "derived child key");
                resolved.push(used);
                Ok::<_, WalletError>(child)
            })?;
        Ok((key, resolved))
    }

    /// Normal children of `parent` for the indices in `range`.
    ///
    /// Each child is paired with the index it was derived at. When a retry
    /// moves index `i` to `i + 1`, index `i + 1` is not derived again, so the
    /// result never holds the same key twice.
    ///
    /// # Errors
    /// `Validation` if `range` reaches into the hardened half.
    pub fn derive_children_with<F>(
        parent: &ExtendedKey,
        range: Range<u32>,
        mut step: F,
    ) -> WalletResult<Vec<(DerivationIndex, ExtendedKey)>>
    where
        F: FnMut(&ExtendedKey, DerivationIndex) -> WalletResult<ExtendedKey>,
    {
        if range.end > DerivationIndex::HARDENED_FLAG {
            return Err(WalletError::Validation(format!(
                "Address index range {:?} exceeds the normal index space",
                range
            )));
        }

        let mut children = Vec::with_capacity(range.len());
        let mut next = range.start;
        while next < range.end {
            let index = DerivationIndex::normal(next);
            let (child, used) = Self::derive_step(parent, index, &mut step)?;
            children.push((used, child));
            next = used.raw() + 1;
        }
        Ok(children)
    }

    fn derive_step<F>(
        parent: &ExtendedKey,
        index: DerivationIndex,
        step: &mut F,
    ) -> WalletResult<(ExtendedKey, DerivationIndex)>
    where
        F: FnMut(&ExtendedKey, DerivationIndex) -> WalletResult<ExtendedKey>,
    {
        let mut candidate = index;
        loop {
            match step(parent, candidate) {
                Ok(child) => return Ok((child, candidate)),
                Err(WalletError::Crypto(CryptoError::InvalidChildKey { .. })) => {
                    let next = candidate.next().ok_or(WalletError::Crypto(
                        CryptoError::InvalidChildKey {
                            index: candidate.raw(),
                        },
                    ))?;
                    warn!(
                        index = %candidate,
                        next = %next,
                        "child key out of range, retrying with next index"
                    );
                    candidate = next;
                }
                Err(e) => return Err(e),
            }
        }
    }

    // =========================================================================
    // HELPERS
    // =========================================================================

    fn hmac(key: &[u8]) -> WalletResult<HmacSha512> {
        HmacSha512::new_from_slice(key).map_err(|e| {
            WalletError::Crypto(CryptoError::DerivationFailed(format!(
                "HMAC init failed: {}",
                e
            )))
        })
    }

    // Copy into stack buffer we fully control, zeroized on drop
    fn finalize(mac: HmacSha512) -> Zeroizing<[u8; 64]> {
        let result = mac.finalize().into_bytes();
        let mut buf = Zeroizing::new([0u8; 64]);
        buf.copy_from_slice(&result);
        buf
    }

    fn split(digest: &[u8; 64]) -> ([u8; 32], [u8; 32]) {
        let mut left = [0u8; 32];
        let mut right = [0u8; 32];
        left.copy_from_slice(&digest[..32]);
        right.copy_from_slice(&digest[32..]);
        (left, right)
    }
}

// =============================================================================
// TESTS
// =============================================================================
