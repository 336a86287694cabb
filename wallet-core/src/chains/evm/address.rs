// wallet-core/src/chains/evm/address.rs
//
// EVM Address Module - Public Key → Address
// Keccak-256, secp256k1, EIP-55 (Checksum)

use crate::crypto::curve::CurveOps;
use crate::error::{CryptoError, WalletError, WalletResult};
use alloy_primitives::Address;
use k256::PublicKey;
use tiny_keccak::{Hasher, Keccak};
use zeroize::Zeroize;

/// Address length in bytes
pub const ADDRESS_LEN: usize = 20;

/// EVM Address Generator
///
/// # Flow:  Private Key (32B) → Public Key (64B) → Keccak256 → Address (20B)
///
/// # Security
/// - Zeroize: intermediate hash bị xóa sau khi dùng
/// - No Storage: Module này KHÔNG lưu private key
pub struct EvmAddress;

impl EvmAddress {
    // =========================================================================
    // CORE: Public Key → Address Bytes (20 bytes)
    // Đây là hàm nền tảng, tất cả hàm khác compose từ đây.
    // =========================================================================

    /// # Algorithm (chuẩn Ethereum Yellow Paper)
    /// 1. `pub_key` → uncompressed (65B)
    /// 2. Bỏ prefix byte 0x04 → `pub_key_raw` (64B)
    /// 3. Keccak-256(`pub_key_raw`) → `hash` (32B), original Keccak padding, not SHA3-256
    /// 4. `hash[12..32]` → `address` (20B)
    pub fn derive_bytes(public_key: &PublicKey) -> [u8; ADDRESS_LEN] {
        let encoded = CurveOps::serialize_uncompressed(public_key);
        let pub_key_raw = &encoded[1..]; // Bỏ 0x04 prefix

        let mut hasher = Keccak::v256();
        let mut hash = [0u8; 32];
        hasher.update(pub_key_raw);
        hasher.finalize(&mut hash);

        // Extract 20 bytes cuối
        let mut address = [0u8; ADDRESS_LEN];
        address.copy_from_slice(&hash[12..]);

        hash.zeroize();

        address
    }

    /// Derive 20 bytes address from a 32-byte private key.
    ///
    /// # Errors
    /// `InvalidScalar` nếu key bằng 0 hoặc `>= n`.
    pub fn from_private_key(private_key: &[u8; 32]) -> WalletResult<[u8; ADDRESS_LEN]> {
        let public_key = CurveOps::public_point(private_key)?;
        Ok(Self::derive_bytes(&public_key))
    }

    /// Derive lowercase address from a **borrowed byte slice**.
    ///
    /// # ⚠ Security Note
    /// The caller is responsible for zeroing `priv_key` after this call.
    pub fn derive_from_slice(priv_key: &[u8]) -> WalletResult<String> {
        let key: &[u8; 32] = priv_key.try_into().map_err(|_| {
            WalletError::Crypto(CryptoError::InvalidKeyFormat(format!(
                "Invalid secp256k1 private key: expected 32 bytes, got {}",
                priv_key.len()
            )))
        })?;
        Ok(Self::to_hex(&Self::from_private_key(key)?))
    }

    // =========================================================================
    // FORMATTING
    // =========================================================================

    /// `"0x"` + 40 lowercase hex chars
    #[inline]
    pub fn to_hex(address: &[u8; ADDRESS_LEN]) -> String {
        format!("0x{}", hex::encode(address))
    }

    /// EIP-55 mixed-case checksum form
    ///
    /// `"0xabcd..."` → `"0xAbCd..."`
    #[inline]
    pub fn checksum(address: &[u8; ADDRESS_LEN]) -> String {
        Address::from_slice(address).to_checksum(None)
    }

    // =========================================================================
    // UTILITIES
    // =========================================================================

    /// Validate chuỗi có phải Ethereum address hợp lệ không
    ///
    /// Kiểm tra: `0x` prefix + 40 hex chars + EIP-55 checksum (nếu mixed case)
    #[inline]
    pub fn is_valid(address: &str) -> bool {
        address.parse::<Address>().is_ok()
    }

    /// Normalize về EIP-55 checksum format
    pub fn to_checksum(address: &str) -> WalletResult<String> {
        let addr: Address = address.parse().map_err(|_| {
            WalletError::Crypto(CryptoError::InvalidKeyFormat(
                "Invalid Ethereum address format".to_string(),
            ))
        })?;
        Ok(addr.to_checksum(None))
    }

    /// So sánh 2 address (case-insensitive, zero-allocation)
    #[inline]
    pub fn equals(addr1: &str, addr2: &str) -> bool {
        match (addr1.parse::<Address>(), addr2.parse::<Address>()) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // Test vectors from well-known sources
    const TEST_PRIVATE_KEY: &str =
        "501c797c4b1fdfa88fb7efdf7c9871b8e0f46dbc44259e3e270e0d4c938165f5";
    const TEST_ADDRESS: &str = "0xb611C31e4284BF7A7daD3296e62880F14b3b15DD";

    // Anvil/Hardhat account #0
    const ANVIL_PRIVATE_KEY: &str =
        "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const ANVIL_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

    fn key(hex_key: &str) -> [u8; 32] {
        hex::decode(hex_key).unwrap().try_into().unwrap()
    }

    #[test]
    fn test_from_private_key() {
        let address = EvmAddress::from_private_key(&key(TEST_PRIVATE_KEY)).unwrap();
        assert_eq!(EvmAddress::to_hex(&address), TEST_ADDRESS.to_lowercase());
        assert_eq!(EvmAddress::checksum(&address), TEST_ADDRESS);
    }

    #[test]
    fn test_derive_anvil() {
        let address = EvmAddress::from_private_key(&key(ANVIL_PRIVATE_KEY)).unwrap();
        assert_eq!(
            EvmAddress::to_hex(&address),
            "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266"
        );
        assert_eq!(EvmAddress::checksum(&address), ANVIL_ADDRESS);
    }

    #[test]
    fn test_derive_bytes_from_public_key() {
        let public_key = CurveOps::public_point(&key(ANVIL_PRIVATE_KEY)).unwrap();
        let address = EvmAddress::derive_bytes(&public_key);
        assert!(EvmAddress::equals(&EvmAddress::to_hex(&address), ANVIL_ADDRESS));
    }

    #[test]
    fn test_derive_from_slice() {
        let priv_key = hex::decode(TEST_PRIVATE_KEY).unwrap();
        let address = EvmAddress::derive_from_slice(&priv_key).unwrap();
        assert_eq!(address, TEST_ADDRESS.to_lowercase());
    }

    #[test]
    fn test_hex_shape() {
        let address = EvmAddress::from_private_key(&key(TEST_PRIVATE_KEY)).unwrap();
        let rendered = EvmAddress::to_hex(&address);
        assert_eq!(rendered.len(), 42);
        assert!(rendered.starts_with("0x"));
        assert!(rendered[2..]
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    // ── Utility Tests ────────────────────────────────────────────────

    #[test]
    fn test_is_valid() {
        assert!(EvmAddress::is_valid(TEST_ADDRESS));
        assert!(EvmAddress::is_valid(ANVIL_ADDRESS));
        assert!(EvmAddress::is_valid(
            "0xdead000000000000000000000000000000000000"
        ));

        // Invalid cases
        assert!(!EvmAddress::is_valid("0xinvalid"));
        assert!(!EvmAddress::is_valid("not an address"));
        assert!(!EvmAddress::is_valid("0x123")); // Too short
        assert!(!EvmAddress::is_valid("")); // Empty
    }

    #[test]
    fn test_to_checksum() {
        let lowercase = "0xb611c31e4284bf7a7dad3296e62880f14b3b15dd";
        let checksummed = EvmAddress::to_checksum(lowercase).unwrap();
        assert_eq!(checksummed, TEST_ADDRESS);
    }

    #[test]
    fn test_equals() {
        let upper = "0xABCD1234ABCD1234ABCD1234ABCD1234ABCD1234";
        let lower = "0xabcd1234abcd1234abcd1234abcd1234abcd1234";
        assert!(EvmAddress::equals(upper, lower));
        assert!(!EvmAddress::equals(upper, TEST_ADDRESS));
    }

    // ── Error Handling Tests ─────────────────────────────────────────

    #[test]
    fn test_invalid_private_key() {
        assert!(EvmAddress::derive_from_slice(&[0u8; 31]).is_err());
        assert!(EvmAddress::derive_from_slice(&[0u8; 33]).is_err());
        assert!(EvmAddress::derive_from_slice(&[]).is_err());
    }

    #[test]
    fn test_zero_private_key_rejected() {
        assert_eq!(
            EvmAddress::from_private_key(&[0u8; 32]),
            Err(WalletError::Crypto(CryptoError::InvalidScalar))
        );
    }
}
