// wallet-core/src/crypto/curve.rs
//
// secp256k1 primitives dùng trong BIP-32 derivation
// Scalar arithmetic mod n + point multiplication, tất cả qua `k256` (constant-time)

use crate::error::{CryptoError, WalletError, WalletResult};
use k256::elliptic_curve::{sec1::ToEncodedPoint, PrimeField};
use k256::{FieldBytes, PublicKey, Scalar, SecretKey};

/// secp256k1 curve order `n`, big-endian.
pub const CURVE_ORDER: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE,
    0xBA, 0xAE, 0xDC, 0xE6, 0xAF, 0x48, 0xA0, 0x3B, 0xBF, 0xD2, 0x5E, 0x8C, 0xD0, 0x36, 0x41, 0x41,
];

/// Length of an uncompressed SEC1 point: `0x04 || X || Y`.
pub const UNCOMPRESSED_POINT_LEN: usize = 65;

/// Fixed-curve operations over secp256k1.
pub struct CurveOps;

impl CurveOps {
    /// Parse a big-endian 256-bit integer as a scalar.
    ///
    /// Returns `None` when the value is `>= n`. Zero is accepted here;
    /// callers that need a non-zero key check it themselves.
    #[inline]
    pub fn scalar_from_bytes(bytes: &[u8; 32]) -> Option<Scalar> {
        Option::from(Scalar::from_repr(FieldBytes::from(*bytes)))
    }

    /// `(a + b) mod n`
    #[inline]
    pub fn add_mod_n(a: &Scalar, b: &Scalar) -> Scalar {
        a + b
    }

    /// Scalar multiplication `private_key * G`.
    ///
    /// # Errors
    /// `InvalidScalar` if the key is zero or not below `n`.
    pub fn public_point(private_key: &[u8; 32]) -> WalletResult<PublicKey> {
        let secret = SecretKey::from_slice(private_key)
            .map_err(|_| WalletError::Crypto(CryptoError::InvalidScalar))?;
        Ok(secret.public_key())
    }

    /// Serialize a point as `0x04 || X (32) || Y (32)`.
    pub fn serialize_uncompressed(public_key: &PublicKey) -> [u8; UNCOMPRESSED_POINT_LEN] {
        let encoded = public_key.to_encoded_point(false);
        let mut out = [0u8; UNCOMPRESSED_POINT_LEN];
        out.copy_from_slice(encoded.as_bytes());
        out
    }
}

// =============================================================================
// TESTS
// =============================================================================
