// wallet-core/src/chains/evm/address.rs
//
// EVM Address Module
// EIP-55 (Checksum), Keccak-256, secp256k1

use crate::error::{CryptoError, WalletError, WalletResult};
use alloy_primitives::Address;
use k256::{elliptic_curve::sec1::ToEncodedPoint, SecretKey};
use tiny_keccak::{Hasher, Keccak};
use zeroize::{Zeroize, Zeroizing};

/// EVM Address Generator
///
/// # Flow:  Private Key (32B) → Public Key (64B) → Keccak256 → Address (20B)
pub struct EvmAddress;

impl EvmAddress {
    /// Derive the 20 address bytes.
    ///
    /// 1. `priv_key` (32B) → secp256k1 → `pub_key` (uncompressed, 65B)
    /// 2. Bỏ prefix byte 0x04 → `pub_key_raw` (64B)
    /// 3. Keccak-256(`pub_key_raw`) → `hash` (32B)
    /// 4. `hash[12..32]` → `address` (20B)
    pub fn derive_bytes(priv_key: &[u8]) -> WalletResult<[u8; 20]> {
        // Zero scalar và scalar >= n bị k256 từ chối
        let secret_key = SecretKey::from_slice(priv_key).map_err(|_| {
            WalletError::Derivation(CryptoError::InvalidKeyFormat(
                "invalid secp256k1 private key".to_string(),
            ))
        })?;

        let encoded = Zeroizing::new(secret_key.public_key().to_encoded_point(false));
        let pub_key_raw = &encoded.as_bytes()[1..];

        let mut hasher = Keccak::v256();
        let mut hash = [0u8; 32];
        hasher.update(pub_key_raw);
        hasher.finalize(&mut hash);

        let mut address = [0u8; 20];
        address.copy_from_slice(&hash[12..]);
        hash.zeroize();

        Ok(address)
    }

    /// EIP-55 checksummed address, e.g. `0x9858EfFD232B4033E47d90003D41EC34EcaEda94`.
    #[inline]
    pub fn derive(priv_key: &[u8]) -> WalletResult<String> {
        let bytes = Self::derive_bytes(priv_key)?;
        Ok(Address::from_slice(&bytes).to_checksum(None))
    }

    /// `0x` + 64 lowercase hex chars.
    pub fn encode_private_key(priv_key: &[u8; 32]) -> String {
        format!("0x{}", hex::encode(priv_key))
    }

    /// `0x` prefix + 40 hex chars + EIP-55 checksum (nếu mixed case)
    #[inline]
    pub fn is_valid(address: &str) -> bool {
        address.parse::<Address>().is_ok()
    }

    /// Normalize về EIP-55 checksum format
    pub fn to_checksum(address: &str) -> WalletResult<String> {
        let addr: Address = address.parse().map_err(|_| {
            WalletError::Derivation(CryptoError::InvalidKeyFormat(
                "invalid Ethereum address format".to_string(),
            ))
        })?;
        Ok(addr.to_checksum(None))
    }
}

// =============================================================================
// TESTS
// =============================================================================
