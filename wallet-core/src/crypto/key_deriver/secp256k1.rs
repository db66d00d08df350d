// wallet-core/src/crypto/key_deriver/secp256k1.rs
//
// secp256k1 Key Derivation - BIP-32
//
// Dùng cho: Ethereum (coin type 60)
// Algorithm: HMAC-SHA512 hierarchical deterministic derivation, hardened + normal
// Reference: https://github.com/bitcoin/bips/blob/master/bip-0032.mediawiki

use super::KeyDeriver;
use crate::crypto::paths::DerivationPath;
use crate::error::{WalletError, WalletResult};
use bip32::{ChildNumber, XPrv};
use tracing::debug;
use zeroize::Zeroizing;

/// secp256k1 Key Deriver - BIP-32 Standard
///
/// # Security
/// - Private keys wrap trong `Zeroizing<[u8; 32]>`
/// - Không lưu intermediate keys
pub struct Secp256k1Deriver;

impl Secp256k1Deriver {
    /// Walk `path` from the BIP-32 master key of `seed`.
    ///
    /// # Returns
    /// 32-byte private scalar, auto-zeroize on drop
    pub fn derive(seed: &[u8], path: &DerivationPath) -> WalletResult<Zeroizing<[u8; 32]>> {
        KeyDeriver::validate_seed(seed)?;

        let mut node = XPrv::new(seed)
            .map_err(|e| WalletError::derivation(format!("failed to create master key: {e}")))?;

        for (depth, segment) in path.segments().iter().enumerate() {
            let child_number = ChildNumber::new(segment.index, segment.hardened)
                .map_err(|e| WalletError::invalid_path(format!("segment {segment}: {e}")))?;

            // Point-at-infinity / IL >= n được bip32 báo lỗi, không skip sang index kế
            node = node.derive_child(child_number).map_err(|e| {
                WalletError::derivation(format!("child derivation failed at depth {}: {e}", depth + 1))
            })?;
        }

        debug!(path = %path, "secp256k1 key derived");

        let key_bytes: [u8; 32] = node.private_key().to_bytes().into();
        Ok(Zeroizing::new(key_bytes))
    }
}

// =============================================================================
// TESTS
// =============================================================================
