// wallet-core/src/crypto/key_deriver/ed25519.rs
//
// Ed25519 Key Derivation - SLIP-0010
//
// Dùng cho: Solana (coin type 501)
// Algorithm: HMAC-SHA512, chỉ hỗ trợ hardened derivation
// Reference: https://github.com/satoshilabs/slips/blob/master/slip-0010.md
//
// VD: m/44'/501'/0'/0' (OK)    m/44'/501'/0'/0 (INVALID)

use super::KeyDeriver;
use crate::crypto::paths::DerivationPath;
use crate::error::{WalletError, WalletResult};
use hmac::{Hmac, Mac};
use sha2::Sha512;
use tracing::debug;
use zeroize::{Zeroize, Zeroizing};

type HmacSha512 = Hmac<Sha512>;

/// Ed25519 Key Deriver - SLIP-0010 Standard
///
/// # Khác biệt với secp256k1 (BIP-32)
/// - Master key seed: "ed25519 seed" (thay vì "Bitcoin seed")
/// - Chỉ hỗ trợ hardened derivation (index >= 2^31)
/// - Không cần validate key range (ed25519 key là bất kỳ 32 bytes)
pub struct Ed25519Deriver;

impl Ed25519Deriver {
    /// SLIP-0010 master key seed constant
    const MASTER_SECRET: &'static [u8] = b"ed25519 seed";

    /// Derive the 32-byte ed25519 seed at `path`. Every segment must be hardened.
    pub fn derive(seed: &[u8], path: &DerivationPath) -> WalletResult<Zeroizing<[u8; 32]>> {
        KeyDeriver::validate_seed(seed)?;

        if let Some(segment) = path.segments().iter().find(|s| !s.hardened) {
            return Err(WalletError::invalid_path(format!(
                "ed25519 SLIP-0010 requires all levels to be hardened, got segment '{segment}'"
            )));
        }

        // I = HMAC-SHA512(Key = "ed25519 seed", Data = seed)
        let (mut key, mut chain_code) = Self::hmac_split(Self::MASTER_SECRET, &[seed])?;

        // I = HMAC-SHA512(Key = chain_code, Data = 0x00 || key || ser32(index))
        for segment in path.segments() {
            let index = segment.raw_index().to_be_bytes();
            let (child_key, child_chain) =
                Self::hmac_split(&chain_code, &[&[0x00u8][..], &key[..], &index[..]])?;
            key.zeroize();
            chain_code.zeroize();
            key = child_key;
            chain_code = child_chain;
        }

        chain_code.zeroize();
        debug!(path = %path, "ed25519 key derived");

        Ok(Zeroizing::new(key))
    }

    /// Master node only (path `m`).
    pub fn master_key(seed: &[u8]) -> WalletResult<Zeroizing<[u8; 32]>> {
        KeyDeriver::validate_seed(seed)?;
        let (key, mut chain_code) = Self::hmac_split(Self::MASTER_SECRET, &[seed])?;
        chain_code.zeroize();
        Ok(Zeroizing::new(key))
    }

    /// HMAC-SHA512 over `parts`, split into IL (key) / IR (chain code).
    fn hmac_split(mac_key: &[u8], parts: &[&[u8]]) -> WalletResult<([u8; 32], [u8; 32])> {
        let mut mac = HmacSha512::new_from_slice(mac_key)
            .map_err(|e| WalletError::derivation(format!("HMAC init failed: {e}")))?;
        for part in parts {
            mac.update(part);
        }

        // Copy vào stack buffer rồi zeroize
        let mut buf = [0u8; 64];
        buf.copy_from_slice(&mac.finalize().into_bytes());

        let mut key = [0u8; 32];
        let mut chain_code = [0u8; 32];
        key.copy_from_slice(&buf[..32]);
        chain_code.copy_from_slice(&buf[32..]);
        buf.zeroize();

        Ok((key, chain_code))
    }
}

// =============================================================================
// TESTS
// =============================================================================
