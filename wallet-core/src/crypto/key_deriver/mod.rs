// wallet-core/src/crypto/key_deriver/mod.rs
//
// Key Derivation Engine - Multi-Curve Support
//
// ┌─────────────────────────────────────────────────┐
// │  Seed (64 bytes from BIP-39 Mnemonic)           │
// │                    │                            │
// │     ┌──────────────┴──────────────┐             │
// │     ▼                             ▼             │
// │  secp256k1 (BIP-32)        ed25519 (SLIP-0010)  │
// │  └─ Ethereum (60)          └─ Solana (501)      │
// └─────────────────────────────────────────────────┘

pub mod ed25519;
pub mod secp256k1;

pub use ed25519::Ed25519Deriver;
pub use secp256k1::Secp256k1Deriver;

use crate::crypto::paths::DerivationPath;
use crate::error::{CryptoError, WalletError, WalletResult};
use zeroize::Zeroizing;

/// BIP-32 / SLIP-0010 lower bound on seed length (128 bits).
pub const MIN_SEED_LEN: usize = 16;

/// BIP-32 / SLIP-0010 upper bound on seed length (512 bits).
pub const MAX_SEED_LEN: usize = 64;

/// Curve type cho key derivation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveType {
    /// secp256k1, BIP-32
    Secp256k1,
    /// ed25519, SLIP-0010 (hardened only)
    Ed25519,
}

/// Raw derivation output: 32-byte private scalar / ed25519 seed.
#[derive(Debug)]
pub struct DerivedKey {
    /// auto-zeroize khi drop
    pub private_key: Zeroizing<[u8; 32]>,
    pub curve: CurveType,
    pub path: DerivationPath,
}

/// Unified entry point, dispatch theo curve.
pub struct KeyDeriver;

impl KeyDeriver {
    pub fn derive(seed: &[u8], path: &DerivationPath, curve: CurveType) -> WalletResult<DerivedKey> {
        let private_key = match curve {
            CurveType::Secp256k1 => Secp256k1Deriver::derive(seed, path)?,
            CurveType::Ed25519 => Ed25519Deriver::derive(seed, path)?,
        };

        Ok(DerivedKey {
            private_key,
            curve,
            path: path.clone(),
        })
    }

    /// Reject seeds outside 16..=64 bytes. Không bao giờ zero-pad.
    #[inline]
    pub fn validate_seed(seed: &[u8]) -> WalletResult<()> {
        if seed.len() < MIN_SEED_LEN {
            return Err(WalletError::Derivation(CryptoError::SeedTooShort {
                min: MIN_SEED_LEN,
                got: seed.len(),
            }));
        }
        if seed.len() > MAX_SEED_LEN {
            return Err(WalletError::derivation(format!(
                "seed too long: at most {} bytes, got {}",
                MAX_SEED_LEN,
                seed.len()
            )));
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
