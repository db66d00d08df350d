// wallet-core/src/chains/solana/mod.rs

//! Solana (coin type 501) support.
//!
//! [`Ed25519Chain`] derives hardened-only SLIP-0010 keys and encodes them as
//! base58 address / base58 64-byte secret key via [`SolanaAddress`].

pub mod address;

pub use address::SolanaAddress;

use crate::chains::{ChainKeyDeriver, ChainSelector, KeyPair};
use crate::crypto::key_deriver::Ed25519Deriver;
use crate::crypto::paths::DerivationPath;
use crate::error::WalletResult;

/// SLIP-0010 ed25519 strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ed25519Chain;

impl ChainKeyDeriver for Ed25519Chain {
    fn selector(&self) -> ChainSelector {
        ChainSelector::Solana
    }

    fn derive_from_seed(&self, seed: &[u8], path: &DerivationPath) -> WalletResult<KeyPair> {
        let derived = Ed25519Deriver::derive(seed, path)?;
        Ok(KeyPair::new(
            SolanaAddress::derive(&derived),
            SolanaAddress::encode_secret_key(&derived),
            path.clone(),
        ))
    }
}
