// wallet-core/src/chains/evm/mod.rs

//! Ethereum (coin type 60) support.
//!
//! - **Address Derivation**: EIP-55 checksummed address generation via [`EvmAddress`].
//! - **Strategy**: [`Secp256k1Chain`] walks BIP-32 and encodes the result the way
//!   Ethereum wallets do (`0x` address + `0x` hex private key).

pub mod address;

pub use address::EvmAddress;

use crate::chains::{ChainKeyDeriver, ChainSelector, KeyPair};
use crate::crypto::key_deriver::Secp256k1Deriver;
use crate::crypto::paths::DerivationPath;
use crate::error::WalletResult;

/// BIP-32 strategy, hardened + non-hardened segments.
#[derive(Debug, Clone, Copy, Default)]
pub struct Secp256k1Chain;

impl ChainKeyDeriver for Secp256k1Chain {
    fn selector(&self) -> ChainSelector {
        ChainSelector::Ethereum
    }

    fn derive_from_seed(&self, seed: &[u8], path: &DerivationPath) -> WalletResult<KeyPair> {
        let private_key = Secp256k1Deriver::derive(seed, path)?;
        let address = EvmAddress::derive(&private_key[..])?;
        Ok(KeyPair::new(
            address,
            EvmAddress::encode_private_key(&private_key),
            path.clone(),
        ))
    }
}
