// wallet-core/src/chains/mod.rs

//! Chain selection and per-chain key derivation strategies.
//!
//! Mỗi chain là một strategy implement [`ChainKeyDeriver`]. Thêm chain mới
//! chỉ cần thêm variant vào [`ChainSelector`] và một strategy, registry và
//! path logic không đổi.

pub mod evm;
pub mod solana;

pub use evm::Secp256k1Chain;
pub use solana::Ed25519Chain;

use crate::crypto::key_deriver::CurveType;
use crate::crypto::paths::{coin_type, DerivationPath, DerivationPaths};
use crate::error::{WalletError, WalletResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use zeroize::{Zeroize, ZeroizeOnDrop};

// =============================================================================
// CHAIN SELECTOR
// =============================================================================

/// Which chain (and therefore which strategy + coin type) a registry uses.
///
/// Serialized as the coin type string (`"60"`, `"501"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChainSelector {
    /// secp256k1, coin type 60
    #[serde(rename = "60")]
    Ethereum,
    /// ed25519, coin type 501
    #[serde(rename = "501")]
    Solana,
}

impl ChainSelector {
    pub const ALL: [ChainSelector; 2] = [ChainSelector::Ethereum, ChainSelector::Solana];

    #[inline]
    pub const fn coin_type(self) -> u32 {
        match self {
            ChainSelector::Ethereum => coin_type::ETHEREUM,
            ChainSelector::Solana => coin_type::SOLANA,
        }
    }

    #[inline]
    pub const fn curve(self) -> CurveType {
        match self {
            ChainSelector::Ethereum => CurveType::Secp256k1,
            ChainSelector::Solana => CurveType::Ed25519,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ChainSelector::Ethereum => "Ethereum",
            ChainSelector::Solana => "Solana",
        }
    }

    pub fn from_coin_type(coin: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.coin_type() == coin)
    }

    /// Strategy object cho chain này.
    pub fn strategy(self) -> &'static dyn ChainKeyDeriver {
        match self {
            ChainSelector::Ethereum => &Secp256k1Chain,
            ChainSelector::Solana => &Ed25519Chain,
        }
    }

    /// Path of account `account_index` on this chain.
    #[inline]
    pub fn build_path(self, account_index: u32) -> WalletResult<DerivationPath> {
        DerivationPaths::for_chain(self, account_index)
    }
}

impl fmt::Display for ChainSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChainSelector {
    type Err = WalletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "60" | "eth" | "ethereum" => Ok(ChainSelector::Ethereum),
            "501" | "sol" | "solana" => Ok(ChainSelector::Solana),
            other => Err(WalletError::Config(format!("unsupported chain '{other}'"))),
        }
    }
}

// =============================================================================
// KEYPAIR
// =============================================================================

/// Chain-native keypair plus the path that produced it.
///
/// Serialized with `publicKey` / `privateKey` / `path` fields. `Debug` never
/// prints the private key; strings are zeroized on drop.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(rename_all = "camelCase")]
pub struct KeyPair {
    public_key: String,
    private_key: String,
    #[zeroize(skip)]
    path: DerivationPath,
}

impl KeyPair {
    pub(crate) fn new(public_key: String, private_key: String, path: DerivationPath) -> Self {
        Self {
            public_key,
            private_key,
            path,
        }
    }

    /// Address (Ethereum) or base58 public key (Solana).
    #[inline]
    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    /// Chain-native secret encoding.
    ///
    /// # Warning
    /// Chỉ hiển thị khi user yêu cầu, không log.
    #[inline]
    pub fn private_key(&self) -> &str {
        &self.private_key
    }

    #[inline]
    pub fn path(&self) -> &DerivationPath {
        &self.path
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("public_key", &self.public_key)
            .field("private_key", &"[REDACTED]")
            .field("path", &self.path.to_string())
            .finish()
    }
}

// =============================================================================
// STRATEGY TRAIT
// =============================================================================

/// Per-chain derivation: (seed, path) -> native keypair.
pub trait ChainKeyDeriver: Send + Sync {
    fn selector(&self) -> ChainSelector;

    /// Fails with `WalletError::Derivation` on short seeds, malformed paths or
    /// curve-level failures. Never returns a zeroed key.
    fn derive_from_seed(&self, seed: &[u8], path: &DerivationPath) -> WalletResult<KeyPair>;
}

// =============================================================================
// TESTS
// =============================================================================
