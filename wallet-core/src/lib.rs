// wallet-core/src/lib.rs

//! Multi-chain HD wallet derivation engine.
//!
//! Recovery phrase (BIP-39) → seed → per-chain path (BIP-44) → keypair:
//!
//! | Chain    | Coin type | Curve     | Path                  | Standard  |
//! |----------|-----------|-----------|-----------------------|-----------|
//! | Ethereum | 60        | secp256k1 | `m/44'/60'/{i}'/0/0`  | BIP-32    |
//! | Solana   | 501       | ed25519   | `m/44'/501'/{i}'/0'`  | SLIP-0010 |
//!
//! Entry point cho UI / CLI là [`WalletEngine`]; [`AccountRegistry`] là
//! state machine bên dưới. Engine không làm I/O, không log secret.

pub mod api;
pub mod chains;
pub mod config;
pub mod crypto;
pub mod error;
pub mod registry;
pub mod snapshot;

pub use api::WalletEngine;
pub use chains::{ChainKeyDeriver, ChainSelector, Ed25519Chain, KeyPair, Secp256k1Chain};
pub use config::EngineConfig;
pub use crypto::{DerivationPath, DerivationPaths, Seed, WalletMnemonic, WordCount};
pub use error::{CryptoError, MnemonicError, WalletError, WalletResult};
pub use registry::{AccountRegistry, RegistryState};
pub use snapshot::WalletSnapshot;
