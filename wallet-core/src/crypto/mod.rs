// wallet-core/src/crypto/mod.rs

//! Core Cryptography Module
//!
//! - **Mnemonic Service**: BIP-39 phrases and seed stretching via [`WalletMnemonic`].
//! - **Key Derivation**: secp256k1 (BIP-32) and ed25519 (SLIP-0010) via [`KeyDeriver`].
//! - **Derivation Paths**: BIP-44 / SLIP-0010 path values and builders via [`DerivationPaths`].

pub mod key_deriver;
pub mod mnemonic;
pub mod paths;

pub use key_deriver::{CurveType, DerivedKey, KeyDeriver};
pub use mnemonic::{Seed, WalletMnemonic, WordCount};
pub use paths::{DerivationPath, DerivationPaths, PathSegment};
