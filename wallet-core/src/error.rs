// wallet-core/src/error.rs
//
// Error taxonomy cho derivation engine.
// Không bao giờ đưa phrase, seed hay private key vào message.

use thiserror::Error;

pub type WalletResult<T> = std::result::Result<T, WalletError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WalletError {
    #[error("Invalid mnemonic: {0}")]
    InvalidMnemonic(#[from] MnemonicError),

    #[error("Account index {index} exceeds the hardened index limit (2^31 - 1)")]
    IndexOutOfRange { index: u64 },

    #[error("Derivation error: {0}")]
    Derivation(#[from] CryptoError),

    #[error("No secure entropy source available: {0}")]
    EntropySource(String),

    #[error("No recovery phrase committed")]
    NotCommitted,

    #[error("A recovery phrase is already committed; reset first")]
    AlreadyCommitted,

    #[error("Snapshot rejected: {0}")]
    Snapshot(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MnemonicError {
    #[error("Invalid word count: {0}. Expected 12, 15, 18, 21 or 24 words.")]
    InvalidWordCount(usize),

    #[error("Word at position {position} is not in the BIP-39 wordlist.")]
    UnknownWord { position: usize },

    #[error("Checksum validation failed.")]
    ChecksumFailed,

    #[error("BIP-39 internal error: {0}")]
    Bip39(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CryptoError {
    #[error("Key derivation failed: {0}")]
    DerivationFailed(String),

    #[error("Invalid derivation path: {0}")]
    InvalidPath(String),

    #[error("Seed too short: need at least {min} bytes, got {got}")]
    SeedTooShort { min: usize, got: usize },

    #[error("Invalid key format: {0}")]
    InvalidKeyFormat(String),
}

impl WalletError {
    /// Shorthand dùng trong các deriver.
    pub(crate) fn derivation(msg: impl Into<String>) -> Self {
        WalletError::Derivation(CryptoError::DerivationFailed(msg.into()))
    }

    pub(crate) fn invalid_path(msg: impl Into<String>) -> Self {
        WalletError::Derivation(CryptoError::InvalidPath(msg.into()))
    }
}
