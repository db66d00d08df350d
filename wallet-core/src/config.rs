// wallet-core/src/config.rs
//
// Engine configuration: TOML + env overrides

use crate::crypto::mnemonic::WordCount;
use crate::error::{WalletError, WalletResult};
use serde::{Deserialize, Serialize};

/// Engine settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Word count for freshly generated phrases (12 = 128-bit entropy).
    pub word_count: WordCount,
}

impl EngineConfig {
    /// Env var overriding `word_count`.
    pub const WORD_COUNT_ENV: &'static str = "WALLET_WORD_COUNT";

    pub fn from_toml_str(contents: &str) -> WalletResult<Self> {
        toml::from_str(contents).map_err(|e| WalletError::Config(e.message().to_string()))
    }

    /// Apply overrides from the process environment.
    pub fn with_env_overrides(self) -> WalletResult<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    pub fn with_overrides<F>(mut self, lookup: F) -> WalletResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(Self::WORD_COUNT_ENV) {
            let words: usize = raw.trim().parse().map_err(|_| {
                WalletError::Config(format!("{} must be a number, got '{raw}'", Self::WORD_COUNT_ENV))
            })?;
            self.word_count = WordCount::try_from(words)
                .map_err(|e| WalletError::Config(format!("{}: {e}", Self::WORD_COUNT_ENV)))?;
        }
        Ok(self)
    }
}
