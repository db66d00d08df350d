// wallet-core/src/api/engine.rs
//
// Engine facade: generatePhrase / commitAndDeriveFirst / addAccount / resetAll.
// Persistence là việc của collaborator: gọi `snapshot()` sau mỗi command.

use crate::chains::{ChainSelector, KeyPair};
use crate::config::EngineConfig;
use crate::crypto::mnemonic::WalletMnemonic;
use crate::error::WalletResult;
use crate::registry::{AccountRegistry, RegistryState};
use crate::snapshot::WalletSnapshot;
use tracing::{debug, info};

/// One session's derivation engine.
#[derive(Debug, Default)]
pub struct WalletEngine {
    config: EngineConfig,
    registry: AccountRegistry,
}

impl WalletEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            registry: AccountRegistry::new(),
        }
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[inline]
    pub fn registry(&self) -> &AccountRegistry {
        &self.registry
    }

    #[inline]
    pub fn state(&self) -> RegistryState {
        self.registry.state()
    }

    /// Non-empty `existing_input` is validated and returned; otherwise a fresh
    /// phrase with the configured word count is generated.
    pub fn generate_phrase(&self, existing_input: Option<&str>) -> WalletResult<WalletMnemonic> {
        match existing_input.map(str::trim).filter(|s| !s.is_empty()) {
            Some(input) => {
                debug!("importing user supplied recovery phrase");
                WalletMnemonic::from_phrase(input)
            }
            None => {
                debug!(words = self.config.word_count as usize, "generating recovery phrase");
                WalletMnemonic::generate(self.config.word_count)
            }
        }
    }

    /// Commit `phrase` on `chain` and derive account 0.
    ///
    /// Derivation lỗi => rollback về `Empty`.
    pub fn commit_and_derive_first(
        &mut self,
        phrase: &str,
        chain: ChainSelector,
    ) -> WalletResult<KeyPair> {
        self.registry.commit_phrase(phrase, chain)?;
        match self.registry.derive_next() {
            Ok(first) => Ok(first.clone()),
            Err(e) => {
                self.registry.reset();
                Err(e)
            }
        }
    }

    /// Derive the next account. Requires a prior commit.
    pub fn add_account(&mut self) -> WalletResult<KeyPair> {
        self.registry.derive_next().cloned()
    }

    pub fn reset_all(&mut self) {
        self.registry.reset();
    }

    /// State for the collaborator to persist; `None` => clear storage.
    pub fn snapshot(&self) -> Option<WalletSnapshot> {
        self.registry.snapshot()
    }

    pub fn restore(&mut self, snapshot: &WalletSnapshot) -> WalletResult<()> {
        self.registry.restore(snapshot)?;
        info!(accounts = self.registry.len(), "session restored");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::mnemonic::WordCount;
    use crate::error::{MnemonicError, WalletError};

    const TEST_MNEMONIC_12: &str =
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    #[test]
    fn test_generate_phrase_uses_existing_input() {
        let engine = WalletEngine::default();
        let phrase = engine.generate_phrase(Some(TEST_MNEMONIC_12)).unwrap();
        assert_eq!(phrase.phrase(), TEST_MNEMONIC_12);
    }

    #[test]
    fn test_generate_phrase_blank_input_generates() {
        let engine = WalletEngine::new(EngineConfig {
            word_count: WordCount::TwentyFour,
        });
        let phrase = engine.generate_phrase(Some("   ")).unwrap();
        assert_eq!(phrase.word_count(), 24);
        assert_eq!(engine.generate_phrase(None).unwrap().word_count(), 24);
    }

    #[test]
    fn test_generate_phrase_rejects_invalid_input() {
        let engine = WalletEngine::default();
        assert!(matches!(
            engine.generate_phrase(Some("not a valid phrase")),
            Err(WalletError::InvalidMnemonic(_))
        ));
    }

    #[test]
    fn test_commit_and_add() {
        let mut engine = WalletEngine::default();
        let first = engine
            .commit_and_derive_first(TEST_MNEMONIC_12, ChainSelector::Ethereum)
            .unwrap();
        assert_eq!(first.public_key(), "0x9858EfFD232B4033E47d90003D41EC34EcaEda94");

        let second = engine.add_account().unwrap();
        assert_eq!(second.path().to_string(), "m/44'/60'/1'/0/0");
        assert_eq!(engine.registry().len(), 2);
    }

    #[test]
    fn test_add_account_requires_commit() {
        let mut engine = WalletEngine::default();
        assert_eq!(engine.add_account().unwrap_err(), WalletError::NotCommitted);
    }

    #[test]
    fn test_unknown_word_leaves_engine_empty() {
        let mut engine = WalletEngine::default();
        let bad = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon qwerty";
        assert_eq!(
            engine.commit_and_derive_first(bad, ChainSelector::Solana),
            Err(WalletError::InvalidMnemonic(MnemonicError::UnknownWord {
                position: 12
            }))
        );
        assert_eq!(engine.state(), RegistryState::Empty);
        assert!(engine.snapshot().is_none());
    }

    #[test]
    fn test_reset_all() {
        let mut engine = WalletEngine::default();
        engine
            .commit_and_derive_first(TEST_MNEMONIC_12, ChainSelector::Solana)
            .unwrap();
        engine.reset_all();
        assert_eq!(engine.state(), RegistryState::Empty);
        assert!(engine.snapshot().is_none());
    }
}
