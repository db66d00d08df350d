// wallet-core/src/registry.rs
//
// Account Registry - state machine
//
//   Empty ──commit──▶ PhraseCommitted ──derive_next──▶ Populated ─┐
//     ▲                                                   ▲       │ derive_next
//     └──────────────────── reset (any state) ────────────┴───────┘
//
// Index i luôn ứng với path có account index = i. Chỉ append, không xóa lẻ.

use crate::chains::{ChainSelector, KeyPair};
use crate::crypto::mnemonic::{Seed, WalletMnemonic};
use crate::error::{WalletError, WalletResult};
use crate::snapshot::WalletSnapshot;
use tracing::{info, warn};

/// Observable registry state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryState {
    /// No phrase committed
    Empty,
    /// Phrase + chain fixed, zero accounts
    PhraseCommitted,
    /// At least one account
    Populated,
}

/// Secret material của một session. Drop => zeroize (phrase, seed, keys).
#[derive(Debug)]
struct Session {
    mnemonic: WalletMnemonic,
    seed: Seed,
    chain: ChainSelector,
    accounts: Vec<KeyPair>,
}

/// Ordered accounts derived from one phrase on one chain.
///
/// One instance per user session; không chia sẻ giữa các session.
#[derive(Debug, Default)]
pub struct AccountRegistry {
    session: Option<Session>,
}

impl AccountRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> RegistryState {
        match &self.session {
            None => RegistryState::Empty,
            Some(s) if s.accounts.is_empty() => RegistryState::PhraseCommitted,
            Some(_) => RegistryState::Populated,
        }
    }

    // =========================================================================
    // COMMANDS
    // =========================================================================

    /// `Empty -> PhraseCommitted`.
    pub fn commit(&mut self, mnemonic: WalletMnemonic, chain: ChainSelector) -> WalletResult<()> {
        if self.session.is_some() {
            return Err(WalletError::AlreadyCommitted);
        }

        let seed = mnemonic.to_seed(None)?;
        self.session = Some(Session {
            mnemonic,
            seed,
            chain,
            accounts: Vec::new(),
        });

        info!(chain = %chain, "recovery phrase committed");
        Ok(())
    }

    /// Parse + validate `phrase`, then [`commit`](Self::commit).
    pub fn commit_phrase(&mut self, phrase: &str, chain: ChainSelector) -> WalletResult<()> {
        if self.session.is_some() {
            return Err(WalletError::AlreadyCommitted);
        }
        self.commit(WalletMnemonic::from_phrase(phrase)?, chain)
    }

    /// Derive account `len()` and append it.
    ///
    /// Lỗi => registry giữ nguyên, không partial append.
    pub fn derive_next(&mut self) -> WalletResult<&KeyPair> {
        let session = self.session.as_mut().ok_or(WalletError::NotCommitted)?;

        let next = session.accounts.len();
        let account_index = u32::try_from(next).map_err(|_| WalletError::IndexOutOfRange {
            index: next as u64,
        })?;

        let path = session.chain.build_path(account_index)?;
        let pair = session
            .chain
            .strategy()
            .derive_from_seed(session.seed.as_bytes(), &path)?;

        info!(chain = %session.chain, account_index, path = %path, "account derived");
        session.accounts.push(pair);

        // vừa push nên luôn có phần tử cuối
        session
            .accounts
            .last()
            .ok_or_else(|| WalletError::derivation("account list unexpectedly empty"))
    }

    /// Any state -> `Empty`. Phrase, seed, keys bị zeroize khi drop.
    pub fn reset(&mut self) {
        if let Some(session) = self.session.take() {
            info!(
                chain = %session.chain,
                accounts = session.accounts.len(),
                "registry reset"
            );
            drop(session);
        }
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    pub fn accounts(&self) -> &[KeyPair] {
        self.session
            .as_ref()
            .map(|s| s.accounts.as_slice())
            .unwrap_or(&[])
    }

    pub fn account(&self, index: usize) -> Option<&KeyPair> {
        self.accounts().get(index)
    }

    pub fn len(&self) -> usize {
        self.accounts().len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts().is_empty()
    }

    pub fn chain(&self) -> Option<ChainSelector> {
        self.session.as_ref().map(|s| s.chain)
    }

    /// Committed phrase.
    ///
    /// # Warning
    /// Chỉ dùng để hiển thị cho user, không log.
    pub fn mnemonic(&self) -> Option<&WalletMnemonic> {
        self.session.as_ref().map(|s| &s.mnemonic)
    }

    // =========================================================================
    // SNAPSHOT
    // =========================================================================

    /// Snapshot of a populated registry; `None` khi chưa có account nào.
    pub fn snapshot(&self) -> Option<WalletSnapshot> {
        let session = self.session.as_ref().filter(|s| !s.accounts.is_empty())?;
        Some(WalletSnapshot {
            wallets: session.accounts.clone(),
            mnemonics: session
                .mnemonic
                .words()
                .into_iter()
                .map(str::to_owned)
                .collect(),
            path_type: session.chain,
        })
    }

    /// `Empty -> Populated` from a stored snapshot.
    ///
    /// Mọi account được derive lại và so sánh với bản lưu. Sai lệch bất kỳ
    /// => `WalletError::Snapshot`, registry vẫn `Empty`.
    pub fn restore(&mut self, snapshot: &WalletSnapshot) -> WalletResult<()> {
        if self.session.is_some() {
            return Err(WalletError::AlreadyCommitted);
        }
        if snapshot.wallets.is_empty() {
            return Err(WalletError::Snapshot("snapshot holds no accounts".to_string()));
        }

        let mnemonic = WalletMnemonic::from_words(&snapshot.mnemonics)?;

        let mut rebuilt = AccountRegistry::new();
        rebuilt.commit(mnemonic, snapshot.path_type)?;
        for (index, stored) in snapshot.wallets.iter().enumerate() {
            let derived = rebuilt.derive_next()?;
            if derived != stored {
                warn!(account_index = index, "snapshot account does not match derivation");
                return Err(WalletError::Snapshot(format!(
                    "account {index} does not match its derivation path"
                )));
            }
        }

        info!(
            chain = %snapshot.path_type,
            accounts = snapshot.wallets.len(),
            "registry restored from snapshot"
        );
        *self = rebuilt;
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
