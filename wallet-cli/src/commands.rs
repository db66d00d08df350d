//! Subcommands. Each one loads the engine from the slot store, applies one
//! operation, then persists the resulting snapshot.

use anyhow::{bail, Result};
use clap::Subcommand;
use tracing::{info, warn};
use wallet_core::{ChainSelector, KeyPair, WalletEngine};

use crate::config::CliConfig;
use crate::store::SlotStore;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start a new session: generate (or import) a phrase and derive account 0
    Generate {
        /// Chain: 60 / eth / ethereum, 501 / sol / solana
        #[arg(short, long)]
        chain: Option<ChainSelector>,
        /// Import this phrase instead of generating one
        #[arg(long, env = "HDWALLET_PHRASE", hide_env_values = true)]
        phrase: Option<String>,
    },
    /// Derive the next account of the current session
    Add,
    /// List derived accounts
    List {
        /// Print private keys instead of masking them
        #[arg(long)]
        show_private: bool,
    },
    /// Wipe the session and stored slots
    Clear,
}

pub struct Context {
    pub config: CliConfig,
    pub store: SlotStore,
}

impl Context {
    pub fn new(config: CliConfig) -> Self {
        let store = SlotStore::new(config.store_path.clone());
        Self { config, store }
    }

    fn load_engine(&self) -> Result<WalletEngine> {
        let mut engine = WalletEngine::new(self.config.engine);
        if let Some(snapshot) = self.store.load_snapshot()? {
            engine.restore(&snapshot)?;
        }
        Ok(engine)
    }

    fn save(&self, engine: &WalletEngine) -> Result<()> {
        self.store.persist(engine.snapshot().as_ref())
    }
}

pub fn run(command: Commands, ctx: &Context) -> Result<()> {
    match command {
        Commands::Generate { chain, phrase } => generate(ctx, chain, phrase.as_deref()),
        Commands::Add => add(ctx),
        Commands::List { show_private } => list(ctx, show_private),
        Commands::Clear => clear(ctx),
    }
}

fn generate(ctx: &Context, chain: Option<ChainSelector>, phrase: Option<&str>) -> Result<()> {
    let chain = chain.unwrap_or(ctx.config.default_chain);
    let mut engine = WalletEngine::new(ctx.config.engine);

    if ctx.store.load_snapshot()?.is_some() {
        warn!("replacing the stored session");
    }

    let mnemonic = engine.generate_phrase(phrase)?;
    let first = engine.commit_and_derive_first(mnemonic.phrase(), chain)?;
    ctx.save(&engine)?;
    info!(chain = %chain, "session created");

    if phrase.is_none() {
        println!("Recovery phrase (write it down, it is shown once):");
        println!("  {}", mnemonic.phrase());
        println!();
    }
    print_account(0, &first, false);
    Ok(())
}

fn add(ctx: &Context) -> Result<()> {
    let mut engine = ctx.load_engine()?;
    if engine.registry().is_empty() {
        bail!("no active session, run `hdwallet generate` first");
    }
    let pair = engine.add_account()?;
    ctx.save(&engine)?;
    print_account(engine.registry().len() - 1, &pair, false);
    Ok(())
}

fn list(ctx: &Context, show_private: bool) -> Result<()> {
    let engine = ctx.load_engine()?;
    let Some(chain) = engine.registry().chain() else {
        println!("No accounts.");
        return Ok(());
    };
    println!("{} accounts ({chain}):", engine.registry().len());
    for (i, pair) in engine.registry().accounts().iter().enumerate() {
        print_account(i, pair, show_private);
    }
    Ok(())
}

fn clear(ctx: &Context) -> Result<()> {
    let mut engine = ctx.load_engine()?;
    engine.reset_all();
    ctx.save(&engine)?;
    println!("Session cleared.");
    Ok(())
}

fn print_account(index: usize, pair: &KeyPair, show_private: bool) {
    let private = if show_private {
        pair.private_key().to_string()
    } else {
        mask(pair.private_key())
    };
    println!("#{index} {}", pair.path());
    println!("   address: {}", pair.public_key());
    println!("   private: {private}");
}

fn mask(secret: &str) -> String {
    let head: String = secret.chars().take(4).collect();
    format!("{head}{}", "*".repeat(12))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use wallet_core::RegistryState;

    const PHRASE: &str =
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    fn context(dir: &Path) -> Context {
        Context::new(CliConfig {
            store_path: dir.join("wallets.json"),
            ..CliConfig::default()
        })
    }

    #[test]
    fn test_generate_add_clear_cycle() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(dir.path());

        generate(&ctx, Some(ChainSelector::Solana), Some(PHRASE)).unwrap();
        add(&ctx).unwrap();

        let engine = ctx.load_engine().unwrap();
        assert_eq!(engine.registry().len(), 2);
        assert_eq!(engine.registry().chain(), Some(ChainSelector::Solana));
        assert_eq!(
            engine.registry().accounts()[0].public_key(),
            "HAgk14JpMQLgt6rVgv7cBQFJWFto5Dqxi472uT3DKpqk"
        );

        clear(&ctx).unwrap();
        assert_eq!(ctx.load_engine().unwrap().state(), RegistryState::Empty);
        assert!(ctx.store.load_snapshot().unwrap().is_none());
    }

    #[test]
    fn test_add_without_session_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(add(&context(dir.path())).is_err());
    }

    #[test]
    fn test_invalid_phrase_leaves_store_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(dir.path());
        let bad = PHRASE.replace("about", "zzzz");
        assert!(generate(&ctx, None, Some(&bad)).is_err());
        assert!(!ctx.store.path().exists());
    }

    #[test]
    fn test_mask_hides_secret() {
        let masked = mask("0x1ab42cc412b618bdea3a599e3c9bae19");
        assert!(masked.starts_with("0x1a"));
        assert!(!masked.contains("42cc"));
    }
}
