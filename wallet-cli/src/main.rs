//! `hdwallet`: multi-chain HD wallet CLI.

mod commands;
mod config;
mod store;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::commands::{Commands, Context};
use crate::config::CliConfig;

#[derive(Parser, Debug)]
#[command(name = "hdwallet")]
#[command(about = "Derive Ethereum and Solana accounts from one recovery phrase")]
#[command(version)]
struct Cli {
    /// Config file (default: ~/.hdwallet/config.toml)
    #[arg(long, global = true, env = "HDWALLET_CONFIG")]
    config: Option<PathBuf>,

    /// Override the slot store path
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "wallet_core=debug,hdwallet=debug"
    } else {
        "wallet_core=info,hdwallet=info"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();

    let mut config = CliConfig::load(cli.config.as_ref())?;
    if let Some(store) = cli.store {
        config.store_path = store;
    }

    commands::run(cli.command, &Context::new(config))
}
