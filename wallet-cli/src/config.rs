//! CLI configuration, `~/.hdwallet/config.toml`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use wallet_core::{ChainSelector, EngineConfig};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// JSON file holding the snapshot slots.
    pub store_path: PathBuf,
    /// Chain used by `generate` when `--chain` is omitted.
    pub default_chain: ChainSelector,
    pub engine: EngineConfig,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            store_path: config_dir().join("wallets.json"),
            default_chain: ChainSelector::Ethereum,
            engine: EngineConfig::default(),
        }
    }
}

impl CliConfig {
    /// Load from `path` (or the default location). A missing file yields defaults.
    pub fn load(path: Option<&PathBuf>) -> Result<Self> {
        let path = path.cloned().unwrap_or_else(config_path);

        let config = if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("invalid config {}", path.display()))?
        } else {
            Self::default()
        };

        let engine = config.engine.with_env_overrides()?;
        Ok(Self { engine, ..config })
    }

    #[cfg(test)]
    pub fn save(&self, path: Option<&PathBuf>) -> Result<()> {
        let path = path.cloned().unwrap_or_else(config_path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, toml::to_string_pretty(self)?)?;
        Ok(())
    }
}

fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".hdwallet")
}

pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use wallet_core::WordCount;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = CliConfig::load(Some(&dir.path().join("absent.toml"))).unwrap();
        assert_eq!(config.default_chain, ChainSelector::Ethereum);
        assert!(config.store_path.ends_with("wallets.json"));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = CliConfig {
            store_path: dir.path().join("store.json"),
            default_chain: ChainSelector::Solana,
            engine: EngineConfig {
                word_count: WordCount::TwentyFour,
            },
        };
        config.save(Some(&path)).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("default_chain = \"501\""));
        assert!(contents.contains("[engine]"));

        let loaded: CliConfig = toml::from_str(&contents).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let loaded: CliConfig = toml::from_str("default_chain = \"501\"").unwrap();
        assert_eq!(loaded.default_chain, ChainSelector::Solana);
        assert_eq!(loaded.engine, EngineConfig::default());
    }
}
