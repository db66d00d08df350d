//! Slot storage backed by a single JSON object file.
//!
//! `{ "wallets": "<json>", "mnemonics": "<json>", "pathType": "<json>" }`

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;
use wallet_core::snapshot::SLOTS;
use wallet_core::WalletSnapshot;

pub struct SlotStore {
    path: PathBuf,
}

impl SlotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[cfg(test)]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        // Không echo nội dung file vào error
        serde_json::from_str(&contents)
            .map_err(|e| anyhow::anyhow!("{} is corrupt (line {}, column {})", self.path.display(), e.line(), e.column()))
    }

    fn write_all(&self, slots: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(slots)?)
            .with_context(|| format!("failed to write {}", self.path.display()))
    }

    #[cfg(test)]
    pub fn get(&self, slot: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(slot))
    }

    /// Write every slot in one pass.
    pub fn set_all(&self, entries: Vec<(&'static str, String)>) -> Result<()> {
        let mut slots = self.read_all()?;
        for (slot, json) in entries {
            slots.insert(slot.to_string(), json);
        }
        self.write_all(&slots)
    }

    /// Drop the three snapshot slots, keeping unrelated keys.
    pub fn clear(&self) -> Result<()> {
        let mut slots = self.read_all()?;
        for slot in SLOTS {
            slots.remove(slot);
        }
        if slots.is_empty() {
            if self.path.exists() {
                fs::remove_file(&self.path)?;
            }
            return Ok(());
        }
        self.write_all(&slots)
    }

    pub fn load_snapshot(&self) -> Result<Option<WalletSnapshot>> {
        let slots = self.read_all()?;
        let snapshot = WalletSnapshot::from_slots(|key| slots.get(key).cloned())?;
        debug!(found = snapshot.is_some(), "loaded snapshot slots");
        Ok(snapshot)
    }

    /// Persist `snapshot`, or clear storage when there is nothing to keep.
    pub fn persist(&self, snapshot: Option<&WalletSnapshot>) -> Result<()> {
        match snapshot {
            Some(snapshot) => self.set_all(snapshot.to_slots()?),
            None => self.clear(),
        }
    }
}
