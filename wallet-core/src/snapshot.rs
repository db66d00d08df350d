// wallet-core/src/snapshot.rs
//
// Snapshot value shapes cho collaborator (persistence thuộc về collaborator).
//
// Layout: 3 logical slots, mỗi slot là JSON text
//   "wallets"   -> [{ "publicKey", "privateKey", "path" }, ...]
//   "mnemonics" -> ["word1", ..., "word12"]
//   "pathType"  -> "60" | "501"

use crate::chains::{ChainSelector, KeyPair};
use crate::error::{WalletError, WalletResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

pub const SLOT_WALLETS: &str = "wallets";
pub const SLOT_MNEMONICS: &str = "mnemonics";
pub const SLOT_PATH_TYPE: &str = "pathType";

/// All slot names, in write order.
pub const SLOTS: [&str; 3] = [SLOT_WALLETS, SLOT_MNEMONICS, SLOT_PATH_TYPE];

/// Serializable copy of a populated registry.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(rename_all = "camelCase")]
pub struct WalletSnapshot {
    pub wallets: Vec<KeyPair>,
    pub mnemonics: Vec<String>,
    #[zeroize(skip)]
    pub path_type: ChainSelector,
}

impl fmt::Debug for WalletSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WalletSnapshot")
            .field("wallets", &self.wallets)
            .field("mnemonics", &format_args!("[REDACTED; {}]", self.mnemonics.len()))
            .field("path_type", &self.path_type)
            .finish()
    }
}

impl WalletSnapshot {
    /// Rebuild from slot storage. Thiếu bất kỳ slot nào => `Ok(None)`, không partial restore.
    pub fn from_slots<F>(lookup: F) -> WalletResult<Option<Self>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let (Some(wallets), Some(mnemonics), Some(path_type)) = (
            lookup(SLOT_WALLETS),
            lookup(SLOT_MNEMONICS),
            lookup(SLOT_PATH_TYPE),
        ) else {
            return Ok(None);
        };

        Ok(Some(Self {
            wallets: parse_slot(SLOT_WALLETS, &wallets)?,
            mnemonics: parse_slot(SLOT_MNEMONICS, &mnemonics)?,
            path_type: parse_slot(SLOT_PATH_TYPE, &path_type)?,
        }))
    }

    /// `(slot, json)` pairs in [`SLOTS`] order.
    pub fn to_slots(&self) -> WalletResult<Vec<(&'static str, String)>> {
        Ok(vec![
            (SLOT_WALLETS, write_slot(SLOT_WALLETS, &self.wallets)?),
            (SLOT_MNEMONICS, write_slot(SLOT_MNEMONICS, &self.mnemonics)?),
            (SLOT_PATH_TYPE, write_slot(SLOT_PATH_TYPE, &self.path_type)?),
        ])
    }
}

// serde_json errors có thể chứa nội dung slot, chỉ giữ lại vị trí
fn parse_slot<T: DeserializeOwned>(slot: &str, json: &str) -> WalletResult<T> {
    serde_json::from_str(json).map_err(|e| {
        WalletError::Snapshot(format!(
            "slot '{slot}' is not valid ({:?} error at line {}, column {})",
            e.classify(),
            e.line(),
            e.column()
        ))
    })
}

fn write_slot<T: Serialize>(slot: &str, value: &T) -> WalletResult<String> {
    serde_json::to_string(value)
        .map_err(|_| WalletError::Snapshot(format!("slot '{slot}' could not be serialized")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::paths::DerivationPaths;
    use std::collections::HashMap;

    fn sample() -> WalletSnapshot {
        WalletSnapshot {
            wallets: vec![KeyPair::new(
                "0xabc".to_string(),
                "0xsecret".to_string(),
                DerivationPaths::evm(0).unwrap(),
            )],
            mnemonics: vec!["abandon".to_string(); 12],
            path_type: ChainSelector::Ethereum,
        }
    }

    #[test]
    fn test_slots_round_trip() {
        let snapshot = sample();
        let slots: HashMap<&str, String> = snapshot.to_slots().unwrap().into_iter().collect();
        assert_eq!(slots[SLOT_PATH_TYPE], "\"60\"");
        assert!(slots[SLOT_WALLETS].contains("\"publicKey\":\"0xabc\""));

        let restored = WalletSnapshot::from_slots(|k| slots.get(k).cloned())
            .unwrap()
            .unwrap();
        assert_eq!(restored, snapshot);
    }

    #[test]
    fn test_missing_slot_means_absent() {
        let slots: HashMap<&str, String> = sample().to_slots().unwrap().into_iter().collect();
        for missing in SLOTS {
            let result = WalletSnapshot::from_slots(|k| {
                if k == missing {
                    None
                } else {
                    slots.get(k).cloned()
                }
            })
            .unwrap();
            assert!(result.is_none(), "slot {} missing should yield None", missing);
        }
    }

    #[test]
    fn test_corrupt_slot_error_does_not_echo_content() {
        let result = WalletSnapshot::from_slots(|k| match k {
            SLOT_WALLETS => Some("[]".to_string()),
            SLOT_MNEMONICS => Some("\"topsecretword\"".to_string()),
            _ => Some("\"60\"".to_string()),
        });
        let err = result.unwrap_err();
        assert!(matches!(err, WalletError::Snapshot(_)));
        assert!(!err.to_string().contains("topsecretword"));
    }

    #[test]
    fn test_debug_redacts_mnemonics() {
        let debug = format!("{:?}", sample());
        assert!(!debug.contains("abandon"));
        assert!(!debug.contains("0xsecret"));
    }
}
