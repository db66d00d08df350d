// wallet-core/src/crypto/paths.rs
//
// Path Deriver - BIP-44 / SLIP-0010 derivation paths
// Build: (chain, account index) -> "m/44'/coin'/account'/..."

use crate::chains::ChainSelector;
use crate::error::{WalletError, WalletResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// SLIP-44 COIN TYPES
// =============================================================================
/// SLIP-44 Registered Coin Types
/// Ref: https://github.com/satoshilabs/slips/blob/master/slip-0044.md
pub mod coin_type {
    /// secp256k1, EVM chains dùng chung coin_type 60
    pub const ETHEREUM: u32 = 60;
    /// ed25519
    pub const SOLANA: u32 = 501;
}

/// BIP-44 purpose field.
pub const PURPOSE_BIP44: u32 = 44;

/// Offset cộng vào index khi hardened (2^31).
pub const HARDENED_OFFSET: u32 = 0x8000_0000;

/// Largest account index that still fits a hardened segment.
pub const MAX_ACCOUNT_INDEX: u32 = HARDENED_OFFSET - 1;

// =============================================================================
// PATH SEGMENT
// =============================================================================

/// One level of a derivation path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PathSegment {
    /// Index without the hardened bit, always < 2^31
    pub index: u32,
    pub hardened: bool,
}

impl PathSegment {
    #[inline]
    pub const fn hardened(index: u32) -> Self {
        Self {
            index,
            hardened: true,
        }
    }

    #[inline]
    pub const fn normal(index: u32) -> Self {
        Self {
            index,
            hardened: false,
        }
    }

    /// ser32 value as used in HMAC data (hardened bit included).
    #[inline]
    pub const fn raw_index(&self) -> u32 {
        if self.hardened {
            self.index | HARDENED_OFFSET
        } else {
            self.index
        }
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hardened {
            write!(f, "{}'", self.index)
        } else {
            write!(f, "{}", self.index)
        }
    }
}

// =============================================================================
// DERIVATION PATH
// =============================================================================

/// Parsed, validated derivation path.
///
/// Serialized as its canonical string form (`m/44'/60'/0'/0/0`). Immutable
/// once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DerivationPath {
    segments: Vec<PathSegment>,
}

impl DerivationPath {
    /// Parse `m/...` notation. Hardened markers: `'` hoặc `h`.
    pub fn parse(path: &str) -> WalletResult<Self> {
        let path = path.trim();

        let rest = path
            .strip_prefix("m/")
            .ok_or_else(|| WalletError::invalid_path(format!("must start with 'm/': {path}")))?;

        if rest.is_empty() {
            return Err(WalletError::invalid_path("empty derivation path"));
        }

        let mut segments = Vec::new();
        for segment in rest.split('/') {
            let segment = segment.trim();
            if segment.is_empty() {
                return Err(WalletError::invalid_path(format!("empty segment in '{path}'")));
            }

            let (digits, hardened) = match segment.strip_suffix(&['\'', 'h', 'H'][..]) {
                Some(digits) => (digits, true),
                None => (segment, false),
            };

            // u32::from_str nhận cả dấu '+'
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return Err(WalletError::invalid_path(format!("invalid index '{digits}'")));
            }
            let index: u32 = digits
                .parse()
                .map_err(|e| WalletError::invalid_path(format!("invalid index '{digits}': {e}")))?;

            if index >= HARDENED_OFFSET {
                return Err(WalletError::invalid_path(format!(
                    "index {index} out of range (must be < 2^31)"
                )));
            }

            segments.push(PathSegment { index, hardened });
        }

        Ok(Self { segments })
    }

    /// Build directly from segments.
    pub fn from_segments(segments: Vec<PathSegment>) -> WalletResult<Self> {
        if segments.is_empty() {
            return Err(WalletError::invalid_path("empty derivation path"));
        }
        if let Some(bad) = segments.iter().find(|s| s.index >= HARDENED_OFFSET) {
            return Err(WalletError::invalid_path(format!(
                "index {} out of range (must be < 2^31)",
                bad.index
            )));
        }
        Ok(Self { segments })
    }

    #[inline]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    pub fn purpose(&self) -> Option<u32> {
        self.segments.first().map(|s| s.index)
    }

    pub fn coin_type(&self) -> Option<u32> {
        self.segments.get(1).map(|s| s.index)
    }

    /// Third level of a BIP-44 path.
    pub fn account_index(&self) -> Option<u32> {
        self.segments.get(2).map(|s| s.index)
    }

    /// SLIP-0010 ed25519 chỉ chấp nhận path toàn hardened.
    pub fn is_fully_hardened(&self) -> bool {
        self.segments.iter().all(|s| s.hardened)
    }
}

impl fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("m")?;
        for segment in &self.segments {
            write!(f, "/{segment}")?;
        }
        Ok(())
    }
}

impl FromStr for DerivationPath {
    type Err = WalletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for DerivationPath {
    type Error = WalletError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<DerivationPath> for String {
    fn from(path: DerivationPath) -> Self {
        path.to_string()
    }
}

// =============================================================================
// PATH BUILDERS
// =============================================================================

/// Derivation path builders per chain.
///
/// # Conventions
/// - BIP-44: `m/44'/coin'/account'/change/index` (secp256k1)
/// - SLIP-0010: `m/44'/coin'/account'/change'` (ed25519, all hardened)
pub struct DerivationPaths;

impl DerivationPaths {
    pub const EVM_0: &'static str = "m/44'/60'/0'/0/0";
    pub const SOLANA_0: &'static str = "m/44'/501'/0'/0'";

    /// Account-level path for the given chain.
    pub fn for_chain(selector: ChainSelector, account_index: u32) -> WalletResult<DerivationPath> {
        match selector {
            ChainSelector::Ethereum => Self::evm(account_index),
            ChainSelector::Solana => Self::solana(account_index),
        }
    }

    /// `m/44'/60'/{account}'/0/0`
    #[inline]
    pub fn evm(account_index: u32) -> WalletResult<DerivationPath> {
        Self::bip44(PURPOSE_BIP44, coin_type::ETHEREUM, account_index, 0, 0)
    }

    /// `m/44'/501'/{account}'/0'`
    #[inline]
    pub fn solana(account_index: u32) -> WalletResult<DerivationPath> {
        Self::ed25519_path(coin_type::SOLANA, account_index, &[0])
    }

    /// BIP-44 path: purpose, coin type, account hardened; change + index normal.
    pub fn bip44(
        purpose: u32,
        coin_type: u32,
        account: u32,
        change: u32,
        index: u32,
    ) -> WalletResult<DerivationPath> {
        Self::check_account(account)?;
        DerivationPath::from_segments(vec![
            PathSegment::hardened(purpose),
            PathSegment::hardened(coin_type),
            PathSegment::hardened(account),
            PathSegment::normal(change),
            PathSegment::normal(index),
        ])
    }

    /// SLIP-0010 path: `m/44'/coin'/account'` + sub paths, tất cả hardened.
    pub fn ed25519_path(
        coin_type: u32,
        account: u32,
        sub_paths: &[u32],
    ) -> WalletResult<DerivationPath> {
        Self::check_account(account)?;
        let segments = [PURPOSE_BIP44, coin_type, account]
            .iter()
            .chain(sub_paths)
            .copied()
            .map(PathSegment::hardened)
            .collect();
        DerivationPath::from_segments(segments)
    }

    #[inline]
    fn check_account(account: u32) -> WalletResult<()> {
        if account > MAX_ACCOUNT_INDEX {
            return Err(WalletError::IndexOutOfRange {
                index: u64::from(account),
            });
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CryptoError;

    #[test]
    fn test_evm_paths() {
        assert_eq!(DerivationPaths::evm(0).unwrap().to_string(), DerivationPaths::EVM_0);
        assert_eq!(DerivationPaths::evm(7).unwrap().to_string(), "m/44'/60'/7'/0/0");
    }

    #[test]
    fn test_solana_paths() {
        assert_eq!(
            DerivationPaths::solana(0).unwrap().to_string(),
            DerivationPaths::SOLANA_0
        );
        assert_eq!(DerivationPaths::solana(2).unwrap().to_string(), "m/44'/501'/2'/0'");
    }

    #[test]
    fn test_for_chain_differs_per_chain() {
        let eth = DerivationPaths::for_chain(ChainSelector::Ethereum, 0).unwrap();
        let sol = DerivationPaths::for_chain(ChainSelector::Solana, 0).unwrap();
        assert_eq!(eth.to_string(), "m/44'/60'/0'/0/0");
        assert_eq!(sol.to_string(), "m/44'/501'/0'/0'");
        assert!(!eth.is_fully_hardened());
        assert!(sol.is_fully_hardened());
    }

    #[test]
    fn test_account_index_limit() {
        let max = DerivationPaths::evm(MAX_ACCOUNT_INDEX).unwrap();
        assert_eq!(max.account_index(), Some(MAX_ACCOUNT_INDEX));

        assert_eq!(
            DerivationPaths::evm(HARDENED_OFFSET).unwrap_err(),
            WalletError::IndexOutOfRange {
                index: u64::from(HARDENED_OFFSET)
            }
        );
        assert!(matches!(
            DerivationPaths::solana(u32::MAX),
            Err(WalletError::IndexOutOfRange { .. })
        ));
    }

    #[test]
    fn test_parse_accessors() {
        let path: DerivationPath = "m/44'/60'/3'/0/0".parse().unwrap();
        assert_eq!(path.purpose(), Some(44));
        assert_eq!(path.coin_type(), Some(60));
        assert_eq!(path.account_index(), Some(3));
        assert_eq!(path.depth(), 5);
        assert_eq!(path.segments()[2].raw_index(), 3 | HARDENED_OFFSET);
        assert_eq!(path.segments()[3].raw_index(), 0);
    }

    #[test]
    fn test_parse_h_notation_canonicalizes() {
        let path = DerivationPath::parse("m/44h/501h/0h/0h").unwrap();
        assert_eq!(path.to_string(), "m/44'/501'/0'/0'");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in [
            "",
            "m",
            "m/",
            "44'/60'",
            "m//0",
            "m/abc",
            "m/2147483648",
            "m/44'/x'",
            "m/+44'",
            "m/+44'/+60'/0'",
            "m/-1",
        ] {
            assert!(
                matches!(
                    DerivationPath::parse(bad),
                    Err(WalletError::Derivation(CryptoError::InvalidPath(_)))
                ),
                "expected '{}' to be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_serde_as_string() {
        let path = DerivationPaths::solana(1).unwrap();
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(json, "\"m/44'/501'/1'/0'\"");
        let back: DerivationPath = serde_json::from_str(&json).unwrap();
        assert_eq!(back, path);
        assert!(serde_json::from_str::<DerivationPath>("\"not a path\"").is_err());
    }
}
