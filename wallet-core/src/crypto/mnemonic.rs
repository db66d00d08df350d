// wallet-core/src/crypto/mnemonic.rs
//
// Mnemonic Service - BIP-39 recovery phrases
// Chuẩn: BIP-39 (wordlist + checksum), PBKDF2-HMAC-SHA512 (seed stretching)

use crate::error::{MnemonicError, WalletError, WalletResult};
use bip39::{Language, Mnemonic};
use rand::{rngs::OsRng, CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Số lượng words hỗ trợ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum WordCount {
    /// 12 words (128-bit entropy)
    #[default]
    Twelve = 12,
    /// 15 words (160-bit entropy)
    Fifteen = 15,
    /// 18 words (192-bit entropy)
    Eighteen = 18,
    /// 21 words (224-bit entropy)
    TwentyOne = 21,
    /// 24 words (256-bit entropy)
    TwentyFour = 24,
}

impl WordCount {
    /// Số bytes entropy cần thiết
    #[inline]
    pub const fn entropy_bytes(self) -> usize {
        match self {
            WordCount::Twelve => 16,
            WordCount::Fifteen => 20,
            WordCount::Eighteen => 24,
            WordCount::TwentyOne => 28,
            WordCount::TwentyFour => 32,
        }
    }

    #[inline]
    pub const fn entropy_bits(self) -> usize {
        self.entropy_bytes() * 8
    }

    /// Map entropy size (bits) sang word count.
    pub fn from_entropy_bits(bits: usize) -> Option<Self> {
        match bits {
            128 => Some(WordCount::Twelve),
            160 => Some(WordCount::Fifteen),
            192 => Some(WordCount::Eighteen),
            224 => Some(WordCount::TwentyOne),
            256 => Some(WordCount::TwentyFour),
            _ => None,
        }
    }
}

impl TryFrom<usize> for WordCount {
    type Error = MnemonicError;

    fn try_from(words: usize) -> Result<Self, Self::Error> {
        match words {
            12 => Ok(WordCount::Twelve),
            15 => Ok(WordCount::Fifteen),
            18 => Ok(WordCount::Eighteen),
            21 => Ok(WordCount::TwentyOne),
            24 => Ok(WordCount::TwentyFour),
            other => Err(MnemonicError::InvalidWordCount(other)),
        }
    }
}

impl From<WordCount> for usize {
    fn from(count: WordCount) -> Self {
        count as usize
    }
}

// =============================================================================
// SEED
// =============================================================================

/// Binary seed stretched from a recovery phrase.
///
/// Buffer tự động zeroize khi drop. `Debug` chỉ in độ dài.
#[derive(Clone, PartialEq, Eq)]
pub struct Seed(Zeroizing<Vec<u8>>);

impl Seed {
    /// Wrap raw seed bytes (e.g. official BIP-32 / SLIP-0010 test vectors).
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Seed(Zeroizing::new(bytes.to_vec()))
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for Seed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Seed")
            .field("len", &self.0.len())
            .finish_non_exhaustive()
    }
}

// =============================================================================
// RECOVERY PHRASE
// =============================================================================

/// BIP-39 recovery phrase.
///
/// # Security
/// - **ZeroizeOnDrop**: phrase bị ghi đè bằng 0 khi drop
/// - **CSPRNG**: entropy lấy từ `OsRng`, lỗi thì trả về `EntropySource`, không fallback
/// - **No Debug Leak**: `Debug` không hiển thị words
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct WalletMnemonic {
    phrase: String,
    word_count: usize,
}

impl std::fmt::Debug for WalletMnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletMnemonic")
            .field("word_count", &self.word_count)
            .field("phrase", &"[REDACTED]")
            .finish()
    }
}

impl PartialEq for WalletMnemonic {
    fn eq(&self, other: &Self) -> bool {
        self.phrase == other.phrase
    }
}

impl Eq for WalletMnemonic {}

impl WalletMnemonic {
    // =========================================================================
    // CONSTRUCTORS
    // =========================================================================

    /// Generate a fresh phrase from OS entropy.
    pub fn generate(word_count: WordCount) -> WalletResult<Self> {
        Self::generate_with_rng(&mut OsRng, word_count)
    }

    /// Generate from a caller-supplied CSPRNG.
    pub fn generate_with_rng<R>(rng: &mut R, word_count: WordCount) -> WalletResult<Self>
    where
        R: RngCore + CryptoRng,
    {
        let entropy_size = word_count.entropy_bytes();

        // Stack buffer, max 32 bytes
        let mut entropy = [0u8; 32];
        rng.try_fill_bytes(&mut entropy[..entropy_size])
            .map_err(|e| WalletError::EntropySource(e.to_string()))?;

        let mnemonic = Mnemonic::from_entropy(&entropy[..entropy_size]);
        entropy.zeroize();

        let mnemonic = mnemonic.map_err(map_bip39_error)?;
        Ok(Self {
            phrase: mnemonic.to_string(),
            word_count: word_count as usize,
        })
    }

    /// Import a user supplied phrase.
    ///
    /// Whitespace được normalize trước khi kiểm tra word count, wordlist và checksum.
    pub fn from_phrase(phrase: &str) -> WalletResult<Self> {
        let words: Vec<&str> = phrase.split_whitespace().collect();
        Self::from_words(&words)
    }

    /// Import from an ordered word sequence.
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> WalletResult<Self> {
        let count = words.len();
        WordCount::try_from(count)?;

        let normalized = Zeroizing::new(
            words
                .iter()
                .map(|w| w.as_ref().trim())
                .collect::<Vec<_>>()
                .join(" "),
        );
        Mnemonic::parse_in_normalized(Language::English, &normalized).map_err(map_bip39_error)?;

        Ok(Self {
            phrase: normalized.as_str().to_owned(),
            word_count: count,
        })
    }

    // =========================================================================
    // GETTERS
    // =========================================================================

    /// Raw phrase.
    ///
    /// # Warning
    /// Không được log giá trị này.
    #[inline]
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    #[inline]
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn words(&self) -> Vec<&str> {
        self.phrase.split_whitespace().collect()
    }

    /// Entropy strength in bits.
    pub fn strength_bits(&self) -> usize {
        WordCount::try_from(self.word_count)
            .map(WordCount::entropy_bits)
            .unwrap_or(0)
    }

    // =========================================================================
    // SEED DERIVATION
    // =========================================================================

    /// PBKDF2-HMAC-SHA512, 2048 rounds, salt = "mnemonic" || passphrase.
    ///
    /// Pure function: cùng phrase + passphrase luôn cho cùng 64 bytes.
    pub fn to_seed(&self, passphrase: Option<&str>) -> WalletResult<Seed> {
        let mnemonic = Mnemonic::parse_in_normalized(Language::English, &self.phrase)
            .map_err(map_bip39_error)?;
        let bytes = Zeroizing::new(mnemonic.to_seed(passphrase.unwrap_or("")));
        Ok(Seed::from_bytes(&bytes[..]))
    }

    // =========================================================================
    // VALIDATION
    // =========================================================================

    /// Word count + wordlist + checksum. No side effects.
    pub fn validate<S: AsRef<str>>(words: &[S]) -> bool {
        if WordCount::try_from(words.len()).is_err() {
            return false;
        }
        let joined = Zeroizing::new(
            words
                .iter()
                .map(|w| w.as_ref())
                .collect::<Vec<_>>()
                .join(" "),
        );
        Mnemonic::parse_in_normalized(Language::English, &joined).is_ok()
    }

    /// Same as [`validate`](Self::validate) on a whitespace separated phrase.
    #[inline]
    pub fn validate_phrase(phrase: &str) -> bool {
        let words: Vec<&str> = phrase.split_whitespace().collect();
        Self::validate(&words)
    }

    /// Kiểm tra một từ có trong BIP-39 English wordlist không
    pub fn is_valid_word(word: &str) -> bool {
        Language::English.word_list().contains(&word)
    }
}

fn map_bip39_error(err: bip39::Error) -> WalletError {
    let inner = match err {
        bip39::Error::BadWordCount(n) => MnemonicError::InvalidWordCount(n),
        // bip39 đếm từ 0, message cho người dùng đếm từ 1
        bip39::Error::UnknownWord(idx) => MnemonicError::UnknownWord { position: idx + 1 },
        bip39::Error::InvalidChecksum => MnemonicError::ChecksumFailed,
        other => MnemonicError::Bip39(other.to_string()),
    };
    WalletError::InvalidMnemonic(inner)
}

// =============================================================================
// UNIT TESTS
// =============================================================================
