use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sha2::{Digest, Sha256};

use wallet_core::crypto::paths::{HARDENED_OFFSET, MAX_ACCOUNT_INDEX};
use wallet_core::{
    AccountRegistry, ChainSelector, DerivationPath, WalletError, WalletMnemonic, WordCount,
};

fn chain_strategy() -> impl Strategy<Value = ChainSelector> {
    prop_oneof![Just(ChainSelector::Ethereum), Just(ChainSelector::Solana)]
}

fn phrase_from(seed: u64) -> WalletMnemonic {
    WalletMnemonic::generate_with_rng(&mut StdRng::seed_from_u64(seed), WordCount::Twelve).unwrap()
}

/// BIP-39 checksum recomputed from word indices: 12 words = 128-bit entropy + 4-bit checksum.
fn checksum_consistent(words: &[&str]) -> bool {
    let list = bip39::Language::English.word_list();
    let mut bits = Vec::with_capacity(words.len() * 11);
    for word in words {
        let Some(index) = list.iter().position(|w| w == word) else {
            return false;
        };
        bits.extend((0..11).rev().map(|i| (index >> i) & 1 == 1));
    }
    let entropy: Vec<u8> = bits[..128]
        .chunks(8)
        .map(|byte| byte.iter().fold(0u8, |acc, &b| (acc << 1) | u8::from(b)))
        .collect();
    let expected = Sha256::digest(&entropy)[0] >> 4;
    let actual = bits[128..].iter().fold(0u8, |acc, &b| (acc << 1) | u8::from(b));
    expected == actual
}

#[test]
fn checksum_oracle_matches_known_vectors() {
    let valid = ["abandon"; 11].into_iter().chain(["about"]).collect::<Vec<_>>();
    assert!(checksum_consistent(&valid));

    let mut flipped = valid.clone();
    flipped[11] = "abandon";
    assert!(!checksum_consistent(&flipped));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn generated_phrases_validate_and_seed_is_pure(seed in any::<u64>()) {
        let mnemonic = phrase_from(seed);
        prop_assert!(WalletMnemonic::validate(&mnemonic.words()));

        let s1 = mnemonic.to_seed(None).unwrap();
        let s2 = mnemonic.to_seed(None).unwrap();
        prop_assert_eq!(s1.as_bytes(), s2.as_bytes());
    }

    #[test]
    fn non_wordlist_word_invalidates_phrase(
        seed in any::<u64>(),
        position in 0usize..12,
        junk in "[a-z]{9,12}",
    ) {
        // Mọi từ BIP-39 English dài tối đa 8 ký tự
        let mnemonic = phrase_from(seed);
        let mut words: Vec<String> = mnemonic.words().iter().map(|w| w.to_string()).collect();
        words[position] = junk;
        prop_assert!(!WalletMnemonic::validate(&words));
    }

    #[test]
    fn wordlist_word_breaking_checksum_invalidates_phrase(
        seed in any::<u64>(),
        position in 0usize..12,
        replacement in 0usize..2048,
    ) {
        let mnemonic = phrase_from(seed);
        let mut words = mnemonic.words();
        let candidate = bip39::Language::English.word_list()[replacement];
        prop_assume!(words[position] != candidate);
        words[position] = candidate;

        let consistent = checksum_consistent(&words);
        prop_assert_eq!(WalletMnemonic::validate(&words), consistent);

        prop_assume!(!consistent);
        prop_assert!(!WalletMnemonic::validate(&words));
        prop_assert!(WalletMnemonic::from_words(&words).is_err());
    }

    #[test]
    fn paths_carry_account_index(chain in chain_strategy(), index in 0..=MAX_ACCOUNT_INDEX) {
        let path = chain.build_path(index).unwrap();
        prop_assert_eq!(path.account_index(), Some(index));
        prop_assert_eq!(path.coin_type(), Some(chain.coin_type()));

        let reparsed = DerivationPath::parse(&path.to_string()).unwrap();
        prop_assert_eq!(reparsed, path);
    }

    #[test]
    fn index_beyond_hardened_range_rejected(chain in chain_strategy(), index in HARDENED_OFFSET..=u32::MAX) {
        prop_assert_eq!(
            chain.build_path(index).unwrap_err(),
            WalletError::IndexOutOfRange { index: u64::from(index) }
        );
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(6))]

    #[test]
    fn sessions_are_reproducible(seed in any::<u64>(), chain in chain_strategy(), k in 1usize..5) {
        let mnemonic = phrase_from(seed);

        let run = || {
            let mut registry = AccountRegistry::new();
            registry.commit(mnemonic.clone(), chain).unwrap();
            for _ in 0..k {
                registry.derive_next().unwrap();
            }
            registry.accounts().to_vec()
        };

        let first = run();
        let second = run();
        prop_assert_eq!(&first, &second);
        for (i, account) in first.iter().enumerate() {
            prop_assert_eq!(account.path().account_index(), Some(i as u32));
        }
    }
}
