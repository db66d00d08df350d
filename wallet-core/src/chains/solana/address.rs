// wallet-core/src/chains/solana/address.rs
//
// Solana Address Module
// ed25519 public key (32B) → base58, không checksum

use crate::error::{CryptoError, WalletError, WalletResult};
use ed25519_dalek::SigningKey;
use zeroize::Zeroizing;

/// Solana key encodings.
///
/// - Address: base58(public key, 32B)
/// - Secret key: base58(seed ‖ public key, 64B), cùng format với `solana-keygen`
pub struct SolanaAddress;

impl SolanaAddress {
    /// Base58 address for a 32-byte ed25519 seed.
    pub fn derive(seed: &[u8; 32]) -> String {
        let signing_key = SigningKey::from_bytes(seed);
        bs58::encode(signing_key.verifying_key().to_bytes()).into_string()
    }

    /// Base58 of the 64-byte `seed ‖ public key` secret key.
    pub fn encode_secret_key(seed: &[u8; 32]) -> String {
        let signing_key = SigningKey::from_bytes(seed);
        let keypair_bytes = Zeroizing::new(signing_key.to_keypair_bytes());
        bs58::encode(&keypair_bytes[..]).into_string()
    }

    /// Decoded 32-byte public key, if `address` is valid base58 of the right length.
    pub fn decode(address: &str) -> WalletResult<[u8; 32]> {
        let bytes = bs58::decode(address).into_vec().map_err(|_| {
            WalletError::Derivation(CryptoError::InvalidKeyFormat(
                "invalid base58 address".to_string(),
            ))
        })?;
        bytes.try_into().map_err(|_| {
            WalletError::Derivation(CryptoError::InvalidKeyFormat(
                "Solana address must decode to 32 bytes".to_string(),
            ))
        })
    }

    #[inline]
    pub fn is_valid(address: &str) -> bool {
        Self::decode(address).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // RFC 8032 test 1
    const RFC8032_SECRET: &str = "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60";
    const RFC8032_PUBLIC: &str = "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a";

    #[test]
    fn test_address_is_base58_public_key() {
        let seed: [u8; 32] = hex::decode(RFC8032_SECRET).unwrap().try_into().unwrap();
        let address = SolanaAddress::derive(&seed);
        assert_eq!(hex::encode(SolanaAddress::decode(&address).unwrap()), RFC8032_PUBLIC);
    }

    #[test]
    fn test_secret_key_is_seed_then_public_key() {
        let seed: [u8; 32] = hex::decode(RFC8032_SECRET).unwrap().try_into().unwrap();
        let secret = SolanaAddress::encode_secret_key(&seed);
        let decoded = bs58::decode(&secret).into_vec().unwrap();
        assert_eq!(decoded.len(), 64);
        assert_eq!(hex::encode(&decoded[..32]), RFC8032_SECRET);
        assert_eq!(hex::encode(&decoded[32..]), RFC8032_PUBLIC);
    }

    #[test]
    fn test_is_valid() {
        assert!(SolanaAddress::is_valid("11111111111111111111111111111111"));
        assert!(!SolanaAddress::is_valid("0OIl"));
        assert!(!SolanaAddress::is_valid("abc"));
    }
}
