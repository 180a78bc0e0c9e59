//! Mnemonic-backed wallet seed.

use alloc::string::{String, ToString};
use core::fmt;

use bip39::Mnemonic;
use zeroize::Zeroizing;

use crate::Error;

/// Word counts accepted by BIP39.
#[cfg(feature = "rand")]
const WORD_COUNTS: [usize; 5] = [12, 15, 18, 21, 24];

/// A BIP39 wallet: the normalized mnemonic and its 64-byte seed.
///
/// The seed is what every Solana derivation starts from. Both fields are
/// wiped from memory when the wallet is dropped.
pub struct Wallet {
    mnemonic: Zeroizing<String>,
    seed: Zeroizing<[u8; 64]>,
    has_passphrase: bool,
}

impl Wallet {
    /// Generate a new wallet with a random English mnemonic.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWordCount`] unless `word_count` is one of
    /// 12, 15, 18, 21 or 24.
    #[cfg(feature = "rand")]
    pub fn generate(word_count: usize, passphrase: Option<&str>) -> Result<Self, Error> {
        if !WORD_COUNTS.contains(&word_count) {
            return Err(Error::InvalidWordCount(word_count));
        }

        let mnemonic = Mnemonic::generate(word_count)?;
        let phrase = Zeroizing::new(mnemonic.to_string());
        Self::from_mnemonic(&phrase, passphrase)
    }

    /// Create a wallet from raw entropy (16, 20, 24, 28 or 32 bytes).
    ///
    /// # Errors
    ///
    /// Returns an error if the entropy length is invalid.
    pub fn from_entropy(entropy: &[u8], passphrase: Option<&str>) -> Result<Self, Error> {
        let mnemonic = Mnemonic::from_entropy(entropy)?;
        let phrase = Zeroizing::new(mnemonic.to_string());
        Self::from_mnemonic(&phrase, passphrase)
    }

    /// Create a wallet from an existing mnemonic phrase.
    ///
    /// An empty passphrase is the same as no passphrase.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Mnemonic`] on an unknown word or a checksum mismatch.
    pub fn from_mnemonic(phrase: &str, passphrase: Option<&str>) -> Result<Self, Error> {
        let mnemonic: Mnemonic = phrase.parse()?;
        let passphrase = passphrase.unwrap_or("");
        let seed = Zeroizing::new(mnemonic.to_seed(passphrase));

        tracing::debug!(
            words = mnemonic.word_count(),
            passphrase = !passphrase.is_empty(),
            "wallet seed expanded"
        );

        Ok(Self {
            mnemonic: Zeroizing::new(mnemonic.to_string()),
            seed,
            has_passphrase: !passphrase.is_empty(),
        })
    }

    /// The normalized mnemonic phrase.
    ///
    /// **Security Warning**: this phrase reconstructs every derived key.
    #[inline]
    #[must_use]
    pub fn mnemonic(&self) -> &str {
        &self.mnemonic
    }

    /// The 64-byte BIP39 seed.
    #[inline]
    #[must_use]
    pub fn seed(&self) -> &[u8; 64] {
        &self.seed
    }

    /// Whether a non-empty passphrase went into the seed.
    #[must_use]
    pub const fn has_passphrase(&self) -> bool {
        self.has_passphrase
    }

    /// Number of words in the mnemonic.
    #[inline]
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.mnemonic.split_whitespace().count()
    }
}

impl fmt::Debug for Wallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wallet")
            .field("words", &self.word_count())
            .field("has_passphrase", &self.has_passphrase)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    #[test]
    fn test_known_seed() {
        let wallet = Wallet::from_mnemonic(TEST_MNEMONIC, None).unwrap();
        assert_eq!(
            hex::encode(wallet.seed()),
            "5eb00bbddcf069084889a8ab9155568165f5c453ccb85e70811aaed6f6da5fc1\
             9a5ac40b389cd370d086206dec8aa6c43daea6690f20ad3d8d48b2d2ce9e38e4"
        );
        assert_eq!(wallet.mnemonic(), TEST_MNEMONIC);
        assert_eq!(wallet.word_count(), 12);
        assert!(!wallet.has_passphrase());
    }

    #[test]
    fn test_bad_checksum_rejected() {
        let phrase = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon";
        assert!(matches!(
            Wallet::from_mnemonic(phrase, None),
            Err(Error::Mnemonic(_))
        ));
    }

    #[test]
    fn test_unknown_word_rejected() {
        let phrase = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon solana";
        assert!(Wallet::from_mnemonic(phrase, None).is_err());
    }

    #[test]
    fn test_passphrase_changes_seed() {
        let plain = Wallet::from_mnemonic(TEST_MNEMONIC, None).unwrap();
        let salted = Wallet::from_mnemonic(TEST_MNEMONIC, Some("password")).unwrap();

        assert_ne!(plain.seed(), salted.seed());
        assert!(salted.has_passphrase());
    }

    #[test]
    fn test_empty_passphrase_is_none() {
        let none = Wallet::from_mnemonic(TEST_MNEMONIC, None).unwrap();
        let empty = Wallet::from_mnemonic(TEST_MNEMONIC, Some("")).unwrap();

        assert_eq!(none.seed(), empty.seed());
        assert!(!empty.has_passphrase());
    }

    #[test]
    fn test_from_entropy() {
        let wallet = Wallet::from_entropy(&[0u8; 16], None).unwrap();
        assert_eq!(wallet.mnemonic(), TEST_MNEMONIC);
    }

    #[test]
    fn test_invalid_entropy_length() {
        assert!(Wallet::from_entropy(&[0u8; 15], None).is_err());
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let wallet = Wallet::from_mnemonic(TEST_MNEMONIC, None).unwrap();
        let debug = alloc::format!("{wallet:?}");
        assert!(!debug.contains("abandon"));
        assert!(debug.contains("words: 12"));
    }

    #[cfg(feature = "rand")]
    #[test]
    fn test_generate() {
        let wallet = Wallet::generate(24, None).unwrap();
        assert_eq!(wallet.word_count(), 24);
        assert!(matches!(
            Wallet::generate(13, None),
            Err(Error::InvalidWordCount(13))
        ));
    }
}
