//! Batch key pair derivation from a wallet.

use alloc::vec::Vec;

use solkey::Wallet;

use crate::Error;
use crate::derivation_style::DerivationStyle;
use crate::keypair::KeyPair;
use crate::path::HARDENED_OFFSET;

/// Derives Solana key pairs from a [`solkey::Wallet`].
///
/// Every key pair carries the wallet mnemonic and the path it was derived
/// along.
#[derive(Debug)]
pub struct Deriver<'a> {
    wallet: &'a Wallet,
}

impl<'a> Deriver<'a> {
    /// Create a deriver borrowing `wallet`.
    #[inline]
    #[must_use]
    pub const fn new(wallet: &'a Wallet) -> Self {
        Self { wallet }
    }

    /// Derive account `index` with [`DerivationStyle::Standard`].
    ///
    /// # Errors
    ///
    /// Returns an error if derivation fails.
    #[inline]
    pub fn derive(&self, index: u32) -> Result<KeyPair, Error> {
        self.derive_with(DerivationStyle::Standard, index)
    }

    /// Derive account `index` with the given style.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDerivePath`] if `index` does not fit a
    /// hardened segment (`index >= 2^31`) or a BIP32-family style fails to
    /// traverse.
    pub fn derive_with(&self, style: DerivationStyle, index: u32) -> Result<KeyPair, Error> {
        if index >= HARDENED_OFFSET {
            tracing::debug!(index, "account index out of hardened range");
            return Err(Error::InvalidDerivePath);
        }
        self.derive_path(&style.path(index))
    }

    /// Derive `count` consecutive Standard accounts starting at `start`.
    ///
    /// # Errors
    ///
    /// Returns the first derivation error.
    #[inline]
    pub fn derive_many(&self, start: u32, count: u32) -> Result<Vec<KeyPair>, Error> {
        self.derive_many_with(DerivationStyle::Standard, start, count)
    }

    /// Derive `count` consecutive accounts of one style starting at `start`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDerivePath`] if any index in the range is
    /// `2^31` or above, otherwise the first derivation error.
    pub fn derive_many_with(
        &self,
        style: DerivationStyle,
        start: u32,
        count: u32,
    ) -> Result<Vec<KeyPair>, Error> {
        let end = u64::from(start) + u64::from(count);
        if count > 0 && end > u64::from(HARDENED_OFFSET) {
            tracing::debug!(start, count, "account range out of hardened range");
            return Err(Error::InvalidDerivePath);
        }
        (start..start + count)
            .map(|index| self.derive_with(style, index))
            .collect()
    }

    /// Derive along an arbitrary path string.
    ///
    /// # Errors
    ///
    /// See [`KeyPair::from_wallet`].
    #[inline]
    pub fn derive_path(&self, path: &str) -> Result<KeyPair, Error> {
        KeyPair::from_wallet(self.wallet, path)
    }
}

#[cfg(test)]
#[allow(deprecated)]
mod tests {
    use super::*;

    fn test_wallet() -> Wallet {
        Wallet::from_mnemonic(
            "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about",
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_derive_standard() {
        let wallet = test_wallet();
        let keypair = Deriver::new(&wallet).derive(0).unwrap();
        assert_eq!(keypair.address(), "HAgk14JpMQLgt6rVgv7cBQFJWFto5Dqxi472uT3DKpqk");
        assert_eq!(keypair.derive_path(), Some("m/44'/501'/0'/0'"));
    }

    #[test]
    fn test_derive_with_styles() {
        let wallet = test_wallet();
        let deriver = Deriver::new(&wallet);

        let cases = [
            (DerivationStyle::Trust, "GjJyeC1r2RgkuoCWMyPYkCWSGSGLcz266EaAkLA27AhL"),
            (DerivationStyle::LedgerLive, "B9sVeu4rJU12oUrUtzjc6BSNuEXdfvurZkdcaTVkP2LY"),
            (DerivationStyle::Bip44, "4EngF3p73rFnEgjcAG5DVQ91QGFze4vsvjVUkAwLjv14"),
            (DerivationStyle::Legacy, "FTt72dUEL1X9pPs9V9q4Eh5ejKXEbPD6snaHSQAmnJGU"),
        ];
        for (style, expected) in cases {
            assert_eq!(deriver.derive_with(style, 0).unwrap().address(), expected, "{style}");
        }
    }

    #[test]
    fn test_derive_many() {
        let wallet = test_wallet();
        let keypairs = Deriver::new(&wallet).derive_many(0, 2).unwrap();

        assert_eq!(keypairs.len(), 2);
        assert_eq!(keypairs[0].address(), "HAgk14JpMQLgt6rVgv7cBQFJWFto5Dqxi472uT3DKpqk");
        assert_eq!(keypairs[1].address(), "Hh8QwFUA6MtVu1qAoq12ucvFHNwCcVTV7hpWjeY1Hztb");
        assert_eq!(keypairs[1].derive_path(), Some("m/44'/501'/1'/0'"));
    }

    #[test]
    fn test_index_out_of_hardened_range() {
        let wallet = test_wallet();
        let deriver = Deriver::new(&wallet);

        assert_eq!(deriver.derive(0x8000_0000).unwrap_err(), Error::InvalidDerivePath);
        assert_eq!(
            deriver.derive_with(DerivationStyle::Trust, u32::MAX).unwrap_err(),
            Error::InvalidDerivePath
        );

        let last = deriver.derive_with(DerivationStyle::Trust, 0x7fff_ffff).unwrap();
        assert_ne!(last.address(), deriver.derive_with(DerivationStyle::Trust, 0).unwrap().address());
    }

    #[test]
    fn test_derive_many_range_bounds() {
        let wallet = test_wallet();
        let deriver = Deriver::new(&wallet);

        assert_eq!(
            deriver.derive_many_with(DerivationStyle::Trust, u32::MAX, 1).unwrap_err(),
            Error::InvalidDerivePath
        );
        assert_eq!(
            deriver.derive_many_with(DerivationStyle::Trust, 0x7fff_fffe, 5).unwrap_err(),
            Error::InvalidDerivePath
        );

        let tail = deriver.derive_many_with(DerivationStyle::Trust, 0x7fff_fffe, 2).unwrap();
        assert_eq!(tail.len(), 2);
        assert_eq!(tail[1].derive_path(), Some("m/44'/501'/2147483647'"));

        assert!(deriver.derive_many(u32::MAX, 0).unwrap().is_empty());
    }

    #[test]
    fn test_derive_path_matches_style() {
        let wallet = test_wallet();
        let deriver = Deriver::new(&wallet);
        let by_path = deriver.derive_path("m/44'/501'/3'/0'").unwrap();
        let by_style = deriver.derive(3).unwrap();
        assert_eq!(by_path.secret_key(), by_style.secret_key());
    }

    #[test]
    fn test_passphrase_changes_keys() {
        let plain = test_wallet();
        let protected = Wallet::from_mnemonic(plain.mnemonic(), Some("TREZOR")).unwrap();
        let a = Deriver::new(&plain).derive(0).unwrap();
        let b = Deriver::new(&protected).derive(0).unwrap();
        assert_ne!(a.address(), b.address());
    }
}
