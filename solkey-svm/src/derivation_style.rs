//! Derivation path presets used by Solana wallet software.

use alloc::{format, string::String};
use core::fmt;
use core::str::FromStr;

use crate::path::PathFamily;

/// Path layouts used by the common Solana wallets.
///
/// | Style        | Path                        | Family  |
/// |--------------|-----------------------------|---------|
/// | `Standard`   | `m/44'/501'/{i}'/0'`        | Ed25519 |
/// | `Trust`      | `m/44'/501'/{i}'`           | Ed25519 |
/// | `LedgerLive` | `m/44'/501'/{i}'/0'/0'`     | Ed25519 |
/// | `Bip44`      | `m/44'/501'/{i}'/0/0`       | BIP32   |
/// | `Legacy`     | `m/501'/{i}'/0/0`           | BIP32   |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum DerivationStyle {
    /// Phantom, Solflare, Backpack and Trezor.
    #[default]
    Standard,
    /// Trust Wallet, Ledger native app and Keystone.
    Trust,
    /// Ledger Live accounts.
    LedgerLive,
    /// Full BIP44 layout with normal change and address segments, as
    /// written by some multi-chain wallets.
    Bip44,
    /// Old Sollet and early Phantom wallets.
    #[deprecated(note = "only for recovering old Sollet/Phantom wallets, use Standard")]
    Legacy,
}

impl DerivationStyle {
    /// The path string for account `index`.
    #[must_use]
    #[allow(deprecated)]
    pub fn path(self, index: u32) -> String {
        match self {
            Self::Standard => format!("m/44'/501'/{index}'/0'"),
            Self::Trust => format!("m/44'/501'/{index}'"),
            Self::LedgerLive => format!("m/44'/501'/{index}'/0'/0'"),
            Self::Bip44 => format!("m/44'/501'/{index}'/0/0"),
            Self::Legacy => format!("m/501'/{index}'/0/0"),
        }
    }

    /// Human-readable name.
    #[must_use]
    #[allow(deprecated)]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Standard => "Standard (Phantom/Solflare)",
            Self::Trust => "Trust (Ledger/Keystone)",
            Self::LedgerLive => "Ledger Live",
            Self::Bip44 => "BIP44 (non-hardened change)",
            Self::Legacy => "Legacy (deprecated)",
        }
    }

    /// Short identifier accepted on the command line.
    #[must_use]
    #[allow(deprecated)]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Trust => "trust",
            Self::LedgerLive => "ledger-live",
            Self::Bip44 => "bip44",
            Self::Legacy => "legacy",
        }
    }

    /// Every style, in display order.
    #[must_use]
    #[allow(deprecated)]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Standard,
            Self::Trust,
            Self::LedgerLive,
            Self::Bip44,
            Self::Legacy,
        ]
    }

    /// Which derivation algorithm the style's paths go through.
    #[must_use]
    #[allow(deprecated)]
    pub const fn family(self) -> PathFamily {
        match self {
            Self::Standard | Self::Trust | Self::LedgerLive => PathFamily::Ed25519,
            Self::Bip44 | Self::Legacy => PathFamily::Bip32,
        }
    }
}

impl fmt::Display for DerivationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a derivation style name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDerivationStyleError(pub(crate) String);

impl fmt::Display for ParseDerivationStyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown derivation style '{}', expected one of: standard, trust, ledger-live, bip44, legacy",
            self.0
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseDerivationStyleError {}

#[allow(deprecated)]
impl FromStr for DerivationStyle {
    type Err = ParseDerivationStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "standard" | "phantom" | "solflare" | "backpack" | "trezor" => Ok(Self::Standard),
            "trust" | "trustwallet" | "ledger" | "keystone" => Ok(Self::Trust),
            "ledger-live" | "ledgerlive" | "live" => Ok(Self::LedgerLive),
            "bip44" | "bip32" => Ok(Self::Bip44),
            "legacy" | "sollet" => Ok(Self::Legacy),
            _ => Err(ParseDerivationStyleError(s.into())),
        }
    }
}

#[cfg(test)]
#[allow(deprecated)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_paths() {
        assert_eq!(DerivationStyle::Standard.path(0), "m/44'/501'/0'/0'");
        assert_eq!(DerivationStyle::Standard.path(7), "m/44'/501'/7'/0'");
        assert_eq!(DerivationStyle::Trust.path(3), "m/44'/501'/3'");
        assert_eq!(DerivationStyle::LedgerLive.path(1), "m/44'/501'/1'/0'/0'");
        assert_eq!(DerivationStyle::Bip44.path(2), "m/44'/501'/2'/0/0");
        assert_eq!(DerivationStyle::Legacy.path(10), "m/501'/10'/0/0");
    }

    #[test]
    fn test_family_matches_path_shape() {
        for style in DerivationStyle::all() {
            assert_eq!(
                PathFamily::classify(&style.path(5)),
                style.family(),
                "{style}"
            );
        }
    }

    #[test]
    fn test_from_str_aliases() {
        let cases = [
            ("standard", DerivationStyle::Standard),
            ("Phantom", DerivationStyle::Standard),
            ("solflare", DerivationStyle::Standard),
            ("ledger", DerivationStyle::Trust),
            ("KEYSTONE", DerivationStyle::Trust),
            ("live", DerivationStyle::LedgerLive),
            ("bip44", DerivationStyle::Bip44),
            ("sollet", DerivationStyle::Legacy),
        ];
        for (input, expected) in cases {
            assert_eq!(input.parse::<DerivationStyle>().unwrap(), expected);
        }
    }

    #[test]
    fn test_ids_round_trip() {
        for style in DerivationStyle::all() {
            assert_eq!(style.id().parse::<DerivationStyle>().unwrap(), *style);
        }
    }

    #[test]
    fn test_from_str_invalid() {
        let err = "metamask".parse::<DerivationStyle>().unwrap_err();
        assert!(err.to_string().contains("metamask"));
    }

    #[test]
    fn test_default() {
        assert_eq!(DerivationStyle::default(), DerivationStyle::Standard);
    }
}
