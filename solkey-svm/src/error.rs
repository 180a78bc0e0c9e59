//! Error types for Solana key derivation.
//!
//! Failures reported by the mnemonic and BIP32 collaborators are mapped
//! onto these kinds at the crate boundary. Primitives that cannot fail
//! for well-formed input report [`Error::Unknown`] instead of panicking.

use core::fmt;

/// Errors that can occur during key derivation, signing or address parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The mnemonic could not be turned into a seed (bad word, bad checksum).
    InvalidMnemonic,
    /// BIP32 tree construction or traversal failed.
    InvalidDerivePath,
    /// Seed shorter than the 32 bytes an Ed25519 key needs.
    InvalidSeedLength,
    /// Secret key import with a length other than 64 bytes.
    InvalidSecretKeyLength(usize),
    /// Text is not the base58 encoding of a 32-byte public key.
    InvalidAddress,
    /// Text is not valid base58.
    InvalidEncoding,
    /// A primitive that should never fail for this input did.
    Unknown,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMnemonic => write!(f, "invalid mnemonic"),
            Self::InvalidDerivePath => write!(f, "invalid derivation path"),
            Self::InvalidSeedLength => write!(f, "invalid seed length, need at least 32 bytes"),
            Self::InvalidSecretKeyLength(n) => {
                write!(f, "invalid secret key length {n}, expected 64 bytes")
            }
            Self::InvalidAddress => write!(f, "invalid address"),
            Self::InvalidEncoding => write!(f, "invalid base58 encoding"),
            Self::Unknown => write!(f, "unknown error"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<solkey::Error> for Error {
    fn from(err: solkey::Error) -> Self {
        tracing::debug!(%err, "mnemonic rejected");
        Self::InvalidMnemonic
    }
}
