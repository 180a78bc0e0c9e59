//! Solana public keys, addresses and program derived addresses.

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use curve25519_dalek::edwards::CompressedEdwardsY;
use ed25519_dalek::{Signature, Verifier, VerifyingKey};
use sha2::{Digest, Sha256};

use crate::Error;

/// Domain separator appended to every program derived address hash.
const PDA_MARKER: &[u8] = b"ProgramDerivedAddress";

/// Maximum number of caller seeds, leaving room for the bump.
pub const MAX_SEEDS: usize = 15;

/// Maximum length of a single seed.
pub const MAX_SEED_LEN: usize = 32;

/// A 32-byte Ed25519 public key; its base58 form is the Solana address.
///
/// Two keys are equal exactly when their addresses are equal, since
/// base58 is a bijection on 32-byte values.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PublicKey([u8; 32]);

impl PublicKey {
    /// Length of a public key in bytes.
    pub const LENGTH: usize = 32;

    /// System program, owner of plain wallet accounts.
    pub const OWNER_PROGRAM_ID: Self = Self::from_base58_const("11111111111111111111111111111111");
    /// SPL token program.
    pub const TOKEN_PROGRAM_ID: Self =
        Self::from_base58_const("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA");
    /// SPL memo program.
    pub const MEMO_PROGRAM_ID: Self =
        Self::from_base58_const("Memo1UhkJRfHyvLMcVucJwxXeuD728EqVDDwQDxFMNo");
    /// SPL associated token account program.
    pub const ASSOCIATED_TOKEN_PROGRAM_ID: Self =
        Self::from_base58_const("ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL");
    /// Rent sysvar.
    pub const SYSVAR_RENT_ID: Self =
        Self::from_base58_const("SysvarRent111111111111111111111111111111111");
    /// Owner validation program.
    pub const OWNER_VALIDATION_PROGRAM_ID: Self =
        Self::from_base58_const("4MNPdKu9wFMvEeZBMt3Eipfs5ovVWTJb31pEXDJAAxX5");

    /// Wrap raw key bytes.
    #[inline]
    #[must_use]
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    // Evaluated at compile time; a bad literal fails the build.
    const fn from_base58_const(address: &str) -> Self {
        Self(bs58::decode(address.as_bytes()).into_array_const_unwrap())
    }

    /// Parse a base58 address.
    ///
    /// Only the length is checked; use [`Self::is_valid_address`] to also
    /// require a point on the curve.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAddress`] if `address` is not base58 or does
    /// not decode to 32 bytes.
    pub fn from_base58(address: &str) -> Result<Self, Error> {
        let bytes = bs58::decode(address)
            .into_vec()
            .map_err(|_| Error::InvalidAddress)?;
        Self::try_from(bytes.as_slice())
    }

    /// Raw key bytes.
    #[inline]
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Raw key bytes, copied.
    #[inline]
    #[must_use]
    pub const fn to_bytes(self) -> [u8; 32] {
        self.0
    }

    /// The base58 address.
    #[must_use]
    pub fn address(&self) -> String {
        bs58::encode(&self.0).into_string()
    }

    /// Whether the bytes decompress to a point on the Ed25519 curve.
    #[must_use]
    pub fn is_on_curve(&self) -> bool {
        CompressedEdwardsY(self.0).decompress().is_some()
    }

    /// Whether `address` is base58 for 32 bytes lying on the curve.
    ///
    /// Program derived addresses are off-curve and therefore rejected.
    #[must_use]
    pub fn is_valid_address(address: &str) -> bool {
        Self::from_base58(address).is_ok_and(|key| key.is_on_curve())
    }

    /// Check an Ed25519 signature made by this key.
    #[must_use]
    pub fn verify(&self, message: &[u8], signature: &[u8; 64]) -> bool {
        VerifyingKey::from_bytes(&self.0)
            .is_ok_and(|key| key.verify(message, &Signature::from_bytes(signature)).is_ok())
    }

    /// Hash `seeds || bump || program_id || "ProgramDerivedAddress"` for
    /// bump 255 down to 1 and return the first off-curve result.
    ///
    /// Returns `None` when more than [`MAX_SEEDS`] seeds are given, a seed
    /// is longer than [`MAX_SEED_LEN`], or no bump yields an off-curve key.
    #[must_use]
    pub fn find_program_address(seeds: &[&[u8]], program_id: &Self) -> Option<(Self, u8)> {
        if seeds.len() > MAX_SEEDS || seeds.iter().any(|seed| seed.len() > MAX_SEED_LEN) {
            return None;
        }

        for bump in (1..=u8::MAX).rev() {
            let mut hasher = Sha256::new();
            for seed in seeds {
                hasher.update(seed);
            }
            hasher.update([bump]);
            hasher.update(program_id.0);
            hasher.update(PDA_MARKER);

            let candidate = Self(hasher.finalize().into());
            if !candidate.is_on_curve() {
                tracing::trace!(bump, "program address found");
                return Some((candidate, bump));
            }
        }

        tracing::debug!("no off-curve program address in bump range");
        None
    }

    /// The associated token account of `owner` for `mint`.
    #[must_use]
    pub fn new_associated_token(owner: &Self, mint: &Self) -> Option<Self> {
        Self::find_program_address(
            &[&owner.0, &Self::TOKEN_PROGRAM_ID.0, &mint.0],
            &Self::ASSOCIATED_TOKEN_PROGRAM_ID,
        )
        .map(|(address, _)| address)
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.address())
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", self.address())
    }
}

impl FromStr for PublicKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_base58(s)
    }
}

impl From<[u8; 32]> for PublicKey {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for PublicKey {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        <[u8; 32]>::try_from(bytes)
            .map(Self)
            .map_err(|_| Error::InvalidAddress)
    }
}

impl AsRef<[u8]> for PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
