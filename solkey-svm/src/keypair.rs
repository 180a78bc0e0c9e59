//! Solana key pairs: construction, derivation dispatch and signing.

use alloc::string::{String, ToString};
use core::fmt;

use ed25519_dalek::{Signer, SigningKey};
use solkey::Wallet;
use zeroize::Zeroizing;

use crate::path::{DerivationPath, PathFamily};
use crate::pubkey::PublicKey;
use crate::slip10::DerivedKey;
use crate::{Error, tree};

/// Length of a Solana secret key: 32-byte seed followed by 32-byte public key.
pub const SECRET_KEY_LENGTH: usize = 64;

/// An Ed25519 key pair in Solana's 64-byte layout.
///
/// `secret_key[..32]` is the private seed and `secret_key[32..]` the public
/// key. When built from a mnemonic, the phrase and path are kept as
/// provenance only; the key is never re-derived from them.
pub struct KeyPair {
    secret_key: Zeroizing<[u8; SECRET_KEY_LENGTH]>,
    mnemonic: Option<Zeroizing<String>>,
    derive_path: Option<String>,
}

impl KeyPair {
    /// Adopt an existing 64-byte secret key.
    ///
    /// The public half is not checked against the private half here;
    /// a mismatched key fails later in [`Self::sign_digest`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSecretKeyLength`] unless exactly 64 bytes are given.
    pub fn from_secret_key(secret_key: &[u8]) -> Result<Self, Error> {
        let bytes = <[u8; SECRET_KEY_LENGTH]>::try_from(secret_key)
            .map_err(|_| Error::InvalidSecretKeyLength(secret_key.len()))?;
        Ok(Self::from_parts(Zeroizing::new(bytes)))
    }

    /// Build the key pair whose private seed is the first 32 bytes of `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSeedLength`] if `seed` is shorter than 32 bytes.
    pub fn from_seed(seed: &[u8]) -> Result<Self, Error> {
        let private: &[u8; 32] = seed
            .get(..32)
            .and_then(|bytes| bytes.try_into().ok())
            .ok_or(Error::InvalidSeedLength)?;
        let signing_key = SigningKey::from_bytes(private);
        Ok(Self::from_parts(Zeroizing::new(signing_key.to_keypair_bytes())))
    }

    /// Derive from a mnemonic phrase (no passphrase) along `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMnemonic`] if the phrase is rejected and
    /// [`Error::InvalidDerivePath`] if BIP32 traversal fails.
    pub fn from_mnemonic(phrase: &str, path: &str) -> Result<Self, Error> {
        let wallet = Wallet::from_mnemonic(phrase, None)?;
        Self::from_wallet(&wallet, path)
    }

    /// Derive from a wallet seed along `path`, choosing the algorithm from
    /// the path's [`PathFamily`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDerivePath`] if BIP32 traversal fails.
    pub fn from_wallet(wallet: &Wallet, path: &str) -> Result<Self, Error> {
        let mut keypair = Self::derive(wallet.seed(), path)?;
        keypair.mnemonic = Some(Zeroizing::new(wallet.mnemonic().to_string()));
        keypair.derive_path = Some(path.to_string());
        Ok(keypair)
    }

    /// Derive from raw seed bytes along `path`, without provenance.
    ///
    /// # Errors
    ///
    /// See [`Self::from_wallet`]; additionally [`Error::InvalidSeedLength`]
    /// for a raw-family path on a seed shorter than 32 bytes.
    pub fn derive(seed: &[u8], path: &str) -> Result<Self, Error> {
        let parsed = DerivationPath::parse(path);
        let family = parsed.family();
        tracing::debug!(?family, depth = parsed.depth(), "deriving key pair");

        match family {
            PathFamily::Ed25519 => {
                let derived = DerivedKey::derive_values(seed, parsed.values())?;
                Self::from_seed(derived.private_key())
            }
            PathFamily::Bip32 => {
                let (key, _) = tree::derive_from_seed(seed, path)?;
                Self::from_seed(&*key)
            }
            PathFamily::Raw => Self::from_seed(seed),
        }
    }

    /// Parse the base58 export of a 64-byte secret key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEncoding`] for non-base58 text and
    /// [`Error::InvalidSecretKeyLength`] for a decoded length other than 64.
    pub fn from_base58(encoded: &str) -> Result<Self, Error> {
        let bytes = Zeroizing::new(
            bs58::decode(encoded)
                .into_vec()
                .map_err(|_| Error::InvalidEncoding)?,
        );
        Self::from_secret_key(&bytes)
    }

    /// Generate a fresh 12-word mnemonic and derive its first standard account.
    ///
    /// # Errors
    ///
    /// Returns an error if mnemonic generation fails.
    #[cfg(feature = "rand")]
    pub fn random() -> Result<Self, Error> {
        let wallet = Wallet::generate(12, None)?;
        Self::from_wallet(&wallet, &crate::DerivationStyle::Standard.path(0))
    }

    fn from_parts(secret_key: Zeroizing<[u8; SECRET_KEY_LENGTH]>) -> Self {
        Self {
            secret_key,
            mnemonic: None,
            derive_path: None,
        }
    }

    /// The 64-byte secret key.
    #[inline]
    #[must_use]
    pub fn secret_key(&self) -> &[u8; SECRET_KEY_LENGTH] {
        &self.secret_key
    }

    /// The public key, sliced from the secret key.
    #[must_use]
    pub fn public_key(&self) -> PublicKey {
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&self.secret_key[32..]);
        PublicKey::new(bytes)
    }

    /// The base58 address of the public key.
    #[inline]
    #[must_use]
    pub fn address(&self) -> String {
        self.public_key().address()
    }

    /// Mnemonic this key pair was derived from, if any.
    #[must_use]
    pub fn mnemonic(&self) -> Option<&str> {
        self.mnemonic.as_deref().map(String::as_str)
    }

    /// Derivation path this key pair was derived along, if any.
    #[must_use]
    pub fn derive_path(&self) -> Option<&str> {
        self.derive_path.as_deref()
    }

    /// Base58 of the 64-byte secret key, the format wallet apps import.
    #[must_use]
    pub fn to_base58(&self) -> Zeroizing<String> {
        Zeroizing::new(bs58::encode(&*self.secret_key).into_string())
    }

    /// Sign `digest` and return the 64-byte signature.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unknown`] if the public half of the secret key does
    /// not belong to the private half.
    pub fn sign_digest(&self, digest: &[u8]) -> Result<[u8; 64], Error> {
        let signing_key = SigningKey::from_keypair_bytes(&self.secret_key).map_err(|err| {
            tracing::debug!(%err, "secret key halves do not match");
            Error::Unknown
        })?;
        let signature = signing_key.try_sign(digest).map_err(|_| Error::Unknown)?;
        Ok(signature.to_bytes())
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("address", &self.address())
            .field("derive_path", &self.derive_path)
            .finish_non_exhaustive()
    }
}
