//! SLIP-0010 Ed25519 key derivation.
//!
//! Reference: https://github.com/satoshilabs/slips/blob/master/slip-0010.md
//!
//! Child steps always use the private-key form `0x00 || key || index`.
//! The hardened offset is only added for segments marked with `'`; an
//! unmarked segment is hashed with its plain index.

use hmac::{Hmac, Mac};
use sha2::Sha512;
use zeroize::{Zeroize, Zeroizing};

use crate::Error;

type HmacSha512 = Hmac<Sha512>;

const ED25519_CURVE: &[u8] = b"ed25519 seed";

/// Length of the HMAC message for one child step.
pub const CHILD_DATA_LEN: usize = 37;

/// A 32-byte key and its chain code, zeroized on drop.
pub struct DerivedKey {
    private_key: Zeroizing<[u8; 32]>,
    chain_code: Zeroizing<[u8; 32]>,
}

impl DerivedKey {
    /// Master key: `HMAC-SHA512(key = "ed25519 seed", msg = seed)`.
    ///
    /// The seed is hashed exactly as given; a BIP39 seed is passed in full.
    pub fn from_seed(seed: &[u8]) -> Result<Self, Error> {
        Self::hmac(ED25519_CURVE, &[seed])
    }

    /// The 37-byte message hashed for child value `value`.
    #[must_use]
    pub fn child_data(&self, value: u32) -> Zeroizing<[u8; CHILD_DATA_LEN]> {
        let mut data = Zeroizing::new([0u8; CHILD_DATA_LEN]);
        data[1..33].copy_from_slice(&*self.private_key);
        data[33..].copy_from_slice(&value.to_be_bytes());
        data
    }

    /// One child step for a value with the hardened offset already applied.
    pub fn derive_child(&self, value: u32) -> Result<Self, Error> {
        let data = self.child_data(value);
        Self::hmac(&*self.chain_code, &[data.as_slice()])
    }

    /// Master key followed by one child step per value, in order.
    pub fn derive_values<I>(seed: &[u8], values: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = u32>,
    {
        values
            .into_iter()
            .try_fold(Self::from_seed(seed)?, |key, value| key.derive_child(value))
    }

    /// Derive along a textual path such as `m/44'/501'/0'/0'`.
    #[cfg(feature = "alloc")]
    pub fn derive_path(seed: &[u8], path: &str) -> Result<Self, Error> {
        let path = crate::path::DerivationPath::parse(path);
        Self::derive_values(seed, path.values())
    }

    /// The derived 32-byte key, used as the Ed25519 seed.
    #[must_use]
    pub fn private_key(&self) -> &[u8; 32] {
        &self.private_key
    }

    /// The chain code carried into the next step.
    #[must_use]
    pub fn chain_code(&self) -> &[u8; 32] {
        &self.chain_code
    }

    fn hmac(key: &[u8], parts: &[&[u8]]) -> Result<Self, Error> {
        let mut mac = HmacSha512::new_from_slice(key).map_err(|_| Error::Unknown)?;
        for part in parts {
            mac.update(part);
        }
        let mut result = mac.finalize().into_bytes();

        let mut private_key = Zeroizing::new([0u8; 32]);
        let mut chain_code = Zeroizing::new([0u8; 32]);
        private_key.copy_from_slice(&result[..32]);
        chain_code.copy_from_slice(&result[32..]);
        result.as_mut_slice().zeroize();

        Ok(Self {
            private_key,
            chain_code,
        })
    }
}

impl core::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DerivedKey").finish_non_exhaustive()
    }
}
