//! BIP32 tree derivation for paths with normal segments.
//!
//! Paths such as `m/44'/501'/0'/0/0` or `m/501'/0'/0/0` were produced by
//! wallets that walked a secp256k1 BIP32 tree and reused the resulting
//! private key as an Ed25519 seed. The tree itself comes from the `bip32`
//! crate.

use bip32::XPrv;
use zeroize::Zeroizing;

use crate::Error;

/// Derive along `path` from the BIP32 root of `seed`.
///
/// Returns the 32-byte private key of the resolved node together with the
/// node, so a caller can keep deriving below it.
///
/// # Errors
///
/// Returns [`Error::InvalidDerivePath`] if the seed cannot form a root node
/// (BIP32 accepts 16, 32 or 64 bytes) or the path cannot be resolved.
pub fn derive_from_seed(seed: &[u8], path: &str) -> Result<(Zeroizing<[u8; 32]>, XPrv), Error> {
    let root = XPrv::new(seed).map_err(|err| {
        tracing::debug!(%err, seed_len = seed.len(), "bip32 root construction failed");
        Error::InvalidDerivePath
    })?;
    derive_from_node(&root, path)
}

/// Derive along `path` starting from an existing node.
///
/// The `m` prefix refers to `node`, not to the tree root.
///
/// # Errors
///
/// Returns [`Error::InvalidDerivePath`] if the path is malformed or a child
/// cannot be derived.
pub fn derive_from_node(node: &XPrv, path: &str) -> Result<(Zeroizing<[u8; 32]>, XPrv), Error> {
    let path: bip32::DerivationPath = path.parse().map_err(|err| {
        tracing::debug!(%err, path, "bip32 path rejected");
        Error::InvalidDerivePath
    })?;

    let resolved = path
        .iter()
        .try_fold(node.clone(), |parent, child| parent.derive_child(child))
        .map_err(|err| {
            tracing::debug!(%err, "bip32 child derivation failed");
            Error::InvalidDerivePath
        })?;

    Ok((Zeroizing::new(resolved.to_bytes()), resolved))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vector1_seed() -> [u8; 16] {
        let mut seed = [0u8; 16];
        hex::decode_to_slice("000102030405060708090a0b0c0d0e0f", &mut seed).unwrap();
        seed
    }

    #[test]
    fn test_bip32_vector1() {
        let (key, node) = derive_from_seed(&vector1_seed(), "m/0'/1").unwrap();
        assert_eq!(
            hex::encode(*key),
            "3c6cb8d0f6a264c91ea8b5030fadaa8e538b020f0a387421a12de9319dc93368"
        );
        assert_eq!(node.attrs().depth, 2);
    }

    #[test]
    fn test_continue_from_node() {
        let (_, parent) = derive_from_seed(&vector1_seed(), "m/0'").unwrap();
        let (from_node, _) = derive_from_node(&parent, "m/1").unwrap();
        let (direct, _) = derive_from_seed(&vector1_seed(), "m/0'/1").unwrap();
        assert_eq!(*from_node, *direct);
    }

    #[test]
    fn test_bad_seed_length() {
        assert_eq!(
            derive_from_seed(&[0u8; 20], "m/0").unwrap_err(),
            Error::InvalidDerivePath
        );
    }

    #[test]
    fn test_malformed_path() {
        let seed = vector1_seed();
        assert_eq!(
            derive_from_seed(&seed, "m/abc").unwrap_err(),
            Error::InvalidDerivePath
        );
        assert_eq!(
            derive_from_seed(&seed, "44'/0").unwrap_err(),
            Error::InvalidDerivePath
        );
    }
}
