//! Solana key derivation for the solkey toolkit.
//!
//! Turns a [`solkey::Wallet`] seed into Ed25519 key pairs along SLIP-0010
//! or BIP32 paths, and derives addresses, program derived addresses and
//! associated token accounts from the resulting public keys.
//!
//! Paths where every segment is hardened go through SLIP-0010; paths with
//! a normal segment go through a BIP32 tree whose private key is reused as
//! the Ed25519 seed; the bare path `m` uses the wallet seed directly.
//!
//! # Features
//!
//! - `std` (default): Enable standard library support
//! - `alloc`: Enable heap allocation without full std
//! - `rand`: Enable [`KeyPair::random`]
//!
//! # Example
//!
//! ```
//! use solkey::Wallet;
//! use solkey_svm::{Deriver, PublicKey};
//!
//! let wallet = Wallet::from_mnemonic(
//!     "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about",
//!     None,
//! )?;
//! let keypair = Deriver::new(&wallet).derive(0)?;
//! assert_eq!(keypair.address(), "HAgk14JpMQLgt6rVgv7cBQFJWFto5Dqxi472uT3DKpqk");
//!
//! let mint: PublicKey = "EPjFWdd5AufqSSqeM2qMJdnFTypt6SuxbmGrRmF4fdu8".parse()?;
//! let ata = PublicKey::new_associated_token(&keypair.public_key(), &mint);
//! assert!(ata.is_some());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "alloc")]
mod derivation_style;
#[cfg(feature = "alloc")]
mod deriver;
mod error;
#[cfg(feature = "alloc")]
mod keypair;
#[cfg(feature = "alloc")]
pub mod path;
#[cfg(feature = "alloc")]
mod pubkey;
pub mod slip10;
#[cfg(feature = "alloc")]
pub mod tree;

#[cfg(feature = "alloc")]
pub use derivation_style::{DerivationStyle, ParseDerivationStyleError};
#[cfg(feature = "alloc")]
pub use deriver::Deriver;
pub use error::Error;
#[cfg(feature = "alloc")]
pub use keypair::{KeyPair, SECRET_KEY_LENGTH};
#[cfg(feature = "alloc")]
pub use path::{DerivationPath, PathFamily, Segment, parse_path};
#[cfg(feature = "alloc")]
pub use pubkey::{MAX_SEED_LEN, MAX_SEEDS, PublicKey};
pub use slip10::DerivedKey;

/// A convenient Result type alias for solkey-svm operations.
pub type Result<T> = core::result::Result<T, Error>;
