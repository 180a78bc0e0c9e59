//! Wallet core for the solkey toolkit.
//!
//! Holds a BIP39 mnemonic and the 64-byte seed it expands to. Chain
//! specific derivation lives in `solkey-svm`, which consumes the seed
//! exposed by [`Wallet::seed`].
//!
//! # Features
//!
//! - `std` (default): Enable standard library support
//! - `alloc`: Enable heap allocation without full std
//! - `rand`: Enable random mnemonic generation
//!
//! # Example
//!
//! ```
//! use solkey::Wallet;
//!
//! let wallet = Wallet::from_mnemonic(
//!     "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about",
//!     None,
//! )?;
//! assert_eq!(wallet.seed().len(), 64);
//! # Ok::<(), solkey::Error>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

#[cfg(feature = "alloc")]
extern crate alloc;

mod error;
#[cfg(feature = "alloc")]
mod wallet;

pub use error::{Error, Result};
#[cfg(feature = "alloc")]
pub use wallet::Wallet;
