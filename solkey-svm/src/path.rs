//! Derivation path parsing and path-family classification.
//!
//! Paths look like `m/44'/501'/0'/0'`. Parsing is lenient: a segment that
//! is not a valid number becomes index 0 instead of failing, which keeps
//! paths produced by older wallets derivable.

use alloc::vec::Vec;
use core::convert::Infallible;
use core::fmt;
use core::str::FromStr;

/// Offset added to a segment index marked hardened with `'`.
pub const HARDENED_OFFSET: u32 = 0x8000_0000;

/// One `/`-separated component of a derivation path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Segment {
    index: u32,
    hardened: bool,
}

impl Segment {
    /// Create a segment from its written index and hardened mark.
    #[must_use]
    pub const fn new(index: u32, hardened: bool) -> Self {
        Self { index, hardened }
    }

    /// Create a hardened segment.
    #[must_use]
    pub const fn hardened(index: u32) -> Self {
        Self::new(index, true)
    }

    /// Create a normal segment.
    #[must_use]
    pub const fn normal(index: u32) -> Self {
        Self::new(index, false)
    }

    /// The index as written, without the hardened offset.
    #[must_use]
    pub const fn index(&self) -> u32 {
        self.index
    }

    /// Whether the segment carried the `'` mark.
    #[must_use]
    pub const fn is_hardened(&self) -> bool {
        self.hardened
    }

    /// The 32-bit value fed into derivation, hardened offset applied.
    #[must_use]
    pub const fn to_u32(&self) -> u32 {
        if self.hardened {
            self.index | HARDENED_OFFSET
        } else {
            self.index
        }
    }

    fn parse_lenient(component: &str) -> Self {
        if let Some(digits) = component.strip_suffix('\'') {
            match digits.parse::<u32>() {
                Ok(index) if index < HARDENED_OFFSET => Self::hardened(index),
                _ => {
                    tracing::warn!(segment = component, "unparsable hardened segment, using 0'");
                    Self::hardened(0)
                }
            }
        } else {
            component.parse::<u32>().map_or_else(
                |_| {
                    tracing::warn!(segment = component, "unparsable path segment, using 0");
                    Self::normal(0)
                },
                Self::normal,
            )
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hardened {
            write!(f, "{}'", self.index)
        } else {
            write!(f, "{}", self.index)
        }
    }
}

/// A parsed derivation path.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct DerivationPath {
    segments: Vec<Segment>,
}

impl DerivationPath {
    /// The empty path `m`.
    #[must_use]
    pub const fn master() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Build a path from segments.
    #[must_use]
    pub const fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// Parse a path string. Never fails.
    ///
    /// Components are split on `/` and every literal `m` is dropped. Any
    /// other component that does not parse, including an empty one,
    /// becomes index 0 and still takes part in derivation.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        let segments = path
            .split('/')
            .filter(|component| *component != "m")
            .map(Segment::parse_lenient)
            .collect();
        Self { segments }
    }

    /// The segments in path order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The derivation values, hardened offset applied.
    pub fn values(&self) -> impl Iterator<Item = u32> + '_ {
        self.segments.iter().map(Segment::to_u32)
    }

    /// Number of segments.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Whether this is the master path `m`.
    #[must_use]
    pub fn is_master(&self) -> bool {
        self.segments.is_empty()
    }

    /// Whether every segment is hardened.
    #[must_use]
    pub fn is_fully_hardened(&self) -> bool {
        self.segments.iter().all(Segment::is_hardened)
    }

    /// The derivation family this path belongs to.
    #[must_use]
    pub fn family(&self) -> PathFamily {
        if self.is_master() {
            PathFamily::Raw
        } else if self.is_fully_hardened() {
            PathFamily::Ed25519
        } else {
            PathFamily::Bip32
        }
    }
}

impl fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m")?;
        for segment in &self.segments {
            write!(f, "/{segment}")?;
        }
        Ok(())
    }
}

impl FromStr for DerivationPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

/// Parse a path string into derivation values, hardened offset applied.
///
/// `m/1'/2` yields `[0x8000_0001, 0x0000_0002]`.
#[must_use]
pub fn parse_path(path: &str) -> Vec<u32> {
    DerivationPath::parse(path).values().collect()
}

/// How a key pair is derived for a given path.
///
/// A single unmarked segment sends the whole path to [`PathFamily::Bip32`].
/// SLIP-0010 derivation over unmarked segments (hashed with their plain
/// index) is therefore only reachable through
/// [`DerivedKey::derive_path`](crate::slip10::DerivedKey::derive_path), not
/// through [`KeyPair::derive`](crate::KeyPair::derive) or
/// [`KeyPair::from_mnemonic`](crate::KeyPair::from_mnemonic).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PathFamily {
    /// Every segment hardened: SLIP-0010 Ed25519 derivation.
    Ed25519,
    /// At least one normal segment: BIP32 secp256k1 tree, private key
    /// reused as the Ed25519 seed.
    Bip32,
    /// Bare `m`: the first 32 bytes of the wallet seed are the key seed.
    Raw,
}

impl PathFamily {
    /// Classify a path string.
    #[must_use]
    pub fn classify(path: &str) -> Self {
        DerivationPath::parse(path).family()
    }
}
