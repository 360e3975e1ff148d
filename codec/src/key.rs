//! Typed wrapper around an encoded word, for use as a sort or index key.

use std::fmt;
use std::ops::RangeInclusive;

use pep440::Version;

use crate::error::{CodecError, CodecResult};
use crate::word::{decode, encode};

/// An encoded version.
///
/// Keys built by [`VersionKey::encode`] order, compare and hash exactly like
/// the versions they encode, so a `BTreeMap<VersionKey, _>` iterates in
/// version order. Keys wrapped with [`VersionKey::from_raw`] compare as plain
/// words: a word `encode` never produces can decode to the same version as a
/// different key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct VersionKey(u64);

impl VersionKey {
    /// Smallest key: `0.dev0`.
    pub const MIN: Self = Self(0);
    /// Largest key.
    pub const MAX: Self = Self(u64::MAX);

    /// Encodes `version`.
    ///
    /// # Errors
    ///
    /// Same as [`encode`].
    pub fn encode(version: &Version) -> CodecResult<Self> {
        encode(version).map(Self)
    }

    /// Wraps a stored word without checking it. Every word decodes.
    #[must_use]
    pub const fn from_raw(word: u64) -> Self {
        Self(word)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn to_version(self) -> Version {
        decode(self.0)
    }
}

impl TryFrom<&Version> for VersionKey {
    type Error = CodecError;

    fn try_from(version: &Version) -> Result<Self, Self::Error> {
        Self::encode(version)
    }
}

impl From<u64> for VersionKey {
    fn from(word: u64) -> Self {
        Self(word)
    }
}

impl From<VersionKey> for u64 {
    fn from(key: VersionKey) -> Self {
        key.0
    }
}

impl fmt::Display for VersionKey {
    /// Shows the decoded version, not the raw word.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_version(), f)
    }
}

impl fmt::LowerHex for VersionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::UpperHex for VersionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

/// Returns the inclusive range of words between two versions.
///
/// A word produced by [`encode`] lies in the range exactly when its version
/// lies between `lower` and `upper`, so the range can drive an index scan.
///
/// # Errors
///
/// Returns the encoding error of either bound, or
/// [`CodecError::InvalidRange`] if `lower` sorts above `upper`.
pub fn key_range(lower: &Version, upper: &Version) -> CodecResult<RangeInclusive<u64>> {
    let lower = encode(lower)?;
    let upper = encode(upper)?;
    if lower > upper {
        return Err(CodecError::InvalidRange { lower, upper });
    }
    Ok(lower..=upper)
}
