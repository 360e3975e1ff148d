//! Pre-release segment types.

use std::fmt;

/// The letter of a pre-release segment.
///
/// Variants are declared in release-cycle order, so the derived `Ord` is the
/// PEP 440 order `a < b < rc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PreReleaseKind {
    /// `a`, also spelled `alpha`.
    Alpha,
    /// `b`, also spelled `beta`.
    Beta,
    /// `rc`, also spelled `c`, `pre` or `preview`.
    ReleaseCandidate,
}

impl PreReleaseKind {
    /// All kinds in ascending order.
    pub const ALL: [Self; 3] = [Self::Alpha, Self::Beta, Self::ReleaseCandidate];

    /// Returns the canonical spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Alpha => "a",
            Self::Beta => "b",
            Self::ReleaseCandidate => "rc",
        }
    }
}

impl fmt::Display for PreReleaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A pre-release segment such as `a1` or `rc2`.
///
/// Ordered by kind, then number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PreRelease {
    pub kind: PreReleaseKind,
    pub number: u64,
}

impl PreRelease {
    #[must_use]
    pub const fn new(kind: PreReleaseKind, number: u64) -> Self {
        Self { kind, number }
    }

    #[must_use]
    pub const fn alpha(number: u64) -> Self {
        Self::new(PreReleaseKind::Alpha, number)
    }

    #[must_use]
    pub const fn beta(number: u64) -> Self {
        Self::new(PreReleaseKind::Beta, number)
    }

    #[must_use]
    pub const fn rc(number: u64) -> Self {
        Self::new(PreReleaseKind::ReleaseCandidate, number)
    }
}

impl fmt::Display for PreRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind, self.number)
    }
}
