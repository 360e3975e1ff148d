//! Error types for codec operations.

use std::fmt;

use pep440::ParseError;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur while encoding a version.
///
/// Every field that can overflow has its own variant so callers can tell a
/// truncatable component apart from an outright rejection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The version carries a local label, which has no place in the word.
    LocalSegmentUnsupported { local: String },

    /// Epoch does not fit in its field.
    EpochOverflow { value: u64, max: u64 },

    /// A release component after the fourth is non-zero.
    ReleaseSegmentTooLong {
        /// Zero-based position of the offending component.
        index: usize,
        value: u64,
    },

    /// First release component does not fit in its field.
    MajorOverflow { value: u64, max: u64 },

    /// Second release component does not fit in its field.
    MinorOverflow { value: u64, max: u64 },

    /// Third release component does not fit in its field.
    PatchOverflow { value: u64, max: u64 },

    /// Fourth release component does not fit in its field.
    ExtraReleaseOverflow { value: u64, max: u64 },

    /// Post-release number does not fit in its field.
    PostOverflow { value: u64, max: u64 },

    /// Pre-release number does not fit in its field.
    PreOverflow { value: u64, max: u64 },

    /// Dev-release number does not fit in its field.
    ///
    /// `max` is lower when the dev segment shares the word with a pre or post
    /// segment, since the top value is the "not a dev release" sentinel there.
    DevOverflow { value: u64, max: u64 },

    /// Version text could not be parsed.
    Parse(ParseError),

    /// Bitstream error while packing.
    Bitstream(bitstream::BitError),

    /// Lower bound of a key range sorts above its upper bound.
    InvalidRange { lower: u64, upper: u64 },
}

impl CodecError {
    /// Name of the layout field that overflowed, if this is an overflow error.
    #[must_use]
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::EpochOverflow { .. } => Some("epoch"),
            Self::ReleaseSegmentTooLong { .. } => Some("release"),
            Self::MajorOverflow { .. } => Some("major"),
            Self::MinorOverflow { .. } => Some("minor"),
            Self::PatchOverflow { .. } => Some("patch"),
            Self::ExtraReleaseOverflow { .. } => Some("extra"),
            Self::PostOverflow { .. } => Some("post"),
            Self::PreOverflow { .. } => Some("pre"),
            Self::DevOverflow { .. } => Some("dev"),
            Self::LocalSegmentUnsupported { .. }
            | Self::Parse(_)
            | Self::Bitstream(_)
            | Self::InvalidRange { .. } => None,
        }
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LocalSegmentUnsupported { local } => {
                write!(f, "cannot encode local version label `+{local}`")
            }
            Self::EpochOverflow { value, max } => {
                write!(f, "epoch {value} larger than {max}")
            }
            Self::ReleaseSegmentTooLong { index, value } => {
                write!(
                    f,
                    "release segment has more than 4 components: component {index} is {value}"
                )
            }
            Self::MajorOverflow { value, max } => {
                write!(f, "major release number {value} larger than {max}")
            }
            Self::MinorOverflow { value, max } => {
                write!(f, "minor release number {value} larger than {max}")
            }
            Self::PatchOverflow { value, max } => {
                write!(f, "patch release number {value} larger than {max}")
            }
            Self::ExtraReleaseOverflow { value, max } => {
                write!(f, "fourth release number {value} larger than {max}")
            }
            Self::PostOverflow { value, max } => {
                write!(f, "post-release number {value} larger than {max}")
            }
            Self::PreOverflow { value, max } => {
                write!(f, "pre-release number {value} larger than {max}")
            }
            Self::DevOverflow { value, max } => {
                write!(f, "dev-release number {value} larger than {max}")
            }
            Self::Parse(e) => write!(f, "parse error: {e}"),
            Self::Bitstream(e) => write!(f, "bitstream error: {e}"),
            Self::InvalidRange { lower, upper } => {
                write!(
                    f,
                    "invalid key range: lower 0x{lower:016X} above upper 0x{upper:016X}"
                )
            }
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Bitstream(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ParseError> for CodecError {
    fn from(err: ParseError) -> Self {
        Self::Parse(err)
    }
}

impl From<bitstream::BitError> for CodecError {
    fn from(err: bitstream::BitError) -> Self {
        Self::Bitstream(err)
    }
}
