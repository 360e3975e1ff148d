//! Error types for version parsing.

use std::fmt;

/// Result type for version parsing.
pub type ParseResult<T> = Result<T, ParseError>;

/// A version string that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    kind: ParseErrorKind,
    input: String,
}

/// What went wrong while parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseErrorKind {
    /// The input was empty or whitespace only.
    Empty,
    /// The release segment is missing or malformed.
    InvalidRelease { position: usize },
    /// A numeric component does not fit in a `u64`.
    InvalidNumber { position: usize },
    /// The local label contains an empty or non-alphanumeric segment.
    InvalidLocal { position: usize },
    /// Input continues after a complete version.
    UnexpectedTrailing { position: usize },
}

impl ParseErrorKind {
    /// Moves the reported position `by` bytes to the right.
    pub(crate) const fn offset_by(self, by: usize) -> Self {
        match self {
            Self::Empty => Self::Empty,
            Self::InvalidRelease { position } => Self::InvalidRelease {
                position: position + by,
            },
            Self::InvalidNumber { position } => Self::InvalidNumber {
                position: position + by,
            },
            Self::InvalidLocal { position } => Self::InvalidLocal {
                position: position + by,
            },
            Self::UnexpectedTrailing { position } => Self::UnexpectedTrailing {
                position: position + by,
            },
        }
    }
}

impl ParseError {
    pub(crate) fn new(kind: ParseErrorKind, input: &str) -> Self {
        Self {
            kind,
            input: input.to_owned(),
        }
    }

    /// Returns the kind of failure.
    #[must_use]
    pub const fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    /// Returns the rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid version `{}`: {}", self.input, self.kind)
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty version string"),
            Self::InvalidRelease { position } => {
                write!(f, "expected release number at offset {position}")
            }
            Self::InvalidNumber { position } => {
                write!(f, "number at offset {position} is too large")
            }
            Self::InvalidLocal { position } => {
                write!(f, "malformed local label at offset {position}")
            }
            Self::UnexpectedTrailing { position } => {
                write!(f, "unexpected trailing input at offset {position}")
            }
        }
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_input_and_offset() {
        let err = ParseError::new(ParseErrorKind::UnexpectedTrailing { position: 3 }, "1.0x");
        let msg = err.to_string();
        assert!(msg.contains("1.0x"));
        assert!(msg.contains("offset 3"));
    }

    #[test]
    fn accessors() {
        let err = ParseError::new(ParseErrorKind::Empty, "");
        assert_eq!(err.kind(), ParseErrorKind::Empty);
        assert_eq!(err.input(), "");
    }
}
