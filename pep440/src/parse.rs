//! PEP 440 version string parsing.

use std::str::FromStr;

use crate::error::{ParseError, ParseErrorKind, ParseResult};
use crate::prerelease::{PreRelease, PreReleaseKind};
use crate::version::Version;

/// Pre-release spellings, longest first so prefixes don't shadow them.
const PRE_SPELLINGS: [(&str, PreReleaseKind); 8] = [
    ("preview", PreReleaseKind::ReleaseCandidate),
    ("alpha", PreReleaseKind::Alpha),
    ("beta", PreReleaseKind::Beta),
    ("pre", PreReleaseKind::ReleaseCandidate),
    ("rc", PreReleaseKind::ReleaseCandidate),
    ("a", PreReleaseKind::Alpha),
    ("b", PreReleaseKind::Beta),
    ("c", PreReleaseKind::ReleaseCandidate),
];

const POST_SPELLINGS: [&str; 3] = ["post", "rev", "r"];

type Step<T> = Result<T, ParseErrorKind>;

impl FromStr for Version {
    type Err = ParseError;

    /// Parses a version such as `1.19`, `1.0a1`, `v2.0-post1`, `1!2012.2` or
    /// `1.0+ubuntu.1`, applying PEP 440 normalization.
    ///
    /// Error positions are byte offsets into `input`, leading whitespace
    /// included.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let leading = input.len() - input.trim_start().len();
        let normalized = input.trim().to_ascii_lowercase();
        Parser::new(&normalized)
            .parse()
            .map_err(|kind| ParseError::new(kind.offset_by(leading), input))
    }
}

struct Parser<'a> {
    bytes: &'a [u8],
    text: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    const fn new(text: &'a str) -> Self {
        Self {
            bytes: text.as_bytes(),
            text,
            pos: 0,
        }
    }

    fn parse(mut self) -> Result<Version, ParseErrorKind> {
        if self.bytes.is_empty() {
            return Err(ParseErrorKind::Empty);
        }
        self.eat_literal("v");

        let first = self
            .number()?
            .ok_or(ParseErrorKind::InvalidRelease { position: self.pos })?;
        let (epoch, first) = if self.eat_literal("!") {
            let major = self
                .number()?
                .ok_or(ParseErrorKind::InvalidRelease { position: self.pos })?;
            (first, major)
        } else {
            (0, first)
        };

        let mut release = vec![first];
        while self.peek() == Some(b'.') && self.peek_at(1).is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
            if let Some(component) = self.number()? {
                release.push(component);
            }
        }

        let pre = self.pre_release()?;
        let post = self.post_release()?;
        let dev = self.dev_release()?;

        let mut version = Version::new(release)
            .with_epoch(epoch)
            .with_pre(pre)
            .with_post(post)
            .with_dev(dev);

        if self.eat_literal("+") {
            let local = self.local()?;
            version = version.with_local(local);
        }

        if self.pos != self.bytes.len() {
            return Err(ParseErrorKind::UnexpectedTrailing { position: self.pos });
        }
        Ok(version)
    }

    fn pre_release(&mut self) -> Step<Option<PreRelease>> {
        let start = self.pos;
        self.eat_separator();
        for (spelling, kind) in PRE_SPELLINGS {
            if self.eat_literal(spelling) {
                let number = self.suffix_number()?;
                return Ok(Some(PreRelease::new(kind, number)));
            }
        }
        self.pos = start;
        Ok(None)
    }

    fn post_release(&mut self) -> Step<Option<u64>> {
        let start = self.pos;
        // Implicit form: `1.0-1`.
        if self.eat_literal("-") {
            if let Some(number) = self.number()? {
                return Ok(Some(number));
            }
            self.pos = start;
        }
        self.eat_separator();
        for spelling in POST_SPELLINGS {
            if self.eat_literal(spelling) {
                return self.suffix_number().map(Some);
            }
        }
        self.pos = start;
        Ok(None)
    }

    fn dev_release(&mut self) -> Step<Option<u64>> {
        let start = self.pos;
        self.eat_separator();
        if self.eat_literal("dev") {
            return self.suffix_number().map(Some);
        }
        self.pos = start;
        Ok(None)
    }

    fn local(&mut self) -> Step<&'a str> {
        let start = self.pos;
        let mut segment_len = 0usize;
        while let Some(b) = self.peek() {
            if b.is_ascii_alphanumeric() {
                segment_len += 1;
            } else if matches!(b, b'.' | b'-' | b'_') {
                if segment_len == 0 {
                    return Err(ParseErrorKind::InvalidLocal { position: self.pos });
                }
                segment_len = 0;
            } else {
                break;
            }
            self.pos += 1;
        }
        if segment_len == 0 {
            return Err(ParseErrorKind::InvalidLocal { position: self.pos });
        }
        Ok(&self.text[start..self.pos])
    }

    /// Number following a suffix keyword; a missing number means 0.
    fn suffix_number(&mut self) -> Step<u64> {
        let start = self.pos;
        self.eat_separator();
        if let Some(number) = self.number()? {
            return Ok(number);
        }
        self.pos = start;
        Ok(0)
    }

    fn number(&mut self) -> Step<Option<u64>> {
        let start = self.pos;
        let mut value = 0u64;
        while let Some(b) = self.peek().filter(u8::is_ascii_digit) {
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(u64::from(b - b'0')))
                .ok_or(ParseErrorKind::InvalidNumber { position: start })?;
            self.pos += 1;
        }
        Ok((self.pos > start).then_some(value))
    }

    fn eat_separator(&mut self) -> bool {
        if matches!(self.peek(), Some(b'.' | b'-' | b'_')) {
            self.pos += 1;
            return true;
        }
        false
    }

    fn eat_literal(&mut self, literal: &str) -> bool {
        if self.bytes[self.pos..].starts_with(literal.as_bytes()) {
            self.pos += literal.len();
            return true;
        }
        false
    }

    fn peek(&self) -> Option<u8> {
        self.peek_at(0)
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.bytes.get(self.pos + offset).copied()
    }
}

/// Parses a version string.
///
/// Equivalent to `input.parse::<Version>()`.
pub fn parse(input: &str) -> ParseResult<Version> {
    input.parse()
}
