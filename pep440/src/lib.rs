//! PEP 440 version model for the verint codec.
//!
//! This crate defines the structured version identifier the codec encodes:
//! - [`Version`] with epoch, release, pre, post, dev and local segments
//! - The PEP 440 total order (`1.0.dev0 < 1.0a1 < 1.0 < 1.0.post1`)
//! - A normalizing parser (`"1.0-Alpha.1".parse::<Version>()`)
//! - Canonical rendering via `Display`
//!
//! # Design Principles
//!
//! - **Semantic equality** - `1.0 == 1.0.0` and `0!1.0 == 1.0`.
//! - **Closed pre-release kinds** - `a`, `b` and `rc` are an enum, not strings.
//! - **No layout knowledge** - Bit widths and overflow rules belong to the codec.
//!
//! # Example
//!
//! ```
//! use pep440::{PreRelease, Version};
//!
//! let rc: Version = "1.0rc1".parse().unwrap();
//! assert_eq!(rc.pre(), Some(PreRelease::rc(1)));
//! assert!(rc < "1.0".parse().unwrap());
//! ```

mod error;
mod parse;
mod prerelease;
mod version;

pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use parse::parse;
pub use prerelease::{PreRelease, PreReleaseKind};
pub use version::Version;
