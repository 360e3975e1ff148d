//! Order-preserving 64-bit encoding of PEP 440 versions.
//!
//! This crate packs a [`pep440::Version`] into a `u64` such that comparing
//! two words as integers gives the same answer as comparing the versions.
//! Words can be stored in any column or key that sorts unsigned integers and
//! range-scanned with [`key_range`].
//!
//! # Design Principles
//!
//! - **Order preservation** - `a < b` iff `encode(a) < encode(b)`.
//! - **Reject, never truncate** - Components that don't fit return an error.
//! - **Total decode** - Every `u64` decodes to some version.
//! - **Fixed layout** - See [`layout`] for field positions and limits.
//!
//! # Example
//!
//! ```
//! use codec::{decode, encode_str};
//!
//! let rc = encode_str("1.0rc1").unwrap();
//! let release = encode_str("1.0").unwrap();
//! assert!(rc < release);
//! assert_eq!(decode(rc).to_string(), "1.0.0.0rc1");
//! ```

mod error;
mod fields;
mod key;
pub mod layout;
mod word;

pub use error::{CodecError, CodecResult};
pub use key::{key_range, VersionKey};
pub use layout::{FieldLayout, LAYOUT_VERSION};
pub use word::{decode, decode_to_string, encode, encode_str};

pub use pep440::{PreRelease, PreReleaseKind, Version};
