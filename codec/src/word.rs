//! Encoding versions to words and decoding them back.

use pep440::Version;
use tracing::{debug, trace};

use crate::error::CodecResult;
use crate::fields::RawFields;

/// Encodes `version` into a word whose integer order matches version order.
///
/// For any two encodable versions `a` and `b`,
/// `a.cmp(&b) == encode(&a)?.cmp(&encode(&b)?)`.
///
/// # Errors
///
/// Returns [`CodecError::LocalSegmentUnsupported`](crate::CodecError::LocalSegmentUnsupported)
/// for versions with a local label, and an overflow error for the first
/// component that does not fit its field.
pub fn encode(version: &Version) -> CodecResult<u64> {
    let word = RawFields::pack(version)
        .and_then(RawFields::write)
        .map_err(|err| {
            debug!(%version, field = err.field(), error = %err, "version rejected by encoder");
            err
        })?;
    trace!(%version, word, "encoded version");
    Ok(word)
}

/// Decodes a word into a version.
///
/// Every word decodes. For words produced by [`encode`],
/// `decode(encode(&v)?) == v`; the release always comes back with four
/// components, which compares equal to the shorter original.
#[must_use]
pub fn decode(word: u64) -> Version {
    let raw = RawFields::read(word);
    if raw.is_legacy_post_dev() {
        debug!(word, "decoding post-release dev word from layout revision 1");
    }
    raw.unpack()
}

/// Parses `text` as a version and encodes it.
///
/// # Errors
///
/// Returns [`CodecError::Parse`](crate::CodecError::Parse) if `text` is not a
/// valid version, otherwise the errors of [`encode`].
pub fn encode_str(text: &str) -> CodecResult<u64> {
    let version: Version = text.parse()?;
    encode(&version)
}

/// Decodes a word and renders it in canonical form.
#[must_use]
pub fn decode_to_string(word: u64) -> String {
    decode(word).to_string()
}
