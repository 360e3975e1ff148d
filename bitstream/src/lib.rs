//! Fixed-width bit packing for the verint codec.
//!
//! This crate provides [`BitWriter`] for packing a sequence of fixed-width
//! unsigned fields into a single `u64`, and [`extract`] for reading a field
//! back out of a finished word.
//! Fields are laid out most significant bit first, so comparing two finished
//! words as integers compares their fields in write order.
//!
//! # Design Principles
//!
//! - **No unsafe code** - Safety is paramount.
//! - **Bounded operations** - All writes are bounds-checked; reads are masked.
//! - **No domain knowledge** - This crate knows nothing about versions.
//! - **Explicit errors** - All failures return structured errors, never panic.
//!
//! # Example
//!
//! ```
//! use bitstream::{extract, BitWriter};
//!
//! let mut writer = BitWriter::new();
//! writer.write_bool(true).unwrap();
//! writer.write_bits(42, 7).unwrap();
//!
//! let word = writer.finish();
//!
//! assert_eq!(extract(word, 63, 1), 1);
//! assert_eq!(extract(word, 56, 7), 42);
//! ```

mod error;
mod writer;

pub use error::{BitError, BitResult};
pub use writer::BitWriter;

/// Number of bits in a packed word.
pub const WORD_BITS: u8 = 64;

/// Returns a mask with the low `bits` bits set.
///
/// `bits` values of 64 and above yield `u64::MAX`.
#[must_use]
pub const fn low_mask(bits: u8) -> u64 {
    if bits >= WORD_BITS {
        u64::MAX
    } else {
        (1u64 << bits) - 1
    }
}

/// Reads the `width`-bit field whose least significant bit sits at `shift`.
///
/// Bits outside the field are ignored, so every word yields a value.
#[must_use]
pub const fn extract(word: u64, shift: u8, width: u8) -> u64 {
    if shift >= WORD_BITS {
        return 0;
    }
    (word >> shift) & low_mask(width)
}
