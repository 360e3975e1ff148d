//! Bit-level writer that packs fields into a single 64-bit word.

use crate::error::{BitError, BitResult};
use crate::WORD_BITS;

/// Packs fixed-width fields into a `u64`, most significant bit first.
///
/// The first field written lands in the highest bits of the word, so the
/// integer order of the finished word is the lexicographic order of the
/// fields in write order. Call [`finish`](Self::finish) to get the word.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BitWriter {
    /// The word being assembled.
    word: u64,
    /// Number of bits written so far (0-64).
    bits_written: u8,
}

impl BitWriter {
    /// Creates a new empty `BitWriter`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            word: 0,
            bits_written: 0,
        }
    }

    /// Returns the number of bits written so far.
    #[must_use]
    pub const fn bits_written(&self) -> u8 {
        self.bits_written
    }

    /// Returns the number of bits that can still be written.
    #[must_use]
    pub const fn bits_remaining(&self) -> u8 {
        WORD_BITS - self.bits_written
    }

    /// Returns `true` once all 64 bits have been written.
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.bits_written == WORD_BITS
    }

    /// Writes a single bit.
    pub fn write_bool(&mut self, value: bool) -> BitResult<()> {
        self.write_bits(u64::from(value), 1)
    }

    /// Writes the low `bits` bits of `value`.
    ///
    /// # Errors
    ///
    /// Returns [`BitError::InvalidBitCount`] if `bits > 64`.
    /// Returns [`BitError::ValueOutOfRange`] if `value` doesn't fit in `bits`.
    /// Returns [`BitError::WordOverflow`] if the word has fewer than `bits` bits left.
    pub fn write_bits(&mut self, value: u64, bits: u8) -> BitResult<()> {
        if bits > WORD_BITS {
            return Err(BitError::InvalidBitCount {
                bits,
                max_bits: WORD_BITS,
            });
        }
        if bits == 0 {
            return Ok(());
        }
        if bits < WORD_BITS && value >> bits != 0 {
            return Err(BitError::ValueOutOfRange { value, bits });
        }
        let remaining = self.bits_remaining();
        if bits > remaining {
            return Err(BitError::WordOverflow {
                attempted: self.bits_written.saturating_add(bits),
                capacity: WORD_BITS,
            });
        }

        self.word |= value << (remaining - bits);
        self.bits_written += bits;
        Ok(())
    }

    /// Finishes writing and returns the packed word.
    ///
    /// Unwritten low bits are zero.
    #[must_use]
    pub const fn finish(self) -> u64 {
        self.word
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_writer() {
        let writer = BitWriter::new();
        assert_eq!(writer.bits_written(), 0);
        assert_eq!(writer.bits_remaining(), 64);
        assert_eq!(writer.finish(), 0);
    }

    #[test]
    fn write_single_bit_true() {
        let mut writer = BitWriter::new();
        writer.write_bool(true).unwrap();
        assert_eq!(writer.bits_written(), 1);
        assert_eq!(writer.finish(), 1 << 63);
    }

    #[test]
    fn write_single_bit_false() {
        let mut writer = BitWriter::new();
        writer.write_bool(false).unwrap();
        assert_eq!(writer.finish(), 0);
    }

    #[test]
    fn first_field_lands_in_high_bits() {
        let mut writer = BitWriter::new();
        writer.write_bits(0b1010, 4).unwrap();
        assert_eq!(writer.finish(), 0b1010 << 60);
    }

    #[test]
    fn consecutive_fields_are_adjacent() {
        let mut writer = BitWriter::new();
        writer.write_bits(0xA, 4).unwrap();
        writer.write_bits(0xBCD, 12).unwrap();
        writer.write_bits(0xEF, 8).unwrap();
        assert_eq!(writer.bits_written(), 24);
        assert_eq!(writer.finish(), 0xABCD_EF00_0000_0000);
    }

    #[test]
    fn write_bits_zero() {
        let mut writer = BitWriter::new();
        writer.write_bits(0xFF, 0).unwrap();
        assert_eq!(writer.bits_written(), 0);
        assert_eq!(writer.finish(), 0);
    }

    #[test]
    fn write_bits_invalid_count() {
        let mut writer = BitWriter::new();
        let result = writer.write_bits(0, 65);
        assert!(matches!(
            result,
            Err(BitError::InvalidBitCount {
                bits: 65,
                max_bits: 64
            })
        ));
    }

    #[test]
    fn write_bits_value_out_of_range() {
        let mut writer = BitWriter::new();
        let result = writer.write_bits(256, 8);
        assert!(matches!(
            result,
            Err(BitError::ValueOutOfRange {
                value: 256,
                bits: 8
            })
        ));
        // A rejected write leaves the writer untouched.
        assert_eq!(writer.bits_written(), 0);
    }

    #[test]
    fn write_bits_max_value_fits() {
        let mut writer = BitWriter::new();
        writer.write_bits(255, 8).unwrap();
        assert_eq!(writer.finish(), 0xFF00_0000_0000_0000);
    }

    #[test]
    fn write_bits_64_bits() {
        let mut writer = BitWriter::new();
        writer.write_bits(u64::MAX, 64).unwrap();
        assert!(writer.is_full());
        assert_eq!(writer.finish(), u64::MAX);
    }

    #[test]
    fn write_past_capacity_fails() {
        let mut writer = BitWriter::new();
        writer.write_bits(0, 60).unwrap();
        let result = writer.write_bits(0b1_1111, 5);
        assert_eq!(
            result,
            Err(BitError::WordOverflow {
                attempted: 65,
                capacity: 64
            })
        );
        writer.write_bits(0b1111, 4).unwrap();
        assert!(writer.is_full());
        assert!(writer.write_bool(true).is_err());
    }

    #[test]
    fn writer_default() {
        let writer = BitWriter::default();
        assert_eq!(writer, BitWriter::new());
    }
}
