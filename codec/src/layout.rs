//! Bit layout of an encoded version word.
//!
//! Fields are listed most significant first. Comparing two words as `u64`
//! compares epoch, then the release components, then the suffix fields.
//!
//! ```text
//!  63   60 59        48 47    40 39            24 23    16 15    8 7  4 3  0
//! +-------+------------+--------+----------------+--------+-------+----+----+
//! | epoch |   major    | minor  |     patch      | extra  |  pre  |post|dev |
//! +-------+------------+--------+----------------+--------+-------+----+----+
//! ```

/// Revision of the word layout produced by this crate.
///
/// Revision 2 stores a post-release with a dev segment and no pre-release
/// using the "no pre-release" pre byte. Revision 1 words used the dev-only
/// pre byte for that case; [`decode`](crate::decode) still accepts them.
pub const LAYOUT_VERSION: u32 = 2;

/// Position of one field inside the word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLayout {
    pub name: &'static str,
    /// Width in bits.
    pub width: u8,
    /// Bit index of the field's least significant bit.
    pub shift: u8,
}

impl FieldLayout {
    const fn new(name: &'static str, width: u8, shift: u8) -> Self {
        Self { name, width, shift }
    }

    /// Largest raw value the field can hold.
    #[must_use]
    pub const fn max(&self) -> u64 {
        bitstream::low_mask(self.width)
    }

    /// Mask selecting the field in place.
    #[must_use]
    pub const fn mask(&self) -> u64 {
        self.max() << self.shift
    }

    /// Reads this field out of `word`.
    #[must_use]
    pub const fn extract(&self, word: u64) -> u64 {
        bitstream::extract(word, self.shift, self.width)
    }
}

pub const EPOCH: FieldLayout = FieldLayout::new("epoch", 4, 60);
pub const MAJOR: FieldLayout = FieldLayout::new("major", 12, 48);
pub const MINOR: FieldLayout = FieldLayout::new("minor", 8, 40);
pub const PATCH: FieldLayout = FieldLayout::new("patch", 16, 24);
pub const EXTRA: FieldLayout = FieldLayout::new("extra", 8, 16);
/// Two letter bits followed by six number bits.
pub const PRE: FieldLayout = FieldLayout::new("pre", 8, 8);
/// One presence flag followed by three number bits.
pub const POST: FieldLayout = FieldLayout::new("post", 4, 4);
pub const DEV: FieldLayout = FieldLayout::new("dev", 4, 0);

/// All fields in write order.
pub const FIELDS: [FieldLayout; 8] = [EPOCH, MAJOR, MINOR, PATCH, EXTRA, PRE, POST, DEV];

/// Number of release components the word stores.
pub const RELEASE_COMPONENTS: usize = 4;

pub const MAX_EPOCH: u64 = EPOCH.max();
pub const MAX_MAJOR: u64 = MAJOR.max();
pub const MAX_MINOR: u64 = MINOR.max();
pub const MAX_PATCH: u64 = PATCH.max();
pub const MAX_EXTRA: u64 = EXTRA.max();
/// `0b11_1111` is left unused so `rc63` can never collide with [`PRE_NONE`].
pub const MAX_PRE_NUMBER: u64 = 62;
pub const MAX_POST: u64 = 7;
/// Largest dev number for a dev-only version.
pub const MAX_DEV: u64 = DEV.max();
/// Largest dev number next to a pre or post segment, where [`DEV_NONE`] means "no dev".
pub const MAX_DEV_QUALIFIED: u64 = DEV_NONE - 1;

/// Pre byte of a version with a dev segment and no pre-release.
pub const PRE_DEV_ONLY: u64 = 0x00;
/// Pre byte of a version without a pre-release.
pub const PRE_NONE: u64 = 0xFF;
/// Dev nibble meaning "not a dev release".
pub const DEV_NONE: u64 = 0xF;
/// Post nibble bit marking a post-release.
pub const POST_FLAG: u64 = 0b1000;

/// Width of the letter code at the top of the pre byte.
pub const PRE_LETTER_BITS: u8 = 2;
/// Width of the pre-release number under the letter code.
pub const PRE_NUMBER_BITS: u8 = PRE.width - PRE_LETTER_BITS;

/// Letter code for alpha. Code `0b00` is reserved for [`PRE_DEV_ONLY`].
pub const LETTER_ALPHA: u64 = 0b01;
pub const LETTER_BETA: u64 = 0b10;
pub const LETTER_RC: u64 = 0b11;
