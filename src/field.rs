//! Bit-field packing and unpacking inside a byte.
//!
//! A field is addressed by the position of its most significant bit and its
//! length, matching the usual datasheet notation `x[msb:msb-len+1]`:
//!
//! ```text
//!   bit:   7 6 5 4 3 2 1 0
//!              [msb=5 len=3]
//!              ^^^^^         -> mask 0b0011_1000, shift 3
//! ```

use crate::error::BitError;

/// A validated bit-field descriptor.
///
/// Holds the geometry of an `len`-bit window whose most significant bit is at
/// `msb`. Construction through [`BitField::new`] guarantees the window lies
/// entirely inside a byte, so [`insert`](BitField::insert) and
/// [`extract`](BitField::extract) are infallible.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BitField {
    msb: u8,
    len: u8,
}

impl BitField {
    /// Creates a field descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`BitError::InvalidField`] if:
    /// - `msb >= 8`
    /// - `len == 0`
    /// - `len > msb + 1` (the field would extend below bit 0)
    pub fn new(msb: u8, len: u8) -> Result<Self, BitError> {
        let field = Self { msb, len };
        field.validate()?;

        Ok(field)
    }

    pub(crate) fn validate(&self) -> Result<(), BitError> {
        if self.msb >= u8::BITS as u8 || self.len == 0 || self.len > self.msb + 1 {
            log::debug!("rejected bit field msb={} len={}", self.msb, self.len);

            return Err(BitError::InvalidField {
                msb: self.msb,
                len: self.len,
            });
        }

        Ok(())
    }

    #[inline]
    pub fn msb(&self) -> u8 {
        self.msb
    }

    /// Number of bits in the field.
    #[inline]
    pub fn width(&self) -> u8 {
        self.len
    }

    /// Position of the field's least significant bit.
    #[inline]
    pub fn shift(&self) -> u8 {
        self.msb + 1 - self.len
    }

    /// Right-aligned mask covering `len` bits.
    #[inline]
    fn value_mask(&self) -> u8 {
        u8::MAX >> (u8::BITS as u8 - self.len)
    }

    /// Mask selecting the field at its position in the byte.
    #[inline]
    pub fn mask(&self) -> u8 {
        self.value_mask() << self.shift()
    }

    /// Overwrites the field in `x` with the low `len` bits of `y`.
    ///
    /// Bits of `x` outside the field and bits of `y` above `len` are ignored.
    #[inline]
    pub fn insert(&self, x: u8, y: u8) -> u8 {
        (x & !self.mask()) | ((y & self.value_mask()) << self.shift())
    }

    /// Reads the field out of `x`, right-aligned.
    #[inline]
    pub fn extract(&self, x: u8) -> u8 {
        (x >> self.shift()) & self.value_mask()
    }
}

/// Overwrites the `n`-bit field of `x` whose most significant bit is at `p`
/// with the low `n` bits of `y`.
///
/// `set_bits(0b1010_1010, 4, 3, 0b101) == 0b1011_0110`.
///
/// # Errors
///
/// [`BitError::InvalidField`] when the field does not fit in a byte.
pub fn set_bits(x: u8, p: u8, n: u8, y: u8) -> Result<u8, BitError> {
    Ok(BitField::new(p, n)?.insert(x, y))
}

/// Extracts the `n`-bit field of `x` whose most significant bit is at `p`,
/// right-aligned.
///
/// # Errors
///
/// [`BitError::InvalidField`] when the field does not fit in a byte.
pub fn get_bits(x: u8, p: u8, n: u8) -> Result<u8, BitError> {
    Ok(BitField::new(p, n)?.extract(x))
}
