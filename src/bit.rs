//! Single-bit operations.
//!
//! Positions are 0-indexed from the least significant bit. Every function
//! taking a position validates it against the operand width and returns
//! [`BitError::PositionOutOfRange`] rather than shifting out of range.

use crate::error::{BitError, check_position};

/// Sets bit `p` of `x` to 1.
#[inline]
pub fn set_bit(x: u8, p: u8) -> Result<u8, BitError> {
    check_position(p, u8::BITS as u8)?;

    Ok(x | (1 << p))
}

/// Clears bit `p` of `x` to 0.
#[inline]
pub fn clear_bit(x: u8, p: u8) -> Result<u8, BitError> {
    check_position(p, u8::BITS as u8)?;

    Ok(x & !(1 << p))
}

/// Flips bit `p` of `x`.
#[inline]
pub fn toggle_bit(x: u8, p: u8) -> Result<u8, BitError> {
    check_position(p, u8::BITS as u8)?;

    Ok(x ^ (1 << p))
}

/// Returns 1 if bit `p` of `x` is set, 0 otherwise.
#[inline]
pub fn get_bit_status(x: u8, p: u8) -> Result<u8, BitError> {
    check_position(p, u8::BITS as u8)?;

    Ok((x >> p) & 1)
}

#[inline]
pub fn is_even(x: u8) -> bool {
    x & 1 == 0
}

/// Tests bit `n` of a 32-bit word.
///
/// # Errors
///
/// [`BitError::PositionOutOfRange`] with `width: 32` when `n >= 32`.
#[inline]
pub fn is_nth_bit_on(x: u32, n: u8) -> Result<bool, BitError> {
    check_position(n, u32::BITS as u8)?;

    Ok(x & (1u32 << n) != 0)
}
