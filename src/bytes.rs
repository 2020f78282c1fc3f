//! Byte and nibble layout.

use std::ffi::c_int;

/// Number of bytes in the platform's natural C `int`.
///
/// This is the word every narrower integer is promoted to before a shift in
/// C-family code, and the width [`size_of_using_bitwise`] reports.
pub const NATIVE_INT_BYTES: u8 = probe_int_width();

/// Shifts a single set bit through a `c_int`-wide word until it falls off
/// the top, counting the shifts.
const fn probe_int_width() -> u8 {
    let mut sentinel: u64 = 1;
    let word_mask: u64 = ((c_int::MAX as u64) << 1) | 1;
    let mut bits = 0u8;

    while sentinel & word_mask != 0 {
        sentinel <<= 1;
        bits += 1;
    }

    bits / 8
}

/// Returns the byte width of the platform's natural integer word.
///
/// The value is fixed at compile time ([`NATIVE_INT_BYTES`], 4 on every
/// supported target) and does not depend on the integer type of any
/// argument.
#[inline]
pub fn size_of_using_bitwise() -> u8 {
    NATIVE_INT_BYTES
}

/// Reverses the byte order of a 32-bit word.
///
/// `little_to_big_endian(0x1234_5678) == 0x7856_3412`. Applying it twice
/// yields the original value, so the same function converts in both
/// directions.
#[cfg(not(feature = "speed"))]
pub fn little_to_big_endian(x: u32) -> u32 {
    ((x & 0xFF00_0000) >> 24)
        | ((x & 0x00FF_0000) >> 8)
        | ((x & 0x0000_FF00) << 8)
        | ((x & 0x0000_00FF) << 24)
}

/// Reverses the byte order of a 32-bit word (intrinsic fast path).
#[cfg(feature = "speed")]
#[inline]
pub fn little_to_big_endian(x: u32) -> u32 {
    x.swap_bytes()
}

/// Exchanges the high and low nibbles of `x`: `0x1F` becomes `0xF1`.
#[inline]
pub fn swap_nibbles(x: u8) -> u8 {
    ((x & 0x0F) << 4) | ((x & 0xF0) >> 4)
}
