//! Bit counting and scanning.

/// Population count of `x`.
#[cfg(not(feature = "speed"))]
pub fn count_set_bits(mut x: u8) -> u8 {
    let mut count = 0u8;

    while x != 0 {
        count += x & 1;
        x >>= 1;
    }

    count
}

/// Population count of `x` (intrinsic fast path).
#[cfg(feature = "speed")]
#[inline]
pub fn count_set_bits(x: u8) -> u8 {
    x.count_ones() as u8
}

/// Returns `true` iff `x` has exactly one bit set.
#[inline]
pub fn is_power_of_2(x: u8) -> bool {
    x != 0 && x & (x - 1) == 0
}

/// Clears the lowest set bit of `x`. Zero stays zero.
#[inline]
pub fn clear_lsb(x: u8) -> u8 {
    x & x.wrapping_sub(1)
}

/// Returns the bit length of `x`: the number of right shifts needed to
/// reduce it to zero.
///
/// Despite the name this is **not** the 0-based index of the most significant
/// set bit. It is that index plus one, and 0 for `x == 0`:
/// `find_msb(1) == 1`, `find_msb(0x80) == 8`, `find_msb(255) == 8`.
#[cfg(not(feature = "speed"))]
pub fn find_msb(mut x: u8) -> u8 {
    let mut len = 0u8;

    while x != 0 {
        x >>= 1;
        len += 1;
    }

    len
}

/// Bit length of `x` (intrinsic fast path). See the reference variant for
/// the exact semantics.
#[cfg(feature = "speed")]
#[inline]
pub fn find_msb(x: u8) -> u8 {
    (u8::BITS - x.leading_zeros()) as u8
}
