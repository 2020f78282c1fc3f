//! Arithmetic from bitwise operators.
//!
//! `add`, `subtract` and `multiply_by_n` never use the native arithmetic
//! operators in their reference form. They behave exactly like
//! `wrapping_add`, `wrapping_sub` and `wrapping_mul` on the same width:
//! overflow wraps modulo 2^8 and is never reported.
//!
//! Signed values are processed through their two's-complement bit pattern,
//! so the same carry chain serves `i8` and `u8`.

/// Adds two bytes by propagating the carry with XOR/AND/shift.
///
/// Terminates after at most 8 rounds: each round shifts the carry one bit
/// further left, and a carry out of bit 7 is dropped.
#[cfg(not(feature = "speed"))]
#[inline]
fn carry_add(mut x: u8, mut y: u8) -> u8 {
    while y != 0 {
        let carry = x & y;
        x ^= y;
        y = carry << 1;
    }

    x
}

#[cfg(feature = "speed")]
#[inline(always)]
fn carry_add(x: u8, y: u8) -> u8 {
    x.wrapping_add(y)
}

#[cfg(not(feature = "speed"))]
#[inline]
fn borrow_sub(mut x: u8, mut y: u8) -> u8 {
    while y != 0 {
        let borrow = !x & y;
        x ^= y;
        y = borrow << 1;
    }

    x
}

#[cfg(feature = "speed")]
#[inline(always)]
fn borrow_sub(x: u8, y: u8) -> u8 {
    x.wrapping_sub(y)
}

/// Computes `x + y` with two's-complement wraparound.
///
/// `add(127, 1) == -128`.
pub fn add(x: i8, y: i8) -> i8 {
    carry_add(x as u8, y as u8) as i8
}

/// Computes `x - y` with two's-complement wraparound.
///
/// `subtract(-128, 1) == 127`.
pub fn subtract(x: i8, y: i8) -> i8 {
    borrow_sub(x as u8, y as u8) as i8
}

/// Computes `x * n` modulo 256 by schoolbook binary multiplication.
///
/// For every set bit `i` of `n`, `x << i` is accumulated into the result.
#[cfg(not(feature = "speed"))]
pub fn multiply_by_n(x: u8, n: u8) -> u8 {
    let mut result = 0u8;
    let mut multiplier = x;

    for i in 0..u8::BITS {
        if n & (1 << i) != 0 {
            result = carry_add(result, multiplier);
        }

        multiplier <<= 1;
    }

    result
}

/// Computes `x * n` modulo 256 (intrinsic fast path).
#[cfg(feature = "speed")]
#[inline]
pub fn multiply_by_n(x: u8, n: u8) -> u8 {
    x.wrapping_mul(n)
}

/// Computes `x ^ y` using only OR, AND and NOT.
#[inline]
pub fn xor_without_operator(x: u8, y: u8) -> u8 {
    (x | y) & (!x | !y)
}
