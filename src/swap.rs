//! XOR-swap.
//!
//! XOR-swapping a location with itself zeroes it (`a ^= a`), so every entry
//! point here short-circuits when both operands denote the same storage.

use crate::error::BitError;

/// Exchanges `*x` and `*y` in place.
///
/// Leaves the value untouched when both references point at the same byte.
#[inline]
pub fn swap(x: &mut u8, y: &mut u8) {
    if std::ptr::eq(&*x, &*y) {
        return;
    }

    *x ^= *y;
    *y ^= *x;
    *x ^= *y;
}

/// Exchanges `bytes[i]` and `bytes[j]` in place.
///
/// `i == j` is the aliasing case and is a no-op.
///
/// # Errors
///
/// [`BitError::IndexOutOfBounds`] if either index is past the end of
/// `bytes`. The slice is not modified in that case.
pub fn swap_at(bytes: &mut [u8], i: usize, j: usize) -> Result<(), BitError> {
    let len = bytes.len();

    for index in [i, j] {
        if index >= len {
            log::debug!("rejected swap index {index} for slice of length {len}");

            return Err(BitError::IndexOutOfBounds { index, len });
        }
    }

    if i == j {
        return Ok(());
    }

    let (lo, hi) = if i < j { (i, j) } else { (j, i) };
    let (head, tail) = bytes.split_at_mut(hi);

    swap(&mut head[lo], &mut tail[0]);

    Ok(())
}

/// Returns `(y, x)` computed with XOR only.
#[inline]
pub fn swap_values(mut x: u8, mut y: u8) -> (u8, u8) {
    x ^= y;
    y ^= x;
    x ^= y;

    (x, y)
}
