//! Bit manipulation primitives over fixed-width integers
//!
//! This crate provides a flat set of small, stateless functions operating on
//! `u8`, `i8` and `u32` values: single-bit access, counting, endianness and
//! nibble layout, arithmetic expressed purely with bitwise operators, and
//! bit-field packing.
//!
//! # Module overview
//!
//! - `bit`
//!   Get, set, clear and toggle a single bit of a byte, parity, and bit
//!   tests on 32-bit words.
//!
//! - `count`
//!   Population count, power-of-two test, lowest-set-bit clearing and bit
//!   length.
//!
//! - `arith`
//!   Addition, subtraction and multiplication built from XOR/AND/shift only,
//!   plus XOR built from OR/AND/NOT. All of them wrap like the native
//!   fixed-width types.
//!
//! - `bytes`
//!   Byte order reversal, nibble swapping and the native `int` width probe.
//!
//! - `field`
//!   Packing and unpacking of multi-bit fields inside a byte, described by a
//!   validated [`BitField`].
//!
//! - `swap`
//!   XOR-swap of two bytes, in place or by value.
//!
//! - `fmt`
//!   Fixed 8-character binary rendering of a byte.
//!
//! # Preconditions
//!
//! Operations taking a bit position never shift out of range: a position
//! outside the operand width is reported as a [`BitError`] instead of being
//! masked or left to platform behavior. Arithmetic overflow is not an error
//! and always wraps modulo 2^8.
//!
//! # Features
//!
//! - `speed`
//!   Replaces the reference loops with the equivalent core intrinsics. Results
//!   are identical with or without the feature.

mod error;

pub mod arith;
pub mod bit;
pub mod bytes;
pub mod count;
pub mod field;
pub mod fmt;
pub mod swap;

pub use arith::{add, multiply_by_n, subtract, xor_without_operator};
pub use bit::{clear_bit, get_bit_status, is_even, is_nth_bit_on, set_bit, toggle_bit};
pub use bytes::{NATIVE_INT_BYTES, little_to_big_endian, size_of_using_bitwise, swap_nibbles};
pub use count::{clear_lsb, count_set_bits, find_msb, is_power_of_2};
pub use error::BitError;
pub use field::{BitField, get_bits, set_bits};
pub use fmt::{Binary8, format_binary};
pub use swap::{swap, swap_at, swap_values};
