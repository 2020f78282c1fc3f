use std::fmt::{Display, Formatter, Result};

/// Errors reported when an argument falls outside an operation's domain.
///
/// Arithmetic overflow is never reported here: `add`, `subtract` and
/// `multiply_by_n` wrap.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BitError {
    /// A bit position is not below the width of the operand.
    PositionOutOfRange {
        /// The rejected position.
        position: u8,
        /// Width of the operand in bits (8 or 32).
        width: u8,
    },

    /// A bit field does not fit inside a byte.
    ///
    /// Raised when `msb >= 8`, `len == 0` or `len > msb + 1`.
    InvalidField { msb: u8, len: u8 },

    /// A slice index is past the end of the slice.
    IndexOutOfBounds { index: usize, len: usize },
}

impl Display for BitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match *self {
            BitError::PositionOutOfRange { position, width } => {
                write!(f, "bit position {position} out of range for {width}-bit operand")
            }
            BitError::InvalidField { msb, len } => {
                write!(f, "{len}-bit field with msb at {msb} does not fit in a byte")
            }
            BitError::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for slice of length {len}")
            }
        }
    }
}

impl std::error::Error for BitError {}

/// Checks `position < width`, logging the rejected argument.
#[inline]
pub(crate) fn check_position(position: u8, width: u8) -> std::result::Result<(), BitError> {
    if position >= width {
        log::debug!("rejected bit position {position} for {width}-bit operand");

        return Err(BitError::PositionOutOfRange { position, width });
    }

    Ok(())
}
