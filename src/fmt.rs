//! Binary rendering of a byte.

use std::fmt::{Display, Formatter, Result, Write};

/// Display adapter rendering a byte as exactly 8 binary digits, most
/// significant bit first, with no prefix or separators.
///
/// `format!("{}", Binary8(5)) == "00000101"`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Binary8(pub u8);

impl Display for Binary8 {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for i in (0..u8::BITS).rev() {
            let digit = if self.0 & (1 << i) != 0 { '1' } else { '0' };

            f.write_char(digit)?;
        }

        Ok(())
    }
}

/// Returns the 8-character binary representation of `x`.
///
/// Each call returns a fresh `String`.
pub fn format_binary(x: u8) -> String {
    Binary8(x).to_string()
}
