//! Single characters to digits and back.
//!
//! Leaf utilities: callers guarantee the destination locations exist.

use crate::{Error, Result};

/// The digit value of an ASCII character in `base` (at most 36).
///
/// '0'-'9' are 0-9, 'A'-'Z' and 'a'-'z' are 10-35.
#[inline]
pub fn digit_of(c: u8, base: u32) -> Result<u8> {
    let digit = match c {
        b'0'..=b'9' => c - b'0',
        b'A'..=b'Z' => c - b'A' + 10,
        b'a'..=b'z' => c - b'a' + 10,
        _ => return Err(Error::OutOfRange),
    };
    if (digit as u32) < base {
        Ok(digit)
    } else {
        Err(Error::OutOfRange)
    }
}

/// The byte spelled by two hex characters, most significant first.
#[inline]
pub fn hex_byte_of(hi: u8, lo: u8) -> Result<u8> {
    Ok((digit_of(hi, 16)? << 4) | digit_of(lo, 16)?)
}

/// Uppercase character for a digit below 36.
#[inline]
pub fn char_of(digit: u8) -> u8 {
    debug_assert!(digit < 36);
    if digit < 10 {
        b'0' + digit
    } else {
        b'A' + (digit - 10)
    }
}

/// Writes the digit's character to `dst`.
#[inline]
pub fn write_digit(digit: u8, dst: &mut u8) {
    *dst = char_of(digit);
}

/// Writes `byte` as two uppercase hex characters to `dst[0]`, `dst[1]`.
#[inline]
pub fn write_hex_byte(byte: u8, dst: &mut [u8]) {
    write_digit(byte >> 4, &mut dst[0]);
    write_digit(byte & 0xF, &mut dst[1]);
}
