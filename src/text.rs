//! Hexadecimal and decimal text for [`Unsigned`].
//!
//! Writers fill a caller supplied buffer and return how many bytes they
//! wrote. If the buffer is too small they fail with
//! [`Error::BufferTooSmall`] and the buffer contents mean nothing.

use core::{fmt, str::FromStr};

use crate::arithmetic::div_rem_assign_digit;
use crate::codec::{digit_of, write_digit};
use crate::digit::{Digit, DECIMAL_CHUNK, DECIMAL_CHUNK_DIGITS, DIGIT_BITS};
use crate::{Error, Result, Unsigned};

const NIBBLES_PER_DIGIT: usize = DIGIT_BITS / 4;

impl<const L: usize> Unsigned<L> {
    /// Parses hex digits, most significant first, no prefix, any case.
    ///
    /// The rightmost characters fill the least significant digits; characters
    /// further left than the width can hold are ignored.
    pub fn from_hex_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(Error::InvalidFormat);
        }
        let mut x = Self::zero();
        for (position, &c) in s.as_bytes().iter().rev().take(L * NIBBLES_PER_DIGIT).enumerate() {
            let nibble = digit_of(c, 16)? as Digit;
            x.0[position / NIBBLES_PER_DIGIT] |= nibble << (4 * (position % NIBBLES_PER_DIGIT));
        }
        Ok(x)
    }

    /// Parses decimal digits, with an optional leading `+`.
    ///
    /// Accumulates `x = 10 * x + digit`, failing with [`Error::Overflow`]
    /// rather than wrapping. A leading `-` is refused with
    /// [`Error::OutOfRange`], even for `-0`; signed text goes through
    /// [`Self::from_signed_decimal_str`].
    pub fn from_decimal_str(s: &str) -> Result<Self> {
        Self::from_decimal_digits(s.strip_prefix('+').unwrap_or(s))
    }

    /// Unsigned digits only, no sign.
    pub(crate) fn from_decimal_digits(digits: &str) -> Result<Self> {
        if digits.is_empty() {
            return Err(Error::InvalidFormat);
        }
        let mut x = Self::zero();
        for &c in digits.as_bytes() {
            let digit = digit_of(c, 10)?;
            if x.mul_digit_assign(10) != 0 || x.add_digit_assign(digit as Digit) != 0 {
                return Err(Error::Overflow);
            }
        }
        Ok(x)
    }

    fn nibble(&self, position: usize) -> u8 {
        let digit = self.0[position / NIBBLES_PER_DIGIT];
        ((digit >> (4 * (position % NIBBLES_PER_DIGIT))) & 0xF) as u8
    }

    /// Number of hex digits [`Self::write_hex`] needs.
    pub fn hex_len(&self) -> usize {
        self.msb() / 4 + 1
    }

    /// Writes the minimal uppercase hex representation to the front of `buf`.
    pub fn write_hex(&self, buf: &mut [u8]) -> Result<usize> {
        let n = self.hex_len();
        if buf.len() < n {
            debug!("hex needs {} bytes, buffer has {}", n, buf.len());
            return Err(Error::BufferTooSmall);
        }
        for (i, dst) in buf[..n].iter_mut().enumerate() {
            write_digit(self.nibble(n - 1 - i), dst);
        }
        Ok(n)
    }

    /// Writes the decimal representation to the front of `buf`.
    ///
    /// Digits are produced least significant first from the back of the
    /// buffer, then moved to the front.
    pub fn write_decimal(&self, buf: &mut [u8]) -> Result<usize> {
        let mut x = *self;
        let mut start = buf.len();
        loop {
            if start == 0 {
                debug!("decimal does not fit in {} bytes", buf.len());
                return Err(Error::BufferTooSmall);
            }
            let l = x.significant_len();
            let remainder = div_rem_assign_digit(&mut x.0[..l], 10);
            start -= 1;
            write_digit(remainder as u8, &mut buf[start]);
            if x.is_zero() {
                break;
            }
        }
        let n = buf.len() - start;
        buf.copy_within(start.., 0);
        Ok(n)
    }

    /// Calls `visit` with each decimal digit, most significant first.
    ///
    /// Peels off a [`DECIMAL_CHUNK`] at a time and recurses on the rest, so
    /// no buffer proportional to the width is needed.
    pub(crate) fn visit_decimal_digits<E, F>(&self, visit: &mut F) -> core::result::Result<(), E>
    where
        F: FnMut(u8) -> core::result::Result<(), E>,
    {
        let mut quotient = *self;
        let l = quotient.significant_len();
        let chunk = div_rem_assign_digit(&mut quotient.0[..l], DECIMAL_CHUNK);
        if quotient.is_zero() {
            visit_chunk(chunk, 1, visit)
        } else {
            quotient.visit_decimal_digits(visit)?;
            visit_chunk(chunk, DECIMAL_CHUNK_DIGITS, visit)
        }
    }

    /// Number of decimal digits, 1 for zero.
    pub fn decimal_len(&self) -> usize {
        let mut n = 0;
        let _ = self.visit_decimal_digits(&mut |_| -> core::result::Result<(), ()> {
            n += 1;
            Ok(())
        });
        n
    }
}

/// The digits of a chunk, zero padded to at least `width`.
fn visit_chunk<E, F>(mut chunk: Digit, width: usize, visit: &mut F) -> core::result::Result<(), E>
where
    F: FnMut(u8) -> core::result::Result<(), E>,
{
    let mut digits = [0u8; 20];
    let mut n = 0;
    loop {
        digits[n] = (chunk % 10) as u8;
        chunk /= 10;
        n += 1;
        if chunk == 0 && n >= width {
            break;
        }
    }
    digits[..n].iter().rev().try_for_each(|&digit| visit(digit))
}

impl<const L: usize> fmt::Display for Unsigned<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;
        self.visit_decimal_digits(&mut |digit| f.write_char((b'0' + digit) as char))
    }
}

fn fmt_hex<const L: usize>(x: &Unsigned<L>, f: &mut fmt::Formatter<'_>, upper: bool) -> fmt::Result {
    if f.alternate() {
        f.write_str("0x")?;
    }
    let l = x.significant_len().max(1);
    for (i, digit) in x.0[..l].iter().rev().enumerate() {
        let width = if i == 0 { 1 } else { NIBBLES_PER_DIGIT };
        if upper {
            write!(f, "{:0width$X}", digit, width = width)?;
        } else {
            write!(f, "{:0width$x}", digit, width = width)?;
        }
    }
    Ok(())
}

impl<const L: usize> fmt::UpperHex for Unsigned<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_hex(self, f, true)
    }
}

impl<const L: usize> fmt::LowerHex for Unsigned<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_hex(self, f, false)
    }
}

impl<const L: usize> fmt::Debug for Unsigned<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unsigned<{}>({:#X})", L, self)
    }
}

impl<const L: usize> FromStr for Unsigned<L> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_decimal_str(s)
    }
}
