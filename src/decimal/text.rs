use core::{fmt, str::FromStr};

use crate::codec::digit_of;
use crate::digit::Digit;
use crate::{Decimal, Error, Result, Signed, Unsigned};

impl<const L: usize> Decimal<L> {
    /// Optional sign, digits, and at most one `.`; the number of digits after
    /// the point becomes the scale.
    pub fn from_decimal_str(s: &str) -> Result<Self> {
        let (negative, rest) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };

        let mut magnitude = Unsigned::<L>::zero();
        let mut digits = 0usize;
        let mut point = None;
        for (i, &c) in rest.as_bytes().iter().enumerate() {
            if c == b'.' && point.is_none() {
                point = Some(i);
                continue;
            }
            let digit = digit_of(c, 10)?;
            if magnitude.mul_digit_assign(10) != 0 || magnitude.add_digit_assign(digit as Digit) != 0 {
                debug!("decimal text overflows");
                return Err(Error::Overflow);
            }
            digits += 1;
        }
        if digits == 0 {
            return Err(Error::InvalidFormat);
        }

        let scale = point.map_or(0, |point| rest.len() - point - 1);
        let scale = u32::try_from(scale).map_err(|_| Error::Overflow)?;
        let value = Unsigned::from_sign_magnitude(&magnitude, negative).ok_or_else(|| {
            debug!("decimal text out of signed range");
            Error::Overflow
        })?;
        Ok(Self::new(value, scale))
    }

    /// Characters, most significant first, with the point placed by the scale.
    fn visit_chars<E, F>(&self, visit: &mut F) -> core::result::Result<(), E>
    where
        F: FnMut(u8) -> core::result::Result<(), E>,
    {
        let (magnitude, negative) = self.value.abs();
        let len = magnitude.decimal_len();
        let scale = self.scale as usize;

        if negative {
            visit(b'-')?;
        }
        if scale == 0 {
            return magnitude.visit_decimal_digits(&mut |digit| visit(b'0' + digit));
        }

        // digits before the point, if any
        let integral = len.saturating_sub(scale);
        if integral == 0 {
            visit(b'0')?;
            visit(b'.')?;
            for _ in len..scale {
                visit(b'0')?;
            }
        }
        let mut i = 0;
        magnitude.visit_decimal_digits(&mut |digit| {
            if i == integral && integral > 0 {
                visit(b'.')?;
            }
            i += 1;
            visit(b'0' + digit)
        })
    }

    /// Writes the text to the front of `buf`, returning the number of bytes.
    ///
    /// Fails with [`Error::BufferTooSmall`] if it does not fit, in which case
    /// the buffer holds nothing usable.
    pub fn write_str(&self, buf: &mut [u8]) -> Result<usize> {
        let mut n = 0;
        self.visit_chars(&mut |c| {
            let dst = buf.get_mut(n).ok_or(Error::BufferTooSmall)?;
            *dst = c;
            n += 1;
            Ok(())
        })
        .map_err(|error| {
            debug!("decimal does not fit in {} bytes", buf.len());
            error
        })?;
        Ok(n)
    }
}

impl<const L: usize> FromStr for Decimal<L> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_decimal_str(s)
    }
}

impl<const L: usize> fmt::Display for Decimal<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;
        self.visit_chars(&mut |c| f.write_char(c as char))
    }
}

impl<const L: usize> fmt::Debug for Decimal<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Decimal")
            .field("value", &Signed(self.value))
            .field("scale", &self.scale)
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::digit::DIGIT_BITS;

    const L: usize = 128 / DIGIT_BITS;
    type U128 = Unsigned<L>;
    type D128 = Decimal<L>;

    fn print(x: &D128) -> std::string::String {
        let mut buf = [0u8; 80];
        let n = x.write_str(&mut buf).unwrap();
        std::string::String::from_utf8(buf[..n].to_vec()).unwrap()
    }

    #[test]
    fn parse() {
        let cases: &[(&str, i64, u32)] = &[
            ("0", 0, 0),
            ("-12.340", -12_340, 3),
            ("+0.5", 5, 1),
            (".25", 25, 2),
            ("7.", 7, 0),
            ("-0.00", 0, 2),
        ];
        for &(s, value, scale) in cases {
            let x: D128 = s.parse().unwrap();
            assert_eq!(x.scale(), scale, "{}", s);
            assert_eq!(*x.value(), *D128::from_i64(value, scale).value(), "{}", s);
        }
    }

    #[test]
    fn parse_rejects() {
        assert_eq!(D128::from_decimal_str(""), Err(Error::InvalidFormat));
        assert_eq!(D128::from_decimal_str("-"), Err(Error::InvalidFormat));
        assert_eq!(D128::from_decimal_str("."), Err(Error::InvalidFormat));
        assert_eq!(D128::from_decimal_str("1.2.3"), Err(Error::OutOfRange));
        assert_eq!(D128::from_decimal_str("1e5"), Err(Error::OutOfRange));
        assert_eq!(D128::from_decimal_str(" 1"), Err(Error::OutOfRange));
        assert_eq!(D128::from_decimal_str("17014118346046923173168730371588410572.8"), Err(Error::Overflow));
        assert_eq!(
            D128::from_decimal_str("-17014118346046923173168730371588410572.8").map(|x| *x.value()),
            Ok(U128::SIGNED_MIN)
        );
        assert_eq!(D128::from_decimal_str("999999999999999999999999999999999999999"), Err(Error::Overflow));
    }

    #[test]
    fn round_trip() {
        for s in ["0", "10.01", "-1400.00", "0.001", "-0.5", "123456789012345678901234567890.12345678"] {
            let x: D128 = s.parse().unwrap();
            assert_eq!(print(&x), s);
            assert_eq!(std::format!("{}", x), s);
        }
        // canonical forms
        assert_eq!(print(&"+3.0".parse().unwrap()), "3.0");
        assert_eq!(print(&"-0".parse().unwrap()), "0");
        assert_eq!(print(&"-0.00".parse().unwrap()), "0.00");
        assert_eq!(print(&".5".parse().unwrap()), "0.5");
    }

    #[test]
    fn pads_with_zeros() {
        let x = D128::new(U128::from_digit(42), 5);
        assert_eq!(print(&x), "0.00042");
        let x = D128::new(U128::from_digit(42), 2);
        assert_eq!(print(&x), "0.42");
        let x = D128::from_i64(-42, 3);
        assert_eq!(print(&x), "-0.042");
    }

    #[test]
    fn buffer_one_short() {
        for s in ["-1400.00", "0.00042", "10", "-0.5"] {
            let x: D128 = s.parse().unwrap();
            let mut buf = [0u8; 16];
            assert_eq!(x.write_str(&mut buf[..s.len()]), Ok(s.len()));
            assert_eq!(&buf[..s.len()], s.as_bytes());
            assert_eq!(x.write_str(&mut buf[..s.len() - 1]), Err(Error::BufferTooSmall));
        }
    }

    #[test]
    fn debug() {
        let x: D128 = "-1.5".parse().unwrap();
        assert_eq!(std::format!("{:?}", x), "Decimal { value: Signed<".to_owned() + &L.to_string() + ">(-15), scale: 1 }");
    }
}
