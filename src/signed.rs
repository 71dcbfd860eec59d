//! Two's-complement interpretation of [`Unsigned`].
//!
//! The storage is the same; only comparison, negation and text differ.
//! [`Signed`] is a zero-cost view for the places that want `Ord` and
//! `Display` with signed semantics.

use core::{cmp::Ordering, fmt, str::FromStr};

use ref_cast::RefCast;
use zeroize::Zeroize;

use crate::digit::{Digit, DIGIT_BITS};
use crate::{Error, Result, Unsigned};

const TOP_BIT: Digit = 1 << (DIGIT_BITS - 1);

impl<const L: usize> Unsigned<L> {
    /// $-2^{\text{BITS}-1}$, the most negative signed value.
    pub const SIGNED_MIN: Self = {
        let mut cells = [0; L];
        cells[L - 1] = TOP_BIT;
        Self(cells)
    };

    /// $2^{\text{BITS}-1} - 1$.
    pub const SIGNED_MAX: Self = {
        let mut cells = [Digit::MAX; L];
        cells[L - 1] = !TOP_BIT;
        Self(cells)
    };

    pub fn is_negative(&self) -> bool {
        self.0[L - 1] & TOP_BIT != 0
    }

    /// `0 - self`; `SIGNED_MIN` maps to itself.
    pub fn wrapping_neg(&self) -> Self {
        Self::zero().wrapping_sub(self)
    }

    /// Magnitude and sign.
    ///
    /// The magnitude is read as unsigned, so `SIGNED_MIN` yields
    /// $2^{\text{BITS}-1}$ correctly.
    pub fn abs(&self) -> (Self, bool) {
        if self.is_negative() {
            (self.wrapping_neg(), true)
        } else {
            (*self, false)
        }
    }

    /// Inverse of [`Self::abs`]. `None` if the magnitude is out of the signed range.
    pub fn from_sign_magnitude(magnitude: &Self, negative: bool) -> Option<Self> {
        if negative {
            (*magnitude <= Self::SIGNED_MIN).then(|| magnitude.wrapping_neg())
        } else {
            (!magnitude.is_negative()).then(|| *magnitude)
        }
    }

    pub fn signed_cmp(&self, other: &Self) -> Ordering {
        match (self.is_negative(), other.is_negative()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            // same sign: two's complement preserves unsigned order
            _ => self.cmp(other),
        }
    }

    /// Decimal text with an optional `+` or `-`.
    pub fn from_signed_decimal_str(s: &str) -> Result<Self> {
        let (negative, digits) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };
        let magnitude = Self::from_decimal_digits(digits)?;
        Self::from_sign_magnitude(&magnitude, negative).ok_or_else(|| {
            debug!("signed decimal out of range");
            Error::Overflow
        })
    }

    /// Like [`Self::write_decimal`], with a leading `-` for negative values.
    pub fn write_signed_decimal(&self, buf: &mut [u8]) -> Result<usize> {
        let (magnitude, negative) = self.abs();
        if !negative {
            return magnitude.write_decimal(buf);
        }
        let (sign, rest) = buf.split_first_mut().ok_or(Error::BufferTooSmall)?;
        let n = magnitude.write_decimal(rest)?;
        *sign = b'-';
        Ok(n + 1)
    }
}

/// An [`Unsigned`] read as two's complement.
///
/// ```
/// use ref_cast::RefCast;
/// use widefix::{Signed, U128};
///
/// let minus_one = U128::MAX;
/// assert!(Signed::ref_cast(&minus_one) < Signed::ref_cast(&U128::zero()));
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, Eq, Hash, PartialEq, RefCast, Zeroize)]
pub struct Signed<const L: usize>(pub Unsigned<L>);

impl<const L: usize> Signed<L> {
    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    pub fn into_inner(self) -> Unsigned<L> {
        self.0
    }
}

impl<const L: usize> From<Unsigned<L>> for Signed<L> {
    fn from(x: Unsigned<L>) -> Self {
        Self(x)
    }
}

impl<const L: usize> Ord for Signed<L> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.signed_cmp(&other.0)
    }
}

impl<const L: usize> PartialOrd for Signed<L> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const L: usize> fmt::Display for Signed<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (magnitude, negative) = self.0.abs();
        if negative {
            f.write_str("-")?;
        }
        fmt::Display::fmt(&magnitude, f)
    }
}

impl<const L: usize> fmt::Debug for Signed<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signed<{}>({})", L, self)
    }
}

impl<const L: usize> FromStr for Signed<L> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Unsigned::from_signed_decimal_str(s).map(Self)
    }
}
