//! Fixed-point decimals: a signed [`Unsigned`] and a count of digits after
//! the point.
//!
//! `Decimal { value, scale }` denotes `value * 10^-scale`. The same number has
//! many representations (`100` at scale 0, `1000` at scale 1), and equality
//! and ordering hold across them. For that reason there is no `Hash`.
//!
//! Most operations come in two flavours. The plain ones wrap like the
//! underlying integer, the `checked_*` ones return [`Error::Overflow`]
//! instead.
//!
//! [`Error::Overflow`]: crate::Error::Overflow

use core::ops::Neg;

use zeroize::Zeroize;

use crate::{Signed, Unsigned};

mod arithmetic;
mod compare;
mod divide;
mod precision;
mod text;

pub use arithmetic::Op;

#[derive(Clone, Copy, Default, Zeroize)]
pub struct Decimal<const L: usize> {
    pub(crate) value: Unsigned<L>,
    pub(crate) scale: u32,
}

impl<const L: usize> Decimal<L> {
    /// `value` is read as two's complement.
    pub const fn new(value: Unsigned<L>, scale: u32) -> Self {
        Self { value, scale }
    }

    pub const fn zero() -> Self {
        Self::new(Unsigned::ZERO, 0)
    }

    pub const fn one() -> Self {
        Self::new(Unsigned::ONE, 0)
    }

    /// `value * 10^-scale`
    pub fn from_i64(value: i64, scale: u32) -> Self {
        let magnitude = Unsigned::from_u64(value.unsigned_abs());
        let value = if value < 0 { magnitude.wrapping_neg() } else { magnitude };
        Self::new(value, scale)
    }

    pub fn value(&self) -> &Unsigned<L> {
        &self.value
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    pub fn into_parts(self) -> (Unsigned<L>, u32) {
        (self.value, self.scale)
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.value.is_negative()
    }

    /// `-1`, `0` or `1` at scale 0.
    pub fn signum(&self) -> Self {
        if self.is_zero() {
            Self::zero()
        } else if self.is_negative() {
            -Self::one()
        } else {
            Self::one()
        }
    }

    /// Wraps for the most negative value, like the primitives.
    pub fn abs(&self) -> Self {
        Self::new(self.value.abs().0, self.scale)
    }

    /// Same number, trailing zero digits after the point removed.
    pub fn normalize(&self) -> Self {
        let (mut magnitude, negative) = self.value.abs();
        let mut scale = self.scale;
        while scale > 0 {
            match magnitude.div_rem_digit(10) {
                Ok((quotient, 0)) => {
                    magnitude = quotient;
                    scale -= 1;
                }
                _ => break,
            }
        }
        if magnitude.is_zero() {
            return Self::zero();
        }
        let value = if negative { magnitude.wrapping_neg() } else { magnitude };
        Self::new(value, scale)
    }

    /// The value as a signed integer view, ignoring the scale.
    pub fn as_signed(&self) -> &Signed<L> {
        use ref_cast::RefCast;
        Signed::ref_cast(&self.value)
    }
}

impl<const L: usize> Neg for Decimal<L> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(self.value.wrapping_neg(), self.scale)
    }
}

impl<const L: usize> Neg for &Decimal<L> {
    type Output = Decimal<L>;

    fn neg(self) -> Decimal<L> {
        -*self
    }
}
