use core::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

use crate::{Decimal, Error, Result, Unsigned};

/// Addition or subtraction, the two share one routine.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Op {
    Add,
    Sub,
}

impl Op {
    fn wrapping<const L: usize>(self, lhs: &Unsigned<L>, rhs: &Unsigned<L>) -> Unsigned<L> {
        match self {
            Op::Add => lhs.wrapping_add(rhs),
            Op::Sub => lhs.wrapping_sub(rhs),
        }
    }

    /// Sign of the right hand side as it enters the sum.
    fn fold_sign(self, negative: bool) -> bool {
        match self {
            Op::Add => negative,
            Op::Sub => !negative,
        }
    }
}

impl<const L: usize> Decimal<L> {
    /// Both values at the larger of the two scales, wrapping.
    fn aligned(&self, other: &Self) -> (Unsigned<L>, Unsigned<L>, u32) {
        let scale = self.scale.max(other.scale);
        let (mut lhs, mut rhs) = (*self, *other);
        lhs.rescale(scale);
        rhs.rescale(scale);
        (lhs.value, rhs.value, scale)
    }

    /// Both values at the larger of the two scales.
    fn checked_aligned(&self, other: &Self) -> Result<(Unsigned<L>, Unsigned<L>, u32)> {
        let scale = self.scale.max(other.scale);
        let lhs = self.checked_rescale(scale)?;
        let rhs = other.checked_rescale(scale)?;
        Ok((lhs.value, rhs.value, scale))
    }

    /// `self op other` at the larger scale, wrapping.
    pub fn wrapping_op(&self, op: Op, other: &Self) -> Self {
        let (lhs, rhs, scale) = self.aligned(other);
        Self::new(op.wrapping(&lhs, &rhs), scale)
    }

    /// `self op other` at the larger scale, or [`Error::Overflow`] if the
    /// alignment or the result leaves the signed range.
    pub fn checked_op(&self, op: Op, other: &Self) -> Result<Self> {
        let (lhs, rhs, scale) = self.checked_aligned(other)?;
        let (lhs, lhs_negative) = lhs.abs();
        let (rhs, rhs_negative) = rhs.abs();
        let rhs_negative = op.fold_sign(rhs_negative);

        let (magnitude, negative) = if lhs_negative == rhs_negative {
            (lhs.checked_add(&rhs), lhs_negative)
        } else if lhs >= rhs {
            (Some(lhs.wrapping_sub(&rhs)), lhs_negative)
        } else {
            (Some(rhs.wrapping_sub(&lhs)), rhs_negative)
        };
        magnitude
            .and_then(|magnitude| Unsigned::from_sign_magnitude(&magnitude, negative))
            .map(|value| Self::new(value, scale))
            .ok_or_else(|| {
                debug!("decimal {:?} overflows", op);
                Error::Overflow
            })
    }

    pub fn wrapping_add(&self, summand: &Self) -> Self {
        self.wrapping_op(Op::Add, summand)
    }

    pub fn wrapping_sub(&self, subtrahend: &Self) -> Self {
        self.wrapping_op(Op::Sub, subtrahend)
    }

    pub fn checked_add(&self, summand: &Self) -> Result<Self> {
        self.checked_op(Op::Add, summand)
    }

    pub fn checked_sub(&self, subtrahend: &Self) -> Result<Self> {
        self.checked_op(Op::Sub, subtrahend)
    }

    /// Scales add; the value wraps.
    ///
    /// A scale sum past `u32::MAX` saturates there while the value keeps its
    /// wrapped digits, so such a result no longer denotes the true product.
    /// [`Self::checked_mul`] reports that case as [`Error::Overflow`].
    pub fn wrapping_mul(&self, factor: &Self) -> Self {
        Self::new(self.value.wrapping_mul(&factor.value), self.scale.saturating_add(factor.scale))
    }

    /// Multiplies magnitudes at double width and accepts only a product whose
    /// high half is zero and whose low half fits the signed range.
    pub fn checked_mul(&self, factor: &Self) -> Result<Self> {
        let (lhs, lhs_negative) = self.value.abs();
        let (rhs, rhs_negative) = factor.value.abs();
        let (lo, hi) = lhs.widening_mul(&rhs).into_parts();
        let value = if hi.is_zero() {
            Unsigned::from_sign_magnitude(&lo, lhs_negative != rhs_negative)
        } else {
            None
        };
        match (value, self.scale.checked_add(factor.scale)) {
            (Some(value), Some(scale)) => Ok(Self::new(value, scale)),
            _ => {
                debug!("decimal multiplication overflows");
                Err(Error::Overflow)
            }
        }
    }
}

macro_rules! wrapping_operator {
    ($Trait:ident, $method:ident, $TraitAssign:ident, $method_assign:ident, $wrapping:ident) => {
        impl<const L: usize> $Trait for Decimal<L> {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self {
                self.$wrapping(&rhs)
            }
        }

        impl<const L: usize> $Trait for &Decimal<L> {
            type Output = Decimal<L>;

            fn $method(self, rhs: Self) -> Decimal<L> {
                self.$wrapping(rhs)
            }
        }

        impl<const L: usize> $TraitAssign for Decimal<L> {
            fn $method_assign(&mut self, rhs: Self) {
                *self = self.$wrapping(&rhs);
            }
        }

        impl<const L: usize> $TraitAssign<&Self> for Decimal<L> {
            fn $method_assign(&mut self, rhs: &Self) {
                *self = self.$wrapping(rhs);
            }
        }
    };
}

wrapping_operator!(Add, add, AddAssign, add_assign, wrapping_add);
wrapping_operator!(Sub, sub, SubAssign, sub_assign, wrapping_sub);
wrapping_operator!(Mul, mul, MulAssign, mul_assign, wrapping_mul);
