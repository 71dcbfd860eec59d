use core::ops::{Add, AddAssign};

use crate::digit::{adc, Digit, DoubleDigit};
use crate::Unsigned;

/// Two argument addition of raw slices:
/// a += b
///
/// Returns the carry out of `a`, which the wrapping callers drop.
#[inline]
pub(crate) fn add_assign_carry(a: &mut [Digit], b: &[Digit]) -> Digit {
    debug_assert!(a.len() >= b.len());

    let mut carry: DoubleDigit = 0;
    let (a_lo, a_hi) = a.split_at_mut(b.len());

    for (a, b) in a_lo.iter_mut().zip(b) {
        *a = adc(*a, *b, &mut carry);
    }

    if carry != 0 {
        for a in a_hi {
            *a = adc(*a, 0, &mut carry);
            if carry == 0 {
                break;
            }
        }
    }

    carry as Digit
}

impl<const L: usize> Unsigned<L> {
    /// Sum and whether it wrapped.
    pub fn overflowing_add(&self, summand: &Self) -> (Self, bool) {
        let mut sum = *self;
        let carry = add_assign_carry(&mut sum.0, &summand.0);
        (sum, carry != 0)
    }

    pub fn checked_add(&self, summand: &Self) -> Option<Self> {
        let (sum, carried) = self.overflowing_add(summand);
        (!carried).then(|| sum)
    }

    pub fn wrapping_add_assign(&mut self, summand: &Self) {
        add_assign_carry(&mut self.0, &summand.0);
    }

    pub fn wrapping_add(&self, summand: &Self) -> Self {
        let mut sum = *self;
        sum.wrapping_add_assign(summand);
        sum
    }

    /// `self = lhs + rhs`; `self` may be either operand's former home.
    pub fn add_triop(&mut self, lhs: &Self, rhs: &Self) {
        *self = lhs.wrapping_add(rhs);
    }

    /// Adds a single digit in place, returns the carry out.
    pub fn add_digit_assign(&mut self, summand: Digit) -> Digit {
        add_assign_carry(&mut self.0, &[summand])
    }
}

impl<const L: usize> AddAssign<&Self> for Unsigned<L> {
    fn add_assign(&mut self, summand: &Self) {
        self.wrapping_add_assign(summand);
    }
}

impl<const L: usize> AddAssign for Unsigned<L> {
    fn add_assign(&mut self, summand: Self) {
        self.wrapping_add_assign(&summand);
    }
}

impl<const L: usize> Add for &Unsigned<L> {
    type Output = Unsigned<L>;

    fn add(self, summand: Self) -> Self::Output {
        self.wrapping_add(summand)
    }
}

impl<const L: usize> Add for Unsigned<L> {
    type Output = Self;

    fn add(self, summand: Self) -> Self::Output {
        self.wrapping_add(&summand)
    }
}
