use core::ops::{Div, Rem};

use crate::digit::{div_digits, Digit};
use crate::{Error, Result, Unsigned};

/// Quotient and remainder, with `remainder < divisor`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DivisionResult<const L: usize> {
    pub quotient: Unsigned<L>,
    pub remainder: Unsigned<L>,
}

/// Divides the digits in-place by `divisor`, returning the remainder.
pub(crate) fn div_rem_assign_digit(number: &mut [Digit], divisor: Digit) -> Digit {
    debug_assert!(divisor != 0);
    let mut remainder = 0;

    // run down the digits, dividing each by the divisor, while carrying along the remainder
    for digit in number.iter_mut().rev() {
        let (quotient, r) = div_digits(remainder, *digit, divisor);
        *digit = quotient;
        remainder = r;
    }

    remainder
}

impl<const L: usize> Unsigned<L> {
    /// Long division.
    ///
    /// Single digit divisors take the digit-by-digit path. Otherwise this is
    /// restoring division: the divisor is aligned with the dividend's most
    /// significant bit, and from there down to bit 0, each step subtracts it
    /// (setting the quotient bit) if the running remainder allows, then shifts
    /// it right by one.
    pub fn div_rem(&self, divisor: &Self) -> Result<DivisionResult<L>> {
        if divisor.is_zero() {
            return Err(Error::DivisionByZero);
        }

        if divisor.is_digit() {
            let (quotient, remainder) = self.div_rem_digit(divisor.0[0])?;
            return Ok(DivisionResult { quotient, remainder: Self::from_digit(remainder) });
        }

        let (msb, divisor_msb) = (self.msb(), divisor.msb());
        if msb < divisor_msb {
            return Ok(DivisionResult { quotient: Self::zero(), remainder: *self });
        }

        let shift = msb - divisor_msb;
        let mut shifted = divisor << shift;
        let mut remainder = *self;
        let mut quotient = Self::zero();

        for bit in (0..=shift).rev() {
            if remainder >= shifted {
                remainder.wrapping_sub_assign(&shifted);
                quotient.set_bit(bit);
            }
            shifted >>= 1;
        }

        debug_assert!(remainder < *divisor);
        Ok(DivisionResult { quotient, remainder })
    }

    /// Division by a single digit.
    pub fn div_rem_digit(&self, divisor: Digit) -> Result<(Self, Digit)> {
        if divisor == 0 {
            return Err(Error::DivisionByZero);
        }
        let mut quotient = *self;
        let l = quotient.significant_len();
        let remainder = div_rem_assign_digit(&mut quotient.0[..l], divisor);
        Ok((quotient, remainder))
    }

    pub fn checked_div(&self, divisor: &Self) -> Option<Self> {
        self.div_rem(divisor).ok().map(|result| result.quotient)
    }

    pub fn checked_rem(&self, divisor: &Self) -> Option<Self> {
        self.div_rem(divisor).ok().map(|result| result.remainder)
    }
}

//
// Implement Div and Rem; like the primitive integers, these panic on a zero divisor.
//

impl<const L: usize> Div for &Unsigned<L> {
    type Output = Unsigned<L>;
    fn div(self, divisor: Self) -> Self::Output {
        match self.div_rem(divisor) {
            Ok(result) => result.quotient,
            Err(_) => panic!("attempt to divide by zero"),
        }
    }
}

impl<const L: usize> Div for Unsigned<L> {
    type Output = Self;
    fn div(self, divisor: Self) -> Self::Output {
        &self / &divisor
    }
}

impl<const L: usize> Rem for &Unsigned<L> {
    type Output = Unsigned<L>;
    fn rem(self, divisor: Self) -> Self::Output {
        match self.div_rem(divisor) {
            Ok(result) => result.remainder,
            Err(_) => panic!("attempt to calculate the remainder with a divisor of zero"),
        }
    }
}

impl<const L: usize> Rem for Unsigned<L> {
    type Output = Self;
    fn rem(self, divisor: Self) -> Self::Output {
        &self % &divisor
    }
}
