//! Division at a requested precision.
//!
//! Every variant returns a quotient at scale `self.scale + precision`,
//! truncated toward zero. The divisor's scale is paid for with extra digits
//! of the dividend.

use super::precision::{scale_up_checked, scale_up_wrapping};
use crate::digit::{Digit, DoubleDigit, DIGIT_BITS};
use crate::{Decimal, DivisionResult, Error, Result, Unsigned};

/// Largest magnitude a quotient of one sign may reach, split as
/// `limit = 10 * quotient + digit` so one more digit step can be checked
/// before it is taken.
struct Ceiling<const L: usize> {
    limit: Unsigned<L>,
    quotient: Unsigned<L>,
    digit: Digit,
}

impl<const L: usize> Ceiling<L> {
    const fn of(limit: Unsigned<L>) -> Self {
        let mut cells = limit.0;
        let mut remainder: DoubleDigit = 0;
        let mut i = L;
        while i > 0 {
            i -= 1;
            let acc = (remainder << DIGIT_BITS) | cells[i] as DoubleDigit;
            cells[i] = (acc / 10) as Digit;
            remainder = acc % 10;
        }
        Self { limit, quotient: Unsigned(cells), digit: remainder as Digit }
    }

    /// Whether `10 * quotient + digit` stays within the limit.
    fn admits(&self, quotient: &Unsigned<L>, digit: Digit) -> bool {
        *quotient < self.quotient || (*quotient == self.quotient && digit <= self.digit)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Mode {
    Wrapping,
    Checked,
}

/// `(10 * remainder) / divisor` and `(10 * remainder) % divisor`.
///
/// Ten additions with conditional subtraction, as `10 * remainder` need not
/// fit. Requires `remainder < divisor <= 2^(BITS - 1)`.
fn next_digit<const L: usize>(remainder: &Unsigned<L>, divisor: &Unsigned<L>) -> (Digit, Unsigned<L>) {
    let mut digit = 0;
    let mut acc = Unsigned::zero();
    for _ in 0..10 {
        acc.wrapping_add_assign(remainder);
        if acc >= *divisor {
            acc.wrapping_sub_assign(divisor);
            digit += 1;
        }
    }
    (digit, acc)
}

impl<const L: usize> Decimal<L> {
    const POSITIVE_CEILING: Ceiling<L> = Ceiling::of(Unsigned::SIGNED_MAX);
    const NEGATIVE_CEILING: Ceiling<L> = Ceiling::of(Unsigned::SIGNED_MIN);

    /// Scales the dividend up by `10^(divisor.scale + precision)` in one go,
    /// then divides once.
    ///
    /// Fast, but wrong if that scaled dividend does not fit the width. The
    /// result scale saturates at `u32::MAX`.
    pub fn div_fast(&self, divisor: &Self, precision: u32) -> Result<Self> {
        if divisor.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let (mut dividend, dividend_negative) = self.value.abs();
        let (divisor_magnitude, divisor_negative) = divisor.value.abs();

        scale_up_wrapping(&mut dividend, divisor.scale.saturating_add(precision));
        let quotient = dividend.div_rem(&divisor_magnitude)?.quotient;

        let value = if dividend_negative != divisor_negative { quotient.wrapping_neg() } else { quotient };
        Ok(Self::new(value, self.scale.saturating_add(precision)))
    }

    /// Long division, one decimal digit per step.
    ///
    /// Never needs more room than the operands themselves; only a quotient
    /// that does not fit wraps. Scale sums saturate at `u32::MAX`.
    pub fn div_slow(&self, divisor: &Self, precision: u32) -> Result<Self> {
        self.long_division(divisor, precision, Mode::Wrapping)
    }

    /// Like [`Self::div_slow`], but each digit step is checked against the
    /// largest quotient of the result's sign, failing with
    /// [`Error::Overflow`] instead of wrapping.
    pub fn checked_div(&self, divisor: &Self, precision: u32) -> Result<Self> {
        self.long_division(divisor, precision, Mode::Checked)
    }

    fn long_division(&self, divisor: &Self, precision: u32, mode: Mode) -> Result<Self> {
        if divisor.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let overflow = || {
            debug!("decimal division overflows");
            Error::Overflow
        };
        let (scale, steps) = match mode {
            Mode::Wrapping => (self.scale.saturating_add(precision), divisor.scale.saturating_add(precision)),
            Mode::Checked => (
                self.scale.checked_add(precision).ok_or_else(overflow)?,
                divisor.scale.checked_add(precision).ok_or_else(overflow)?,
            ),
        };

        let (dividend, dividend_negative) = self.value.abs();
        let (divisor, divisor_negative) = divisor.value.abs();
        let negative = dividend_negative != divisor_negative;
        let ceiling = if negative { &Self::NEGATIVE_CEILING } else { &Self::POSITIVE_CEILING };

        let DivisionResult { mut quotient, mut remainder } = dividend.div_rem(&divisor)?;
        if mode == Mode::Checked && quotient > ceiling.limit {
            return Err(overflow());
        }

        let mut remaining = steps;
        while remaining > 0 && !remainder.is_zero() {
            let (digit, next) = next_digit(&remainder, &divisor);
            if mode == Mode::Checked && !ceiling.admits(&quotient, digit) {
                return Err(overflow());
            }
            quotient.mul_digit_assign(10);
            quotient.add_digit_assign(digit);
            remainder = next;
            remaining -= 1;
        }

        // exact from here on, the remaining digits are zeros
        match mode {
            Mode::Wrapping => scale_up_wrapping(&mut quotient, remaining),
            Mode::Checked => {
                quotient = scale_up_checked(&quotient, remaining)
                    .filter(|quotient| *quotient <= ceiling.limit)
                    .ok_or_else(overflow)?;
            }
        }

        let value = if negative { quotient.wrapping_neg() } else { quotient };
        Ok(Self::new(value, scale))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const L: usize = 128 / DIGIT_BITS;
    type U128 = Unsigned<L>;
    type D128 = Decimal<L>;

    fn d(s: &str) -> D128 {
        s.parse().unwrap()
    }

    type Division = fn(&D128, &D128, u32) -> Result<D128>;
    const DIVISIONS: [Division; 3] = [D128::div_fast, D128::div_slow, D128::checked_div];

    #[test]
    fn ceilings() {
        let positive = &D128::POSITIVE_CEILING;
        assert_eq!(positive.digit, 7);
        assert_eq!(positive.quotient, U128::SIGNED_MAX.div_rem_digit(10).unwrap().0);
        let negative = &D128::NEGATIVE_CEILING;
        assert_eq!(negative.digit, 8);
        assert_eq!(negative.limit, U128::SIGNED_MIN);
    }

    #[test]
    fn exact() {
        for divide in DIVISIONS {
            let q = divide(&d("20"), &d("0.5"), 0).unwrap();
            assert_eq!(q.into_parts(), (U128::from_digit(40), 0));

            let q = divide(&d("1"), &d("3"), 5).unwrap();
            assert_eq!(q.into_parts(), (U128::from_digit(33333), 5));

            let q = divide(&d("-7"), &d("2"), 0).unwrap();
            assert_eq!(q, d("-3"));

            let q = divide(&d("-7.5"), &d("-0.25"), 1).unwrap();
            assert_eq!(q.into_parts(), (U128::from_digit(3000), 2));

            let q = divide(&d("2"), &d("-3"), 3).unwrap();
            assert_eq!(q, d("-0.666"));

            assert_eq!(divide(&d("1"), &d("0.000"), 2), Err(Error::DivisionByZero));
        }
    }

    #[test]
    fn fast_runs_out_of_room() {
        let dividend = d("1000000000000000000000000000000");
        let divisor = d("1.0000000000");
        assert_ne!(dividend.div_fast(&divisor, 0), Ok(dividend));
        assert_eq!(dividend.div_slow(&divisor, 0), Ok(dividend));
        assert_eq!(dividend.checked_div(&divisor, 0), Ok(dividend));
    }

    #[test]
    fn slow_handles_wide_divisors() {
        // 10 * remainder overflows here unless the digit step avoids it
        let divisor = D128::new(U128::SIGNED_MAX, 0);
        let dividend = D128::new(U128::SIGNED_MAX.wrapping_sub(&U128::one()), 0);
        let q = dividend.div_slow(&divisor, 3).unwrap();
        assert_eq!(q.into_parts(), (U128::from_digit(999), 3));
        assert_eq!(dividend.checked_div(&divisor, 3), Ok(q));
    }

    #[test]
    fn checked_boundaries() {
        let max = D128::new(U128::SIGNED_MAX, 0);
        let min = D128::new(U128::SIGNED_MIN, 0);
        let one = d("1.0");

        // the last digit step lands exactly on the limit
        assert_eq!(max.checked_div(&one, 0).map(|q| q.into_parts()), Ok((U128::SIGNED_MAX, 0)));
        assert_eq!(min.checked_div(&one, 0).map(|q| q.into_parts()), Ok((U128::SIGNED_MIN, 0)));
        // and one past it
        assert_eq!(min.checked_div(&-one, 0), Err(Error::Overflow));
        assert_eq!(min.checked_div(&-D128::one(), 0), Err(Error::Overflow));

        assert_eq!(max.checked_div(&d("0.1"), 0), Err(Error::Overflow));
        assert_eq!(d("1").checked_div(&d("3"), 40), Err(Error::Overflow));
        assert_eq!(d("1").checked_div(&d("1"), 38).map(|q| q.scale()), Ok(38));
        assert_eq!(d("1").checked_div(&d("1"), 39), Err(Error::Overflow));
    }

    #[test]
    fn checked_scale_overflow() {
        let x = D128::new(U128::one(), u32::MAX);
        assert_eq!(x.checked_div(&D128::one(), 1), Err(Error::Overflow));
        assert_eq!(x.div_slow(&D128::one(), 1).map(|q| q.scale()), Ok(u32::MAX));
    }
}
