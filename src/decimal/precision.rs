//! Changing the scale: multiplying or dividing the magnitude by powers of ten.

use crate::digit::Digit;
use crate::{Decimal, Error, Result, Unsigned};

/// One multiply or divide while moving between scales.
///
/// Picked from the number of digits still to go, largest step that does not
/// overshoot:
///
/// | remaining | step        | factor |
/// |-----------|-------------|--------|
/// | 0         | done        |        |
/// | 1         | `Tens`      | 10     |
/// | 2         | `Hundreds`  | 100    |
/// | ≥ 3       | `Thousands` | 1000   |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Step {
    Tens,
    Hundreds,
    Thousands,
}

impl Step {
    pub fn next(remaining: u32) -> Option<Self> {
        match remaining {
            0 => None,
            1 => Some(Step::Tens),
            2 => Some(Step::Hundreds),
            _ => Some(Step::Thousands),
        }
    }

    pub fn factor(self) -> Digit {
        match self {
            Step::Tens => 10,
            Step::Hundreds => 100,
            Step::Thousands => 1000,
        }
    }

    pub fn digits(self) -> u32 {
        match self {
            Step::Tens => 1,
            Step::Hundreds => 2,
            Step::Thousands => 3,
        }
    }
}

// log2(10) and log10(2) in Q16, rounded down and up
const LOG2_10_FLOOR: u64 = 217_705;
const LOG2_10_CEIL: u64 = 217_706;
pub(crate) const LOG10_2_FLOOR: i64 = 19_728;
pub(crate) const LOG10_2_CEIL: i64 = 19_729;

/// Lower and upper bound on the bit length of `10^digits`, minus one.
fn pow10_bits(digits: u32) -> (usize, usize) {
    let digits = digits as u64;
    let floor = (digits * LOG2_10_FLOOR) >> 16;
    let ceil = (digits * LOG2_10_CEIL + 0xFFFF) >> 16;
    (floor as usize, ceil as usize)
}

/// `magnitude * 10^digits` modulo the width.
pub(crate) fn scale_up_wrapping<const L: usize>(magnitude: &mut Unsigned<L>, digits: u32) {
    // 10^digits is a multiple of 2^digits
    if digits as usize >= Unsigned::<L>::BITS {
        *magnitude = Unsigned::zero();
        return;
    }
    let mut remaining = digits;
    while let Some(step) = Step::next(remaining) {
        magnitude.mul_digit_assign(step.factor());
        remaining -= step.digits();
    }
}

/// `magnitude * 10^digits`, `None` if it does not fit the unsigned width.
pub(crate) fn scale_up_checked<const L: usize>(magnitude: &Unsigned<L>, digits: u32) -> Option<Unsigned<L>> {
    if digits == 0 || magnitude.is_zero() {
        return Some(*magnitude);
    }
    // magnitude < 2^(msb + 1) and 2^floor < 10^digits < 2^ceil
    let (floor, ceil) = pow10_bits(digits);
    let msb = magnitude.msb();
    if ceil <= magnitude.leading_zeros() {
        let mut x = *magnitude;
        scale_up_wrapping(&mut x, digits);
        return Some(x);
    }
    if msb + floor >= Unsigned::<L>::BITS {
        return None;
    }
    // close call, do it exactly
    let mut x = *magnitude;
    let mut remaining = digits;
    while let Some(step) = Step::next(remaining) {
        if x.mul_digit_assign(step.factor()) != 0 {
            return None;
        }
        remaining -= step.digits();
    }
    Some(x)
}

/// `magnitude / 10^digits` rounded toward zero. Returns whether anything
/// nonzero was discarded.
pub(crate) fn scale_down<const L: usize>(magnitude: &mut Unsigned<L>, digits: u32) -> bool {
    let mut discarded = false;
    let mut remaining = digits;
    while let Some(step) = Step::next(remaining) {
        if magnitude.is_zero() {
            break;
        }
        let l = magnitude.significant_len();
        let remainder = crate::arithmetic::div_rem_assign_digit(&mut magnitude.0[..l], step.factor());
        discarded |= remainder != 0;
        remaining -= step.digits();
    }
    discarded
}

impl<const L: usize> Decimal<L> {
    /// Moves to scale `target`, wrapping on the way up and truncating toward
    /// zero on the way down.
    pub fn rescale(&mut self, target: u32) {
        let (mut magnitude, negative) = self.value.abs();
        if target >= self.scale {
            scale_up_wrapping(&mut magnitude, target - self.scale);
        } else {
            scale_down(&mut magnitude, self.scale - target);
        }
        self.value = if negative { magnitude.wrapping_neg() } else { magnitude };
        self.scale = target;
    }

    /// The same number at scale `target`, or [`Error::Overflow`] if it would
    /// leave the signed range. Lowering the scale truncates and never fails.
    pub fn checked_rescale(&self, target: u32) -> Result<Self> {
        if target <= self.scale {
            let mut x = *self;
            x.truncate(target);
            return Ok(x);
        }
        let (magnitude, negative) = self.value.abs();
        scale_up_checked(&magnitude, target - self.scale)
            // leaves the top bit for the sign
            .filter(|x| !x.is_negative())
            .and_then(|x| Unsigned::from_sign_magnitude(&x, negative))
            .map(|value| Self::new(value, target))
            .ok_or_else(|| {
                debug!("rescale from {} to {} overflows", self.scale, target);
                Error::Overflow
            })
    }

    /// Lowers the scale to `target`, rounding toward zero, and reports whether
    /// nonzero digits were dropped. Does nothing if `target` is not lower.
    pub fn truncate(&mut self, target: u32) -> bool {
        if target >= self.scale {
            return false;
        }
        let (mut magnitude, negative) = self.value.abs();
        let discarded = scale_down(&mut magnitude, self.scale - target);
        self.value = if negative { magnitude.wrapping_neg() } else { magnitude };
        self.scale = target;
        discarded
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::digit::DIGIT_BITS;

    const L: usize = 128 / DIGIT_BITS;
    type U128 = Unsigned<L>;
    type D128 = Decimal<L>;

    fn d(s: &str) -> D128 {
        s.parse().unwrap()
    }

    #[test]
    fn steps() {
        let mut remaining = 7;
        let mut taken = [Step::Tens; 4];
        let mut n = 0;
        while let Some(step) = Step::next(remaining) {
            taken[n] = step;
            n += 1;
            remaining -= step.digits();
        }
        assert_eq!(&taken[..n], &[Step::Thousands, Step::Thousands, Step::Tens]);
        assert_eq!(Step::next(2), Some(Step::Hundreds));
        assert_eq!(Step::next(0), None);
    }

    #[test]
    fn pow10_bounds() {
        // 10^d has bit length floor(d log2 10) + 1
        let mut p: u128 = 1;
        for d in 0..=38u32 {
            let (floor, ceil) = pow10_bits(d);
            let msb = 127 - p.leading_zeros() as usize;
            assert!(floor <= msb, "{}", d);
            assert!(msb < ceil.max(1), "{}", d);
            p = p.wrapping_mul(10);
        }
    }

    #[test]
    fn rescale() {
        let mut x = d("-1.5");
        x.rescale(4);
        assert_eq!(x.into_parts(), (U128::from_digit(15000).wrapping_neg(), 4));
        x.rescale(0);
        assert_eq!(x.into_parts(), (U128::one().wrapping_neg(), 0));

        let mut x = d("123.456");
        x.rescale(1);
        assert_eq!(x.into_parts(), (U128::from_digit(1234), 1));

        let mut x = d("7");
        x.rescale(500);
        assert!(x.is_zero());
    }

    #[test]
    fn truncate() {
        let mut x = d("-2.50");
        assert!(!x.truncate(1));
        assert_eq!(x.into_parts(), (U128::from_digit(25).wrapping_neg(), 1));
        assert!(x.truncate(0));
        assert_eq!(x.into_parts(), (U128::from_digit(2).wrapping_neg(), 0));
        assert!(!x.truncate(3));
        assert_eq!(x.scale(), 0);
    }

    #[test]
    fn checked_rescale() {
        // 10^38 < 2^127 < 10^39
        let one = D128::one();
        assert_eq!(one.checked_rescale(38).map(|x| x.scale()), Ok(38));
        assert_eq!(one.checked_rescale(39), Err(Error::Overflow));

        let x = d("-1.7");
        assert_eq!(x.checked_rescale(3), Ok(d("-1.700")));
        assert_eq!(x.checked_rescale(3).map(|x| x.scale()), Ok(3));
        assert_eq!(x.checked_rescale(0), Ok(d("-1")));

        let zero = D128::zero();
        assert_eq!(zero.checked_rescale(4000).map(|x| x.scale()), Ok(4000));

        // the receiver is untouched on failure
        let big = D128::new(U128::SIGNED_MAX, 0);
        assert_eq!(big.checked_rescale(1), Err(Error::Overflow));
        assert_eq!(*big.value(), U128::SIGNED_MAX);
    }

    #[test]
    fn checked_rescale_boundary() {
        // largest k with k * 10 < 2^127, reached only through the exact path
        let limit = U128::SIGNED_MAX.div_rem_digit(10).unwrap().0;
        let x = D128::new(limit, 0);
        assert!(x.checked_rescale(1).is_ok());
        let x = D128::new(limit.wrapping_add(&U128::one()), 0);
        assert_eq!(x.checked_rescale(1), Err(Error::Overflow));
        let x = D128::new(limit.wrapping_add(&U128::one()).wrapping_neg(), 0);
        assert_eq!(x.checked_rescale(1), Err(Error::Overflow));
    }

    #[test]
    fn scale_helpers() {
        let mut x = U128::from_digit(123_456);
        assert!(scale_down(&mut x, 2));
        assert_eq!(x, U128::from_digit(1234));
        assert!(!scale_down(&mut U128::from_digit(1200), 2));
        assert_eq!(scale_up_checked(&U128::MAX, 1), None);
        assert_eq!(scale_up_checked(&U128::from_digit(5), 2), Some(U128::from_digit(500)));
    }
}
