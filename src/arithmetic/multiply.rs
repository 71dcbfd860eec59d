use core::ops::{Mul, MulAssign};

use crate::digit::{widening_mul, Digit};
use crate::{Square, Unsigned};

/// Product-scanning (column-wise) schoolbook multiplication.
///
/// For each output column `k`, every cross product `lhs[i] * rhs[j]` with
/// `i + j == k` is added to a three digit accumulator `(c0, c1, c2)`: the low
/// half goes into `c0` with its carry into `c1`, the high half into `c1` with
/// its carry deferred into `c2`. After the column, `c0` is emitted and the
/// accumulator shifts down by one digit. The accumulator never overflows, so
/// there are no chained carries to lose.
///
/// Only the first `columns` digits are produced.
fn product_scan(lhs: &[Digit], rhs: &[Digit], columns: usize, mut emit: impl FnMut(usize, Digit)) {
    let (mut c0, mut c1, mut c2): (Digit, Digit, Digit) = (0, 0, 0);

    for k in 0..columns {
        for (i, &a) in lhs.iter().enumerate().take(k + 1) {
            let j = k - i;
            if j >= rhs.len() {
                continue;
            }
            let (lo, hi) = widening_mul(a, rhs[j]);

            let (sum, carry) = c0.overflowing_add(lo);
            c0 = sum;
            let (sum, carry_hi) = c1.overflowing_add(hi);
            let (sum, carry_lo) = sum.overflowing_add(carry as Digit);
            c1 = sum;
            c2 = c2.wrapping_add(carry_hi as Digit + carry_lo as Digit);
        }
        emit(k, c0);
        c0 = c1;
        c1 = c2;
        c2 = 0;
    }
}

impl<const L: usize> Unsigned<L> {
    /// The product modulo $2^{\text{BITS}}$.
    pub fn wrapping_mul(&self, factor: &Self) -> Self {
        let mut product = Self::zero();
        let (lhs, rhs) = (self.significant_digits(), factor.significant_digits());
        product_scan(lhs, rhs, L, |k, digit| product.0[k] = digit);
        product
    }

    /// The full product, low `L` digits in `lo`, the ones that would overflow in `hi`.
    pub fn widening_mul(&self, factor: &Self) -> Square<L> {
        let mut product = Square::default();
        let (lhs, rhs) = (self.significant_digits(), factor.significant_digits());
        product_scan(lhs, rhs, 2 * L, |k, digit| *product.digit_mut(k) = digit);
        product
    }

    pub fn checked_mul(&self, factor: &Self) -> Option<Self> {
        self.widening_mul(factor).try_into_unsigned().ok()
    }

    pub fn wrapping_mul_assign(&mut self, factor: &Self) {
        *self = self.wrapping_mul(factor);
    }

    /// `self = lhs * rhs`
    pub fn mul_triop(&mut self, lhs: &Self, rhs: &Self) {
        *self = lhs.wrapping_mul(rhs);
    }

    /// Multiplies in place by a single digit, returns the digit shifted out.
    pub fn mul_digit_assign(&mut self, factor: Digit) -> Digit {
        let mut carry: Digit = 0;
        for digit in self.0.iter_mut() {
            let (lo, hi) = widening_mul(*digit, factor);
            let (lo, overflowed) = lo.overflowing_add(carry);
            *digit = lo;
            // hi <= Digit::MAX - 1, so this cannot wrap
            carry = hi + overflowed as Digit;
        }
        carry
    }
}

impl<const L: usize> MulAssign<&Self> for Unsigned<L> {
    fn mul_assign(&mut self, factor: &Self) {
        self.wrapping_mul_assign(factor);
    }
}

impl<const L: usize> MulAssign for Unsigned<L> {
    fn mul_assign(&mut self, factor: Self) {
        self.wrapping_mul_assign(&factor);
    }
}

impl<const L: usize> Mul for &Unsigned<L> {
    type Output = Unsigned<L>;

    fn mul(self, factor: Self) -> Self::Output {
        self.wrapping_mul(factor)
    }
}

impl<const L: usize> Mul for Unsigned<L> {
    type Output = Self;

    fn mul(self, factor: Self) -> Self::Output {
        self.wrapping_mul(&factor)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    pub const N1: Digit = Digit::MAX;
    pub const N2: Digit = Digit::MAX - 1;
    pub const M: Digit = Digit::MAX;

    /// (a, b, a * b), all fitting in 7 digits
    pub const MUL_TRIPLES: &[(&[Digit], &[Digit], &[Digit])] = &[
        (&[], &[], &[]),
        (&[], &[1], &[]),
        (&[2], &[], &[]),
        (&[1], &[1], &[1]),
        (&[2], &[3], &[6]),
        (&[1], &[1, 1, 1], &[1, 1, 1]),
        (&[1, 2, 3], &[3], &[3, 6, 9]),
        (&[1, 1, 1], &[N1], &[N1, N1, N1]),
        (&[1, 2, 3], &[N1], &[N1, N2, N2, 2]),
        (&[1, 2, 3, 4], &[N1], &[N1, N2, N2, N2, 3]),
        (&[N1], &[N1], &[1, N2]),
        (&[N1, N1], &[N1], &[1, N1, N2]),
        (&[N1, N1, N1], &[N1], &[1, N1, N1, N2]),
        (&[N1, N1, N1, N1], &[N1], &[1, N1, N1, N1, N2]),
        (&[M / 2 + 1], &[2], &[0, 1]),
        (&[0, M / 2 + 1], &[2], &[0, 0, 1]),
        (&[1, 2], &[1, 2, 3], &[1, 4, 7, 6]),
        (&[N1, N1], &[N1, N1, N1], &[1, 0, N1, N2, N1]),
        (&[N1, N1, N1], &[N1, N1, N1, N1], &[1, 0, 0, N1, N2, N1, N1]),
        (&[0, 0, 1], &[1, 2, 3], &[0, 0, 1, 2, 3]),
        (&[0, 0, 1], &[0, 0, 0, 1], &[0, 0, 0, 0, 0, 1]),
    ];

    #[test]
    fn triples() {
        for &(a, b, c) in MUL_TRIPLES {
            let a = Unsigned::<7>::from_slice(a);
            let b = Unsigned::<7>::from_slice(b);
            let c = Unsigned::<7>::from_slice(c);
            assert_eq!(&a * &b, c);
            assert_eq!(&b * &a, c);
            assert_eq!(a.checked_mul(&b), Some(c));
        }
    }

    #[test]
    fn all_ones_squared() {
        // (2^BITS - 1)^2 = 2^(2 BITS) - 2^(BITS + 1) + 1
        let max = Unsigned::<4>::MAX;
        let square = max.widening_mul(&max);
        assert_eq!(square.lo(), &Unsigned::one());
        assert_eq!(square.hi(), &Unsigned([N2, M, M, M]));
        assert_eq!(max.wrapping_mul(&max), Unsigned::one());
        assert_eq!(max.checked_mul(&max), None);
    }

    #[test]
    fn thirty_two_bit_words() {
        let x = Unsigned::<4>::from_u64(0xFFFF_FFFF);
        assert_eq!(x * x, Unsigned::<4>::from_u64(0xFFFF_FFFE_0000_0001));
    }

    #[test]
    fn short_multiplication() {
        let mut x = Unsigned([M, M]);
        assert_eq!(x.mul_digit_assign(10), 9);
        assert_eq!(x, Unsigned([M - 9, M]));

        let mut x = Unsigned([7, 0]);
        assert_eq!(x.mul_digit_assign(1000), 0);
        assert_eq!(x, Unsigned([7000, 0]));
    }

    #[test]
    fn widening_keeps_overflow() {
        let a = Unsigned([0, 1]);
        let b = Unsigned([0, 3]);
        let product = a.widening_mul(&b);
        assert!(product.lo().is_zero());
        assert_eq!(product.hi(), &Unsigned([3, 0]));
        assert_eq!(a.checked_mul(&b), None);

        let mut c = Unsigned::zero();
        c.mul_triop(&a, &Unsigned::from_digit(5));
        assert_eq!(c, Unsigned([0, 5]));
    }
}
