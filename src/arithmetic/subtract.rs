use core::ops::{Sub, SubAssign};

use crate::digit::{sbb, Digit, SignedDoubleDigit};
use crate::Unsigned;

// A non-zero borrow (if a.len() == b.len()) is -1, which as unsigned is
// the same as "all bits set", i.e., 0xFFFF_FFFF for Digit = u32
pub(crate) fn sub_assign_borrow(a: &mut [Digit], b: &[Digit]) -> Digit {
    debug_assert!(a.len() >= b.len());
    let mut borrow: SignedDoubleDigit = 0;

    let (a_lo, a_hi) = a.split_at_mut(b.len());

    for (a, b) in a_lo.iter_mut().zip(b) {
        *a = sbb(*a, *b, &mut borrow);
    }

    if borrow != 0 {
        for a in a_hi {
            *a = sbb(*a, 0, &mut borrow);
            if borrow == 0 {
                break;
            }
        }
    }

    borrow as Digit
}

impl<const L: usize> Unsigned<L> {
    /// Difference and whether it wrapped (i.e., `subtrahend > self`).
    pub fn overflowing_sub(&self, subtrahend: &Self) -> (Self, bool) {
        let mut difference = *self;
        let borrow = sub_assign_borrow(&mut difference.0, &subtrahend.0);
        (difference, borrow != 0)
    }

    pub fn checked_sub(&self, subtrahend: &Self) -> Option<Self> {
        let (difference, borrowed) = self.overflowing_sub(subtrahend);
        (!borrowed).then(|| difference)
    }

    pub fn wrapping_sub_assign(&mut self, subtrahend: &Self) {
        sub_assign_borrow(&mut self.0, &subtrahend.0);
    }

    pub fn wrapping_sub(&self, subtrahend: &Self) -> Self {
        let mut difference = *self;
        difference.wrapping_sub_assign(subtrahend);
        difference
    }

    /// `self = lhs - rhs`; `self` may be either operand's former home.
    pub fn sub_triop(&mut self, lhs: &Self, rhs: &Self) {
        *self = lhs.wrapping_sub(rhs);
    }
}

impl<const L: usize> SubAssign<&Self> for Unsigned<L> {
    fn sub_assign(&mut self, subtrahend: &Self) {
        self.wrapping_sub_assign(subtrahend);
    }
}

impl<const L: usize> SubAssign for Unsigned<L> {
    fn sub_assign(&mut self, subtrahend: Self) {
        self.wrapping_sub_assign(&subtrahend);
    }
}

impl<const L: usize> Sub for &Unsigned<L> {
    type Output = Unsigned<L>;

    fn sub(self, subtrahend: Self) -> Self::Output {
        self.wrapping_sub(subtrahend)
    }
}

impl<const L: usize> Sub for Unsigned<L> {
    type Output = Self;

    fn sub(self, subtrahend: Self) -> Self::Output {
        self.wrapping_sub(&subtrahend)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const M: Digit = Digit::MAX;

    #[test]
    fn ripple_borrow() {
        let a = Unsigned([0, 0, 1]);
        let b = Unsigned::from_digit(1);
        assert_eq!(&a - &b, Unsigned([M, M, 0]));
        assert_eq!(a.checked_sub(&b), Some(Unsigned([M, M, 0])));
    }

    #[test]
    fn wraps() {
        let zero = Unsigned::<2>::zero();
        let (difference, borrowed) = zero.overflowing_sub(&Unsigned::one());
        assert!(borrowed);
        assert_eq!(difference, Unsigned::<2>::MAX);
        assert_eq!(zero.checked_sub(&Unsigned::one()), None);
    }

    #[test]
    fn triop() {
        let mut x = Unsigned([3, 3]);
        let y = x;
        x.sub_triop(&y, &Unsigned([4, 1]));
        assert_eq!(x, Unsigned([M, 1]));

        let mut z = x;
        z -= Unsigned([M, 1]);
        assert!(z.is_zero());
    }
}
