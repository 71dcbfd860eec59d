use core::ops::{Shl, ShlAssign, Shr, ShrAssign};

use crate::digit::{split, Digit, DIGIT_BITS};
use crate::Unsigned;

impl<const L: usize> Unsigned<L> {
    /// Truncating left shift: bits moved past the top are lost, shifting by
    /// `BITS` or more gives zero.
    ///
    /// Note that "left" means "higher number".
    pub fn wrapping_shl(&self, bits: usize) -> Self {
        if bits >= Self::BITS {
            return Self::zero();
        }
        let (n_digits, n_bits) = (bits / DIGIT_BITS, bits % DIGIT_BITS);

        let mut shifted = [0 as Digit; L];
        for (i, &digit) in self.0[..L - n_digits].iter().enumerate() {
            // the top `n_bits` cross into the next digit up
            let (hi, lo) = split(digit, DIGIT_BITS - n_bits);
            shifted[i + n_digits] |= lo << n_bits;
            if let Some(next) = shifted.get_mut(i + n_digits + 1) {
                *next |= hi;
            }
        }
        Self(shifted)
    }

    /// Logical right shift, shifting by `BITS` or more gives zero.
    ///
    /// Note that "right" means "lower number".
    pub fn wrapping_shr(&self, bits: usize) -> Self {
        if bits >= Self::BITS {
            return Self::zero();
        }
        let (n_digits, n_bits) = (bits / DIGIT_BITS, bits % DIGIT_BITS);

        let mut shifted = [0 as Digit; L];
        for (i, &digit) in self.0.iter().enumerate().skip(n_digits) {
            // the low `n_bits` cross into the next digit down
            let (hi, lo) = split(digit, n_bits);
            shifted[i - n_digits] |= hi;
            if i > n_digits && n_bits > 0 {
                shifted[i - n_digits - 1] |= lo << (DIGIT_BITS - n_bits);
            }
        }
        Self(shifted)
    }
}

impl<const L: usize> ShlAssign<usize> for Unsigned<L> {
    #[inline]
    fn shl_assign(&mut self, bits: usize) {
        *self = self.wrapping_shl(bits);
    }
}

impl<const L: usize> ShrAssign<usize> for Unsigned<L> {
    #[inline]
    fn shr_assign(&mut self, bits: usize) {
        *self = self.wrapping_shr(bits);
    }
}

impl<const L: usize> Shl<usize> for &Unsigned<L> {
    type Output = Unsigned<L>;

    #[inline]
    fn shl(self, bits: usize) -> Self::Output {
        self.wrapping_shl(bits)
    }
}

impl<const L: usize> Shl<usize> for Unsigned<L> {
    type Output = Self;

    #[inline]
    fn shl(self, bits: usize) -> Self::Output {
        self.wrapping_shl(bits)
    }
}

impl<const L: usize> Shr<usize> for &Unsigned<L> {
    type Output = Unsigned<L>;

    #[inline]
    fn shr(self, bits: usize) -> Self::Output {
        self.wrapping_shr(bits)
    }
}

impl<const L: usize> Shr<usize> for Unsigned<L> {
    type Output = Self;

    #[inline]
    fn shr(self, bits: usize) -> Self::Output {
        self.wrapping_shr(bits)
    }
}
