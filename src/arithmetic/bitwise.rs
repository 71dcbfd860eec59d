use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

use crate::digit::{Digit, DIGIT_BITS};
use crate::Unsigned;

/// Single bits, addressed from the least significant bit 0.
///
/// Indices past the width read as unset and are ignored on write.
impl<const L: usize> Unsigned<L> {
    pub fn bit(&self, index: usize) -> bool {
        match self.0.get(index / DIGIT_BITS) {
            Some(digit) => (digit >> (index % DIGIT_BITS)) & 1 == 1,
            None => false,
        }
    }

    pub fn set_bit(&mut self, index: usize) {
        if let Some(digit) = self.0.get_mut(index / DIGIT_BITS) {
            *digit |= (1 as Digit) << (index % DIGIT_BITS);
        }
    }

    pub fn clear_bit(&mut self, index: usize) {
        if let Some(digit) = self.0.get_mut(index / DIGIT_BITS) {
            *digit &= !((1 as Digit) << (index % DIGIT_BITS));
        }
    }
}

macro_rules! digitwise {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $symbol:tt) => {
        impl<const L: usize> $OpAssign<&Self> for Unsigned<L> {
            fn $op_assign(&mut self, other: &Self) {
                for (a, b) in self.0.iter_mut().zip(other.0.iter()) {
                    *a $symbol *b;
                }
            }
        }

        impl<const L: usize> $OpAssign for Unsigned<L> {
            fn $op_assign(&mut self, other: Self) {
                *self $symbol &other;
            }
        }

        impl<const L: usize> $Op for &Unsigned<L> {
            type Output = Unsigned<L>;

            fn $op(self, other: Self) -> Self::Output {
                let mut result = *self;
                result $symbol other;
                result
            }
        }

        impl<const L: usize> $Op for Unsigned<L> {
            type Output = Self;

            fn $op(mut self, other: Self) -> Self::Output {
                self $symbol &other;
                self
            }
        }
    };
}

digitwise!(BitAnd, bitand, BitAndAssign, bitand_assign, &=);
digitwise!(BitOr, bitor, BitOrAssign, bitor_assign, |=);
digitwise!(BitXor, bitxor, BitXorAssign, bitxor_assign, ^=);

impl<const L: usize> Not for &Unsigned<L> {
    type Output = Unsigned<L>;

    fn not(self) -> Self::Output {
        let mut result = *self;
        result.0.iter_mut().for_each(|digit| *digit = !*digit);
        result
    }
}

impl<const L: usize> Not for Unsigned<L> {
    type Output = Self;

    fn not(self) -> Self::Output {
        !&self
    }
}
