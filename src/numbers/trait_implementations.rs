use core::{cmp::Ordering, ops::{Deref, DerefMut}};

use super::{Product, Unsigned};
use crate::digit::Digit;

impl<const L: usize> Deref for Unsigned<L> {
    type Target = [Digit];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const L: usize> DerefMut for Unsigned<L> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<const L: usize> AsRef<[Digit]> for Unsigned<L> {
    fn as_ref(&self) -> &[Digit] {
        &self.0
    }
}

impl<const L: usize> Default for Unsigned<L> {
    fn default() -> Self {
        Self([0; L])
    }
}

/// Fails for L = 0, bound not expressable.
impl<const L: usize> From<Digit> for Unsigned<L> {
    fn from(digit: Digit) -> Self {
        Self::from_digit(digit)
    }
}

impl<const L: usize> From<[Digit; L]> for Unsigned<L> {
    fn from(cells: [Digit; L]) -> Self {
        Self(cells)
    }
}

impl<const L: usize> From<Unsigned<L>> for [Digit; L] {
    fn from(unsigned: Unsigned<L>) -> Self {
        unsigned.0
    }
}

/// This is *little endian* ordering, as opposed to the default
/// ordering on arrays and slices!
pub(crate) fn cmp_digits(m: &[Digit], n: &[Digit]) -> Ordering {
    debug_assert_eq!(m.len(), n.len());
    for (a, b) in m.iter().rev().zip(n.iter().rev()) {
        match a.cmp(b) {
            Ordering::Equal => (),
            not_equal => return not_equal,
        }
    }
    Ordering::Equal
}

// Since we store little-endian, comparison needs to start at the last
// digit, instead of at the first as the derived / default implementation would.
impl<const L: usize> Ord for Unsigned<L> {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_digits(&self.0, &other.0)
    }
}

impl<const L: usize> PartialOrd for Unsigned<L> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const M: usize, const N: usize> Ord for Product<M, N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.hi.cmp(&other.hi).then_with(|| self.lo.cmp(&other.lo))
    }
}

impl<const M: usize, const N: usize> PartialOrd for Product<M, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
