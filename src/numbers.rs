use zeroize::Zeroize;

use crate::digit::{self, Digit, DIGIT_BITS, DIGIT_BYTES};
use crate::{Error, Result};

mod trait_implementations;

/// Unsigned integer with `L` digits (L for length).
///
/// Internal representation as little-endian: `self.0[0]` is the least
/// significant digit. All arithmetic wraps around $2^{\text{BITS}}$ unless
/// a `checked_*` variant is used.
///
/// Two's-complement signedness is an interpretation, not a field; see
/// [`Signed`][crate::Signed].
#[derive(Clone, Copy, Eq, Hash, PartialEq, Zeroize)]
pub struct Unsigned<const L: usize>(pub(crate) [Digit; L]);

// c'tors and such
impl<const L: usize> Unsigned<L> {
    /// Width in bits.
    pub const BITS: usize = L * DIGIT_BITS;
    /// Length of the raw little-endian byte representation.
    pub const BYTES: usize = L * DIGIT_BYTES;

    pub const ZERO: Self = Self([0; L]);
    pub const ONE: Self = Self::from_digit(1);
    pub const MAX: Self = Self([Digit::MAX; L]);

    pub const fn zero() -> Self {
        Self::ZERO
    }

    pub const fn one() -> Self {
        Self::ONE
    }

    /// Fails for L = 0, bound not expressable.
    pub const fn from_digit(digit: Digit) -> Self {
        let mut cells = [0; L];
        cells[0] = digit;
        Self(cells)
    }

    /// Zero-extends, or truncates to the low 32 bits if `L = 1` and the digit is `u32`.
    pub fn from_u64(value: u64) -> Self {
        let mut x = Self::zero();
        let mut value = value as u128;
        for cell in x.0.iter_mut() {
            *cell = value as Digit;
            value >>= DIGIT_BITS;
        }
        x
    }

    pub const fn from_cells(cells: [Digit; L]) -> Self {
        Self(cells)
    }

    /// Cells beyond `L` are dropped (reduction modulo $2^{\text{BITS}}$).
    pub fn from_slice(slice: &[Digit]) -> Self {
        let mut x = Self::zero();
        let l = slice.len().min(L);
        x.0[..l].copy_from_slice(&slice[..l]);
        x
    }

    /// Restores from exactly [`Self::BYTES`] little-endian bytes.
    pub fn from_le_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != Self::BYTES {
            return Err(Error::InvalidLength);
        }
        let mut x = Self::zero();
        for (cell, chunk) in x.0.iter_mut().zip(bytes.chunks_exact(DIGIT_BYTES)) {
            let mut word = [0u8; DIGIT_BYTES];
            word.copy_from_slice(chunk);
            *cell = Digit::from_le_bytes(word);
        }
        Ok(x)
    }

    /// Dumps [`Self::BYTES`] little-endian bytes to the front of `dst`.
    pub fn write_le_bytes(&self, dst: &mut [u8]) -> Result<usize> {
        if dst.len() < Self::BYTES {
            return Err(Error::BufferTooSmall);
        }
        for (cell, chunk) in self.0.iter().zip(dst.chunks_exact_mut(DIGIT_BYTES)) {
            chunk.copy_from_slice(&cell.to_le_bytes());
        }
        Ok(Self::BYTES)
    }

    pub fn cells(&self) -> &[Digit; L] {
        &self.0
    }

    pub fn cells_mut(&mut self) -> &mut [Digit; L] {
        &mut self.0
    }

    pub fn into_cells(self) -> [Digit; L] {
        self.0
    }

    /// Number of significant digits: 0 if zero, else index + 1 of the last
    /// non-zero digit. The capacity is always `L`.
    pub fn significant_len(&self) -> usize {
        self.0.iter()
            .enumerate().rev()
            .find(|(_, &x)| x != 0)
            .map(|(i, _)| i + 1)
            .unwrap_or(0)
    }

    /// The non-zero prefix of the digits.
    pub fn significant_digits(&self) -> &[Digit] {
        &self.0[..self.significant_len()]
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&x| x == 0)
    }

    /// Fits in the lowest digit.
    pub fn is_digit(&self) -> bool {
        self.0[1..].iter().all(|&x| x == 0)
    }

    /// Index of the most significant set bit, 0 if zero.
    pub fn msb(&self) -> usize {
        match self.significant_len() {
            0 => 0,
            l => (l - 1) * DIGIT_BITS + digit::msb(self.0[l - 1]),
        }
    }

    /// Number of leading zero bits, `BITS` if zero.
    pub fn leading_zeros(&self) -> usize {
        if self.is_zero() {
            Self::BITS
        } else {
            Self::BITS - 1 - self.msb()
        }
    }
}

/// Product of two unsigned integers.
///
/// `Product<M, N>` is what `Unsigned<M + N>` would be, if const-generics on stable
/// would allow expressing this. This is a workaround type.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Zeroize)]
pub struct Product<const M: usize, const N: usize> {
    pub(crate) lo: Unsigned<M>,
    pub(crate) hi: Unsigned<N>,
}

/// `Product<L, L>`, the full result of multiplying two `Unsigned<L>`.
pub type Square<const L: usize> = Product<L, L>;

impl<const M: usize, const N: usize> Product<M, N> {
    pub fn from_parts(lo: Unsigned<M>, hi: Unsigned<N>) -> Self {
        Self { lo, hi }
    }

    /// The low `M` digits.
    pub fn lo(&self) -> &Unsigned<M> {
        &self.lo
    }

    /// The high `N` digits, i.e., what a truncating operation would lose.
    pub fn hi(&self) -> &Unsigned<N> {
        &self.hi
    }

    pub fn into_parts(self) -> (Unsigned<M>, Unsigned<N>) {
        (self.lo, self.hi)
    }

    /// Digit `i` of the combined little-endian representation.
    pub fn digit(&self, i: usize) -> Digit {
        if i < M { self.lo.0[i] } else { self.hi.0[i - M] }
    }

    pub(crate) fn digit_mut(&mut self, i: usize) -> &mut Digit {
        if i < M { &mut self.lo.0[i] } else { &mut self.hi.0[i - M] }
    }

    /// The low part, if nothing was lost.
    pub fn try_into_unsigned(&self) -> Result<Unsigned<M>> {
        if self.hi.is_zero() {
            Ok(self.lo)
        } else {
            Err(Error::Overflow)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn significant_len() {
        let x = Unsigned([0, 1, 0, 2, 0, 0]);
        assert_eq!(x.significant_len(), 4);
        // the slice behind `Deref` still has the full capacity
        assert_eq!(x.iter().count(), 6);
        assert_eq!(x.significant_digits(), &[0, 1, 0, 2]);

        let x = Unsigned([0, 0, 0]);
        assert_eq!(x.significant_len(), 0);
        assert!(x.is_zero());
    }

    #[test]
    fn msb_and_leading_zeros() {
        let zero = Unsigned::<4>::zero();
        assert_eq!(zero.msb(), 0);
        assert_eq!(zero.leading_zeros(), Unsigned::<4>::BITS);

        let one = Unsigned::<4>::one();
        assert_eq!(one.msb(), 0);
        assert_eq!(one.leading_zeros(), Unsigned::<4>::BITS - 1);

        let x = Unsigned([0, 0, 0b100, 0]);
        assert_eq!(x.msb(), 2 * DIGIT_BITS + 2);
        assert_eq!(x.leading_zeros(), DIGIT_BITS + DIGIT_BITS - 3);

        assert_eq!(Unsigned::<3>::MAX.leading_zeros(), 0);
    }

    #[test]
    fn from_u64() {
        let x = Unsigned::<4>::from_u64(0x1234_5678_9ABC_DEF0);
        let mut all = [0u8; 64];
        assert_eq!(x.write_le_bytes(&mut all), Ok(Unsigned::<4>::BYTES));
        assert_eq!(&all[..8], &0x1234_5678_9ABC_DEF0u64.to_le_bytes());
        assert!(all[8..].iter().all(|&b| b == 0));
    }

    #[test]
    fn raw_bytes() {
        // 128 bits, whatever the digit size
        let bytes = hex!("0102030405060708090a0b0c0d0e0f10");
        let l = 16 / DIGIT_BYTES;
        assert_eq!(l * DIGIT_BYTES, 16);

        match l {
            2 => {
                let x = Unsigned::<2>::from_le_bytes(&bytes).unwrap();
                let mut out = [0u8; 16];
                assert_eq!(x.write_le_bytes(&mut out), Ok(16));
                assert_eq!(out, bytes);
                assert_eq!(x.0[0] & 0xFF, 0x01);
            }
            4 => {
                let x = Unsigned::<4>::from_le_bytes(&bytes).unwrap();
                let mut out = [0u8; 16];
                assert_eq!(x.write_le_bytes(&mut out), Ok(16));
                assert_eq!(out, bytes);
                assert_eq!(x.0[0], 0x0403_0201);
            }
            _ => unreachable!(),
        }

        assert_eq!(Unsigned::<1>::from_le_bytes(&bytes), Err(Error::InvalidLength));
        let mut short = [0u8; 15];
        assert_eq!(Unsigned::<2>::from_u64(1).write_le_bytes(&mut short[..Unsigned::<2>::BYTES - 1]), Err(Error::BufferTooSmall));
    }

    #[test]
    fn from_slice_truncates() {
        let x = Unsigned::<2>::from_slice(&[1, 2, 3]);
        assert_eq!(x.cells(), &[1, 2]);
        let x = Unsigned::<3>::from_slice(&[7]);
        assert_eq!(x.into_cells(), [7, 0, 0]);
    }

    #[test]
    fn product() {
        let prod = Square::from_parts(Unsigned([1, 2, 3]), Unsigned([4, 5, 6]));
        assert_eq!(prod.digit(0), 1);
        assert_eq!(prod.digit(5), 6);
        assert_eq!(prod.try_into_unsigned(), Err(Error::Overflow));

        let prod = Square::from_parts(Unsigned([1, 2, 3]), Unsigned::zero());
        assert_eq!(prod.try_into_unsigned(), Ok(Unsigned([1, 2, 3])));
    }
}
