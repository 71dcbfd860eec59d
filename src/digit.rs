//! The cell, and the handful of single-cell operations everything else is built on.

/// A word on the machine. [`Unsigned`][crate::Unsigned] is composed of many digits.
///
/// Feature `u32` forces the digit to be 32-bit even on 64-bit architectures,
/// feature `u64` forces the digit to be 64-bit even on 32-bit architectures.
///
/// This is done only for easier testing (typically embedded targets are 32 bit,
/// while desktop/server targets as 64 bit).
pub type Digit = digit::Digit;

/// Unsigned type with twice as many bits as [`Digit`].
pub type DoubleDigit = digit::DoubleDigit;
/// Signed type with twice as many bits as [`Digit`].
pub type SignedDoubleDigit = digit::SignedDoubleDigit;

/// Bits in a [`Digit`].
pub const DIGIT_BITS: usize = Digit::BITS as usize;
/// Bytes in a [`Digit`].
pub const DIGIT_BYTES: usize = DIGIT_BITS / 8;

#[cfg(not(any(feature = "u32", feature = "u64")))]
compile_error!("Either feature u32 or feature u64!");

#[cfg(all(feature = "u32", feature = "u64"))]
compile_error!("Either feature u32 or feature u64, not both!");

/// Largest power of ten that fits in a [`Digit`], for printing a digit's worth at a time.
pub const DECIMAL_CHUNK: Digit = digit::DECIMAL_CHUNK;
/// Its number of zeros.
pub const DECIMAL_CHUNK_DIGITS: usize = digit::DECIMAL_CHUNK_DIGITS;

#[cfg(feature = "u32")]
mod digit {
    pub type Digit = u32;
    pub type DoubleDigit = u64;
    pub type SignedDoubleDigit = i64;

    pub const DECIMAL_CHUNK: Digit = 1_000_000_000;
    pub const DECIMAL_CHUNK_DIGITS: usize = 9;
}

#[cfg(feature = "u64")]
mod digit {
    pub type Digit = u64;
    pub type DoubleDigit = u128;
    pub type SignedDoubleDigit = i128;

    pub const DECIMAL_CHUNK: Digit = 10_000_000_000_000_000_000;
    pub const DECIMAL_CHUNK_DIGITS: usize = 19;
}

/// Add with carry: returns the low digit of `a + b + acc`, leaves the carry in `acc`.
#[inline]
pub fn adc(a: Digit, b: Digit, acc: &mut DoubleDigit) -> Digit {
    *acc += a as DoubleDigit;
    *acc += b as DoubleDigit;
    let lo = *acc as Digit;
    *acc >>= DIGIT_BITS;
    lo
}

/// Subtract with borrow: returns the low digit of `a - b + acc`,
/// leaves the borrow (0 or -1) in `acc`.
#[inline]
pub fn sbb(a: Digit, b: Digit, acc: &mut SignedDoubleDigit) -> Digit {
    *acc += a as SignedDoubleDigit;
    *acc -= b as SignedDoubleDigit;
    let lo = *acc as Digit;
    *acc >>= DIGIT_BITS;
    lo
}

/// Splits `x` at bit position `at` into `(hi, lo)`, where `lo` holds the
/// lowest `at` bits and `hi` the remaining ones, shifted down.
///
/// `at` may be anything in `0..=DIGIT_BITS`.
#[inline]
pub fn split(x: Digit, at: usize) -> (Digit, Digit) {
    debug_assert!(at <= DIGIT_BITS);
    if at >= DIGIT_BITS {
        return (0, x);
    }
    let mask = ((1 as Digit) << at) - 1;
    (x >> at, x & mask)
}

/// Full product of two digits as `(lo, hi)`.
#[inline]
pub fn widening_mul(a: Digit, b: Digit) -> (Digit, Digit) {
    let product = (a as DoubleDigit) * (b as DoubleDigit);
    (product as Digit, (product >> DIGIT_BITS) as Digit)
}

/// Index of the most significant set bit, 0 if `x == 0`.
#[inline]
pub fn msb(x: Digit) -> usize {
    if x == 0 {
        0
    } else {
        DIGIT_BITS - 1 - x.leading_zeros() as usize
    }
}

/// Divide a two digit numerator by a one digit divisor, returns quotient and remainder:
///
/// Note: the caller must ensure that the quotient fits into a single digit,
/// which holds whenever `hi < divisor`.
///
/// REMARK: This is Knuth's operation c0), "memorizing the multiplication table in reverse."
#[inline]
pub fn div_digits(hi: Digit, lo: Digit, divisor: Digit) -> (Digit, Digit) {
    debug_assert!(hi < divisor);

    let x = ((hi as DoubleDigit) << DIGIT_BITS) + lo as DoubleDigit;
    let divisor = divisor as DoubleDigit;

    ((x / divisor) as Digit, (x % divisor) as Digit)
}
