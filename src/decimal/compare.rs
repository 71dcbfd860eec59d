//! Ordering across scales.
//!
//! Aligning two decimals to a common scale can overflow and costs a
//! multiplication per three digits, so cheaper stages go first:
//!
//! 1. equal scales compare the signed values directly;
//! 2. different signs (negative, zero, positive) decide immediately;
//! 3. disjoint order-of-magnitude intervals decide without arithmetic;
//! 4. otherwise the lower scale side is scaled up, if that fits;
//! 5. failing that, the higher scale side is truncated down, and a nonzero
//!    truncated remainder breaks a tie.

use core::cmp::Ordering;

use super::precision::{scale_down, scale_up_checked, LOG10_2_CEIL, LOG10_2_FLOOR};
use crate::{Decimal, Unsigned};

#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
enum Sign {
    Negative,
    Zero,
    Positive,
}

impl<const L: usize> Decimal<L> {
    fn sign(&self) -> Sign {
        if self.is_zero() {
            Sign::Zero
        } else if self.is_negative() {
            Sign::Negative
        } else {
            Sign::Positive
        }
    }
}

/// `[lo, hi)` such that `10^lo <= magnitude * 10^-scale < 10^hi`, for a
/// nonzero magnitude.
fn decimal_exponents<const L: usize>(magnitude: &Unsigned<L>, scale: u32) -> (i64, i64) {
    // 2^msb <= magnitude < 2^(msb + 1)
    let msb = magnitude.msb() as i64;
    let lo = (msb * LOG10_2_FLOOR) >> 16;
    let hi = ((msb + 1) * LOG10_2_CEIL + 0xFFFF) >> 16;
    (lo - scale as i64, hi - scale as i64)
}

/// Compares nonzero magnitudes at different scales.
fn cmp_magnitudes<const L: usize>(a: &Unsigned<L>, a_scale: u32, b: &Unsigned<L>, b_scale: u32) -> Ordering {
    let (a_lo, a_hi) = decimal_exponents(a, a_scale);
    let (b_lo, b_hi) = decimal_exponents(b, b_scale);
    if a_hi <= b_lo {
        trace!("ordered by magnitude");
        return Ordering::Less;
    }
    if b_hi <= a_lo {
        trace!("ordered by magnitude");
        return Ordering::Greater;
    }

    if a_scale < b_scale {
        cmp_aligned(a, a_scale, b, b_scale)
    } else {
        cmp_aligned(b, b_scale, a, a_scale).reverse()
    }
}

/// `low` has the lower scale.
fn cmp_aligned<const L: usize>(low: &Unsigned<L>, low_scale: u32, high: &Unsigned<L>, high_scale: u32) -> Ordering {
    let digits = high_scale - low_scale;
    if let Some(low) = scale_up_checked(low, digits) {
        trace!("ordered at scale {}", high_scale);
        return low.cmp(high);
    }

    trace!("ordered at scale {}, with remainder", low_scale);
    let mut high = *high;
    let discarded = scale_down(&mut high, digits);
    match low.cmp(&high) {
        Ordering::Equal if discarded => Ordering::Less,
        ordering => ordering,
    }
}

impl<const L: usize> Ord for Decimal<L> {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.scale == other.scale {
            return self.value.signed_cmp(&other.value);
        }

        let sign = self.sign();
        match sign.cmp(&other.sign()) {
            Ordering::Equal => {}
            ordering => return ordering,
        }

        let (a, _) = self.value.abs();
        let (b, _) = other.value.abs();
        match sign {
            Sign::Zero => Ordering::Equal,
            Sign::Positive => cmp_magnitudes(&a, self.scale, &b, other.scale),
            Sign::Negative => cmp_magnitudes(&a, self.scale, &b, other.scale).reverse(),
        }
    }
}

impl<const L: usize> PartialOrd for Decimal<L> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const L: usize> PartialEq for Decimal<L> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<const L: usize> Eq for Decimal<L> {}
