//! Arithmetic on [`Unsigned`][crate::Unsigned], wrapping around $2^{\text{BITS}}$.
//!
//! Everything here is implemented once over the digit arrays; the operator
//! traits are thin shells around the named methods. Where a carry, borrow or
//! high half can be lost, there is also a `checked_*` (or `overflowing_*`,
//! `widening_*`) variant that reports it.

mod add;
mod bitwise;
mod divide;
mod multiply;
mod shift;
mod subtract;

pub use divide::DivisionResult;
pub(crate) use divide::div_rem_assign_digit;
