//! Fixed-width integers and fixed-point decimals, without allocation.
//!
//! [`Unsigned<L>`] is `L` digits, least significant first, wrapping around
//! $2^{\text{BITS}}$. The same storage read as two's complement is
//! [`Signed<L>`], and [`Decimal<L>`] pairs it with a scale.
//!
//! ```
//! use widefix::Decimal128;
//!
//! let sum = "10".parse::<Decimal128>().unwrap() + "0.01".parse().unwrap();
//! assert_eq!(sum.to_string(), "10.01");
//! ```
#![cfg_attr(not(test), no_std)]

delog::generate_macros!();

pub mod codec;
pub mod digit;
pub use digit::Digit;
mod error;
pub use error::{Error, Result};

mod numbers;
pub use numbers::{Product, Square, Unsigned};
mod arithmetic;
pub use arithmetic::DivisionResult;
mod text;
mod signed;
pub use signed::Signed;
mod decimal;
pub use decimal::{Decimal, Op};

mod aliases;
pub use aliases::*;
