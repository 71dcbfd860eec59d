//! Type aliases by bit-size, independent of architecture/features.

use crate::{Decimal, Signed, Unsigned};
pub use aliases::*;

// 32-bit
#[cfg(feature = "u32")]
mod aliases {
    use super::*;

    pub type U128 = Unsigned<4>;
    pub type U256 = Unsigned<8>;
    pub type U384 = Unsigned<12>;
    pub type U512 = Unsigned<16>;

    pub type I128 = Signed<4>;
    pub type I256 = Signed<8>;
    pub type I384 = Signed<12>;
    pub type I512 = Signed<16>;

    pub type Decimal128 = Decimal<4>;
    pub type Decimal256 = Decimal<8>;
    pub type Decimal384 = Decimal<12>;
    pub type Decimal512 = Decimal<16>;
}

// 64-bit
#[cfg(feature = "u64")]
mod aliases {
    use super::*;

    pub type U128 = Unsigned<2>;
    pub type U256 = Unsigned<4>;
    pub type U384 = Unsigned<6>;
    pub type U512 = Unsigned<8>;

    pub type I128 = Signed<2>;
    pub type I256 = Signed<4>;
    pub type I384 = Signed<6>;
    pub type I512 = Signed<8>;

    pub type Decimal128 = Decimal<2>;
    pub type Decimal256 = Decimal<4>;
    pub type Decimal384 = Decimal<6>;
    pub type Decimal512 = Decimal<8>;
}
