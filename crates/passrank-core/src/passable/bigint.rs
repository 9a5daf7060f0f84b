use candid::{CandidType, Int as WrappedInt};
use derive_more::{Display, FromStr};
use serde::{Deserialize, Serialize};

///
/// BigInt
///
/// Arbitrary-precision integer for the big-integer category.
/// Ordering is plain numeric order; the wrapped representation already
/// canonicalizes sign and magnitude, so `Ord` is deterministic.
///

#[derive(
    CandidType,
    Clone,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    FromStr,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
pub struct BigInt(WrappedInt);

impl BigInt {
    #[must_use]
    pub const fn get(&self) -> &WrappedInt {
        &self.0
    }
}

macro_rules! impl_bigint_from {
    ( $( $type:ty ),* $(,)? ) => {
        $(
            impl From<$type> for BigInt {
                fn from(v: $type) -> Self {
                    Self(WrappedInt::from(i128::from(v)))
                }
            }
        )*
    };
}

impl_bigint_from! {
    i8, i16, i32, i64,
    u8, u16, u32, u64,
}

impl From<i128> for BigInt {
    fn from(v: i128) -> Self {
        Self(WrappedInt::from(v))
    }
}

///
/// TESTS
///
