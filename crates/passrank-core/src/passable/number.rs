use candid::CandidType;
use derive_more::Display;
use serde::Serialize;
use std::{
    cmp::Ordering,
    hash::{Hash, Hasher},
};

///
/// Float64
///
/// Canonical IEEE-754 double for the number category.
/// -0.0 is folded to 0.0 and every NaN payload collapses to one canonical
/// NaN, so bit equality, hashing, and ordering agree on all nodes.
/// NaN ranks after every other number; two NaNs tie.
///

#[repr(transparent)]
#[derive(CandidType, Clone, Copy, Debug, Default, Display, Serialize)]
pub struct Float64(f64);

impl Float64 {
    /// Total constructor; canonicalizes -0.0 and NaN payloads.
    #[must_use]
    pub fn new(v: f64) -> Self {
        if v.is_nan() {
            return Self(f64::NAN);
        }

        Self(if v == 0.0 { 0.0 } else { v })
    }

    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }

    #[must_use]
    pub const fn is_nan(self) -> bool {
        self.0.is_nan()
    }

    #[must_use]
    pub const fn to_be_bytes(&self) -> [u8; 8] {
        self.0.to_bits().to_be_bytes()
    }
}

impl Eq for Float64 {}

impl PartialEq for Float64 {
    fn eq(&self, other: &Self) -> bool {
        // canonical bits: -0.0 folded and NaN collapsed at construction
        self.0.to_bits() == other.0.to_bits()
    }
}

impl From<f64> for Float64 {
    fn from(v: f64) -> Self {
        Self::new(v)
    }
}

impl From<Float64> for f64 {
    fn from(x: Float64) -> Self {
        x.0
    }
}

impl Hash for Float64 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.0.to_bits()); // stable 8-byte IEEE-754
    }
}

impl Ord for Float64 {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.0.is_nan(), other.0.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            // safe: no NaN on either side, -0 normalized
            (false, false) => self.0.partial_cmp(&other.0).unwrap(),
        }
    }
}

impl PartialOrd for Float64 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

///
/// TESTS
///
