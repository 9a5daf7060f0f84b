//! Canonical rank ordering for passable values: the pass-style classifier,
//! the cross-type rank comparator, rank-sorted sequence utilities, and the
//! cover machinery that turns category predicates into index ranges.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod error;
pub mod obs;
pub mod order;
pub mod passable;

///
/// CONSTANTS
///

/// Number of distinct rank bands in the canonical cross-type order.
///
/// Smaller than the number of pass styles because the opaque wrapper styles
/// (error, promise, meta-tagged) share a single band.
pub const RANK_BAND_COUNT: u8 = 12;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, sort utilities, resolvers, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        order::{IndexCover, RankCover, RankKey},
        passable::{PassStyle, Passable},
    };
}
