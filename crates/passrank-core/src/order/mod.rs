//! Rank-sorted sequences and cover resolution.
//!
//! Sequences are caller-owned; this module verifies or (re)produces the
//! non-decreasing-rank invariant and translates rank covers into concrete
//! index bounds. It never mutates a caller's sequence.

mod cover;
mod index;
mod sorted;

// re-exports
pub use cover::{
    CoverError, FULL_RANK_COVER, RankCover, RankKey, pass_style_cover, pass_style_cover_named,
};
pub use index::{IndexCover, index_cover};
pub use sorted::{OrderingError, assert_rank_sorted, is_rank_sorted, make_rank_sorted};
