use crate::{
    obs::sink::{MetricsEvent, record},
    order::cover::RankCover,
    passable::Passable,
};
use std::cmp::Ordering;

///
/// IndexCover
///
/// Inclusive index range over one concrete rank-sorted sequence. Every index
/// whose element's rank lies within the source rank cover is inside
/// `[start, end]`; the reverse is not guaranteed, because tie groups may mix
/// matching and non-matching elements. `start > end` denotes "no element can
/// possibly match".
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct IndexCover {
    pub start: usize,
    pub end: usize,
}

impl IndexCover {
    /// Canonical inverted pair returned for every empty resolution.
    pub const EMPTY: Self = Self { start: 1, end: 0 };

    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Number of indices inside the cover.
    #[must_use]
    pub const fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.end - self.start + 1
        }
    }
}

/// Resolve a rank cover against a rank-sorted sequence.
///
/// Two binary searches: the leftmost index whose element is not below the
/// lower key, and the rightmost index whose element is not above the upper
/// key. The result is a conservative superset; callers needing exactness
/// must filter the returned range with an exact structure check.
///
/// Precondition: `sorted` satisfies the non-decreasing-rank invariant. The
/// caller owns that invariant; it is not re-verified here.
#[must_use]
pub fn index_cover(sorted: &[Passable], cover: &RankCover) -> IndexCover {
    // Leftmost element not below the lower key.
    let start = sorted.partition_point(|el| cover.min().compare_to(el) == Ordering::Greater);
    // One past the rightmost element not above the upper key.
    let end_exclusive = sorted.partition_point(|el| cover.max().compare_to(el) != Ordering::Less);

    let empty = start >= end_exclusive;
    record(MetricsEvent::CoverResolve { empty });

    if empty {
        IndexCover::EMPTY
    } else {
        IndexCover::new(start, end_exclusive - 1)
    }
}

///
/// TESTS
///
