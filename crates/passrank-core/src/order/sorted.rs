use crate::{
    obs::sink::{MetricsEvent, record},
    passable::{Passable, compare_rank},
};
use std::cmp::Ordering;
use thiserror::Error as ThisError;

///
/// OrderingError
///
/// An adjacent pair out of rank order. Carries the violating index and both
/// elements so the fault can be diagnosed upstream; the sequence is never
/// silently corrected, since masking an ordering bug would risk consensus
/// divergence.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("sequence is not rank-sorted at index {index}")]
pub struct OrderingError {
    pub index: usize,
    pub left: Passable,
    pub right: Passable,
}

/// Whether every adjacent pair is in non-decreasing rank order.
///
/// Stops at the first violation; O(n) comparisons.
#[must_use]
pub fn is_rank_sorted(seq: &[Passable]) -> bool {
    let sorted = seq
        .windows(2)
        .all(|pair| compare_rank(&pair[0], &pair[1]) != Ordering::Greater);
    record(MetricsEvent::OrderCheck { violation: !sorted });

    sorted
}

/// Check the non-decreasing-rank invariant, failing with the offending
/// position on violation.
///
/// Used as a precondition check by anything that assumes sortedness before a
/// binary search.
pub fn assert_rank_sorted(seq: &[Passable]) -> Result<(), OrderingError> {
    for (index, pair) in seq.windows(2).enumerate() {
        if compare_rank(&pair[0], &pair[1]) == Ordering::Greater {
            record(MetricsEvent::OrderCheck { violation: true });
            return Err(OrderingError {
                index,
                left: pair[0].clone(),
                right: pair[1].clone(),
            });
        }
    }
    record(MetricsEvent::OrderCheck { violation: false });

    Ok(())
}

/// Produce a fresh sequence satisfying the non-decreasing-rank invariant.
///
/// The sort is stable: tied elements keep their original relative order.
/// The input is never mutated.
#[must_use]
pub fn make_rank_sorted(seq: &[Passable]) -> Vec<Passable> {
    record(MetricsEvent::SortRun {
        elements: u64::try_from(seq.len()).unwrap_or(u64::MAX),
    });

    let mut sorted = seq.to_vec();
    sorted.sort_by(compare_rank);
    sorted
}

///
/// TESTS
///
