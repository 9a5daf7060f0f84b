use crate::{
    order::{CoverError, OrderingError},
    passable::{ClassifyError, RecordError},
};
use thiserror::Error as ThisError;

///
/// EngineError
///
/// Aggregate error for the rank-order engine. Every variant reflects a
/// programmer or configuration fault — malformed input or a logic error
/// upstream — and is non-retryable. Correctness requires surfacing the
/// failure rather than degrading gracefully.
///

#[derive(Clone, Debug, ThisError)]
pub enum EngineError {
    #[error("{0}")]
    Classify(#[from] ClassifyError),

    #[error("{0}")]
    Record(#[from] RecordError),

    #[error("{0}")]
    Ordering(#[from] OrderingError),

    #[error("{0}")]
    Cover(#[from] CoverError),
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{order::assert_rank_sorted, passable::Passable};

    fn engine_result(seq: &[Passable]) -> Result<(), EngineError> {
        assert_rank_sorted(seq)?;
        Ok(())
    }

    #[test]
    fn module_errors_lift_into_the_aggregate() {
        let err = engine_result(&[Passable::Undefined, Passable::Null])
            .expect_err("descending sequence must fail");

        match err {
            EngineError::Ordering(inner) => {
                assert_eq!(inner.index, 0);
                assert_eq!(inner.to_string(), "sequence is not rank-sorted at index 0");
            }
            other => panic!("expected ordering error, found {other:?}"),
        }
    }

    #[test]
    fn display_passes_through_the_source_message() {
        let err = EngineError::from(ClassifyError::UnknownTag { tag: 42 });
        assert_eq!(err.to_string(), "unrecognized pass-style tag: 42");
    }
}
