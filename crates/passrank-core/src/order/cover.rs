use crate::{
    obs::sink::{MetricsEvent, record},
    passable::{PassStyle, Passable, canonical_rank, compare_rank, pass_style_of},
};
use std::cmp::Ordering;
use thiserror::Error as ThisError;

///
/// RankKey
///
/// Boundary key for rank covers. A boundary key is only ever a comparison
/// endpoint; it need not be the rank of any real value. Band sentinels sit
/// strictly below or above every value of a style's band, which lets covers
/// land precisely on category edges even for bands with no representable
/// extreme value (big-integer, text, list).
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RankKey {
    /// Infimum of the style's rank band.
    BandMin(PassStyle),
    /// Supremum of the style's rank band.
    BandMax(PassStyle),
    /// A concrete value used as an endpoint.
    Value(Passable),
}

impl RankKey {
    /// Position of this boundary key relative to a value's rank.
    #[must_use]
    pub fn compare_to(&self, value: &Passable) -> Ordering {
        match self {
            Self::Value(key) => compare_rank(key, value),
            Self::BandMin(style) => canonical_rank(*style)
                .cmp(&canonical_rank(pass_style_of(value)))
                .then(Ordering::Less),
            Self::BandMax(style) => canonical_rank(*style)
                .cmp(&canonical_rank(pass_style_of(value)))
                .then(Ordering::Greater),
        }
    }
}

///
/// RankCover
///
/// Inclusive range of ranks between two boundary keys.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RankCover {
    min: RankKey,
    max: RankKey,
}

impl RankCover {
    #[must_use]
    pub const fn new(min: RankKey, max: RankKey) -> Self {
        Self { min, max }
    }

    /// Cover between two concrete value endpoints, inclusive.
    #[must_use]
    pub const fn between(min: Passable, max: Passable) -> Self {
        Self::new(RankKey::Value(min), RankKey::Value(max))
    }

    #[must_use]
    pub const fn min(&self) -> &RankKey {
        &self.min
    }

    #[must_use]
    pub const fn max(&self) -> &RankKey {
        &self.max
    }
}

/// Cover spanning the entire rank domain, from the minimal null rank to the
/// maximal undefined rank.
pub const FULL_RANK_COVER: RankCover =
    RankCover::between(Passable::Null, Passable::Undefined);

///
/// CoverError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum CoverError {
    #[error("unrecognized pass-style category: '{name}'")]
    UnknownStyle { name: String },
}

/// Cover containing exactly the ranks of one category.
///
/// Categories occupy contiguous, non-overlapping bands by construction, so
/// the band sentinels bound every value of the style and no value of any
/// other band. The opaque wrapper styles (error, promise, meta-tagged) share
/// one band, so their covers coincide.
#[must_use]
pub const fn pass_style_cover(style: PassStyle) -> RankCover {
    RankCover::new(RankKey::BandMin(style), RankKey::BandMax(style))
}

/// String-keyed cover lookup for callers holding a category name.
///
/// Fails with [`CoverError::UnknownStyle`] for a name outside the fixed
/// category list; that is a caller bug, never a runtime condition.
pub fn pass_style_cover_named(name: &str) -> Result<RankCover, CoverError> {
    record(MetricsEvent::CoverLookup);

    let style = PassStyle::try_from_name(name).map_err(|_| CoverError::UnknownStyle {
        name: name.to_string(),
    })?;

    Ok(pass_style_cover(style))
}

///
/// TESTS
///
