use crate::passable::PassStyle;

///
/// Canonical Rank Bands
///
/// Stable 0-based band used for cross-category ordering. Categories occupy
/// contiguous, non-overlapping bands in the order of `PassStyle::ALL`, with
/// one exception: the opaque wrapper styles (error, promise, meta-tagged)
/// are mutually indistinguishable and share a single band.
///
/// IMPORTANT:
/// Band assignments are part of deterministic query behavior and must remain
/// fixed within a protocol version.
///
#[must_use]
pub const fn canonical_rank(style: PassStyle) -> u8 {
    match style {
        PassStyle::Null => 0,
        PassStyle::Bool => 1,
        PassStyle::Number => 2,
        PassStyle::BigInt => 3,
        PassStyle::Text => 4,
        PassStyle::Symbol => 5,
        PassStyle::Record => 6,
        PassStyle::List => 7,
        PassStyle::Tagged => 8,
        PassStyle::Remotable => 9,
        PassStyle::Error | PassStyle::Promise | PassStyle::MetaTagged => 10,
        PassStyle::Undefined => 11,
    }
}

///
/// TESTS
///
