mod bigint;
mod compare;
mod number;
mod rank;
mod style;


use candid::CandidType;
use serde::Serialize;
use std::cmp::Ordering;
use thiserror::Error as ThisError;

// re-exports
pub use bigint::BigInt;
pub use compare::compare_rank;
pub use number::Float64;
pub use rank::canonical_rank;
pub use style::{ClassifyError, PassStyle, pass_style_of};

pub(crate) use compare::cmp_text_utf16;

///
/// RecordError
///
/// Invariant violations for record construction/normalization.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum RecordError {
    #[error(
        "record contains duplicate key '{key}' at normalized positions {left_index} and {right_index}"
    )]
    DuplicateKey {
        key: String,
        left_index: usize,
        right_index: usize,
    },
}

///
/// Passable
///
/// A value belonging to exactly one of the fixed categories, eligible for
/// canonical comparison. Variants are declared in ascending rank order.
///
/// Null      → the absent-value singleton.
/// Undefined → the "missing" marker; the unique maximal rank.
///

#[derive(CandidType, Clone, Debug, Eq, PartialEq, Serialize)]
pub enum Passable {
    Null,
    Bool(bool),
    Number(Float64),
    BigInt(BigInt),
    Text(String),
    Symbol(PassSymbol),
    /// Canonical deterministic record representation.
    ///
    /// - Records are order-insensitive; insertion order is discarded.
    /// - Entries are always sorted by canonical key order and keys are unique.
    Record(Vec<(String, Self)>),
    /// Ordered sequence of passables; element order is significant.
    List(Vec<Self>),
    Tagged(Tagged),
    Remotable(Remotable),
    Error(PassError),
    Promise(PromiseRef),
    MetaTagged(MetaTagged),
    Undefined,
}

impl Passable {
    ///
    /// CONSTRUCTION
    ///

    /// Build a `Passable::List` from a list literal.
    ///
    /// Intended for tests and inline construction.
    /// Requires `Clone` because items are borrowed.
    pub fn from_slice<T>(items: &[T]) -> Self
    where
        T: Into<Self> + Clone,
    {
        Self::List(items.iter().cloned().map(Into::into).collect())
    }

    /// Build a `Passable::List` from owned items.
    pub fn from_list<T>(items: Vec<T>) -> Self
    where
        T: Into<Self>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// Build a canonical `Passable::Record` from owned key/value entries.
    ///
    /// Entries are sorted by canonical key order; duplicate keys are
    /// rejected.
    pub fn record(entries: Vec<(String, Self)>) -> Result<Self, RecordError> {
        let normalized = Self::normalize_record_entries(entries)?;
        Ok(Self::Record(normalized))
    }

    /// Normalize record entries into canonical deterministic order.
    pub fn normalize_record_entries(
        mut entries: Vec<(String, Self)>,
    ) -> Result<Vec<(String, Self)>, RecordError> {
        entries.sort_by(|(left_key, _), (right_key, _)| cmp_text_utf16(left_key, right_key));

        for i in 1..entries.len() {
            let (left_key, _) = &entries[i - 1];
            let (right_key, _) = &entries[i];
            if cmp_text_utf16(left_key, right_key) == Ordering::Equal {
                return Err(RecordError::DuplicateKey {
                    key: right_key.clone(),
                    left_index: i - 1,
                    right_index: i,
                });
            }
        }

        Ok(entries)
    }

    #[must_use]
    pub fn number(v: f64) -> Self {
        Self::Number(Float64::new(v))
    }

    #[must_use]
    pub fn bigint(v: impl Into<BigInt>) -> Self {
        Self::BigInt(v.into())
    }

    #[must_use]
    pub fn text(v: impl Into<String>) -> Self {
        Self::Text(v.into())
    }

    /// Build a registered symbol atom.
    #[must_use]
    pub fn symbol(key: impl Into<String>) -> Self {
        Self::Symbol(PassSymbol::Registered(key.into()))
    }

    /// Build a well-known symbol atom.
    #[must_use]
    pub const fn well_known_symbol(name: WellKnownSymbol) -> Self {
        Self::Symbol(PassSymbol::WellKnown(name))
    }

    #[must_use]
    pub fn tagged(tag: impl Into<String>, payload: Self) -> Self {
        Self::Tagged(Tagged::new(tag, payload))
    }

    #[must_use]
    pub fn remotable(slot: u64, iface: impl Into<String>) -> Self {
        Self::Remotable(Remotable::new(slot, iface))
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(PassError::new(message))
    }

    #[must_use]
    pub const fn promise(slot: u64) -> Self {
        Self::Promise(PromiseRef::new(slot))
    }

    #[must_use]
    pub fn meta_tagged(tag: impl Into<String>, payload: Self) -> Self {
        Self::MetaTagged(MetaTagged::new(tag, payload))
    }

    ///
    /// TYPES
    ///

    /// Category of this value; total over the closed domain.
    #[must_use]
    pub const fn pass_style(&self) -> PassStyle {
        style::pass_style_of(self)
    }

    ///
    /// CONVERSION
    ///

    #[must_use]
    pub const fn as_text(&self) -> Option<&str> {
        if let Self::Text(s) = self {
            Some(s.as_str())
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_list(&self) -> Option<&[Self]> {
        if let Self::List(xs) = self {
            Some(xs.as_slice())
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_record(&self) -> Option<&[(String, Self)]> {
        if let Self::Record(entries) = self {
            Some(entries.as_slice())
        } else {
            None
        }
    }
}

macro_rules! impl_from_for {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl From<$type> for Passable {
                fn from(v: $type) -> Self {
                    Self::$variant(v.into())
                }
            }
        )*
    };
}

impl_from_for! {
    BigInt     => BigInt,
    bool       => Bool,
    f64        => Number,
    Float64    => Number,
    i8         => BigInt,
    i16        => BigInt,
    i32        => BigInt,
    i64        => BigInt,
    i128       => BigInt,
    PassSymbol => Symbol,
    Remotable  => Remotable,
    &str       => Text,
    String     => Text,
    u8         => BigInt,
    u16        => BigInt,
    u32        => BigInt,
    u64        => BigInt,
}

impl From<Vec<Self>> for Passable {
    fn from(vec: Vec<Self>) -> Self {
        Self::List(vec)
    }
}

impl From<()> for Passable {
    fn from((): ()) -> Self {
        Self::Null
    }
}

///
/// PassSymbol
///
/// Interned atom. Registered atoms rank by their own key; well-known atoms
/// rank inside the reserved `@@` lexicographic slot.
///

#[derive(CandidType, Clone, Debug, Eq, PartialEq, Serialize)]
pub enum PassSymbol {
    Registered(String),
    WellKnown(WellKnownSymbol),
}

impl PassSymbol {
    /// Key string this atom occupies in the symbol rank order.
    #[must_use]
    pub const fn rank_key(&self) -> &str {
        match self {
            Self::Registered(key) => key.as_str(),
            Self::WellKnown(name) => name.rank_key(),
        }
    }
}

///
/// WellKnownSymbol
///
/// Closed set of well-known atoms fixed by the platform.
///

#[derive(CandidType, Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum WellKnownSymbol {
    AsyncIterator,
    HasInstance,
    IsConcatSpreadable,
    Iterator,
    Match,
    MatchAll,
    Replace,
    Search,
    Species,
    Split,
    ToPrimitive,
    ToStringTag,
    Unscopables,
}

impl WellKnownSymbol {
    /// Reserved-slot key for this atom.
    #[must_use]
    pub const fn rank_key(self) -> &'static str {
        match self {
            Self::AsyncIterator => "@@asyncIterator",
            Self::HasInstance => "@@hasInstance",
            Self::IsConcatSpreadable => "@@isConcatSpreadable",
            Self::Iterator => "@@iterator",
            Self::Match => "@@match",
            Self::MatchAll => "@@matchAll",
            Self::Replace => "@@replace",
            Self::Search => "@@search",
            Self::Species => "@@species",
            Self::Split => "@@split",
            Self::ToPrimitive => "@@toPrimitive",
            Self::ToStringTag => "@@toStringTag",
            Self::Unscopables => "@@unscopables",
        }
    }
}

///
/// Tagged
///
/// A (tag, payload) pair inside the copy domain. The tag is not required to
/// be a recognized name.
///

#[derive(CandidType, Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Tagged {
    tag: String,
    payload: Box<Passable>,
}

impl Tagged {
    #[must_use]
    pub fn new(tag: impl Into<String>, payload: Passable) -> Self {
        Self {
            tag: tag.into(),
            payload: Box::new(payload),
        }
    }

    #[must_use]
    pub const fn tag(&self) -> &str {
        self.tag.as_str()
    }

    #[must_use]
    pub fn payload(&self) -> &Passable {
        &self.payload
    }
}

///
/// Remotable
///
/// Opaque capability reference. Only the allocator-assigned slot is
/// identity; the interface label is diagnostic and never compared.
///

#[derive(CandidType, Clone, Debug, Serialize)]
pub struct Remotable {
    slot: u64,
    iface: String,
}

impl Remotable {
    #[must_use]
    pub fn new(slot: u64, iface: impl Into<String>) -> Self {
        Self {
            slot,
            iface: iface.into(),
        }
    }

    #[must_use]
    pub const fn slot(&self) -> u64 {
        self.slot
    }

    #[must_use]
    pub const fn iface(&self) -> &str {
        self.iface.as_str()
    }
}

impl Eq for Remotable {}

impl PartialEq for Remotable {
    fn eq(&self, other: &Self) -> bool {
        // identity only
        self.slot == other.slot
    }
}

///
/// PassError
///
/// Opaque diagnostic wrapper around a captured error. The message is carried
/// for display and never participates in ordering.
///

#[derive(CandidType, Clone, Debug, Eq, PartialEq, Serialize)]
pub struct PassError {
    message: String,
}

impl PassError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    #[must_use]
    pub const fn message(&self) -> &str {
        self.message.as_str()
    }
}

///
/// PromiseRef
///
/// Opaque identity of an unresolved promise. Settlement state is invisible
/// to this engine.
///

#[derive(CandidType, Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct PromiseRef {
    slot: u64,
}

impl PromiseRef {
    #[must_use]
    pub const fn new(slot: u64) -> Self {
        Self { slot }
    }

    #[must_use]
    pub const fn slot(&self) -> u64 {
        self.slot
    }
}

///
/// MetaTagged
///
/// Non-inspectable (tag, payload) wrapper outside the copy domain. The
/// comparator recognizes the category only and never descends into it.
///

#[derive(CandidType, Clone, Debug, Eq, PartialEq, Serialize)]
pub struct MetaTagged {
    tag: String,
    payload: Box<Passable>,
}

impl MetaTagged {
    #[must_use]
    pub fn new(tag: impl Into<String>, payload: Passable) -> Self {
        Self {
            tag: tag.into(),
            payload: Box::new(payload),
        }
    }

    #[must_use]
    pub const fn tag(&self) -> &str {
        self.tag.as_str()
    }

    #[must_use]
    pub fn payload(&self) -> &Passable {
        &self.payload
    }
}
