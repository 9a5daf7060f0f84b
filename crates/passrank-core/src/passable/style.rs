use crate::passable::Passable;
use std::fmt;
use thiserror::Error as ThisError;

///
/// PassStyle
///
/// Closed category set for passable values, declared in ascending rank
/// order. Each style carries a stable 1-based wire tag.
///
/// IMPORTANT:
/// Tag values and the category list are part of consensus-critical behavior
/// and must remain fixed within a protocol version. Extending the list is a
/// breaking protocol change, never a runtime-pluggable extension.
///

#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PassStyle {
    Null = 1,
    Bool = 2,
    Number = 3,
    BigInt = 4,
    Text = 5,
    Symbol = 6,
    Record = 7,
    List = 8,
    Tagged = 9,
    Remotable = 10,
    Error = 11,
    Promise = 12,
    MetaTagged = 13,
    Undefined = 14,
}

impl PassStyle {
    /// Every style, in ascending rank order.
    pub const ALL: [Self; 14] = [
        Self::Null,
        Self::Bool,
        Self::Number,
        Self::BigInt,
        Self::Text,
        Self::Symbol,
        Self::Record,
        Self::List,
        Self::Tagged,
        Self::Remotable,
        Self::Error,
        Self::Promise,
        Self::MetaTagged,
        Self::Undefined,
    ];

    /// Stable wire/hash byte tag for this style.
    #[must_use]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Stable human-readable category name for diagnostics and lookups.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Bool => "Bool",
            Self::Number => "Number",
            Self::BigInt => "BigInt",
            Self::Text => "Text",
            Self::Symbol => "Symbol",
            Self::Record => "Record",
            Self::List => "List",
            Self::Tagged => "Tagged",
            Self::Remotable => "Remotable",
            Self::Error => "Error",
            Self::Promise => "Promise",
            Self::MetaTagged => "MetaTagged",
            Self::Undefined => "Undefined",
        }
    }

    /// Decode a stable wire tag back into a style.
    ///
    /// An unrecognized tag means the peer speaks a different protocol
    /// version; this is a fatal configuration fault, never a normal runtime
    /// condition.
    pub const fn try_from_tag(tag: u8) -> Result<Self, ClassifyError> {
        match tag {
            1 => Ok(Self::Null),
            2 => Ok(Self::Bool),
            3 => Ok(Self::Number),
            4 => Ok(Self::BigInt),
            5 => Ok(Self::Text),
            6 => Ok(Self::Symbol),
            7 => Ok(Self::Record),
            8 => Ok(Self::List),
            9 => Ok(Self::Tagged),
            10 => Ok(Self::Remotable),
            11 => Ok(Self::Error),
            12 => Ok(Self::Promise),
            13 => Ok(Self::MetaTagged),
            14 => Ok(Self::Undefined),
            other => Err(ClassifyError::UnknownTag { tag: other }),
        }
    }

    /// Look up a style by its stable category name.
    pub fn try_from_name(name: &str) -> Result<Self, ClassifyError> {
        for style in Self::ALL {
            if style.name() == name {
                return Ok(style);
            }
        }

        Err(ClassifyError::UnknownName {
            name: name.to_string(),
        })
    }
}

impl fmt::Display for PassStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

///
/// ClassifyError
///
/// A tag or name that matches no recognized category. Indicates a
/// category-list/version mismatch between peers; fatal to the calling
/// operation.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ClassifyError {
    #[error("unrecognized pass-style tag: {tag}")]
    UnknownTag { tag: u8 },

    #[error("unrecognized pass-style name: '{name}'")]
    UnknownName { name: String },
}

/// Classify a passable into its category.
///
/// Total over the closed value domain; values outside the fixed category set
/// are unrepresentable by construction.
#[must_use]
pub const fn pass_style_of(value: &Passable) -> PassStyle {
    match value {
        Passable::Null => PassStyle::Null,
        Passable::Bool(_) => PassStyle::Bool,
        Passable::Number(_) => PassStyle::Number,
        Passable::BigInt(_) => PassStyle::BigInt,
        Passable::Text(_) => PassStyle::Text,
        Passable::Symbol(_) => PassStyle::Symbol,
        Passable::Record(_) => PassStyle::Record,
        Passable::List(_) => PassStyle::List,
        Passable::Tagged(_) => PassStyle::Tagged,
        Passable::Remotable(_) => PassStyle::Remotable,
        Passable::Error(_) => PassStyle::Error,
        Passable::Promise(_) => PassStyle::Promise,
        Passable::MetaTagged(_) => PassStyle::MetaTagged,
        Passable::Undefined => PassStyle::Undefined,
    }
}

///
/// TESTS
///
