use crate::ValueError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The discriminant of a [`TaggedValue`](crate::TaggedValue).
///
/// Numeric tags are stable: `Int = 0`, `Float = 1`, `Str = 2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Int,
    Float,
    Str,
}

impl ValueKind {
    /// All supported kinds, in tag order.
    pub const ALL: [ValueKind; 3] = [ValueKind::Int, ValueKind::Float, ValueKind::Str];

    /// Resolve a raw numeric tag.
    pub fn from_tag(tag: u8) -> Result<Self, ValueError> {
        match tag {
            0 => Ok(Self::Int),
            1 => Ok(Self::Float),
            2 => Ok(Self::Str),
            other => Err(ValueError::InvalidKind(other)),
        }
    }

    /// The raw numeric tag for this kind.
    pub fn tag(self) -> u8 {
        match self {
            Self::Int => 0,
            Self::Float => 1,
            Self::Str => 2,
        }
    }

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::Str => "str",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ValueKind {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "int" => Ok(Self::Int),
            "float" => Ok(Self::Float),
            "str" => Ok(Self::Str),
            other => Err(ValueError::UnknownKindName(other.to_string())),
        }
    }
}

impl TryFrom<u8> for ValueKind {
    type Error = ValueError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        Self::from_tag(tag)
    }
}
