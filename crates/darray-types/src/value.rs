//! Tagged scalar values.
//!
//! [`ValueRef`] is the borrowed form callers hand in: it carries the kind and
//! the payload together, so the two cannot disagree. [`TaggedValue`] is the
//! owned form containers store; a `Str` owns its own copy of the bytes.

use crate::{Result, ValueError, ValueKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Borrowed caller input for constructing or looking up a value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueRef<'a> {
    Int(i32),
    Float(f32),
    Str(&'a str),
}

impl ValueRef<'_> {
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Int(_) => ValueKind::Int,
            Self::Float(_) => ValueKind::Float,
            Self::Str(_) => ValueKind::Str,
        }
    }
}

impl From<i32> for ValueRef<'_> {
    fn from(v: i32) -> Self {
        Self::Int(v)
    }
}

impl From<f32> for ValueRef<'_> {
    fn from(v: f32) -> Self {
        Self::Float(v)
    }
}

impl<'a> From<&'a str> for ValueRef<'a> {
    fn from(v: &'a str) -> Self {
        Self::Str(v)
    }
}

impl fmt::Display for ValueRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Str(s) => write!(f, "{s:?}"),
        }
    }
}

/// An owned scalar with its kind.
///
/// Equality is exact: floats compare bit-for-bit by IEEE rules (so `NaN`
/// never equals itself) and strings compare byte-for-byte. Values of
/// different kinds are never equal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaggedValue {
    Int(i32),
    Float(f32),
    Str(String),
}

impl TaggedValue {
    /// Construct an owned value from caller input.
    ///
    /// Scalars are copied. A string payload is copied into a freshly
    /// reserved buffer; if the reservation fails nothing is allocated and
    /// [`ValueError::AllocationFailure`] is returned.
    pub fn new(input: ValueRef<'_>) -> Result<Self> {
        match input {
            ValueRef::Int(v) => Ok(Self::Int(v)),
            ValueRef::Float(v) => Ok(Self::Float(v)),
            ValueRef::Str(s) => copy_str(s).map(Self::Str),
        }
    }

    /// Construct from a raw numeric tag plus input.
    ///
    /// Fails with [`ValueError::InvalidKind`] if `tag` is not a supported
    /// kind or names a kind other than the one `input` carries.
    pub fn from_tag(tag: u8, input: ValueRef<'_>) -> Result<Self> {
        let kind = ValueKind::from_tag(tag)?;
        if kind != input.kind() {
            return Err(ValueError::InvalidKind(tag));
        }
        Self::new(input)
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Int(_) => ValueKind::Int,
            Self::Float(_) => ValueKind::Float,
            Self::Str(_) => ValueKind::Str,
        }
    }

    /// Borrow this value as lookup input.
    pub fn as_value_ref(&self) -> ValueRef<'_> {
        match self {
            Self::Int(v) => ValueRef::Int(*v),
            Self::Float(v) => ValueRef::Float(*v),
            Self::Str(s) => ValueRef::Str(s),
        }
    }

    /// True when `other` has the same kind and an equal payload.
    pub fn matches(&self, other: ValueRef<'_>) -> bool {
        match (self, other) {
            (Self::Int(a), ValueRef::Int(b)) => *a == b,
            (Self::Float(a), ValueRef::Float(b)) => *a == b,
            (Self::Str(a), ValueRef::Str(b)) => a.as_bytes() == b.as_bytes(),
            _ => false,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f32> {
        match self {
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl PartialEq<ValueRef<'_>> for TaggedValue {
    fn eq(&self, other: &ValueRef<'_>) -> bool {
        self.matches(*other)
    }
}

impl From<i32> for TaggedValue {
    fn from(v: i32) -> Self {
        Self::Int(v)
    }
}

impl From<f32> for TaggedValue {
    fn from(v: f32) -> Self {
        Self::Float(v)
    }
}

// Takes the buffer as-is; no copy, so no allocation can fail.
impl From<String> for TaggedValue {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl fmt::Display for TaggedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_value_ref().fmt(f)
    }
}

fn copy_str(s: &str) -> Result<String> {
    let mut owned = String::new();
    owned
        .try_reserve_exact(s.len())
        .map_err(|_| ValueError::AllocationFailure { len: s.len() })?;
    owned.push_str(s);
    Ok(owned)
}
