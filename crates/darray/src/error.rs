//! Container error types.

use darray_types::ValueError;
use thiserror::Error;

/// Errors reported by [`DynamicArray`](crate::DynamicArray) operations.
///
/// A failed operation never takes partial effect: length, capacity and
/// contents are exactly as they were before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArrayError {
    /// The initial buffer or a value's payload could not be allocated.
    #[error("allocation failure")]
    AllocationFailure,

    /// A raw tag does not name a supported value kind.
    #[error("invalid value kind tag: {0}")]
    InvalidKind(u8),

    /// A kind name did not match any supported kind.
    #[error("unknown value kind name: {0:?}")]
    UnknownKindName(String),

    /// A position argument fell outside the valid range.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Growing the buffer to `requested` slots was refused.
    #[error("out of memory: could not grow to {requested} slots")]
    OutOfMemory { requested: usize },

    /// No element matched the lookup.
    #[error("no matching element")]
    NotFound,

    /// The array holds no elements.
    #[error("array is empty")]
    Empty,

    /// An [`ArrayConfig`](crate::ArrayConfig) failed validation.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl From<ValueError> for ArrayError {
    fn from(err: ValueError) -> Self {
        match err {
            ValueError::AllocationFailure { .. } => Self::AllocationFailure,
            ValueError::InvalidKind(tag) => Self::InvalidKind(tag),
            ValueError::UnknownKindName(name) => Self::UnknownKindName(name),
        }
    }
}

/// Container result type alias.
pub type ArrayResult<T> = Result<T, ArrayError>;
