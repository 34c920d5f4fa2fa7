//! Value construction errors.

use thiserror::Error;

/// Errors that can occur while building a [`TaggedValue`](crate::TaggedValue).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    /// The owned copy of a string payload could not be allocated.
    #[error("allocation failure: could not copy {len}-byte string payload")]
    AllocationFailure { len: usize },

    /// A raw tag does not name a supported kind, or disagrees with the payload.
    #[error("invalid value kind tag: {0}")]
    InvalidKind(u8),

    /// A kind name did not match `int`, `float` or `str`.
    #[error("unknown value kind name: {0:?}")]
    UnknownKindName(String),
}
