//! Shared element model for darray containers.
//!
//! This crate defines the closed set of scalar kinds, the borrowed input
//! form used to construct or look up values, the owned tagged value stored
//! by containers, and the errors value construction can report.

mod error;
mod kind;
mod value;

pub use error::ValueError;
pub use kind::ValueKind;
pub use value::{TaggedValue, ValueRef};

/// Result type used by value construction.
pub type Result<T> = std::result::Result<T, ValueError>;
