//! Growable array of tagged scalar values.
//!
//! # Architecture
//!
//! [`DynamicArray`] owns a buffer of `capacity` slots of which the first
//! `len` hold a live [`TaggedValue`]. Three pieces cooperate:
//!
//! - [`growth`]: when `len == capacity` before an insertion, the
//!   [`GrowthPolicy`] picks a larger capacity and the buffer is reallocated,
//!   reserving the new buffer before any slot moves so a refused allocation
//!   leaves the array untouched.
//! - `shift`: opens a gap at an index (moving the tail right, highest slot
//!   first) or closes one (moving the tail left, lowest slot first).
//! - [`array`]: the public operations, composing the two with value
//!   construction from [`darray_types`].
//!
//! Values enter through [`ValueRef`], which carries kind and payload
//! together, and leave either by being dropped with the array or by being
//! moved out to the caller (`pop`, `remove_at`, `take`).

pub mod array;
pub mod config;
pub mod error;
pub mod growth;
mod shift;

pub use array::DynamicArray;
pub use config::ArrayConfig;
pub use darray_types::{TaggedValue, ValueError, ValueKind, ValueRef};
pub use error::{ArrayError, ArrayResult};
pub use growth::{GrowthPolicy, GROWTH_FACTOR, INITIAL_CAPACITY};
