//! Capacity growth.
//!
//! Growth is triggered only when the buffer is full. The new buffer is
//! reserved in full before any slot is moved into it, so a refused
//! reservation returns an error with the old buffer still intact.

use crate::error::{ArrayError, ArrayResult};
use crate::shift::Slot;

/// Slots allocated by [`DynamicArray::new`](crate::DynamicArray::new).
pub const INITIAL_CAPACITY: usize = 10;

/// Capacity multiplier applied on each growth.
pub const GROWTH_FACTOR: usize = 2;

/// Decides when the buffer grows and to what size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrowthPolicy {
    factor: usize,
    max_capacity: Option<usize>,
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self::new(GROWTH_FACTOR, None)
    }
}

impl GrowthPolicy {
    pub fn new(factor: usize, max_capacity: Option<usize>) -> Self {
        GrowthPolicy {
            factor,
            max_capacity,
        }
    }

    pub fn factor(&self) -> usize {
        self.factor
    }

    pub fn max_capacity(&self) -> Option<usize> {
        self.max_capacity
    }

    /// Growth is needed exactly when every slot is in use.
    pub fn needs_growth(&self, len: usize, capacity: usize) -> bool {
        len == capacity
    }

    /// The capacity to grow to from `capacity`.
    ///
    /// Multiplies by the factor, clamping to `max_capacity` when one is set.
    /// Fails if the buffer is already at the cap or the product overflows.
    pub fn next_capacity(&self, capacity: usize) -> ArrayResult<usize> {
        let scaled = capacity.checked_mul(self.factor);
        let requested = scaled.unwrap_or(usize::MAX);
        match (scaled, self.max_capacity) {
            (_, Some(max)) if capacity >= max => Err(ArrayError::OutOfMemory { requested }),
            (Some(next), Some(max)) => Ok(next.min(max)),
            (None, Some(max)) => Ok(max),
            (Some(next), None) => Ok(next),
            (None, None) => Err(ArrayError::OutOfMemory { requested }),
        }
    }
}

/// Move the first `len` slots of `slots` into a new buffer of
/// `new_capacity` slots.
///
/// On failure `slots` is left exactly as it was.
pub(crate) fn reallocate(slots: &mut Vec<Slot>, len: usize, new_capacity: usize) -> ArrayResult<()> {
    let mut next: Vec<Slot> = Vec::new();
    next.try_reserve_exact(new_capacity)
        .map_err(|_| ArrayError::OutOfMemory {
            requested: new_capacity,
        })?;
    next.extend(slots[..len].iter_mut().map(Option::take));
    next.resize_with(new_capacity, || None);
    *slots = next;
    Ok(())
}
