//! The dynamic array container.

use crate::config::ArrayConfig;
use crate::error::{ArrayError, ArrayResult};
use crate::growth::{self, GrowthPolicy};
use crate::shift::{self, Slot};
use darray_types::{TaggedValue, ValueRef};
use log::{debug, trace, warn};
use std::fmt;

/// A growable array of [`TaggedValue`]s.
///
/// Holds `capacity()` slots; the first `size()` are live and owned by the
/// array. Appending to a full array grows it by the configured factor
/// (doubling by default). Values leave the array either when it is dropped
/// or when they are moved out through [`pop`](Self::pop),
/// [`remove_at`](Self::remove_at) or [`take`](Self::take).
///
/// Not synchronized; wrap in a mutex to share across threads.
pub struct DynamicArray {
    slots: Vec<Slot>,
    len: usize,
    policy: GrowthPolicy,
}

impl DynamicArray {
    /// Create an empty array with the default capacity of
    /// [`INITIAL_CAPACITY`](crate::INITIAL_CAPACITY) slots.
    pub fn new() -> ArrayResult<Self> {
        Self::with_config(&ArrayConfig::default())
    }

    /// Create an empty array from a validated configuration.
    pub fn with_config(config: &ArrayConfig) -> ArrayResult<Self> {
        config.validate()?;
        let mut slots: Vec<Slot> = Vec::new();
        slots
            .try_reserve_exact(config.initial_capacity)
            .map_err(|_| {
                warn!(
                    "could not allocate {} initial slots",
                    config.initial_capacity
                );
                ArrayError::AllocationFailure
            })?;
        slots.resize_with(config.initial_capacity, || None);
        Ok(DynamicArray {
            slots,
            len: 0,
            policy: config.growth_policy(),
        })
    }

    // ══════════════════════════════════════════════════════════════════════
    // Queries
    // ══════════════════════════════════════════════════════════════════════

    /// Number of live elements.
    pub fn size(&self) -> usize {
        self.len
    }

    /// Number of allocated slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Borrow the element at `index`.
    pub fn get(&self, index: usize) -> ArrayResult<&TaggedValue> {
        self.slots[..self.len]
            .get(index)
            .and_then(Option::as_ref)
            .ok_or(ArrayError::IndexOutOfRange {
                index,
                len: self.len,
            })
    }

    /// Number of elements with the same kind as `value` and an equal payload.
    pub fn count(&self, value: ValueRef<'_>) -> usize {
        self.values().filter(|v| v.matches(value)).count()
    }

    /// Position of the first element matching `value`.
    ///
    /// Scans the whole array; elements of the same kind that do not match
    /// are skipped, not treated as the end of the search.
    pub fn index_of(&self, value: ValueRef<'_>) -> Option<usize> {
        self.values().position(|v| v.matches(value))
    }

    pub fn contains(&self, value: ValueRef<'_>) -> bool {
        self.index_of(value).is_some()
    }

    // ══════════════════════════════════════════════════════════════════════
    // Insertion
    // ══════════════════════════════════════════════════════════════════════

    /// Append a copy of `value` at the end, growing the buffer if full.
    ///
    /// The value is constructed before any growth, so a failed string copy
    /// leaves the capacity untouched.
    pub fn append(&mut self, value: ValueRef<'_>) -> ArrayResult<()> {
        let value = TaggedValue::new(value)?;
        self.push_value(value)
    }

    /// Append an already owned value, such as one returned by [`pop`](Self::pop).
    ///
    /// On failure the value is dropped and the array is unchanged.
    pub fn push_value(&mut self, value: TaggedValue) -> ArrayResult<()> {
        self.ensure_capacity()?;
        self.slots[self.len] = Some(value);
        self.len += 1;
        Ok(())
    }

    /// Insert a copy of `value` at `index`, shifting later elements right.
    ///
    /// `index == size()` appends. Fails with
    /// [`ArrayError::IndexOutOfRange`] for `index > size()`.
    pub fn insert(&mut self, index: usize, value: ValueRef<'_>) -> ArrayResult<()> {
        self.check_insert_index(index)?;
        let value = TaggedValue::new(value)?;
        self.insert_value(index, value)
    }

    /// Insert an already owned value at `index`.
    pub fn insert_value(&mut self, index: usize, value: TaggedValue) -> ArrayResult<()> {
        self.check_insert_index(index)?;
        if index == self.len {
            return self.push_value(value);
        }
        self.ensure_capacity()?;
        shift::move_right(&mut self.slots, self.len, index);
        self.slots[index] = Some(value);
        self.len += 1;
        Ok(())
    }

    // ══════════════════════════════════════════════════════════════════════
    // Removal
    // ══════════════════════════════════════════════════════════════════════

    /// Remove and return the last element.
    pub fn pop(&mut self) -> ArrayResult<TaggedValue> {
        let last = self.len.checked_sub(1).ok_or(ArrayError::Empty)?;
        let value = self.slots[last].take().ok_or(ArrayError::Empty)?;
        self.len = last;
        Ok(value)
    }

    /// Remove and return the element at `index`, shifting later elements left.
    pub fn remove_at(&mut self, index: usize) -> ArrayResult<TaggedValue> {
        let out_of_range = ArrayError::IndexOutOfRange {
            index,
            len: self.len,
        };
        if index >= self.len {
            return Err(out_of_range);
        }
        let value = self.slots[index].take().ok_or(out_of_range)?;
        shift::move_left(&mut self.slots, self.len, index);
        self.len -= 1;
        Ok(value)
    }

    /// Remove the first element matching `value` and hand it to the caller.
    pub fn take(&mut self, value: ValueRef<'_>) -> ArrayResult<TaggedValue> {
        let index = self.index_of(value).ok_or(ArrayError::NotFound)?;
        self.remove_at(index)
    }

    /// Remove and drop the first element matching `value`.
    ///
    /// Fails with [`ArrayError::NotFound`] when nothing matches; the array
    /// is then unchanged.
    pub fn remove(&mut self, value: ValueRef<'_>) -> ArrayResult<()> {
        self.take(value).map(drop)
    }

    // ══════════════════════════════════════════════════════════════════════
    // Reordering & teardown
    // ══════════════════════════════════════════════════════════════════════

    /// Reverse the live elements in place.
    pub fn reverse(&mut self) {
        let len = self.len;
        for i in 0..len / 2 {
            self.slots.swap(i, len - 1 - i);
        }
    }

    /// Release every remaining element and the buffer.
    ///
    /// Equivalent to dropping the array.
    pub fn free(self) {
        trace!(
            "freeing dynamic array: {} values, {} slots",
            self.len,
            self.capacity()
        );
        drop(self);
    }

    // ══════════════════════════════════════════════════════════════════════
    // Internals
    // ══════════════════════════════════════════════════════════════════════

    fn values(&self) -> impl Iterator<Item = &TaggedValue> + '_ {
        self.slots[..self.len].iter().filter_map(Option::as_ref)
    }

    fn check_insert_index(&self, index: usize) -> ArrayResult<()> {
        if index > self.len {
            return Err(ArrayError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(())
    }

    /// Grow the buffer if every slot is in use.
    fn ensure_capacity(&mut self) -> ArrayResult<()> {
        let capacity = self.capacity();
        if !self.policy.needs_growth(self.len, capacity) {
            return Ok(());
        }
        let next = self
            .policy
            .next_capacity(capacity)
            .and_then(|next| growth::reallocate(&mut self.slots, self.len, next).map(|()| next))
            .inspect_err(|err| warn!("dynamic array growth from {capacity} slots refused: {err}"))?;
        debug!("dynamic array grew from {capacity} to {next} slots");
        Ok(())
    }
}

impl fmt::Debug for DynamicArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicArray")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("values", &self.values().collect::<Vec<_>>())
            .finish()
    }
}

impl fmt::Display for DynamicArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.values().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}
