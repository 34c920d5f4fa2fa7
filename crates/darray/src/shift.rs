//! Gap shifting within the slot buffer.
//!
//! Both moves touch only the live prefix and keep the relative order of
//! every element they do not displace. Length bookkeeping is the caller's.

use darray_types::TaggedValue;

/// One buffer slot. `None` outside the live prefix.
pub(crate) type Slot = Option<TaggedValue>;

/// Open a vacant slot at `index` by shifting `[index, len)` one to the right.
///
/// Requires `index < len < slots.len()`. Walks from the top down so no live
/// value is overwritten before it has been moved.
pub(crate) fn move_right(slots: &mut [Slot], len: usize, index: usize) {
    debug_assert!(index < len && len < slots.len());
    for i in (index..len).rev() {
        slots[i + 1] = slots[i].take();
    }
}

/// Close the vacant slot at `index` by shifting `(index, len)` one to the left.
///
/// Requires `index < len` and `slots[index]` already emptied. Leaves
/// `slots[len - 1]` vacant.
pub(crate) fn move_left(slots: &mut [Slot], len: usize, index: usize) {
    debug_assert!(index < len && slots[index].is_none());
    for i in index + 1..len {
        slots[i - 1] = slots[i].take();
    }
}
