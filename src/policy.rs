//! Capacity growth and shrink policy shared by the array-backed containers.
//!
//! Every buffer-backed container in this crate (`ArrayList`, `ArrayStack`,
//! `ArrayQueue`, `ArrayDeque`) follows the same rules instead of re-deriving
//! them per type:
//!
//! * grow by doubling when the buffer is full, *before* writing;
//! * shrink by halving when a removal leaves exactly a quarter of the
//!   capacity in use;
//! * never drop below [`MIN_CAPACITY`].
//!
//! Bulk insertions compute their target capacity in one step via
//! [`grown_for`] rather than doubling repeatedly.

/// Capacity floor. A container never shrinks below this.
pub const MIN_CAPACITY: usize = 1;

/// Initial capacity used by `new()` constructors.
pub const DEFAULT_CAPACITY: usize = 10;

/// Next capacity after a doubling step.
#[inline]
pub fn grown(capacity: usize) -> usize {
    (capacity * 2).max(MIN_CAPACITY)
}

/// Smallest capacity reachable from `capacity` by doubling that holds at
/// least `required` elements. Used by bulk inserts so a single resize
/// covers the whole batch.
#[inline]
pub fn grown_for(capacity: usize, required: usize) -> usize {
    let mut next = capacity.max(MIN_CAPACITY);
    while next < required {
        next *= 2;
    }
    next
}

/// Whether a removal that left `len` elements in a buffer of `capacity`
/// slots should trigger a halving. Empty containers keep their capacity
/// (clearing is handled separately), and the result of halving must stay
/// at or above [`MIN_CAPACITY`].
#[inline]
pub fn should_shrink(len: usize, capacity: usize) -> bool {
    len > 0 && len == capacity / 4 && capacity / 2 >= MIN_CAPACITY
}

/// Capacity after a halving step.
#[inline]
pub fn shrunk(capacity: usize) -> usize {
    (capacity / 2).max(MIN_CAPACITY)
}
