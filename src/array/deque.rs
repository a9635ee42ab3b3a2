//! Double-ended queue over a circular growable buffer.
//!
//! Same ring arithmetic as [`crate::array::ArrayQueue`], with the front
//! cursor also able to step backwards: `push_front` moves it to
//! `(front + capacity - 1) % capacity`, which avoids negative intermediate
//! values. Both `pop_front` and `pop_back` apply the shared quarter-shrink
//! policy, so the two ends behave symmetrically.

use core::fmt;

use crate::error::{Error, Result};
use crate::policy;
use crate::traits::{Container, Deque};

/// A deque over a circular growable buffer.
#[derive(Clone)]
pub struct ArrayDeque {
    buf: Box<[i64]>,
    front: usize,
    len: usize,
}

impl ArrayDeque {
    /// Creates an empty deque with the default initial capacity.
    pub fn new() -> Self {
        Self::with_capacity(policy::DEFAULT_CAPACITY)
    }

    /// Creates an empty deque with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: vec![0; capacity.max(policy::MIN_CAPACITY)].into_boxed_slice(),
            front: 0,
            len: 0,
        }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the deque is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current slot count of the backing buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Physical slot of logical offset `i` from the front.
    #[inline]
    fn wrap(&self, i: usize) -> usize {
        (self.front + i) % self.buf.len()
    }

    /// Prepends `value` at the front. Amortized O(1).
    pub fn push_front(&mut self, value: i64) {
        if self.len == self.buf.len() {
            self.resize_buffer(policy::grown(self.buf.len()));
        }
        self.front = (self.front + self.buf.len() - 1) % self.buf.len();
        self.buf[self.front] = value;
        self.len += 1;
    }

    /// Appends `value` at the back. Amortized O(1).
    pub fn push_back(&mut self, value: i64) {
        if self.len == self.buf.len() {
            self.resize_buffer(policy::grown(self.buf.len()));
        }
        let rear = self.wrap(self.len);
        self.buf[rear] = value;
        self.len += 1;
    }

    /// Removes and returns the front element, shrinking at the quarter
    /// boundary.
    pub fn pop_front(&mut self) -> Result<i64> {
        if self.len == 0 {
            return Err(Error::Empty);
        }
        let value = self.buf[self.front];
        self.front = self.wrap(1);
        self.len -= 1;
        self.maybe_shrink();
        Ok(value)
    }

    /// Removes and returns the back element, shrinking at the quarter
    /// boundary.
    pub fn pop_back(&mut self) -> Result<i64> {
        if self.len == 0 {
            return Err(Error::Empty);
        }
        self.len -= 1;
        let value = self.buf[self.wrap(self.len)];
        self.maybe_shrink();
        Ok(value)
    }

    /// Front element without removing it.
    pub fn front(&self) -> Result<i64> {
        if self.len == 0 {
            return Err(Error::Empty);
        }
        Ok(self.buf[self.front])
    }

    /// Back element without removing it.
    pub fn back(&self) -> Result<i64> {
        if self.len == 0 {
            return Err(Error::Empty);
        }
        Ok(self.buf[self.wrap(self.len - 1)])
    }

    /// Appends every element of `values` at the back, growing once.
    pub fn extend_back(&mut self, values: &[i64]) {
        let required = self.len + values.len();
        if required > self.buf.len() {
            self.resize_buffer(policy::grown_for(self.buf.len(), required));
        }
        for &v in values {
            self.push_back(v);
        }
    }

    /// Pops `count` elements from the front, in order. Checks
    /// availability before mutating anything.
    pub fn pop_front_multiple(&mut self, count: usize) -> Result<Vec<i64>> {
        if count > self.len {
            return Err(Error::Insufficient {
                requested: count,
                available: self.len,
            });
        }
        (0..count).map(|_| self.pop_front()).collect()
    }

    /// Drops all elements, resetting the cursors. A buffer grown past the
    /// default capacity is released.
    pub fn clear(&mut self) {
        self.front = 0;
        self.len = 0;
        if self.buf.len() > policy::DEFAULT_CAPACITY {
            self.buf = vec![0; policy::DEFAULT_CAPACITY].into_boxed_slice();
        }
    }

    /// Whether `value` occurs anywhere in the deque. Linear scan.
    pub fn contains(&self, value: i64) -> bool {
        self.iter().any(|v| v == value)
    }

    /// Logical offset of the first occurrence of `value` from the front.
    pub fn index_of(&self, value: i64) -> Option<usize> {
        self.iter().position(|v| v == value)
    }

    /// Iterates front to back, wrap-aware, without moving the cursors.
    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        (0..self.len).map(move |i| self.buf[self.wrap(i)])
    }

    /// Copies the elements out, front to back.
    pub fn to_vec(&self) -> Vec<i64> {
        self.iter().collect()
    }

    /// Rotates the deque `k` positions to the left (front elements move
    /// to the back). `k` is normalized modulo the length.
    pub fn rotate(&mut self, k: usize) {
        if self.len == 0 {
            return;
        }
        let k = k % self.len;
        for _ in 0..k {
            let v = self.buf[self.front];
            self.front = self.wrap(1);
            let rear = self.wrap(self.len - 1);
            self.buf[rear] = v;
        }
    }

    /// Reverses the logical order in place.
    pub fn reverse(&mut self) {
        for i in 0..self.len / 2 {
            let a = self.wrap(i);
            let b = self.wrap(self.len - 1 - i);
            self.buf.swap(a, b);
        }
    }

    /// New deque holding the elements for which `pred` returns true, in
    /// logical order.
    pub fn filter(&self, mut pred: impl FnMut(i64) -> bool) -> Self {
        let mut out = Self::with_capacity(self.len.max(policy::MIN_CAPACITY));
        for v in self.iter() {
            if pred(v) {
                out.push_back(v);
            }
        }
        out
    }

    /// New deque holding `f` applied to each element, in logical order.
    pub fn map(&self, mut f: impl FnMut(i64) -> i64) -> Self {
        let mut out = Self::with_capacity(self.len.max(policy::MIN_CAPACITY));
        for v in self.iter() {
            out.push_back(f(v));
        }
        out
    }

    /// Folds the elements front to back.
    pub fn reduce(&self, init: i64, mut f: impl FnMut(i64, i64) -> i64) -> i64 {
        let mut acc = init;
        for v in self.iter() {
            acc = f(acc, v);
        }
        acc
    }

    /// Visits each element front to back.
    pub fn for_each(&self, mut f: impl FnMut(i64)) {
        for v in self.iter() {
            f(v);
        }
    }

    fn maybe_shrink(&mut self) {
        if policy::should_shrink(self.len, self.buf.len()) {
            self.resize_buffer(policy::shrunk(self.buf.len()));
        }
    }

    fn resize_buffer(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity >= self.len);
        let mut new_buf = vec![0; new_capacity].into_boxed_slice();
        for i in 0..self.len {
            new_buf[i] = self.buf[self.wrap(i)];
        }
        self.buf = new_buf;
        self.front = 0;
    }
}

impl Container for ArrayDeque {
    fn len(&self) -> usize {
        self.len
    }
    fn clear(&mut self) {
        self.clear();
    }
    fn to_vec(&self) -> Vec<i64> {
        self.to_vec()
    }
}

impl Deque for ArrayDeque {
    fn push_front(&mut self, value: i64) {
        self.push_front(value);
    }
    fn push_back(&mut self, value: i64) {
        self.push_back(value);
    }
    fn pop_front(&mut self) -> Result<i64> {
        self.pop_front()
    }
    fn pop_back(&mut self) -> Result<i64> {
        self.pop_back()
    }
    fn front(&self) -> Result<i64> {
        self.front()
    }
    fn back(&self) -> Result<i64> {
        self.back()
    }
}

impl Default for ArrayDeque {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ArrayDeque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl fmt::Display for ArrayDeque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, "]")
    }
}

impl PartialEq for ArrayDeque {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}
impl Eq for ArrayDeque {}

impl Extend<i64> for ArrayDeque {
    fn extend<I: IntoIterator<Item = i64>>(&mut self, iter: I) {
        for v in iter {
            self.push_back(v);
        }
    }
}

impl FromIterator<i64> for ArrayDeque {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut d = Self::new();
        d.extend(iter);
        d
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ─── both ends ────────────────────────────────────────────────────────────
    #[test]
    fn test_deque_push_pop_both_ends() {
        let mut d = ArrayDeque::new();
        d.push_back(2);
        d.push_front(1);
        d.push_back(3);
        assert_eq!(d.to_vec(), vec![1, 2, 3]);
        assert_eq!(d.pop_front(), Ok(1));
        assert_eq!(d.pop_back(), Ok(3));
        assert_eq!(d.to_vec(), vec![2]);
    }

    #[test]
    fn test_deque_symmetry() {
        let mut d = ArrayDeque::new();
        d.push_front(42);
        assert_eq!(d.pop_back(), Ok(42));
        assert!(d.is_empty());
        d.push_back(7);
        assert_eq!(d.pop_front(), Ok(7));
        assert!(d.is_empty());
    }

    #[test]
    fn test_deque_empty_errors() {
        let mut d = ArrayDeque::new();
        assert_eq!(d.pop_front(), Err(Error::Empty));
        assert_eq!(d.pop_back(), Err(Error::Empty));
        assert_eq!(d.front(), Err(Error::Empty));
        assert_eq!(d.back(), Err(Error::Empty));
    }

    // ─── ring arithmetic ──────────────────────────────────────────────────────
    #[test]
    fn test_deque_front_decrement_wraps() {
        let mut d = ArrayDeque::with_capacity(4);
        // front starts at 0; push_front must wrap to slot 3.
        d.push_front(1);
        d.push_front(2);
        assert_eq!(d.to_vec(), vec![2, 1]);
        d.push_back(3);
        assert_eq!(d.to_vec(), vec![2, 1, 3]);
    }

    #[test]
    fn test_deque_grow_preserves_order() {
        let mut d = ArrayDeque::with_capacity(4);
        d.push_back(3);
        d.push_front(2);
        d.push_front(1);
        d.push_back(4);
        d.push_back(5); // full -> grow
        assert_eq!(d.capacity(), 8);
        assert_eq!(d.to_vec(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_deque_shrinks_on_both_ends() {
        let mut d = ArrayDeque::with_capacity(16);
        d.extend_back(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15]);
        for _ in 0..6 {
            d.pop_front().unwrap();
        }
        for _ in 0..6 {
            d.pop_back().unwrap();
        }
        // len 4 == 16/4 boundary crossed: halved.
        assert_eq!(d.len(), 4);
        assert_eq!(d.capacity(), 8);
        assert_eq!(d.to_vec(), vec![6, 7, 8, 9]);
    }

    // ─── rotate / reverse / functional ────────────────────────────────────────
    #[test]
    fn test_deque_rotate_reverse() {
        let mut d: ArrayDeque = [1, 2, 3, 4, 5].into_iter().collect();
        d.rotate(2);
        assert_eq!(d.to_vec(), vec![3, 4, 5, 1, 2]);
        d.reverse();
        assert_eq!(d.to_vec(), vec![2, 1, 5, 4, 3]);
    }

    #[test]
    fn test_deque_filter_map_reduce() {
        let d: ArrayDeque = [1, 2, 3, 4].into_iter().collect();
        assert_eq!(d.filter(|v| v > 2).to_vec(), vec![3, 4]);
        assert_eq!(d.map(|v| -v).to_vec(), vec![-1, -2, -3, -4]);
        assert_eq!(d.reduce(1, |acc, v| acc * v), 24);
        assert_eq!(d.to_vec(), vec![1, 2, 3, 4]);
    }

    // ─── bulk / misc ──────────────────────────────────────────────────────────
    #[test]
    fn test_deque_pop_front_multiple() {
        let mut d: ArrayDeque = [1, 2, 3].into_iter().collect();
        assert_eq!(d.pop_front_multiple(2).unwrap(), vec![1, 2]);
        assert_eq!(
            d.pop_front_multiple(2),
            Err(Error::Insufficient {
                requested: 2,
                available: 1
            })
        );
    }

    #[test]
    fn test_deque_index_of_after_wrap() {
        let mut d = ArrayDeque::with_capacity(4);
        d.push_back(10);
        d.push_back(20);
        d.pop_front().unwrap();
        d.push_back(30);
        d.push_front(5);
        assert_eq!(d.to_vec(), vec![5, 20, 30]);
        assert_eq!(d.index_of(30), Some(2));
        assert!(!d.contains(10));
    }

    #[test]
    fn test_deque_clear_and_eq() {
        let mut d: ArrayDeque = (0..40).collect();
        d.clear();
        assert!(d.is_empty());
        assert_eq!(d.capacity(), policy::DEFAULT_CAPACITY);
        d.clear();
        let e = ArrayDeque::new();
        assert_eq!(d, e);
    }
}
