//! FIFO queue over a circular growable buffer.
//!
//! [`ArrayQueue`] keeps a `front` cursor and a length; the rear slot is
//! always `(front + len) % capacity`, so enqueue and dequeue both touch a
//! single slot with no shifting. Resizing copies the logical sequence
//! (wrap-aware) into a fresh buffer with `front` reset to zero.

use core::fmt;

use crate::error::{Error, Result};
use crate::policy;
use crate::traits::{Container, Queue};

/// A queue over a circular growable buffer.
#[derive(Clone)]
pub struct ArrayQueue {
    buf: Box<[i64]>,
    front: usize,
    len: usize,
}

impl ArrayQueue {
    /// Creates an empty queue with the default initial capacity.
    pub fn new() -> Self {
        Self::with_capacity(policy::DEFAULT_CAPACITY)
    }

    /// Creates an empty queue with room for `capacity` elements.
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

    /// Whether the queue is empty.
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

    /// Appends `value` at the rear. Amortized O(1); doubles first when full.
    pub fn enqueue(&mut self, value: i64) {
        if self.len == self.buf.len() {
            self.resize_buffer(policy::grown(self.buf.len()));
        }
        let rear = self.wrap(self.len);
        self.buf[rear] = value;
        self.len += 1;
    }

    /// Removes and returns the front element. Halves the buffer when the
    /// remaining elements occupy exactly a quarter of it.
    pub fn dequeue(&mut self) -> Result<i64> {
        if self.len == 0 {
            return Err(Error::Empty);
        }
        let value = self.buf[self.front];
        self.front = self.wrap(1);
        self.len -= 1;
        if policy::should_shrink(self.len, self.buf.len()) {
            self.resize_buffer(policy::shrunk(self.buf.len()));
        }
        Ok(value)
    }

    /// Front element without removing it.
    pub fn front(&self) -> Result<i64> {
        if self.len == 0 {
            return Err(Error::Empty);
        }
        Ok(self.buf[self.front])
    }

    /// Rear element without removing it.
    pub fn rear(&self) -> Result<i64> {
        if self.len == 0 {
            return Err(Error::Empty);
        }
        Ok(self.buf[self.wrap(self.len - 1)])
    }

    /// Enqueues every element of `values`, growing once up front.
    pub fn enqueue_all(&mut self, values: &[i64]) {
        let required = self.len + values.len();
        if required > self.buf.len() {
            self.resize_buffer(policy::grown_for(self.buf.len(), required));
        }
        for &v in values {
            self.enqueue(v);
        }
    }

    /// Dequeues `count` elements in FIFO order. Checks availability
    /// before mutating anything.
    pub fn dequeue_multiple(&mut self, count: usize) -> Result<Vec<i64>> {
        if count > self.len {
            return Err(Error::Insufficient {
                requested: count,
                available: self.len,
            });
        }
        (0..count).map(|_| self.dequeue()).collect()
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

    /// Whether `value` occurs anywhere in the queue. Linear scan.
    pub fn contains(&self, value: i64) -> bool {
        self.iter().any(|v| v == value)
    }

    /// Logical offset of the first occurrence of `value` from the front.
    pub fn index_of(&self, value: i64) -> Option<usize> {
        self.iter().position(|v| v == value)
    }

    /// Iterates front to rear, wrap-aware, without moving the cursors.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            queue: self,
            pos: 0,
        }
    }

    /// Copies the elements out, front to rear.
    pub fn to_vec(&self) -> Vec<i64> {
        self.iter().collect()
    }

    /// Rotates the queue `k` positions to the left (front elements move to
    /// the rear). `k` is normalized modulo the length; O(k) cursor moves.
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

    /// New queue holding the elements for which `pred` returns true, in
    /// logical order.
    pub fn filter(&self, mut pred: impl FnMut(i64) -> bool) -> Self {
        let mut out = Self::with_capacity(self.len.max(policy::MIN_CAPACITY));
        for v in self.iter() {
            if pred(v) {
                out.enqueue(v);
            }
        }
        out
    }

    /// New queue holding `f` applied to each element, in logical order.
    pub fn map(&self, mut f: impl FnMut(i64) -> i64) -> Self {
        let mut out = Self::with_capacity(self.len.max(policy::MIN_CAPACITY));
        for v in self.iter() {
            out.enqueue(f(v));
        }
        out
    }

    /// Folds the elements front to rear.
    pub fn reduce(&self, init: i64, mut f: impl FnMut(i64, i64) -> i64) -> i64 {
        let mut acc = init;
        for v in self.iter() {
            acc = f(acc, v);
        }
        acc
    }

    /// Visits each element front to rear.
    pub fn for_each(&self, mut f: impl FnMut(i64)) {
        for v in self.iter() {
            f(v);
        }
    }

    /// Copies the logical sequence into a buffer of `new_capacity` slots,
    /// front reset to zero. `new_capacity` must be >= `len`.
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

/// Wrap-aware iterator over an [`ArrayQueue`], front to rear.
pub struct Iter<'a> {
    queue: &'a ArrayQueue,
    pos: usize,
}

impl Iterator for Iter<'_> {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if self.pos < self.queue.len {
            let v = self.queue.buf[self.queue.wrap(self.pos)];
            self.pos += 1;
            Some(v)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.queue.len - self.pos;
        (rest, Some(rest))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl Container for ArrayQueue {
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

impl Queue for ArrayQueue {
    fn enqueue(&mut self, value: i64) {
        self.enqueue(value);
    }
    fn dequeue(&mut self) -> Result<i64> {
        self.dequeue()
    }
    fn front(&self) -> Result<i64> {
        self.front()
    }
    fn rear(&self) -> Result<i64> {
        self.rear()
    }
}

impl Default for ArrayQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ArrayQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl fmt::Display for ArrayQueue {
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

impl PartialEq for ArrayQueue {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}
impl Eq for ArrayQueue {}

impl Extend<i64> for ArrayQueue {
    fn extend<I: IntoIterator<Item = i64>>(&mut self, iter: I) {
        for v in iter {
            self.enqueue(v);
        }
    }
}

impl FromIterator<i64> for ArrayQueue {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut q = Self::new();
        q.extend(iter);
        q
    }
}
