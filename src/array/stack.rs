//! LIFO stack over a growable contiguous buffer.
//!
//! [`ArrayStack`] pushes and pops at the high end of the buffer, so both
//! operations touch a single slot. The capacity follows the shared policy:
//! doubling before a push into a full buffer, halving when a pop leaves
//! exactly a quarter of the slots in use.

use core::fmt;

use crate::error::{Error, Result};
use crate::policy;
use crate::traits::{Container, Stack};

/// A stack over a growable contiguous buffer. Top is the highest index.
#[derive(Clone)]
pub struct ArrayStack {
    buf: Box<[i64]>,
    len: usize,
}

impl ArrayStack {
    /// Creates an empty stack with the default initial capacity.
    pub fn new() -> Self {
        Self::with_capacity(policy::DEFAULT_CAPACITY)
    }

    /// Creates an empty stack with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: vec![0; capacity.max(policy::MIN_CAPACITY)].into_boxed_slice(),
            len: 0,
        }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the stack is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current slot count of the backing buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Pushes `value` on top. Amortized O(1).
    pub fn push(&mut self, value: i64) {
        if self.len == self.buf.len() {
            self.resize_buffer(policy::grown(self.buf.len()));
        }
        self.buf[self.len] = value;
        self.len += 1;
    }

    /// Removes and returns the top element. Halves the buffer when the
    /// remaining elements occupy exactly a quarter of it.
    pub fn pop(&mut self) -> Result<i64> {
        if self.len == 0 {
            return Err(Error::Empty);
        }
        self.len -= 1;
        let value = self.buf[self.len];
        if policy::should_shrink(self.len, self.buf.len()) {
            self.resize_buffer(policy::shrunk(self.buf.len()));
        }
        Ok(value)
    }

    /// Top element without removing it.
    pub fn peek(&self) -> Result<i64> {
        if self.len == 0 {
            return Err(Error::Empty);
        }
        Ok(self.buf[self.len - 1])
    }

    /// Pops `count` elements, top first. Checks availability before
    /// mutating anything.
    pub fn pop_multiple(&mut self, count: usize) -> Result<Vec<i64>> {
        if count > self.len {
            return Err(Error::Insufficient {
                requested: count,
                available: self.len,
            });
        }
        (0..count).map(|_| self.pop()).collect()
    }

    /// Pushes every element of `values` in order (so the last slice
    /// element ends up on top), growing once up front.
    pub fn push_all(&mut self, values: &[i64]) {
        let required = self.len + values.len();
        if required > self.buf.len() {
            self.resize_buffer(policy::grown_for(self.buf.len(), required));
        }
        for &v in values {
            self.push(v);
        }
    }

    /// Drops all elements and resets the buffer to the default capacity.
    pub fn clear(&mut self) {
        self.len = 0;
        if self.buf.len() > policy::DEFAULT_CAPACITY {
            self.buf = vec![0; policy::DEFAULT_CAPACITY].into_boxed_slice();
        }
    }

    /// Whether `value` occurs anywhere in the stack. Linear scan.
    pub fn contains(&self, value: i64) -> bool {
        self.buf[..self.len].contains(&value)
    }

    /// 1-based distance of `value` from the top (1 = top element), or
    /// `None` if absent.
    pub fn search(&self, value: i64) -> Option<usize> {
        self.iter().position(|v| v == value).map(|i| i + 1)
    }

    /// Iterates top to base.
    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.buf[..self.len].iter().rev().copied()
    }

    /// Copies the elements out, top to base.
    pub fn to_vec(&self) -> Vec<i64> {
        self.iter().collect()
    }

    /// Grows the buffer so at least `additional` more elements fit.
    pub fn reserve(&mut self, additional: usize) {
        let required = self.len + additional;
        if required > self.buf.len() {
            self.resize_buffer(policy::grown_for(self.buf.len(), required));
        }
    }

    /// Shrinks the buffer down to the current length (floored at the
    /// policy minimum).
    pub fn shrink_to_fit(&mut self) {
        let target = self.len.max(policy::MIN_CAPACITY);
        if target < self.buf.len() {
            self.resize_buffer(target);
        }
    }

    fn resize_buffer(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity >= self.len);
        let mut new_buf = vec![0; new_capacity].into_boxed_slice();
        new_buf[..self.len].copy_from_slice(&self.buf[..self.len]);
        self.buf = new_buf;
    }
}

impl Container for ArrayStack {
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

impl Stack for ArrayStack {
    fn push(&mut self, value: i64) {
        self.push(value);
    }
    fn pop(&mut self) -> Result<i64> {
        self.pop()
    }
    fn peek(&self) -> Result<i64> {
        self.peek()
    }
}

impl Default for ArrayStack {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ArrayStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl fmt::Display for ArrayStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, "] <- top is leftmost")
    }
}

impl PartialEq for ArrayStack {
    fn eq(&self, other: &Self) -> bool {
        self.buf[..self.len] == other.buf[..other.len]
    }
}
impl Eq for ArrayStack {}

impl Extend<i64> for ArrayStack {
    fn extend<I: IntoIterator<Item = i64>>(&mut self, iter: I) {
        for v in iter {
            self.push(v);
        }
    }
}

impl FromIterator<i64> for ArrayStack {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut s = Self::new();
        s.extend(iter);
        s
    }
}
