//! Growable contiguous list of integers.
//!
//! [`ArrayList`] owns a heap buffer of capacity `C` and a logical length
//! `n` with `0 <= n <= C`; slots `[0, n)` hold live elements. Appending is
//! amortized O(1) (the buffer doubles when full, before the write), random
//! access is O(1), and insertion or removal in the middle shifts the tail
//! of the buffer in O(n).

use core::fmt;

use crate::error::{Error, Result};
use crate::policy;
use crate::traits::{Container, List};

/// A list over a growable contiguous buffer.
#[derive(Clone)]
pub struct ArrayList {
    buf: Box<[i64]>,
    len: usize,
}

impl ArrayList {
    /// Creates an empty list with the default initial capacity.
    pub fn new() -> Self {
        Self::with_capacity(policy::DEFAULT_CAPACITY)
    }

    /// Creates an empty list with room for `capacity` elements before the
    /// first resize. A zero capacity is raised to the policy floor.
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

    /// Whether the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current slot count of the backing buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Element at `index`, or [`Error::OutOfRange`].
    pub fn get(&self, index: usize) -> Result<i64> {
        if index < self.len {
            Ok(self.buf[index])
        } else {
            Err(Error::OutOfRange {
                index,
                len: self.len,
            })
        }
    }

    /// Overwrites the element at `index`, or [`Error::OutOfRange`].
    pub fn set(&mut self, index: usize, value: i64) -> Result<()> {
        if index < self.len {
            self.buf[index] = value;
            Ok(())
        } else {
            Err(Error::OutOfRange {
                index,
                len: self.len,
            })
        }
    }

    /// Appends `value`. Amortized O(1); doubles the buffer first when full.
    pub fn push(&mut self, value: i64) {
        if self.len == self.buf.len() {
            self.resize_buffer(policy::grown(self.buf.len()));
        }
        self.buf[self.len] = value;
        self.len += 1;
    }

    /// Inserts `value` at `index`, shifting `[index, len)` one slot right.
    /// Inserting at `len` is an append.
    pub fn insert(&mut self, index: usize, value: i64) -> Result<()> {
        if index > self.len {
            return Err(Error::OutOfRange {
                index,
                len: self.len,
            });
        }
        if self.len == self.buf.len() {
            self.resize_buffer(policy::grown(self.buf.len()));
        }
        self.buf.copy_within(index..self.len, index + 1);
        self.buf[index] = value;
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting
    /// `[index + 1, len)` one slot left.
    pub fn remove(&mut self, index: usize) -> Result<i64> {
        if index >= self.len {
            return Err(Error::OutOfRange {
                index,
                len: self.len,
            });
        }
        let value = self.buf[index];
        self.buf.copy_within(index + 1..self.len, index);
        self.len -= 1;
        Ok(value)
    }

    /// Removes the first occurrence of `value`; returns whether one existed.
    pub fn remove_value(&mut self, value: i64) -> bool {
        match self.index_of(value) {
            Some(i) => {
                let _ = self.remove(i);
                true
            }
            None => false,
        }
    }

    /// Drops all elements. Capacity is retained.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Whether `value` occurs in the list. Linear scan.
    pub fn contains(&self, value: i64) -> bool {
        self.index_of(value).is_some()
    }

    /// Index of the first occurrence of `value`. Linear scan.
    pub fn index_of(&self, value: i64) -> Option<usize> {
        self.as_slice().iter().position(|&v| v == value)
    }

    /// The live elements as a slice, in insertion order.
    #[inline]
    pub fn as_slice(&self) -> &[i64] {
        &self.buf[..self.len]
    }

    /// Iterates the elements in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.as_slice().iter().copied()
    }

    /// Copies the elements out in insertion order.
    pub fn to_vec(&self) -> Vec<i64> {
        self.as_slice().to_vec()
    }

    /// Appends every element of `values`, growing to the exact required
    /// capacity in one step instead of doubling per element.
    pub fn extend_from_slice(&mut self, values: &[i64]) {
        let required = self.len + values.len();
        if required > self.buf.len() {
            self.resize_buffer(policy::grown_for(self.buf.len(), required));
        }
        self.buf[self.len..required].copy_from_slice(values);
        self.len = required;
    }

    /// Grows the buffer so at least `additional` more elements fit without
    /// resizing. Never shrinks.
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

    /// Replaces the buffer with one of `new_capacity` slots, copying the
    /// live prefix. `new_capacity` must be >= `len`.
    fn resize_buffer(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity >= self.len);
        let mut new_buf = vec![0; new_capacity].into_boxed_slice();
        new_buf[..self.len].copy_from_slice(&self.buf[..self.len]);
        self.buf = new_buf;
    }
}

impl Container for ArrayList {
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

impl List for ArrayList {
    fn get(&self, index: usize) -> Result<i64> {
        self.get(index)
    }
    fn set(&mut self, index: usize, value: i64) -> Result<()> {
        self.set(index, value)
    }
    fn push(&mut self, value: i64) {
        self.push(value);
    }
    fn insert(&mut self, index: usize, value: i64) -> Result<()> {
        self.insert(index, value)
    }
    fn remove(&mut self, index: usize) -> Result<i64> {
        self.remove(index)
    }
    fn index_of(&self, value: i64) -> Option<usize> {
        self.index_of(value)
    }
}

impl Default for ArrayList {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ArrayList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl fmt::Display for ArrayList {
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

impl PartialEq for ArrayList {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl Eq for ArrayList {}

impl Extend<i64> for ArrayList {
    fn extend<I: IntoIterator<Item = i64>>(&mut self, iter: I) {
        for v in iter {
            self.push(v);
        }
    }
}

impl FromIterator<i64> for ArrayList {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}
