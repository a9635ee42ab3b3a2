//! Singly-linked list of integers.
//!
//! [`LinkedList`] keeps only a head pointer, so `push_front` is O(1) while
//! `push` (append) and every index-taking operation walk the chain. That
//! trade-off is the point of this variant; the queue and deque chains add
//! tail pointers where their contracts need a fast rear.

use core::fmt;

use crate::error::{Error, Result};
use crate::traits::{Container, List};

struct Node {
    value: i64,
    next: Option<Box<Node>>,
}

/// A singly-linked list. Head is index 0.
pub struct LinkedList {
    head: Option<Box<Node>>,
    len: usize,
}

impl LinkedList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self { head: None, len: 0 }
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

    /// Prepends `value`. O(1).
    pub fn push_front(&mut self, value: i64) {
        self.head = Some(Box::new(Node {
            value,
            next: self.head.take(),
        }));
        self.len += 1;
    }

    /// Appends `value`. O(n): walks to the end of the chain.
    pub fn push(&mut self, value: i64) {
        let mut slot = &mut self.head;
        while let Some(node) = slot {
            slot = &mut node.next;
        }
        *slot = Some(Box::new(Node { value, next: None }));
        self.len += 1;
    }

    /// Element at `index`. O(index).
    pub fn get(&self, index: usize) -> Result<i64> {
        self.node_at(index).map(|node| node.value)
    }

    /// Overwrites the element at `index`. O(index).
    pub fn set(&mut self, index: usize, value: i64) -> Result<()> {
        if index >= self.len {
            return Err(Error::OutOfRange {
                index,
                len: self.len,
            });
        }
        let slot = self.slot_at(index);
        if let Some(node) = slot {
            node.value = value;
        }
        Ok(())
    }

    /// Inserts `value` at `index`, valid for `0 <= index <= len`.
    pub fn insert(&mut self, index: usize, value: i64) -> Result<()> {
        if index > self.len {
            return Err(Error::OutOfRange {
                index,
                len: self.len,
            });
        }
        let slot = self.slot_at(index);
        let next = slot.take();
        *slot = Some(Box::new(Node { value, next }));
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the element at `index`.
    pub fn remove(&mut self, index: usize) -> Result<i64> {
        if index >= self.len {
            return Err(Error::OutOfRange {
                index,
                len: self.len,
            });
        }
        let slot = self.slot_at(index);
        match slot.take() {
            Some(mut node) => {
                *slot = node.next.take();
                self.len -= 1;
                Ok(node.value)
            }
            None => Err(Error::OutOfRange {
                index,
                len: self.len,
            }),
        }
    }

    /// Removes and returns the head element.
    pub fn remove_first(&mut self) -> Result<i64> {
        match self.head.take() {
            Some(mut node) => {
                self.head = node.next.take();
                self.len -= 1;
                Ok(node.value)
            }
            None => Err(Error::Empty),
        }
    }

    /// Removes the first occurrence of `value`; returns whether one existed.
    pub fn remove_value(&mut self, value: i64) -> bool {
        match self.index_of(value) {
            Some(i) => self.remove(i).is_ok(),
            None => false,
        }
    }

    /// Drops every node. Iterative, so arbitrarily long chains are safe.
    pub fn clear(&mut self) {
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
        self.len = 0;
    }

    /// Whether `value` occurs in the list.
    pub fn contains(&self, value: i64) -> bool {
        self.iter().any(|v| v == value)
    }

    /// Index of the first occurrence of `value`.
    pub fn index_of(&self, value: i64) -> Option<usize> {
        self.iter().position(|v| v == value)
    }

    /// Iterates head to tail.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// Copies the elements out in order.
    pub fn to_vec(&self) -> Vec<i64> {
        self.iter().collect()
    }

    /// Reverses the chain in place: one pass, each link flipped once.
    pub fn reverse(&mut self) {
        let mut prev = None;
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
            node.next = prev;
            prev = Some(node);
        }
        self.head = prev;
    }

    /// Value of the middle node (the second middle for even lengths),
    /// found with a slow/fast cursor pair.
    pub fn middle(&self) -> Option<i64> {
        let mut slow = self.head.as_deref()?;
        let mut fast = self.head.as_deref();
        while let Some(f) = fast {
            match f.next.as_deref() {
                Some(second) => {
                    fast = second.next.as_deref();
                    slow = slow.next.as_deref()?;
                }
                None => break,
            }
        }
        Some(slow.value)
    }

    /// Removes every element that repeats an earlier one, keeping first
    /// occurrences. Relinks the existing nodes in a single pass.
    pub fn remove_duplicates(&mut self) {
        let mut seen: Vec<i64> = Vec::with_capacity(self.len);
        let mut old = self.head.take();
        self.len = 0;
        let mut tail = &mut self.head;
        while let Some(mut node) = old {
            old = node.next.take();
            if !seen.contains(&node.value) {
                seen.push(node.value);
                *tail = Some(node);
                self.len += 1;
                if let Some(n) = tail {
                    tail = &mut n.next;
                }
            }
        }
    }

    /// Appends every element of `values` in order.
    pub fn extend_from_slice(&mut self, values: &[i64]) {
        // One walk to the end, then chain the batch on.
        let mut slot = &mut self.head;
        while let Some(node) = slot {
            slot = &mut node.next;
        }
        for &v in values {
            *slot = Some(Box::new(Node {
                value: v,
                next: None,
            }));
            if let Some(n) = slot {
                slot = &mut n.next;
            }
        }
        self.len += values.len();
    }

    /// Prepends every element of `values`, preserving the slice order at
    /// the front of the list.
    pub fn prepend_all(&mut self, values: &[i64]) {
        for &v in values.iter().rev() {
            self.push_front(v);
        }
    }

    /// Mutable slot holding the node at `index` (or the end-of-chain slot
    /// when `index == len`). Callers validate the index first.
    fn slot_at(&mut self, index: usize) -> &mut Option<Box<Node>> {
        let mut slot = &mut self.head;
        for _ in 0..index {
            slot = match slot {
                Some(node) => &mut node.next,
                None => break,
            };
        }
        slot
    }

    fn node_at(&self, index: usize) -> Result<&Node> {
        if index >= self.len {
            return Err(Error::OutOfRange {
                index,
                len: self.len,
            });
        }
        let mut cur = self.head.as_deref();
        for _ in 0..index {
            cur = cur.and_then(|node| node.next.as_deref());
        }
        cur.ok_or(Error::OutOfRange {
            index,
            len: self.len,
        })
    }
}

/// Iterator over a [`LinkedList`], head to tail.
pub struct Iter<'a> {
    next: Option<&'a Node>,
}

impl Iterator for Iter<'_> {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some(node.value)
    }
}

impl Drop for LinkedList {
    fn drop(&mut self) {
        self.clear();
    }
}

impl Clone for LinkedList {
    fn clone(&self) -> Self {
        // Entirely new nodes; chains never share structure.
        let mut out = Self::new();
        let mut tail = &mut out.head;
        for v in self.iter() {
            *tail = Some(Box::new(Node {
                value: v,
                next: None,
            }));
            if let Some(n) = tail {
                tail = &mut n.next;
            }
        }
        out.len = self.len;
        out
    }
}

impl Container for LinkedList {
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

impl List for LinkedList {
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

impl Default for LinkedList {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl fmt::Display for LinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, "]")
    }
}

impl PartialEq for LinkedList {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}
impl Eq for LinkedList {}

impl Extend<i64> for LinkedList {
    fn extend<I: IntoIterator<Item = i64>>(&mut self, iter: I) {
        for v in iter {
            self.push(v);
        }
    }
}

impl FromIterator<i64> for LinkedList {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut list = Self::new();
        let mut tail = &mut list.head;
        let mut len = 0;
        for v in iter {
            *tail = Some(Box::new(Node {
                value: v,
                next: None,
            }));
            if let Some(n) = tail {
                tail = &mut n.next;
            }
            len += 1;
        }
        list.len = len;
        list
    }
}
