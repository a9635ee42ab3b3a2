//! Double-ended queue over a singly-linked chain with a tail pointer.
//!
//! Front operations and `push_back` are O(1); `pop_back` has no back link
//! to follow, so it walks the chain to find the tail's predecessor and is
//! O(n). [`crate::doubly::DoublyLinkedDeque`] is the O(1)-both-ends
//! alternative.
//!
//! # Safety
//! `tail` is a non-owning pointer into the `Box` chain hanging off `head`.
//! It is only dereferenced while the chain is non-empty, and every
//! mutation that can move or free the last node recomputes or clears it
//! before returning.

use core::fmt;
use core::ptr::NonNull;

use crate::error::{Error, Result};
use crate::traits::{Container, Deque};

struct Node {
    value: i64,
    next: Option<Box<Node>>,
}

/// A deque over a singly-linked chain. Head is the front.
pub struct LinkedDeque {
    head: Option<Box<Node>>,
    tail: Option<NonNull<Node>>,
    len: usize,
}

impl LinkedDeque {
    /// Creates an empty deque.
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
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

    /// Inserts `value` at the front. O(1).
    pub fn push_front(&mut self, value: i64) {
        let mut node = Box::new(Node {
            value,
            next: self.head.take(),
        });
        if node.next.is_none() {
            self.tail = Some(NonNull::from(node.as_mut()));
        }
        self.head = Some(node);
        self.len += 1;
    }

    /// Appends `value` at the back. O(1) thanks to the tail pointer.
    pub fn push_back(&mut self, value: i64) {
        let mut node = Box::new(Node { value, next: None });
        let ptr = NonNull::from(node.as_mut());
        match self.tail {
            // Safety: tail points at the chain's last node, owned by us.
            Some(mut tail) => unsafe { tail.as_mut().next = Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(ptr);
        self.len += 1;
    }

    /// Removes and returns the front element. O(1).
    pub fn pop_front(&mut self) -> Result<i64> {
        match self.head.take() {
            Some(mut node) => {
                self.head = node.next.take();
                if self.head.is_none() {
                    self.tail = None;
                }
                self.len -= 1;
                Ok(node.value)
            }
            None => Err(Error::Empty),
        }
    }

    /// Removes and returns the back element. Walks the chain to find the
    /// predecessor of the tail, so this is O(n).
    pub fn pop_back(&mut self) -> Result<i64> {
        if self.len == 0 {
            return Err(Error::Empty);
        }
        // Walk to the slot holding the last node, then take it.
        let mut slot = &mut self.head;
        for _ in 0..self.len - 1 {
            match slot {
                Some(node) => slot = &mut node.next,
                None => break,
            }
        }
        match slot.take() {
            Some(node) => {
                self.len -= 1;
                self.relink_tail();
                Ok(node.value)
            }
            None => Err(Error::Empty),
        }
    }

    /// Front element without removing it.
    pub fn front(&self) -> Result<i64> {
        match self.head.as_deref() {
            Some(node) => Ok(node.value),
            None => Err(Error::Empty),
        }
    }

    /// Back element without removing it.
    pub fn back(&self) -> Result<i64> {
        match self.tail {
            // Safety: non-empty chain, tail points at its last node.
            Some(tail) => Ok(unsafe { tail.as_ref().value }),
            None => Err(Error::Empty),
        }
    }

    /// Appends every element of `values` at the back, in order.
    pub fn extend_back(&mut self, values: &[i64]) {
        for &v in values {
            self.push_back(v);
        }
    }

    /// Pops `count` elements from the front. Checks availability before
    /// mutating anything.
    pub fn pop_front_multiple(&mut self, count: usize) -> Result<Vec<i64>> {
        if count > self.len {
            return Err(Error::Insufficient {
                requested: count,
                available: self.len,
            });
        }
        (0..count).map(|_| self.pop_front()).collect()
    }

    /// Drops every node. Iterative.
    pub fn clear(&mut self) {
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
        self.tail = None;
        self.len = 0;
    }

    /// Whether `value` occurs anywhere in the deque.
    pub fn contains(&self, value: i64) -> bool {
        self.iter().any(|v| v == value)
    }

    /// Logical offset of the first occurrence of `value` from the front.
    pub fn index_of(&self, value: i64) -> Option<usize> {
        self.iter().position(|v| v == value)
    }

    /// Iterates front to back.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// Copies the elements out, front to back.
    pub fn to_vec(&self) -> Vec<i64> {
        self.iter().collect()
    }

    /// Reverses the chain in place, then repoints the tail.
    pub fn reverse(&mut self) {
        let mut prev = None;
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
            node.next = prev;
            prev = Some(node);
        }
        self.head = prev;
        self.relink_tail();
    }

    /// Walks the chain and repoints `tail` at the last node.
    fn relink_tail(&mut self) {
        let mut last: Option<NonNull<Node>> = None;
        let mut cur = self.head.as_deref_mut();
        while let Some(node) = cur {
            last = Some(NonNull::from(&mut *node));
            cur = node.next.as_deref_mut();
        }
        self.tail = last;
    }
}

/// Iterator over a [`LinkedDeque`], front to back.
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

impl Drop for LinkedDeque {
    fn drop(&mut self) {
        self.clear();
    }
}

impl Clone for LinkedDeque {
    fn clone(&self) -> Self {
        let mut out = Self::new();
        for v in self.iter() {
            out.push_back(v);
        }
        out
    }
}

impl Container for LinkedDeque {
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

impl Deque for LinkedDeque {
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

impl Default for LinkedDeque {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LinkedDeque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl fmt::Display for LinkedDeque {
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

impl PartialEq for LinkedDeque {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}
impl Eq for LinkedDeque {}

impl Extend<i64> for LinkedDeque {
    fn extend<I: IntoIterator<Item = i64>>(&mut self, iter: I) {
        for v in iter {
            self.push_back(v);
        }
    }
}

impl FromIterator<i64> for LinkedDeque {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut d = Self::new();
        d.extend(iter);
        d
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ─── basic ops ────────────────────────────────────────────────────────────
    #[test]
    fn test_linked_deque_both_ends() {
        let mut d = LinkedDeque::new();
        d.push_back(2);
        d.push_front(1);
        d.push_back(3);
        assert_eq!(d.to_vec(), vec![1, 2, 3]);
        assert_eq!(d.front(), Ok(1));
        assert_eq!(d.back(), Ok(3));
        assert_eq!(d.pop_front(), Ok(1));
        assert_eq!(d.pop_back(), Ok(3));
        assert_eq!(d.pop_back(), Ok(2));
        assert!(d.is_empty());
    }

    #[test]
    fn test_linked_deque_empty_errors() {
        let mut d = LinkedDeque::new();
        assert_eq!(d.pop_front(), Err(Error::Empty));
        assert_eq!(d.pop_back(), Err(Error::Empty));
        assert_eq!(d.front(), Err(Error::Empty));
        assert_eq!(d.back(), Err(Error::Empty));
    }

    #[test]
    fn test_linked_deque_tail_after_pop_back() {
        let mut d: LinkedDeque = [1, 2, 3].into_iter().collect();
        assert_eq!(d.pop_back(), Ok(3));
        // Tail must now point at 2, not the freed node.
        assert_eq!(d.back(), Ok(2));
        d.push_back(9);
        assert_eq!(d.to_vec(), vec![1, 2, 9]);
    }

    #[test]
    fn test_linked_deque_single_element_from_either_end() {
        let mut d = LinkedDeque::new();
        d.push_front(7);
        assert_eq!(d.pop_back(), Ok(7));
        assert!(d.is_empty());
        d.push_back(8);
        assert_eq!(d.pop_front(), Ok(8));
        assert!(d.is_empty());
        // Tail nulled both times: the deque is still usable.
        d.push_back(9);
        assert_eq!(d.back(), Ok(9));
    }

    // ─── bulk ─────────────────────────────────────────────────────────────────
    #[test]
    fn test_linked_deque_bulk_ops() {
        let mut d = LinkedDeque::new();
        d.extend_back(&[1, 2, 3, 4]);
        assert_eq!(d.pop_front_multiple(3).unwrap(), vec![1, 2, 3]);
        assert_eq!(
            d.pop_front_multiple(2),
            Err(Error::Insufficient {
                requested: 2,
                available: 1
            })
        );
        assert_eq!(d.to_vec(), vec![4]);
    }

    // ─── transforms ───────────────────────────────────────────────────────────
    #[test]
    fn test_linked_deque_reverse() {
        let mut d: LinkedDeque = [1, 2, 3, 4].into_iter().collect();
        d.reverse();
        assert_eq!(d.to_vec(), vec![4, 3, 2, 1]);
        assert_eq!(d.back(), Ok(1));
        d.push_back(0);
        assert_eq!(d.to_vec(), vec![4, 3, 2, 1, 0]);
    }

    // ─── ownership ────────────────────────────────────────────────────────────
    #[test]
    fn test_linked_deque_clone_is_deep() {
        let mut a: LinkedDeque = [1, 2, 3].into_iter().collect();
        let b = a.clone();
        a.pop_back().unwrap();
        assert_eq!(b.to_vec(), vec![1, 2, 3]);
        assert_eq!(b.back(), Ok(3));
    }

    #[test]
    fn test_linked_deque_long_chain_drop() {
        let mut d = LinkedDeque::new();
        for _ in 0..200_000 {
            d.push_back(0);
        }
        drop(d);
    }

    // ─── misc ─────────────────────────────────────────────────────────────────
    #[test]
    fn test_linked_deque_search() {
        let d: LinkedDeque = [5, 6, 7].into_iter().collect();
        assert_eq!(d.index_of(6), Some(1));
        assert!(d.contains(5));
        assert!(!d.contains(8));
    }

    #[test]
    fn test_linked_deque_trait_object() {
        let mut d = LinkedDeque::new();
        {
            let dq: &mut dyn Deque = &mut d;
            dq.push_back(1);
            dq.push_front(0);
            assert_eq!(dq.pop_back(), Ok(1));
        }
        assert_eq!(d.to_vec(), vec![0]);
    }
}
