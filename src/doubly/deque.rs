//! Double-ended queue over an index arena.
//!
//! The arena mechanics mirror [`crate::doubly::DoublyLinkedList`]: nodes
//! in a `Vec`, `usize` links with a sentinel, freed slots recycled
//! through a free list. The surface is a deque with all four end
//! operations O(1), plus positional access that walks in from whichever
//! end is nearer.

use core::fmt;

use crate::error::{Error, Result};
use crate::traits::{Container, Deque};

const NONE: usize = usize::MAX;

struct Node {
    value: i64,
    prev: usize,
    next: usize,
}

/// A deque with O(1) operations at both ends, backed by an index arena.
pub struct DoublyLinkedDeque {
    nodes: Vec<Node>,
    head: usize,
    tail: usize,
    free: usize,
    len: usize,
}

impl DoublyLinkedDeque {
    /// Creates an empty deque.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            head: NONE,
            tail: NONE,
            free: NONE,
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

    fn alloc(&mut self, value: i64, prev: usize, next: usize) -> usize {
        let node = Node { value, prev, next };
        if self.free != NONE {
            let slot = self.free;
            self.free = self.nodes[slot].next;
            self.nodes[slot] = node;
            slot
        } else {
            self.nodes.push(node);
            self.nodes.len() - 1
        }
    }

    /// Inserts `value` at the front. O(1).
    pub fn push_front(&mut self, value: i64) {
        let slot = self.alloc(value, NONE, self.head);
        if self.head != NONE {
            self.nodes[self.head].prev = slot;
        } else {
            self.tail = slot;
        }
        self.head = slot;
        self.len += 1;
    }

    /// Appends `value` at the back. O(1).
    pub fn push_back(&mut self, value: i64) {
        let slot = self.alloc(value, self.tail, NONE);
        if self.tail != NONE {
            self.nodes[self.tail].next = slot;
        } else {
            self.head = slot;
        }
        self.tail = slot;
        self.len += 1;
    }

    /// Removes and returns the front element. O(1).
    pub fn pop_front(&mut self) -> Result<i64> {
        if self.head == NONE {
            return Err(Error::Empty);
        }
        Ok(self.remove_slot(self.head))
    }

    /// Removes and returns the back element. O(1).
    pub fn pop_back(&mut self) -> Result<i64> {
        if self.tail == NONE {
            return Err(Error::Empty);
        }
        Ok(self.remove_slot(self.tail))
    }

    /// Front element without removing it.
    pub fn front(&self) -> Result<i64> {
        if self.head == NONE {
            return Err(Error::Empty);
        }
        Ok(self.nodes[self.head].value)
    }

    /// Back element without removing it.
    pub fn back(&self) -> Result<i64> {
        if self.tail == NONE {
            return Err(Error::Empty);
        }
        Ok(self.nodes[self.tail].value)
    }

    /// Unlinks a live slot, frees it and returns its value.
    fn remove_slot(&mut self, slot: usize) -> i64 {
        let (prev, next, value) = {
            let node = &self.nodes[slot];
            (node.prev, node.next, node.value)
        };
        if prev != NONE {
            self.nodes[prev].next = next;
        } else {
            self.head = next;
        }
        if next != NONE {
            self.nodes[next].prev = prev;
        } else {
            self.tail = prev;
        }
        self.nodes[slot].next = self.free;
        self.free = slot;
        self.len -= 1;
        value
    }

    /// Slot index of the node at logical `index`, from the nearer end.
    /// Caller guarantees `index < len`.
    fn slot_at(&self, index: usize) -> usize {
        if index <= self.len / 2 {
            let mut cur = self.head;
            for _ in 0..index {
                cur = self.nodes[cur].next;
            }
            cur
        } else {
            let mut cur = self.tail;
            for _ in 0..self.len - 1 - index {
                cur = self.nodes[cur].prev;
            }
            cur
        }
    }

    /// Element at logical `index` from the front. O(min(i, n − i)).
    pub fn get_at(&self, index: usize) -> Result<i64> {
        if index >= self.len {
            return Err(Error::OutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(self.nodes[self.slot_at(index)].value)
    }

    /// Inserts `value` before the element at `index`; `index == len`
    /// appends.
    pub fn insert_at(&mut self, index: usize, value: i64) -> Result<()> {
        if index > self.len {
            return Err(Error::OutOfRange {
                index,
                len: self.len,
            });
        }
        if index == 0 {
            self.push_front(value);
        } else if index == self.len {
            self.push_back(value);
        } else {
            let after = self.slot_at(index);
            let before = self.nodes[after].prev;
            let slot = self.alloc(value, before, after);
            self.nodes[before].next = slot;
            self.nodes[after].prev = slot;
            self.len += 1;
        }
        Ok(())
    }

    /// Removes and returns the element at `index`.
    pub fn remove_at(&mut self, index: usize) -> Result<i64> {
        if index >= self.len {
            return Err(Error::OutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(self.remove_slot(self.slot_at(index)))
    }

    /// Whether `value` occurs anywhere in the deque.
    pub fn contains(&self, value: i64) -> bool {
        self.iter().any(|v| v == value)
    }

    /// Logical offset of the first occurrence of `value` from the front.
    pub fn index_of(&self, value: i64) -> Option<usize> {
        self.iter().position(|v| v == value)
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

    /// Reverses the deque in place: every node swaps its links, then head
    /// and tail trade places.
    pub fn reverse(&mut self) {
        let mut cur = self.head;
        while cur != NONE {
            let node = &mut self.nodes[cur];
            core::mem::swap(&mut node.prev, &mut node.next);
            cur = node.prev;
        }
        core::mem::swap(&mut self.head, &mut self.tail);
    }

    /// Visits each element front to back.
    pub fn for_each_forward(&self, mut f: impl FnMut(i64)) {
        for v in self.iter() {
            f(v);
        }
    }

    /// Visits each element back to front.
    pub fn for_each_backward(&self, mut f: impl FnMut(i64)) {
        let mut cur = self.tail;
        while cur != NONE {
            let node = &self.nodes[cur];
            f(node.value);
            cur = node.prev;
        }
    }

    /// New deque holding the elements for which `pred` returns true, in
    /// logical order.
    pub fn filter(&self, mut pred: impl FnMut(i64) -> bool) -> Self {
        let mut out = Self::new();
        for v in self.iter() {
            if pred(v) {
                out.push_back(v);
            }
        }
        out
    }

    /// New deque holding `f` applied to each element, in logical order.
    pub fn map(&self, mut f: impl FnMut(i64) -> i64) -> Self {
        let mut out = Self::new();
        for v in self.iter() {
            out.push_back(f(v));
        }
        out
    }

    /// Drops every node and the arena behind them.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = NONE;
        self.tail = NONE;
        self.free = NONE;
        self.len = 0;
    }

    /// Iterates front to back.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            deque: self,
            cur: self.head,
        }
    }

    /// Copies the elements out, front to back.
    pub fn to_vec(&self) -> Vec<i64> {
        self.iter().collect()
    }

    /// Copies the elements out, back to front.
    pub fn to_vec_reverse(&self) -> Vec<i64> {
        let mut out = Vec::with_capacity(self.len);
        self.for_each_backward(|v| out.push(v));
        out
    }
}

/// Iterator over a [`DoublyLinkedDeque`], front to back.
pub struct Iter<'a> {
    deque: &'a DoublyLinkedDeque,
    cur: usize,
}

impl Iterator for Iter<'_> {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if self.cur == NONE {
            return None;
        }
        let node = &self.deque.nodes[self.cur];
        self.cur = node.next;
        Some(node.value)
    }
}

impl Container for DoublyLinkedDeque {
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

impl Deque for DoublyLinkedDeque {
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

impl Default for DoublyLinkedDeque {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for DoublyLinkedDeque {
    fn clone(&self) -> Self {
        self.iter().collect()
    }
}

impl fmt::Debug for DoublyLinkedDeque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl fmt::Display for DoublyLinkedDeque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " <-> ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, "]")
    }
}

impl PartialEq for DoublyLinkedDeque {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}
impl Eq for DoublyLinkedDeque {}

impl Extend<i64> for DoublyLinkedDeque {
    fn extend<I: IntoIterator<Item = i64>>(&mut self, iter: I) {
        for v in iter {
            self.push_back(v);
        }
    }
}

impl FromIterator<i64> for DoublyLinkedDeque {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut d = Self::new();
        d.extend(iter);
        d
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ─── end ops ──────────────────────────────────────────────────────────────
    #[test]
    fn test_doubly_deque_all_four_ends() {
        let mut d = DoublyLinkedDeque::new();
        d.push_back(2);
        d.push_front(1);
        d.push_back(3);
        d.push_front(0);
        assert_eq!(d.to_vec(), vec![0, 1, 2, 3]);
        assert_eq!(d.front(), Ok(0));
        assert_eq!(d.back(), Ok(3));
        assert_eq!(d.pop_front(), Ok(0));
        assert_eq!(d.pop_back(), Ok(3));
        assert_eq!(d.to_vec(), vec![1, 2]);
    }

    #[test]
    fn test_doubly_deque_empty_errors() {
        let mut d = DoublyLinkedDeque::new();
        assert_eq!(d.pop_front(), Err(Error::Empty));
        assert_eq!(d.pop_back(), Err(Error::Empty));
        assert_eq!(d.front(), Err(Error::Empty));
        assert_eq!(d.back(), Err(Error::Empty));
    }

    #[test]
    fn test_doubly_deque_drain_from_alternating_ends() {
        let mut d: DoublyLinkedDeque = [1, 2, 3, 4, 5].into_iter().collect();
        assert_eq!(d.pop_front(), Ok(1));
        assert_eq!(d.pop_back(), Ok(5));
        assert_eq!(d.pop_front(), Ok(2));
        assert_eq!(d.pop_back(), Ok(4));
        assert_eq!(d.pop_front(), Ok(3));
        assert!(d.is_empty());
        // Reusable after full drain.
        d.push_back(6);
        assert_eq!(d.to_vec(), vec![6]);
        assert_eq!(d.to_vec_reverse(), vec![6]);
    }

    // ─── positional access ────────────────────────────────────────────────────
    #[test]
    fn test_doubly_deque_positional_ops() {
        let mut d: DoublyLinkedDeque = [10, 20, 40].into_iter().collect();
        assert_eq!(d.get_at(2), Ok(40));
        d.insert_at(2, 30).unwrap();
        assert_eq!(d.to_vec(), vec![10, 20, 30, 40]);
        assert_eq!(d.remove_at(1), Ok(20));
        assert_eq!(d.to_vec(), vec![10, 30, 40]);
        assert_eq!(d.to_vec_reverse(), vec![40, 30, 10]);
        assert_eq!(d.get_at(3), Err(Error::OutOfRange { index: 3, len: 3 }));
        assert_eq!(
            d.insert_at(5, 0),
            Err(Error::OutOfRange { index: 5, len: 3 })
        );
    }

    // ─── transforms ───────────────────────────────────────────────────────────
    #[test]
    fn test_doubly_deque_reverse() {
        let mut d: DoublyLinkedDeque = [1, 2, 3].into_iter().collect();
        d.reverse();
        assert_eq!(d.to_vec(), vec![3, 2, 1]);
        assert_eq!(d.to_vec_reverse(), vec![1, 2, 3]);
        d.push_front(4);
        d.push_back(0);
        assert_eq!(d.to_vec(), vec![4, 3, 2, 1, 0]);
    }

    #[test]
    fn test_doubly_deque_filter_map() {
        let d: DoublyLinkedDeque = [1, 2, 3, 4].into_iter().collect();
        assert_eq!(d.filter(|v| v % 2 == 1).to_vec(), vec![1, 3]);
        assert_eq!(d.map(|v| v * 10).to_vec(), vec![10, 20, 30, 40]);
        assert_eq!(d.to_vec(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_doubly_deque_for_each_directions() {
        let d: DoublyLinkedDeque = [1, 2, 3].into_iter().collect();
        let mut fwd = Vec::new();
        let mut bwd = Vec::new();
        d.for_each_forward(|v| fwd.push(v));
        d.for_each_backward(|v| bwd.push(v));
        assert_eq!(fwd, vec![1, 2, 3]);
        assert_eq!(bwd, vec![3, 2, 1]);
    }

    // ─── bulk ─────────────────────────────────────────────────────────────────
    #[test]
    fn test_doubly_deque_bulk_ops() {
        let mut d = DoublyLinkedDeque::new();
        d.extend_back(&[1, 2, 3, 4]);
        assert_eq!(d.pop_front_multiple(2).unwrap(), vec![1, 2]);
        assert_eq!(
            d.pop_front_multiple(3),
            Err(Error::Insufficient {
                requested: 3,
                available: 2
            })
        );
        assert_eq!(d.to_vec(), vec![3, 4]);
    }

    // ─── misc ─────────────────────────────────────────────────────────────────
    #[test]
    fn test_doubly_deque_search() {
        let d: DoublyLinkedDeque = [7, 8, 9].into_iter().collect();
        assert!(d.contains(8));
        assert!(!d.contains(10));
        assert_eq!(d.index_of(9), Some(2));
    }

    #[test]
    fn test_doubly_deque_slot_reuse() {
        let mut d: DoublyLinkedDeque = [1, 2, 3].into_iter().collect();
        d.pop_front().unwrap();
        d.pop_back().unwrap();
        d.push_back(4);
        d.push_front(0);
        assert_eq!(d.to_vec(), vec![0, 2, 4]);
        assert_eq!(d.to_vec_reverse(), vec![4, 2, 0]);
    }

    #[test]
    fn test_doubly_deque_trait_object() {
        let mut d = DoublyLinkedDeque::new();
        let dq: &mut dyn Deque = &mut d;
        dq.push_back(1);
        dq.push_front(0);
        assert_eq!(dq.front(), Ok(0));
        assert_eq!(dq.back(), Ok(1));
    }
}
