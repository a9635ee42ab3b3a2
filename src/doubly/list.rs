//! Doubly-linked list over an index arena.
//!
//! Every node sits in `nodes` and names its neighbours by index; `NONE`
//! marks a missing neighbour. Removal pushes the slot onto a free list
//! (threaded through `next`) and later insertions pop from it, so the
//! arena's length only grows while the set of live slots churns. Because
//! links are indices rather than references, walking backwards through
//! `prev` costs nothing extra and the borrow checker never sees a cycle.

use core::fmt;

use crate::error::{Error, Result};
use crate::traits::{Container, Deque, List};

/// Index sentinel for "no node".
const NONE: usize = usize::MAX;

/// Opaque handle to a live node, as returned by [`DoublyLinkedList::find_node`].
///
/// A handle goes stale when its node is removed; stale handles are
/// rejected by [`DoublyLinkedList::remove_node`] rather than corrupting
/// the chain, though a slot recycled by a later insertion cannot be told
/// apart from the original.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeId(usize);

struct Node {
    value: i64,
    prev: usize,
    next: usize,
    live: bool,
}

/// A doubly-linked list with O(1) operations at both ends and
/// nearer-end traversal for indexed access.
pub struct DoublyLinkedList {
    nodes: Vec<Node>,
    head: usize,
    tail: usize,
    free: usize,
    len: usize,
}

impl DoublyLinkedList {
    /// Creates an empty list.
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

    /// Whether the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Takes a slot off the free list, or grows the arena by one.
    fn alloc(&mut self, value: i64, prev: usize, next: usize) -> usize {
        let node = Node {
            value,
            prev,
            next,
            live: true,
        };
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

    /// Threads a slot onto the free list.
    fn release(&mut self, slot: usize) {
        self.nodes[slot].live = false;
        self.nodes[slot].prev = NONE;
        self.nodes[slot].next = self.free;
        self.free = slot;
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
        self.remove_slot(self.head)
    }

    /// Removes and returns the back element. O(1).
    pub fn pop_back(&mut self) -> Result<i64> {
        if self.tail == NONE {
            return Err(Error::Empty);
        }
        self.remove_slot(self.tail)
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

    /// Slot index of the node at logical `index`, walking from whichever
    /// end is nearer. Caller guarantees `index < len`.
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

    /// Element at logical `index`. O(min(i, n − i)).
    pub fn get(&self, index: usize) -> Result<i64> {
        if index >= self.len {
            return Err(Error::OutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(self.nodes[self.slot_at(index)].value)
    }

    /// Overwrites the element at logical `index`.
    pub fn set(&mut self, index: usize, value: i64) -> Result<()> {
        if index >= self.len {
            return Err(Error::OutOfRange {
                index,
                len: self.len,
            });
        }
        let slot = self.slot_at(index);
        self.nodes[slot].value = value;
        Ok(())
    }

    /// Inserts `value` before the element at `index`; `index == len`
    /// appends.
    pub fn insert(&mut self, index: usize, value: i64) -> Result<()> {
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
    pub fn remove(&mut self, index: usize) -> Result<i64> {
        if index >= self.len {
            return Err(Error::OutOfRange {
                index,
                len: self.len,
            });
        }
        self.remove_slot(self.slot_at(index))
    }

    /// Unlinks a live slot and frees it. Caller guarantees the slot is
    /// live.
    fn remove_slot(&mut self, slot: usize) -> Result<i64> {
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
        self.release(slot);
        self.len -= 1;
        Ok(value)
    }

    /// Removes the first occurrence of `value`. Returns whether anything
    /// was removed.
    pub fn remove_value(&mut self, value: i64) -> bool {
        let mut cur = self.head;
        while cur != NONE {
            if self.nodes[cur].value == value {
                let _ = self.remove_slot(cur);
                return true;
            }
            cur = self.nodes[cur].next;
        }
        false
    }

    /// Handle to a node holding `value`, searched from both ends at once.
    /// With two matches equidistant from the ends, either may be
    /// returned; use [`Self::index_of`] when the first occurrence
    /// matters.
    pub fn find_node(&self, value: i64) -> Option<NodeId> {
        let mut fwd = self.head;
        let mut bwd = self.tail;
        for _ in 0..(self.len + 1) / 2 {
            if self.nodes[fwd].value == value {
                return Some(NodeId(fwd));
            }
            if self.nodes[bwd].value == value {
                return Some(NodeId(bwd));
            }
            fwd = self.nodes[fwd].next;
            bwd = self.nodes[bwd].prev;
        }
        None
    }

    /// Removes the node behind `id` with an O(1) relink. Fails on stale
    /// handles (already-removed nodes) instead of corrupting the chain.
    pub fn remove_node(&mut self, id: NodeId) -> Result<i64> {
        if id.0 >= self.nodes.len() || !self.nodes[id.0].live {
            return Err(Error::OutOfRange {
                index: id.0,
                len: self.len,
            });
        }
        self.remove_slot(id.0)
    }

    /// Whether `value` occurs anywhere in the list.
    pub fn contains(&self, value: i64) -> bool {
        self.find_node(value).is_some()
    }

    /// Logical index of the first occurrence of `value`.
    pub fn index_of(&self, value: i64) -> Option<usize> {
        self.iter().position(|v| v == value)
    }

    /// Whether the list reads the same forwards and backwards.
    pub fn is_palindrome(&self) -> bool {
        let mut fwd = self.head;
        let mut bwd = self.tail;
        for _ in 0..self.len / 2 {
            if self.nodes[fwd].value != self.nodes[bwd].value {
                return false;
            }
            fwd = self.nodes[fwd].next;
            bwd = self.nodes[bwd].prev;
        }
        true
    }

    /// Reverses the list in place: every node swaps its links, then head
    /// and tail trade places.
    pub fn reverse(&mut self) {
        let mut cur = self.head;
        while cur != NONE {
            let node = &mut self.nodes[cur];
            core::mem::swap(&mut node.prev, &mut node.next);
            // After the swap the old next sits in prev.
            cur = node.prev;
        }
        core::mem::swap(&mut self.head, &mut self.tail);
    }

    /// Rotates `k` positions to the left: the first `k` elements move to
    /// the back. `k` is normalized modulo the length.
    pub fn rotate_left(&mut self, k: usize) {
        if self.len == 0 {
            return;
        }
        let k = k % self.len;
        for _ in 0..k {
            if let Ok(v) = self.pop_front() {
                self.push_back(v);
            }
        }
    }

    /// Rotates `k` positions to the right: the last `k` elements move to
    /// the front.
    pub fn rotate_right(&mut self, k: usize) {
        if self.len == 0 {
            return;
        }
        let k = k % self.len;
        if k > 0 {
            self.rotate_left(self.len - k);
        }
    }

    /// Removes all but the first occurrence of every value. Returns how
    /// many elements were dropped.
    pub fn remove_duplicates(&mut self) -> usize {
        let mut seen: Vec<i64> = Vec::with_capacity(self.len);
        let mut doomed: Vec<usize> = Vec::new();
        let mut cur = self.head;
        while cur != NONE {
            let value = self.nodes[cur].value;
            if seen.contains(&value) {
                doomed.push(cur);
            } else {
                seen.push(value);
            }
            cur = self.nodes[cur].next;
        }
        let removed = doomed.len();
        for slot in doomed {
            let _ = self.remove_slot(slot);
        }
        removed
    }

    /// Middle element; for an even length this is the second of the two
    /// central elements.
    pub fn middle(&self) -> Option<i64> {
        if self.len == 0 {
            return None;
        }
        let mut cur = self.head;
        for _ in 0..self.len / 2 {
            cur = self.nodes[cur].next;
        }
        Some(self.nodes[cur].value)
    }

    /// Appends every element of `values` at the back, in order.
    pub fn extend_from_slice(&mut self, values: &[i64]) {
        for &v in values {
            self.push_back(v);
        }
    }

    /// Inserts `values` as a block at the front, keeping the slice order.
    pub fn prepend_all(&mut self, values: &[i64]) {
        for &v in values.iter().rev() {
            self.push_front(v);
        }
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
            list: self,
            cur: self.head,
        }
    }

    /// Iterates back to front.
    pub fn iter_rev(&self) -> IterRev<'_> {
        IterRev {
            list: self,
            cur: self.tail,
        }
    }

    /// Copies the elements out, front to back.
    pub fn to_vec(&self) -> Vec<i64> {
        self.iter().collect()
    }

    /// Copies the elements out, back to front.
    pub fn to_vec_reverse(&self) -> Vec<i64> {
        self.iter_rev().collect()
    }
}

/// Iterator over a [`DoublyLinkedList`], front to back.
pub struct Iter<'a> {
    list: &'a DoublyLinkedList,
    cur: usize,
}

impl Iterator for Iter<'_> {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if self.cur == NONE {
            return None;
        }
        let node = &self.list.nodes[self.cur];
        self.cur = node.next;
        Some(node.value)
    }
}

/// Iterator over a [`DoublyLinkedList`], back to front.
pub struct IterRev<'a> {
    list: &'a DoublyLinkedList,
    cur: usize,
}

impl Iterator for IterRev<'_> {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if self.cur == NONE {
            return None;
        }
        let node = &self.list.nodes[self.cur];
        self.cur = node.prev;
        Some(node.value)
    }
}

impl Container for DoublyLinkedList {
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

impl List for DoublyLinkedList {
    fn get(&self, index: usize) -> Result<i64> {
        self.get(index)
    }
    fn set(&mut self, index: usize, value: i64) -> Result<()> {
        self.set(index, value)
    }
    fn push(&mut self, value: i64) {
        self.push_back(value);
    }
    fn insert(&mut self, index: usize, value: i64) -> Result<()> {
        self.insert(index, value)
    }
    fn remove(&mut self, index: usize) -> Result<i64> {
        self.remove(index)
    }
    fn remove_value(&mut self, value: i64) -> bool {
        self.remove_value(value)
    }
    fn index_of(&self, value: i64) -> Option<usize> {
        self.index_of(value)
    }
}

impl Deque for DoublyLinkedList {
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

impl Default for DoublyLinkedList {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for DoublyLinkedList {
    fn clone(&self) -> Self {
        self.iter().collect()
    }
}

impl fmt::Debug for DoublyLinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl fmt::Display for DoublyLinkedList {
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

impl PartialEq for DoublyLinkedList {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}
impl Eq for DoublyLinkedList {}

impl Extend<i64> for DoublyLinkedList {
    fn extend<I: IntoIterator<Item = i64>>(&mut self, iter: I) {
        for v in iter {
            self.push_back(v);
        }
    }
}

impl FromIterator<i64> for DoublyLinkedList {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ─── both ends ────────────────────────────────────────────────────────────
    #[test]
    fn test_doubly_list_push_pop_both_ends() {
        let mut list = DoublyLinkedList::new();
        list.push_back(2);
        list.push_front(1);
        list.push_back(3);
        assert_eq!(list.to_vec(), vec![1, 2, 3]);
        assert_eq!(list.to_vec_reverse(), vec![3, 2, 1]);
        assert_eq!(list.pop_front(), Ok(1));
        assert_eq!(list.pop_back(), Ok(3));
        assert_eq!(list.pop_back(), Ok(2));
        assert_eq!(list.pop_back(), Err(Error::Empty));
        assert_eq!(list.pop_front(), Err(Error::Empty));
    }

    #[test]
    fn test_doubly_list_single_element_removal_clears_both_links() {
        let mut list = DoublyLinkedList::new();
        list.push_back(7);
        assert_eq!(list.pop_front(), Ok(7));
        assert!(list.is_empty());
        assert_eq!(list.front(), Err(Error::Empty));
        assert_eq!(list.back(), Err(Error::Empty));
        // Head and tail are both cleared, so the list stays usable.
        list.push_front(8);
        assert_eq!(list.to_vec(), vec![8]);
        assert_eq!(list.to_vec_reverse(), vec![8]);
    }

    // ─── indexed access ───────────────────────────────────────────────────────
    #[test]
    fn test_doubly_list_get_set_nearer_end() {
        let list: DoublyLinkedList = (0..10).collect();
        // Indices in both halves, exercising both walk directions.
        assert_eq!(list.get(0), Ok(0));
        assert_eq!(list.get(2), Ok(2));
        assert_eq!(list.get(7), Ok(7));
        assert_eq!(list.get(9), Ok(9));
        assert_eq!(list.get(10), Err(Error::OutOfRange { index: 10, len: 10 }));
        let mut list = list;
        list.set(8, 80).unwrap();
        assert_eq!(list.get(8), Ok(80));
    }

    #[test]
    fn test_doubly_list_insert_remove_middle() {
        let mut list: DoublyLinkedList = [1, 2, 4].into_iter().collect();
        list.insert(2, 3).unwrap();
        assert_eq!(list.to_vec(), vec![1, 2, 3, 4]);
        assert_eq!(list.to_vec_reverse(), vec![4, 3, 2, 1]);
        list.insert(4, 5).unwrap(); // append position
        assert_eq!(list.remove(2), Ok(3));
        assert_eq!(list.to_vec(), vec![1, 2, 4, 5]);
        assert_eq!(
            list.insert(6, 0),
            Err(Error::OutOfRange { index: 6, len: 4 })
        );
    }

    // ─── node handles ─────────────────────────────────────────────────────────
    #[test]
    fn test_doubly_list_find_and_remove_node() {
        let mut list: DoublyLinkedList = [10, 20, 30, 40, 50].into_iter().collect();
        let id = list.find_node(30).unwrap();
        assert_eq!(list.remove_node(id), Ok(30));
        assert_eq!(list.to_vec(), vec![10, 20, 40, 50]);
        // The handle is now stale.
        assert!(matches!(
            list.remove_node(id),
            Err(Error::OutOfRange { .. })
        ));
        assert_eq!(list.find_node(99), None);
    }

    #[test]
    fn test_doubly_list_slot_reuse_after_removal() {
        let mut list: DoublyLinkedList = [1, 2, 3].into_iter().collect();
        list.remove(1).unwrap();
        list.push_back(4);
        list.push_back(5);
        assert_eq!(list.to_vec(), vec![1, 3, 4, 5]);
        assert_eq!(list.to_vec_reverse(), vec![5, 4, 3, 1]);
    }

    // ─── whole-list transforms ────────────────────────────────────────────────
    #[test]
    fn test_doubly_list_reverse() {
        let mut list: DoublyLinkedList = [1, 2, 3, 4].into_iter().collect();
        list.reverse();
        assert_eq!(list.to_vec(), vec![4, 3, 2, 1]);
        assert_eq!(list.to_vec_reverse(), vec![1, 2, 3, 4]);
        assert_eq!(list.front(), Ok(4));
        assert_eq!(list.back(), Ok(1));
        // Still a sound chain after the swap.
        list.push_back(0);
        assert_eq!(list.to_vec(), vec![4, 3, 2, 1, 0]);
    }

    #[test]
    fn test_doubly_list_rotate() {
        let mut list: DoublyLinkedList = [1, 2, 3, 4, 5, 6].into_iter().collect();
        list.rotate_left(2);
        assert_eq!(list.to_vec(), vec![3, 4, 5, 6, 1, 2]);
        list.rotate_right(2);
        assert_eq!(list.to_vec(), vec![1, 2, 3, 4, 5, 6]);
        list.rotate_left(6); // identity
        list.rotate_right(0); // identity
        assert_eq!(list.to_vec(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_doubly_list_palindrome() {
        let even: DoublyLinkedList = [1, 2, 2, 1].into_iter().collect();
        let odd: DoublyLinkedList = [1, 2, 1].into_iter().collect();
        let no: DoublyLinkedList = [1, 2, 3].into_iter().collect();
        let empty = DoublyLinkedList::new();
        assert!(even.is_palindrome());
        assert!(odd.is_palindrome());
        assert!(!no.is_palindrome());
        assert!(empty.is_palindrome());
    }

    #[test]
    fn test_doubly_list_remove_duplicates() {
        let mut list: DoublyLinkedList = [1, 2, 1, 3, 2, 1].into_iter().collect();
        assert_eq!(list.remove_duplicates(), 3);
        assert_eq!(list.to_vec(), vec![1, 2, 3]);
        assert_eq!(list.to_vec_reverse(), vec![3, 2, 1]);
        assert_eq!(list.remove_duplicates(), 0);
    }

    #[test]
    fn test_doubly_list_middle() {
        let odd: DoublyLinkedList = [1, 2, 3, 4, 5].into_iter().collect();
        let even: DoublyLinkedList = [1, 2, 3, 4].into_iter().collect();
        assert_eq!(odd.middle(), Some(3));
        assert_eq!(even.middle(), Some(3)); // second of the central pair
        assert_eq!(DoublyLinkedList::new().middle(), None);
    }

    // ─── search ───────────────────────────────────────────────────────────────
    #[test]
    fn test_doubly_list_search() {
        let list: DoublyLinkedList = [5, 6, 7, 6].into_iter().collect();
        assert!(list.contains(7));
        assert!(!list.contains(8));
        assert_eq!(list.index_of(6), Some(1));
        assert_eq!(list.index_of(9), None);
    }

    // ─── bulk ─────────────────────────────────────────────────────────────────
    #[test]
    fn test_doubly_list_bulk_ops() {
        let mut list = DoublyLinkedList::new();
        list.extend_from_slice(&[3, 4]);
        list.prepend_all(&[1, 2]);
        assert_eq!(list.to_vec(), vec![1, 2, 3, 4]);
        assert!(list.remove_value(2));
        assert!(!list.remove_value(9));
        assert_eq!(list.to_vec(), vec![1, 3, 4]);
    }

    // ─── contracts ────────────────────────────────────────────────────────────
    #[test]
    fn test_doubly_list_as_list_and_deque() {
        let mut list = DoublyLinkedList::new();
        {
            let l: &mut dyn List = &mut list;
            l.push(1);
            l.push(2);
            l.insert(1, 9).unwrap();
            assert_eq!(l.get(1), Ok(9));
        }
        {
            let d: &mut dyn Deque = &mut list;
            d.push_front(0);
            assert_eq!(d.pop_back(), Ok(2));
        }
        assert_eq!(list.to_vec(), vec![0, 1, 9]);
    }

    #[test]
    fn test_doubly_list_clear_then_reuse() {
        let mut list: DoublyLinkedList = [1, 2, 3].into_iter().collect();
        list.clear();
        assert!(list.is_empty());
        list.push_back(4);
        assert_eq!(list.to_vec(), vec![4]);
    }
}
