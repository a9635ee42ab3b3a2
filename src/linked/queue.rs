//! FIFO queue over a singly-linked chain with a tail pointer.
//!
//! The head of the chain owns every node; `tail` is a non-owning raw
//! pointer to the last node so `enqueue` stays O(1). The only invariant
//! that needs care is keeping `tail` honest: it must be cleared when the
//! chain empties and refreshed whenever the last node changes.
//!
//! # Safety
//! `tail` is only ever dereferenced while the chain is non-empty, and
//! every node lives in a `Box` whose heap address is stable for as long
//! as the chain owns it. All mutations that can invalidate `tail`
//! (dequeue-to-empty, clear, reverse, clone) reset or recompute it before
//! returning.

use core::fmt;
use core::ptr::NonNull;

use crate::error::{Error, Result};
use crate::traits::{Container, Queue};

struct Node {
    value: i64,
    next: Option<Box<Node>>,
}

/// A queue over a singly-linked chain. Head is the front.
pub struct LinkedQueue {
    head: Option<Box<Node>>,
    tail: Option<NonNull<Node>>,
    len: usize,
}

impl LinkedQueue {
    /// Creates an empty queue.
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

    /// Whether the queue is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends `value` at the rear. O(1) thanks to the tail pointer.
    pub fn enqueue(&mut self, value: i64) {
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

    /// Removes and returns the front element. O(1). Nulls the tail when
    /// the chain empties.
    pub fn dequeue(&mut self) -> Result<i64> {
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

    /// Front element without removing it.
    pub fn front(&self) -> Result<i64> {
        match self.head.as_deref() {
            Some(node) => Ok(node.value),
            None => Err(Error::Empty),
        }
    }

    /// Rear element without removing it.
    pub fn rear(&self) -> Result<i64> {
        match self.tail {
            // Safety: non-empty chain, tail points at its last node.
            Some(tail) => Ok(unsafe { tail.as_ref().value }),
            None => Err(Error::Empty),
        }
    }

    /// Enqueues every element of `values` in order.
    pub fn enqueue_all(&mut self, values: &[i64]) {
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

    /// Drops every node. Iterative.
    pub fn clear(&mut self) {
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
        self.tail = None;
        self.len = 0;
    }

    /// Whether `value` occurs anywhere in the queue.
    pub fn contains(&self, value: i64) -> bool {
        self.iter().any(|v| v == value)
    }

    /// Logical offset of the first occurrence of `value` from the front.
    pub fn index_of(&self, value: i64) -> Option<usize> {
        self.iter().position(|v| v == value)
    }

    /// Iterates front to rear.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// Copies the elements out, front to rear.
    pub fn to_vec(&self) -> Vec<i64> {
        self.iter().collect()
    }

    /// Rotates the queue `k` positions to the left (front elements move
    /// to the rear). `k` is normalized modulo the length.
    pub fn rotate(&mut self, k: usize) {
        if self.len == 0 {
            return;
        }
        let k = k % self.len;
        for _ in 0..k {
            if let Ok(v) = self.dequeue() {
                self.enqueue(v);
            }
        }
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

    /// New queue holding the elements for which `pred` returns true, in
    /// logical order.
    pub fn filter(&self, mut pred: impl FnMut(i64) -> bool) -> Self {
        let mut out = Self::new();
        for v in self.iter() {
            if pred(v) {
                out.enqueue(v);
            }
        }
        out
    }

    /// New queue holding `f` applied to each element, in logical order.
    pub fn map(&self, mut f: impl FnMut(i64) -> i64) -> Self {
        let mut out = Self::new();
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

/// Iterator over a [`LinkedQueue`], front to rear.
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

impl Drop for LinkedQueue {
    fn drop(&mut self) {
        self.clear();
    }
}

impl Clone for LinkedQueue {
    fn clone(&self) -> Self {
        let mut out = Self::new();
        for v in self.iter() {
            out.enqueue(v);
        }
        out
    }
}

impl Container for LinkedQueue {
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

impl Queue for LinkedQueue {
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

impl Default for LinkedQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LinkedQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl fmt::Display for LinkedQueue {
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

impl PartialEq for LinkedQueue {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}
impl Eq for LinkedQueue {}

impl Extend<i64> for LinkedQueue {
    fn extend<I: IntoIterator<Item = i64>>(&mut self, iter: I) {
        for v in iter {
            self.enqueue(v);
        }
    }
}

impl FromIterator<i64> for LinkedQueue {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut q = Self::new();
        q.extend(iter);
        q
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ─── basic ops ────────────────────────────────────────────────────────────
    #[test]
    fn test_linked_queue_fifo() {
        let mut q = LinkedQueue::new();
        q.enqueue(1);
        q.enqueue(2);
        q.enqueue(3);
        assert_eq!(q.front(), Ok(1));
        assert_eq!(q.rear(), Ok(3));
        assert_eq!(q.dequeue(), Ok(1));
        assert_eq!(q.dequeue(), Ok(2));
        assert_eq!(q.len(), 1);
    }

    #[test]
    fn test_linked_queue_empty_errors() {
        let mut q = LinkedQueue::new();
        assert_eq!(q.dequeue(), Err(Error::Empty));
        assert_eq!(q.front(), Err(Error::Empty));
        assert_eq!(q.rear(), Err(Error::Empty));
    }

    #[test]
    fn test_linked_queue_tail_reset_on_empty() {
        let mut q = LinkedQueue::new();
        q.enqueue(1);
        assert_eq!(q.dequeue(), Ok(1));
        assert!(q.is_empty());
        // The tail must have been nulled: enqueue after emptying must not
        // touch the freed node.
        q.enqueue(2);
        assert_eq!(q.front(), Ok(2));
        assert_eq!(q.rear(), Ok(2));
    }

    // ─── transforms ───────────────────────────────────────────────────────────
    #[test]
    fn test_linked_queue_rotate() {
        let mut q: LinkedQueue = [1, 2, 3, 4, 5, 6].into_iter().collect();
        q.rotate(2);
        assert_eq!(q.to_vec(), vec![3, 4, 5, 6, 1, 2]);
        q.rotate(6); // identity
        assert_eq!(q.to_vec(), vec![3, 4, 5, 6, 1, 2]);
    }

    #[test]
    fn test_linked_queue_reverse_keeps_tail_honest() {
        let mut q: LinkedQueue = [1, 2, 3].into_iter().collect();
        q.reverse();
        assert_eq!(q.to_vec(), vec![3, 2, 1]);
        assert_eq!(q.rear(), Ok(1));
        q.enqueue(0);
        assert_eq!(q.to_vec(), vec![3, 2, 1, 0]);
    }

    #[test]
    fn test_linked_queue_filter_map_reduce() {
        let q: LinkedQueue = [1, 2, 3, 4, 5].into_iter().collect();
        assert_eq!(q.filter(|v| v > 3).to_vec(), vec![4, 5]);
        assert_eq!(q.map(|v| v + 1).to_vec(), vec![2, 3, 4, 5, 6]);
        assert_eq!(q.reduce(0, |acc, v| acc + v), 15);
        assert_eq!(q.to_vec(), vec![1, 2, 3, 4, 5]);
    }

    // ─── bulk ─────────────────────────────────────────────────────────────────
    #[test]
    fn test_linked_queue_bulk_ops() {
        let mut q = LinkedQueue::new();
        q.enqueue_all(&[1, 2, 3]);
        assert_eq!(q.dequeue_multiple(2).unwrap(), vec![1, 2]);
        assert_eq!(
            q.dequeue_multiple(2),
            Err(Error::Insufficient {
                requested: 2,
                available: 1
            })
        );
    }

    // ─── ownership ────────────────────────────────────────────────────────────
    #[test]
    fn test_linked_queue_clone_is_deep() {
        let mut a: LinkedQueue = [1, 2, 3].into_iter().collect();
        let b = a.clone();
        a.dequeue().unwrap();
        a.enqueue(4);
        assert_eq!(b.to_vec(), vec![1, 2, 3]);
        assert_eq!(b.rear(), Ok(3));
        assert_eq!(a.to_vec(), vec![2, 3, 4]);
    }

    #[test]
    fn test_linked_queue_long_chain_drop() {
        let mut q = LinkedQueue::new();
        for _ in 0..200_000 {
            q.enqueue(0);
        }
        drop(q);
    }

    // ─── misc ─────────────────────────────────────────────────────────────────
    #[test]
    fn test_linked_queue_search() {
        let q: LinkedQueue = [9, 8, 7].into_iter().collect();
        assert_eq!(q.index_of(8), Some(1));
        assert!(q.contains(7));
        assert!(!q.contains(6));
    }

    #[test]
    fn test_linked_queue_clear_then_reuse() {
        let mut q: LinkedQueue = [1, 2].into_iter().collect();
        q.clear();
        q.clear();
        assert!(q.is_empty());
        q.enqueue(5);
        assert_eq!(q.rear(), Ok(5));
    }
}
