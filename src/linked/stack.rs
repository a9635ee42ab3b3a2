//! LIFO stack over a singly-linked chain.
//!
//! The head of the chain is the top of the stack, so `push`, `pop` and
//! `peek` are all O(1) with no capacity bookkeeping at all — the chain is
//! exactly as long as the stack.

use core::fmt;

use crate::error::{Error, Result};
use crate::traits::{Container, Stack};

struct Node {
    value: i64,
    next: Option<Box<Node>>,
}

/// A stack over a singly-linked chain. Head is the top.
pub struct LinkedStack {
    top: Option<Box<Node>>,
    len: usize,
}

impl LinkedStack {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self { top: None, len: 0 }
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

    /// Pushes `value` on top. O(1).
    pub fn push(&mut self, value: i64) {
        self.top = Some(Box::new(Node {
            value,
            next: self.top.take(),
        }));
        self.len += 1;
    }

    /// Removes and returns the top element. O(1).
    pub fn pop(&mut self) -> Result<i64> {
        match self.top.take() {
            Some(mut node) => {
                self.top = node.next.take();
                self.len -= 1;
                Ok(node.value)
            }
            None => Err(Error::Empty),
        }
    }

    /// Top element without removing it.
    pub fn peek(&self) -> Result<i64> {
        match self.top.as_deref() {
            Some(node) => Ok(node.value),
            None => Err(Error::Empty),
        }
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

    /// Pushes every element of `values` in order, leaving the last slice
    /// element on top.
    pub fn push_all(&mut self, values: &[i64]) {
        for &v in values {
            self.push(v);
        }
    }

    /// Drops every node. Iterative.
    pub fn clear(&mut self) {
        let mut cur = self.top.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
        self.len = 0;
    }

    /// Whether `value` occurs anywhere in the stack.
    pub fn contains(&self, value: i64) -> bool {
        self.iter().any(|v| v == value)
    }

    /// 1-based distance of `value` from the top (1 = top element), or
    /// `None` if absent.
    pub fn search(&self, value: i64) -> Option<usize> {
        self.iter().position(|v| v == value).map(|i| i + 1)
    }

    /// Iterates top to base.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.top.as_deref(),
        }
    }

    /// Copies the elements out, top to base.
    pub fn to_vec(&self) -> Vec<i64> {
        self.iter().collect()
    }

    /// Reverses the stack in place: single pass, each link flipped once.
    pub fn reverse(&mut self) {
        let mut prev = None;
        let mut cur = self.top.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
            node.next = prev;
            prev = Some(node);
        }
        self.top = prev;
    }

    /// New stack holding the elements for which `pred` returns true, with
    /// their relative order (top stays nearest the top).
    pub fn filter(&self, mut pred: impl FnMut(i64) -> bool) -> Self {
        let kept: Vec<i64> = self.iter().filter(|&v| pred(v)).collect();
        let mut out = Self::new();
        for &v in kept.iter().rev() {
            out.push(v);
        }
        out
    }

    /// New stack holding `f` applied to each element, order preserved.
    pub fn map(&self, mut f: impl FnMut(i64) -> i64) -> Self {
        let mapped: Vec<i64> = self.iter().map(&mut f).collect();
        let mut out = Self::new();
        for &v in mapped.iter().rev() {
            out.push(v);
        }
        out
    }

    /// Folds the elements top to base.
    pub fn reduce(&self, init: i64, mut f: impl FnMut(i64, i64) -> i64) -> i64 {
        let mut acc = init;
        for v in self.iter() {
            acc = f(acc, v);
        }
        acc
    }

    /// Visits each element top to base.
    pub fn for_each(&self, mut f: impl FnMut(i64)) {
        for v in self.iter() {
            f(v);
        }
    }
}

/// Iterator over a [`LinkedStack`], top to base.
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

impl Drop for LinkedStack {
    fn drop(&mut self) {
        self.clear();
    }
}

impl Clone for LinkedStack {
    fn clone(&self) -> Self {
        let values = self.to_vec(); // top to base
        let mut out = Self::new();
        for &v in values.iter().rev() {
            out.push(v);
        }
        out
    }
}

impl Container for LinkedStack {
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

impl Stack for LinkedStack {
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

impl Default for LinkedStack {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LinkedStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl fmt::Display for LinkedStack {
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

impl PartialEq for LinkedStack {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}
impl Eq for LinkedStack {}

impl Extend<i64> for LinkedStack {
    fn extend<I: IntoIterator<Item = i64>>(&mut self, iter: I) {
        for v in iter {
            self.push(v);
        }
    }
}

impl FromIterator<i64> for LinkedStack {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut s = Self::new();
        s.extend(iter);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ─── basic ops ────────────────────────────────────────────────────────────
    #[test]
    fn test_linked_stack_lifo() {
        let mut s = LinkedStack::new();
        s.push(1);
        s.push(2);
        s.push(3);
        assert_eq!(s.peek(), Ok(3));
        assert_eq!(s.pop(), Ok(3));
        assert_eq!(s.pop(), Ok(2));
        assert_eq!(s.pop(), Ok(1));
        assert_eq!(s.pop(), Err(Error::Empty));
        assert_eq!(s.peek(), Err(Error::Empty));
    }

    #[test]
    fn test_linked_stack_tail_nulling_via_clear() {
        let mut s: LinkedStack = [1, 2, 3].into_iter().collect();
        s.clear();
        assert!(s.is_empty());
        s.push(9);
        assert_eq!(s.to_vec(), vec![9]);
    }

    #[test]
    fn test_linked_stack_to_vec_top_to_base() {
        let s: LinkedStack = [1, 2, 3].into_iter().collect();
        assert_eq!(s.to_vec(), vec![3, 2, 1]);
    }

    // ─── bulk ─────────────────────────────────────────────────────────────────
    #[test]
    fn test_linked_stack_push_all_pop_multiple() {
        let mut s = LinkedStack::new();
        s.push_all(&[1, 2, 3, 4]);
        assert_eq!(s.pop_multiple(2).unwrap(), vec![4, 3]);
        assert_eq!(
            s.pop_multiple(5),
            Err(Error::Insufficient {
                requested: 5,
                available: 2
            })
        );
        assert_eq!(s.len(), 2);
    }

    // ─── transforms ───────────────────────────────────────────────────────────
    #[test]
    fn test_linked_stack_reverse() {
        let mut s: LinkedStack = [1, 2, 3].into_iter().collect();
        s.reverse();
        assert_eq!(s.to_vec(), vec![1, 2, 3]);
        assert_eq!(s.peek(), Ok(1));
    }

    #[test]
    fn test_linked_stack_filter_map_reduce() {
        let s: LinkedStack = [1, 2, 3, 4].into_iter().collect();
        let evens = s.filter(|v| v % 2 == 0);
        assert_eq!(evens.to_vec(), vec![4, 2]);
        let doubled = s.map(|v| v * 2);
        assert_eq!(doubled.to_vec(), vec![8, 6, 4, 2]);
        assert_eq!(s.reduce(0, |acc, v| acc + v), 10);
        // Source untouched.
        assert_eq!(s.to_vec(), vec![4, 3, 2, 1]);
    }

    // ─── ownership ────────────────────────────────────────────────────────────
    #[test]
    fn test_linked_stack_clone_is_deep() {
        let mut a: LinkedStack = [1, 2].into_iter().collect();
        let b = a.clone();
        a.push(3);
        assert_eq!(b.to_vec(), vec![2, 1]);
        assert_eq!(a.to_vec(), vec![3, 2, 1]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_linked_stack_long_chain_drop() {
        let mut s = LinkedStack::new();
        for _ in 0..200_000 {
            s.push(0);
        }
        drop(s);
    }

    // ─── misc ─────────────────────────────────────────────────────────────────
    #[test]
    fn test_linked_stack_search_depth() {
        let s: LinkedStack = [10, 20, 30].into_iter().collect();
        assert_eq!(s.search(30), Some(1));
        assert_eq!(s.search(10), Some(3));
        assert_eq!(s.search(40), None);
    }
}
