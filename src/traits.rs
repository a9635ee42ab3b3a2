//! Capability contracts satisfied by the concrete containers.
//!
//! Algorithms in [`crate::algorithms`] are written against these traits
//! only, which is what lets the same search/sort/merge logic run unchanged
//! over an array-backed or a linked implementation. Each concrete container
//! implements the subset of contracts its semantics support; complexity
//! guarantees belong to the implementation, not the contract (a linked
//! `get(i)` is O(i), an array `get(i)` is O(1) — both are correct).

use crate::error::{Error, Result};

/// Operations common to every container.
pub trait Container {
    /// Number of elements currently stored.
    fn len(&self) -> usize;

    /// Whether the container holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes all elements. Idempotent.
    fn clear(&mut self);

    /// Copies the logical sequence out. Insertion order for lists and
    /// queues, top-to-base for stacks, front-to-back for deques.
    fn to_vec(&self) -> Vec<i64>;
}

/// Positional access: random read/write, insertion and removal by index.
pub trait List: Container {
    /// Element at `index`, or [`Error::OutOfRange`].
    fn get(&self, index: usize) -> Result<i64>;

    /// Overwrites the element at `index`, or [`Error::OutOfRange`].
    fn set(&mut self, index: usize, value: i64) -> Result<()>;

    /// Appends `value` at the end.
    fn push(&mut self, value: i64);

    /// Inserts `value` at `index`, shifting later elements right. Valid
    /// for `0 <= index <= len`.
    fn insert(&mut self, index: usize, value: i64) -> Result<()>;

    /// Removes and returns the element at `index`, shifting later
    /// elements left. Valid for `0 <= index < len`.
    fn remove(&mut self, index: usize) -> Result<i64>;

    /// Removes the first occurrence of `value`. Returns whether anything
    /// was removed.
    fn remove_value(&mut self, value: i64) -> bool {
        match self.index_of(value) {
            Some(i) => self.remove(i).is_ok(),
            None => false,
        }
    }

    /// Index of the first occurrence of `value`.
    fn index_of(&self, value: i64) -> Option<usize>;

    /// Whether `value` occurs anywhere in the list.
    fn contains(&self, value: i64) -> bool {
        self.index_of(value).is_some()
    }
}

/// LIFO discipline.
pub trait Stack: Container {
    /// Pushes `value` on top.
    fn push(&mut self, value: i64);

    /// Removes and returns the top element, or [`Error::Empty`].
    fn pop(&mut self) -> Result<i64>;

    /// Top element without removing it, or [`Error::Empty`].
    fn peek(&self) -> Result<i64>;

    /// Growable stacks resize before they are ever observably full, so
    /// this stays `false` for every implementation in this crate.
    fn is_full(&self) -> bool {
        false
    }

    /// Pops `count` elements, top first. Fails with
    /// [`Error::Insufficient`] before mutating anything if fewer than
    /// `count` are present.
    fn pop_multiple(&mut self, count: usize) -> Result<Vec<i64>> {
        if count > self.len() {
            return Err(Error::Insufficient {
                requested: count,
                available: self.len(),
            });
        }
        (0..count).map(|_| self.pop()).collect()
    }
}

/// FIFO discipline.
pub trait Queue: Container {
    /// Appends `value` at the rear.
    fn enqueue(&mut self, value: i64);

    /// Removes and returns the front element, or [`Error::Empty`].
    fn dequeue(&mut self) -> Result<i64>;

    /// Front element without removing it, or [`Error::Empty`].
    fn front(&self) -> Result<i64>;

    /// Rear element without removing it, or [`Error::Empty`].
    fn rear(&self) -> Result<i64>;

    /// See [`Stack::is_full`]; growable queues are never observably full.
    fn is_full(&self) -> bool {
        false
    }

    /// Dequeues `count` elements in FIFO order. Fails with
    /// [`Error::Insufficient`] before mutating anything if fewer than
    /// `count` are present.
    fn dequeue_multiple(&mut self, count: usize) -> Result<Vec<i64>> {
        if count > self.len() {
            return Err(Error::Insufficient {
                requested: count,
                available: self.len(),
            });
        }
        (0..count).map(|_| self.dequeue()).collect()
    }
}

/// Double-ended discipline: insertion and removal at both ends.
pub trait Deque: Container {
    /// Prepends `value` at the front.
    fn push_front(&mut self, value: i64);

    /// Appends `value` at the back.
    fn push_back(&mut self, value: i64);

    /// Removes and returns the front element, or [`Error::Empty`].
    fn pop_front(&mut self) -> Result<i64>;

    /// Removes and returns the back element, or [`Error::Empty`].
    fn pop_back(&mut self) -> Result<i64>;

    /// Front element without removing it, or [`Error::Empty`].
    fn front(&self) -> Result<i64>;

    /// Back element without removing it, or [`Error::Empty`].
    fn back(&self) -> Result<i64>;

    /// See [`Stack::is_full`].
    fn is_full(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array::{ArrayQueue, ArrayStack};
    use crate::linked::LinkedStack;

    #[test]
    fn test_stack_pop_multiple_default() {
        let mut s = ArrayStack::new();
        for v in [1, 2, 3, 4] {
            Stack::push(&mut s, v);
        }
        assert_eq!(s.pop_multiple(3).unwrap(), vec![4, 3, 2]);
        assert_eq!(
            s.pop_multiple(2),
            Err(Error::Insufficient {
                requested: 2,
                available: 1
            })
        );
        // Failed bulk pop must not have consumed anything.
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn test_queue_dequeue_multiple_default() {
        let mut q = ArrayQueue::new();
        for v in [10, 20, 30] {
            q.enqueue(v);
        }
        assert_eq!(q.dequeue_multiple(2).unwrap(), vec![10, 20]);
        assert_eq!(
            q.dequeue_multiple(5),
            Err(Error::Insufficient {
                requested: 5,
                available: 1
            })
        );
    }

    #[test]
    fn test_growable_never_full() {
        let mut s = LinkedStack::new();
        for v in 0..100 {
            Stack::push(&mut s, v);
        }
        assert!(!Stack::is_full(&s));
    }
}
