//! # Linear Collections
//!
//! Linear data structures over `i64` with two interchangeable families —
//! array-backed and linked — behind shared capability traits, plus the
//! classic algorithms that operate on them.
//!
//! Every abstract type ships in more than one representation so their
//! trade-offs can be compared directly:
//!
//! * **List:** [`ArrayList`] (contiguous, O(1) `get`),
//!   [`LinkedList`] (boxed chain, O(1) `push_front`),
//!   [`DoublyLinkedList`] (index arena, O(1) at both ends).
//! * **Stack:** [`ArrayStack`], [`LinkedStack`].
//! * **Queue:** [`ArrayQueue`] (ring buffer), [`LinkedQueue`] (chain with
//!   a tail pointer).
//! * **Deque:** [`ArrayDeque`], [`LinkedDeque`] (O(n) `pop_back` —
//!   deliberately, it is singly linked), [`DoublyLinkedDeque`].
//!
//! ## Shared behavior
//!
//! * Array-backed containers double their buffer when full and halve it
//!   when occupancy falls to a quarter; the rules live in [`policy`].
//! * Fallible operations return [`error::Error`] instead of panicking;
//!   absence lookups return `Option`.
//! * The algorithms in [`algorithms`] are generic over the traits in
//!   [`traits`], so `binary_search` runs unchanged on an [`ArrayList`]
//!   or a [`LinkedList`].
//!
//! ## Examples
//!
//! ### Same algorithm, different representations
//!
//! ```rust
//! use linear_collections::algorithms::binary_search;
//! use linear_collections::{ArrayList, LinkedList};
//!
//! let array: ArrayList = [10, 20, 30, 40, 50].into_iter().collect();
//! let linked: LinkedList = [10, 20, 30, 40, 50].into_iter().collect();
//!
//! assert_eq!(binary_search(&array, 30).unwrap(), Some(2));
//! assert_eq!(binary_search(&linked, 30).unwrap(), Some(2));
//! ```
//!
//! ### Stacks and queues
//!
//! ```rust
//! use linear_collections::algorithms::{evaluate_postfix, is_valid_parentheses};
//! use linear_collections::{ArrayQueue, Error};
//!
//! assert!(is_valid_parentheses("([{}])"));
//! assert_eq!(evaluate_postfix(&["3", "4", "+", "2", "*"]), Ok(14));
//!
//! let mut queue = ArrayQueue::new();
//! queue.enqueue(1);
//! assert_eq!(queue.dequeue(), Ok(1));
//! assert_eq!(queue.dequeue(), Err(Error::Empty));
//! ```
//!
//! ### Both ends in O(1)
//!
//! ```rust
//! use linear_collections::DoublyLinkedDeque;
//!
//! let mut deque = DoublyLinkedDeque::new();
//! deque.push_back(2);
//! deque.push_front(1);
//! deque.push_back(3);
//! assert_eq!(deque.to_vec(), vec![1, 2, 3]);
//! assert_eq!(deque.pop_back(), Ok(3));
//! ```

// --- Module Declarations ---

pub mod algorithms;
pub mod array;
pub mod doubly;
pub mod error;
pub mod linked;
pub mod policy;
pub mod traits;

// --- Re-exports ---

pub use array::{ArrayDeque, ArrayList, ArrayQueue, ArrayStack};
pub use doubly::{DoublyLinkedDeque, DoublyLinkedList, NodeId};
pub use error::{Error, Result};
pub use linked::{LinkedDeque, LinkedList, LinkedQueue, LinkedStack};
pub use traits::{Container, Deque, List, Queue, Stack};
