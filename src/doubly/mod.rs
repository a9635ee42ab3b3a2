//! Doubly-linked containers over an index arena.
//!
//! Nodes live in a `Vec` and link to each other through plain `usize`
//! indices with a sentinel for "no node", so the back-reference `prev`
//! never owns anything and the whole structure needs no `Rc`/`RefCell`
//! and no unsafe code. Freed slots go on an intrusive free list and are
//! recycled by later insertions, so a long-lived container does not leak
//! arena capacity as elements churn.

pub mod deque;
pub mod list;

pub use deque::DoublyLinkedDeque;
pub use list::{DoublyLinkedList, NodeId};
