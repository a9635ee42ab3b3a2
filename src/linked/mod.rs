//! Containers backed by singly-linked node chains.
//!
//! Each node owns its successor through `Option<Box<Node>>`, so chains are
//! torn down and cloned iteratively (never recursively) and two chains can
//! never share a node. `LinkedQueue` and `LinkedDeque` additionally keep a
//! non-owning raw tail pointer for O(1) access to the rear; the price of
//! staying singly linked is that `LinkedDeque::pop_back` has to walk the
//! whole chain to find the predecessor of the tail.

pub mod deque;
pub mod list;
pub mod queue;
pub mod stack;

pub use deque::LinkedDeque;
pub use list::LinkedList;
pub use queue::LinkedQueue;
pub use stack::LinkedStack;
