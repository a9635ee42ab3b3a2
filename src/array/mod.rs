//! Containers backed by a contiguous growable buffer.
//!
//! `ArrayList` and `ArrayStack` use a plain buffer with a length counter;
//! `ArrayQueue` and `ArrayDeque` add circular front/rear cursors so both
//! ends stay O(1) without shifting. All four share the capacity policy in
//! [`crate::policy`].

pub mod deque;
pub mod list;
pub mod queue;
pub mod stack;

pub use deque::ArrayDeque;
pub use list::ArrayList;
pub use queue::ArrayQueue;
pub use stack::ArrayStack;
