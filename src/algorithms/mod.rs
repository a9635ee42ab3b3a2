//! Textbook algorithms written against the capability traits.
//!
//! Everything here takes `&impl List` / `&mut impl Stack` / etc. rather
//! than a concrete container, so the same routine runs over the array and
//! linked implementations alike. Routines that the classic literature
//! states recursively (reversing a stack, summing a queue) are expressed
//! iteratively with explicit auxiliary containers instead, which keeps
//! them stack-safe on large inputs with identical observable results.

pub mod list;
pub mod queue;
pub mod search;
pub mod sort;
pub mod stack;

pub use list::{average, copy_list, find_max, find_min, remove_all, reverse_list, sum};
pub use queue::{
    copy_queue, find_in_queue, generate_binary_numbers, generate_numbers, interleave_queue,
    level_order, queue_max, queue_min, queue_sum, reverse_queue, rotate_queue, sort_queue,
};
pub use search::{binary_search, linear_search};
pub use sort::{bubble_sort, is_sorted, merge_sorted, selection_sort};
pub use stack::{
    copy_stack, evaluate_postfix, find_in_stack, is_valid_parentheses, reverse_stack, stack_max,
    stack_sum, PostfixError,
};
