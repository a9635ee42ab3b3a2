//! Queue utilities and classic queue applications.
//!
//! A queue only exposes its two ends, so the traversal helpers work by
//! full rotation: dequeue every element once, observe it, enqueue it
//! straight back. After `len` steps the queue is in its original order.

use crate::array::{ArrayQueue, ArrayStack};
use crate::error::{Error, Result};
use crate::traits::Queue;

/// Replaces the contents of `dst` with a copy of `src`, in FIFO order.
/// `src` is restored by the same rotation that reads it.
pub fn copy_queue<S, D>(src: &mut S, dst: &mut D) -> Result<()>
where
    S: Queue + ?Sized,
    D: Queue + ?Sized,
{
    dst.clear();
    for _ in 0..src.len() {
        let v = src.dequeue()?;
        dst.enqueue(v);
        src.enqueue(v);
    }
    Ok(())
}

/// Reverses the queue. A stack is the natural auxiliary: draining the
/// queue into it and popping back replays the elements rear-first.
pub fn reverse_queue<Q: Queue + ?Sized>(queue: &mut Q) -> Result<()> {
    let mut aux = ArrayStack::new();
    for _ in 0..queue.len() {
        aux.push(queue.dequeue()?);
    }
    for _ in 0..aux.len() {
        queue.enqueue(aux.pop()?);
    }
    Ok(())
}

/// Whether `target` occurs anywhere in the queue. Restores the queue.
pub fn find_in_queue<Q: Queue + ?Sized>(queue: &mut Q, target: i64) -> Result<bool> {
    let mut found = false;
    for _ in 0..queue.len() {
        let v = queue.dequeue()?;
        if v == target {
            found = true;
        }
        queue.enqueue(v);
    }
    Ok(found)
}

/// Sum of all elements; 0 for an empty queue. Restores the queue.
pub fn queue_sum<Q: Queue + ?Sized>(queue: &mut Q) -> Result<i64> {
    let mut total = 0;
    for _ in 0..queue.len() {
        let v = queue.dequeue()?;
        total += v;
        queue.enqueue(v);
    }
    Ok(total)
}

/// Largest element, or [`Error::Empty`]. Restores the queue.
pub fn queue_max<Q: Queue + ?Sized>(queue: &mut Q) -> Result<i64> {
    if queue.is_empty() {
        return Err(Error::Empty);
    }
    let mut max = queue.front()?;
    for _ in 0..queue.len() {
        let v = queue.dequeue()?;
        if v > max {
            max = v;
        }
        queue.enqueue(v);
    }
    Ok(max)
}

/// Smallest element, or [`Error::Empty`]. Restores the queue.
pub fn queue_min<Q: Queue + ?Sized>(queue: &mut Q) -> Result<i64> {
    if queue.is_empty() {
        return Err(Error::Empty);
    }
    let mut min = queue.front()?;
    for _ in 0..queue.len() {
        let v = queue.dequeue()?;
        if v < min {
            min = v;
        }
        queue.enqueue(v);
    }
    Ok(min)
}

/// The sequence 1..=n produced through a queue.
pub fn generate_numbers(n: usize) -> Result<Vec<i64>> {
    let mut queue = ArrayQueue::with_capacity(n.max(1));
    for i in 1..=n as i64 {
        queue.enqueue(i);
    }
    let mut out = Vec::with_capacity(n);
    for _ in 0..n {
        out.push(queue.dequeue()?);
    }
    Ok(out)
}

/// Binary representations of 1..=n, generated breadth-first: dequeue
/// `k`, emit it, enqueue `2k` and `2k + 1`.
pub fn generate_binary_numbers(n: usize) -> Result<Vec<String>> {
    if n == 0 {
        return Ok(Vec::new());
    }
    let mut queue = ArrayQueue::new();
    queue.enqueue(1);
    let mut out = Vec::with_capacity(n);
    for _ in 0..n {
        let k = queue.dequeue()?;
        out.push(format!("{k:b}"));
        queue.enqueue(k * 2);
        queue.enqueue(k * 2 + 1);
    }
    Ok(out)
}

/// Breadth-first traversal of a complete binary tree stored in an
/// array: children of index `i` sit at `2i + 1` and `2i + 2`.
pub fn level_order(tree: &[i64]) -> Result<Vec<i64>> {
    if tree.is_empty() {
        return Ok(Vec::new());
    }
    let mut queue = ArrayQueue::with_capacity(tree.len());
    queue.enqueue(0);
    let mut out = Vec::with_capacity(tree.len());
    while !queue.is_empty() {
        let index = queue.dequeue()? as usize;
        out.push(tree[index]);
        let left = 2 * index + 1;
        let right = 2 * index + 2;
        if left < tree.len() {
            queue.enqueue(left as i64);
        }
        if right < tree.len() {
            queue.enqueue(right as i64);
        }
    }
    Ok(out)
}

/// Rotates the queue `k` positions to the left: the first `k` elements
/// move to the rear. `k` is normalized modulo the length.
pub fn rotate_queue<Q: Queue + ?Sized>(queue: &mut Q, k: usize) -> Result<()> {
    if queue.is_empty() {
        return Ok(());
    }
    let k = k % queue.len();
    for _ in 0..k {
        let v = queue.dequeue()?;
        queue.enqueue(v);
    }
    Ok(())
}

/// Interleaves the first and second halves: `[1, 2, 3, 4, 5, 6]`
/// becomes `[1, 4, 2, 5, 3, 6]`. With an odd length the halves pair up
/// short of one element and the unpaired last element ends at the
/// front: `[1, 2, 3, 4, 5]` becomes `[5, 1, 3, 2, 4]`.
pub fn interleave_queue<Q: Queue + ?Sized>(queue: &mut Q) -> Result<()> {
    if queue.len() < 2 {
        return Ok(());
    }
    let half = queue.len() / 2;
    let mut aux = ArrayQueue::with_capacity(half);
    for _ in 0..half {
        aux.enqueue(queue.dequeue()?);
    }
    for _ in 0..half {
        queue.enqueue(aux.dequeue()?);
        let v = queue.dequeue()?;
        queue.enqueue(v);
    }
    Ok(())
}

/// Sorts the queue ascending using only queue operations: each pass
/// rotates through the unsorted elements to locate the minimum, then a
/// second rotation moves it to the auxiliary queue. Stable and O(n²).
pub fn sort_queue<Q: Queue + ?Sized>(queue: &mut Q) -> Result<()> {
    let mut aux = ArrayQueue::with_capacity(queue.len().max(1));
    while !queue.is_empty() {
        let n = queue.len();
        let mut min_idx = 0;
        let mut min_val = queue.front()?;
        for i in 0..n {
            let v = queue.dequeue()?;
            if v < min_val {
                min_val = v;
                min_idx = i;
            }
            queue.enqueue(v);
        }
        for i in 0..n {
            let v = queue.dequeue()?;
            if i == min_idx {
                aux.enqueue(v);
            } else {
                queue.enqueue(v);
            }
        }
    }
    for _ in 0..aux.len() {
        queue.enqueue(aux.dequeue()?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array::ArrayStack;
    use crate::linked::LinkedQueue;
    use crate::traits::Stack;

    // ─── copy / reverse ───────────────────────────────────────────────────────
    #[test]
    fn test_copy_queue_restores_source() {
        let mut src = ArrayQueue::new();
        src.enqueue_all(&[1, 2, 3]);
        let mut dst = LinkedQueue::new();
        dst.enqueue(99);
        copy_queue(&mut src, &mut dst).unwrap();
        assert_eq!(src.to_vec(), vec![1, 2, 3]);
        assert_eq!(dst.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_reverse_queue() {
        let mut q = ArrayQueue::new();
        q.enqueue_all(&[1, 2, 3, 4]);
        reverse_queue(&mut q).unwrap();
        assert_eq!(q.to_vec(), vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_reverse_queue_deep() {
        // Would overflow the call stack if written recursively.
        let mut q = LinkedQueue::new();
        for v in 0..100_000 {
            q.enqueue(v);
        }
        reverse_queue(&mut q).unwrap();
        assert_eq!(q.front(), Ok(99_999));
        assert_eq!(q.rear(), Ok(0));
    }

    // ─── traversals ───────────────────────────────────────────────────────────
    #[test]
    fn test_find_in_queue_restores_order() {
        let mut q = LinkedQueue::new();
        q.enqueue_all(&[10, 20, 30]);
        assert!(find_in_queue(&mut q, 30).unwrap());
        assert!(!find_in_queue(&mut q, 40).unwrap());
        assert_eq!(q.to_vec(), vec![10, 20, 30]);
    }

    #[test]
    fn test_queue_aggregates() {
        let mut q = ArrayQueue::new();
        q.enqueue_all(&[10, 20, 30, 40, 50]);
        assert_eq!(queue_sum(&mut q), Ok(150));
        assert_eq!(queue_max(&mut q), Ok(50));
        assert_eq!(queue_min(&mut q), Ok(10));
        assert_eq!(q.to_vec(), vec![10, 20, 30, 40, 50]);

        let mut empty = ArrayQueue::new();
        assert_eq!(queue_sum(&mut empty), Ok(0));
        assert_eq!(queue_max(&mut empty), Err(Error::Empty));
        assert_eq!(queue_min(&mut empty), Err(Error::Empty));
    }

    // ─── generators ───────────────────────────────────────────────────────────
    #[test]
    fn test_generate_numbers() {
        assert_eq!(generate_numbers(5).unwrap(), vec![1, 2, 3, 4, 5]);
        assert!(generate_numbers(0).unwrap().is_empty());
    }

    #[test]
    fn test_generate_binary_numbers() {
        assert_eq!(
            generate_binary_numbers(5).unwrap(),
            vec!["1", "10", "11", "100", "101"]
        );
        assert!(generate_binary_numbers(0).unwrap().is_empty());
    }

    #[test]
    fn test_level_order() {
        // Complete tree: level order over the implicit layout is the
        // array order itself.
        let tree = [1, 2, 3, 4, 5, 6, 7];
        assert_eq!(level_order(&tree).unwrap(), vec![1, 2, 3, 4, 5, 6, 7]);
        assert!(level_order(&[]).unwrap().is_empty());
        assert_eq!(level_order(&[42]).unwrap(), vec![42]);
    }

    // ─── rearrangements ───────────────────────────────────────────────────────
    #[test]
    fn test_rotate_queue() {
        let mut q = ArrayQueue::new();
        q.enqueue_all(&[1, 2, 3, 4, 5, 6]);
        rotate_queue(&mut q, 2).unwrap();
        assert_eq!(q.to_vec(), vec![3, 4, 5, 6, 1, 2]);
        rotate_queue(&mut q, 6).unwrap(); // identity
        assert_eq!(q.to_vec(), vec![3, 4, 5, 6, 1, 2]);
        rotate_queue(&mut q, 10).unwrap(); // k > len
        assert_eq!(q.to_vec(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_interleave_queue() {
        let mut q = LinkedQueue::new();
        q.enqueue_all(&[1, 2, 3, 4, 5, 6]);
        interleave_queue(&mut q).unwrap();
        assert_eq!(q.to_vec(), vec![1, 4, 2, 5, 3, 6]);

        let mut odd = ArrayQueue::new();
        odd.enqueue_all(&[1, 2, 3, 4, 5]);
        interleave_queue(&mut odd).unwrap();
        assert_eq!(odd.to_vec(), vec![5, 1, 3, 2, 4]);

        let mut tiny = ArrayQueue::new();
        tiny.enqueue(1);
        interleave_queue(&mut tiny).unwrap();
        assert_eq!(tiny.to_vec(), vec![1]);
    }

    #[test]
    fn test_sort_queue() {
        let mut q = ArrayQueue::new();
        q.enqueue_all(&[5, 2, 8, 1, 9, 3, 1]);
        sort_queue(&mut q).unwrap();
        assert_eq!(q.to_vec(), vec![1, 1, 2, 3, 5, 8, 9]);

        let mut sorted = LinkedQueue::new();
        sorted.enqueue_all(&[1, 2, 3]);
        sort_queue(&mut sorted).unwrap();
        assert_eq!(sorted.to_vec(), vec![1, 2, 3]);

        let mut empty = ArrayQueue::new();
        sort_queue(&mut empty).unwrap();
        assert!(empty.is_empty());
    }

    // ─── cross-container ──────────────────────────────────────────────────────
    #[test]
    fn test_queue_and_stack_round_trip() {
        // Queue -> stack -> queue reverses once.
        let mut q = ArrayQueue::new();
        q.enqueue_all(&[1, 2, 3]);
        let mut s = ArrayStack::new();
        for _ in 0..q.len() {
            Stack::push(&mut s, q.dequeue().unwrap());
        }
        for _ in 0..s.len() {
            q.enqueue(s.pop().unwrap());
        }
        assert_eq!(q.to_vec(), vec![3, 2, 1]);
    }
}
