//! Sorting and order checks over the positional [`List`] contract.

use crate::error::Result;
use crate::traits::List;

/// Whether the list is in ascending order (equal neighbours allowed).
pub fn is_sorted<L: List + ?Sized>(list: &L) -> Result<bool> {
    for i in 1..list.len() {
        if list.get(i)? < list.get(i - 1)? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Bubble sort through `get`/`set` only. O(n²) compares, with the usual
/// early exit once a pass makes no swap.
pub fn bubble_sort<L: List + ?Sized>(list: &mut L) -> Result<()> {
    let n = list.len();
    for i in 0..n.saturating_sub(1) {
        let mut swapped = false;
        for j in 0..n - i - 1 {
            let current = list.get(j)?;
            let next = list.get(j + 1)?;
            if current > next {
                list.set(j, next)?;
                list.set(j + 1, current)?;
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
    Ok(())
}

/// Selection sort through `get`/`set` only. O(n²) compares but only
/// O(n) writes, which matters when `set` walks a chain.
pub fn selection_sort<L: List + ?Sized>(list: &mut L) -> Result<()> {
    let n = list.len();
    for i in 0..n.saturating_sub(1) {
        let mut min_idx = i;
        let mut min_val = list.get(i)?;
        for j in i + 1..n {
            let v = list.get(j)?;
            if v < min_val {
                min_idx = j;
                min_val = v;
            }
        }
        if min_idx != i {
            let tmp = list.get(i)?;
            list.set(i, min_val)?;
            list.set(min_idx, tmp)?;
        }
    }
    Ok(())
}

/// Merges two ascending lists into `out` (cleared first). Stable: on
/// ties the element from `a` goes first, and the implementations may
/// differ (array `a`, linked `b`, array `out` is fine).
pub fn merge_sorted<A, B, O>(a: &A, b: &B, out: &mut O) -> Result<()>
where
    A: List + ?Sized,
    B: List + ?Sized,
    O: List + ?Sized,
{
    out.clear();
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        let va = a.get(i)?;
        let vb = b.get(j)?;
        if va <= vb {
            out.push(va);
            i += 1;
        } else {
            out.push(vb);
            j += 1;
        }
    }
    while i < a.len() {
        out.push(a.get(i)?);
        i += 1;
    }
    while j < b.len() {
        out.push(b.get(j)?);
        j += 1;
    }
    Ok(())
}
