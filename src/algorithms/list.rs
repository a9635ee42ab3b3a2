//! List utilities over the positional [`List`] contract.

use crate::error::{Error, Result};
use crate::traits::List;

/// Reverses the list in place by swapping mirrored positions.
pub fn reverse_list<L: List + ?Sized>(list: &mut L) -> Result<()> {
    let n = list.len();
    for i in 0..n / 2 {
        let left = list.get(i)?;
        let right = list.get(n - 1 - i)?;
        list.set(i, right)?;
        list.set(n - 1 - i, left)?;
    }
    Ok(())
}

/// Replaces the contents of `dst` with a copy of `src`, in order. The
/// implementations may differ.
pub fn copy_list<S, D>(src: &S, dst: &mut D) -> Result<()>
where
    S: List + ?Sized,
    D: List + ?Sized,
{
    dst.clear();
    for i in 0..src.len() {
        dst.push(src.get(i)?);
    }
    Ok(())
}

/// Largest element, or [`Error::Empty`].
pub fn find_max<L: List + ?Sized>(list: &L) -> Result<i64> {
    if list.is_empty() {
        return Err(Error::Empty);
    }
    let mut max = list.get(0)?;
    for i in 1..list.len() {
        let v = list.get(i)?;
        if v > max {
            max = v;
        }
    }
    Ok(max)
}

/// Smallest element, or [`Error::Empty`].
pub fn find_min<L: List + ?Sized>(list: &L) -> Result<i64> {
    if list.is_empty() {
        return Err(Error::Empty);
    }
    let mut min = list.get(0)?;
    for i in 1..list.len() {
        let v = list.get(i)?;
        if v < min {
            min = v;
        }
    }
    Ok(min)
}

/// Sum of all elements; 0 for an empty list.
pub fn sum<L: List + ?Sized>(list: &L) -> Result<i64> {
    let mut total = 0;
    for i in 0..list.len() {
        total += list.get(i)?;
    }
    Ok(total)
}

/// Arithmetic mean, or [`Error::Empty`].
pub fn average<L: List + ?Sized>(list: &L) -> Result<f64> {
    if list.is_empty() {
        return Err(Error::Empty);
    }
    Ok(sum(list)? as f64 / list.len() as f64)
}

/// Removes every occurrence of `value`. Returns how many were removed.
/// The index is only advanced when nothing was removed, since removal
/// shifts later elements left.
pub fn remove_all<L: List + ?Sized>(list: &mut L, value: i64) -> Result<usize> {
    let mut removed = 0;
    let mut i = 0;
    while i < list.len() {
        if list.get(i)? == value {
            list.remove(i)?;
            removed += 1;
        } else {
            i += 1;
        }
    }
    Ok(removed)
}
