//! Search over the positional [`List`] contract.

use crate::error::Result;
use crate::traits::List;

/// Binary search over an ascending list. Returns the index of a match,
/// or `None`. With duplicates, any matching index may be returned.
///
/// The order precondition is the caller's responsibility; on an unsorted
/// list the result is meaningless (but never out of bounds).
pub fn binary_search<L: List + ?Sized>(list: &L, target: i64) -> Result<Option<usize>> {
    let mut lo = 0;
    let mut hi = list.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        let value = list.get(mid)?;
        if value == target {
            return Ok(Some(mid));
        }
        if value < target {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    Ok(None)
}

/// Front-to-back scan. Returns the index of the first match, or `None`.
/// Works on unsorted lists; O(n).
pub fn linear_search<L: List + ?Sized>(list: &L, target: i64) -> Result<Option<usize>> {
    for i in 0..list.len() {
        if list.get(i)? == target {
            return Ok(Some(i));
        }
    }
    Ok(None)
}
