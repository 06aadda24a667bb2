//! Levenshtein distance over arbitrary symbol sequences
//!
//! Unit cost for insert, delete and substitute. Two rows of the DP table are
//! kept and swapped after each outer step; both are sized to the shorter
//! input, so memory is O(min(n, m)).

use std::collections::TryReserveError;

/// Edit distance between two sequences of comparable symbols
pub fn edit_distance<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    edit_distance_by(a, b, |x, y| x == y)
}

/// Edit distance with a caller-supplied symbol equality
pub fn edit_distance_by<T>(a: &[T], b: &[T], equal: impl Fn(&T, &T) -> bool) -> usize {
    let columns = a.len().min(b.len()) + 1;
    let mut prev = vec![0usize; columns];
    let mut curr = vec![0usize; columns];
    run_rows(a, b, &equal, &mut prev, &mut curr)
}

/// Edit distance that reports row-allocation failure instead of aborting
pub fn try_edit_distance<T: PartialEq>(a: &[T], b: &[T]) -> Result<usize, TryReserveError> {
    let columns = a.len().min(b.len()) + 1;
    let mut prev = Vec::new();
    prev.try_reserve_exact(columns)?;
    prev.resize(columns, 0usize);
    let mut curr = Vec::new();
    curr.try_reserve_exact(columns)?;
    curr.resize(columns, 0usize);
    Ok(run_rows(a, b, &|x: &T, y: &T| x == y, &mut prev, &mut curr))
}

/// Columns index the shorter sequence; `equal` always sees `(a-symbol, b-symbol)`
fn run_rows<T>(
    a: &[T],
    b: &[T],
    equal: &impl Fn(&T, &T) -> bool,
    prev: &mut Vec<usize>,
    curr: &mut Vec<usize>,
) -> usize {
    if a.len() >= b.len() {
        dp(a, b, |x, y| equal(x, y), prev, curr)
    } else {
        dp(b, a, |y, x| equal(x, y), prev, curr)
    }
}

fn dp<T>(
    outer: &[T],
    inner: &[T],
    equal: impl Fn(&T, &T) -> bool,
    prev: &mut Vec<usize>,
    curr: &mut Vec<usize>,
) -> usize {
    let width = inner.len();
    if width == 0 {
        return outer.len();
    }

    for (j, cell) in prev.iter_mut().enumerate() {
        *cell = j;
    }

    for (i, o) in outer.iter().enumerate() {
        curr[0] = prev[0] + 1;
        for (j, s) in inner.iter().enumerate() {
            let cost = usize::from(!equal(o, s));
            curr[j + 1] = (prev[j] + cost).min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(prev, curr);
        debug_assert_eq!(prev[0], i + 1);
    }

    prev[width]
}
