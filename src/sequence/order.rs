// src/sequence/order.rs
//
// In-place reordering. Callers keep ownership; the `&mut` borrow gives these
// functions exclusive access for the duration of the call.

use std::cmp::Ordering;

pub fn reverse_vec<T>(values: &mut [T]) {
    values.reverse();
}

/// Ascending unstable sort. Incomparable pairs (NaN) compare as equal, so
/// their final position is unspecified.
pub fn sort_vec<T: PartialOrd>(values: &mut [T]) {
    values.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
}

/// Descending unstable sort.
pub fn sort_vec_desc<T: PartialOrd>(values: &mut [T]) {
    values.sort_unstable_by(|a, b| b.partial_cmp(a).unwrap_or(Ordering::Equal));
}
