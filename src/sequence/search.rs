// src/sequence/search.rs
//
// Binary searches over slices sorted ascending, plus predicate and ternary
// searches over integer ranges. Sortedness and monotonicity are the caller's
// responsibility and are not checked; on bad input the results are
// unspecified but the searches still terminate.

use crate::core::errors::NumUtilError;

/// Index of an element equal to `target`, or `None` when absent.
///
/// With duplicates, any matching index may be returned.
///
/// # Examples
/// ```
/// use numutil::sequence::search::binary_search;
///
/// let values = [1, 3, 5, 7, 9];
/// assert_eq!(binary_search(&values, &7), Some(3));
/// assert_eq!(binary_search(&values, &4), None);
/// ```
pub fn binary_search<T: PartialOrd>(sorted: &[T], target: &T) -> Option<usize> {
    let mut left = 0;
    let mut right = sorted.len();

    while left < right {
        let mid = left + (right - left) / 2;
        if sorted[mid] == *target {
            return Some(mid);
        } else if sorted[mid] < *target {
            left = mid + 1;
        } else {
            right = mid;
        }
    }

    None
}

/// First index whose element is not less than `target`.
pub fn lower_bound<T: PartialOrd>(sorted: &[T], target: &T) -> usize {
    partition_point(sorted, |value| value < target)
}

/// First index whose element is greater than `target`.
pub fn upper_bound<T: PartialOrd>(sorted: &[T], target: &T) -> usize {
    partition_point(sorted, |value| value <= target)
}

fn partition_point<T, F: Fn(&T) -> bool>(sorted: &[T], before: F) -> usize {
    let mut left = 0;
    let mut right = sorted.len();
    while left < right {
        let mid = left + (right - left) / 2;
        if before(&sorted[mid]) {
            left = mid + 1;
        } else {
            right = mid;
        }
    }
    left
}

fn require_ordered(left: i64, right: i64, operation: &str) -> Result<(), NumUtilError> {
    if left >= right {
        return Err(NumUtilError::InvalidArgument(format!(
            "{} needs left < right, got [{}, {}]",
            operation, left, right
        )));
    }
    Ok(())
}

// Midpoint of left < right without overflowing i64
fn midpoint(left: i64, right: i64) -> i64 {
    left + (right.abs_diff(left) / 2) as i64
}

/// Smallest `x` in `(left, right]` with `pred(x)` true.
///
/// `pred` must be monotone (false ... false true ... true) and is assumed
/// false at `left` and true at `right`; neither endpoint is evaluated.
///
/// # Examples
/// ```
/// use numutil::sequence::search::binary_search_min;
///
/// // Smallest x with x * x >= 50
/// assert_eq!(binary_search_min(0, 50, |x| x * x >= 50).unwrap(), 8);
/// ```
pub fn binary_search_min<F: FnMut(i64) -> bool>(
    mut left: i64,
    mut right: i64,
    mut pred: F,
) -> Result<i64, NumUtilError> {
    require_ordered(left, right, "binary_search_min")?;
    while right.abs_diff(left) > 1 {
        let mid = midpoint(left, right);
        if pred(mid) {
            right = mid;
        } else {
            left = mid;
        }
    }
    Ok(right)
}

/// Largest `x` in `[left, right)` with `pred(x)` true.
///
/// `pred` must be monotone (true ... true false ... false) and is assumed
/// true at `left` and false at `right`; neither endpoint is evaluated.
pub fn binary_search_max<F: FnMut(i64) -> bool>(
    mut left: i64,
    mut right: i64,
    mut pred: F,
) -> Result<i64, NumUtilError> {
    require_ordered(left, right, "binary_search_max")?;
    while right.abs_diff(left) > 1 {
        let mid = midpoint(left, right);
        if pred(mid) {
            left = mid;
        } else {
            right = mid;
        }
    }
    Ok(left)
}

/// Position of the minimum of `f` over `[left, right]`.
///
/// `f` must be strictly decreasing then strictly increasing (a flat bottom is
/// fine). Narrows the range by thirds until at most three candidates remain,
/// then scans them; ties go to the smallest position.
pub fn ternary_search_min_int<T, F>(
    mut left: i64,
    mut right: i64,
    mut f: F,
) -> Result<i64, NumUtilError>
where
    T: PartialOrd,
    F: FnMut(i64) -> T,
{
    if left > right {
        return Err(NumUtilError::InvalidArgument(format!(
            "ternary_search_min_int needs left <= right, got [{}, {}]",
            left, right
        )));
    }

    while right.abs_diff(left) > 2 {
        let third = (right.abs_diff(left) / 3) as i64;
        let m1 = left + third;
        let m2 = right - third;
        if f(m1) > f(m2) {
            left = m1;
        } else {
            right = m2;
        }
    }

    let mut best = left;
    let mut best_value = f(left);
    for x in (left..=right).skip(1) {
        let value = f(x);
        if value < best_value {
            best = x;
            best_value = value;
        }
    }
    Ok(best)
}
