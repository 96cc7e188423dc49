// src/sequence/reduce.rs

use std::ops::Add;
use num::{CheckedAdd, Zero};
use crate::core::errors::NumUtilError;

/// Sum of all elements; zero for an empty slice.
///
/// Uses `T`'s own `+`, so fixed-width integers panic (debug) or wrap
/// (release) on overflow. Use [`checked_sum_vec`] for untrusted integer input.
pub fn sum_vec<T>(values: &[T]) -> T
where
    T: Zero + Add<Output = T> + Copy,
{
    values.iter().fold(T::zero(), |acc, &value| acc + value)
}

/// Integer sum that reports `Overflow` instead of wrapping.
pub fn checked_sum_vec<T>(values: &[T]) -> Result<T, NumUtilError>
where
    T: Zero + CheckedAdd + Copy,
{
    values.iter().try_fold(T::zero(), |acc, value| {
        acc.checked_add(value)
            .ok_or_else(|| NumUtilError::overflow("sum_vec"))
    })
}

/// Largest element. The first of several equal maxima is returned.
pub fn max_vec<T: PartialOrd + Copy>(values: &[T]) -> Result<T, NumUtilError> {
    let (&first, rest) = values.split_first().ok_or(NumUtilError::EmptyInput)?;
    Ok(rest.iter().fold(first, |best, &value| if value > best { value } else { best }))
}

/// Smallest element. The first of several equal minima is returned.
pub fn min_vec<T: PartialOrd + Copy>(values: &[T]) -> Result<T, NumUtilError> {
    let (&first, rest) = values.split_first().ok_or(NumUtilError::EmptyInput)?;
    Ok(rest.iter().fold(first, |best, &value| if value < best { value } else { best }))
}
