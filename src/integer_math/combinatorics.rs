// src/integer_math/combinatorics.rs

use crate::core::errors::NumUtilError;

/// Largest `n` whose factorial fits in an `i64` (20! ≈ 2.4 × 10^18).
pub const MAX_FACTORIAL_INPUT: i64 = 20;

/// n! for `0 <= n <= MAX_FACTORIAL_INPUT`.
///
/// Larger inputs report `Overflow` rather than wrapping.
pub fn factorial(n: i64) -> Result<i64, NumUtilError> {
    if n < 0 {
        return Err(NumUtilError::InvalidArgument(format!(
            "factorial input must be >= 0, got {}",
            n
        )));
    }
    if n > MAX_FACTORIAL_INPUT {
        return Err(NumUtilError::overflow("factorial"));
    }
    Ok((2..=n).product())
}

/// nPr = n (n-1) ... (n-r+1); zero when `r` is outside `0..=n`.
pub fn permutation(n: i64, r: i64) -> Result<i64, NumUtilError> {
    if r > n || r < 0 {
        return Ok(0);
    }
    (0..r).try_fold(1i64, |acc, i| {
        acc.checked_mul(n - i)
            .ok_or_else(|| NumUtilError::overflow("permutation"))
    })
}

/// nCr; zero when `r` is outside `0..=n`.
///
/// Computed as the running product `result * (n - i) / (i + 1)`. After step `i`
/// the accumulator equals C(n, i + 1), so every division is exact and the
/// accumulator never exceeds the final answer. Only the product before the
/// division is wider than `i64`.
pub fn combination(n: i64, r: i64) -> Result<i64, NumUtilError> {
    if r > n || r < 0 {
        return Ok(0);
    }
    let r = r.min(n - r);

    let mut result: i128 = 1;
    for i in 0..r {
        result = result * i128::from(n - i) / i128::from(i + 1);
        if result > i128::from(i64::MAX) {
            return Err(NumUtilError::overflow("combination"));
        }
    }
    Ok(result as i64)
}
