// src/integer_math/series.rs
//
// Closed forms for a few classic sequences. Intermediates are held in i128
// and narrowed once at the end.

use crate::core::errors::NumUtilError;

/// Largest `n` whose Fibonacci number fits in an `i64` (F(92) ≈ 7.5 × 10^18).
pub const MAX_FIBONACCI_INPUT: i64 = 92;

/// F(n) with F(0) = 0, F(1) = 1, by fast doubling in O(log n) steps.
///
/// # Examples
/// ```
/// use numutil::integer_math::series::fibonacci;
///
/// assert_eq!(fibonacci(10).unwrap(), 55);
/// ```
pub fn fibonacci(n: i64) -> Result<i64, NumUtilError> {
    if n < 0 {
        return Err(NumUtilError::InvalidArgument(format!(
            "fibonacci input must be >= 0, got {}",
            n
        )));
    }
    if n > MAX_FIBONACCI_INPUT {
        return Err(NumUtilError::overflow("fibonacci"));
    }
    let (value, _) = fibonacci_pair(n as u64);
    i64::try_from(value).map_err(|_| NumUtilError::overflow("fibonacci"))
}

// (F(n), F(n + 1))
fn fibonacci_pair(n: u64) -> (i128, i128) {
    if n == 0 {
        return (0, 1);
    }
    let (a, b) = fibonacci_pair(n / 2);
    let even = a * (2 * b - a);
    let odd = a * a + b * b;
    if n % 2 == 0 {
        (even, odd)
    } else {
        (odd, even + odd)
    }
}

/// start + (start + 1) + ... + end; zero when `start > end`.
pub fn range_sum(start: i64, end: i64) -> Result<i64, NumUtilError> {
    if start > end {
        return Ok(0);
    }
    let count = i128::from(end) - i128::from(start) + 1;
    // One of the two factors is always even
    let doubled = count
        .checked_mul(i128::from(start) + i128::from(end))
        .ok_or_else(|| NumUtilError::overflow("range_sum"))?;
    i64::try_from(doubled / 2).map_err(|_| NumUtilError::overflow("range_sum"))
}

/// first + first·ratio + ... + first·ratio^(terms - 1).
///
/// `(ratio^terms - 1)` is divided by `(ratio - 1)` before multiplying by
/// `first`; the division is exact.
pub fn geometric_sum(first: i64, ratio: i64, terms: i64) -> Result<i64, NumUtilError> {
    if terms < 0 {
        return Err(NumUtilError::InvalidArgument(format!(
            "geometric_sum term count must be >= 0, got {}",
            terms
        )));
    }
    if first == 0 || terms == 0 {
        return Ok(0);
    }

    let overflow = || NumUtilError::overflow("geometric_sum");
    let ratio = i128::from(ratio);
    let series: i128 = match ratio {
        1 => i128::from(terms),
        0 => 1,
        -1 => i128::from(terms % 2),
        _ => {
            let exponent = u32::try_from(terms).map_err(|_| overflow())?;
            let raised = ratio.checked_pow(exponent).ok_or_else(overflow)?;
            raised.checked_sub(1).ok_or_else(overflow)? / (ratio - 1)
        }
    };

    let total = i128::from(first).checked_mul(series).ok_or_else(overflow)?;
    i64::try_from(total).map_err(|_| overflow())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fibonacci() {
        let expected = [0i64, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55];
        for (n, &value) in expected.iter().enumerate() {
            assert_eq!(fibonacci(n as i64), Ok(value));
        }
        assert_eq!(fibonacci(50), Ok(12_586_269_025));
        assert_eq!(fibonacci(92), Ok(7_540_113_804_746_346_429));
    }

    #[test]
    fn test_fibonacci_limits() {
        assert_eq!(fibonacci(93), Err(NumUtilError::overflow("fibonacci")));
        assert!(matches!(fibonacci(-1), Err(NumUtilError::InvalidArgument(_))));
    }

    #[test]
    fn test_range_sum() {
        assert_eq!(range_sum(1, 100), Ok(5050));
        assert_eq!(range_sum(-3, 3), Ok(0));
        assert_eq!(range_sum(-5, -1), Ok(-15));
        assert_eq!(range_sum(7, 7), Ok(7));
        assert_eq!(range_sum(5, 4), Ok(0));
        assert_eq!(range_sum(i64::MIN, i64::MAX), Ok(i64::MIN));
        assert_eq!(range_sum(0, i64::MAX), Err(NumUtilError::overflow("range_sum")));
    }

    #[test]
    fn test_geometric_sum() {
        assert_eq!(geometric_sum(1, 2, 10), Ok(1023));
        assert_eq!(geometric_sum(3, 3, 4), Ok(120));
        assert_eq!(geometric_sum(5, 1, 4), Ok(20));
        assert_eq!(geometric_sum(2, -2, 4), Ok(-10));
        assert_eq!(geometric_sum(7, 0, 5), Ok(7));
        assert_eq!(geometric_sum(4, -1, 5), Ok(4));
        assert_eq!(geometric_sum(4, -1, 6), Ok(0));
        assert_eq!(geometric_sum(9, 10, 0), Ok(0));
    }

    #[test]
    fn test_geometric_sum_edges() {
        // ratio^terms = 2^63 does not fit, the sum does
        assert_eq!(geometric_sum(1, 2, 63), Ok(i64::MAX));
        assert_eq!(geometric_sum(1, 2, 64), Err(NumUtilError::overflow("geometric_sum")));
        assert_eq!(geometric_sum(1, 3, 1_000), Err(NumUtilError::overflow("geometric_sum")));
        assert_eq!(geometric_sum(1, -1, i64::MAX), Ok(1));
        assert!(matches!(geometric_sum(1, 2, -1), Err(NumUtilError::InvalidArgument(_))));
    }
}
