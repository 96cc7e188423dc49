// src/integer_math/square_root.rs

use num::integer::Roots;
use crate::core::errors::NumUtilError;

/// Floor of the square root of `n`.
pub fn integer_sqrt(n: i64) -> Result<i64, NumUtilError> {
    if n < 0 {
        return Err(NumUtilError::InvalidArgument(format!(
            "integer_sqrt input must be >= 0, got {}",
            n
        )));
    }
    Ok(n.sqrt())
}

/// True when `n == k * k` for some integer `k`. Negative numbers never are.
pub fn is_perfect_square(n: i64) -> bool {
    if n < 0 {
        return false;
    }

    // Squares in base 16 end in 0, 1, 4, or 9
    if !matches!(n & 15, 0 | 1 | 4 | 9) {
        return false;
    }

    let root = n.sqrt();
    root * root == n
}
