// src/integer_math/digits.rs
//
// Base-10 digit helpers. Signs are ignored: both work on |n|.

use num::Integer;

/// Number of decimal digits in `n`; `digit_count(0)` is 1.
pub fn digit_count(n: i64) -> i64 {
    n.unsigned_abs()
        .checked_ilog10()
        .map_or(1, |log| i64::from(log) + 1)
}

/// Sum of the decimal digits of `n`.
pub fn digit_sum(n: i64) -> i64 {
    let mut remaining = n.unsigned_abs();
    let mut sum = 0i64;
    while remaining > 0 {
        let (rest, digit) = remaining.div_rem(&10);
        sum += digit as i64;
        remaining = rest;
    }
    sum
}
