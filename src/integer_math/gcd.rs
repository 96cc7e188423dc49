// src/integer_math/gcd.rs

use crate::core::errors::NumUtilError;

fn gcd_magnitude(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let temp = b;
        b = a % b;
        a = temp;
    }
    a
}

fn to_i64(magnitude: u64, operation: &'static str) -> Result<i64, NumUtilError> {
    // 2^63 is the only magnitude that does not fit back
    i64::try_from(magnitude).map_err(|_| NumUtilError::overflow(operation))
}

/// Greatest common divisor by the iterative Euclidean algorithm.
///
/// Works on magnitudes, so the result is never negative. `gcd(0, 0)` has no
/// greatest divisor and is rejected.
pub fn gcd(a: i64, b: i64) -> Result<i64, NumUtilError> {
    if a == 0 && b == 0 {
        return Err(NumUtilError::DomainError("gcd(0, 0) is undefined".to_string()));
    }
    to_i64(gcd_magnitude(a.unsigned_abs(), b.unsigned_abs()), "gcd")
}

/// Least common multiple, dividing before multiplying.
///
/// `lcm(a, 0)` is 0 for non-zero `a`; `lcm(0, 0)` is rejected.
pub fn lcm(a: i64, b: i64) -> Result<i64, NumUtilError> {
    if a == 0 && b == 0 {
        return Err(NumUtilError::DomainError("lcm(0, 0) is undefined".to_string()));
    }
    if a == 0 || b == 0 {
        return Ok(0);
    }

    let divisor = u128::from(gcd_magnitude(a.unsigned_abs(), b.unsigned_abs()));
    let reduced = u128::from(a.unsigned_abs()) / divisor;
    let product = reduced * u128::from(b.unsigned_abs());
    i64::try_from(product).map_err(|_| NumUtilError::overflow("lcm"))
}

/// GCD of every value in the slice.
///
/// Zeros are neutral (`gcd(0, x) == |x|`); only an all-zero slice is undefined.
pub fn gcd_all(values: &[i64]) -> Result<i64, NumUtilError> {
    if values.is_empty() {
        return Err(NumUtilError::EmptyInput);
    }
    let magnitude = values
        .iter()
        .fold(0u64, |acc, &value| gcd_magnitude(acc, value.unsigned_abs()));
    if magnitude == 0 {
        return Err(NumUtilError::DomainError("gcd of all zeros is undefined".to_string()));
    }
    to_i64(magnitude, "gcd_all")
}

/// LCM of every value in the slice.
///
/// Any zero makes the result 0; an all-zero slice is undefined.
pub fn lcm_all(values: &[i64]) -> Result<i64, NumUtilError> {
    if values.is_empty() {
        return Err(NumUtilError::EmptyInput);
    }
    if values.iter().all(|&value| value == 0) {
        return Err(NumUtilError::DomainError("lcm of all zeros is undefined".to_string()));
    }
    if values.contains(&0) {
        return Ok(0);
    }
    values.iter().try_fold(1, |acc, &value| lcm(acc, value))
}

pub fn are_coprime(values: &[i64]) -> bool {
    matches!(gcd_all(values), Ok(1))
}

/// Returns `(g, x, y)` with `a * x + b * y == g` and `|g| == gcd(a, b)`.
///
/// The sign of `g` follows the inputs; `extended_gcd(0, 0)` is `(0, 1, 0)`.
/// The recurrence runs in `i128`, so `i64::MIN` operands are accepted; a
/// triple that does not fit back into `i64` reports `Overflow`.
pub fn extended_gcd(a: i64, b: i64) -> Result<(i64, i64, i64), NumUtilError> {
    let (mut old_r, mut r) = (i128::from(a), i128::from(b));
    let (mut old_x, mut x) = (1i128, 0i128);
    let (mut old_y, mut y) = (0i128, 1i128);

    while r != 0 {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_x, x) = (x, old_x - q * x);
        (old_y, y) = (y, old_y - q * y);
    }

    let narrow = |value: i128| i64::try_from(value).map_err(|_| NumUtilError::overflow("extended_gcd"));
    Ok((narrow(old_r)?, narrow(old_x)?, narrow(old_y)?))
}

/// Multiplicative inverse of `a` modulo `modulus`, in `0..modulus`.
///
/// Returns `Ok(None)` when `a` and `modulus` share a factor.
pub fn mod_inverse(a: i64, modulus: i64) -> Result<Option<i64>, NumUtilError> {
    if modulus <= 0 {
        return Err(NumUtilError::InvalidArgument(format!(
            "mod_inverse modulus must be > 0, got {}",
            modulus
        )));
    }
    if modulus == 1 {
        return Ok(Some(0));
    }

    let (g, x, _) = extended_gcd(a.rem_euclid(modulus), modulus)?;
    if g != 1 {
        return Ok(None);
    }
    Ok(Some(x.rem_euclid(modulus)))
}
