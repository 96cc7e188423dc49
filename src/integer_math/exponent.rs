// src/integer_math/exponent.rs
//
// Binary exponentiation (square-and-multiply)
// Complexity: O(log exponent) multiplications

use crate::core::errors::NumUtilError;

/// Computes `base^exponent` by repeated squaring.
///
/// The accumulator is checked against `i64` after every multiplication, so an
/// overflowing power is reported instead of wrapping. The running square is
/// kept in `i128`; the final square of the loop is skipped because it would
/// never be multiplied into the result.
///
/// # Examples
/// ```
/// use numutil::integer_math::exponent::power;
///
/// assert_eq!(power(3, 4), Ok(81));
/// assert_eq!(power(-2, 63), Ok(i64::MIN));
/// assert!(power(2, 63).is_err());
/// ```
pub fn power(base: i64, exponent: i64) -> Result<i64, NumUtilError> {
    if exponent < 0 {
        return Err(NumUtilError::InvalidArgument(format!(
            "power exponent must be >= 0, got {}",
            exponent
        )));
    }

    let mut result: i64 = 1;
    let mut square = i128::from(base);
    let mut exp = exponent;

    while exp > 0 {
        if exp & 1 == 1 {
            let product = i128::from(result)
                .checked_mul(square)
                .ok_or_else(|| NumUtilError::overflow("power"))?;
            result = i64::try_from(product).map_err(|_| NumUtilError::overflow("power"))?;
        }
        exp >>= 1;
        if exp > 0 {
            square = square
                .checked_mul(square)
                .ok_or_else(|| NumUtilError::overflow("power"))?;
        }
    }

    Ok(result)
}

/// Computes `base^exponent mod modulus`.
///
/// Every product is reduced before the next multiplication, and products are
/// formed in `i128`, so this never overflows. The result lies in `0..modulus`,
/// also for negative bases.
pub fn mod_pow(base: i64, exponent: i64, modulus: i64) -> Result<i64, NumUtilError> {
    if exponent < 0 {
        return Err(NumUtilError::InvalidArgument(format!(
            "mod_pow exponent must be >= 0, got {}",
            exponent
        )));
    }
    if modulus <= 0 {
        return Err(NumUtilError::InvalidArgument(format!(
            "mod_pow modulus must be > 0, got {}",
            modulus
        )));
    }

    let m = i128::from(modulus);
    let mut result: i128 = 1 % m;
    let mut base = i128::from(base).rem_euclid(m);
    let mut exp = exponent;

    while exp > 0 {
        if exp & 1 == 1 {
            result = result * base % m;
        }
        base = base * base % m;
        exp >>= 1;
    }

    // result < modulus, which is an i64
    Ok(result as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_small() {
        assert_eq!(power(2, 10), Ok(1024));
        assert_eq!(power(5, 0), Ok(1));
        assert_eq!(power(0, 0), Ok(1));
        assert_eq!(power(0, 5), Ok(0));
        assert_eq!(power(-3, 3), Ok(-27));
    }

    #[test]
    fn test_power_limits() {
        assert_eq!(power(2, 62), Ok(1 << 62));
        assert_eq!(power(-2, 63), Ok(i64::MIN));
        assert_eq!(power(2, 63), Err(NumUtilError::overflow("power")));
        assert_eq!(power(10, 18), Ok(1_000_000_000_000_000_000));
        assert_eq!(power(10, 19), Err(NumUtilError::overflow("power")));
        assert_eq!(power(1, i64::MAX), Ok(1));
        assert_eq!(power(-1, i64::MAX), Ok(-1));
    }

    #[test]
    fn test_power_negative_exponent() {
        assert!(matches!(power(2, -1), Err(NumUtilError::InvalidArgument(_))));
    }

    #[test]
    fn test_mod_pow() {
        assert_eq!(mod_pow(2, 10, 1000), Ok(24));
        assert_eq!(mod_pow(3, 200, 13), Ok(9));
        assert_eq!(mod_pow(7, 0, 1), Ok(0));
        assert_eq!(mod_pow(7, 0, 5), Ok(1));
        assert_eq!(mod_pow(-2, 3, 5), Ok(2)); // -8 mod 5
    }

    #[test]
    fn test_mod_pow_large_operands() {
        let p = 1_000_000_007;
        // Fermat: a^(p-1) = 1 (mod p)
        assert_eq!(mod_pow(123_456_789, p - 1, p), Ok(1));
        assert_eq!(mod_pow(i64::MAX, 2, i64::MAX - 1), Ok(1));
    }

    #[test]
    fn test_mod_pow_invalid() {
        assert!(matches!(mod_pow(2, -1, 7), Err(NumUtilError::InvalidArgument(_))));
        assert!(matches!(mod_pow(2, 3, 0), Err(NumUtilError::InvalidArgument(_))));
        assert!(matches!(mod_pow(2, 3, -7), Err(NumUtilError::InvalidArgument(_))));
    }
}
