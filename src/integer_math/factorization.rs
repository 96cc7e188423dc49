// src/integer_math/factorization.rs
//
// Trial-division factorization helpers
// Complexity: O(sqrt(n))

use log::debug;
use crate::core::errors::NumUtilError;

fn require_positive(n: i64, operation: &str) -> Result<(), NumUtilError> {
    if n < 1 {
        return Err(NumUtilError::InvalidArgument(format!(
            "{} input must be >= 1, got {}",
            operation, n
        )));
    }
    Ok(())
}

/// Prime factors of `n` with multiplicity, as ascending `(prime, exponent)` pairs.
///
/// `prime_factorization(1)` is empty.
///
/// # Examples
/// ```
/// use numutil::integer_math::factorization::prime_factorization;
///
/// assert_eq!(prime_factorization(360).unwrap(), vec![(2, 3), (3, 2), (5, 1)]);
/// ```
pub fn prime_factorization(n: i64) -> Result<Vec<(i64, u32)>, NumUtilError> {
    require_positive(n, "prime_factorization")?;

    let mut factors = Vec::new();
    let mut remaining = n;

    // Factor out all 2s
    let twos = remaining.trailing_zeros();
    if twos > 0 {
        factors.push((2, twos));
        remaining >>= twos;
    }

    let mut divisor = 3i64;
    while divisor <= remaining / divisor {
        let mut count = 0u32;
        while remaining % divisor == 0 {
            remaining /= divisor;
            count += 1;
        }
        if count > 0 {
            factors.push((divisor, count));
        }
        divisor += 2;
    }

    // If remaining > 1, it's a prime factor
    if remaining > 1 {
        factors.push((remaining, 1));
    }

    debug!("Factored {} into {} distinct primes", n, factors.len());
    Ok(factors)
}

/// All positive divisors of `n`, ascending.
pub fn divisors(n: i64) -> Result<Vec<i64>, NumUtilError> {
    require_positive(n, "divisors")?;

    let mut small = Vec::new();
    let mut large = Vec::new();
    let mut i = 1i64;
    while i <= n / i {
        if n % i == 0 {
            small.push(i);
            if i != n / i {
                large.push(n / i);
            }
        }
        i += 1;
    }

    small.extend(large.into_iter().rev());
    Ok(small)
}

/// Number of positive divisors of `n`: the product of `exponent + 1` over its
/// prime factorization.
pub fn divisor_count(n: i64) -> Result<i64, NumUtilError> {
    require_positive(n, "divisor_count")?;

    Ok(prime_factorization(n)?
        .into_iter()
        .map(|(_, exponent)| i64::from(exponent) + 1)
        .product())
}

/// Euler's totient: how many integers in `1..=n` are coprime to `n`.
pub fn euler_totient(n: i64) -> Result<i64, NumUtilError> {
    require_positive(n, "euler_totient")?;

    Ok(prime_factorization(n)?
        .into_iter()
        .fold(n, |acc, (prime, _)| acc / prime * (prime - 1)))
}
