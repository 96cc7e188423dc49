// src/integer_math/primality.rs

use log::debug;
use crate::core::errors::NumUtilError;

/// Deterministic primality test by trial division with odd divisors up to sqrt(n).
///
/// The loop bound is written as `i <= n / i` so it cannot overflow near `i64::MAX`.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let mut divisor = 3i64;
    while divisor <= n / divisor {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

/// Builds a table of length `n + 1` where index `i` is true iff `i` is prime.
///
/// Multiples of each unmarked `i` are struck out starting from `i * i`.
/// Complexity: O(n log log n) time, O(n) memory.
pub fn sieve_of_eratosthenes(n: i64) -> Result<Vec<bool>, NumUtilError> {
    if n < 0 {
        return Err(NumUtilError::InvalidArgument(format!(
            "sieve bound must be >= 0, got {}",
            n
        )));
    }
    let too_large =
        || NumUtilError::InvalidArgument(format!("sieve bound {} exceeds available memory", n));
    let limit = usize::try_from(n).map_err(|_| too_large())?;
    let len = limit.checked_add(1).ok_or_else(too_large)?;

    debug!("Sieving primes up to {}", limit);
    // Allocation failure is reported instead of aborting the process
    let mut table: Vec<bool> = Vec::new();
    table.try_reserve_exact(len).map_err(|_| too_large())?;
    table.resize(len, true);
    table[0] = false;
    if limit >= 1 {
        table[1] = false;
    }

    let mut i = 2usize;
    while i <= limit / i {
        if table[i] {
            for multiple in (i * i..=limit).step_by(i) {
                table[multiple] = false;
            }
        }
        i += 1;
    }

    Ok(table)
}

/// All primes `<= n`, ascending.
pub fn primes_up_to(n: i64) -> Result<Vec<i64>, NumUtilError> {
    let table = sieve_of_eratosthenes(n)?;
    let primes: Vec<i64> = table
        .iter()
        .enumerate()
        .filter(|&(_, &prime)| prime)
        .map(|(index, _)| index as i64)
        .collect();
    debug!("Found {} primes up to {}", primes.len(), n);
    Ok(primes)
}
