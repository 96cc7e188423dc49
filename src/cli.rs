// src/cli.rs
// Console driver: reads problem input, calls into the library, prints results.

use std::error::Error;
use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;
use log::{debug, info};

use crate::config::NumUtilConfig;
use crate::core::errors::NumUtilError;
use crate::core::scanner::Scanner;
use crate::integer_math::combinatorics::{combination, factorial, permutation};
use crate::integer_math::exponent::{mod_pow, power};
use crate::integer_math::factorization::{euler_totient, prime_factorization};
use crate::integer_math::gcd::{gcd, lcm};
use crate::integer_math::primality::{is_prime, primes_up_to};
use crate::integer_math::series::fibonacci;
use crate::sequence::reduce::{checked_sum_vec, max_vec, min_vec};
use crate::sequence::strings::is_palindrome;

pub const USAGE: &str = "usage: numutil [summary | primes <n> | factor <n> | power <b> <e> | \
modpow <b> <e> <m> | gcd <a> <b> | lcm <a> <b> | isprime <n> | factorial <n> | \
permutation <n> <r> | combination <n> <r> | totient <n> | fibonacci <n> | palindrome <s>]";

/// Runs the command named by `args[1]` (default `summary`).
///
/// `args` follows `std::env::args()`, so `args[0]` is the program name.
pub fn run<R: BufRead, W: Write>(
    args: &[String],
    config: &NumUtilConfig,
    input: R,
    output: &mut W,
) -> Result<(), Box<dyn Error>> {
    let command = args.get(1).map(String::as_str).unwrap_or("summary");
    let operands = args.get(2..).unwrap_or(&[]);
    info!("Running command '{}' with {} operand(s)", command, operands.len());

    match command {
        "summary" => summary(&mut Scanner::new(input), config, output),
        "primes" => {
            let n: i64 = operand(operands, 0)?;
            if n > config.sieve.max_limit {
                return Err(NumUtilError::InvalidArgument(format!(
                    "sieve bound {} exceeds configured limit {}",
                    n, config.sieve.max_limit
                ))
                .into());
            }
            let primes = primes_up_to(n)?;
            writeln!(output, "{}", join(&primes, &config.output.separator))?;
            Ok(())
        }
        "factor" => {
            let n: i64 = operand(operands, 0)?;
            let terms: Vec<String> = prime_factorization(n)?
                .into_iter()
                .map(|(prime, exponent)| match exponent {
                    1 => prime.to_string(),
                    _ => format!("{}^{}", prime, exponent),
                })
                .collect();
            let rendered = if terms.is_empty() { "1".to_string() } else { terms.join(" * ") };
            writeln!(output, "{} = {}", n, rendered)?;
            Ok(())
        }
        "power" => emit(output, power(operand(operands, 0)?, operand(operands, 1)?)?),
        "modpow" => emit(
            output,
            mod_pow(operand(operands, 0)?, operand(operands, 1)?, operand(operands, 2)?)?,
        ),
        "gcd" => emit(output, gcd(operand(operands, 0)?, operand(operands, 1)?)?),
        "lcm" => emit(output, lcm(operand(operands, 0)?, operand(operands, 1)?)?),
        "isprime" => emit(output, is_prime(operand(operands, 0)?)),
        "factorial" => emit(output, factorial(operand(operands, 0)?)?),
        "permutation" => emit(output, permutation(operand(operands, 0)?, operand(operands, 1)?)?),
        "combination" => emit(output, combination(operand(operands, 0)?, operand(operands, 1)?)?),
        "totient" => emit(output, euler_totient(operand(operands, 0)?)?),
        "fibonacci" => emit(output, fibonacci(operand(operands, 0)?)?),
        "palindrome" => {
            let text: String = operand(operands, 0)?;
            emit(output, is_palindrome(&text))
        }
        other => Err(NumUtilError::InvalidArgument(format!("unknown command '{}'; {}", other, USAGE)).into()),
    }
}

/// Reads `n` followed by `n` integers and prints a short report.
fn summary<R: BufRead, W: Write>(
    scanner: &mut Scanner<R>,
    config: &NumUtilConfig,
    output: &mut W,
) -> Result<(), Box<dyn Error>> {
    let n: i64 = scanner.next()?;
    let count = usize::try_from(n).map_err(|_| {
        NumUtilError::InvalidArgument(format!("element count must be >= 0, got {}", n))
    })?;
    let values: Vec<i64> = scanner.next_vec(count)?;
    debug!("summary read {} values", values.len());

    // Everything is computed up front so a failing step leaves no partial report
    let max = max_vec(&values)?;
    let min = min_vec(&values)?;
    let sum = checked_sum_vec(&values)?;
    let first_two_gcd = match values.as_slice() {
        [first, second, ..] => Some(gcd(*first, *second)?),
        _ => None,
    };

    writeln!(output, "Input: n={}, arr={}", n, join(&values, &config.output.separator))?;
    writeln!(output, "Max: {}, Min: {}, Sum: {}", max, min, sum)?;
    if let Some(divisor) = first_two_gcd {
        writeln!(output, "GCD of first two: {}", divisor)?;
    }
    writeln!(output, "Is {} prime? {}", n, is_prime(n))?;
    Ok(())
}

fn operand<T: FromStr>(operands: &[String], index: usize) -> Result<T, NumUtilError> {
    let raw = operands.get(index).ok_or_else(|| {
        NumUtilError::MalformedInput(format!("missing operand #{}; {}", index + 1, USAGE))
    })?;
    raw.parse::<T>()
        .map_err(|_| NumUtilError::MalformedInput(format!("cannot parse operand '{}'", raw)))
}

fn emit<W: Write, T: Display>(output: &mut W, value: T) -> Result<(), Box<dyn Error>> {
    writeln!(output, "{}", value)?;
    Ok(())
}

fn join<T: Display>(values: &[T], separator: &str) -> String {
    values
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(separator)
}
