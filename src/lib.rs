// src/lib.rs

pub mod cli;
pub mod config;
pub mod core;
pub mod integer_math;
pub mod sequence;

pub use crate::core::errors::NumUtilError;
pub use crate::integer_math::combinatorics::{combination, factorial, permutation, MAX_FACTORIAL_INPUT};
pub use crate::integer_math::digits::{digit_count, digit_sum};
pub use crate::integer_math::exponent::{mod_pow, power};
pub use crate::integer_math::factorization::{divisor_count, divisors, euler_totient, prime_factorization};
pub use crate::integer_math::gcd::{are_coprime, extended_gcd, gcd, gcd_all, lcm, lcm_all, mod_inverse};
pub use crate::integer_math::primality::{is_prime, primes_up_to, sieve_of_eratosthenes};
pub use crate::integer_math::series::{fibonacci, geometric_sum, range_sum, MAX_FIBONACCI_INPUT};
pub use crate::integer_math::square_root::{integer_sqrt, is_perfect_square};
pub use crate::sequence::order::{reverse_vec, sort_vec, sort_vec_desc};
pub use crate::sequence::reduce::{checked_sum_vec, max_vec, min_vec, sum_vec};
pub use crate::sequence::search::{
    binary_search, binary_search_max, binary_search_min, lower_bound, ternary_search_min_int, upper_bound,
};
pub use crate::sequence::strings::{is_palindrome, reverse_string};
