// src/integer_math/mod.rs

pub mod combinatorics;
pub mod digits;
pub mod exponent;
pub mod factorization;
pub mod gcd;
pub mod primality;
pub mod series;
pub mod square_root;
