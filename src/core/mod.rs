// src/core/mod.rs

pub mod errors;
pub mod scanner;
