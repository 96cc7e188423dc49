// src/sequence/mod.rs

pub mod order;
pub mod reduce;
pub mod search;
pub mod strings;
