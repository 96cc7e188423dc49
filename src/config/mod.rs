// src/config/mod.rs

pub mod numutil_config;

// Re-export main types for convenience
pub use numutil_config::{NumUtilConfig, OutputConfig, SieveConfig};
