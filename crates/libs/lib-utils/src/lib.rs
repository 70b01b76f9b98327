//! # Utilities Library
//!
//! Environment variable helpers used by the backdrop engine's
//! configuration layer.

pub mod envs;

// Re-export commonly used functions
pub use envs::{get_env, get_env_flag, get_env_parse, get_env_parse_or};
