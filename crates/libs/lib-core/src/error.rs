//! # Centralized Error Handling
//!
//! The engine itself cannot fail at runtime: a zero-sized container yields an
//! empty layout and events for markers that no longer exist are skipped.
//! The only fallible steps are building the engine from configuration, which
//! report through [`AppError`].
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_core::error::{AppError, Result};
//!
//! fn parse_cell_edge(raw: f32) -> Result<f32> {
//!     if raw <= 0.0 {
//!         return Err(AppError::Config("cell edge must be positive".to_string()));
//!     }
//!     Ok(raw)
//! }
//!
//! assert!(parse_cell_edge(-1.0).is_err());
//! ```
//!
//! ## Error Conversion
//!
//! - `From<lib_utils::envs::Error>` - unset/unparsable environment variables

use thiserror::Error;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Engine error type.
#[derive(Debug, Error, PartialEq)]
pub enum AppError {
    /// Configuration error during startup, environment loading or
    /// engine construction.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<lib_utils::envs::Error> for AppError {
    fn from(err: lib_utils::envs::Error) -> Self {
        AppError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AppError::Config("BACKDROP_CELL_EDGE must be positive".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: BACKDROP_CELL_EDGE must be positive"
        );
    }

    #[test]
    fn test_env_error_converts_to_config() {
        let err: AppError = lib_utils::envs::Error::WrongFormat("BACKDROP_SEED").into();
        assert!(matches!(err, AppError::Config(msg) if msg.contains("BACKDROP_SEED")));
    }
}
