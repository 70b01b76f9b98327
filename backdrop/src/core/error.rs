//! # Common Error Types
//!
//! Error handling for the backdrop host. Nothing fails once the window is
//! up: the engine degrades to an empty layout instead of erroring. Errors
//! come from startup only.
//!
//! ## Error Categories
//!
//! - **Engine**: Engine configuration rejected by `lib-core`
//! - **Render**: The native window or graphics context could not be created
//!
//! ## Error Conversion
//!
//! - `lib_core::AppError` → `AppError::Engine`
//! - `eframe::Error` → `AppError::Render`

use thiserror::Error;

/// Host application error type.
///
/// # Example
///
/// ```rust
/// use backdrop::core::error::AppError;
///
/// let err = AppError::Render("no suitable adapter".to_string());
/// assert_eq!(err.to_string(), "Render error: no suitable adapter");
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Engine configuration or construction error.
    #[error("Engine error: {0}")]
    Engine(#[from] lib_core::AppError),

    /// Native window or renderer failure.
    ///
    /// Raised when `eframe` cannot create the window or graphics context.
    #[error("Render error: {0}")]
    Render(String),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<eframe::Error> for AppError {
    fn from(err: eframe::Error) -> Self {
        AppError::Render(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_error_wraps_core_error() {
        let err: AppError =
            lib_core::AppError::Config("BACKDROP_SKIP_PROBABILITY must be in [0, 1)".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Engine error: Configuration error: BACKDROP_SKIP_PROBABILITY must be in [0, 1)"
        );
    }

    #[test]
    fn test_rejected_config_surfaces_as_engine_error() {
        let config = lib_core::BackdropConfig {
            cell_edge: 0.01,
            ..Default::default()
        };
        let result: Result<_> = crate::ui::backdrop::Backdrop::new(&config, shared::default_catalog())
            .map_err(AppError::from);
        assert!(matches!(result, Err(AppError::Engine(lib_core::AppError::Config(_)))));
    }
}
