//! # Core Abstractions
//!
//! Error types shared by the host application.
//!
//! ## Modules
//!
//! - **[`error`]**: Application error types (`AppError`, `Result<T>`)
//!
//! ## Error Handling
//!
//! All host errors use the centralized [`AppError`] type:
//!
//! ```rust,no_run
//! use backdrop::core::error::Result;
//! use backdrop::ui::backdrop::Backdrop;
//!
//! fn build(config: &lib_core::BackdropConfig) -> Result<Backdrop> {
//!     // A rejected engine config becomes `AppError::Engine`
//!     Ok(Backdrop::new(config, shared::default_catalog())?)
//! }
//! ```

pub mod error;

pub use error::{AppError, Result};
