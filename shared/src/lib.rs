//! # Shared Token Data Library
//!
//! Token metadata shared between the backdrop engine (`lib-core`) and the
//! desktop host (`backdrop`). Nothing here animates or renders; it is the
//! supporting data the floating-token background draws from.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects
//!   - **[`dto::token`]**: Token metadata (name, symbol, brand color)
//! - **[`catalog`]**: The built-in token catalog and its color table
//! - **[`utils`]**: Shared formatting helpers
//!   - **[`utils::format_change_pct`]**: Signed percentage for tooltips
//!   - **[`utils::symbol_initials`]**: Short label painted on logo badges
//!
//! ## Usage
//!
//! ```rust
//! use shared::catalog::default_catalog;
//! use shared::utils::format_change_pct;
//!
//! let catalog = default_catalog();
//! assert_eq!(catalog.len(), 18);
//! assert_eq!(format_change_pct(3.456), "+3.46%");
//! ```

pub mod catalog;
pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use catalog::{default_catalog, CATALOG_SIZE};
pub use dto::*;
pub use utils::*;
