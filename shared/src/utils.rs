//! # Shared Utility Functions
//!
//! Formatting helpers used by the engine's tooltip model and the host's logo
//! badges.
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{format_change_pct, symbol_initials};
//!
//! assert_eq!(format_change_pct(-1.5), "-1.50%");
//! assert_eq!(symbol_initials("MATIC", 3), "MAT");
//! ```

/// Format a decorative change percentage with an explicit sign.
///
/// Non-negative values get a leading `+`, so `0.0` renders as `+0.00%`.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_change_pct;
///
/// assert_eq!(format_change_pct(5.2), "+5.20%");
/// assert_eq!(format_change_pct(0.0), "+0.00%");
/// assert_eq!(format_change_pct(-0.456), "-0.46%");
/// ```
pub fn format_change_pct(change: f32) -> String {
    if change >= 0.0 {
        format!("+{:.2}%", change)
    } else {
        format!("{:.2}%", change)
    }
}

/// Take the first `max_chars` characters of a symbol for a badge label.
///
/// Works on characters, not bytes, so non-ASCII symbols never panic.
///
/// # Examples
///
/// ```rust
/// use shared::utils::symbol_initials;
///
/// assert_eq!(symbol_initials("ETH", 3), "ETH");
/// assert_eq!(symbol_initials("SUSHI", 2), "SU");
/// assert_eq!(symbol_initials("", 2), "");
/// ```
pub fn symbol_initials(symbol: &str, max_chars: usize) -> String {
    symbol.chars().take(max_chars).collect()
}
