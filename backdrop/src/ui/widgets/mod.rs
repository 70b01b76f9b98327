//! # Widgets
//!
//! Small overlay widgets drawn around the backdrop.

pub mod status_bar;
pub mod tooltip;
