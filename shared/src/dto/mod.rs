//! # Data Transfer Objects (DTOs)
//!
//! Plain data carried between the engine and the host.
//!
//! ## Module Organization
//!
//! - [`token`] - Token metadata used to seed floating markers
//!
//! Colors are `[r, g, b]` byte triples.

pub mod token;

pub use token::*;
