//! # Floating Backdrop - Library Root
//!
//! Native desktop host for the floating-token backdrop. The engine itself
//! (layout, motion, interaction) lives in `lib-core`; this crate measures
//! the window, forwards visibility and pointer state, and paints each
//! frame snapshot with egui.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              backdrop (this crate)                     │
//! ├────────────────────────────────────────────────────────┤
//! │  eframe / egui  - Native window and painting            │
//! │  tracing        - Structured file logging               │
//! │  sysinfo        - Memory metrics for the debug overlay  │
//! └────────────────────────────────────────────────────────┘
//!          │ measure / visibility / pointer
//!          ▼
//! ┌────────────────────────────────────────────────────────┐
//! │  lib-core: LayoutGenerator → MotionDriver → snapshots  │
//! │            InteractionLayer (freeze, tooltip)           │
//! └────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: [`app::BackdropApp`] (eframe entry point) and window state
//! - **ui**: Backdrop component, logo placeholders, tooltip, status bar, theme
//! - **debug**: Logging, frame and memory metrics
//! - **core**: Host error types
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin backdrop
//! BACKDROP_SEED=7 RUST_LOG=backdrop=debug,lib_core=debug cargo run --bin backdrop
//! ```
//!
//! Keys: `R` relayout, `Space` pause, `Ctrl+D` debug overlay.

pub mod app;
pub mod core;
pub mod debug;
pub mod ui;

// Re-export commonly used types for convenience
pub use app::{AppState, BackdropApp};
pub use core::{AppError, Result};
