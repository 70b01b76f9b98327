//! # Core Library
//!
//! Renderer-agnostic engine for the floating-token backdrop: layout
//! generation, the per-frame motion driver and the hover/focus interaction
//! layer. The engine owns every marker; a host only measures its container,
//! forwards events and paints the [`FrameSnapshot`] returned by each tick.
//!
//! ```rust
//! use lib_core::{BackdropConfig, InteractionLayer, LayoutGenerator, MotionDriver};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let config = BackdropConfig::default();
//! let catalog = shared::default_catalog();
//! let mut rng = StdRng::seed_from_u64(7);
//!
//! let markers = LayoutGenerator::new(&config)?.generate(1200.0, 800.0, &catalog, &mut rng);
//! let mut driver = MotionDriver::new(&config);
//! let handle = driver.load(markers);
//! let mut interaction = InteractionLayer::new(config.hover_scale);
//!
//! // once per display refresh
//! if let Some(snapshot) = driver.tick(handle, 1.0 / 60.0) {
//!     for frame in &snapshot.frames {
//!         let _ = (frame.center, frame.size);
//!     }
//! }
//! interaction.sync(&mut driver, None, None);
//! # Ok::<(), lib_core::AppError>(())
//! ```

pub mod config;
pub mod easing;
pub mod error;
pub mod interaction;
pub mod layout;
pub mod model;
pub mod motion;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use config::{core_config, init_config, BackdropConfig};
pub use easing::Easing;
pub use error::{AppError, Result};
pub use interaction::{ChangeSentiment, InteractionLayer, TooltipModel};
pub use layout::{GridDims, LayoutGenerator};
pub use model::{
    FrameSnapshot, MarkerFrame, MarkerId, MarkerSpec, MarkerState, PathParams, Point, SizeClass,
    Transform, MIN_CELL_EDGE,
};
pub use motion::{FrameLoopHandle, LoopState, MotionDriver, MotionSample};
