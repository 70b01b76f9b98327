//! # Marker Model
//!
//! Value types shared by the layout generator, the motion driver, the
//! interaction layer and the host renderer.
//!
//! - [`geometry`]: Points and transforms in container pixels
//! - [`marker`]: Per-marker immutable spec and mutable animation state
//! - [`frame`]: Immutable per-frame snapshots handed to the renderer

pub mod frame;
pub mod geometry;
pub mod marker;

pub use frame::{FrameSnapshot, MarkerFrame};
pub use geometry::{Point, Transform};
pub use marker::{
    MarkerId, MarkerSpec, MarkerState, PathParams, SizeClass, SizeProfile, MIN_CELL_EDGE,
};
