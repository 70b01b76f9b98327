//! # Motion Driver
//!
//! Owns the marker set and advances it once per display refresh. The host
//! calls [`MotionDriver::tick`] from its frame callback with the handle it
//! got from [`MotionDriver::load`]; each tick returns an immutable
//! [`FrameSnapshot`] to paint.
//!
//! ## Per-marker update
//!
//! With accumulated time `t` the next pose is derived from `t' = t + increment`:
//!
//! ```text
//! dx = amplitude * sin(frequency * t' + phase) * direction * horizontal_scale
//! dy = -float_distance * ease(0.5 + 0.5 * sin(t'))
//! ```
//!
//! and the marker is drawn at `anchor + (dx, dy)` scaled by its fixed scale
//! variation. Time advances by exactly one increment per rendered frame, so
//! a long gap between frames (a hidden window, a stalled host) never causes
//! a jump.
//!
//! ## Suspension
//!
//! - Frozen markers keep their time and transform untouched
//! - While hidden, ticks do nothing and time resumes where it stopped
//! - Loading a new layout or unmounting invalidates the previous handle

use crate::config::BackdropConfig;
use crate::model::{FrameSnapshot, MarkerFrame, MarkerId, MarkerState, Transform};
use tracing::{debug, trace};

/// Offsets produced by one evaluation of the update function
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionSample {
    /// Accumulated time the offsets were evaluated at
    pub time: f64,
    pub offset_x: f32,
    pub offset_y: f32,
}

/// Evaluate a marker's offsets at accumulated time `t`. Pure.
///
/// The phase is computed in `f64`; only the resulting offsets are narrowed.
pub fn sample_at(marker: &MarkerState, t: f64, horizontal_scale: f32) -> MotionSample {
    let path = &marker.path;
    let sway = (f64::from(path.frequency) * t + f64::from(path.phase)).sin() as f32;
    let offset_x = path.amplitude * sway * marker.direction * horizontal_scale;
    let progress = marker.easing.apply((0.5 + 0.5 * t.sin()) as f32);

    MotionSample {
        time: t,
        offset_x,
        offset_y: -marker.float_distance * progress,
    }
}

/// Evaluate the pose one increment after the marker's current time. Pure.
pub fn advance(marker: &MarkerState, horizontal_scale: f32) -> MotionSample {
    sample_at(marker, marker.time + marker.time_increment, horizontal_scale)
}

/// Screen transform for a sample: anchor plus offsets, scaled by the marker's variation
pub fn transform_for(marker: &MarkerState, sample: &MotionSample) -> Transform {
    Transform {
        translate: marker.anchor.offset(sample.offset_x, sample.offset_y),
        scale: marker.scale_variation,
    }
}

/// Token proving which layout a frame callback was scheduled for.
///
/// Handles from an earlier [`MotionDriver::load`] are stale and every tick
/// made with them is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameLoopHandle {
    generation: u64,
}

impl FrameLoopHandle {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// No layout loaded, or the loop was cancelled
    Idle,
    Running,
    /// Loaded but the host is not visible
    Suspended,
}

impl LoopState {
    pub fn label(self) -> &'static str {
        match self {
            LoopState::Idle => "idle",
            LoopState::Running => "running",
            LoopState::Suspended => "suspended",
        }
    }
}

/// Per-frame owner of every [`MarkerState`].
#[derive(Debug)]
pub struct MotionDriver {
    markers: Vec<MarkerState>,
    generation: u64,
    handle: Option<FrameLoopHandle>,
    visible: bool,
    horizontal_scale: f32,
    max_frame_step: f32,
    frame_count: u64,
}

impl MotionDriver {
    pub fn new(config: &BackdropConfig) -> Self {
        Self {
            markers: Vec::new(),
            generation: 0,
            handle: None,
            visible: true,
            horizontal_scale: config.horizontal_scale,
            max_frame_step: config.max_frame_step_secs,
            frame_count: 0,
        }
    }

    /// Replace the marker set wholesale and start a new frame loop.
    ///
    /// The previous handle is cancelled first, so callbacks scheduled for the
    /// old layout can no longer touch the new one.
    pub fn load(&mut self, markers: Vec<MarkerState>) -> FrameLoopHandle {
        self.cancel();
        self.generation += 1;
        self.markers = markers;
        self.frame_count = 0;

        let handle = FrameLoopHandle {
            generation: self.generation,
        };
        self.handle = Some(handle);

        debug!(
            generation = self.generation,
            markers = self.markers.len(),
            "Frame loop started"
        );
        handle
    }

    /// Release the current frame loop handle. Markers are kept.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            debug!(generation = handle.generation, "Frame loop cancelled");
        }
    }

    /// Cancel the loop and drop every marker
    pub fn unmount(&mut self) {
        self.cancel();
        self.markers.clear();
        debug!(generation = self.generation, "Backdrop unmounted");
    }

    /// Gate the whole loop on host visibility
    pub fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            debug!(visible, generation = self.generation, "Visibility changed");
            self.visible = visible;
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_current(&self, handle: FrameLoopHandle) -> bool {
        self.handle == Some(handle)
    }

    pub fn loop_state(&self) -> LoopState {
        match (self.handle, self.visible) {
            (None, _) => LoopState::Idle,
            (Some(_), true) => LoopState::Running,
            (Some(_), false) => LoopState::Suspended,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn markers(&self) -> &[MarkerState] {
        &self.markers
    }

    pub fn marker(&self, id: MarkerId) -> Option<&MarkerState> {
        self.markers.iter().find(|m| m.id() == id)
    }

    /// Freeze a marker and pin it to its anchor with the hover scale applied.
    ///
    /// Returns `false` for unknown or not-yet-active markers.
    pub fn freeze(&mut self, id: MarkerId, hover_scale: f32) -> bool {
        let Some(marker) = self.markers.iter_mut().find(|m| m.id() == id) else {
            trace!(id, "Freeze skipped, no such marker");
            return false;
        };
        if !marker.is_active() {
            return false;
        }

        marker.is_frozen = true;
        marker.transform = marker.pinned_transform(hover_scale);
        true
    }

    /// Release a frozen marker. Its accumulated time is left as it was.
    pub fn unfreeze(&mut self, id: MarkerId) -> bool {
        let horizontal_scale = self.horizontal_scale;
        let Some(marker) = self.markers.iter_mut().find(|m| m.id() == id) else {
            trace!(id, "Unfreeze skipped, no such marker");
            return false;
        };
        if !marker.is_frozen {
            return false;
        }

        marker.is_frozen = false;
        let sample = sample_at(marker, marker.time, horizontal_scale);
        marker.transform = transform_for(marker, &sample);
        true
    }

    /// Advance one display refresh.
    ///
    /// `dt` is the wall-clock time since the previous frame and only counts
    /// down start delays (clamped to the configured maximum step). Returns
    /// `None` when `handle` is stale or the host is hidden.
    pub fn tick(&mut self, handle: FrameLoopHandle, dt: f32) -> Option<FrameSnapshot> {
        if !self.is_current(handle) {
            trace!(
                stale = handle.generation,
                current = self.generation,
                "Tick with stale handle ignored"
            );
            return None;
        }
        if !self.visible {
            return None;
        }

        let dt = if dt.is_finite() {
            dt.clamp(0.0, self.max_frame_step)
        } else {
            0.0
        };

        for marker in &mut self.markers {
            if !marker.is_active() {
                marker.delay_remaining = (marker.delay_remaining - dt).max(0.0);
                if !marker.is_active() {
                    continue;
                }
                trace!(id = marker.id(), "Marker activated");
            }
            if marker.is_frozen {
                continue;
            }

            let sample = advance(marker, self.horizontal_scale);
            marker.time = sample.time;
            marker.transform = transform_for(marker, &sample);
        }

        self.frame_count += 1;
        Some(self.snapshot())
    }

    /// Current frames of every active marker without advancing anything
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            generation: self.generation,
            frames: self
                .markers
                .iter()
                .filter(|m| m.is_active())
                .map(MarkerFrame::from)
                .collect(),
        }
    }

    /// Number of active markers that are currently frozen
    pub fn frozen_count(&self) -> usize {
        self.markers.iter().filter(|m| m.is_frozen).count()
    }

    pub fn active_count(&self) -> usize {
        self.markers.iter().filter(|m| m.is_active()).count()
    }
}
