//! # Backdrop Configuration
//!
//! Tuning constants for the layout generator, motion driver and interaction
//! layer, plus the rendering constants (opacity, blur) a host applies to
//! every marker. Values come from environment variables and are validated
//! before use.
//!
//! ## Global Config Access
//!
//! Use [`core_config()`] to access the global configuration instance:
//!
//! ```rust,no_run
//! use lib_core::config::core_config;
//!
//! let config = core_config();
//! let cell = config.cell_edge;
//! ```
//!
//! Call [`init_config()`] once at startup; until then (or if it fails)
//! [`core_config()`] hands out the defaults.

use crate::error::{AppError, Result};
use crate::model::MIN_CELL_EDGE;
use lib_utils::envs::{get_env_flag, get_env_parse, get_env_parse_or, Error as EnvError};
use std::sync::OnceLock;

/// Backdrop configuration loaded from environment variables.
#[derive(Clone, Debug, PartialEq)]
pub struct BackdropConfig {
    /// Edge length of one layout grid cell, in pixels
    ///
    /// At least [`MIN_CELL_EDGE`] so every marker fits inside its cell.
    pub cell_edge: f32,

    /// Probability that a grid cell stays empty
    ///
    /// Valid range: `[0, 1)`
    pub skip_probability: f64,

    /// Pixels of horizontal sway per unit of path amplitude
    pub horizontal_scale: f32,

    /// Scale multiplier applied on top of a marker's own scale while hovered
    ///
    /// Must be greater than 1 so hovered markers are emphasised.
    pub hover_scale: f32,

    /// Marker opacity applied by the host (not computed by the engine)
    pub marker_opacity: f32,

    /// Soft-edge radius applied by the host, in pixels
    pub blur_radius: f32,

    /// Frame rate the animation durations are tuned against
    pub reference_fps: f32,

    /// Largest wall-clock step counted towards activation delays, in seconds
    pub max_frame_step_secs: f32,

    /// Treat an unfocused window like a hidden one
    pub pause_when_unfocused: bool,

    /// Fixed seed for layout generation; `None` draws from OS entropy
    pub seed: Option<u64>,
}

impl Default for BackdropConfig {
    fn default() -> Self {
        Self {
            cell_edge: 300.0,
            skip_probability: 0.7,
            horizontal_scale: 20.0,
            hover_scale: 1.2,
            marker_opacity: 0.6,
            blur_radius: 2.0,
            reference_fps: 60.0,
            max_frame_step_secs: 0.1,
            pause_when_unfocused: false,
            seed: None,
        }
    }
}

impl BackdropConfig {
    /// Load configuration from environment variables.
    ///
    /// Unset variables fall back to [`BackdropConfig::default`]; variables
    /// that are set but unparsable are reported as [`AppError::Config`].
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let seed = match get_env_parse::<u64>("BACKDROP_SEED") {
            Ok(seed) => Some(seed),
            Err(EnvError::MissingEnv(_)) => None,
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            cell_edge: get_env_parse_or("BACKDROP_CELL_EDGE", defaults.cell_edge)?,
            skip_probability: get_env_parse_or(
                "BACKDROP_SKIP_PROBABILITY",
                defaults.skip_probability,
            )?,
            horizontal_scale: get_env_parse_or(
                "BACKDROP_HORIZONTAL_SCALE",
                defaults.horizontal_scale,
            )?,
            hover_scale: get_env_parse_or("BACKDROP_HOVER_SCALE", defaults.hover_scale)?,
            marker_opacity: get_env_parse_or("BACKDROP_MARKER_OPACITY", defaults.marker_opacity)?,
            blur_radius: get_env_parse_or("BACKDROP_BLUR_RADIUS", defaults.blur_radius)?,
            reference_fps: get_env_parse_or("BACKDROP_REFERENCE_FPS", defaults.reference_fps)?,
            max_frame_step_secs: get_env_parse_or(
                "BACKDROP_MAX_FRAME_STEP",
                defaults.max_frame_step_secs,
            )?,
            pause_when_unfocused: get_env_flag(
                "BACKDROP_PAUSE_UNFOCUSED",
                defaults.pause_when_unfocused,
            ),
            seed,
        })
    }

    /// Validate configuration values against the engine's requirements.
    pub fn validate(&self) -> Result<()> {
        if !(self.cell_edge.is_finite() && self.cell_edge >= MIN_CELL_EDGE) {
            return Err(AppError::Config(format!(
                "BACKDROP_CELL_EDGE must be at least {}, got {}",
                MIN_CELL_EDGE, self.cell_edge
            )));
        }

        if !(0.0..1.0).contains(&self.skip_probability) {
            return Err(AppError::Config(
                "BACKDROP_SKIP_PROBABILITY must be in [0, 1)".to_string(),
            ));
        }

        if !(self.hover_scale.is_finite() && self.hover_scale > 1.0) {
            return Err(AppError::Config(
                "BACKDROP_HOVER_SCALE must be greater than 1".to_string(),
            ));
        }

        if !(self.marker_opacity > 0.0 && self.marker_opacity <= 1.0) {
            return Err(AppError::Config(
                "BACKDROP_MARKER_OPACITY must be in (0, 1]".to_string(),
            ));
        }

        if !(self.blur_radius.is_finite() && self.blur_radius >= 0.0) {
            return Err(AppError::Config(
                "BACKDROP_BLUR_RADIUS must not be negative".to_string(),
            ));
        }

        if !(self.reference_fps.is_finite() && self.reference_fps > 0.0) {
            return Err(AppError::Config(
                "BACKDROP_REFERENCE_FPS must be positive".to_string(),
            ));
        }

        if !(self.max_frame_step_secs.is_finite() && self.max_frame_step_secs > 0.0) {
            return Err(AppError::Config(
                "BACKDROP_MAX_FRAME_STEP must be positive".to_string(),
            ));
        }

        if !self.horizontal_scale.is_finite() {
            return Err(AppError::Config(
                "BACKDROP_HORIZONTAL_SCALE must be finite".to_string(),
            ));
        }

        Ok(())
    }
}

/// Global configuration instance (initialized once at startup).
static CONFIG: OnceLock<BackdropConfig> = OnceLock::new();

/// Initialize the global configuration from the environment.
///
/// # Errors
///
/// Returns an error if:
/// - Environment variables are invalid
/// - Configuration validation fails
/// - Config has already been initialized
///
/// # Example
///
/// ```rust,no_run
/// use lib_core::config::init_config;
///
/// fn main() -> lib_core::Result<()> {
///     init_config()?;
///     // ... rest of application startup
///     Ok(())
/// }
/// ```
pub fn init_config() -> Result<()> {
    let config = BackdropConfig::from_env()?;
    config.validate()?;

    CONFIG
        .set(config)
        .map_err(|_| AppError::Config("Config has already been initialized".to_string()))
}

/// Get a reference to the global configuration.
///
/// Falls back to [`BackdropConfig::default`] when [`init_config()`] was never
/// called or failed.
pub fn core_config() -> &'static BackdropConfig {
    CONFIG.get_or_init(BackdropConfig::default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(BackdropConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_certain_skip() {
        let config = BackdropConfig {
            skip_probability: 1.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }

    #[test]
    fn test_rejects_non_emphasising_hover_scale() {
        let config = BackdropConfig {
            hover_scale: 1.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_cell_edge() {
        let config = BackdropConfig {
            cell_edge: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_cell_edge_lower_bound() {
        let tiny = BackdropConfig {
            cell_edge: 0.01,
            ..Default::default()
        };
        assert!(matches!(tiny.validate(), Err(AppError::Config(msg)) if msg.contains("176")));

        let below = BackdropConfig {
            cell_edge: MIN_CELL_EDGE - 1.0,
            ..Default::default()
        };
        assert!(below.validate().is_err());

        let minimum = BackdropConfig {
            cell_edge: MIN_CELL_EDGE,
            ..Default::default()
        };
        assert!(minimum.validate().is_ok());
    }

    #[test]
    fn test_rejects_out_of_range_opacity() {
        let config = BackdropConfig {
            marker_opacity: 1.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
