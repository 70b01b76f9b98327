//! # Marker Types
//!
//! A marker is one floating token. [`MarkerSpec`] is fixed when the marker is
//! created; [`MarkerState`] is the animation state the motion driver owns
//! and advances every frame.

use super::geometry::{Point, Transform};
use crate::easing::Easing;
use rand::Rng;

/// Marker identity. Stable for the lifetime of one layout pass only.
pub type MarkerId = u32;

/// Size class drawn per marker with weights 60/30/10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeClass {
    Small,
    Medium,
    Large,
}

/// Ranges and margins that a size class fixes for its markers.
///
/// Ranges are half-open `(min, max)` pairs in pixels or seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeProfile {
    /// Base rendered size (diameter) in pixels
    pub base_size: (f32, f32),
    /// Period of one full float cycle in seconds
    pub duration_secs: (f32, f32),
    /// Peak upward float distance in pixels
    pub float_distance: (f32, f32),
    /// Minimum distance kept between the marker edge and its cell edge
    pub edge_margin: f32,
}

const SMALL_PROFILE: SizeProfile = SizeProfile {
    base_size: (24.0, 32.0),
    duration_secs: (2.4, 3.2),
    float_distance: (4.0, 8.0),
    edge_margin: 20.0,
};

const MEDIUM_PROFILE: SizeProfile = SizeProfile {
    base_size: (36.0, 44.0),
    duration_secs: (2.8, 3.6),
    float_distance: (6.0, 10.0),
    edge_margin: 40.0,
};

const LARGE_PROFILE: SizeProfile = SizeProfile {
    base_size: (48.0, 56.0),
    duration_secs: (3.2, 4.0),
    float_distance: (3.0, 6.0),
    edge_margin: 60.0,
};

/// Smallest cell edge that still fits the largest marker of the largest
/// class together with its edge margin on both sides
pub const MIN_CELL_EDGE: f32 = 2.0 * LARGE_PROFILE.edge_margin + LARGE_PROFILE.base_size.1;

impl SizeClass {
    pub const ALL: [SizeClass; 3] = [SizeClass::Small, SizeClass::Medium, SizeClass::Large];

    /// Probability of drawing this class
    pub fn weight(self) -> f64 {
        match self {
            SizeClass::Small => 0.6,
            SizeClass::Medium => 0.3,
            SizeClass::Large => 0.1,
        }
    }

    pub fn profile(self) -> SizeProfile {
        match self {
            SizeClass::Small => SMALL_PROFILE,
            SizeClass::Medium => MEDIUM_PROFILE,
            SizeClass::Large => LARGE_PROFILE,
        }
    }

    /// Draw a class from the fixed 60/30/10 categorical distribution
    pub fn pick<R: Rng + ?Sized>(rng: &mut R) -> SizeClass {
        let roll: f64 = rng.random();
        let mut cumulative = 0.0;
        for class in Self::ALL {
            cumulative += class.weight();
            if roll < cumulative {
                return class;
            }
        }
        SizeClass::Large
    }

    pub fn label(self) -> &'static str {
        match self {
            SizeClass::Small => "small",
            SizeClass::Medium => "medium",
            SizeClass::Large => "large",
        }
    }
}

/// Immutable description of a marker, set at creation.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSpec {
    pub id: MarkerId,
    /// Display name shown in the tooltip
    pub name: String,
    pub symbol: String,
    /// Brand color as `[r, g, b]`
    pub color: [u8; 3],
    /// Decorative "24h change" percentage; random, not market data
    pub change_24h: f32,
}

/// Parameters of the periodic horizontal sway
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathParams {
    pub amplitude: f32,
    pub frequency: f32,
    pub phase: f32,
}

/// Mutable animation state of one marker.
///
/// Owned by the motion driver. The anchor never changes after creation; a
/// resize throws the whole set away and generates a new one.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerState {
    pub spec: MarkerSpec,
    /// Marker center at rest, in container pixels
    pub anchor: Point,
    pub size_class: SizeClass,
    /// Diameter before scaling, in pixels
    pub base_size: f32,
    /// Fixed per-marker scale in `[0.9, 1.1)`
    pub scale_variation: f32,
    /// Start delay drawn at creation, in seconds
    pub delay_secs: f32,
    /// Part of the start delay still to elapse
    pub delay_remaining: f32,
    pub float_distance: f32,
    /// Time added per frame
    pub time_increment: f64,
    /// `1.0` or `-1.0`
    pub direction: f32,
    pub path: PathParams,
    /// Accumulated time. `f64` so the fixed increment still registers after
    /// days of uptime
    pub time: f64,
    pub is_frozen: bool,
    pub easing: Easing,
    /// Last visual transform applied to this marker
    pub transform: Transform,
}

impl MarkerState {
    pub fn id(&self) -> MarkerId {
        self.spec.id
    }

    /// A marker is active once its start delay has fully elapsed
    pub fn is_active(&self) -> bool {
        self.delay_remaining <= 0.0
    }

    /// Transform that pins the marker to its anchor with hover emphasis
    pub fn pinned_transform(&self, hover_scale: f32) -> Transform {
        Transform::at_rest(self.anchor, self.scale_variation * hover_scale)
    }

    /// Diameter as currently drawn
    pub fn rendered_size(&self) -> f32 {
        self.base_size * self.transform.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_weights_sum_to_one() {
        let total: f64 = SizeClass::ALL.iter().map(|c| c.weight()).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_size_class_distribution_converges() {
        let mut rng = StdRng::seed_from_u64(42);
        let samples = 100_000;
        let mut counts = [0usize; 3];
        for _ in 0..samples {
            match SizeClass::pick(&mut rng) {
                SizeClass::Small => counts[0] += 1,
                SizeClass::Medium => counts[1] += 1,
                SizeClass::Large => counts[2] += 1,
            }
        }

        for (class, count) in SizeClass::ALL.iter().zip(counts) {
            let observed = count as f64 / samples as f64;
            assert!(
                (observed - class.weight()).abs() < 0.01,
                "{} observed {:.3}, expected {:.3}",
                class.label(),
                observed,
                class.weight()
            );
        }
    }

    #[test]
    fn test_min_cell_edge_fits_every_class() {
        assert_eq!(MIN_CELL_EDGE, 176.0);
        for class in SizeClass::ALL {
            let profile = class.profile();
            assert!(2.0 * profile.edge_margin + profile.base_size.1 <= MIN_CELL_EDGE);
        }
    }

    #[test]
    fn test_larger_classes_keep_further_from_edges() {
        assert!(SizeClass::Small.profile().edge_margin < SizeClass::Medium.profile().edge_margin);
        assert!(SizeClass::Medium.profile().edge_margin < SizeClass::Large.profile().edge_margin);
    }

    #[test]
    fn test_large_markers_float_least() {
        let small = SizeClass::Small.profile().float_distance;
        let medium = SizeClass::Medium.profile().float_distance;
        let large = SizeClass::Large.profile().float_distance;
        assert!(small.1 < medium.1);
        assert!(large.1 < small.1);
    }
}
