//! Easing curves mapping normalized progress `[0, 1]` onto `[0, 1]`.

use rand::Rng;
use std::f32::consts::PI;

/// Easing curve applied to a marker's vertical float progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Easing {
    Linear,
    EaseInOutSine,
    EaseInOutQuad,
    EaseOutCubic,
}

impl Easing {
    /// Every curve a marker may be assigned
    pub const ALL: [Easing; 4] = [
        Easing::Linear,
        Easing::EaseInOutSine,
        Easing::EaseInOutQuad,
        Easing::EaseOutCubic,
    ];

    /// Evaluate the curve. Input outside `[0, 1]` is clamped first.
    pub fn apply(self, p: f32) -> f32 {
        let p = if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) };
        match self {
            Easing::Linear => p,
            Easing::EaseInOutSine => -((PI * p).cos() - 1.0) / 2.0,
            Easing::EaseInOutQuad => {
                if p < 0.5 {
                    2.0 * p * p
                } else {
                    1.0 - (-2.0 * p + 2.0).powi(2) / 2.0
                }
            }
            Easing::EaseOutCubic => 1.0 - (1.0 - p).powi(3),
        }
    }

    /// Pick a curve uniformly at random
    pub fn pick<R: Rng + ?Sized>(rng: &mut R) -> Easing {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    pub fn name(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseInOutSine => "ease-in-out-sine",
            Easing::EaseInOutQuad => "ease-in-out-quad",
            Easing::EaseOutCubic => "ease-out-cubic",
        }
    }
}

impl Default for Easing {
    fn default() -> Self {
        Easing::EaseInOutSine
    }
}
