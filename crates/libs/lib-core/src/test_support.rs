//! Hand-built markers for unit tests.

use crate::easing::Easing;
use crate::model::{MarkerSpec, MarkerState, PathParams, Point, SizeClass, Transform};

/// A marker that is already active, sitting at `(x, y)`
pub(crate) fn marker_at(id: u32, x: f32, y: f32) -> MarkerState {
    let anchor = Point::new(x, y);
    MarkerState {
        spec: MarkerSpec {
            id,
            name: format!("Token {}", id),
            symbol: format!("T{}", id),
            color: [120, 120, 200],
            change_24h: 2.5,
        },
        anchor,
        size_class: SizeClass::Medium,
        base_size: 40.0,
        scale_variation: 1.0,
        delay_secs: 0.0,
        delay_remaining: 0.0,
        float_distance: 5.0,
        time_increment: 0.04,
        direction: 1.0,
        path: PathParams {
            amplitude: 0.3,
            frequency: 0.3,
            phase: 0.0,
        },
        time: 0.0,
        is_frozen: false,
        easing: Easing::EaseInOutSine,
        transform: Transform::at_rest(anchor, 1.0),
    }
}

/// Three active markers spread across a 900x300 strip
pub(crate) fn three_markers() -> Vec<MarkerState> {
    vec![
        marker_at(0, 150.0, 150.0),
        marker_at(1, 450.0, 150.0),
        marker_at(2, 750.0, 150.0),
    ]
}
