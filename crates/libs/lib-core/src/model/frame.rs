//! Immutable per-frame output of the motion driver.

use super::geometry::Point;
use super::marker::{MarkerId, MarkerState};

/// Everything a renderer needs to draw one marker for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerFrame {
    pub id: MarkerId,
    pub symbol: String,
    pub color: [u8; 3],
    /// Center of the marker after the transform is applied
    pub center: Point,
    /// Rendered diameter (base size times scale)
    pub size: f32,
    pub scale: f32,
    pub frozen: bool,
}

impl From<&MarkerState> for MarkerFrame {
    fn from(marker: &MarkerState) -> Self {
        Self {
            id: marker.id(),
            symbol: marker.spec.symbol.clone(),
            color: marker.spec.color,
            center: marker.transform.translate,
            size: marker.rendered_size(),
            scale: marker.transform.scale,
            frozen: marker.is_frozen,
        }
    }
}

/// Frames of every active marker, tagged with the layout generation they belong to.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FrameSnapshot {
    pub generation: u64,
    pub frames: Vec<MarkerFrame>,
}

impl FrameSnapshot {
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn find(&self, id: MarkerId) -> Option<&MarkerFrame> {
        self.frames.iter().find(|f| f.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(id: MarkerId) -> MarkerFrame {
        MarkerFrame {
            id,
            symbol: "ETH".to_string(),
            color: [98, 126, 234],
            center: Point::new(10.0, 10.0),
            size: 30.0,
            scale: 1.0,
            frozen: false,
        }
    }

    #[test]
    fn test_find_by_id() {
        let snapshot = FrameSnapshot {
            generation: 3,
            frames: vec![frame(0), frame(4)],
        };
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.find(4).map(|f| f.id), Some(4));
        assert!(snapshot.find(1).is_none());
    }

    #[test]
    fn test_default_snapshot_is_empty() {
        let snapshot = FrameSnapshot::default();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.generation, 0);
    }
}
