//! Container-space geometry. Origin is the container's top-left corner, y grows downward.

/// A position in container pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Return this point moved by `(dx, dy)`
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Visual transform of a marker: where its center is drawn and how much it is scaled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Center of the marker after translation
    pub translate: Point,
    /// Multiplier applied to the marker's base size
    pub scale: f32,
}

impl Transform {
    /// Transform that draws a marker exactly on its anchor
    pub fn at_rest(anchor: Point, scale: f32) -> Self {
        Self {
            translate: anchor,
            scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset() {
        let p = Point::new(10.0, 20.0).offset(-2.5, 4.0);
        assert_eq!(p, Point::new(7.5, 24.0));
    }

    #[test]
    fn test_at_rest_keeps_anchor() {
        let t = Transform::at_rest(Point::new(3.0, 4.0), 1.1);
        assert_eq!(t.translate, Point::new(3.0, 4.0));
        assert_eq!(t.scale, 1.1);
    }
}
