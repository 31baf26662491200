//! Geometry primitives shared by the panel model
//!
//! Everything is in host-surface coordinates (logical points, `f64`).

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const ZERO: Rect = Rect::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Origin coordinate on the given axis
    pub fn origin_on(&self, axis: SwipeAxis) -> f64 {
        match axis {
            SwipeAxis::Horizontal => self.x,
            SwipeAxis::Vertical => self.y,
        }
    }

    /// Size on the given axis (width for horizontal, height for vertical)
    pub fn size_on(&self, axis: SwipeAxis) -> f64 {
        match axis {
            SwipeAxis::Horizontal => self.width,
            SwipeAxis::Vertical => self.height,
        }
    }

    /// Whether a point in this rect's *local* space lies within its bounds.
    ///
    /// Edges are inclusive on both sides.
    pub fn contains_local(&self, point: Vector) -> bool {
        point.x >= 0.0 && point.x <= self.width && point.y >= 0.0 && point.y <= self.height
    }

    /// Interpolate every field independently: `t * (from - to) + to`.
    ///
    /// `t == 1` yields `from`, `t == 0` yields `to`.
    pub fn lerp(t: f64, from: &Rect, to: &Rect) -> Rect {
        if t == 1.0 {
            return *from;
        }
        Rect {
            x: lerp_scalar(t, from.x, to.x),
            y: lerp_scalar(t, from.y, to.y),
            width: lerp_scalar(t, from.width, to.width),
            height: lerp_scalar(t, from.height, to.height),
        }
    }
}

/// 2D vector used for gesture translation, velocity and tap locations
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub const ZERO: Vector = Vector::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component on the given axis
    pub fn on(&self, axis: SwipeAxis) -> f64 {
        match axis {
            SwipeAxis::Horizontal => self.x,
            SwipeAxis::Vertical => self.y,
        }
    }
}

/// Axis the swipe gesture tracks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeAxis {
    #[default]
    Horizontal,
    Vertical,
}

impl SwipeAxis {
    pub fn name(&self) -> &'static str {
        match self {
            SwipeAxis::Horizontal => "horizontal",
            SwipeAxis::Vertical => "vertical",
        }
    }
}

impl std::fmt::Display for SwipeAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[inline]
fn lerp_scalar(t: f64, from: f64, to: f64) -> f64 {
    t * (from - to) + to
}

/// Clamp `value` into `[min, max]`.
///
/// Unlike `f64::clamp` this never panics when `min > max`; the lower bound wins.
#[inline]
pub fn clamped(value: f64, min: f64, max: f64) -> f64 {
    if value > max {
        max.max(min)
    } else if value < min {
        min
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        let from = Rect::new(0.1, 0.2, 0.3, 0.7);
        let to = Rect::new(0.7, 0.9, 1.3, 0.1);
        assert_eq!(Rect::lerp(1.0, &from, &to), from);
        assert_eq!(Rect::lerp(0.0, &from, &to), to);
    }

    #[test]
    fn test_lerp_fields_are_independent() {
        let from = Rect::new(400.0, 0.0, 300.0, 500.0);
        let to = Rect::new(100.0, 20.0, 200.0, 500.0);
        let mid = Rect::lerp(0.5, &from, &to);
        assert_eq!(mid, Rect::new(250.0, 10.0, 250.0, 500.0));
    }

    #[test]
    fn test_clamped() {
        assert_eq!(clamped(-0.5, 0.0, 1.0), 0.0);
        assert_eq!(clamped(1.5, 0.0, 1.0), 1.0);
        assert_eq!(clamped(0.25, 0.0, 1.0), 0.25);
        // Inverted bounds never panic
        assert_eq!(clamped(5.0, 3.0, 1.0), 3.0);
        assert_eq!(clamped(2.0, 3.0, 1.0), 3.0);
        assert_eq!(clamped(0.0, 3.0, 1.0), 3.0);
    }

    #[test]
    fn test_contains_local_edges() {
        let rect = Rect::new(100.0, 100.0, 300.0, 500.0);
        assert!(rect.contains_local(Vector::new(0.0, 0.0)));
        assert!(rect.contains_local(Vector::new(300.0, 500.0)));
        assert!(!rect.contains_local(Vector::new(-5.0, 50.0)));
        assert!(!rect.contains_local(Vector::new(150.0, 501.0)));
    }

    #[test]
    fn test_axis_accessors() {
        let rect = Rect::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(rect.origin_on(SwipeAxis::Horizontal), 1.0);
        assert_eq!(rect.origin_on(SwipeAxis::Vertical), 2.0);
        assert_eq!(rect.size_on(SwipeAxis::Horizontal), 3.0);
        assert_eq!(rect.size_on(SwipeAxis::Vertical), 4.0);
        assert_eq!(Vector::new(5.0, 6.0).on(SwipeAxis::Vertical), 6.0);
    }
}
