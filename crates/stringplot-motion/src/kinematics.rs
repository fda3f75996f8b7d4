//! Bipolar kinematics.
//!
//! The left anchor is the origin and the right anchor sits at `(D, 0)`.
//! A pen position maps to the pair of string lengths from each anchor;
//! the inverse recovers the position with the law of cosines.

use stringplot_core::{MachineGeometry, Point};

/// Lengths of the left and right strings (cm)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StringLengths {
    pub left: f64,
    pub right: f64,
}

impl StringLengths {
    pub fn new(left: f64, right: f64) -> Self {
        Self { left, right }
    }
}

/// Pure transform between Cartesian points and string lengths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KinematicModel {
    anchor_distance: f64,
}

impl KinematicModel {
    pub fn new(anchor_distance: f64) -> Self {
        debug_assert!(anchor_distance > 0.0);
        Self { anchor_distance }
    }

    pub fn from_geometry(geometry: &MachineGeometry) -> Self {
        Self::new(geometry.anchor_distance())
    }

    pub fn anchor_distance(&self) -> f64 {
        self.anchor_distance
    }

    /// String lengths that put the pen at `p`
    pub fn to_lengths(&self, p: Point) -> StringLengths {
        StringLengths {
            left: p.x.hypot(p.y),
            right: (self.anchor_distance - p.x).hypot(p.y),
        }
    }

    /// Pen position for the given string lengths.
    ///
    /// Only meaningful for lengths that came from a point below the anchor
    /// line; reachability is not checked. Lengths that cannot meet produce
    /// a NaN y.
    pub fn to_point(&self, lengths: StringLengths) -> Point {
        let d = self.anchor_distance;
        let (l, r) = (lengths.left, lengths.right);
        let x = (l * l - r * r + d * d) / (2.0 * d);
        let y = (l * l - x * x).sqrt();
        Point::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_lengths_at_home() {
        let k = KinematicModel::new(91.44);
        let lengths = k.to_lengths(Point::new(45.72, 2.0));
        assert!((lengths.left - lengths.right).abs() < EPS);
        assert!((lengths.left - 45.72f64.hypot(2.0)).abs() < EPS);
    }

    #[test]
    fn test_right_triangle() {
        let k = KinematicModel::new(6.0);
        let lengths = k.to_lengths(Point::new(3.0, 4.0));
        assert!((lengths.left - 5.0).abs() < EPS);
        assert!((lengths.right - 5.0).abs() < EPS);

        let p = k.to_point(StringLengths::new(5.0, 5.0));
        assert!((p.x - 3.0).abs() < EPS);
        assert!((p.y - 4.0).abs() < EPS);
    }

    #[test]
    fn test_round_trip_near_corner() {
        let k = KinematicModel::new(91.44);
        let p = Point::new(2.0, 57.2);
        let back = k.to_point(k.to_lengths(p));
        assert!((back.x - p.x).abs() < 1e-9);
        assert!((back.y - p.y).abs() < 1e-9);
    }

    #[test]
    fn test_unreachable_lengths_are_nan() {
        let k = KinematicModel::new(10.0);
        let p = k.to_point(StringLengths::new(1.0, 1.0));
        assert!(p.y.is_nan());
    }
}
