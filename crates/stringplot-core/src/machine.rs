//! Machine geometry of a two-string plotter
//!
//! The left anchor sits at the origin and the right anchor at
//! `(anchor_distance, 0)`; y grows downwards towards the bottom edge of
//! the paper. The pen starts at the home point, centered horizontally and
//! `home_offset` below the anchor line. The same offset pads the drawable
//! rectangle on every side.

use crate::constants::*;
use crate::geometry::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Drawable rectangle, inclusive on every edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawRect {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl DrawRect {
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.x_min + self.x_max) / 2.0,
            (self.y_min + self.y_max) / 2.0,
        )
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.width() / self.height()
    }

    /// Returns true if the point is inside or on the rectangle. NaN is never inside.
    pub fn contains(&self, p: Point) -> bool {
        (self.x_min..=self.x_max).contains(&p.x) && (self.y_min..=self.y_max).contains(&p.y)
    }
}

impl fmt::Display for DrawRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x [{:.2}, {:.2}] y [{:.2}, {:.2}]",
            self.x_min, self.x_max, self.y_min, self.y_max
        )
    }
}

/// Immutable description of the plotter hardware, fixed at session start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MachineGeometry {
    anchor_distance: f64,
    bottom_edge: f64,
    steps_per_rev: u32,
    spool_circumference: f64,
    home_offset: f64,
}

impl Default for MachineGeometry {
    fn default() -> Self {
        Self::new(
            DEFAULT_ANCHOR_DISTANCE_CM,
            DEFAULT_BOTTOM_EDGE_CM,
            DEFAULT_STEPS_PER_REV,
            DEFAULT_SPOOL_CIRCUMFERENCE_CM,
            DEFAULT_HOME_OFFSET_CM,
        )
    }
}

impl MachineGeometry {
    /// Create a geometry. All lengths are centimeters and must be positive;
    /// configuration loading validates them before calling this.
    pub fn new(
        anchor_distance: f64,
        bottom_edge: f64,
        steps_per_rev: u32,
        spool_circumference: f64,
        home_offset: f64,
    ) -> Self {
        debug_assert!(
            anchor_distance > 2.0 * home_offset && bottom_edge > 2.0 * home_offset,
            "padding {home_offset} leaves no drawable area in {anchor_distance} x {bottom_edge}"
        );
        debug_assert!(steps_per_rev > 0 && spool_circumference > 0.0);
        Self {
            anchor_distance,
            bottom_edge,
            steps_per_rev,
            spool_circumference,
            home_offset,
        }
    }

    /// Distance between the two anchors (D)
    pub fn anchor_distance(&self) -> f64 {
        self.anchor_distance
    }

    pub fn bottom_edge(&self) -> f64 {
        self.bottom_edge
    }

    pub fn steps_per_rev(&self) -> u32 {
        self.steps_per_rev
    }

    pub fn spool_circumference(&self) -> f64 {
        self.spool_circumference
    }

    /// Padding between the drawable rectangle and the physical limits
    pub fn padding(&self) -> f64 {
        self.home_offset
    }

    /// String length paid out or taken in by one motor step
    pub fn step_length(&self) -> f64 {
        self.spool_circumference / self.steps_per_rev as f64
    }

    pub fn draw_rect(&self) -> DrawRect {
        let pad = self.padding();
        DrawRect {
            x_min: pad,
            x_max: self.anchor_distance - pad,
            y_min: pad,
            y_max: self.bottom_edge - pad,
        }
    }

    /// Where the operator places the pen before each pass
    pub fn home(&self) -> Point {
        Point::new(self.anchor_distance / 2.0, self.home_offset)
    }

    /// One hundredth of the shorter side of the drawable rectangle
    pub fn cent(&self) -> f64 {
        let rect = self.draw_rect();
        rect.width().min(rect.height()) / 100.0
    }

    /// Number of distinguishable step positions across the rectangle (x, y)
    pub fn resolution(&self) -> (u64, u64) {
        let rect = self.draw_rect();
        let step = self.step_length();
        (
            (rect.width() / step).floor() as u64,
            (rect.height() / step).floor() as u64,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_geometry() {
        let g = MachineGeometry::default();
        let rect = g.draw_rect();
        assert_eq!(rect.x_min, 2.0);
        assert!((rect.x_max - 89.44).abs() < 1e-9);
        assert_eq!(rect.y_min, 2.0);
        assert!((rect.y_max - 57.2).abs() < 1e-9);
        assert!((g.step_length() - std::f64::consts::PI / 20.0).abs() < 1e-12);
        assert_eq!(g.home(), Point::new(45.72, 2.0));
    }

    #[test]
    fn test_cent_uses_shorter_side() {
        let g = MachineGeometry::default();
        assert!((g.cent() - 0.552).abs() < 1e-9);
    }

    #[test]
    fn test_resolution() {
        let g = MachineGeometry::default();
        let (x, y) = g.resolution();
        // 87.44 / 0.157 and 55.2 / 0.157
        assert_eq!(x, 556);
        assert_eq!(y, 351);
    }

    #[test]
    fn test_rect_contains_edges() {
        let rect = MachineGeometry::default().draw_rect();
        assert!(rect.contains(Point::new(rect.x_min, rect.y_max)));
        assert!(!rect.contains(Point::new(rect.x_max + 0.01, 10.0)));
        assert!(!rect.contains(Point::new(10.0, f64::NAN)));
    }
}
