//! Drawing data model
//!
//! Artwork arrives as collections of polylines in centimeters. Paths are
//! produced by external tools and consumed read-only; operations that
//! change coordinates build new collections.

use crate::constants::MIN_DRAWABLE_POINTS;
use crate::error::PathError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A 2-D point in centimeters.
///
/// Serialized as a two-element array `[x, y]`, the layout used by the
/// line-art files.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Point> for [f64; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

/// An ordered polyline. Fewer than two points is degenerate.
pub type Path = Vec<Point>;

/// An unordered set of paths drawn with one pen.
pub type PathCollection = Vec<Path>;

/// Returns true if the path has enough points to draw a stroke
pub fn is_drawable(path: &[Point]) -> bool {
    path.len() >= MIN_DRAWABLE_POINTS
}

/// Axis-aligned bounding box of a path or collection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawBounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl DrawBounds {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Degenerate bounds around a single point
    pub fn from_point(p: Point) -> Self {
        Self::new(p.x, p.y, p.x, p.y)
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Width over height. Infinite for a flat box, NaN for a single point.
    pub fn aspect_ratio(&self) -> f64 {
        self.width() / self.height()
    }

    /// Grow the box to include a point
    pub fn include(&mut self, p: Point) {
        self.min_x = self.min_x.min(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_x = self.max_x.max(p.x);
        self.max_y = self.max_y.max(p.y);
    }

    /// Smallest box containing both boxes
    pub fn union(&self, other: &DrawBounds) -> DrawBounds {
        DrawBounds::new(
            self.min_x.min(other.min_x),
            self.min_y.min(other.min_y),
            self.max_x.max(other.max_x),
            self.max_y.max(other.max_y),
        )
    }

    /// Returns true if the point lies inside or on the box
    pub fn contains(&self, p: Point) -> bool {
        (self.min_x..=self.max_x).contains(&p.x) && (self.min_y..=self.max_y).contains(&p.y)
    }
}

impl fmt::Display for DrawBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.2}, {:.2}] x [{:.2}, {:.2}]",
            self.min_x, self.max_x, self.min_y, self.max_y
        )
    }
}

/// Bounding box of a single path.
///
/// `index` identifies the path in error reports. Returns `Ok(None)` for an
/// empty path and a malformed-path error if any coordinate is not finite.
pub fn path_bounds(index: usize, path: &[Point]) -> Result<Option<DrawBounds>, PathError> {
    let mut points = path.iter().enumerate();
    let Some((_, first)) = points.next() else {
        return Ok(None);
    };
    check_finite(index, 0, first)?;

    let mut bounds = DrawBounds::from_point(*first);
    for (i, p) in points {
        check_finite(index, i, p)?;
        bounds.include(*p);
    }
    Ok(Some(bounds))
}

/// Bounding box over every drawable path (two or more points) of a collection.
///
/// Returns `Ok(None)` if the collection has no drawable path.
pub fn collection_bounds(paths: &[Path]) -> Result<Option<DrawBounds>, PathError> {
    let mut total: Option<DrawBounds> = None;
    for (index, path) in paths.iter().enumerate() {
        if !is_drawable(path) {
            continue;
        }
        if let Some(b) = path_bounds(index, path)? {
            total = Some(match total {
                Some(t) => t.union(&b),
                None => b,
            });
        }
    }
    Ok(total)
}

fn check_finite(path: usize, vertex: usize, p: &Point) -> Result<(), PathError> {
    if p.is_finite() {
        Ok(())
    } else {
        Err(PathError::Malformed {
            path,
            reason: format!("vertex {vertex} has a non-finite coordinate ({}, {})", p.x, p.y),
        })
    }
}
