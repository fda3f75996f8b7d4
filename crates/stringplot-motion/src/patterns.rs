//! Calibration shapes.
//!
//! Drawn before a job to check that the strings, spools and lifter behave:
//! the border shows the drawable limits, the circles show distortion across
//! the sheet and the crosses show centering.

use crate::controller::MotionController;
use std::f64::consts::TAU;
use stringplot_core::{MotionError, Path, Point};

/// Vertices per calibration circle
const CIRCLE_SEGMENTS: usize = 20;

/// Radius of calibration circles (cm)
const CIRCLE_RADIUS: f64 = 0.5;

/// The `n` vertices of a regular polygon inscribed in a circle.
/// The polygon is open: the first vertex is not repeated.
pub fn ngon(center: Point, radius: f64, n: usize, phase: f64) -> Path {
    let step = TAU / n as f64;
    (0..n)
        .map(|k| {
            let angle = k as f64 * step + phase;
            Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect()
}

impl MotionController {
    /// Closed axis-aligned rectangle
    pub fn draw_rect(&mut self, x0: f64, x1: f64, y0: f64, y1: f64) -> Result<(), MotionError> {
        let corners = [
            Point::new(x0, y0),
            Point::new(x1, y0),
            Point::new(x1, y1),
            Point::new(x0, y1),
        ];
        self.draw_vertices(&corners, true)
    }

    /// Trace the edge of the drawable rectangle
    pub fn draw_border(&mut self) -> Result<(), MotionError> {
        let rect = self.drawable_rect();
        self.draw_rect(rect.x_min, rect.x_max, rect.y_min, rect.y_max)
    }

    /// Small circle around `center`
    pub fn draw_circle(&mut self, center: Point, radius: f64) -> Result<(), MotionError> {
        let vertices = ngon(center, radius, CIRCLE_SEGMENTS, 0.0);
        self.draw_vertices(&vertices, false)
    }

    /// Diagonal cross two cents wide
    pub fn draw_cross(&mut self, center: Point) -> Result<(), MotionError> {
        let c = self.geometry().cent();
        self.draw_vertices(
            &[
                Point::new(center.x - c, center.y - c),
                Point::new(center.x + c, center.y + c),
            ],
            false,
        )?;
        self.draw_vertices(
            &[
                Point::new(center.x - c, center.y + c),
                Point::new(center.x + c, center.y - c),
            ],
            false,
        )
    }

    /// Border, five circles and two crosses
    pub fn plot_test(&mut self) -> Result<(), MotionError> {
        let cent = self.geometry().cent();
        tracing::info!("Drawing test pattern");

        self.draw_border()?;
        for center in [
            Point::new(10.0 * cent, 10.0 * cent),
            Point::new(10.0, 10.0),
            Point::new(10.0, 40.0),
            Point::new(40.0, 10.0),
            Point::new(40.0, 40.0),
        ] {
            self.draw_circle(center, CIRCLE_RADIUS)?;
        }
        self.draw_cross(Point::new(50.0 * cent, 50.0 * cent))?;
        self.draw_cross(Point::new(90.0 * cent, 90.0 * cent))
    }
}
