//! Open-loop motion controller
//!
//! Owns both string axes, the pen lifter and the kinematic model. A move
//! converts its target into string lengths, rounds the length changes to
//! whole steps and issues them in interleaved order. There is no position
//! sensor: the string lengths are always derived from the step
//! accumulators, so the estimate stays consistent with what was issued even
//! though it can differ from the nominal target by up to one step per axis.

use crate::axis::{AxisSide, MotionAxis, StepSign};
use crate::hardware::{Direction, LiftActuator, PositionSink, Rig};
use crate::interleave::interleave;
use crate::kinematics::{KinematicModel, StringLengths};
use std::fmt;
use std::time::Instant;
use stringplot_core::{Axis, DrawRect, MachineGeometry, MotionError, Point};

/// Pen lifter state as last commanded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PenState {
    Up,
    Down,
}

/// Dead-reckoned state: accumulators and the string lengths derived from them
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionState {
    pub stepsum_left: i64,
    pub stepsum_right: i64,
    pub left_length: f64,
    pub right_length: f64,
}

/// Drives a two-string plotter through a [`Rig`]
pub struct MotionController {
    geometry: MachineGeometry,
    kinematics: KinematicModel,
    rect: DrawRect,
    home_lengths: StringLengths,
    lengths: StringLengths,
    left: MotionAxis,
    right: MotionAxis,
    lift: Box<dyn LiftActuator>,
    positions: Box<dyn PositionSink>,
    pen: PenState,
}

impl MotionController {
    /// Create a controller with the pen assumed at the home point
    pub fn new(geometry: MachineGeometry, rig: Rig) -> Self {
        let kinematics = KinematicModel::from_geometry(&geometry);
        let home_lengths = kinematics.to_lengths(geometry.home());
        let Rig {
            left,
            right,
            lift,
            positions,
        } = rig;

        Self {
            geometry,
            kinematics,
            rect: geometry.draw_rect(),
            home_lengths,
            lengths: home_lengths,
            left: MotionAxis::new(AxisSide::Left, left),
            right: MotionAxis::new(AxisSide::Right, right),
            lift,
            positions,
            pen: PenState::Up,
        }
    }

    pub fn geometry(&self) -> &MachineGeometry {
        &self.geometry
    }

    pub fn kinematics(&self) -> &KinematicModel {
        &self.kinematics
    }

    pub fn drawable_rect(&self) -> DrawRect {
        self.rect
    }

    pub fn pen(&self) -> PenState {
        self.pen
    }

    /// String lengths at the calibrated home point
    pub fn home_lengths(&self) -> StringLengths {
        self.home_lengths
    }

    pub fn motion_state(&self) -> MotionState {
        MotionState {
            stepsum_left: self.left.stepsum(),
            stepsum_right: self.right.stepsum(),
            left_length: self.lengths.left,
            right_length: self.lengths.right,
        }
    }

    /// Current pen position estimate
    pub fn position(&self) -> Point {
        self.kinematics.to_point(self.lengths)
    }

    /// Steps issued on each axis since the controller was created (left, right)
    pub fn steps_issued(&self) -> (u64, u64) {
        (self.left.steps_issued(), self.right.steps_issued())
    }

    /// The operator has placed the pen at home: forget all accumulated motion
    pub fn reset_to_home(&mut self) {
        self.left.reset();
        self.right.reset();
        self.lengths = self.home_lengths;
        tracing::debug!("Motion state reset to home {}", self.geometry.home());
    }

    pub fn pen_up(&mut self) {
        self.lift.up();
        self.pen = PenState::Up;
    }

    pub fn pen_down(&mut self) {
        self.lift.down();
        self.pen = PenState::Down;
    }

    /// Exercise every actuator once: lift, one step each way on both
    /// motors, then drop and raise the pen. Leaves the accumulators alone.
    pub fn motor_check(&mut self) {
        tracing::info!("Running motor check");
        self.pen_up();
        self.left.jog(Direction::Forward);
        self.left.jog(Direction::Backward);
        self.right.jog(Direction::Forward);
        self.right.jog(Direction::Backward);
        self.pen_down();
        self.pen_up();
    }

    /// Move the pen in a straight-ish line to `(x, y)`.
    ///
    /// Fails before issuing any step if the target lies outside the
    /// drawable rectangle.
    pub fn move_to(&mut self, x: f64, y: f64) -> Result<(), MotionError> {
        self.check_bounds(x, y)?;

        let target = self.kinematics.to_lengths(Point::new(x, y));
        let d_left = target.left - self.lengths.left;
        let d_right = target.right - self.lengths.right;
        let step_length = self.geometry.step_length();
        let n_left = (d_left.abs() / step_length).round() as u64;
        let n_right = (d_right.abs() / step_length).round() as u64;

        if n_left == 0 && n_right == 0 {
            return Ok(());
        }

        let sign_left = StepSign::of(d_left);
        let sign_right = StepSign::of(d_right);
        for side in interleave(n_left, n_right) {
            match side {
                AxisSide::Left => self.left.step(sign_left),
                AxisSide::Right => self.right.step(sign_right),
            }
        }

        self.update_lengths();
        let position = self.position();
        self.positions.record_position(position);
        tracing::trace!(
            target_x = x,
            target_y = y,
            n_left,
            n_right,
            "Moved to {}",
            position
        );
        Ok(())
    }

    /// Move to a point
    pub fn move_to_point(&mut self, p: Point) -> Result<(), MotionError> {
        self.move_to(p.x, p.y)
    }

    /// Draw a polyline, optionally closing it back to its first vertex.
    ///
    /// Paths with fewer than two vertices are skipped without touching the
    /// pen. On error the pass stops where it is.
    pub fn draw_vertices(&mut self, vertices: &[Point], cycle: bool) -> Result<(), MotionError> {
        if vertices.len() < 2 {
            return Ok(());
        }
        let first = vertices[0];

        let started = Instant::now();
        self.pen_up();
        self.move_to_point(first)?;
        self.pen_down();
        for v in vertices {
            self.move_to_point(*v)?;
        }
        if cycle {
            self.move_to_point(first)?;
        }
        self.pen_up();

        tracing::debug!(
            "Drew {} vertices in {:.2?}",
            vertices.len(),
            started.elapsed()
        );
        Ok(())
    }

    fn check_bounds(&self, x: f64, y: f64) -> Result<(), MotionError> {
        let rect = &self.rect;
        if !(rect.x_min..=rect.x_max).contains(&x) {
            return Err(MotionError::OutOfBounds {
                axis: Axis::X,
                value: x,
                min: rect.x_min,
                max: rect.x_max,
            });
        }
        if !(rect.y_min..=rect.y_max).contains(&y) {
            return Err(MotionError::OutOfBounds {
                axis: Axis::Y,
                value: y,
                min: rect.y_min,
                max: rect.y_max,
            });
        }
        Ok(())
    }

    fn update_lengths(&mut self) {
        let step_length = self.geometry.step_length();
        self.lengths = StringLengths {
            left: self.home_lengths.left + self.left.stepsum() as f64 * step_length,
            right: self.home_lengths.right + self.right.stepsum() as f64 * step_length,
        };
    }
}

impl fmt::Debug for MotionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MotionController")
            .field("geometry", &self.geometry)
            .field("left", &self.left)
            .field("right", &self.right)
            .field("lengths", &self.lengths)
            .field("pen", &self.pen)
            .finish_non_exhaustive()
    }
}
