//! Hardware capability boundary
//!
//! The controller talks to the machine only through these traits. A driver
//! crate implements them for the real motor and servo boards; the
//! [`simulated`](crate::simulated) module implements them for dry runs.
//! The choice is made once, when the [`Rig`] is built.

use std::fmt;
use stringplot_core::Point;

/// Rotation direction of a stepper
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub fn reversed(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Forward => write!(f, "forward"),
            Self::Backward => write!(f, "backward"),
        }
    }
}

/// One stepper motor.
///
/// `step` blocks for the motor's settle delay before returning and must be
/// safe to call back to back.
pub trait StepAxis: Send {
    fn step(&mut self, direction: Direction);
}

/// Pen lifter. Both moves block for the servo settle delay.
pub trait LiftActuator: Send {
    fn up(&mut self);
    fn down(&mut self);
}

/// Receives the dead-reckoned pen position after every completed move
pub trait PositionSink: Send {
    fn record_position(&mut self, position: Point);
}

/// Discards positions. Used with real hardware.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopPositionSink;

impl PositionSink for NoopPositionSink {
    fn record_position(&mut self, _position: Point) {}
}

/// The set of capabilities a controller drives
pub struct Rig {
    pub(crate) left: Box<dyn StepAxis>,
    pub(crate) right: Box<dyn StepAxis>,
    pub(crate) lift: Box<dyn LiftActuator>,
    pub(crate) positions: Box<dyn PositionSink>,
}

impl Rig {
    /// Bundle driver capabilities. Positions are not recorded.
    pub fn new(
        left: Box<dyn StepAxis>,
        right: Box<dyn StepAxis>,
        lift: Box<dyn LiftActuator>,
    ) -> Self {
        Self {
            left,
            right,
            lift,
            positions: Box::new(NoopPositionSink),
        }
    }

    /// Replace the position sink
    pub fn with_position_sink(mut self, sink: Box<dyn PositionSink>) -> Self {
        self.positions = sink;
        self
    }
}

impl fmt::Debug for Rig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rig").finish_non_exhaustive()
    }
}
