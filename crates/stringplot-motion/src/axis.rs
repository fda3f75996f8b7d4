//! A single string axis: one stepper and its signed step accumulator.

use crate::hardware::{Direction, StepAxis};
use std::fmt;

/// Which anchor the axis winds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisSide {
    Left,
    Right,
}

impl AxisSide {
    /// Motor direction that pays string out. The motors face each other,
    /// so the right one lengthens its string turning backward.
    pub fn lengthen_direction(self) -> Direction {
        match self {
            Self::Left => Direction::Forward,
            Self::Right => Direction::Backward,
        }
    }
}

impl fmt::Display for AxisSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

/// Whether a step lengthens or shortens the string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepSign {
    Lengthen,
    Shorten,
}

impl StepSign {
    /// Sign of a length change; zero counts as lengthening
    pub fn of(delta: f64) -> Self {
        if delta >= 0.0 {
            Self::Lengthen
        } else {
            Self::Shorten
        }
    }

    pub fn as_i64(self) -> i64 {
        match self {
            Self::Lengthen => 1,
            Self::Shorten => -1,
        }
    }
}

/// One stepper plus the signed count of steps issued since home
pub struct MotionAxis {
    side: AxisSide,
    driver: Box<dyn StepAxis>,
    stepsum: i64,
    steps_issued: u64,
}

impl MotionAxis {
    pub fn new(side: AxisSide, driver: Box<dyn StepAxis>) -> Self {
        Self {
            side,
            driver,
            stepsum: 0,
            steps_issued: 0,
        }
    }

    pub fn side(&self) -> AxisSide {
        self.side
    }

    /// Signed steps since the last reset; positive means string paid out
    pub fn stepsum(&self) -> i64 {
        self.stepsum
    }

    /// Total steps commanded through [`step`](Self::step), in either direction
    pub fn steps_issued(&self) -> u64 {
        self.steps_issued
    }

    /// Issue one step and account for it
    pub fn step(&mut self, sign: StepSign) {
        let lengthen = self.side.lengthen_direction();
        let direction = match sign {
            StepSign::Lengthen => lengthen,
            StepSign::Shorten => lengthen.reversed(),
        };
        self.driver.step(direction);
        self.stepsum += sign.as_i64();
        self.steps_issued += 1;
    }

    /// Raw motor step that bypasses the accumulator. Only for motor checks
    /// that return the axis to where it was.
    pub fn jog(&mut self, direction: Direction) {
        self.driver.step(direction);
    }

    /// Forget accumulated steps; the pen has been placed at home
    pub fn reset(&mut self) {
        self.stepsum = 0;
    }
}

impl fmt::Debug for MotionAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MotionAxis")
            .field("side", &self.side)
            .field("stepsum", &self.stepsum)
            .field("steps_issued", &self.steps_issued)
            .finish_non_exhaustive()
    }
}
