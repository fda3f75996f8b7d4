//! Simulated hardware
//!
//! Stand-ins for the motor and servo boards that perform no I/O but keep
//! the same blocking contract. Every call is appended to a shared
//! [`Telemetry`] log as a timestamped sample, which is the only record a
//! dry run produces.

use crate::hardware::{Direction, LiftActuator, PositionSink, Rig, StepAxis};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use stringplot_core::constants::*;
use stringplot_core::{thread_safe_vec, Point, Result, ThreadSafeVec};

/// Timing and servo parameters of a simulated rig
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    /// Pause after each motor step
    pub step_delay: Duration,
    /// Pause after each lifter move
    pub lift_delay: Duration,
    /// Steps per motor revolution, for the in-revolution step position
    pub steps_per_rev: u32,
    /// Servo angle with the pen raised
    pub pen_up_angle: f64,
    /// Servo angle with the pen lowered
    pub pen_down_angle: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            step_delay: Duration::from_millis(DEFAULT_STEP_DELAY_MS),
            lift_delay: Duration::from_millis(DEFAULT_LIFT_DELAY_MS),
            steps_per_rev: DEFAULT_STEPS_PER_REV,
            pen_up_angle: DEFAULT_PEN_UP_ANGLE,
            pen_down_angle: DEFAULT_PEN_DOWN_ANGLE,
        }
    }
}

impl SimulationConfig {
    /// Same parameters with no settle delays, for tests and previews
    pub fn instant() -> Self {
        Self {
            step_delay: Duration::ZERO,
            lift_delay: Duration::ZERO,
            ..Self::default()
        }
    }
}

/// Odometer reading of a simulated stepper
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisSample {
    pub timestamp: DateTime<Utc>,
    pub odometer: i64,
}

/// Servo angle commanded to a simulated lifter
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LiftSample {
    pub timestamp: DateTime<Utc>,
    pub angle: f64,
}

/// Dead-reckoned pen position after a move
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionSample {
    pub timestamp: DateTime<Utc>,
    pub x: f64,
    pub y: f64,
}

/// Cloneable handle on the sample logs of a simulated rig
#[derive(Debug, Clone, Default)]
pub struct Telemetry {
    left: ThreadSafeVec<AxisSample>,
    right: ThreadSafeVec<AxisSample>,
    lift: ThreadSafeVec<LiftSample>,
    positions: ThreadSafeVec<PositionSample>,
}

/// Owned copy of all telemetry, in the layout written to disk
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub left: Vec<AxisSample>,
    pub right: Vec<AxisSample>,
    pub lift: Vec<LiftSample>,
    pub positions: Vec<PositionSample>,
}

impl Telemetry {
    pub fn new() -> Self {
        Self {
            left: thread_safe_vec(),
            right: thread_safe_vec(),
            lift: thread_safe_vec(),
            positions: thread_safe_vec(),
        }
    }

    pub fn left_samples(&self) -> Vec<AxisSample> {
        self.left.lock().clone()
    }

    pub fn right_samples(&self) -> Vec<AxisSample> {
        self.right.lock().clone()
    }

    pub fn lift_samples(&self) -> Vec<LiftSample> {
        self.lift.lock().clone()
    }

    pub fn positions(&self) -> Vec<PositionSample> {
        self.positions.lock().clone()
    }

    /// Total number of step commands seen on both axes
    pub fn step_count(&self) -> usize {
        self.left.lock().len() + self.right.lock().len()
    }

    pub fn snapshot(&self) -> TelemetrySnapshot {
        TelemetrySnapshot {
            left: self.left_samples(),
            right: self.right_samples(),
            lift: self.lift_samples(),
            positions: self.positions(),
        }
    }

    /// Drop every recorded sample
    pub fn clear(&self) {
        self.left.lock().clear();
        self.right.lock().clear();
        self.lift.lock().clear();
        self.positions.lock().clear();
    }

    /// Write a JSON snapshot for offline inspection
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(&self.snapshot())?;
        std::fs::write(path, content)?;
        tracing::info!("Telemetry written to {}", path.display());
        Ok(())
    }
}

/// A stepper that only counts
#[derive(Debug)]
pub struct SimulatedAxis {
    odometer: i64,
    steps_per_rev: u32,
    delay: Duration,
    log: ThreadSafeVec<AxisSample>,
}

impl SimulatedAxis {
    pub fn new(steps_per_rev: u32, delay: Duration, log: ThreadSafeVec<AxisSample>) -> Self {
        Self {
            odometer: 0,
            steps_per_rev,
            delay,
            log,
        }
    }

    /// Net steps taken; forward counts up
    pub fn odometer(&self) -> i64 {
        self.odometer
    }

    /// Position of the rotor within one revolution
    pub fn step_position(&self) -> u32 {
        self.odometer.rem_euclid(self.steps_per_rev as i64) as u32
    }
}

impl StepAxis for SimulatedAxis {
    fn step(&mut self, direction: Direction) {
        self.odometer += match direction {
            Direction::Forward => 1,
            Direction::Backward => -1,
        };
        self.log.lock().push(AxisSample {
            timestamp: Utc::now(),
            odometer: self.odometer,
        });
        settle(self.delay);
    }
}

/// A pen lifter that only records angles
#[derive(Debug)]
pub struct SimulatedLift {
    up_angle: f64,
    down_angle: f64,
    delay: Duration,
    log: ThreadSafeVec<LiftSample>,
}

impl SimulatedLift {
    pub fn new(up_angle: f64, down_angle: f64, delay: Duration, log: ThreadSafeVec<LiftSample>) -> Self {
        Self {
            up_angle,
            down_angle,
            delay,
            log,
        }
    }

    fn set_angle(&mut self, angle: f64) {
        self.log.lock().push(LiftSample {
            timestamp: Utc::now(),
            angle,
        });
        settle(self.delay);
    }
}

impl LiftActuator for SimulatedLift {
    fn up(&mut self) {
        self.set_angle(self.up_angle);
    }

    fn down(&mut self) {
        self.set_angle(self.down_angle);
    }
}

/// Records every position the controller reports
#[derive(Debug)]
pub struct SimulatedPositionSink {
    log: ThreadSafeVec<PositionSample>,
}

impl SimulatedPositionSink {
    pub fn new(log: ThreadSafeVec<PositionSample>) -> Self {
        Self { log }
    }
}

impl PositionSink for SimulatedPositionSink {
    fn record_position(&mut self, position: Point) {
        self.log.lock().push(PositionSample {
            timestamp: Utc::now(),
            x: position.x,
            y: position.y,
        });
    }
}

impl Rig {
    /// Build a rig of simulated capabilities sharing one telemetry log
    pub fn simulated(config: &SimulationConfig) -> (Rig, Telemetry) {
        let telemetry = Telemetry::new();
        let left = SimulatedAxis::new(
            config.steps_per_rev,
            config.step_delay,
            Arc::clone(&telemetry.left),
        );
        let right = SimulatedAxis::new(
            config.steps_per_rev,
            config.step_delay,
            Arc::clone(&telemetry.right),
        );
        let lift = SimulatedLift::new(
            config.pen_up_angle,
            config.pen_down_angle,
            config.lift_delay,
            Arc::clone(&telemetry.lift),
        );
        let positions = SimulatedPositionSink::new(Arc::clone(&telemetry.positions));

        let rig = Rig::new(Box::new(left), Box::new(right), Box::new(lift))
            .with_position_sink(Box::new(positions));
        (rig, telemetry)
    }
}

fn settle(delay: Duration) {
    if !delay.is_zero() {
        thread::sleep(delay);
    }
}
