//! # StringPlot Motion
//!
//! Turns Cartesian drawing targets into interleaved stepper commands for a
//! two-string plotter.
//!
//! - [`kinematics`]: Cartesian point ↔ string lengths
//! - [`hardware`]: capability traits a motor/servo driver implements
//! - [`simulated`]: recording stand-ins for the hardware plus [`Telemetry`]
//! - [`axis`]: one stepper with its signed step accumulator
//! - [`interleave`]: step ordering across the two axes
//! - [`controller`]: bounds-checked, dead-reckoned moves and pen control
//! - [`patterns`]: calibration shapes drawn through the controller

pub mod axis;
pub mod controller;
pub mod hardware;
pub mod interleave;
pub mod kinematics;
pub mod patterns;
pub mod simulated;

pub use axis::{AxisSide, MotionAxis, StepSign};
pub use controller::{MotionController, MotionState, PenState};
pub use hardware::{Direction, LiftActuator, NoopPositionSink, PositionSink, Rig, StepAxis};
pub use interleave::{interleave, Interleave};
pub use kinematics::{KinematicModel, StringLengths};
pub use patterns::ngon;
pub use simulated::{
    AxisSample, LiftSample, PositionSample, SimulatedAxis, SimulatedLift, SimulatedPositionSink,
    SimulationConfig, Telemetry, TelemetrySnapshot,
};
