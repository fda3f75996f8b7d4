//! Machine and planning constants.
//!
//! Defaults describe the reference machine: a 36" anchor span with 5 cm
//! radius spools on 200 step motors. All lengths are centimeters.

use std::f64::consts::PI;

/// Horizontal distance between the two string anchors (cm)
pub const DEFAULT_ANCHOR_DISTANCE_CM: f64 = 91.44;

/// Distance from the anchor line down to the bottom edge of the paper (cm)
pub const DEFAULT_BOTTOM_EDGE_CM: f64 = 59.2;

/// Full steps per motor revolution
pub const DEFAULT_STEPS_PER_REV: u32 = 200;

/// Spool circumference (cm); the spools have a 5 cm radius
pub const DEFAULT_SPOOL_CIRCUMFERENCE_CM: f64 = 5.0 * 2.0 * PI;

/// Vertical offset of the home point below the anchor line (cm).
/// Also used as the padding around the drawable rectangle.
pub const DEFAULT_HOME_OFFSET_CM: f64 = 2.0;

/// Settle delay after each motor step (ms)
pub const DEFAULT_STEP_DELAY_MS: u64 = 20;

/// Settle delay after each lifter move (ms)
pub const DEFAULT_LIFT_DELAY_MS: u64 = 300;

/// Lifter servo angle with the pen raised (degrees)
pub const DEFAULT_PEN_UP_ANGLE: f64 = 60.0;

/// Lifter servo angle with the pen on the paper (degrees)
pub const DEFAULT_PEN_DOWN_ANGLE: f64 = 0.0;

/// Servo actuation range (degrees)
pub const DEFAULT_SERVO_RANGE: f64 = 160.0;

/// Number of not-yet-scheduled paths the scheduler inspects per pick
pub const SCHEDULER_WINDOW: usize = 1000;

/// Fraction of the drawable rectangle a fitted drawing may occupy
pub const FIT_MARGIN: f64 = 0.99;

/// Minimum point count for a path to be drawn or fitted
pub const MIN_DRAWABLE_POINTS: usize = 2;

/// Minimum point count for a path to take part in scheduling
pub const MIN_SCHEDULED_POINTS: usize = 3;
