//! Error handling for StringPlot
//!
//! Provides the error types for every layer of the plotter:
//! - Motion errors (targets outside the drawable rectangle)
//! - Path errors (coordinate data without a 2-D structure)
//! - Format errors (persisted artwork of an unknown shape)
//!
//! None of these are retried. The plotter runs open loop, so repeating a
//! step has no corrective meaning; a failure stops the current pass.

use std::fmt;
use thiserror::Error;

/// Cartesian axis named in a bounds violation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => write!(f, "X"),
            Self::Y => write!(f, "Y"),
        }
    }
}

/// Motion error type
///
/// Raised by the motion controller before any step of the offending move
/// is issued.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MotionError {
    /// Target lies outside the drawable rectangle
    #[error("Target {axis}={value} outside drawable range [{min}, {max}]")]
    OutOfBounds {
        /// The offending axis.
        axis: Axis,
        /// The requested coordinate.
        value: f64,
        /// Lower limit of the rectangle on that axis.
        min: f64,
        /// Upper limit of the rectangle on that axis.
        max: f64,
    },
}

/// Path error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    /// A path lacks the expected 2-D coordinate structure
    #[error("Malformed path #{path}: {reason}")]
    Malformed {
        /// Index of the path within its collection.
        path: usize,
        /// What was wrong with it.
        reason: String,
    },
}

/// Artwork format error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormatError {
    /// Persisted input is neither a path collection nor four channels
    #[error("Unknown artwork format: {reason}")]
    UnknownFormat {
        /// Description of the shape that was found.
        reason: String,
    },
}

/// Main error type for StringPlot
///
/// A unified error type that can represent any error from the core layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Motion error
    #[error(transparent)]
    Motion(#[from] MotionError),

    /// Path error
    #[error(transparent)]
    Path(#[from] PathError),

    /// Format error
    #[error(transparent)]
    Format(#[from] FormatError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a bounds violation
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, Error::Motion(MotionError::OutOfBounds { .. }))
    }

    /// Check if this is a malformed path
    pub fn is_malformed_path(&self) -> bool {
        matches!(self, Error::Path(PathError::Malformed { .. }))
    }

    /// Check if this is an unknown artwork format
    pub fn is_unknown_format(&self) -> bool {
        matches!(self, Error::Format(FormatError::UnknownFormat { .. }))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
