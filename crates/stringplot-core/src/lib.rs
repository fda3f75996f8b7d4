//! # StringPlot Core
//!
//! Core types and utilities shared by every StringPlot crate.
//! Provides the drawing data model (points, paths, bounds), the immutable
//! machine geometry of a two-string plotter, and the error types used
//! throughout the workspace.

pub mod constants;
pub mod error;
pub mod geometry;
pub mod machine;
pub mod types;

pub use error::{Axis, Error, FormatError, MotionError, PathError, Result};

pub use geometry::{collection_bounds, path_bounds, DrawBounds, Path, PathCollection, Point};

pub use machine::{DrawRect, MachineGeometry};

pub use types::{thread_safe_vec, ThreadSafe, ThreadSafeVec};
