//! # StringPlot Planner
//!
//! Prepares artwork for the plotter before any motor moves:
//! - [`PathFitter`] scales and centers a drawing onto the drawable rectangle
//! - [`PathScheduler`] orders paths to cut down pen-up travel

pub mod fitter;
pub mod scheduler;

pub use fitter::{FitTransform, PathFitter};
pub use scheduler::{travel_distance, PathScheduler};
