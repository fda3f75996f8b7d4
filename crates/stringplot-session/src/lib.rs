//! # StringPlot Session
//!
//! Top level plotting workflow: loads persisted artwork, fits and orders
//! it, and drives a [`stringplot_motion::MotionController`] through one
//! pass per pen with operator homing in between.

pub mod artwork;
pub mod operator;
pub mod session;

pub use artwork::{Artwork, Channel};
pub use operator::{AutoConfirm, ConsolePrompt, Operator};
pub use session::{simulation_config, PassReport, PlotOptions, PlotSession, SessionId};
