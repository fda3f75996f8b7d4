//! StringPlot Settings Crate
//!
//! Handles machine configuration: geometry, motor timing, lifter angles
//! and planner options, persisted as TOML or JSON.

pub mod config;
pub mod error;

pub use config::{Config, GeometrySettings, LifterSettings, PlannerSettings, TimingSettings};
pub use error::{ConfigError, SettingsError, SettingsResult};
