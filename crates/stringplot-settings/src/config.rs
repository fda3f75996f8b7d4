//! Configuration for StringPlot
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats, stored by default in the platform config directory.
//!
//! Configuration is organized into logical sections:
//! - Geometry (anchor span, paper edge, spool and motor)
//! - Timing (settle delays after steps and lifts)
//! - Lifter (servo angles)
//! - Planner (scheduler window, fit margin)

use crate::error::{ConfigError, SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use stringplot_core::constants::*;
use stringplot_core::MachineGeometry;

/// Physical layout of the machine, all lengths in centimeters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometrySettings {
    /// Distance between the two string anchors
    pub anchor_distance_cm: f64,
    /// Distance from the anchor line to the bottom edge of the paper
    pub bottom_edge_cm: f64,
    /// Full steps per motor revolution
    pub steps_per_rev: u32,
    /// Spool circumference
    pub spool_circumference_cm: f64,
    /// Home point offset below the anchor line, also the page padding
    pub home_offset_cm: f64,
}

impl Default for GeometrySettings {
    fn default() -> Self {
        Self {
            anchor_distance_cm: DEFAULT_ANCHOR_DISTANCE_CM,
            bottom_edge_cm: DEFAULT_BOTTOM_EDGE_CM,
            steps_per_rev: DEFAULT_STEPS_PER_REV,
            spool_circumference_cm: DEFAULT_SPOOL_CIRCUMFERENCE_CM,
            home_offset_cm: DEFAULT_HOME_OFFSET_CM,
        }
    }
}

impl GeometrySettings {
    /// Build the machine geometry. Call `Config::validate` first.
    pub fn to_machine_geometry(&self) -> MachineGeometry {
        MachineGeometry::new(
            self.anchor_distance_cm,
            self.bottom_edge_cm,
            self.steps_per_rev,
            self.spool_circumference_cm,
            self.home_offset_cm,
        )
    }
}

/// Settle delays
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingSettings {
    pub step_delay_ms: u64,
    pub lift_delay_ms: u64,
}

impl Default for TimingSettings {
    fn default() -> Self {
        Self {
            step_delay_ms: DEFAULT_STEP_DELAY_MS,
            lift_delay_ms: DEFAULT_LIFT_DELAY_MS,
        }
    }
}

impl TimingSettings {
    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms)
    }

    pub fn lift_delay(&self) -> Duration {
        Duration::from_millis(self.lift_delay_ms)
    }
}

/// Pen lifter servo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifterSettings {
    /// Angle with the pen raised (degrees)
    pub pen_up_angle: f64,
    /// Angle with the pen on the paper (degrees)
    pub pen_down_angle: f64,
    /// Actuation range of the servo (degrees)
    pub actuation_range: f64,
}

impl Default for LifterSettings {
    fn default() -> Self {
        Self {
            pen_up_angle: DEFAULT_PEN_UP_ANGLE,
            pen_down_angle: DEFAULT_PEN_DOWN_ANGLE,
            actuation_range: DEFAULT_SERVO_RANGE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerSettings {
    /// Paths inspected per scheduling pick
    pub scheduler_window: usize,
    /// Fraction of the drawable rectangle a fitted drawing may fill
    pub fit_margin: f64,
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self {
            scheduler_window: SCHEDULER_WINDOW,
            fit_margin: FIT_MARGIN,
        }
    }
}

/// Complete plotter configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub geometry: GeometrySettings,
    pub timing: TimingSettings,
    pub lifter: LifterSettings,
    pub planner: PlannerSettings,
}

#[derive(Clone, Copy)]
enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> Result<Format, ConfigError> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(ConfigError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

fn out_of_range(key: &str, value: impl ToString) -> SettingsError {
    ConfigError::ValueOutOfRange {
        key: key.to_string(),
        value: value.to_string(),
    }
    .into()
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// `<config dir>/stringplot/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        let dir = dirs::config_dir().ok_or_else(|| {
            SettingsError::ConfigDirectory("no platform config directory".to_string())
        })?;
        Ok(dir.join("stringplot").join("config.toml"))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::LoadError(format!("{}: {}", path.display(), e)))?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load `path`, or the default location when `None`. A missing file
    /// yields the defaults; an unreadable or invalid one is an error.
    pub fn load_or_default(path: Option<&Path>) -> SettingsResult<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path() {
                Ok(p) => p,
                Err(e) => {
                    tracing::warn!("{}, using default config", e);
                    return Ok(Self::default());
                }
            },
        };

        if !path.exists() {
            tracing::info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from_file(&path)
    }

    /// Save config to file (JSON or TOML), creating parent directories
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| SettingsError::SaveError(format!("{}: {}", parent.display(), e)))?;
        }
        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        let g = &self.geometry;
        let positive = [
            ("geometry.anchor_distance_cm", g.anchor_distance_cm),
            ("geometry.bottom_edge_cm", g.bottom_edge_cm),
            ("geometry.spool_circumference_cm", g.spool_circumference_cm),
        ];
        for (key, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(out_of_range(key, value));
            }
        }
        if !(g.home_offset_cm.is_finite() && g.home_offset_cm >= 0.0) {
            return Err(out_of_range("geometry.home_offset_cm", g.home_offset_cm));
        }
        if g.steps_per_rev == 0 {
            return Err(out_of_range("geometry.steps_per_rev", g.steps_per_rev));
        }

        // the padded rectangle must have some area left
        if 2.0 * g.home_offset_cm >= g.anchor_distance_cm.min(g.bottom_edge_cm) {
            return Err(ConfigError::Inconsistent(format!(
                "home offset {} leaves no drawable area in {} x {}",
                g.home_offset_cm, g.anchor_distance_cm, g.bottom_edge_cm
            ))
            .into());
        }

        let l = &self.lifter;
        if !(l.actuation_range.is_finite() && l.actuation_range > 0.0) {
            return Err(out_of_range("lifter.actuation_range", l.actuation_range));
        }
        for (key, angle) in [
            ("lifter.pen_up_angle", l.pen_up_angle),
            ("lifter.pen_down_angle", l.pen_down_angle),
        ] {
            if !(0.0..=l.actuation_range).contains(&angle) {
                return Err(out_of_range(key, angle));
            }
        }

        let p = &self.planner;
        if p.scheduler_window == 0 {
            return Err(out_of_range("planner.scheduler_window", p.scheduler_window));
        }
        if !(p.fit_margin > 0.0 && p.fit_margin <= 1.0) {
            return Err(out_of_range("planner.fit_margin", p.fit_margin));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::new();
        assert!(config.validate().is_ok());
        assert_eq!(config.geometry.to_machine_geometry(), MachineGeometry::default());
        assert_eq!(config.timing.step_delay(), Duration::from_millis(20));
        assert_eq!(config.timing.lift_delay(), Duration::from_millis(300));
    }

    #[test]
    fn test_invalid_geometry() {
        let mut config = Config::new();
        config.geometry.steps_per_rev = 0;
        assert!(matches!(
            config.validate(),
            Err(SettingsError::Config(ConfigError::ValueOutOfRange { .. }))
        ));

        let mut config = Config::new();
        config.geometry.home_offset_cm = 40.0;
        assert!(matches!(
            config.validate(),
            Err(SettingsError::Config(ConfigError::Inconsistent(_)))
        ));
    }

    #[test]
    fn test_lifter_angles_within_range() {
        let mut config = Config::new();
        config.lifter.pen_up_angle = 170.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_planner_limits() {
        let mut config = Config::new();
        config.planner.fit_margin = 1.5;
        assert!(config.validate().is_err());

        let mut config = Config::new();
        config.planner.scheduler_window = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: Config = toml::from_str("[timing]\nstep_delay_ms = 0\n").unwrap();
        assert_eq!(config.timing.step_delay_ms, 0);
        assert_eq!(config.timing.lift_delay_ms, DEFAULT_LIFT_DELAY_MS);
        assert_eq!(config.geometry, GeometrySettings::default());
    }

    #[test]
    fn test_unsupported_extension() {
        let err = Config::load_from_file(Path::new("plotter.yaml")).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Config(ConfigError::UnsupportedFormat(ref ext)) if ext == "yaml"
        ));
    }
}
