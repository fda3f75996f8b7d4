use stringplot_settings::{Config, ConfigError, SettingsError};
use tempfile::TempDir;

fn custom() -> Config {
    let mut config = Config::new();
    config.geometry.anchor_distance_cm = 120.0;
    config.geometry.bottom_edge_cm = 80.0;
    config.timing.step_delay_ms = 5;
    config.lifter.pen_up_angle = 45.0;
    config.planner.scheduler_window = 250;
    config
}

#[test]
fn toml_save_and_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    custom().save_to_file(&path).unwrap();
    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded, custom());

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("[geometry]"));
    assert!(text.contains("anchor_distance_cm = 120.0"));
}

#[test]
fn json_save_and_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");

    custom().save_to_file(&path).unwrap();
    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded, custom());
}

#[test]
fn missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");
    let config = Config::load_or_default(Some(&path)).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn invalid_values_are_rejected_on_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[geometry]\nsteps_per_rev = 0\n").unwrap();

    let err = Config::load_or_default(Some(&path)).unwrap_err();
    assert!(matches!(
        err,
        SettingsError::Config(ConfigError::ValueOutOfRange { ref key, .. })
            if key == "geometry.steps_per_rev"
    ));
}

#[test]
fn invalid_config_is_not_saved() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    let mut config = Config::new();
    config.planner.fit_margin = 0.0;

    assert!(config.save_to_file(&path).is_err());
    assert!(!path.exists());
}

#[test]
fn garbage_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(matches!(
        Config::load_from_file(&path),
        Err(SettingsError::JsonError(_))
    ));
}
