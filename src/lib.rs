//! # StringPlot
//!
//! Driver for two-string (polargraph) pen plotters: a pen hangs from two
//! strings wound on stepper spools at the top corners of a board, and
//! changing the string lengths moves it across the paper.
//!
//! ## Architecture
//!
//! StringPlot is organized as a workspace with multiple crates:
//!
//! 1. **stringplot-core** - Points, paths, machine geometry, error types
//! 2. **stringplot-motion** - Kinematics, actuator capabilities, simulated rig, motion controller
//! 3. **stringplot-planner** - Draw-order scheduling and page fitting
//! 4. **stringplot-settings** - Configuration files
//! 5. **stringplot-session** - Artwork files, operator prompts and plot sessions
//! 6. **stringplot** - Command line binary that ties it together
//!
//! The binary runs the simulated rig. Real motor boards plug in by
//! implementing the capability traits in `stringplot-motion`.

pub mod cli;

pub use stringplot_core::{Error, MachineGeometry, Path, PathCollection, Point, Result};
pub use stringplot_motion::{MotionController, Rig, SimulationConfig, Telemetry};
pub use stringplot_planner::{PathFitter, PathScheduler};
pub use stringplot_session::{
    simulation_config, Artwork, AutoConfirm, Channel, ConsolePrompt, Operator, PassReport,
    PlotOptions, PlotSession,
};
pub use stringplot_settings::Config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("STRINGPLOT_BUILD_DATE");

/// Initialize logging
///
/// Sets up structured logging with:
/// - Console output on stderr, pretty or JSON lines
/// - RUST_LOG environment variable support
/// - A default level raised by `verbosity` (info, debug, trace)
pub fn init_logging(json: bool, verbosity: u8) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let level = match verbosity {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    let env_filter = EnvFilter::from_default_env().add_directive(level.into());

    // stdout belongs to the operator prompt
    if json {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .json();

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_line_number(true)
            .pretty();

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    }

    Ok(())
}
