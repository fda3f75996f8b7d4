use clap::Parser;
use std::path::PathBuf;

/// Plot line art on a two-string plotter
#[derive(Parser, Debug)]
#[command(
    name = "stringplot",
    version,
    about = "StringPlot - polargraph plotter driver"
)]
pub struct Args {
    /// Artwork file (JSON path list or four CMYK path lists)
    #[arg(value_name = "FILE", required_unless_present = "test_pattern")]
    pub file: Option<PathBuf>,

    /// Path to the config file (.toml or .json); defaults to the user config directory
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Draw the calibration pattern before the artwork
    #[arg(long)]
    pub test_pattern: bool,

    /// Use artwork coordinates as machine centimeters instead of fitting them to the page
    #[arg(long)]
    pub no_scale: bool,

    /// Do not wait for ENTER before each pass
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Write the simulated motor, lifter and position log to this JSON file
    #[arg(long, value_name = "PATH")]
    pub telemetry: Option<PathBuf>,

    /// Skip the settle delays of the simulated rig
    #[arg(long)]
    pub fast: bool,

    /// Log as JSON lines
    #[arg(long)]
    pub log_json: bool,

    /// Increase verbosity (-v, -vv)
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count
    )]
    pub verbosity_level: u8,
}
