//! Operator interaction
//!
//! The machine has no limit switches. Homing means a person moves the pen
//! to the home point by hand (and swaps pens between color passes), then
//! tells the plotter to continue.

use std::io::{self, BufRead, Write};
use stringplot_core::{Error, Result};

/// Someone who can put the pen at home on request
pub trait Operator {
    /// Block until the pen sits at the home point. `prompt` says what to
    /// do first, e.g. which pen to load.
    fn confirm_home(&mut self, prompt: &str) -> Result<()>;
}

/// Asks on stdout and waits for ENTER on stdin
#[derive(Debug, Default)]
pub struct ConsolePrompt;

impl Operator for ConsolePrompt {
    fn confirm_home(&mut self, prompt: &str) -> Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{}", prompt)?;
        write!(out, "Move pen to start and press ENTER. ")?;
        out.flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(Error::other("operator input closed before homing"));
        }
        Ok(())
    }
}

/// Confirms immediately, for unattended and simulated runs
#[derive(Debug, Default)]
pub struct AutoConfirm;

impl Operator for AutoConfirm {
    fn confirm_home(&mut self, prompt: &str) -> Result<()> {
        tracing::info!("{} (confirmed automatically)", prompt);
        Ok(())
    }
}
