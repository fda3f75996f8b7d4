//! Plot sessions
//!
//! A [`PlotSession`] ties one machine to one operator for the lifetime of a
//! run. It knows how to get the pen home, fit and order a drawing, and
//! sequence the passes of a color separation.

use crate::artwork::{Artwork, Channel};
use crate::operator::Operator;
use std::fmt;
use std::path::Path as FsPath;
use std::time::{Duration, Instant};
use stringplot_core::{MachineGeometry, Path, Result};
use stringplot_motion::{MotionController, MotionState, Rig, SimulationConfig};
use stringplot_planner::{PathFitter, PathScheduler};
use stringplot_settings::Config;
use uuid::Uuid;

/// Unique id of a plot session, attached to its log output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// How artwork is placed on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotOptions {
    /// Fit the drawing to the drawable rectangle. When false the artwork
    /// coordinates are used as machine centimeters.
    pub scaled: bool,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self { scaled: true }
    }
}

/// What one pass did
#[derive(Debug, Clone, PartialEq)]
pub struct PassReport {
    /// Ink of the pass, `None` for monochrome work and test patterns
    pub channel: Option<Channel>,
    /// Paths in the scheduled order
    pub paths_planned: usize,
    /// Paths that had enough vertices to draw
    pub paths_drawn: usize,
    pub steps_left: u64,
    pub steps_right: u64,
    /// Dead-reckoned state when the pass began drawing
    pub start_state: MotionState,
    /// Dead-reckoned state when the pass finished
    pub end_state: MotionState,
    pub elapsed: Duration,
}

impl fmt::Display for PassReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.channel {
            Some(c) => write!(f, "{} pass: ", c)?,
            None => write!(f, "pass: ")?,
        }
        write!(
            f,
            "{}/{} paths, {} + {} steps in {:.2?}",
            self.paths_drawn, self.paths_planned, self.steps_left, self.steps_right, self.elapsed
        )
    }
}

/// Timing and servo parameters for a simulated rig matching `config`
pub fn simulation_config(config: &Config) -> SimulationConfig {
    SimulationConfig {
        step_delay: config.timing.step_delay(),
        lift_delay: config.timing.lift_delay(),
        steps_per_rev: config.geometry.steps_per_rev,
        pen_up_angle: config.lifter.pen_up_angle,
        pen_down_angle: config.lifter.pen_down_angle,
    }
}

/// One machine, one operator, any number of drawings
pub struct PlotSession {
    id: SessionId,
    span: tracing::Span,
    controller: MotionController,
    scheduler: PathScheduler,
    fitter: PathFitter,
    operator: Box<dyn Operator>,
}

impl PlotSession {
    /// Session for a validated configuration
    pub fn new(config: &Config, rig: Rig, operator: Box<dyn Operator>) -> Self {
        let geometry = config.geometry.to_machine_geometry();
        let mut session = Self::with_geometry(geometry, rig, operator);
        session.scheduler = PathScheduler::new(config.planner.scheduler_window);
        session.fitter = session.fitter.with_margin(config.planner.fit_margin);
        session
    }

    /// Session with the default planner settings
    pub fn with_geometry(geometry: MachineGeometry, rig: Rig, operator: Box<dyn Operator>) -> Self {
        let id = SessionId::new();
        let span = tracing::info_span!("session", id = %id.as_uuid());
        let controller = MotionController::new(geometry, rig);
        let rect = controller.drawable_rect();
        let (res_x, res_y) = geometry.resolution();

        span.in_scope(|| {
            tracing::info!("Print area: {}", rect);
            tracing::info!("Step length: {:.5} cm", geometry.step_length());
            tracing::info!("Resolution: {} x {} steps", res_x, res_y);
        });

        Self {
            id,
            span,
            controller,
            scheduler: PathScheduler::default(),
            fitter: PathFitter::new(rect),
            operator,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn controller(&self) -> &MotionController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut MotionController {
        &mut self.controller
    }

    /// Check the motors, then have the operator home the pen
    pub fn start(&mut self) -> Result<()> {
        let span = self.span.clone();
        let _enter = span.enter();

        self.controller.motor_check();
        self.home("Initializing pen.")
    }

    /// Raise the pen, wait for the operator to put it at home and reset
    /// the dead-reckoned state there
    pub fn home(&mut self, prompt: &str) -> Result<()> {
        self.controller.pen_up();
        self.operator.confirm_home(prompt)?;
        self.controller.reset_to_home();
        Ok(())
    }

    /// Draw the calibration pattern from the current position
    pub fn plot_test(&mut self) -> Result<PassReport> {
        let span = self.span.clone();
        let _enter = span.enter();

        let started = Instant::now();
        let start_state = self.controller.motion_state();
        let (left0, right0) = self.controller.steps_issued();
        self.controller.plot_test()?;
        let (left1, right1) = self.controller.steps_issued();

        Ok(PassReport {
            channel: None,
            paths_planned: 0,
            paths_drawn: 0,
            steps_left: left1 - left0,
            steps_right: right1 - right0,
            start_state,
            end_state: self.controller.motion_state(),
            elapsed: started.elapsed(),
        })
    }

    /// Plot every pass of `artwork`.
    ///
    /// Each pass starts with the operator homing the pen, so a color
    /// separation gets a chance to swap pens. An error stops the run where
    /// it is; the pen is left as it was.
    pub fn plot(&mut self, artwork: &Artwork, options: PlotOptions) -> Result<Vec<PassReport>> {
        let span = self.span.clone();
        let _enter = span.enter();

        match artwork {
            Artwork::Monochrome(paths) => {
                self.home("Load pen.")?;
                let paths = if options.scaled {
                    self.fitter.fit(paths)?
                } else {
                    paths.clone()
                };
                Ok(vec![self.draw_pass(None, &paths)?])
            }
            Artwork::Separated(channels) => {
                tracing::info!("Plotting CMYK");
                let channels = if options.scaled {
                    self.fitter.fit_channels(channels)?
                } else {
                    channels.to_vec()
                };

                let mut reports = Vec::with_capacity(channels.len());
                for (channel, paths) in Channel::ALL.into_iter().zip(&channels) {
                    self.home(&format!("Load {} pen.", channel))?;
                    reports.push(self.draw_pass(Some(channel), paths)?);
                }
                Ok(reports)
            }
        }
    }

    /// Load an artwork file and plot it
    pub fn plot_file(&mut self, path: &FsPath, options: PlotOptions) -> Result<Vec<PassReport>> {
        let artwork = Artwork::load(path)?;
        self.plot(&artwork, options)
    }

    fn draw_pass(&mut self, channel: Option<Channel>, paths: &[Path]) -> Result<PassReport> {
        let started = Instant::now();
        let start_state = self.controller.motion_state();
        let (left0, right0) = self.controller.steps_issued();

        let order = self.scheduler.schedule(paths);
        tracing::info!("Drawing {} paths", order.len());

        let mut drawn = 0;
        for (n, &k) in order.iter().enumerate() {
            tracing::debug!("Path {}/{}", n + 1, order.len());
            let vertices = &paths[k];
            if vertices.len() >= 2 {
                self.controller.draw_vertices(vertices, false)?;
                drawn += 1;
            }
        }

        let (left1, right1) = self.controller.steps_issued();
        let report = PassReport {
            channel,
            paths_planned: order.len(),
            paths_drawn: drawn,
            steps_left: left1 - left0,
            steps_right: right1 - right0,
            start_state,
            end_state: self.controller.motion_state(),
            elapsed: started.elapsed(),
        };
        tracing::info!("Finished {}", report);
        Ok(report)
    }
}

impl fmt::Debug for PlotSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlotSession")
            .field("id", &self.id)
            .field("controller", &self.controller)
            .field("scheduler", &self.scheduler)
            .field("fitter", &self.fitter)
            .finish_non_exhaustive()
    }
}
