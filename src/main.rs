use anyhow::Context;
use clap::Parser;
use std::time::Duration;
use stringplot::cli::Args;
use stringplot::{
    init_logging, simulation_config, AutoConfirm, Config, ConsolePrompt, Operator, PlotOptions,
    PlotSession, Rig, BUILD_DATE, VERSION,
};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.log_json, args.verbosity_level)?;
    tracing::info!("StringPlot {} (built {})", VERSION, BUILD_DATE);

    let config = Config::load_or_default(args.config.as_deref())
        .context("Failed to load configuration")?;

    let mut sim = simulation_config(&config);
    if args.fast {
        sim.step_delay = Duration::ZERO;
        sim.lift_delay = Duration::ZERO;
    }
    let (rig, telemetry) = Rig::simulated(&sim);

    let operator: Box<dyn Operator> = if args.yes {
        Box::new(AutoConfirm)
    } else {
        Box::new(ConsolePrompt)
    };
    let mut session = PlotSession::new(&config, rig, operator);
    tracing::info!("Session {}", session.id());

    let outcome = run(&args, &mut session);

    // keep the log of a failed run too
    if let Some(path) = &args.telemetry {
        telemetry
            .save_json(path)
            .with_context(|| format!("Failed to write telemetry to {}", path.display()))?;
        tracing::info!(
            "Wrote {} step samples to {}",
            telemetry.step_count(),
            path.display()
        );
    }

    outcome
}

fn run(args: &Args, session: &mut PlotSession) -> anyhow::Result<()> {
    session.start()?;

    if args.test_pattern {
        let report = session.plot_test().context("Test pattern failed")?;
        println!("test pattern: {}", report);
    }

    if let Some(file) = &args.file {
        let options = PlotOptions {
            scaled: !args.no_scale,
        };
        let reports = session
            .plot_file(file, options)
            .with_context(|| format!("Failed to plot {}", file.display()))?;
        for report in reports {
            println!("{}", report);
        }
    }

    Ok(())
}
