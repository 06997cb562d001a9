//! `machstep`: iterate Mach number from measured total air temperature.

mod cli;
mod display;
mod logging;
mod repl;

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use machstep_session::{Config, Session};
use machstep_thermo::Inputs;
use tracing::info;
use uom::si::{f64::TemperatureInterval, temperature_interval::kelvin};

use cli::{Cli, Command};
use repl::{Repl, print_run};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    logging::init(cli.verbose)?;

    let tolerance = TemperatureInterval::new::<kelvin>(cli.tolerance);
    let config = Config::new(tolerance).context("invalid --tolerance")?;
    let mut session = Session::new(config);
    let inputs = Inputs::from(cli.inputs);

    match cli.command.unwrap_or(Command::Repl) {
        Command::Repl => {
            Repl::new(session, inputs, io::stdout().lock()).run(io::stdin().lock())?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Run { max_iters } => {
            let mut out = io::stdout().lock();
            let summary = print_run(&mut session, &inputs, max_iters, &mut out)?;
            info!(
                iterations = summary.iterations,
                converged = summary.converged(),
                "run finished"
            );

            if summary.converged() {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
    }
}
