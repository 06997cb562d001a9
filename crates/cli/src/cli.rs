use clap::{Args, Parser, Subcommand};
use machstep_thermo::Inputs;

#[derive(Parser, Debug)]
#[command(
    name = "machstep",
    version,
    about = "Step-by-step Mach number from measured total air temperature"
)]
pub struct Cli {
    #[command(flatten)]
    pub inputs: InputArgs,

    /// Residual below which an iteration is reported as converged (K)
    #[arg(long, default_value_t = 0.1, global = true)]
    pub tolerance: f64,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Starting values for the four input fields.
#[derive(Args, Debug, Clone, Copy)]
pub struct InputArgs {
    /// True airspeed (kt)
    #[arg(long, default_value_t = 500.0, allow_negative_numbers = true)]
    pub tas: f64,

    /// Altitude (ft)
    #[arg(long, default_value_t = 15_000.0, allow_negative_numbers = true)]
    pub altitude: f64,

    /// Measured total temperature (°C)
    #[arg(long, default_value_t = 25.0, allow_negative_numbers = true)]
    pub temp: f64,

    /// Probe recovery factor Kr, between 0 and 1
    #[arg(long, default_value_t = 0.9, allow_negative_numbers = true)]
    pub kr: f64,
}

impl From<InputArgs> for Inputs {
    fn from(args: InputArgs) -> Self {
        Self {
            true_airspeed_knots: args.tas,
            altitude_feet: args.altitude,
            measured_total_temp_celsius: args.temp,
            recovery_factor: args.kr,
        }
    }
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Iterate interactively, one step per command (default)
    Repl,
    /// Iterate until converged and print every step
    Run {
        /// Give up after this many iterations
        #[arg(long, default_value_t = 100)]
        max_iters: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_form_defaults() {
        let cli = Cli::try_parse_from(["machstep"]).unwrap();

        assert_eq!(Inputs::from(cli.inputs), Inputs::default());
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn parses_negative_temperature_and_run() {
        let cli = Cli::try_parse_from([
            "machstep", "--temp", "-40", "--kr", "1", "run", "--max-iters", "20", "-vv",
        ])
        .unwrap();

        let inputs = Inputs::from(cli.inputs);
        assert_eq!(inputs.measured_total_temp_celsius, -40.0);
        assert_eq!(inputs.recovery_factor, 1.0);
        assert_eq!(cli.command, Some(Command::Run { max_iters: 20 }));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn verify_command() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
