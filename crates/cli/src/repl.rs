//! Interactive loop: one line, one action.

use std::io::{self, BufRead, Write};

use clap::{Parser, Subcommand, ValueEnum};
use machstep_session::{
    Action, Iteration, Response, Session,
    run::{self, Control, RunSummary},
};
use machstep_thermo::Inputs;
use tracing::debug;
use uom::si::thermodynamic_temperature::kelvin;

use crate::display::{
    BANNER, ErrorReport, IterationReport, RESET_MESSAGE, RunReport, StatusReport,
};

const PROMPT: &str = "> ";

#[derive(Parser, Debug)]
#[command(no_binary_name = true, help_template = "{subcommands}")]
struct Line {
    #[command(subcommand)]
    command: LineCommand,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq)]
enum LineCommand {
    /// Perform one iteration
    #[command(visible_alias = "i")]
    Iterate,
    /// Restart from the ISA estimate
    #[command(visible_alias = "r")]
    Reset,
    /// Change an input field
    Set {
        field: Field,
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },
    /// Show inputs and state
    Show,
    /// Iterate until converged
    Run {
        #[arg(long, default_value_t = 100)]
        max_iters: usize,
    },
    /// Leave the session
    #[command(visible_alias = "q", alias = "exit")]
    Quit,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Tas,
    Altitude,
    Temp,
    Kr,
}

impl Field {
    fn apply(self, inputs: &mut Inputs, value: f64) {
        let slot = match self {
            Field::Tas => &mut inputs.true_airspeed_knots,
            Field::Altitude => &mut inputs.altitude_feet,
            Field::Temp => &mut inputs.measured_total_temp_celsius,
            Field::Kr => &mut inputs.recovery_factor,
        };
        *slot = value;
    }
}

/// Terminal host for a single [`Session`].
pub struct Repl<W> {
    session: Session,
    inputs: Inputs,
    out: W,
}

impl<W: Write> Repl<W> {
    pub fn new(session: Session, inputs: Inputs, out: W) -> Self {
        Self {
            session,
            inputs,
            out,
        }
    }

    /// Reads commands until `quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading or writing fails; session errors are
    /// reported to the user and the loop continues.
    pub fn run<R: BufRead>(mut self, input: R) -> anyhow::Result<()> {
        writeln!(self.out, "{BANNER}")?;
        self.dispatch(Action::InputsChanged)?;
        self.show()?;

        let mut lines = input.lines();
        loop {
            write!(self.out, "{PROMPT}")?;
            self.out.flush()?;

            let Some(line) = lines.next().transpose()? else {
                writeln!(self.out)?;
                return Ok(());
            };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let command = match Line::try_parse_from(line.split_whitespace()) {
                Ok(parsed) => parsed.command,
                Err(err) => {
                    write!(self.out, "{err}")?;
                    continue;
                }
            };
            debug!(?command, "dispatching");

            match command {
                LineCommand::Iterate => self.dispatch(Action::Iterate)?,
                LineCommand::Reset => self.dispatch(Action::Reset)?,
                LineCommand::Set { field, value } => {
                    field.apply(&mut self.inputs, value);
                    self.dispatch(Action::InputsChanged)?;
                }
                LineCommand::Show => self.show()?,
                LineCommand::Run { max_iters } => {
                    let result =
                        print_run(&mut self.session, &self.inputs, max_iters, &mut self.out);
                    if let Err(err) = result {
                        self.report(err)?;
                    }
                }
                LineCommand::Quit => return Ok(()),
            }
        }
    }

    fn dispatch(&mut self, action: Action) -> io::Result<()> {
        match self.session.handle(action, &self.inputs) {
            Ok(Response::Iterated(iteration)) => {
                writeln!(self.out, "{}", IterationReport(&iteration))
            }
            Ok(Response::Reset) => writeln!(self.out, "{RESET_MESSAGE}"),
            Ok(Response::Evaluated { reinitialized }) => {
                if reinitialized && let Some(state) = self.session.state() {
                    writeln!(
                        self.out,
                        "Initial static temp Ts (K): {:.2}",
                        state.static_temperature().get::<kelvin>()
                    )?;
                }
                Ok(())
            }
            Err(err) => writeln!(self.out, "{}", ErrorReport(&err)),
        }
    }

    fn show(&mut self) -> io::Result<()> {
        let report = StatusReport {
            inputs: &self.inputs,
            state: self.session.state(),
        };
        writeln!(self.out, "{report}")
    }

    fn report(&mut self, err: anyhow::Error) -> anyhow::Result<()> {
        match err.downcast::<machstep_session::Error>() {
            Ok(session_err) => Ok(writeln!(self.out, "{}", ErrorReport(&session_err))?),
            Err(other) => Err(other),
        }
    }
}

/// Iterates until converged or `max_iters`, printing every step and a summary.
///
/// # Errors
///
/// Returns a [`machstep_session::Error`] if the session rejects an iteration,
/// or an I/O error if writing fails.
pub fn print_run<W: Write>(
    session: &mut Session,
    inputs: &Inputs,
    max_iters: usize,
    out: &mut W,
) -> anyhow::Result<RunSummary> {
    let mut write_error = None;

    let result = run::run(session, inputs, max_iters, |it: &Iteration| {
        if let Err(err) = writeln!(out, "{}", IterationReport(it)) {
            write_error = Some(err);
            return Some(Control::StopEarly);
        }
        it.converged.then_some(Control::StopEarly)
    });

    if let Some(err) = write_error {
        return Err(err.into());
    }
    let summary = result?;
    writeln!(out, "{}", RunReport(&summary))?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transcript(script: &str) -> String {
        let mut out = Vec::new();
        Repl::new(Session::default(), Inputs::default(), &mut out)
            .run(script.as_bytes())
            .expect("repl runs");
        String::from_utf8(out).expect("utf-8 output")
    }

    #[test]
    fn starts_with_banner_and_initial_estimate() {
        let text = transcript("quit\n");

        assert!(text.starts_with(BANNER));
        assert!(text.contains("Initial static temp Ts (K): 258.43"));
        assert!(text.contains("Iterations: 0, static temp Ts (K): 258.43"));
    }

    #[test]
    fn iterate_and_reset() {
        let text = transcript("iterate\ni\nreset\nshow\nq\n");

        assert!(text.contains("Iteration: 1\n"));
        assert!(text.contains("Iteration: 2\n"));
        assert!(text.contains(RESET_MESSAGE));
        assert!(text.contains("Iterations: 0, static temp Ts (K): 258.43"));
    }

    #[test]
    fn editing_a_field_restarts_the_count() {
        let text = transcript("i\ni\nset altitude 0\ni\n");

        assert!(text.contains("Initial static temp Ts (K): 288.15"));
        assert_eq!(text.matches("Iteration: 1\n").count(), 2);
    }

    #[test]
    fn invalid_field_blocks_iteration_until_corrected() {
        let text = transcript("set kr 1.5\ni\nset kr 0.9\ni\n");

        assert!(text.contains("Invalid inputs: recovery factor must lie in [0, 1], got 1.5"));
        assert_eq!(text.matches("Invalid inputs").count(), 2);
        assert!(text.contains("Iteration: 1\n"));
    }

    #[test]
    fn domain_error_keeps_the_session_alive() {
        let text = transcript("set temp -273\ni\ni\ni\ni\ni\nreset\ni\n");

        assert!(text.contains("cannot iterate from a non-physical state"));
        assert!(text.contains("Use `reset` to start over."));
        assert!(text.ends_with(&format!("{PROMPT}\n")));
        assert_eq!(text.matches("Iteration: 1\n").count(), 2);
    }

    #[test]
    fn run_command_prints_until_converged() {
        let text = transcript("run\n");

        assert!(text.contains("Iteration: 8\n"));
        assert!(!text.contains("Iteration: 9\n"));
        assert!(text.contains("Converged after 8 iteration(s)"));
    }

    #[test]
    fn unknown_command_is_reported() {
        let text = transcript("fly\niterate\n");

        assert!(text.contains("error:"));
        assert!(text.contains("Iteration: 1\n"));
    }

    #[test]
    fn verify_line_command() {
        use clap::CommandFactory;
        Line::command().debug_assert();
    }

    #[test]
    fn print_run_reports_max_iters() {
        let mut session = Session::default();
        let mut out = Vec::new();

        let summary = print_run(&mut session, &Inputs::default(), 3, &mut out).unwrap();

        assert!(!summary.converged());
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("Not converged after 3 iteration(s); residual 2.477 K\n"));
    }
}
