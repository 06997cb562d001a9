//! Text rendering of session results.

use std::fmt;

use machstep_session::{Error, Iteration, State, run::RunSummary};
use machstep_thermo::Inputs;
use uom::si::{
    ratio::ratio, temperature_interval::kelvin as delta_kelvin, thermodynamic_temperature::kelvin,
};

pub const BANNER: &str = "\
Mach Number - Step by Step Iteration
Initial static temperature from the ISA model, speed of sound a = 38.95 * sqrt(Ts) kt.";

pub const RESET_MESSAGE: &str = "State reset successfully.";

pub const CONVERGED_MESSAGE: &str = "Convergence achieved!";

/// Renders one iteration with fixed decimals per field.
pub struct IterationReport<'a>(pub &'a Iteration);

impl fmt::Display for IterationReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let it = self.0;
        writeln!(f, "Iteration: {}", it.count)?;
        writeln!(f, "  Mach number:          {:.4}", it.mach().get::<ratio>())?;
        writeln!(
            f,
            "  Calculated Tt (K):    {:.2}",
            it.calculated_total_temperature().get::<kelvin>()
        )?;
        writeln!(
            f,
            "  Static temp Ts (K):   {:.2}",
            it.static_temperature().get::<kelvin>()
        )?;
        write!(
            f,
            "  Temp difference (K):  {:.3}",
            it.residual().get::<delta_kelvin>()
        )?;
        if it.converged {
            write!(f, "\n{CONVERGED_MESSAGE}")?;
        }
        Ok(())
    }
}

/// Renders the current inputs and, once initialized, the session state.
pub struct StatusReport<'a> {
    pub inputs: &'a Inputs,
    pub state: Option<&'a State>,
}

impl fmt::Display for StatusReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inputs = self.inputs;
        writeln!(f, "TAS (kt):                  {:.1}", inputs.true_airspeed_knots)?;
        writeln!(f, "Altitude (ft):             {:.1}", inputs.altitude_feet)?;
        writeln!(
            f,
            "Measured total temp (°C):  {:.1}",
            inputs.measured_total_temp_celsius
        )?;
        write!(f, "Recovery factor (Kr):      {:.2}", inputs.recovery_factor)?;

        match self.state {
            Some(state) if state.last_inputs() == inputs => write!(
                f,
                "\nIterations: {}, static temp Ts (K): {:.2}",
                state.iteration_count(),
                state.static_temperature().get::<kelvin>()
            ),
            Some(_) => write!(f, "\nInputs changed; the next iteration restarts from ISA."),
            None => write!(f, "\nNot initialized."),
        }
    }
}

/// Renders the outcome of a run.
pub struct RunReport<'a>(pub &'a RunSummary);

impl fmt::Display for RunReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self.0;
        match summary.last {
            Some(last) if summary.converged() => write!(
                f,
                "Converged after {} iteration(s): M = {:.4}",
                last.count,
                last.mach().get::<ratio>()
            ),
            Some(last) => write!(
                f,
                "Not converged after {} iteration(s); residual {:.3} K",
                summary.iterations,
                last.residual().get::<delta_kelvin>()
            ),
            None => write!(f, "No iterations performed."),
        }
    }
}

/// Renders a session error as the message shown to the user.
pub struct ErrorReport<'a>(pub &'a Error);

impl fmt::Display for ErrorReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Error::Validation(err) => write!(
                f,
                "Invalid inputs: {err}. Correct them before iterating."
            ),
            Error::Domain(err) => write!(f, "{err}. Use `reset` to start over."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use machstep_session::{Session, run};
    use machstep_thermo::ValidationError;

    #[test]
    fn iteration_uses_fixed_decimals() {
        let mut session = Session::default();
        let first = session.iterate(&Inputs::default()).unwrap();

        let text = IterationReport(&first).to_string();

        assert!(text.starts_with("Iteration: 1\n"));
        assert!(text.contains("Mach number:          0.7985\n"));
        assert!(text.contains("Calculated Tt (K):    288.09\n"));
        assert!(text.contains("Static temp Ts (K):   263.39\n"));
        assert!(text.ends_with("Temp difference (K):  9.906"));
        assert!(!text.contains(CONVERGED_MESSAGE));
    }

    #[test]
    fn converged_iteration_adds_message() {
        let mut session = Session::default();
        let summary = run::run_until_converged(&mut session, &Inputs::default(), 20).unwrap();
        let last = summary.last.unwrap();

        let text = IterationReport(&last).to_string();

        assert!(text.starts_with("Iteration: 8\n"));
        assert!(text.ends_with(CONVERGED_MESSAGE));
        assert_eq!(
            RunReport(&summary).to_string(),
            "Converged after 8 iteration(s): M = 0.7838"
        );
    }

    #[test]
    fn status_reflects_session_state() {
        let inputs = Inputs::default();
        let mut session = Session::default();

        let text = StatusReport {
            inputs: &inputs,
            state: session.state(),
        }
        .to_string();
        assert!(text.ends_with("Not initialized."));

        session.iterate(&inputs).unwrap();
        let text = StatusReport {
            inputs: &inputs,
            state: session.state(),
        }
        .to_string();
        assert!(text.contains("TAS (kt):                  500.0"));
        assert!(text.ends_with("Iterations: 1, static temp Ts (K): 263.39"));

        let edited = Inputs {
            recovery_factor: 1.0,
            ..inputs
        };
        let text = StatusReport {
            inputs: &edited,
            state: session.state(),
        }
        .to_string();
        assert!(text.ends_with("restarts from ISA."));
    }

    #[test]
    fn validation_error_is_blocking_message() {
        let err = Error::Validation(ValidationError::NegativeAirspeed(-5.0));
        assert_eq!(
            ErrorReport(&err).to_string(),
            "Invalid inputs: true airspeed must be non-negative, got -5 kt. \
             Correct them before iterating."
        );
    }
}
