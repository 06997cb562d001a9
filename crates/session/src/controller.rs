use machstep_core::{Model, Snapshot};
use machstep_thermo::{Conditions, Inputs, IterationInput, IterationModel};
use tracing::{debug, info, warn};
use uom::si::{
    ratio::ratio, temperature_interval::kelvin as delta_kelvin, thermodynamic_temperature::kelvin,
};

use crate::{Action, Config, Error, Iteration, Response, State};

/// Owns the iteration state of one interactive session.
///
/// Sessions share nothing, so a host serving several users keeps one
/// `Session` per user.
#[derive(Debug, Clone, Default)]
pub struct Session {
    config: Config,
    state: Option<State>,
}

impl Session {
    /// Creates an uninitialized session.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            state: None,
        }
    }

    /// Returns the session config.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the current state, or `None` before the first evaluation.
    #[must_use]
    pub fn state(&self) -> Option<&State> {
        self.state.as_ref()
    }

    /// Handles one host action against the current inputs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if `inputs` are invalid, in which case the
    /// session is left untouched, and [`Error::Domain`] if an iteration is
    /// attempted from a non-physical estimate.
    pub fn handle(&mut self, action: Action, inputs: &Inputs) -> Result<Response, Error> {
        match action {
            Action::Iterate => self.iterate(inputs).map(Response::Iterated),
            Action::Reset => self.reset(inputs).map(|_| Response::Reset),
            Action::InputsChanged => self
                .evaluate(inputs)
                .map(|reinitialized| Response::Evaluated { reinitialized }),
        }
    }

    /// Evaluates inputs, reinitializing the state if they differ from the
    /// remembered ones or if the session is uninitialized.
    ///
    /// Returns whether the state was reinitialized.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if `inputs` are invalid.
    pub fn evaluate(&mut self, inputs: &Inputs) -> Result<bool, Error> {
        let conditions = inputs.validate()?;
        Ok(self.prepare(inputs, conditions).1)
    }

    /// Reinitializes the state from the ISA model unconditionally.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if `inputs` are invalid.
    pub fn reset(&mut self, inputs: &Inputs) -> Result<&State, Error> {
        let conditions = inputs.validate()?;
        Ok(self.initialize(*inputs, conditions))
    }

    /// Applies one iteration step to the current estimate.
    ///
    /// Inputs are evaluated first, so an edit since the previous call restarts
    /// the sequence from the ISA estimate before stepping.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if `inputs` are invalid and
    /// [`Error::Domain`] if the current estimate is non-physical. The state is
    /// not advanced on error.
    pub fn iterate(&mut self, inputs: &Inputs) -> Result<Iteration, Error> {
        let conditions = inputs.validate()?;
        let tol = self.config.convergence_tol();
        let (state, _) = self.prepare(inputs, conditions);

        let input = IterationInput {
            conditions: state.conditions,
            static_temperature: state.static_temperature,
        };
        let output = IterationModel.call(&input).inspect_err(|error| {
            warn!(
                iteration = state.iteration_count,
                ts_k = state.static_temperature.get::<kelvin>(),
                %error,
                "iteration rejected"
            );
        })?;

        state.iteration_count += 1;
        state.static_temperature = output.next_static_temperature;

        let converged = output.residual < tol;
        debug!(
            iteration = state.iteration_count,
            mach = output.mach.get::<ratio>(),
            tt_calc_k = output.calculated_total_temperature.get::<kelvin>(),
            ts_k = output.next_static_temperature.get::<kelvin>(),
            residual_k = output.residual.get::<delta_kelvin>(),
            converged,
            "iteration accepted"
        );

        Ok(Iteration {
            count: state.iteration_count,
            snapshot: Snapshot::new(input, output),
            converged,
        })
    }

    /// Returns the state for `inputs`, reinitializing it when stale.
    fn prepare(&mut self, inputs: &Inputs, conditions: Conditions) -> (&mut State, bool) {
        match self.state.take() {
            Some(state) if state.last_inputs == *inputs => (self.state.insert(state), false),
            _ => (self.initialize(*inputs, conditions), true),
        }
    }

    fn initialize(&mut self, inputs: Inputs, conditions: Conditions) -> &mut State {
        let state = self.state.insert(State::initial(inputs, conditions));
        info!(
            tas_kt = inputs.true_airspeed_knots,
            altitude_ft = inputs.altitude_feet,
            tt_c = inputs.measured_total_temp_celsius,
            kr = inputs.recovery_factor,
            ts_k = state.static_temperature.get::<kelvin>(),
            "initialized static temperature from ISA"
        );
        state
    }
}
