use machstep_thermo::{Conditions, Inputs, initial_static_temperature};
use uom::si::f64::ThermodynamicTemperature;

/// Mutable state of an initialized session.
///
/// Hosts can read it through [`Session::state`](crate::Session::state) but
/// only the session changes it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    pub(crate) static_temperature: ThermodynamicTemperature,
    pub(crate) iteration_count: usize,
    pub(crate) last_inputs: Inputs,
    pub(crate) conditions: Conditions,
}

impl State {
    /// Creates the ISA-initialized state for the given inputs.
    pub(crate) fn initial(inputs: Inputs, conditions: Conditions) -> Self {
        Self {
            static_temperature: initial_static_temperature(conditions.altitude),
            iteration_count: 0,
            last_inputs: inputs,
            conditions,
        }
    }

    /// Returns the current static temperature estimate.
    #[must_use]
    pub fn static_temperature(&self) -> ThermodynamicTemperature {
        self.static_temperature
    }

    /// Returns the number of iterations accepted since the last reset.
    #[must_use]
    pub fn iteration_count(&self) -> usize {
        self.iteration_count
    }

    /// Returns the inputs the current estimate was initialized from.
    #[must_use]
    pub fn last_inputs(&self) -> &Inputs {
        &self.last_inputs
    }

    /// Returns the validated form of [`State::last_inputs`].
    #[must_use]
    pub fn conditions(&self) -> &Conditions {
        &self.conditions
    }
}
