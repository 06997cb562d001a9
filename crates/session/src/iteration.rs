use machstep_core::Snapshot;
use machstep_thermo::{IterationInput, IterationOutput};
use uom::si::f64::{Ratio, TemperatureInterval, ThermodynamicTemperature};

/// One accepted iteration, as reported to the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Iteration {
    /// Iteration count after this step (1 for the first step after a reset).
    pub count: usize,

    /// The step's input (conditions and prior estimate) and output.
    pub snapshot: Snapshot<IterationInput, IterationOutput>,

    /// Whether the residual fell below the configured tolerance.
    ///
    /// Advisory only.
    pub converged: bool,
}

impl Iteration {
    #[must_use]
    pub fn mach(&self) -> Ratio {
        self.snapshot.output.mach
    }

    #[must_use]
    pub fn calculated_total_temperature(&self) -> ThermodynamicTemperature {
        self.snapshot.output.calculated_total_temperature
    }

    /// The updated static temperature estimate.
    #[must_use]
    pub fn static_temperature(&self) -> ThermodynamicTemperature {
        self.snapshot.output.next_static_temperature
    }

    #[must_use]
    pub fn residual(&self) -> TemperatureInterval {
        self.snapshot.output.residual
    }
}
