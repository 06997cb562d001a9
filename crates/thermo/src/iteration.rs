//! Relaxed fixed-point update of static temperature.
//!
//! Given a static temperature estimate `Ts`, one update runs:
//!
//! 1. `a = 38.95 * sqrt(Ts)` — ATPL speed of sound, in knots
//! 2. `M = V / a`
//! 3. `Tt_calc = Ts * (1 + 0.2 * Kr * M²)`
//! 4. `diff = |Tt_measured - Tt_calc|`
//! 5. `Ts_new = Ts + (Tt_measured - Tt_calc) * 0.5`
//!
//! The update is damped by [`RELAXATION_FACTOR`] rather than taking a full
//! correction. Nothing bounds the number of updates needed, and physically
//! inconsistent inputs can diverge.

use machstep_core::Model;
use uom::si::{
    f64::{Ratio, TemperatureInterval, ThermodynamicTemperature, Velocity},
    ratio::ratio,
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin,
    velocity::knot,
};

use crate::{
    Conditions, DomainError, RecoveryFactor,
    constants::{COMPRESSIBILITY_FACTOR, RELAXATION_FACTOR, SPEED_OF_SOUND_COEFFICIENT},
    units::temperature_difference,
};

/// The result of one iteration step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationOutput {
    /// Mach number at the current static temperature estimate.
    pub mach: Ratio,

    /// Speed of sound at the current static temperature estimate.
    pub speed_of_sound: Velocity,

    /// Total temperature implied by the estimate and Mach number.
    pub calculated_total_temperature: ThermodynamicTemperature,

    /// Relaxed static temperature estimate for the next step.
    pub next_static_temperature: ThermodynamicTemperature,

    /// Absolute gap between measured and calculated total temperature.
    pub residual: TemperatureInterval,
}

/// Performs one relaxed update of the static temperature estimate.
///
/// See the [module docs](self) for the exact sequence of operations.
///
/// # Errors
///
/// Returns a [`DomainError`] if `static_temperature` is not finite or is not
/// strictly positive, since the speed of sound is then undefined or zero.
pub fn single_iteration(
    true_airspeed: Velocity,
    measured_total_temperature: ThermodynamicTemperature,
    static_temperature: ThermodynamicTemperature,
    recovery_factor: RecoveryFactor,
) -> Result<IterationOutput, DomainError> {
    let ts = static_temperature.get::<kelvin>();
    if !ts.is_finite() {
        return Err(DomainError::NonFiniteStaticTemperature(ts));
    }
    if ts <= 0.0 {
        return Err(DomainError::NonPositiveStaticTemperature(ts));
    }

    let a = SPEED_OF_SOUND_COEFFICIENT * ts.sqrt();
    let mach = true_airspeed.get::<knot>() / a;

    let tt_calc = ts * (1.0 + COMPRESSIBILITY_FACTOR * recovery_factor.get() * mach * mach);
    let calculated_total_temperature = ThermodynamicTemperature::new::<kelvin>(tt_calc);

    let error = temperature_difference(calculated_total_temperature, measured_total_temperature)
        .get::<delta_kelvin>();
    let ts_new = ts + error * RELAXATION_FACTOR;

    Ok(IterationOutput {
        mach: Ratio::new::<ratio>(mach),
        speed_of_sound: Velocity::new::<knot>(a),
        calculated_total_temperature,
        next_static_temperature: ThermodynamicTemperature::new::<kelvin>(ts_new),
        residual: TemperatureInterval::new::<delta_kelvin>(error.abs()),
    })
}

/// Input to [`IterationModel`]: the flight conditions plus the current estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationInput {
    pub conditions: Conditions,
    pub static_temperature: ThermodynamicTemperature,
}

/// The iteration step as a [`Model`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IterationModel;

impl Model for IterationModel {
    type Input = IterationInput;
    type Output = IterationOutput;
    type Error = DomainError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let conditions = &input.conditions;
        single_iteration(
            conditions.true_airspeed,
            conditions.measured_total_temperature,
            input.static_temperature,
            conditions.recovery_factor,
        )
    }
}
