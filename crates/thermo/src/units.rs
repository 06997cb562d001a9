//! Unit conversions used at the input boundary.

use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

use crate::constants::CELSIUS_OFFSET;

/// Converts a probe reading in °C to an absolute temperature.
///
/// Uses the whole-degree [`CELSIUS_OFFSET`], so `25 °C` becomes `298 K`.
/// The result may be negative for readings below `-273 °C`; rejecting those is
/// the job of input validation.
#[inline]
#[must_use]
pub fn celsius_reading(celsius: f64) -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<abs_kelvin>(celsius + CELSIUS_OFFSET)
}

/// Computes the signed difference `to - from` between two temperatures.
///
/// A `TemperatureInterval` (a temperature change) is a distinct quantity from
/// a `ThermodynamicTemperature` (an absolute temperature), so the difference
/// is taken in kelvin and rewrapped.
///
/// - Positive if temperature increases from `from` to `to`.
/// - Negative if temperature decreases from `from` to `to`.
#[inline]
#[must_use]
pub fn temperature_difference(
    from: ThermodynamicTemperature,
    to: ThermodynamicTemperature,
) -> TemperatureInterval {
    TemperatureInterval::new::<delta_kelvin>(to.get::<abs_kelvin>() - from.get::<abs_kelvin>())
}
