use uom::si::{
    f64::{Length, ThermodynamicTemperature},
    length::meter,
    thermodynamic_temperature::kelvin,
};

use crate::constants::{
    LAPSE_RATE, SEA_LEVEL_TEMPERATURE, STRATOSPHERE_TEMPERATURE, TROPOPAUSE_ALTITUDE,
};

/// Returns the ISA static temperature used as the initial estimate.
///
/// Up to and including the tropopause (11 km) the temperature falls linearly
/// from 288.15 K at 0.0065 K/m. Above it the temperature is held at 216.65 K.
///
/// The result depends on altitude alone. Negative altitudes are not rejected
/// here and simply extrapolate the lapse rate.
#[must_use]
pub fn initial_static_temperature(altitude: Length) -> ThermodynamicTemperature {
    let h = altitude.get::<meter>();
    let t = if h <= TROPOPAUSE_ALTITUDE {
        SEA_LEVEL_TEMPERATURE - LAPSE_RATE * h
    } else {
        STRATOSPHERE_TEMPERATURE
    };
    ThermodynamicTemperature::new::<kelvin>(t)
}
