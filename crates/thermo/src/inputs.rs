use uom::si::{
    f64::{Length, ThermodynamicTemperature, Velocity},
    length::foot,
    velocity::knot,
};

use crate::{ValidationError, units::celsius_reading};

/// Raw user entries, in the units the user types them in.
///
/// `Inputs` is the tuple the session controller remembers to detect changes,
/// so it compares field-by-field with `PartialEq`. Call [`Inputs::validate`]
/// to obtain unit-typed [`Conditions`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Inputs {
    pub true_airspeed_knots: f64,
    pub altitude_feet: f64,
    pub measured_total_temp_celsius: f64,
    pub recovery_factor: f64,
}

impl Default for Inputs {
    fn default() -> Self {
        Self {
            true_airspeed_knots: 500.0,
            altitude_feet: 15_000.0,
            measured_total_temp_celsius: 25.0,
            recovery_factor: 0.9,
        }
    }
}

impl Inputs {
    /// Checks every entry and converts them into [`Conditions`].
    ///
    /// Checks run in field order, and the first failure is returned.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if any entry is NaN, the airspeed or
    /// altitude is negative, the measured temperature is below absolute zero,
    /// or the recovery factor lies outside `[0, 1]`.
    pub fn validate(&self) -> Result<Conditions, ValidationError> {
        let tas = not_nan("true_airspeed_knots", self.true_airspeed_knots)?;
        if tas < 0.0 {
            return Err(ValidationError::NegativeAirspeed(tas));
        }

        let altitude = not_nan("altitude_feet", self.altitude_feet)?;
        if altitude < 0.0 {
            return Err(ValidationError::NegativeAltitude(altitude));
        }

        let celsius = not_nan(
            "measured_total_temp_celsius",
            self.measured_total_temp_celsius,
        )?;
        let measured_total_temperature = celsius_reading(celsius);
        if measured_total_temperature.value < 0.0 {
            return Err(ValidationError::NegativeTotalTemperature(celsius));
        }

        let recovery_factor = RecoveryFactor::new(self.recovery_factor)?;

        Ok(Conditions {
            true_airspeed: Velocity::new::<knot>(tas),
            altitude: Length::new::<foot>(altitude),
            measured_total_temperature,
            recovery_factor,
        })
    }
}

fn not_nan(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if value.is_nan() {
        Err(ValidationError::NotANumber(field))
    } else {
        Ok(value)
    }
}

/// Validated flight conditions for one iteration sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conditions {
    pub true_airspeed: Velocity,
    pub altitude: Length,
    pub measured_total_temperature: ThermodynamicTemperature,
    pub recovery_factor: RecoveryFactor,
}

/// Probe recovery factor `Kr`, constrained to `[0, 1]`.
///
/// `Kr = 1` means the probe recovers all of the kinetic heating, which is the
/// default.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct RecoveryFactor(f64);

impl RecoveryFactor {
    /// Creates a recovery factor if `0 ≤ value ≤ 1`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NotANumber`] for NaN and
    /// [`ValidationError::RecoveryFactorOutOfRange`] outside `[0, 1]`.
    pub fn new(value: f64) -> Result<Self, ValidationError> {
        let value = not_nan("recovery_factor", value)?;
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ValidationError::RecoveryFactorOutOfRange(value))
        }
    }

    /// Returns the factor as a plain ratio.
    #[inline]
    #[must_use]
    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for RecoveryFactor {
    fn default() -> Self {
        Self(1.0)
    }
}
