//! Physical and numerical constants.

/// ISA sea-level standard temperature, K.
pub const SEA_LEVEL_TEMPERATURE: f64 = 288.15;

/// ISA tropospheric lapse rate, K/m.
pub const LAPSE_RATE: f64 = 0.0065;

/// Altitude of the tropopause, m.
pub const TROPOPAUSE_ALTITUDE: f64 = 11_000.0;

/// Isothermal temperature assumed above the tropopause, K.
pub const STRATOSPHERE_TEMPERATURE: f64 = 216.65;

/// ATPL speed of sound coefficient: `a = 38.95 * sqrt(Ts)` in knots with `Ts` in kelvin.
pub const SPEED_OF_SOUND_COEFFICIENT: f64 = 38.95;

/// `(γ - 1) / 2` for air with `γ = 1.4`.
pub const COMPRESSIBILITY_FACTOR: f64 = 0.2;

/// Offset used to convert a probe reading from °C to K.
///
/// Whole degrees, not the 273.15 of the kelvin scale definition.
pub const CELSIUS_OFFSET: f64 = 273.0;

/// Fraction of the total temperature error applied per update.
pub const RELAXATION_FACTOR: f64 = 0.5;
