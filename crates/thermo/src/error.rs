use thiserror::Error;

/// Errors raised when user inputs are rejected before any computation.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ValidationError {
    #[error("true airspeed must be non-negative, got {0} kt")]
    NegativeAirspeed(f64),

    #[error("altitude must be non-negative, got {0} ft")]
    NegativeAltitude(f64),

    /// The measured total temperature converts to a negative absolute temperature.
    #[error("measured total temperature must be at or above absolute zero, got {0} °C")]
    NegativeTotalTemperature(f64),

    #[error("recovery factor must lie in [0, 1], got {0}")]
    RecoveryFactorOutOfRange(f64),

    #[error("`{0}` is not a number")]
    NotANumber(&'static str),
}

/// Errors raised by the iteration step when the static temperature estimate
/// cannot define a speed of sound.
///
/// A domain error never corrupts caller state: the step is pure, so the caller
/// can keep the previous estimate or reinitialize from the ISA model.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DomainError {
    #[error("cannot iterate from a non-physical state: static temperature is {0} K")]
    NonPositiveStaticTemperature(f64),

    #[error("cannot iterate from a non-physical state: static temperature is not finite")]
    NonFiniteStaticTemperature(f64),
}
