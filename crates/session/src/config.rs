use thiserror::Error;
use uom::si::{f64::TemperatureInterval, temperature_interval::kelvin};

/// Configuration for a [`Session`](crate::Session).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    convergence_tol: TemperatureInterval,
}

/// Errors that can occur when validating a session config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("convergence_tol must be finite and non-negative")]
    ConvergenceTol,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            convergence_tol: TemperatureInterval::new::<kelvin>(0.1),
        }
    }
}

impl Config {
    /// Creates a new config with a validated convergence tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is negative or non-finite.
    pub fn new(convergence_tol: TemperatureInterval) -> Result<Self, ConfigError> {
        let tol = convergence_tol.get::<kelvin>();
        if !tol.is_finite() || tol < 0.0 {
            return Err(ConfigError::ConvergenceTol);
        }

        Ok(Self { convergence_tol })
    }

    /// Returns the residual below which an iteration is reported as converged.
    #[must_use]
    pub fn convergence_tol(&self) -> TemperatureInterval {
        self.convergence_tol
    }
}
