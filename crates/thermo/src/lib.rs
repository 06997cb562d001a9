//! Temperature and Mach number calculations for machstep.
//!
//! The crate provides the two leaf computations of a Mach-from-total-temperature
//! iteration:
//!
//! - [`initial_static_temperature`] — the ISA lapse-rate guess for a given altitude
//! - [`single_iteration`] — one relaxed fixed-point update of static temperature
//!
//! Raw user entries arrive as [`Inputs`] and are validated into unit-typed
//! [`Conditions`] before any computation takes place.

pub mod constants;
mod error;
mod inputs;
mod isa;
mod iteration;
pub mod units;

pub use error::{DomainError, ValidationError};
pub use inputs::{Conditions, Inputs, RecoveryFactor};
pub use isa::initial_static_temperature;
pub use iteration::{IterationInput, IterationModel, IterationOutput, single_iteration};
