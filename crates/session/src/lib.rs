//! Session controller for step-by-step Mach iteration.
//!
//! A [`Session`] owns the state of one user's iteration sequence: the current
//! static temperature estimate, the iteration count, and the inputs the
//! estimate was derived from. Hosts dispatch discrete [`Action`]s together
//! with the current [`Inputs`] and display the returned [`Response`].
//!
//! # State machine
//!
//! A new session is uninitialized. The first evaluation of inputs, and every
//! evaluation with inputs that differ from the remembered ones, initializes the
//! estimate from the ISA model and sets the count to zero. [`Action::Reset`]
//! does the same unconditionally. [`Action::Iterate`] applies one relaxed
//! update and reports an [`Iteration`], flagging it as converged when the
//! residual is below [`Config::convergence_tol`]. That flag is advisory; the
//! session keeps iterating for as long as it is asked to.
//!
//! # Errors
//!
//! Invalid inputs are rejected before any state is touched. A non-physical
//! estimate makes [`Action::Iterate`] fail without changing state, and
//! [`Action::Reset`] always recovers.
//!
//! [`Inputs`]: machstep_thermo::Inputs

mod action;
mod config;
mod controller;
mod error;
mod iteration;
pub mod run;
mod state;

pub use action::{Action, Response};
pub use config::{Config, ConfigError};
pub use controller::Session;
pub use error::Error;
pub use iteration::Iteration;
pub use state::State;
