//! Core traits and types for machstep.
//!
//! This crate defines the shared abstractions the thermo and session crates
//! build on:
//!
//! - [`Model`] — a callable that maps a typed input to a typed output
//! - [`Snapshot`] — a captured input/output pair from a model call
//! - [`Observer`] — receives iteration events and optionally returns control actions

mod model;
mod observer;

pub use observer::Observer;
pub use {model::Model, model::Snapshot};
