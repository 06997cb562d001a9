//! Repeated iteration driven by an observer.
//!
//! [`run`] presses "iterate" up to `max_iters` times. After each accepted
//! iteration the observer sees the [`Iteration`] and may return
//! [`Control::StopEarly`]. [`run_until_converged`] stops at the first
//! iteration flagged as converged.
//!
//! The loop adds no convergence logic of its own: every step is an ordinary
//! [`Session::iterate`] call, so the session is left exactly where a user
//! pressing the button the same number of times would leave it.

use machstep_core::Observer;
use machstep_thermo::Inputs;

use crate::{Error, Iteration, Session};

/// Control actions an observer can return from [`run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Stop after the current iteration.
    StopEarly,
}

/// Indicates how a run terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Stopped early due to an observer action.
    StoppedByObserver,

    /// Performed all requested iterations.
    MaxIters,
}

/// The result of a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    /// How the run terminated.
    pub status: Status,

    /// Number of iterations performed by this run.
    pub iterations: usize,

    /// The last accepted iteration, if any.
    pub last: Option<Iteration>,
}

impl RunSummary {
    /// Returns true if the last iteration was flagged as converged.
    #[must_use]
    pub fn converged(&self) -> bool {
        self.last.is_some_and(|iteration| iteration.converged)
    }
}

/// Iterates up to `max_iters` times, consulting the observer after each step.
///
/// # Errors
///
/// Returns the first [`Error`] raised by [`Session::iterate`]. Iterations
/// accepted before the error remain applied to the session.
pub fn run<Obs>(
    session: &mut Session,
    inputs: &Inputs,
    max_iters: usize,
    mut observer: Obs,
) -> Result<RunSummary, Error>
where
    Obs: Observer<Iteration, Control>,
{
    let mut last = None;

    for performed in 1..=max_iters {
        let iteration = session.iterate(inputs)?;
        last = Some(iteration);

        if let Some(Control::StopEarly) = observer.observe(&iteration) {
            return Ok(RunSummary {
                status: Status::StoppedByObserver,
                iterations: performed,
                last,
            });
        }
    }

    Ok(RunSummary {
        status: Status::MaxIters,
        iterations: max_iters,
        last,
    })
}

/// Iterates until an iteration is flagged as converged or `max_iters` is reached.
///
/// # Errors
///
/// Returns the first [`Error`] raised by [`Session::iterate`].
pub fn run_until_converged(
    session: &mut Session,
    inputs: &Inputs,
    max_iters: usize,
) -> Result<RunSummary, Error> {
    run(session, inputs, max_iters, |iteration: &Iteration| {
        iteration.converged.then_some(Control::StopEarly)
    })
}
