use crate::Iteration;

/// Discrete user actions a host dispatches to a [`Session`](crate::Session).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Apply one iteration step to the current estimate.
    Iterate,

    /// Reinitialize from the ISA model regardless of the current state.
    Reset,

    /// Re-evaluate inputs after the user edited a field.
    ///
    /// Reinitializes only if the inputs differ from the remembered ones.
    InputsChanged,
}

/// What a [`Session`](crate::Session) reports back for a handled action.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Response {
    /// Inputs were evaluated.
    Evaluated {
        /// Whether the evaluation reinitialized the state.
        reinitialized: bool,
    },

    /// One iteration step was applied.
    Iterated(Iteration),

    /// The state was reset successfully.
    Reset,
}
