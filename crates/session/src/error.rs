use machstep_thermo::{DomainError, ValidationError};
use thiserror::Error;

/// Errors a [`Session`](crate::Session) surfaces to its host.
///
/// Neither variant poisons the session. After a validation error the host
/// should ask for corrected inputs; after a domain error it can reset.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("iteration failed: {0}")]
    Domain(#[from] DomainError),
}
