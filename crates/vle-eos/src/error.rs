//! Equation-of-state errors.

use thiserror::Error;
use vle_core::VleError;

/// Result type for EoS operations.
pub type EosResult<T> = Result<T, EosError>;

/// Errors that can occur while evaluating the equation of state.
#[derive(Error, Debug)]
pub enum EosError {
    /// Non-physical values (negative pressure, temperature, covolume, etc.).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// The volume-root set did not have the required cardinality.
    #[error("Expected {expected} molar-volume roots, found {found}")]
    InvalidRootCount { expected: usize, found: usize },

    /// A logarithm or division argument left its valid domain.
    #[error("Domain violation: {what}")]
    Domain { what: &'static str },

    /// Error from the shared numeric primitives.
    #[error("Numeric error: {0}")]
    Numeric(#[from] VleError),
}

impl From<EosError> for VleError {
    fn from(err: EosError) -> Self {
        match err {
            EosError::NonPhysical { what } => VleError::Invariant { what },
            EosError::InvalidRootCount { .. } => VleError::Invariant {
                what: "volume-root cardinality",
            },
            EosError::Domain { what } => VleError::InvalidArg { what },
            EosError::Numeric(e) => e,
        }
    }
}
