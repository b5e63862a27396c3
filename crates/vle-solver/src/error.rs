//! Error types for equilibrium solving.

use thiserror::Error;
use vle_core::VleError;
use vle_eos::EosError;

/// Errors that can occur while solving for phase equilibrium.
#[derive(Error, Debug)]
pub enum SolverError {
    #[error("Temperature {t_k} K is at or above the critical temperature {tc_k} K")]
    Supercritical { t_k: f64, tc_k: f64 },

    #[error(
        "Objective does not change sign across the bracket: f(lo) = {f_lo}, f(hi) = {f_hi}"
    )]
    NotBracketed { f_lo: f64, f_hi: f64 },

    #[error("Invalid sweep configuration: {what}")]
    InvalidSweep { what: &'static str },

    #[error("EoS error: {0}")]
    Eos(#[from] EosError),

    #[error("Numeric error: {0}")]
    Numeric(#[from] VleError),
}

pub type SolverResult<T> = Result<T, SolverError>;

impl From<SolverError> for VleError {
    fn from(e: SolverError) -> Self {
        match e {
            SolverError::Supercritical { .. } => VleError::InvalidArg {
                what: "temperature at or above critical",
            },
            SolverError::NotBracketed { .. } => VleError::Invariant {
                what: "bracket sign change",
            },
            SolverError::InvalidSweep { what } => VleError::InvalidArg { what },
            SolverError::Eos(e) => e.into(),
            SolverError::Numeric(e) => e,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = SolverError::Supercritical {
            t_k: 510.0,
            tc_k: 507.5,
        };
        assert!(err.to_string().contains("critical"));

        let err = SolverError::NotBracketed {
            f_lo: 1.0,
            f_hi: 2.0,
        };
        assert!(err.to_string().contains("sign"));
    }
}
