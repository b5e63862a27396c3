//! Scalar bisection with sign-change bracketing.

use crate::error::{SolverError, SolverResult};
use vle_core::VleError;

/// Bisection solver configuration.
pub struct BisectConfig {
    /// Absolute tolerance on the interval half-width
    pub abs_tol: f64,
    /// Relative tolerance on the interval half-width (scaled by |midpoint|)
    pub rel_tol: f64,
    /// Maximum iterations
    pub max_iterations: usize,
}

impl Default for BisectConfig {
    fn default() -> Self {
        Self {
            abs_tol: 1e-9,
            rel_tol: 0.0,
            max_iterations: 100,
        }
    }
}

/// Bisection result.
///
/// Iteration exhaustion is reported through `converged`, not as an error;
/// callers must check the flag before trusting `x`.
#[derive(Debug)]
pub struct BisectResult {
    /// Best root estimate
    pub x: f64,
    /// Objective value at `x`
    pub residual: f64,
    /// Number of interval halvings performed
    pub iterations: usize,
    /// Converged flag
    pub converged: bool,
}

/// Bisect for a root of `f` on `[lo, hi]`.
///
/// The endpoints must bracket a sign change (an exact zero at either
/// endpoint converges immediately). Each iteration halves the interval,
/// keeping the half whose endpoints still bracket the change, and stops
/// once the half-width drops below `abs_tol + rel_tol·|mid|`, the
/// midpoint residual is exactly zero, or the interval can no longer be
/// split in floating point.
pub fn bisect<F>(f: F, lo: f64, hi: f64, config: &BisectConfig) -> SolverResult<BisectResult>
where
    F: Fn(f64) -> SolverResult<f64>,
{
    if !lo.is_finite() || !hi.is_finite() || lo >= hi {
        return Err(SolverError::Numeric(VleError::InvalidArg {
            what: "bisection interval must satisfy lo < hi",
        }));
    }

    let mut lo = lo;
    let mut hi = hi;
    let mut f_lo = f(lo)?;
    let f_hi = f(hi)?;

    if f_lo == 0.0 {
        return Ok(BisectResult {
            x: lo,
            residual: 0.0,
            iterations: 0,
            converged: true,
        });
    }
    if f_hi == 0.0 {
        return Ok(BisectResult {
            x: hi,
            residual: 0.0,
            iterations: 0,
            converged: true,
        });
    }
    if !(f_lo * f_hi < 0.0) {
        return Err(SolverError::NotBracketed { f_lo, f_hi });
    }

    for iter in 1..=config.max_iterations {
        let mid = 0.5 * (lo + hi);
        if mid <= lo || mid >= hi {
            // Interval exhausted: no representable point strictly inside.
            let residual = f(mid)?;
            return Ok(BisectResult {
                x: mid,
                residual,
                iterations: iter,
                converged: true,
            });
        }

        let f_mid = f(mid)?;
        if f_mid == 0.0 {
            return Ok(BisectResult {
                x: mid,
                residual: 0.0,
                iterations: iter,
                converged: true,
            });
        }

        if f_lo * f_mid < 0.0 {
            hi = mid;
        } else {
            lo = mid;
            f_lo = f_mid;
        }

        let half_width = 0.5 * (hi - lo);
        if half_width <= config.abs_tol + config.rel_tol * mid.abs() {
            let x = 0.5 * (lo + hi);
            let residual = f(x)?;
            return Ok(BisectResult {
                x,
                residual,
                iterations: iter,
                converged: true,
            });
        }
    }

    // Best estimate so far; non-fatal, callers check the flag.
    let x = 0.5 * (lo + hi);
    let residual = f(x)?;
    Ok(BisectResult {
        x,
        residual,
        iterations: config.max_iterations,
        converged: false,
    })
}
