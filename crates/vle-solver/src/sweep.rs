//! Saturation-curve sweeps over a temperature range.
//!
//! Each (T, fluid) point is an independent pure computation, so the sweep
//! fans out across a rayon thread pool. Failed points (supercritical tail
//! of the range, bracket collapse) are recorded as `None` rather than
//! aborting the whole sweep.

use crate::bisect::BisectConfig;
use crate::error::{SolverError, SolverResult};
use crate::saturation::{SaturationResult, compute_saturation_pressure_with};
use rayon::prelude::*;
use vle_core::units::k;
use vle_eos::FluidParameters;

/// Result of a saturation-curve sweep.
#[derive(Debug, Clone)]
pub struct SaturationSweep {
    /// Temperature grid [K], linearly spaced
    pub temperatures_k: Vec<f64>,
    /// Per-point results; `None` where the solve failed outright
    pub results: Vec<Option<SaturationResult>>,
    /// Points that solved and converged
    pub num_successful: usize,
    /// Points that failed or ran out of iterations
    pub num_failed: usize,
}

impl SaturationSweep {
    /// Converged saturation pressures [Pa], excluding failed points.
    pub fn saturation_pressures_pa(&self) -> Vec<f64> {
        self.results
            .iter()
            .filter_map(|r| r.as_ref())
            .filter(|r| r.converged)
            .map(|r| r.pressure.value)
            .collect()
    }

    /// Temperatures [K] corresponding to converged points.
    pub fn successful_temperatures_k(&self) -> Vec<f64> {
        self.temperatures_k
            .iter()
            .zip(&self.results)
            .filter(|(_, r)| r.as_ref().is_some_and(|r| r.converged))
            .map(|(t, _)| *t)
            .collect()
    }
}

/// Compute a saturation curve on a linear temperature grid.
pub fn saturation_sweep(
    params: &FluidParameters,
    t_start_k: f64,
    t_end_k: f64,
    num_points: usize,
    config: &BisectConfig,
) -> SolverResult<SaturationSweep> {
    if !t_start_k.is_finite() || !t_end_k.is_finite() || t_start_k <= 0.0 {
        return Err(SolverError::InvalidSweep {
            what: "temperature endpoints must be positive and finite",
        });
    }
    if t_end_k <= t_start_k {
        return Err(SolverError::InvalidSweep {
            what: "sweep end temperature must exceed start temperature",
        });
    }
    if num_points < 2 {
        return Err(SolverError::InvalidSweep {
            what: "sweep needs at least two points",
        });
    }

    let step = (t_end_k - t_start_k) / (num_points - 1) as f64;
    let temperatures_k: Vec<f64> = (0..num_points)
        .map(|i| t_start_k + step * i as f64)
        .collect();

    let results: Vec<Option<SaturationResult>> = temperatures_k
        .par_iter()
        .map(|&t_k| compute_saturation_pressure_with(params, k(t_k), config).ok())
        .collect();

    let num_successful = results
        .iter()
        .filter(|r| r.as_ref().is_some_and(|r| r.converged))
        .count();
    let num_failed = num_points - num_successful;

    Ok(SaturationSweep {
        temperatures_k,
        results,
        num_successful,
        num_failed,
    })
}
