//! High-level saturation-pressure driver.

use crate::bisect::{BisectConfig, bisect};
use crate::bracket::spinodal_bracket;
use crate::error::{SolverError, SolverResult};
use crate::objective::GibbsObjective;
use tracing::debug;
use vle_core::units::{Pressure, Temperature, pa};
use vle_eos::{EosError, FluidParameters};

/// Converged (or best-effort) saturation point at one temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaturationResult {
    /// Saturation pressure estimate
    pub pressure: Pressure,
    /// Whether bisection met its tolerance within the iteration budget
    pub converged: bool,
    /// Bisection iterations performed
    pub iterations: usize,
    /// ΔG at the returned pressure [J/mol]
    pub final_residual: f64,
}

/// Compute the saturation pressure at `t` with default tolerances
/// (absolute interval tolerance 1e-9 Pa, 100 iterations).
pub fn compute_saturation_pressure(
    params: &FluidParameters,
    t: Temperature,
) -> SolverResult<SaturationResult> {
    compute_saturation_pressure_with(params, t, &BisectConfig::default())
}

/// Compute the saturation pressure at `t` with caller-supplied tolerances.
///
/// Validates the temperature up front, constructs the spinodal bracket,
/// and bisects the residual-Gibbs difference across it. Iteration
/// exhaustion is reported through `converged = false`, not an error;
/// callers must check the flag.
pub fn compute_saturation_pressure_with(
    params: &FluidParameters,
    t: Temperature,
    config: &BisectConfig,
) -> SolverResult<SaturationResult> {
    let t_k = t.value;
    if !t_k.is_finite() || t_k <= 0.0 {
        return Err(EosError::NonPhysical {
            what: "temperature must be positive and finite",
        }
        .into());
    }
    let tc_k = params.tc().value;
    if t_k >= tc_k {
        return Err(SolverError::Supercritical { t_k, tc_k });
    }

    let bracket = spinodal_bracket(params, t)?;
    let objective = GibbsObjective::new(params, t);

    let result = bisect(
        |p| objective.delta_g(p),
        bracket.p_lo.value,
        bracket.p_hi.value,
        config,
    )?;

    debug!(
        t_k,
        p_sat_pa = result.x,
        iterations = result.iterations,
        converged = result.converged,
        residual = result.residual,
        "saturation solve finished"
    );

    Ok(SaturationResult {
        pressure: pa(result.x),
        converged: result.converged,
        iterations: result.iterations,
        final_residual: result.residual,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use vle_core::units::k;

    fn reference_fluid() -> FluidParameters {
        FluidParameters::from_critical(8.3144598, k(507.5), pa(30.1e6)).unwrap()
    }

    #[test]
    fn reference_saturation_pressure() {
        let params = reference_fluid();
        let result = compute_saturation_pressure(&params, k(220.0)).unwrap();
        assert!(result.converged);
        assert!(
            (result.pressure.value - 297_561.0).abs() < 50.0,
            "P_sat = {} Pa",
            result.pressure.value
        );
    }

    #[test]
    fn supercritical_temperature_is_rejected() {
        let params = reference_fluid();
        assert!(matches!(
            compute_saturation_pressure(&params, k(507.5)),
            Err(SolverError::Supercritical { .. })
        ));
        assert!(matches!(
            compute_saturation_pressure(&params, k(550.0)),
            Err(SolverError::Supercritical { .. })
        ));
    }

    #[test]
    fn invalid_temperature_is_rejected() {
        let params = reference_fluid();
        assert!(compute_saturation_pressure(&params, k(-5.0)).is_err());
        assert!(compute_saturation_pressure(&params, k(f64::NAN)).is_err());
    }

    #[test]
    fn tiny_iteration_budget_reports_unconverged() {
        let params = reference_fluid();
        let config = BisectConfig {
            abs_tol: 0.0,
            rel_tol: 0.0,
            max_iterations: 3,
        };
        let result = compute_saturation_pressure_with(&params, k(220.0), &config).unwrap();
        assert!(!result.converged);
        assert_eq!(result.iterations, 3);
    }
}
