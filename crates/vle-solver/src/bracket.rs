//! Spinodal-based pressure bracket for the two-phase window.
//!
//! Setting dP/dV̄ = 0 on the explicit isotherm
//! P = R·T/(V̄−b) − a/V̄² gives the turning-point condition
//! 2a·(V̄−b)² = R·T·V̄³, i.e. the cubic
//!
//!   R·T·V̄³ − 2a·V̄² + 4·a·b·V̄ − 2·a·b² = 0.
//!
//! Between the two turning volumes the isotherm slope is positive, so any
//! pressure strictly between the isotherm's local minimum and local
//! maximum cuts the isotherm three times. That interval, pulled slightly
//! inward, is the bisection bracket.

use crate::error::{SolverError, SolverResult};
use tracing::debug;
use vle_core::polynomial::{real_roots, solve_cubic};
use vle_core::units::{Pressure, Temperature, pa};
use vle_eos::{EosError, FluidParameters, pressure_at};

/// Relative imaginary-part cutoff below which a cubic root counts as real.
const IM_REL_TOL: f64 = 1e-9;

/// Inward nudge on the upper bound. Empirical margin keeping the bracket
/// strictly inside the degenerate double-root boundary; tunable.
const UPPER_MARGIN: f64 = 0.999;

/// Inward nudge on the lower bound when the isotherm minimum is positive.
/// Empirical; tunable.
const LOWER_MARGIN: f64 = 1.001;

/// Floor for the lower bound [Pa]. At low reduced temperatures the
/// isotherm minimum is negative, and the solve needs strictly positive
/// pressure.
const PRESSURE_FLOOR_PA: f64 = 1e-9;

/// Minimum relative separation of the turning volumes; closer than this
/// the isotherm is critically flat and no usable bracket exists.
const TURNING_POINT_SEP_REL: f64 = 1e-9;

/// Pressure interval guaranteed to contain three-root behavior at fixed T.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressureBracket {
    pub p_lo: Pressure,
    pub p_hi: Pressure,
}

/// Construct the two-phase pressure bracket at the given temperature.
///
/// Fails with `Supercritical` when the isotherm has no two distinct
/// turning points above the covolume, which is exactly the T ≥ Tc regime
/// (or numerically indistinguishable from it).
pub fn spinodal_bracket(
    params: &FluidParameters,
    t: Temperature,
) -> SolverResult<PressureBracket> {
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

    let a = params.a();
    let b = params.b();
    let raw = solve_cubic(params.r() * t_k, -2.0 * a, 4.0 * a * b, -2.0 * a * b * b)
        .map_err(EosError::from)?;

    let mut turning: Vec<f64> = real_roots(&raw, IM_REL_TOL)
        .into_iter()
        .filter(|&v| v > b)
        .collect();
    turning.sort_by(f64::total_cmp);

    if turning.len() != 2 {
        return Err(SolverError::Supercritical { t_k, tc_k });
    }
    let (v_small, v_large) = (turning[0], turning[1]);
    if v_large - v_small <= TURNING_POINT_SEP_REL * v_large {
        return Err(SolverError::Supercritical { t_k, tc_k });
    }

    // The smaller turning volume sits at the isotherm's local minimum
    // (often a negative pressure at low reduced temperature), the larger
    // at its local maximum.
    let p_min = pressure_at(params, t_k, v_small)?;
    let p_max = pressure_at(params, t_k, v_large)?;

    let p_hi = p_max * UPPER_MARGIN;
    let p_lo = if p_min > 0.0 {
        p_min * LOWER_MARGIN
    } else {
        PRESSURE_FLOOR_PA
    };

    if p_lo >= p_hi || p_hi <= 0.0 {
        // Margins collapsed the interval; only happens hard against Tc.
        return Err(SolverError::Supercritical { t_k, tc_k });
    }

    debug!(
        t_k,
        v_spinodal_liq = v_small,
        v_spinodal_vap = v_large,
        p_lo_pa = p_lo,
        p_hi_pa = p_hi,
        "constructed spinodal bracket"
    );

    Ok(PressureBracket {
        p_lo: pa(p_lo),
        p_hi: pa(p_hi),
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
    fn subcritical_bracket_is_ordered_and_positive() {
        let params = reference_fluid();
        let bracket = spinodal_bracket(&params, k(220.0)).unwrap();
        assert!(bracket.p_lo.value > 0.0);
        assert!(bracket.p_lo.value < bracket.p_hi.value);
    }

    #[test]
    fn low_temperature_floor_applies() {
        // At this reduced temperature the isotherm minimum is deeply
        // negative, so the lower bound comes from the positive floor.
        let params = reference_fluid();
        let bracket = spinodal_bracket(&params, k(220.0)).unwrap();
        assert_eq!(bracket.p_lo.value, PRESSURE_FLOOR_PA);
    }

    #[test]
    fn fails_at_critical_temperature() {
        let params = reference_fluid();
        let err = spinodal_bracket(&params, k(507.5)).unwrap_err();
        assert!(matches!(err, SolverError::Supercritical { .. }));
    }

    #[test]
    fn fails_above_critical_temperature() {
        let params = reference_fluid();
        let err = spinodal_bracket(&params, k(600.0)).unwrap_err();
        assert!(matches!(err, SolverError::Supercritical { .. }));
    }

    #[test]
    fn rejects_non_positive_temperature() {
        let params = reference_fluid();
        assert!(spinodal_bracket(&params, k(0.0)).is_err());
        assert!(spinodal_bracket(&params, k(-10.0)).is_err());
    }
}
