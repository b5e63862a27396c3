//! Molar-volume roots of the implicit cubic EoS.
//!
//! Rearranging P = R·T/(V̄−b) − a/V̄² into polynomial form in V̄ gives
//!
//!   P·V̄³ − (P·b + R·T)·V̄² + a·V̄ − a·b = 0.
//!
//! The raw cubic roots come from the shared polynomial primitive; this
//! module applies the physical filter (real, above the covolume) and keeps
//! the survivors sorted.

use crate::error::{EosError, EosResult};
use crate::parameters::FluidParameters;
use crate::state::{MolarVolume, State};
use vle_core::polynomial::{real_roots, solve_cubic};

/// Relative imaginary-part cutoff below which a cubic root counts as real.
const IM_REL_TOL: f64 = 1e-9;

/// Physically valid molar-volume roots at one state, sorted ascending.
///
/// Holds one root under single-phase conditions and three inside the
/// two-phase pressure window; every root exceeds the covolume b. At least
/// one root always survives the filter for a valid state.
#[derive(Debug, Clone, PartialEq)]
pub struct VolumeRoots(Vec<MolarVolume>);

impl VolumeRoots {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[MolarVolume] {
        &self.0
    }

    /// Smallest valid root (the liquid-like branch when three exist).
    pub fn smallest(&self) -> MolarVolume {
        self.0[0]
    }

    /// Largest valid root (the vapor-like branch when three exist).
    pub fn largest(&self) -> MolarVolume {
        self.0[self.0.len() - 1]
    }
}

/// Compute the valid molar-volume roots of the EoS at the given state.
///
/// A single root is a legitimate single-phase result, not an error.
pub fn volume_roots(params: &FluidParameters, state: &State) -> EosResult<VolumeRoots> {
    let p = state.pressure().value;
    let t = state.temperature().value;
    let a = params.a();
    let b = params.b();

    let raw = solve_cubic(p, -(p * b + params.r() * t), a, -a * b)?;

    let mut valid: Vec<MolarVolume> = real_roots(&raw, IM_REL_TOL)
        .into_iter()
        .filter(|&v| v > b)
        .collect();
    valid.sort_by(f64::total_cmp);

    if valid.is_empty() {
        // The cubic is negative at V = b and positive for large V, so a
        // valid state always has a root above the covolume.
        return Err(EosError::NonPhysical {
            what: "no molar-volume root above the covolume",
        });
    }

    Ok(VolumeRoots(valid))
}

/// Explicit isotherm pressure P(T, V̄) = R·T/(V̄−b) − a/V̄² [Pa].
pub fn pressure_at(params: &FluidParameters, t_k: f64, v: MolarVolume) -> EosResult<f64> {
    if v <= params.b() {
        return Err(EosError::Domain {
            what: "molar volume must exceed the covolume",
        });
    }
    Ok(params.r() * t_k / (v - params.b()) - params.a() / (v * v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use vle_core::units::{k, pa};

    fn reference_fluid() -> FluidParameters {
        FluidParameters::from_critical(8.3144598, k(507.5), pa(30.1e6)).unwrap()
    }

    #[test]
    fn three_roots_inside_two_phase_window() {
        let params = reference_fluid();
        let state = State::from_pt(pa(1e5), k(220.0)).unwrap();
        let roots = volume_roots(&params, &state).unwrap();
        assert_eq!(roots.len(), 3);
        assert!(roots.as_slice().iter().all(|&v| v > params.b()));
    }

    #[test]
    fn single_root_at_supercritical_temperature() {
        let params = reference_fluid();
        let state = State::from_pt(pa(1e5), k(600.0)).unwrap();
        let roots = volume_roots(&params, &state).unwrap();
        assert_eq!(roots.len(), 1);
        assert!(roots.smallest() > params.b());
    }

    #[test]
    fn roots_satisfy_the_isotherm() {
        let params = reference_fluid();
        let state = State::from_pt(pa(1e5), k(220.0)).unwrap();
        let roots = volume_roots(&params, &state).unwrap();
        for &v in roots.as_slice() {
            let p = pressure_at(&params, 220.0, v).unwrap();
            assert!(
                (p - 1e5).abs() < 1e-3 * 1e5,
                "isotherm pressure {p} drifted from 1e5 at V={v}"
            );
        }
    }

    #[test]
    fn roots_are_sorted_ascending() {
        let params = reference_fluid();
        let state = State::from_pt(pa(1e5), k(220.0)).unwrap();
        let roots = volume_roots(&params, &state).unwrap();
        let vs = roots.as_slice();
        assert!(vs[0] < vs[1] && vs[1] < vs[2]);
        assert_eq!(roots.smallest(), vs[0]);
        assert_eq!(roots.largest(), vs[2]);
    }

    #[test]
    fn pressure_at_rejects_covolume_violation() {
        let params = reference_fluid();
        let err = pressure_at(&params, 220.0, params.b()).unwrap_err();
        assert!(matches!(err, EosError::Domain { .. }));
    }
}
