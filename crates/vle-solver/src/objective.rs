//! Equilibrium objective: liquid-vapor residual-Gibbs difference.

use crate::error::SolverResult;
use vle_core::units::{Temperature, pa};
use vle_eos::{FluidParameters, State, classify, residual_gibbs_difference, volume_roots};

/// Scalar objective in pressure alone, with fluid and temperature held
/// fixed. Its root is the saturation pressure.
///
/// Must only be evaluated inside the three-root pressure window; outside
/// it the root count check surfaces as `InvalidRootCount`.
#[derive(Debug, Clone, Copy)]
pub struct GibbsObjective<'a> {
    params: &'a FluidParameters,
    t: Temperature,
}

impl<'a> GibbsObjective<'a> {
    pub fn new(params: &'a FluidParameters, t: Temperature) -> Self {
        Self { params, t }
    }

    /// ΔG(P) = g^res(liquid) − g^res(vapor) [J/mol], in the collapsed form
    /// that avoids cancellation between the two large residual values.
    pub fn delta_g(&self, p_pa: f64) -> SolverResult<f64> {
        let state = State::from_pt(pa(p_pa), self.t)?;
        let roots = volume_roots(self.params, &state)?;
        let split = classify(&roots)?;
        let dg = residual_gibbs_difference(
            self.params,
            p_pa,
            self.t.value,
            split.liquid,
            split.vapor,
        )?;
        Ok(dg)
    }
}
