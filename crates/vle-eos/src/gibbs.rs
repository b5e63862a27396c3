//! Residual molar Gibbs energy for the van der Waals fluid.

use crate::error::{EosError, EosResult};
use crate::parameters::FluidParameters;
use crate::state::{MolarGibbs, MolarVolume};

/// Residual molar Gibbs energy at (P, T, V̄) [J/mol]:
///
///   g^res = P·V̄ − R·T − a/V̄ − R·T·ln(P·(V̄−b)/(R·T))
///
/// Requires V̄ > b to keep the logarithm argument positive. Upstream root
/// filtering guarantees this, so the Domain error is unreachable from the
/// public solve path.
pub fn residual_gibbs(
    params: &FluidParameters,
    p_pa: f64,
    t_k: f64,
    v: MolarVolume,
) -> EosResult<MolarGibbs> {
    if v <= params.b() {
        return Err(EosError::Domain {
            what: "molar volume must exceed the covolume",
        });
    }
    let rt = params.r() * t_k;
    let log_arg = p_pa * (v - params.b()) / rt;
    if log_arg <= 0.0 {
        return Err(EosError::Domain {
            what: "logarithm argument must be positive",
        });
    }
    Ok(p_pa * v - rt - params.a() / v - rt * log_arg.ln())
}

/// Liquid-minus-vapor residual Gibbs difference at one (P, T) [J/mol]:
///
///   Δg = P·(V̄L − V̄V) − a·(1/V̄L − 1/V̄V) + R·T·ln((V̄V−b)/(V̄L−b))
///
/// Algebraically equal to `residual_gibbs(liquid) − residual_gibbs(vapor)`
/// with the ideal-gas and log-of-P terms cancelled, which avoids
/// subtracting two large, nearly equal values.
pub fn residual_gibbs_difference(
    params: &FluidParameters,
    p_pa: f64,
    t_k: f64,
    v_liq: MolarVolume,
    v_vap: MolarVolume,
) -> EosResult<MolarGibbs> {
    let b = params.b();
    if v_liq <= b || v_vap <= b {
        return Err(EosError::Domain {
            what: "molar volume must exceed the covolume",
        });
    }
    let rt = params.r() * t_k;
    Ok(p_pa * (v_liq - v_vap) - params.a() * (1.0 / v_liq - 1.0 / v_vap)
        + rt * ((v_vap - b) / (v_liq - b)).ln())
}
