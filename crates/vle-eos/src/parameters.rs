//! Fluid parameters for the van der Waals equation of state.

use crate::error::{EosError, EosResult};
use crate::species::Species;
use vle_core::units::constants::R_J_PER_MOL_K;
use vle_core::units::{Pressure, Temperature, k, pa};

/// Constants of one pure fluid, derived once from its critical point.
///
/// The attraction parameter `a` [Pa·m⁶/mol²] and covolume `b` [m³/mol]
/// come from the standard combining rules
///
///   a = (27/64)·Tc²·R²/Pc,  b = R·Tc/(8·Pc),
///
/// so a > 0 and b > 0 whenever the critical constants are physical.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluidParameters {
    r: f64,
    tc: Temperature,
    pc: Pressure,
    a: f64,
    b: f64,
}

impl FluidParameters {
    /// Derive parameters from critical constants and a gas constant.
    ///
    /// Validates that all inputs are positive and finite before any
    /// numerical work.
    pub fn from_critical(r: f64, tc: Temperature, pc: Pressure) -> EosResult<Self> {
        if !r.is_finite() || r <= 0.0 {
            return Err(EosError::NonPhysical {
                what: "gas constant must be positive and finite",
            });
        }
        let tc_k = tc.value;
        if !tc_k.is_finite() || tc_k <= 0.0 {
            return Err(EosError::NonPhysical {
                what: "critical temperature must be positive and finite",
            });
        }
        let pc_pa = pc.value;
        if !pc_pa.is_finite() || pc_pa <= 0.0 {
            return Err(EosError::NonPhysical {
                what: "critical pressure must be positive and finite",
            });
        }

        let a = 27.0 / 64.0 * tc_k * tc_k * r * r / pc_pa;
        let b = r * tc_k / (8.0 * pc_pa);

        Ok(Self { r, tc, pc, a, b })
    }

    /// Parameters for a cataloged species, using the universal gas constant.
    pub fn for_species(species: Species) -> EosResult<Self> {
        Self::from_critical(R_J_PER_MOL_K, k(species.tc_k()), pa(species.pc_pa()))
    }

    /// Gas constant [J/(mol·K)].
    pub fn r(&self) -> f64 {
        self.r
    }

    /// Critical temperature.
    pub fn tc(&self) -> Temperature {
        self.tc
    }

    /// Critical pressure.
    pub fn pc(&self) -> Pressure {
        self.pc
    }

    /// Attraction parameter [Pa·m⁶/mol²].
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Covolume [m³/mol]. Molar volumes at or below this are non-physical.
    pub fn b(&self) -> f64 {
        self.b
    }
}
