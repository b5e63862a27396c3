//! Thermodynamic state definitions.

use crate::error::{EosError, EosResult};
use vle_core::units::{Pressure, Temperature};

/// Molar volume [m³/mol].
///
/// Not part of uom's standard set, so we use f64 with clear documentation.
pub type MolarVolume = f64;

/// Molar Gibbs energy [J/mol].
///
/// Not part of uom's standard set, so we use f64 with clear documentation.
pub type MolarGibbs = f64;

/// Independent variables for one EoS evaluation: pressure and temperature.
///
/// During a saturation solve the temperature is held fixed while pressure
/// varies; a fresh `State` is built per objective evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    p: Pressure,
    t: Temperature,
}

impl State {
    /// Create a state, validating that pressure and temperature are
    /// positive and finite.
    pub fn from_pt(p: Pressure, t: Temperature) -> EosResult<Self> {
        if !p.value.is_finite() || p.value <= 0.0 {
            return Err(EosError::NonPhysical {
                what: "pressure must be positive and finite",
            });
        }
        if !t.value.is_finite() || t.value <= 0.0 {
            return Err(EosError::NonPhysical {
                what: "temperature must be positive and finite",
            });
        }
        Ok(Self { p, t })
    }

    pub fn pressure(&self) -> Pressure {
        self.p
    }

    pub fn temperature(&self) -> Temperature {
        self.t
    }
}
