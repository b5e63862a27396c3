//! Saturation-pressure solver for pure van der Waals fluids.
//!
//! At a fixed subcritical temperature the isotherm admits a pressure
//! window with three molar-volume roots. This crate brackets that window
//! from the spinodal turning points, then bisects the liquid-vapor
//! residual-Gibbs difference to the unique pressure where both phases
//! coexist.

pub mod bisect;
pub mod bracket;
pub mod error;
pub mod objective;
pub mod saturation;
pub mod sweep;

pub use bisect::{BisectConfig, BisectResult, bisect};
pub use bracket::{PressureBracket, spinodal_bracket};
pub use error::{SolverError, SolverResult};
pub use objective::GibbsObjective;
pub use saturation::{
    SaturationResult, compute_saturation_pressure, compute_saturation_pressure_with,
};
pub use sweep::{SaturationSweep, saturation_sweep};
