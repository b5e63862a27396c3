//! vle-eos: van der Waals equation of state for pure fluids.
//!
//! The EoS is kept in implicit cubic form in molar volume. This crate owns
//! everything that is a property of the fluid itself: parameters derived
//! from critical constants, volume-root extraction and physical filtering,
//! liquid/vapor classification, and residual Gibbs energy. Driving the
//! phase-equilibrium solve lives in vle-solver.

pub mod cubic;
pub mod error;
pub mod gibbs;
pub mod parameters;
pub mod phase;
pub mod species;
pub mod state;

pub use cubic::{VolumeRoots, pressure_at, volume_roots};
pub use error::{EosError, EosResult};
pub use gibbs::{residual_gibbs, residual_gibbs_difference};
pub use parameters::FluidParameters;
pub use phase::{PhaseSplit, classify};
pub use species::Species;
pub use state::{MolarGibbs, MolarVolume, State};
