//! vle-core: stable foundation for vlecalc.
//!
//! Contains:
//! - units (uom SI types + constructors + physical constants)
//! - numeric (Real + tolerances + float helpers)
//! - polynomial (closed-form cubic root primitive)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod polynomial;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{VleError, VleResult};
pub use numeric::*;
pub use polynomial::{real_roots, solve_cubic};
pub use units::*;
