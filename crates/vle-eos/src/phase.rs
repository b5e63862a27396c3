//! Liquid/vapor classification of a three-root volume set.

use crate::cubic::VolumeRoots;
use crate::error::{EosError, EosResult};
use crate::state::MolarVolume;

/// The three branches of a subcritical isotherm at one pressure.
///
/// The intermediate branch is mechanically unstable and never realized;
/// it is kept for diagnostics only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseSplit {
    pub liquid: MolarVolume,
    pub intermediate: MolarVolume,
    pub vapor: MolarVolume,
}

/// Partition exactly three valid roots into liquid, intermediate, and
/// vapor branches.
pub fn classify(roots: &VolumeRoots) -> EosResult<PhaseSplit> {
    if roots.len() != 3 {
        return Err(EosError::InvalidRootCount {
            expected: 3,
            found: roots.len(),
        });
    }
    let vs = roots.as_slice();
    Ok(PhaseSplit {
        liquid: vs[0],
        intermediate: vs[1],
        vapor: vs[2],
    })
}
