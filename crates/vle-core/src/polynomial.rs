//! Closed-form roots of cubic polynomials.
//!
//! The solver returns all three roots as complex numbers in unspecified
//! order; callers decide which roots are meaningful for their domain.

use crate::error::{VleError, VleResult};
use crate::numeric::{Real, clamp_unit, ensure_finite};
use num_complex::Complex64;

/// Solve c3·x³ + c2·x² + c1·x + c0 = 0.
///
/// Uses the trigonometric form when all three roots are real and Cardano's
/// form otherwise, then polishes real roots with Newton iteration against
/// the original polynomial.
///
/// Fails if any coefficient is non-finite or the leading coefficient is
/// zero (the polynomial would not be cubic).
pub fn solve_cubic(c3: Real, c2: Real, c1: Real, c0: Real) -> VleResult<[Complex64; 3]> {
    ensure_finite(c3, "cubic coefficient c3")?;
    ensure_finite(c2, "cubic coefficient c2")?;
    ensure_finite(c1, "cubic coefficient c1")?;
    ensure_finite(c0, "cubic coefficient c0")?;
    if c3 == 0.0 {
        return Err(VleError::InvalidArg {
            what: "cubic leading coefficient must be nonzero",
        });
    }

    // Monic form, then depress: x = t - a2/3 removes the quadratic term.
    let a2 = c2 / c3;
    let a1 = c1 / c3;
    let a0 = c0 / c3;

    let shift = a2 / 3.0;
    let p = a1 - a2 * a2 / 3.0;
    let q = 2.0 * a2 * a2 * a2 / 27.0 - a2 * a1 / 3.0 + a0;

    let half_q = q / 2.0;
    let third_p = p / 3.0;
    let disc = half_q * half_q + third_p * third_p * third_p;

    let mut roots = if p == 0.0 && q == 0.0 {
        let r = Complex64::new(-shift, 0.0);
        [r, r, r]
    } else if disc > 0.0 {
        // One real root and a conjugate pair (Cardano).
        let sd = disc.sqrt();
        let u = (-half_q + sd).cbrt();
        let v = (-half_q - sd).cbrt();
        let s = u + v;
        let im = (3.0_f64).sqrt() / 2.0 * (u - v);
        let re = -s / 2.0 - shift;
        [
            Complex64::new(s - shift, 0.0),
            Complex64::new(re, im),
            Complex64::new(re, -im),
        ]
    } else {
        // Three real roots; disc <= 0 implies p < 0 here.
        let m = 2.0 * (-third_p).sqrt();
        let theta = clamp_unit(3.0 * q / (p * m)).acos() / 3.0;
        let tau = 2.0 * std::f64::consts::PI / 3.0;
        [
            Complex64::new(m * theta.cos() - shift, 0.0),
            Complex64::new(m * (theta - tau).cos() - shift, 0.0),
            Complex64::new(m * (theta + tau).cos() - shift, 0.0),
        ]
    };

    for r in roots.iter_mut() {
        if r.im == 0.0 {
            r.re = polish_real_root(c3, c2, c1, c0, r.re);
        }
    }

    Ok(roots)
}

/// Newton iteration on the original (unscaled) polynomial. Recovers the
/// precision lost to the depressed-cubic shift, which can be severe when
/// the roots differ by many orders of magnitude. Keeps whichever of the
/// start and the iterate has the smaller residual.
fn polish_real_root(c3: Real, c2: Real, c1: Real, c0: Real, x0: Real) -> Real {
    let eval = |x: Real| ((c3 * x + c2) * x + c1) * x + c0;

    let mut x = x0;
    for _ in 0..12 {
        let f = eval(x);
        if f == 0.0 {
            return x;
        }
        let df = (3.0 * c3 * x + 2.0 * c2) * x + c1;
        if df == 0.0 {
            break;
        }
        let next = x - f / df;
        if !next.is_finite() {
            break;
        }
        if (next - x).abs() <= Real::EPSILON * x.abs() {
            x = next;
            break;
        }
        x = next;
    }

    if x.is_finite() && eval(x).abs() <= eval(x0).abs() {
        x
    } else {
        x0
    }
}

/// Extract the real roots from a solver result.
///
/// A root counts as real when its imaginary part is negligible relative to
/// its magnitude (absolute below `rel_tol` for roots smaller than one).
pub fn real_roots(roots: &[Complex64; 3], rel_tol: Real) -> Vec<Real> {
    roots
        .iter()
        .filter(|z| z.im.abs() <= rel_tol * z.re.abs().max(1.0))
        .map(|z| z.re)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted_reals(roots: &[Complex64; 3]) -> Vec<Real> {
        let mut rs = real_roots(roots, 1e-9);
        rs.sort_by(|a, b| a.partial_cmp(b).unwrap());
        rs
    }

    #[test]
    fn three_distinct_real_roots() {
        // (x-1)(x-2)(x-3) = x^3 - 6x^2 + 11x - 6
        let roots = solve_cubic(1.0, -6.0, 11.0, -6.0).unwrap();
        let rs = sorted_reals(&roots);
        assert_eq!(rs.len(), 3);
        assert!((rs[0] - 1.0).abs() < 1e-12);
        assert!((rs[1] - 2.0).abs() < 1e-12);
        assert!((rs[2] - 3.0).abs() < 1e-12);
    }

    #[test]
    fn one_real_root_complex_pair() {
        // x^3 - 1 = 0: real root 1, pair at -1/2 +- i*sqrt(3)/2
        let roots = solve_cubic(1.0, 0.0, 0.0, -1.0).unwrap();
        let rs = sorted_reals(&roots);
        assert_eq!(rs.len(), 1);
        assert!((rs[0] - 1.0).abs() < 1e-12);

        let pair: Vec<_> = roots.iter().filter(|z| z.im.abs() > 1e-9).collect();
        assert_eq!(pair.len(), 2);
        assert!((pair[0].re + 0.5).abs() < 1e-12);
        assert!((pair[0].im.abs() - 3.0_f64.sqrt() / 2.0).abs() < 1e-12);
    }

    #[test]
    fn triple_root() {
        // (x-2)^3 = x^3 - 6x^2 + 12x - 8
        let roots = solve_cubic(1.0, -6.0, 12.0, -8.0).unwrap();
        let rs = sorted_reals(&roots);
        assert_eq!(rs.len(), 3);
        for r in rs {
            assert!((r - 2.0).abs() < 1e-6);
        }
    }

    #[test]
    fn non_monic_scaling() {
        // 2(x+1)(x-4)(x-5) = 2x^3 - 16x^2 + 22x + 40
        let roots = solve_cubic(2.0, -16.0, 22.0, 40.0).unwrap();
        let rs = sorted_reals(&roots);
        assert_eq!(rs.len(), 3);
        assert!((rs[0] + 1.0).abs() < 1e-12);
        assert!((rs[1] - 4.0).abs() < 1e-12);
        assert!((rs[2] - 5.0).abs() < 1e-12);
    }

    #[test]
    fn widely_spread_roots_stay_accurate() {
        // (x - 1e-5)(x - 1e-4)(x - 1e-2), the magnitude spread typical of
        // liquid/vapor molar volumes.
        let r1 = 1e-5;
        let r2 = 1e-4;
        let r3 = 1e-2;
        let c2 = -(r1 + r2 + r3);
        let c1 = r1 * r2 + r1 * r3 + r2 * r3;
        let c0 = -r1 * r2 * r3;
        let roots = solve_cubic(1.0, c2, c1, c0).unwrap();
        let rs = sorted_reals(&roots);
        assert_eq!(rs.len(), 3);
        assert!((rs[0] - r1).abs() / r1 < 1e-9);
        assert!((rs[1] - r2).abs() / r2 < 1e-9);
        assert!((rs[2] - r3).abs() / r3 < 1e-9);
    }

    #[test]
    fn rejects_degenerate_leading_coefficient() {
        assert!(solve_cubic(0.0, 1.0, 1.0, 1.0).is_err());
    }

    #[test]
    fn rejects_non_finite_coefficients() {
        assert!(solve_cubic(1.0, Real::NAN, 0.0, 0.0).is_err());
        assert!(solve_cubic(1.0, 0.0, Real::INFINITY, 0.0).is_err());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn constructed_roots_are_recovered(
                r1 in -1e3_f64..1e3,
                r2 in -1e3_f64..1e3,
                r3 in -1e3_f64..1e3,
            ) {
                // Build a cubic from known roots and check they come back.
                let c2 = -(r1 + r2 + r3);
                let c1 = r1 * r2 + r1 * r3 + r2 * r3;
                let c0 = -r1 * r2 * r3;
                let roots = solve_cubic(1.0, c2, c1, c0).unwrap();
                let mut got = real_roots(&roots, 1e-6);
                got.sort_by(|a, b| a.partial_cmp(b).unwrap());
                let mut want = vec![r1, r2, r3];
                want.sort_by(|a, b| a.partial_cmp(b).unwrap());
                prop_assume!(got.len() == 3);
                for (g, w) in got.iter().zip(&want) {
                    prop_assert!((g - w).abs() <= 1e-6 * w.abs().max(1.0));
                }
            }
        }
    }
}
