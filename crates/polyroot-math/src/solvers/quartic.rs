//! Quartic closed-form solver.
//!
//! Reduces `a*x^4 + b*x^3 + c*x^2 + d*x + e` to the depressed form
//! `y^4 + p*y^2 + q*y + r` (offset `dx = -b/(4a)`) and solves the resolvent
//! over the complex numbers: a quadratic for the biquadratic case `q == 0`,
//! a cubic otherwise. Square roots of the resolvent roots recombine into
//! the four candidate roots. Candidates whose imaginary part survives the
//! near-real filter are discarded; the accepted real parts are sorted
//! ascending.

use crate::complex::Complex64;
use crate::solvers::RootConfig;

/// The real roots of `a*x^4 + b*x^3 + c*x^2 + d*x + e = 0`, `a` non-zero.
///
/// Candidates are accepted as real when `|Im| <`
/// [`imaginary_tolerance`](RootConfig::imaginary_tolerance) and returned in
/// ascending order. A repeated root occupies several of the four candidate
/// slots and is reported accordingly; beyond that, this branch performs no
/// multiplicity handling and ignores
/// [`expand_multiplicities`](RootConfig::expand_multiplicities).
///
/// # Example
///
/// ```rust
/// use polyroot_math::solvers::{quartic_roots, RootConfig};
///
/// // (x - 1)(x - 2)(x - 3)(x - 4)
/// let roots = quartic_roots(1.0, -10.0, 35.0, -50.0, 24.0, &RootConfig::default());
/// assert_eq!(roots.len(), 4);
/// for (root, expected) in roots.iter().zip([1.0, 2.0, 3.0, 4.0]) {
///     assert!((root - expected).abs() < 1e-9);
/// }
/// ```
pub fn quartic_roots(a: f64, b: f64, c: f64, d: f64, e: f64, config: &RootConfig) -> Vec<f64> {
    let aa = b / a;
    let bb = c / a;
    let cc = d / a;
    let dd = e / a;
    let p = bb - 3.0 * aa * aa / 8.0;
    let q = cc - aa * bb / 2.0 + aa.powi(3) / 8.0;
    let r = dd - aa * cc / 4.0 + aa * aa * bb / 16.0 - 3.0 * aa.powi(4) / 256.0;
    let dx = -b / (4.0 * a);

    let mut candidates: Vec<Complex64> = Vec::with_capacity(4);
    if q == 0.0 {
        // Biquadratic: the resolvent cubic degenerates to the quadratic
        // z^2 + (p/2)z + (p^2 - 4r)/16, whose discriminant reduces to r.
        let sqrt_disc = Complex64::new(r, 0.0).sqrt();
        let z1 = (Complex64::new(-p / 2.0, 0.0) + sqrt_disc) * 0.5;
        let z2 = (Complex64::new(-p / 2.0, 0.0) - sqrt_disc) * 0.5;
        let (s1, s2) = (z1.sqrt(), z2.sqrt());
        for (g1, g2) in [(1.0, 1.0), (1.0, -1.0), (-1.0, 1.0), (-1.0, -1.0)] {
            candidates.push(s1 * g1 + s2 * g2);
        }
    } else {
        // Resolvent cubic w^3 + (p/2)w^2 + ((p^2 - 4r)/16)w - q^2/64 over C.
        let ws = monic_cubic_complex_roots(p / 2.0, (p * p - 4.0 * r) / 16.0, -q * q / 64.0);
        let (z1, z2, z3) = (ws[0].sqrt(), ws[1].sqrt(), ws[2].sqrt());
        // The recombination requires z1*z2*z3 = -q/8; the product of the
        // principal square roots is q/8 up to sign, so flip every z when
        // needed.
        let product = z1 * z2 * z3;
        let sign = if (product / q).re > 0.0 { -1.0 } else { 1.0 };
        for (g1, g2, g3) in [
            (1.0, 1.0, 1.0),
            (1.0, -1.0, -1.0),
            (-1.0, 1.0, -1.0),
            (-1.0, -1.0, 1.0),
        ] {
            candidates.push((z1 * g1 + z2 * g2 + z3 * g3) * sign);
        }
    }

    let mut roots: Vec<f64> = candidates
        .into_iter()
        .filter(|y| y.im.abs() < config.imaginary_tolerance)
        .map(|y| y.re + dx)
        .collect();
    roots.sort_by(|x, y| x.total_cmp(y));
    roots
}

/// All three (complex) roots of the monic cubic `w^3 + b2*w^2 + b1*w + b0`.
///
/// Cardano in the shifted variable, carried out entirely over the complex
/// numbers so every discriminant case flows through the same formula. The
/// cube-root branch with the larger magnitude is chosen and its partner
/// recovered from the product constraint `t1*t2 = -u`, which keeps the
/// pairing exact when one branch collapses to zero.
fn monic_cubic_complex_roots(b2: f64, b1: f64, b0: f64) -> [Complex64; 3] {
    let u = 3.0 * b1 - b2 * b2;
    let s = 2.0 * b2.powi(3) - 9.0 * b2 * b1 + 27.0 * b0;
    let disc = Complex64::new(4.0 * u.powi(3) + s * s, 0.0).sqrt();

    let c1 = (Complex64::new(-s, 0.0) + disc) * 0.5;
    let c2 = (Complex64::new(-s, 0.0) - disc) * 0.5;
    let pick = if c1.norm_sqr() >= c2.norm_sqr() { c1 } else { c2 };
    if pick.norm_sqr() == 0.0 {
        // u == 0 and s == 0: triple root.
        return [Complex64::new(-b2 / 3.0, 0.0); 3];
    }

    let t = pick.powf(1.0 / 3.0);
    let omega = Complex64::new(-0.5, 3.0_f64.sqrt() / 2.0);
    let mut roots = [Complex64::new(0.0, 0.0); 3];
    for (k, root) in roots.iter_mut().enumerate() {
        let tk = t * omega.powu(k as u32);
        let y = tk - Complex64::new(u, 0.0) / tk;
        *root = (y - b2) / 3.0;
    }
    roots
}
