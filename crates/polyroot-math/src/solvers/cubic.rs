//! Cubic closed-form solver.
//!
//! Works in the shifted variable `y = 3a*x + b`, where the cubic becomes
//! `y^3 + 3u*y + s = 0` with `u = 3ac - b^2` and `s = 2b^3 - 9abc + 27a^2*d`.
//! The discriminant-like quantity `q^2 = 4u^3 + s^2` selects the branch:
//! the irreducible case (`q^2 < 0`, three distinct real roots) goes through
//! a complex cube root even though every final root is real; `q^2 >= 0`
//! stays in real arithmetic with signed cube roots.

use crate::complex::Complex64;
use crate::solvers::RootConfig;

/// The real roots of `a*x^3 + b*x^2 + c*x + d = 0`, `a` non-zero.
///
/// - Three distinct real roots (`q^2 < 0`): recovered trigonometrically
///   from the real and imaginary parts of the complex cube root of
///   `(-s/2, sqrt(-q^2)/2)`; ordering keyed by the sign of `a` (ascending
///   for `a > 0`).
/// - One real root (`q^2 > 0`): `(t1 + t2 - b)/(3a)` from the two signed
///   real cube roots; the conjugate complex pair is not returned.
/// - `q^2 == 0` with the additional degeneracy `s == 9au`: a triple root
///   `-b/(3a)`, emitted once or three times per the configuration.
/// - `q^2 == 0` otherwise: a double root and a simple root, ordering keyed
///   by the sign of `t1*a`.
///
/// # Example
///
/// ```rust
/// use polyroot_math::solvers::{cubic_roots, RootConfig};
///
/// // (x - 1)(x - 2)(x - 3) = x^3 - 6x^2 + 11x - 6
/// let roots = cubic_roots(1.0, -6.0, 11.0, -6.0, &RootConfig::default());
/// assert!((roots[0] - 1.0).abs() < 1e-9);
/// assert!((roots[1] - 2.0).abs() < 1e-9);
/// assert!((roots[2] - 3.0).abs() < 1e-9);
/// ```
pub fn cubic_roots(a: f64, b: f64, c: f64, d: f64, config: &RootConfig) -> Vec<f64> {
    let u = 3.0 * a * c - b * b;
    let s = 2.0 * b.powi(3) - 9.0 * a * b * c + 27.0 * a * a * d;
    let q_square = 4.0 * u.powi(3) + s * s;

    if q_square < 0.0 {
        // Irreducible case: all three roots real, but the algebra routes
        // through the complex cube root of (-s/2, sqrt(-q^2)/2).
        let w = Complex64::new(-s / 2.0, (-q_square).sqrt() / 2.0).powf(1.0 / 3.0);
        let (alpha, beta) = (w.re, w.im);
        let sqrt3 = 3.0_f64.sqrt();
        let scale = 3.0 * a;
        let r0 = (2.0 * alpha - b) / scale;
        let r1 = (-alpha - sqrt3 * beta - b) / scale;
        let r2 = (-alpha + sqrt3 * beta - b) / scale;
        // The principal cube root has angle in (0, pi/3), so alpha, beta > 0
        // and r1 < r2 < r0 in the shifted variable.
        return if a > 0.0 {
            vec![r1, r2, r0]
        } else {
            vec![r0, r2, r1]
        };
    }

    let q = q_square.sqrt();
    let t1 = ((-q - s) / 2.0).cbrt();
    let t2 = ((q - s) / 2.0).cbrt();

    if q_square != 0.0 {
        // One real root; the other two are a complex-conjugate pair.
        return vec![(t1 + t2 - b) / (3.0 * a)];
    }

    if s == 9.0 * a * u {
        let root = -b / (3.0 * a);
        return if config.expand_multiplicities {
            vec![root; 3]
        } else {
            vec![root]
        };
    }

    // Double root plus a simple root; t1 == t2 here.
    let double = (-t1 - b) / (3.0 * a);
    let single = (2.0 * t1 - b) / (3.0 * a);
    let mut roots = if config.expand_multiplicities {
        vec![double, double, single]
    } else {
        vec![double, single]
    };
    if t1 * a < 0.0 {
        roots.reverse();
    }
    roots
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_three_distinct_roots() {
        // (x - 1)(x - 2)(x - 3)
        let roots = cubic_roots(1.0, -6.0, 11.0, -6.0, &RootConfig::default());
        assert_eq!(roots.len(), 3);
        assert_relative_eq!(roots[0], 1.0, epsilon = 1e-9);
        assert_relative_eq!(roots[1], 2.0, epsilon = 1e-9);
        assert_relative_eq!(roots[2], 3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_negative_leading_coefficient() {
        // -(x - 1)(x - 2)(x - 3): the sign-keyed branch compensates for the
        // order reversal of y -> (y - b)/(3a) when a < 0.
        let roots = cubic_roots(-1.0, 6.0, -11.0, 6.0, &RootConfig::default());
        assert_eq!(roots.len(), 3);
        assert_relative_eq!(roots[0], 1.0, epsilon = 1e-9);
        assert_relative_eq!(roots[1], 2.0, epsilon = 1e-9);
        assert_relative_eq!(roots[2], 3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_single_real_root() {
        // x^3 - 1: one real root at 1.
        let roots = cubic_roots(1.0, 0.0, 0.0, -1.0, &RootConfig::default());
        assert_eq!(roots.len(), 1);
        assert_relative_eq!(roots[0], 1.0, epsilon = 1e-12);

        // x^3 + 8: one real root at -2.
        let roots = cubic_roots(1.0, 0.0, 0.0, 8.0, &RootConfig::default());
        assert_eq!(roots.len(), 1);
        assert_relative_eq!(roots[0], -2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_triple_root() {
        // (x - 2)^3 = x^3 - 6x^2 + 12x - 8
        let expanded = cubic_roots(1.0, -6.0, 12.0, -8.0, &RootConfig::default());
        assert_eq!(expanded, vec![2.0, 2.0, 2.0]);

        let collapsed = cubic_roots(
            1.0,
            -6.0,
            12.0,
            -8.0,
            &RootConfig::default().with_expand_multiplicities(false),
        );
        assert_eq!(collapsed, vec![2.0]);
    }

    #[test]
    fn test_double_plus_simple_root() {
        // (x - 2)^2 (x - 5) = x^3 - 9x^2 + 24x - 20
        let roots = cubic_roots(1.0, -9.0, 24.0, -20.0, &RootConfig::default());
        assert_eq!(roots.len(), 3);
        assert_relative_eq!(roots[0], 2.0, epsilon = 1e-9);
        assert_relative_eq!(roots[1], 2.0, epsilon = 1e-9);
        assert_relative_eq!(roots[2], 5.0, epsilon = 1e-9);

        let collapsed = cubic_roots(
            1.0,
            -9.0,
            24.0,
            -20.0,
            &RootConfig::default().with_expand_multiplicities(false),
        );
        assert_eq!(collapsed.len(), 2);
        assert_relative_eq!(collapsed[0], 2.0, epsilon = 1e-9);
        assert_relative_eq!(collapsed[1], 5.0, epsilon = 1e-9);
    }

    #[test]
    fn test_roots_satisfy_equation() {
        let cases = [
            (2.0, -3.0, -11.0, 6.0),
            (1.0, 0.0, -7.0, 6.0),
            (-3.0, 1.0, 4.0, -1.0),
        ];
        for (a, b, c, d) in cases {
            for x in cubic_roots(a, b, c, d, &RootConfig::default()) {
                let value = a * x.powi(3) + b * x * x + c * x + d;
                assert!(value.abs() < 1e-8, "residual {value} at root {x}");
            }
        }
    }
}
