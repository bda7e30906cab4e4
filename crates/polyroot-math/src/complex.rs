//! Complex-number substrate: n-th root extraction over [`Complex64`].
//!
//! Arithmetic, principal-branch powers (`powf`) and square roots come from
//! [`num_complex`] directly; division by a zero-magnitude value yields IEEE
//! NaN/infinity components rather than an error, so callers must check for
//! non-finite results downstream. This module adds the one operation the
//! closed-form polynomial solvers need and the ecosystem type does not
//! carry: extracting *all* n-th roots of a value.

use std::f64::consts::TAU;

use crate::error::{MathError, MathResult};

pub use num_complex::Complex64;

/// Extraction of all n-th roots of a complex value.
pub trait NthRoots {
    /// Returns all `n` n-th roots of `self`, principal root first.
    ///
    /// For a real, strictly positive base and `n` in 1..=4 the roots are
    /// produced from exact algebraic forms, avoiding trigonometric rounding
    /// on inputs where the roots are representable exactly (e.g. the square
    /// roots of 4.0 are exactly `2.0` and `-2.0`). Every other case uses the
    /// general polar formula: modulus `r^(1/n)`, angles `(theta + 2*pi*k)/n` for
    /// `k = 0..n`, returned in increasing `k` order.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::InvalidInput`] when `n == 0`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use polyroot_math::{Complex64, NthRoots};
    ///
    /// let roots = Complex64::new(4.0, 0.0).nth_roots(2).unwrap();
    /// assert_eq!(roots[0], Complex64::new(2.0, 0.0));
    /// assert_eq!(roots[1], Complex64::new(-2.0, 0.0));
    /// ```
    fn nth_roots(self, n: u32) -> MathResult<Vec<Complex64>>;
}

impl NthRoots for Complex64 {
    fn nth_roots(self, n: u32) -> MathResult<Vec<Complex64>> {
        if n == 0 {
            return Err(MathError::invalid_input("root count must be at least 1"));
        }

        if self.im == 0.0 && self.re > 0.0 {
            match n {
                1 => return Ok(vec![self]),
                2 => {
                    let s = self.re.sqrt();
                    return Ok(vec![Complex64::new(s, 0.0), Complex64::new(-s, 0.0)]);
                }
                3 => {
                    let c = self.re.cbrt();
                    let h = 3.0_f64.sqrt() * c / 2.0;
                    return Ok(vec![
                        Complex64::new(c, 0.0),
                        Complex64::new(-c / 2.0, -h),
                        Complex64::new(-c / 2.0, h),
                    ]);
                }
                4 => {
                    let q = self.re.sqrt().sqrt();
                    return Ok(vec![
                        Complex64::new(q, 0.0),
                        Complex64::new(0.0, q),
                        Complex64::new(-q, 0.0),
                        Complex64::new(0.0, -q),
                    ]);
                }
                _ => {}
            }
        }

        let modulus = self.norm().powf(1.0 / f64::from(n));
        let theta = self.arg();
        let mut roots = Vec::with_capacity(n as usize);
        for k in 0..n {
            let angle = (theta + TAU * f64::from(k)) / f64::from(n);
            roots.push(Complex64::new(
                modulus * angle.cos(),
                modulus * angle.sin(),
            ));
        }
        Ok(roots)
    }
}
