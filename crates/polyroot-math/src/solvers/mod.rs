//! Real root-finding for polynomials.
//!
//! This module provides the solver dispatch and the individual algorithms:
//!
//! - [`linear_root`], [`quadratic_roots`]: direct formulas
//! - [`cubic_roots`]: Cardano resolvent with a complex intermediate for the
//!   irreducible (three-distinct-real-roots) case
//! - [`quartic_roots`]: depressed quartic via a resolvent cubic over the
//!   complex numbers
//! - [`safeguarded_newton`]: the Newton variant used by the general-degree
//!   bracketing scheme
//!
//! # Choosing a Path
//!
//! Callers normally go through [`resolve`] (or
//! [`Polynomial::real_roots`](crate::Polynomial::real_roots)), which
//! dispatches on the effective degree: closed forms through degree 4, the
//! recursive critical-point/Newton scheme above. The closed forms are exact
//! algebra; the numerical path is best-effort. It never errors for a
//! well-formed polynomial, but root proximity is limited by floating-point
//! round-off, not certified.

mod cubic;
mod newton;
mod quadratic;
mod quartic;

pub use cubic::cubic_roots;
pub use newton::safeguarded_newton;
pub use quadratic::{linear_root, quadratic_roots};
pub use quartic::quartic_roots;

use crate::error::MathResult;
use crate::polynomial::Polynomial;

/// Default near-real filter for the quartic candidate roots.
pub const DEFAULT_IMAGINARY_TOLERANCE: f64 = 1e-12;

/// Configuration for polynomial root-finding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootConfig {
    /// Whether a repeated root appears once or with its multiplicity.
    pub expand_multiplicities: bool,
    /// Magnitude below which a candidate's imaginary part counts as zero
    /// (quartic near-real filter).
    pub imaginary_tolerance: f64,
}

impl Default for RootConfig {
    fn default() -> Self {
        Self {
            expand_multiplicities: true,
            imaginary_tolerance: DEFAULT_IMAGINARY_TOLERANCE,
        }
    }
}

impl RootConfig {
    /// Creates a new root-finding configuration.
    #[must_use]
    pub fn new(expand_multiplicities: bool, imaginary_tolerance: f64) -> Self {
        Self {
            expand_multiplicities,
            imaginary_tolerance,
        }
    }

    /// Sets whether repeated roots are expanded to their multiplicity.
    #[must_use]
    pub fn with_expand_multiplicities(mut self, expand: bool) -> Self {
        self.expand_multiplicities = expand;
        self
    }

    /// Sets the quartic near-real filter tolerance.
    #[must_use]
    pub fn with_imaginary_tolerance(mut self, tolerance: f64) -> Self {
        self.imaginary_tolerance = tolerance;
        self
    }
}

/// Finds all real roots of `poly`, dispatching on the effective degree.
///
/// Degree 0 (constants, including the zero polynomial) has no roots by
/// convention. Degrees 1 through 4 use the closed-form solvers; degree 5
/// and above recurses on the derivative to bracket monotonic intervals and
/// runs [`safeguarded_newton`] on each.
///
/// Root ordering: the degree-2 and degree-3 branches order ties by the sign
/// of the leading coefficient (a deliberate, preserved convention); the
/// degree-4 and numerical branches return ascending order.
///
/// # Errors
///
/// [`MathError::UnsupportedDegree`](crate::MathError::UnsupportedDegree) is
/// the documented failure for a degree with no solver branch; every degree
/// currently has one, so `resolve` does not produce it today.
pub fn resolve(poly: &Polynomial, config: &RootConfig) -> MathResult<Vec<f64>> {
    let coeffs = poly.coefficients();
    match poly.degree() {
        0 => Ok(Vec::new()),
        1 => Ok(vec![linear_root(coeffs[1], coeffs[0])]),
        2 => Ok(quadratic_roots(coeffs[2], coeffs[1], coeffs[0], config)),
        3 => Ok(cubic_roots(coeffs[3], coeffs[2], coeffs[1], coeffs[0], config)),
        4 => Ok(quartic_roots(
            coeffs[4], coeffs[3], coeffs[2], coeffs[1], coeffs[0], config,
        )),
        _ => newton::resolve_numeric(poly, config),
    }
}
