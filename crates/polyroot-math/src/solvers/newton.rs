//! General-degree numerical root finding.
//!
//! For degree 5 and above there is no closed form; instead the solver
//! recurses on the first and second derivatives (whose degrees strictly
//! decrease, terminating at the closed forms) to collect critical and
//! inflection points. Between consecutive points of the sorted grid
//! `{-inf, +inf} + roots(p') + roots(p'')` the polynomial is monotonic or
//! of bounded curvature, so each interval holds at most one simple root,
//! isolated with a safeguarded Newton iteration.

use log::{debug, trace};

use crate::error::MathResult;
use crate::polynomial::Polynomial;
use crate::solvers::{resolve, RootConfig};

/// Relative tolerance for deciding that a found root coincides with the
/// right interval boundary (a critical point, hence a multiple root).
const BOUNDARY_TOLERANCE: f64 = 1e-9;

/// Newton's method accepting an iterate only while `|f|` strictly improves.
///
/// Starts from `seed` and iterates `x <- x - f(x)/f'(x)`, keeping the new
/// iterate only when it strictly decreases `|f|`; the last accepted iterate
/// is returned as soon as a step fails to improve, the step leaves the
/// finite range, or the residual reaches zero. Termination is guaranteed
/// (the residual decreases strictly through a finite set of values), but
/// convergence to a root is not certified: on a plateau the seed itself may
/// come back. Callers treat root proximity as best-effort.
///
/// # Example
///
/// ```rust
/// use polyroot_math::Polynomial;
/// use polyroot_math::solvers::safeguarded_newton;
///
/// // x^2 - 2, seeded near the positive root.
/// let p = Polynomial::new(vec![-2.0, 0.0, 1.0]).unwrap();
/// let root = safeguarded_newton(&p, &p.derivative(), 1.5);
/// assert!((root - std::f64::consts::SQRT_2).abs() < 1e-9);
/// ```
pub fn safeguarded_newton(poly: &Polynomial, derivative: &Polynomial, seed: f64) -> f64 {
    let mut x = seed;
    let mut best = poly.eval(x).abs();
    if best == 0.0 {
        return x;
    }
    loop {
        let slope = derivative.eval(x);
        let next = x - poly.eval(x) / slope;
        if !next.is_finite() {
            return x;
        }
        let residual = poly.eval(next).abs();
        if residual >= best {
            return x;
        }
        trace!("newton step {x} -> {next} (|f| {best} -> {residual})");
        x = next;
        best = residual;
        if best == 0.0 {
            return x;
        }
    }
}

/// The degree >= 5 path of [`resolve`]: critical-point bracketing plus
/// safeguarded Newton per interval.
pub(crate) fn resolve_numeric(poly: &Polynomial, config: &RootConfig) -> MathResult<Vec<f64>> {
    let d1 = poly.derivative();
    let d2 = d1.derivative();

    // Multiplicities carry no bracketing information; collapse them while
    // building the grid.
    let grid_config = config.with_expand_multiplicities(false);
    let d1_roots = resolve(&d1, &grid_config)?;
    let d2_roots = resolve(&d2, &grid_config)?;

    // Sorted grid of candidate interval boundaries; entries coming from the
    // first derivative are tagged for multiple-root bookkeeping.
    let mut grid: Vec<(f64, bool)> = Vec::with_capacity(d1_roots.len() + d2_roots.len() + 2);
    grid.push((f64::NEG_INFINITY, false));
    grid.push((f64::INFINITY, false));
    grid.extend(d1_roots.into_iter().map(|r| (r, true)));
    grid.extend(d2_roots.into_iter().map(|r| (r, false)));
    grid.sort_by(|x, y| x.0.total_cmp(&y.0));
    grid.dedup_by(|next, kept| {
        if next.0 == kept.0 {
            kept.1 |= next.1;
            true
        } else {
            false
        }
    });
    debug!(
        "degree {} resolved numerically over {} bracketing intervals",
        poly.degree(),
        grid.len() - 1
    );

    let mut roots = Vec::new();
    let mut i = 0;
    while i + 1 < grid.len() {
        let (a, _) = grid[i];
        let (b, b_from_d1) = grid[i + 1];
        i += 1;
        let Some(root) = find_root(poly, &d1, a, b) else {
            continue;
        };
        roots.push(root);
        if coincides(root, b) {
            if b_from_d1 && config.expand_multiplicities {
                roots.push(root);
            }
            // The boundary is consumed; the interval starting at b would
            // only rediscover the same root.
            i += 1;
        }
    }
    Ok(roots)
}

/// Attempts to isolate a single root of `poly` inside `[a, b]`.
///
/// Rejects the interval when the endpoint values share a strict sign. An
/// infinite endpoint is replaced by a probe point one unit inward from the
/// finite one for seeding; the sign test itself uses the true endpoint
/// values, which evaluation resolves to signed infinities.
fn find_root(poly: &Polynomial, derivative: &Polynomial, a: f64, b: f64) -> Option<f64> {
    let fa = poly.eval(a);
    let fb = poly.eval(b);
    if (fa > 0.0 && fb > 0.0) || (fa < 0.0 && fb < 0.0) {
        trace!("interval [{a}, {b}] rejected: no sign change");
        return None;
    }
    let seed = match (a.is_finite(), b.is_finite()) {
        (true, true) => (a + b) / 2.0,
        (true, false) => a + 1.0,
        (false, true) => b - 1.0,
        (false, false) => 0.0,
    };
    Some(safeguarded_newton(poly, derivative, seed))
}

fn coincides(root: f64, boundary: f64) -> bool {
    if !boundary.is_finite() {
        return false;
    }
    (root - boundary).abs() <= BOUNDARY_TOLERANCE * boundary.abs().max(1.0)
}
