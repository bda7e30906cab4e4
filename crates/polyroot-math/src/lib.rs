//! # Polyroot Math
//!
//! Polynomial algebra and real root-finding core for the Polyroot library.
//!
//! This crate provides:
//!
//! - **Complex**: n-th root extraction on top of [`num_complex::Complex64`]
//! - **Polynomial**: dense real-coefficient polynomials with arithmetic,
//!   long division, derivatives, composition and overflow-safe evaluation
//! - **Solvers**: closed-form root solvers for degrees 1 through 4 and a
//!   recursive critical-point/Newton scheme for arbitrary higher degree
//!
//! ## Design Philosophy
//!
//! - **Exact where possible**: degrees up to 4 use closed-form algebra, with
//!   complex intermediates only where the mathematics demands them
//! - **Numerical Stability**: careful handling of degenerate discriminants,
//!   repeated roots and evaluation overflow
//! - **Pure Functions**: every operation is a pure function of its operands;
//!   there is no shared state and nothing to synchronize
//!
//! ## Example
//!
//! ```rust
//! use polyroot_math::Polynomial;
//!
//! // x^2 - 3x + 2 = (x - 1)(x - 2)
//! let p = Polynomial::new(vec![2.0, -3.0, 1.0]).unwrap();
//! let roots = p.real_roots().unwrap();
//! assert_eq!(roots, vec![1.0, 2.0]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::float_cmp)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::return_self_not_must_use)]

pub mod complex;
pub mod error;
pub mod polynomial;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::complex::{Complex64, NthRoots};
    pub use crate::error::{MathError, MathResult};
    pub use crate::polynomial::Polynomial;
    pub use crate::solvers::{
        cubic_roots, linear_root, quadratic_roots, quartic_roots, resolve, safeguarded_newton,
        RootConfig,
    };
}

pub use complex::{Complex64, NthRoots};
pub use error::{MathError, MathResult};
pub use polynomial::Polynomial;
pub use solvers::RootConfig;
