//! Operator implementations for [`Polynomial`].
//!
//! Addition and subtraction zero-pad the shorter operand; multiplication is
//! the full coefficient convolution. Operators are implemented on
//! references (the primary form, since operands are usually reused) with
//! owned-value forwarding impls for ergonomic call sites.

use std::ops::{Add, Mul, Neg, Sub};

use super::Polynomial;

impl Add for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: &Polynomial) -> Polynomial {
        let len = self.coefficients.len().max(rhs.coefficients.len());
        let mut coefficients = Vec::with_capacity(len);
        for i in 0..len {
            let a = self.coefficients.get(i).copied().unwrap_or(0.0);
            let b = rhs.coefficients.get(i).copied().unwrap_or(0.0);
            coefficients.push(a + b);
        }
        Polynomial::from_raw(coefficients)
    }
}

impl Sub for &Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: &Polynomial) -> Polynomial {
        let len = self.coefficients.len().max(rhs.coefficients.len());
        let mut coefficients = Vec::with_capacity(len);
        for i in 0..len {
            let a = self.coefficients.get(i).copied().unwrap_or(0.0);
            let b = rhs.coefficients.get(i).copied().unwrap_or(0.0);
            coefficients.push(a - b);
        }
        Polynomial::from_raw(coefficients)
    }
}

impl Mul for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: &Polynomial) -> Polynomial {
        let mut coefficients = vec![0.0; self.coefficients.len() + rhs.coefficients.len() - 1];
        for (i, &a) in self.coefficients.iter().enumerate() {
            for (j, &b) in rhs.coefficients.iter().enumerate() {
                coefficients[i + j] += a * b;
            }
        }
        Polynomial::from_raw(coefficients)
    }
}

impl Mul<f64> for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: f64) -> Polynomial {
        Polynomial::from_raw(self.coefficients.iter().map(|&c| c * rhs).collect())
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        Polynomial::from_raw(self.coefficients.iter().map(|&c| -c).collect())
    }
}

impl Add for Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: Polynomial) -> Polynomial {
        &self + &rhs
    }
}

impl Sub for Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: Polynomial) -> Polynomial {
        &self - &rhs
    }
}

impl Mul for Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: Polynomial) -> Polynomial {
        &self * &rhs
    }
}

impl Mul<f64> for Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: f64) -> Polynomial {
        &self * rhs
    }
}

impl Neg for Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        -&self
    }
}
