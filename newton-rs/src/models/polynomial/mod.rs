use std::fmt;

use complex_rs::complex::Complex;
use serde::{Deserialize, Serialize};

/// Polynomial with complex coefficients, `coefficients[i]` belongs to `x^i`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polynomial {
    coefficients: Vec<Complex>,
}

impl Polynomial {
    pub fn new(coefficients: Vec<Complex>) -> Self {
        Self { coefficients }
    }

    /// Appends the coefficient of the next higher power.
    pub fn push(&mut self, coefficient: Complex) {
        self.coefficients.push(coefficient);
    }

    pub fn coefficients(&self) -> &[Complex] {
        &self.coefficients
    }

    /// `None` for the empty polynomial.
    pub fn degree(&self) -> Option<usize> {
        self.coefficients.len().checked_sub(1)
    }

    pub fn evaluate(&self, point: Complex) -> Complex {
        let mut value = Complex::ZERO;
        let mut power = point;
        for (i, &coefficient) in self.coefficients.iter().enumerate() {
            if i == 0 {
                value = value + coefficient;
                continue;
            }
            value = value + coefficient * power;
            power = power * point;
        }
        value
    }

    pub fn evaluate_real(&self, point: f64) -> Complex {
        self.evaluate(Complex::from(point))
    }

    /// Symbolic derivative. Constant and empty polynomials derive to the
    /// empty polynomial.
    pub fn derive(&self) -> Polynomial {
        Polynomial {
            coefficients: self
                .coefficients
                .iter()
                .enumerate()
                .skip(1)
                .map(|(i, &coefficient)| coefficient * Complex::from(i as f64))
                .collect(),
        }
    }
}

impl FromIterator<Complex> for Polynomial {
    fn from_iter<I: IntoIterator<Item = Complex>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, coefficient) in self.coefficients.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{}{}", coefficient, "x".repeat(i))?;
        }
        Ok(())
    }
}
