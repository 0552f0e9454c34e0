use complex_rs::complex::Complex;

use crate::models::polynomial::Polynomial;

/// Number of small steps a start point gets.
pub const MAX_ITERATIONS: u32 = 30;

/// Steps at least this long do not use up the iteration budget.
pub const ITERATION_TOLERANCE: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Convergence {
    pub point: Complex,
    /// Every step taken, large ones included.
    pub iterations: u32,
}

/// Newton–Raphson root finder for a polynomial, `z ← z − p(z) / p'(z)`.
#[derive(Debug, Clone)]
pub struct NewtonRaphson {
    polynomial: Polynomial,
    derivative: Polynomial,
    max_iterations: u32,
    tolerance: f64,
    step_limit: Option<u32>,
}

impl NewtonRaphson {
    pub fn new(polynomial: Polynomial) -> Self {
        let derivative = polynomial.derive();
        Self {
            polynomial,
            derivative,
            max_iterations: MAX_ITERATIONS,
            tolerance: ITERATION_TOLERANCE,
            step_limit: None,
        }
    }

    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Hard cap on the total number of steps, large ones included.
    pub fn with_step_limit(mut self, step_limit: Option<u32>) -> Self {
        self.step_limit = step_limit;
        self
    }

    pub fn polynomial(&self) -> &Polynomial {
        &self.polynomial
    }

    pub fn derivative(&self) -> &Polynomial {
        &self.derivative
    }

    /// One Newton step, returns the next point and the step that led there.
    ///
    /// A vanishing derivative is not special-cased, the step turns into
    /// inf/NaN and so does every point after it.
    pub fn step(&self, z: Complex) -> (Complex, Complex) {
        let delta = self.polynomial.evaluate(z) / self.derivative.evaluate(z);
        (z - delta, delta)
    }

    /// Iterates from `start` until `max_iterations` steps shorter than the
    /// tolerance have been taken.
    ///
    /// This never exits early on convergence: every start point spends the
    /// whole budget, and long steps are repeated on top of it. The returned
    /// count includes those repeats, which is what shades the pixel.
    pub fn iterate(&self, start: Complex) -> Convergence {
        let mut z = start;
        let mut budget = 0;
        let mut iterations = 0;

        while budget < self.max_iterations {
            if self.step_limit.is_some_and(|limit| iterations >= limit) {
                break;
            }

            let (next, delta) = self.step(z);
            z = next;
            iterations += 1;

            if delta.abs() >= self.tolerance {
                continue;
            }
            // NaN steps end up here too
            budget += 1;
        }

        Convergence {
            point: z,
            iterations,
        }
    }
}
