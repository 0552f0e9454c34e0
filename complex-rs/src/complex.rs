use std::fmt;

use serde::{Deserialize, Serialize};

/// A complex number with `f64` parts.
///
/// Every operation returns a new value, operands are never mutated.
/// Equality is exact field comparison and is only meant for sentinels such
/// as [`Complex::ZERO`]; roots are matched by distance, see `abs`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub const ZERO: Complex = Complex { re: 0.0, im: 0.0 };
    pub const ONE: Complex = Complex { re: 1.0, im: 0.0 };

    pub fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Squared modulus, `re² + im²`.
    pub fn arg_sq(self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// Euclidean norm, `sqrt(re² + im²)`.
    pub fn abs(self) -> f64 {
        self.arg_sq().sqrt()
    }

    /// `atan(im / re)`.
    ///
    /// Single quadrant only: points in the left half-plane report the angle
    /// of their reflection through the origin. Informational, the iteration
    /// never relies on it.
    pub fn angle(self) -> f64 {
        (self.im / self.re).atan()
    }

    pub fn conj(self) -> Self {
        Self {
            re: self.re,
            im: -self.im,
        }
    }
}

impl From<f64> for Complex {
    fn from(re: f64) -> Self {
        Self { re, im: 0.0 }
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} + {}i)", self.re, self.im)
    }
}

impl std::ops::Add for Complex {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            re: self.re + rhs.re,
            im: self.im + rhs.im,
        }
    }
}

impl std::ops::Sub for Complex {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            re: self.re - rhs.re,
            im: self.im - rhs.im,
        }
    }
}

impl std::ops::Mul for Complex {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Complex {
            re: self.re * rhs.re - self.im * rhs.im,
            im: self.re * rhs.im + self.im * rhs.re,
        }
    }
}

impl std::ops::Div for Complex {
    type Output = Self;

    // Not guarded against a zero divisor: the result carries inf/NaN.
    fn div(self, rhs: Self) -> Self {
        let dividend = self * rhs.conj();
        let divisor = rhs.arg_sq();
        Complex {
            re: dividend.re / divisor,
            im: dividend.im / divisor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn random_complex(rng: &mut StdRng) -> Complex {
        Complex::new(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0))
    }

    #[test]
    fn multiply_follows_the_complex_product() {
        let a = Complex::new(1.0, 2.0);
        let b = Complex::new(3.0, -1.0);
        assert_eq!(a * b, Complex::new(5.0, 5.0));
    }

    #[test]
    fn add_and_multiply_commute() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let a = random_complex(&mut rng);
            let b = random_complex(&mut rng);
            assert_eq!(a + b, b + a);
            assert_eq!(a * b, b * a);
        }
    }

    #[test]
    fn division_undoes_multiplication() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let a = random_complex(&mut rng);
            let b = random_complex(&mut rng);
            if b == Complex::ZERO {
                continue;
            }
            let back = (a * b) / b;
            assert!((back - a).abs() < 1e-9, "{} / {} gave {}", a * b, b, back);
        }
    }

    #[test]
    fn division_by_zero_is_not_finite() {
        let q = Complex::ONE / Complex::ZERO;
        assert!(!q.re.is_finite());
        assert!(!q.im.is_finite());
    }

    #[test]
    fn subtraction_leaves_operands_alone() {
        let a = Complex::new(2.0, 3.0);
        let b = Complex::new(0.5, -1.0);
        let c = a - b;
        assert_eq!(c, Complex::new(1.5, 4.0));
        assert_eq!(a, Complex::new(2.0, 3.0));
        assert_eq!(b, Complex::new(0.5, -1.0));
    }

    #[test]
    fn absolute_value_and_angle() {
        let z = Complex::new(3.0, 4.0);
        assert_eq!(z.abs(), 5.0);
        assert_eq!(z.arg_sq(), 25.0);
        assert!((Complex::new(1.0, 1.0).angle() - std::f64::consts::FRAC_PI_4).abs() < 1e-12);
        // left half-plane folds onto the right one
        assert!((Complex::new(-1.0, -1.0).angle() - std::f64::consts::FRAC_PI_4).abs() < 1e-12);
    }

    #[test]
    fn display_matches_parenthesised_form() {
        assert_eq!(Complex::new(1.0, 0.0).to_string(), "(1 + 0i)");
        assert_eq!(Complex::new(-0.5, 2.25).to_string(), "(-0.5 + 2.25i)");
    }

    #[test]
    fn deserializes_from_json() {
        let z: Complex = serde_json::from_str(r#"{"re": 1.5, "im": -2}"#).unwrap();
        assert_eq!(z, Complex::new(1.5, -2.0));
    }
}
