use std::path::Path;

use complex_rs::complex::Complex;
use image::Rgb;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::RenderError;
use crate::graphics::color::{Palette, CLASSIC_PALETTE};
use crate::models::polynomial::Polynomial;
use crate::models::roots::ROOT_EQUALITY_TOLERANCE;
use crate::result::RenderResult;

use super::newton_raphson::{NewtonRaphson, ITERATION_TOLERANCE, MAX_ITERATIONS};

/// Start points with an exactly zero part are nudged by this much.
pub const MIN_COORDINATE: f64 = 0.0001;

/// Everything that defines a Newton fractal apart from the viewport.
///
/// Loaded from JSON, every field may be left out and falls back to the
/// `x³ + 1` fractal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FractalDescriptor {
    pub polynomial: Polynomial,
    pub max_iterations: u32,
    pub iteration_tolerance: f64,
    pub root_equality_tolerance: f64,
    pub min_coordinate: f64,
    pub step_limit: Option<u32>,
    pub palette: Vec<[u8; 3]>,
}

impl Default for FractalDescriptor {
    fn default() -> Self {
        Self {
            polynomial: Polynomial::new(vec![
                Complex::ONE,
                Complex::ZERO,
                Complex::ZERO,
                Complex::ONE,
            ]),
            max_iterations: MAX_ITERATIONS,
            iteration_tolerance: ITERATION_TOLERANCE,
            root_equality_tolerance: ROOT_EQUALITY_TOLERANCE,
            min_coordinate: MIN_COORDINATE,
            step_limit: None,
            palette: CLASSIC_PALETTE.iter().map(|color| color.0).collect(),
        }
    }
}

impl FractalDescriptor {
    pub fn from_json(descriptor: &str) -> RenderResult<Self> {
        Ok(serde_json::from_str(descriptor)?)
    }

    pub fn to_json(&self) -> RenderResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_file(path: &Path) -> RenderResult<Self> {
        debug!("Loading fractal descriptor from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Fails on a tolerance that is not strictly positive: converged points
    /// keep taking zero-length steps that would never use up the budget.
    pub fn newton_raphson(&self) -> RenderResult<NewtonRaphson> {
        if self.iteration_tolerance.is_nan() || self.iteration_tolerance <= 0.0 {
            return Err(RenderError::InvalidTolerance(self.iteration_tolerance));
        }
        Ok(NewtonRaphson::new(self.polynomial.clone())
            .with_max_iterations(self.max_iterations)
            .with_tolerance(self.iteration_tolerance)
            .with_step_limit(self.step_limit))
    }

    pub fn palette(&self) -> RenderResult<Palette> {
        Palette::new(self.palette.iter().map(|&channels| Rgb(channels)).collect())
    }
}
