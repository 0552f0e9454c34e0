use complex_rs::complex::Complex;
use image::RgbImage;
use log::{debug, info};

use crate::error::RenderError;
use crate::graphics::color::Palette;
use crate::models::fractal::fractal_descriptor::FractalDescriptor;
use crate::models::fractal::newton_raphson::NewtonRaphson;
use crate::models::range::Range;
use crate::models::resolution::Resolution;
use crate::models::roots::RootRegistry;
use crate::result::RenderResult;

/// Maps pixel rows and columns onto the complex plane.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    x_start: f64,
    y_start: f64,
    x_increment: f64,
    y_increment: f64,
    min_coordinate: f64,
}

impl Viewport {
    pub fn new(resolution: Resolution, range: Range, min_coordinate: f64) -> Self {
        Self {
            x_start: range.min.x,
            y_start: range.min.y,
            x_increment: range.width() / resolution.nx as f64,
            y_increment: range.height() / resolution.ny as f64,
            min_coordinate,
        }
    }

    /// Start point of pixel (`row`, `column`). A part landing exactly on an
    /// axis is replaced with `min_coordinate`.
    pub fn point_at(&self, row: u32, column: u32) -> Complex {
        let x = self.x_start + column as f64 * self.x_increment;
        let y = self.y_start + row as f64 * self.y_increment;
        Complex::new(self.off_axis(x), self.off_axis(y))
    }

    fn off_axis(&self, coordinate: f64) -> f64 {
        if coordinate == 0.0 {
            self.min_coordinate
        } else {
            coordinate
        }
    }
}

#[derive(Debug, Clone)]
pub struct RenderOutput {
    pub image: RgbImage,
    /// Roots in the order they were discovered.
    pub roots: Vec<Complex>,
    pub maximal_index: usize,
}

pub struct FractalRenderer {
    newton: NewtonRaphson,
    palette: Palette,
    root_equality_tolerance: f64,
    min_coordinate: f64,
}

impl FractalRenderer {
    pub fn new(descriptor: &FractalDescriptor) -> RenderResult<Self> {
        Ok(Self {
            newton: descriptor.newton_raphson()?,
            palette: descriptor.palette()?,
            root_equality_tolerance: descriptor.root_equality_tolerance,
            min_coordinate: descriptor.min_coordinate,
        })
    }

    pub fn newton(&self) -> &NewtonRaphson {
        &self.newton
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Renders the fractal over `range`, one Newton run per pixel.
    ///
    /// Pixels are visited row by row and roots are numbered in that order,
    /// so the colours depend on the traversal.
    pub fn render(&self, resolution: Resolution, range: Range) -> RenderResult<RenderOutput> {
        if resolution.is_empty() {
            return Err(RenderError::EmptyResolution {
                nx: resolution.nx,
                ny: resolution.ny,
            });
        }

        info!("Polynomial: {}", self.newton.polynomial());
        info!("Derivative: {}", self.newton.derivative());
        info!(
            "Rendering {}x{} pixels over [{}, {}] x [{}, {}]",
            resolution.nx, resolution.ny, range.min.x, range.max.x, range.min.y, range.max.y
        );

        let viewport = Viewport::new(resolution, range, self.min_coordinate);
        let mut image = RgbImage::new(resolution.nx, resolution.ny);
        let mut registry = RootRegistry::with_tolerance(self.root_equality_tolerance);

        for row in 0..resolution.ny {
            for column in 0..resolution.nx {
                let start = viewport.point_at(row, column);
                let convergence = self.newton.iterate(start);
                let classification = registry.classify(convergence.point);
                if classification.registry_mutated {
                    debug!(
                        "Root #{} found at {} from {}",
                        registry.len() - 1,
                        convergence.point,
                        start
                    );
                }

                let color = self
                    .palette
                    .colorize(classification.index, convergence.iterations);
                image.put_pixel(column, row, color);
            }
        }

        info!(
            "Found {} roots, maximal root index {}",
            registry.len(),
            registry.maximal_index()
        );

        Ok(RenderOutput {
            image,
            maximal_index: registry.maximal_index(),
            roots: registry.into_roots(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::point::Point;
    use image::Rgb;

    fn unit_square() -> Range {
        Range::new(Point::new(-1.0, -1.0), Point::new(1.0, 1.0))
    }

    fn slot_of(palette: &Palette, color: &Rgb<u8>, iterations_floor: u32) -> Option<usize> {
        (0..palette.len()).find(|&slot| {
            (iterations_floor..iterations_floor + 200).any(|n| palette.colorize(slot, n) == *color)
        })
    }

    #[test]
    fn viewport_nudges_points_off_the_axes() {
        let viewport = Viewport::new(Resolution::new(2, 2), unit_square(), 0.0001);
        assert_eq!(viewport.point_at(0, 0), Complex::new(-1.0, -1.0));
        assert_eq!(viewport.point_at(0, 1), Complex::new(0.0001, -1.0));
        assert_eq!(viewport.point_at(1, 0), Complex::new(-1.0, 0.0001));
        assert_eq!(viewport.point_at(1, 1), Complex::new(0.0001, 0.0001));
    }

    #[test]
    fn viewport_rows_follow_y_and_columns_follow_x() {
        let range = Range::new(Point::new(-2.0, 1.0), Point::new(2.0, 3.0));
        let viewport = Viewport::new(Resolution::new(4, 2), range, 0.0001);
        assert_eq!(viewport.point_at(1, 3), Complex::new(1.0, 2.0));
    }

    #[test]
    fn two_by_two_render() {
        let renderer = FractalRenderer::new(&FractalDescriptor::default()).unwrap();
        let output = renderer.render(Resolution::new(2, 2), unit_square()).unwrap();

        assert_eq!(output.image.dimensions(), (2, 2));

        // -1 and the two complex cube roots of -1
        assert_eq!(output.roots.len(), 3);
        assert!((output.roots[0] - Complex::new(-1.0, 0.0)).abs() < 1e-9);
        assert_eq!(output.maximal_index, 4);
        for root in &output.roots {
            assert!(renderer.newton().polynomial().evaluate(*root).abs() < 1e-9);
        }

        let palette = renderer.palette();
        let top_left = slot_of(palette, output.image.get_pixel(0, 0), 30);
        let bottom_right = slot_of(palette, output.image.get_pixel(1, 1), 30);
        assert!(top_left.is_some());
        assert!(bottom_right.is_some());
        assert_ne!(top_left, bottom_right);

        // first sighting of -1 is numbered 1; row 1, column 0 (buffer x = 0,
        // y = 1) reaches it again and gets 0
        assert_eq!(top_left, Some(1));
        assert_eq!(slot_of(palette, output.image.get_pixel(0, 1), 30), Some(0));
        assert_eq!(*output.image.get_pixel(0, 1), Rgb([195, 0, 0]));

        // row 0, column 1 (buffer x = 1, y = 0) is the first to reach 0.5 - 0.866i
        assert_eq!(*output.image.get_pixel(1, 0), Rgb([0, 68, 0]));
    }

    #[test]
    fn every_pixel_is_written() {
        let descriptor = FractalDescriptor {
            palette: vec![[255, 255, 255]],
            ..FractalDescriptor::default()
        };
        let renderer = FractalRenderer::new(&descriptor).unwrap();
        let range = Range::new(Point::new(-2.0, -1.5), Point::new(2.0, 1.5));
        let output = renderer.render(Resolution::new(7, 5), range).unwrap();

        assert_eq!(output.image.dimensions(), (7, 5));
        // at least 30 steps per pixel, so nothing stays pure white
        assert!(output
            .image
            .pixels()
            .all(|pixel| pixel.0.iter().all(|&channel| channel <= 195)));
    }

    #[test]
    fn empty_resolution_is_rejected() {
        let renderer = FractalRenderer::new(&FractalDescriptor::default()).unwrap();
        let result = renderer.render(Resolution::new(0, 3), unit_square());
        assert!(matches!(
            result,
            Err(RenderError::EmptyResolution { nx: 0, ny: 3 })
        ));
    }

    #[test]
    fn non_positive_tolerance_is_rejected_before_rendering() {
        let descriptor = FractalDescriptor {
            iteration_tolerance: 0.0,
            ..FractalDescriptor::default()
        };
        assert!(matches!(
            FractalRenderer::new(&descriptor),
            Err(RenderError::InvalidTolerance(_))
        ));
    }

    #[test]
    fn other_polynomials_render_too() {
        let descriptor = FractalDescriptor::from_json(
            r#"{"polynomial": [{"re": -1, "im": 0}, {"re": 0, "im": 0}, {"re": 1, "im": 0}]}"#,
        )
        .unwrap();
        let renderer = FractalRenderer::new(&descriptor).unwrap();
        let range = Range::new(Point::new(-2.0, -2.0), Point::new(2.0, 2.0));
        let output = renderer.render(Resolution::new(4, 4), range).unwrap();

        assert_eq!(output.roots.len(), 2);
        assert!(output
            .roots
            .iter()
            .any(|root| (*root - Complex::ONE).abs() < 1e-9));
        assert!(output
            .roots
            .iter()
            .any(|root| (*root + Complex::ONE).abs() < 1e-9));
    }
}
