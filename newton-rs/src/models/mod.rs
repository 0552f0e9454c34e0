pub mod fractal;
pub mod point;
pub mod polynomial;
pub mod range;
pub mod resolution;
pub mod roots;
