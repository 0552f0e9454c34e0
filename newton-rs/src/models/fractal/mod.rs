pub mod fractal_descriptor;
pub mod newton_raphson;
