use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
pub struct InspectCommand {
    #[arg(short, long, value_name = "FILE")]
    pub fractal: Option<PathBuf>,

    /// Real part of the start point
    #[arg(long, allow_negative_numbers = true, default_value_t = -1.0)]
    pub re: f64,

    /// Imaginary part of the start point
    #[arg(long, allow_negative_numbers = true, default_value_t = 0.0)]
    pub im: f64,
}
