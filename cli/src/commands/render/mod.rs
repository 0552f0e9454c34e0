use std::path::PathBuf;

use clap::Parser;

/// 🌀 Render Command
///
/// Arguments come in a fixed order: image size, then the bounds of the
/// rectangle, then the output file.
#[derive(Parser, Debug)]
#[command(name = "render", about = "🌀 Render a Newton fractal to an image file.", long_about = None)]
pub struct RenderCommand {
    /// 📏 Image width in pixels
    #[arg(value_name = "WIDTH")]
    pub width: u32,

    /// 📐 Image height in pixels
    #[arg(value_name = "HEIGHT")]
    pub height: u32,

    /// ⬅️ Real part of the left edge
    #[arg(value_name = "X_MIN", allow_negative_numbers = true)]
    pub x_min: f64,

    /// ➡️ Real part of the right edge
    #[arg(value_name = "X_MAX", allow_negative_numbers = true)]
    pub x_max: f64,

    /// ⬆️ Imaginary part of the first row
    #[arg(value_name = "Y_MIN", allow_negative_numbers = true)]
    pub y_min: f64,

    /// ⬇️ Imaginary part of the last row
    #[arg(value_name = "Y_MAX", allow_negative_numbers = true)]
    pub y_max: f64,

    /// 💾 Output image
    ///
    /// The format follows the extension. Falls back to $NEWTON_OUTPUT, then `out.png`.
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// 🧾 Fractal descriptor
    ///
    /// JSON file with the polynomial, tolerances and palette. Defaults to x³ + 1.
    #[arg(short, long, value_name = "FILE")]
    pub fractal: Option<PathBuf>,
}
