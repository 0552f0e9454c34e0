use clap::Subcommand;

use self::{inspect::InspectCommand, render::RenderCommand};

pub mod inspect;
pub mod render;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 🌀 Render
    ///
    /// Render a Newton fractal over a rectangle of the complex plane and save it as an image.
    Render(RenderCommand),

    /// 🔍 Inspect
    ///
    /// Print the polynomial, its derivative and where a single start point converges.
    Inspect(InspectCommand),
}
