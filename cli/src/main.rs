pub mod commands;

use std::path::PathBuf;

use clap::Parser;
use commands::{inspect::InspectCommand, render::RenderCommand, Commands};
use complex_rs::complex::Complex;
use log::{error, info};
use newton_rs::{
    env,
    graphics::save_image,
    logger,
    models::{
        fractal::fractal_descriptor::FractalDescriptor, point::Point, range::Range,
        resolution::Resolution,
    },
    renderer::FractalRenderer,
    result::RenderResult,
};

/// Newton fractal renderer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

fn main() {
    env::init();
    logger::init();

    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Render(args) => render(args),
        Commands::Inspect(args) => inspect(args),
    };

    if let Err(e) = outcome {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

fn load_descriptor(path: Option<&PathBuf>) -> RenderResult<FractalDescriptor> {
    match path {
        Some(path) => FractalDescriptor::from_file(path),
        None => Ok(FractalDescriptor::default()),
    }
}

fn render(args: RenderCommand) -> RenderResult<()> {
    let descriptor = load_descriptor(args.fractal.as_ref())?;
    let output = match args.output {
        Some(output) => output,
        None => env::output_path(),
    };

    let resolution = Resolution::new(args.width, args.height);
    let range = Range::new(
        Point::new(args.x_min, args.y_min),
        Point::new(args.x_max, args.y_max),
    );

    let renderer = FractalRenderer::new(&descriptor)?;
    let rendered = renderer.render(resolution, range)?;
    for (i, root) in rendered.roots.iter().enumerate() {
        info!("Root {}: {}", i, root);
    }

    save_image(&rendered.image, &output)
}

fn inspect(args: InspectCommand) -> RenderResult<()> {
    let descriptor = load_descriptor(args.fractal.as_ref())?;
    let newton = descriptor.newton_raphson()?;

    info!("Polynomial: {}", newton.polynomial());
    info!("Derivative: {}", newton.derivative());

    let start = Complex::new(args.re, args.im);
    let convergence = newton.iterate(start);
    info!(
        "{} converged to {} after {} steps, |p(z)| = {:e}, angle {:.6} rad",
        start,
        convergence.point,
        convergence.iterations,
        newton.polynomial().evaluate(convergence.point).abs(),
        convergence.point.angle()
    );
    Ok(())
}
