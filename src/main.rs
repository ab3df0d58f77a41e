// src/main.rs

//! Command-line domain-coloring plotter.
//!
//! Renders a function from the library over a rectangle of the complex
//! plane and writes the result as a binary PPM image. Settings come from an
//! optional JSON config file; any flag given on the command line overrides
//! the corresponding config value.

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use argand::{render, FunctionKind, ImageBuffer, PlotConfig};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to a JSON configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Function to plot (see --list for names).
    #[arg(short, long)]
    function: Option<String>,

    /// Image width in pixels.
    #[arg(long)]
    width: Option<usize>,

    /// Image height in pixels.
    #[arg(long)]
    height: Option<usize>,

    /// Left edge of the real range.
    #[arg(long)]
    re_min: Option<f64>,

    /// Right edge of the real range.
    #[arg(long)]
    re_max: Option<f64>,

    /// Bottom edge of the imaginary range.
    #[arg(long)]
    im_min: Option<f64>,

    /// Top edge of the imaginary range.
    #[arg(long)]
    im_max: Option<f64>,

    /// Output image path (binary PPM).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// List available function names and exit.
    #[arg(long)]
    list: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if args.list {
        for name in FunctionKind::available_names() {
            println!("{name}");
        }
        return Ok(());
    }

    let mut config = match &args.config {
        Some(path) => PlotConfig::load(path)?,
        None => PlotConfig::default(),
    };

    if let Some(name) = &args.function {
        config.function = match FunctionKind::from_name(name) {
            Some(kind) => kind,
            None => bail!(
                "unknown function '{}'; available: {}",
                name,
                FunctionKind::available_names().join(", ")
            ),
        };
    }
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if let Some(re_min) = args.re_min {
        config.re_min = re_min;
    }
    if let Some(re_max) = args.re_max {
        config.re_max = re_max;
    }
    if let Some(im_min) = args.im_min {
        config.im_min = im_min;
    }
    if let Some(im_max) = args.im_max {
        config.im_max = im_max;
    }
    if let Some(output) = args.output {
        config.output = output;
    }

    if config.width == 0 || config.height == 0 {
        bail!("image dimensions must be non-zero");
    }

    info!(
        "plotting {} on {}x{} over [{}, {}] x [{}, {}]",
        config.function, config.width, config.height,
        config.re_min, config.re_max, config.im_min, config.im_max
    );

    let mut image = ImageBuffer::new(config.width, config.height);
    let function = config.function;
    render(|z| function.apply(z), &config.viewport(), &mut image);

    let file = File::create(&config.output)
        .with_context(|| format!("failed to create {}", config.output.display()))?;
    image
        .write_ppm(BufWriter::new(file))
        .with_context(|| format!("failed to write {}", config.output.display()))?;

    info!("wrote {}", config.output.display());
    Ok(())
}
