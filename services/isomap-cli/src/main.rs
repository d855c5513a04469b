//! Contour map extraction CLI.
//!
//! Reads a PPM raster, runs the parallel marching-squares pipeline with
//! the requested number of worker threads and writes the contour map to
//! the output path. The contour tile atlas is loaded from `./contours`.
//!
//! Every failure (bad arguments, unreadable input, allocation failure)
//! is reported on standard error and exits with status 1; on success the
//! output file is fully written before the process exits with status 0.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use isoline::{render_contour_map, STEP};
use raster::{read_ppm, write_ppm, ContourAtlas, DEFAULT_ATLAS_DIR};

#[derive(Parser, Debug)]
#[command(name = "isomap")]
#[command(about = "Extract a contour map from a raster image")]
struct Args {
    /// Input image (binary PPM)
    input: PathBuf,

    /// Output image path
    output: PathBuf,

    /// Number of worker threads
    threads: usize,
}

fn main() -> ExitCode {
    // Argument errors print the usage message and exit 1.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            eprint!("{err}");
            return ExitCode::FAILURE;
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let image = read_ppm(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    info!(
        input = %args.input.display(),
        width = image.width(),
        height = image.height(),
        threads = args.threads,
        "loaded input image"
    );

    let atlas = ContourAtlas::load(Path::new(DEFAULT_ATLAS_DIR), STEP)
        .context("failed to load contour atlas")?;

    let output = render_contour_map(image, &atlas, args.threads)?;

    write_ppm(&output, &args.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    info!(
        output = %args.output.display(),
        width = output.width(),
        height = output.height(),
        "wrote contour map"
    );
    Ok(())
}
