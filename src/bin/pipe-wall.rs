//! `pipe-wall`: simulates transient conduction through a pipe wall.
//!
//! **Usage:**
//! ```text
//! pipe-wall <PARAMS> <SAMPLES> [--delimiter ;]
//! ```
//!
//! Reads the JSON parameter file and the initial node temperatures on the
//! first line of the sample file, then prints the final node temperatures
//! joined by the delimiter. Temperatures print in the scale of the input
//! files, kelvin or degrees Celsius.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use twine_core::Model;

use radial_conduction::{
    config::{ParameterFile, format_profile, read_samples, temperatures},
    models::thermal::pipe_wall::PipeWall,
};

/// Simulate transient radial conduction through a pipe wall.
#[derive(Parser)]
#[command(name = "pipe-wall")]
struct Args {
    /// JSON parameter file.
    params: PathBuf,

    /// File whose first line holds the `n + 1` initial node temperatures.
    samples: PathBuf,

    /// Field separator for the sample line and the printed profile.
    #[arg(long, default_value_t = ';')]
    delimiter: char,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let params = ParameterFile::load(&args.params)
        .and_then(|file| file.to_parameters())
        .with_context(|| format!("loading parameters from {}", args.params.display()))?;

    let samples = read_samples(&args.samples, args.delimiter)
        .with_context(|| format!("loading samples from {}", args.samples.display()))?;

    let model = PipeWall::new(params).context("invalid parameters")?;
    let profile = model
        .call(&temperatures(&samples))
        .context("simulation failed")?;

    println!("{}", format_profile(&profile, args.delimiter));

    Ok(())
}
