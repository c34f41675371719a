//! digiscan CLI: segment a grayscale image into candidate digit regions.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use common::log_setup::{setup_logging, LogOptions};
use serde::Serialize;

use digiscan::{
    binarize, BinaryRaster, ComponentExtractor, ExtractionDiagnostics, ExtractorConfig, Region,
};

#[derive(Debug, Parser)]
#[command(name = "digiscan")]
#[command(about = "Find candidate digit regions in a thresholded image")]
#[command(version)]
struct Cli {
    /// Path to the input image. Color images are converted to 8-bit luma.
    image: PathBuf,

    /// Luma values at or above this become foreground.
    #[arg(long, default_value_t = 128)]
    threshold: u8,

    /// Extractor config (JSON). Missing fields keep their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Report regions in raster pixels instead of display coordinates.
    /// Ignored when --config is given.
    #[arg(long)]
    raster_space: bool,

    /// Print regions and diagnostics as JSON.
    #[arg(long)]
    json: bool,

    /// Also write daily rolling log files to this directory.
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

#[derive(Serialize)]
struct Report<'a> {
    image: &'a Path,
    width: usize,
    height: usize,
    threshold: u8,
    regions: &'a [Region],
    diagnostics: ExtractionDiagnostics,
}

fn load_config(cli: &Cli) -> anyhow::Result<ExtractorConfig> {
    match &cli.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            ExtractorConfig::from_json(&json)
                .with_context(|| format!("Failed to parse config {}", path.display()))
        }
        None if cli.raster_space => Ok(ExtractorConfig::raster_space()),
        None => Ok(ExtractorConfig::default()),
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = load_config(cli)?;
    let extractor = ComponentExtractor::from_config(config);

    let image = image::open(&cli.image)
        .with_context(|| format!("Failed to open image {}", cli.image.display()))?
        .to_luma8();
    let width = image.width() as usize;
    let height = image.height() as usize;
    tracing::info!(
        "Loaded {} ({}x{}), threshold {}",
        cli.image.display(),
        width,
        height,
        cli.threshold
    );

    let binary = binarize(image.as_raw(), cli.threshold);
    let raster = BinaryRaster::new(&binary, width, height).context("Invalid raster")?;
    let result = extractor.extract_with_diagnostics(&raster);

    if cli.json {
        let report = Report {
            image: &cli.image,
            width,
            height,
            threshold: cli.threshold,
            regions: &result.regions,
            diagnostics: result.diagnostics,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for region in &result.regions {
            println!(
                "{:8.2} {:8.2} {:8.2} {:8.2}",
                region.x, region.y, region.width, region.height
            );
        }
        tracing::info!(
            "{} regions ({} components, {} at boundary, {} too small)",
            result.diagnostics.accepted,
            result.diagnostics.components,
            result.diagnostics.rejected_boundary,
            result.diagnostics.rejected_area
        );
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if common::is_debug() { "debug" } else { "info" };
    let mut log_options = LogOptions::new(level, "digiscan");
    if let Some(log_dir) = &cli.log_dir {
        log_options = log_options.with_log_dir(log_dir);
    }
    setup_logging(&log_options);

    run(&cli)
}
