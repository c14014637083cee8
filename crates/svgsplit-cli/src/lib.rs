//! CLI logic for the svgsplit component extractor.
//!
//! This module contains the core CLI logic: configuration discovery, input
//! loading and the extraction run itself.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::path::{Path, PathBuf};

use log::info;

use svgsplit::{ExtractionReport, Extractor, SvgSplitError};

/// Run the svgsplit CLI application
///
/// This function reads the input file, parses it and extracts every
/// component into the output directory.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `SvgSplitError` for:
/// - Missing or unreadable input files
/// - Configuration loading errors
/// - Parsing errors
/// - An output directory that cannot be created
///
/// Failures of individual components are not errors; they are recorded in
/// the returned report.
pub fn run(args: &Args) -> Result<ExtractionReport, SvgSplitError> {
    info!(
        input_path = args.input,
        output_dir:? = args.output_dir;
        "Processing document"
    );

    let app_config = config::load_config(args.config.as_ref())?;
    let output_dir = resolve_output_dir(args, app_config.output().directory());

    let source = Extractor::read_source(Path::new(&args.input))?;

    let extractor = Extractor::new(app_config);
    let document = extractor.parse(&source)?;
    let report = extractor.extract(&document, &output_dir)?;

    info!(output_dir = report.output_dir().display().to_string(); "Components exported successfully");

    Ok(report)
}

/// The positional argument wins over the configured directory.
fn resolve_output_dir(args: &Args, configured: &str) -> PathBuf {
    args.output_dir
        .as_deref()
        .map_or_else(|| PathBuf::from(configured), PathBuf::from)
}
