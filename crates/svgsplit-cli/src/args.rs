//! Command-line argument definitions for the svgsplit CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control the input file, the output directory,
//! configuration file selection, and logging verbosity.

use clap::Parser;

/// Split a sprite-sheet SVG into one standalone SVG per named group
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input SVG file
    #[arg(help = "Path to the input SVG file")]
    pub input: String,

    /// Directory the extracted components are written to
    #[arg(help = "Output directory [default: extracted_components]")]
    pub output_dir: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
