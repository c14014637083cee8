//! svgsplit - split a sprite-sheet style SVG into one file per named group.
//!
//! The pipeline loads a document, classifies every identified group as a
//! component or a category, estimates each component's bounding box and
//! writes it as a standalone SVG named after its identifier.

pub mod classify;
pub mod config;
pub mod document;
pub mod emit;
pub mod estimate;

mod error;
mod report;

pub use svgsplit_core::geometry;

pub use document::SourceDocument;
pub use error::SvgSplitError;
pub use report::{ExtractionReport, Outcome};

use std::{fs, path::Path};

use log::{debug, info, warn};

use classify::{Classified, Component};
use config::AppConfig;
use emit::Emitter;
use geometry::Bounds;

/// Extracts components from SVG documents.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::Path;
///
/// use svgsplit::{Extractor, config::AppConfig};
///
/// let extractor = Extractor::new(AppConfig::default());
///
/// let source = Extractor::read_source(Path::new("symbols.svg"))
///     .expect("Failed to read input");
/// let document = extractor.parse(&source)
///     .expect("Failed to parse input");
///
/// let report = extractor.extract(&document, Path::new("extracted_components"))
///     .expect("Failed to create output directory");
/// println!("{report}");
/// ```
#[derive(Debug, Default)]
pub struct Extractor {
    config: AppConfig,
}

impl Extractor {
    /// Create a new extractor with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Read an input file.
    ///
    /// # Errors
    ///
    /// Returns [`SvgSplitError::NotFound`] when the file does not exist and
    /// [`SvgSplitError::Io`] when it cannot be read.
    pub fn read_source(path: &Path) -> Result<String, SvgSplitError> {
        document::read_source(path)
    }

    /// Parse source text into a document.
    ///
    /// # Errors
    ///
    /// Returns [`SvgSplitError::Parse`] when the text is not well-formed XML.
    pub fn parse<'input>(&self, source: &'input str) -> Result<SourceDocument<'input>, SvgSplitError> {
        info!("Parsing source document");
        SourceDocument::parse(source)
    }

    /// Extract every component of `document` into `output_dir`.
    ///
    /// The directory and its parents are created when missing. Components
    /// are processed in document order and independently of each other: a
    /// component that cannot be written is recorded as
    /// [`Outcome::Failed`] and the run continues.
    ///
    /// # Errors
    ///
    /// Returns [`SvgSplitError::Io`] only when the output directory cannot
    /// be created.
    pub fn extract(
        &self,
        document: &SourceDocument<'_>,
        output_dir: &Path,
    ) -> Result<ExtractionReport, SvgSplitError> {
        fs::create_dir_all(output_dir)?;
        let output_dir = fs::canonicalize(output_dir).unwrap_or_else(|_| output_dir.to_path_buf());
        info!(output_dir = output_dir.display().to_string(); "Extracting components");

        let emitter = Emitter::new(self.config.output());
        let mut report = ExtractionReport::new(output_dir.clone());

        for classified in classify::classify(document.root()) {
            let component = match classified {
                Classified::Category { id } => {
                    report.push(Outcome::Skipped { id: id.to_string() });
                    continue;
                }
                Classified::Component(component) => component,
            };

            let (bounds, estimated) = self.bounds_for(&component);
            let contents = emitter.render(document, &component, bounds);

            let outcome = match emitter.write(&output_dir, component.id(), &contents) {
                Ok(path) => {
                    if report.extracted_ids().any(|id| id == component.id()) {
                        warn!(id = component.id(); "Duplicate identifier, previous file overwritten");
                    }
                    Outcome::Extracted {
                        id: component.id().to_string(),
                        path,
                        estimated,
                    }
                }
                Err(err) => Outcome::Failed {
                    id: component.id().to_string(),
                    message: err.to_string(),
                },
            };
            report.push(outcome);
        }

        info!(
            extracted = report.extracted(),
            skipped = report.skipped(),
            failed = report.failed();
            "Extraction finished"
        );
        Ok(report)
    }

    /// Render the standalone document for one component.
    pub fn render<'input>(
        &self,
        document: &SourceDocument<'input>,
        component: &Component<'_, 'input>,
        bounds: Bounds,
    ) -> String {
        Emitter::new(self.config.output()).render(document, component, bounds)
    }

    /// Returns the component box and whether it was estimated rather than
    /// substituted by the fallback box.
    fn bounds_for(&self, component: &Component<'_, '_>) -> (Bounds, bool) {
        let geometry = self.config.geometry();
        match estimate::estimate_bounds(component.node(), geometry.padding()) {
            Some(bounds) => (bounds, true),
            None => {
                warn!(id = component.id(); "Could not calculate bounding box for {}, using default", component.id());
                debug!(fallback:? = geometry.fallback(); "Fallback box");
                (geometry.fallback(), false)
            }
        }
    }
}
