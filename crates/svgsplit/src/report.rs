//! Per-run extraction results.

use std::{
    fmt,
    path::{Path, PathBuf},
};

/// What happened to one identifier-bearing group.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The component was written to `path`.
    Extracted {
        id: String,
        path: PathBuf,
        /// False when the fallback box replaced an estimate.
        estimated: bool,
    },
    /// The group contains identified sub-groups and was not extracted.
    Skipped { id: String },
    /// Writing the component failed.
    Failed { id: String, message: String },
}

impl Outcome {
    /// Returns the group identifier.
    pub fn id(&self) -> &str {
        match self {
            Self::Extracted { id, .. } | Self::Skipped { id } | Self::Failed { id, .. } => id,
        }
    }
}

/// The results of one extraction run, in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionReport {
    output_dir: PathBuf,
    outcomes: Vec<Outcome>,
}

impl ExtractionReport {
    pub(crate) fn new(output_dir: PathBuf) -> Self {
        Self {
            output_dir,
            outcomes: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, outcome: Outcome) {
        self.outcomes.push(outcome);
    }

    /// Returns the absolute output directory.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Returns every outcome, in document order.
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    /// Number of components written.
    pub fn extracted(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Extracted { .. }))
    }

    /// Number of category groups skipped.
    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Skipped { .. }))
    }

    /// Number of components that could not be written.
    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Failed { .. }))
    }

    /// Number of written components that used the fallback box.
    pub fn fallback_boxes(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Extracted { estimated: false, .. }))
    }

    /// Identifiers of the written components, in document order.
    pub fn extracted_ids(&self) -> impl Iterator<Item = &str> {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, Outcome::Extracted { .. }))
            .map(Outcome::id)
    }

    fn count(&self, predicate: impl Fn(&Outcome) -> bool) -> usize {
        self.outcomes.iter().filter(|o| predicate(*o)).count()
    }
}

impl fmt::Display for ExtractionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Extraction complete!")?;
        writeln!(f, "Components extracted: {}", self.extracted())?;
        writeln!(f, "Category groups skipped: {}", self.skipped())?;
        if self.failed() > 0 {
            writeln!(f, "Components failed: {}", self.failed())?;
        }
        write!(f, "Output directory: {}", self.output_dir.display())
    }
}
