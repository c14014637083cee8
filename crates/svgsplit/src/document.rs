//! Loading the source document.
//!
//! A [`SourceDocument`] is the parsed input tree together with the text it
//! was parsed from. It is immutable once loaded; everything later in the
//! pipeline borrows nodes from it.
//!
//! Entities declared in an internal DTD subset are resolved by the parser.
//! Their references remain in the source text, so a document that declares
//! any cannot have its groups copied out verbatim.

use std::{fs, io, path::Path};

use log::{debug, info};
use roxmltree::{Document, Node, ParsingOptions};

use crate::error::SvgSplitError;

/// Reads the input file into memory.
///
/// # Errors
///
/// Returns [`SvgSplitError::NotFound`] when `path` does not resolve and
/// [`SvgSplitError::Io`] for any other read failure.
pub fn read_source(path: &Path) -> Result<String, SvgSplitError> {
    match fs::read_to_string(path) {
        Ok(text) => {
            debug!(path = path.display().to_string(), bytes = text.len(); "Read source document");
            Ok(text)
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            Err(SvgSplitError::NotFound(path.to_path_buf()))
        }
        Err(err) => Err(err.into()),
    }
}

/// A parsed input document.
pub struct SourceDocument<'input> {
    text: &'input str,
    tree: Document<'input>,
    declares_entities: bool,
}

impl<'input> SourceDocument<'input> {
    /// Parses `text` into a document tree.
    ///
    /// A `<!DOCTYPE>` declaration is accepted, since design tools commonly
    /// emit one.
    ///
    /// # Errors
    ///
    /// Returns [`SvgSplitError::Parse`] when `text` is not well-formed XML.
    /// No partial tree is ever returned.
    pub fn parse(text: &'input str) -> Result<Self, SvgSplitError> {
        let options = ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        };

        let tree = Document::parse_with_options(text, options)
            .map_err(|err| SvgSplitError::new_parse_error(err, text))?;

        let root = tree.root_element();
        let declares_entities = text[..root.range().start].contains("<!ENTITY");
        info!(
            root = root.tag_name().name(),
            nodes = tree.descendants().count(),
            declares_entities = declares_entities;
            "Parsed source document"
        );

        Ok(Self {
            text,
            tree,
            declares_entities,
        })
    }

    /// Returns the root element of the document.
    pub fn root(&self) -> Node<'_, 'input> {
        self.tree.root_element()
    }

    /// Returns the source text the document was parsed from.
    pub fn text(&self) -> &'input str {
        self.text
    }

    /// Returns true when the prolog declares entities, so that the source
    /// text may hold references only this document can resolve.
    pub fn declares_entities(&self) -> bool {
        self.declares_entities
    }

    /// Returns the exact source text of `node`, including all of its descendants.
    pub fn source_of(&self, node: Node<'_, 'input>) -> &'input str {
        &self.text[node.range()]
    }
}

impl std::fmt::Debug for SourceDocument<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceDocument")
            .field("root", &self.root().tag_name().name())
            .field("len", &self.text.len())
            .field("declares_entities", &self.declares_entities)
            .finish()
    }
}
