//! Output document emission.
//!
//! A component is wrapped in a fresh `<svg>` root carrying the namespaces,
//! size and `viewBox` it needs to stand alone. The group itself is copied
//! verbatim from the source text, then the whole document is re-indented.
//! When re-indenting fails the unformatted document is used instead.
//!
//! A source that declares its own entities is the exception: references to
//! them would dangle in the output, so the group is serialized from the
//! parsed tree instead, with every reference already resolved.

use std::{
    borrow::Cow,
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use log::{error, info, warn};
use quick_xml::{
    Reader, Writer,
    escape::escape,
    events::{BytesEnd, BytesStart, BytesText, Event},
};
use roxmltree::{Node, NodeType};
use thiserror::Error;

use svgsplit_core::geometry::Bounds;

use crate::{classify::Component, config::OutputConfig, document::SourceDocument};

/// The SVG namespace declared as the default namespace of every output document.
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#;

const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

/// Errors affecting a single output document.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Error saving '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Identifier '{0}' cannot be used as a file name")]
    InvalidFileName(String),

    #[error("Formatting error: {0}")]
    Format(String),
}

/// Builds and writes standalone documents for components.
#[derive(Debug, Clone, Copy)]
pub struct Emitter<'c> {
    config: &'c OutputConfig,
}

impl<'c> Emitter<'c> {
    /// Creates an emitter using the given output settings.
    pub fn new(config: &'c OutputConfig) -> Self {
        Self { config }
    }

    /// Renders the complete output document for `component`.
    ///
    /// The result is pretty-printed when possible, and the unformatted
    /// document otherwise.
    pub fn render<'input>(
        &self,
        document: &SourceDocument<'input>,
        component: &Component<'_, 'input>,
        bounds: Bounds,
    ) -> String {
        let raw = self.render_raw(document, component, bounds);
        finish(&raw, self.config.indent())
    }

    /// Renders the unformatted output document: the XML declaration, the
    /// wrapper start tag, the group and the closing tag, one per line.
    pub fn render_raw<'input>(
        &self,
        document: &SourceDocument<'input>,
        component: &Component<'_, 'input>,
        bounds: Bounds,
    ) -> String {
        let xlink = self.config.xlink_namespace();
        let namespaces = carried_namespaces(component.node(), xlink.is_some());
        let start_tag = wrapper_start_tag(bounds, xlink, &namespaces);
        let group = group_markup(document, component);

        [XML_DECLARATION, start_tag.as_str(), &group, "</svg>"].join("\n")
    }

    /// Writes `contents` to `<dir>/<id>.svg` and returns the written path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFileName`] when `id` cannot name a file inside
    /// `dir`, and [`Error::Io`] when the file cannot be created or written.
    pub fn write(&self, dir: &Path, id: &str, contents: &str) -> Result<PathBuf, Error> {
        let file_name = output_file_name(id).inspect_err(|err| {
            error!(id = id, err:% = err; "Failed to name component file");
        })?;
        let path = dir.join(file_name);

        let mut file = match File::create(&path) {
            Ok(file) => file,
            Err(source) => {
                error!(path = path.display().to_string(), err:% = source; "Failed to create component file");
                return Err(Error::Io { path, source });
            }
        };

        if let Err(source) = file.write_all(contents.as_bytes()) {
            error!(path = path.display().to_string(), err:% = source; "Failed to write component file");
            return Err(Error::Io { path, source });
        }

        info!(id = id; "Extracted: {id}.svg");
        Ok(path)
    }
}

/// Returns the file name for a component identifier.
fn output_file_name(id: &str) -> Result<String, Error> {
    if id.contains(['/', '\\']) {
        return Err(Error::InvalidFileName(id.to_string()));
    }
    Ok(format!("{id}.svg"))
}

/// Formats `bounds` as a `viewBox` value: `"x y width height"`.
pub fn view_box(bounds: Bounds) -> String {
    format!(
        "{} {} {} {}",
        bounds.min_x(),
        bounds.min_y(),
        bounds.width(),
        bounds.height()
    )
}

/// Builds the `<svg ...>` start tag wrapping a component.
///
/// Attributes are written in a fixed order: `xmlns`, `xmlns:xlink` (when
/// given), the carried `namespaces`, `width`, `height`, `viewBox` and
/// `version`. Width and height are truncated toward zero.
pub fn wrapper_start_tag(
    bounds: Bounds,
    xlink: Option<&str>,
    namespaces: &[(&str, &str)],
) -> String {
    let mut attrs: Vec<(String, String)> = vec![("xmlns".to_string(), SVG_NAMESPACE.to_string())];
    if let Some(xlink) = xlink {
        attrs.push(("xmlns:xlink".to_string(), xlink.to_string()));
    }
    for (prefix, uri) in namespaces {
        attrs.push((format!("xmlns:{prefix}"), uri.to_string()));
    }
    attrs.push(("width".to_string(), (bounds.width().trunc() as i64).to_string()));
    attrs.push(("height".to_string(), (bounds.height().trunc() as i64).to_string()));
    attrs.push(("viewBox".to_string(), view_box(bounds)));
    attrs.push(("version".to_string(), "1.1".to_string()));

    let mut tag = String::from("<svg");
    for (name, value) in attrs {
        tag.push_str(&format!(r#" {name}="{}""#, escape(value.as_str())));
    }
    tag.push('>');
    tag
}

/// Returns the prefixed namespaces in scope at `group`, so that prefixed
/// names inside the verbatim copy stay bound.
///
/// The reserved `xml` prefix is never returned, and `xlink` is left out when
/// the wrapper already declares it.
fn carried_namespaces<'a>(group: Node<'a, '_>, declares_xlink: bool) -> Vec<(&'a str, &'a str)> {
    let mut carried: Vec<(&'a str, &'a str)> = Vec::new();
    for ns in group.namespaces() {
        let Some(prefix) = ns.name() else {
            continue;
        };
        if prefix == "xml" || (prefix == "xlink" && declares_xlink) {
            continue;
        }
        if carried.iter().any(|(p, _)| *p == prefix) {
            continue;
        }
        carried.push((prefix, ns.uri()));
    }
    carried
}

/// Returns the markup of the component group: the verbatim source text, or
/// a serialization of the parsed subtree when the source declares entities.
fn group_markup<'input>(
    document: &SourceDocument<'input>,
    component: &Component<'_, 'input>,
) -> Cow<'input, str> {
    let verbatim = document.source_of(component.node());
    if !document.declares_entities() {
        return Cow::Borrowed(verbatim);
    }

    match serialize_group(component.node()) {
        Ok(markup) => Cow::Owned(markup),
        Err(err) => {
            warn!(id = component.id(), err:% = err; "Serializing group failed, copying source text");
            Cow::Borrowed(verbatim)
        }
    }
}

/// Serializes `group` and its subtree from the parsed tree.
///
/// Attribute values and text are written as the parser resolved them, so
/// the result holds no entity references beyond the predefined ones.
/// Namespace declarations are written on the element that introduces them.
///
/// # Errors
///
/// Returns [`Error::Format`] when quick-xml cannot write an event.
pub fn serialize_group(group: Node<'_, '_>) -> Result<String, Error> {
    let mut writer = Writer::new(Vec::new());
    write_node(&mut writer, group).map_err(|err| Error::Format(err.to_string()))?;
    String::from_utf8(writer.into_inner()).map_err(|err| Error::Format(err.to_string()))
}

fn write_node(writer: &mut Writer<Vec<u8>>, node: Node<'_, '_>) -> quick_xml::Result<()> {
    match node.node_type() {
        NodeType::Element => {
            let tag = node.tag_name();
            let name = qualified_name(node, tag.namespace(), tag.name(), false);

            let mut start = BytesStart::new(name.as_str());
            for (prefix, uri) in introduced_namespaces(node) {
                let key = match prefix {
                    Some(prefix) => format!("xmlns:{prefix}"),
                    None => "xmlns".to_string(),
                };
                start.push_attribute((key.as_str(), uri));
            }
            for attr in node.attributes() {
                let key = qualified_name(node, attr.namespace(), attr.name(), true);
                start.push_attribute((key.as_str(), attr.value()));
            }

            if !node.has_children() {
                return writer.write_event(Event::Empty(start));
            }
            writer.write_event(Event::Start(start))?;
            for child in node.children() {
                write_node(writer, child)?;
            }
            writer.write_event(Event::End(BytesEnd::new(name.as_str())))
        }
        NodeType::Text => {
            writer.write_event(Event::Text(BytesText::new(node.text().unwrap_or_default())))
        }
        NodeType::Comment => writer.write_event(Event::Comment(BytesText::from_escaped(
            node.text().unwrap_or_default(),
        ))),
        NodeType::PI => match node.pi() {
            Some(pi) => {
                let content = match pi.value {
                    Some(value) => format!("{} {value}", pi.target),
                    None => pi.target.to_string(),
                };
                writer.write_event(Event::PI(BytesText::from_escaped(content)))
            }
            None => Ok(()),
        },
        NodeType::Root => Ok(()),
    }
}

/// Returns `local` with the prefix bound to `namespace` at `node`.
///
/// Attributes only take a namespace through a prefix, so `prefixed` skips
/// a default namespace that shares the URI.
fn qualified_name(node: Node<'_, '_>, namespace: Option<&str>, local: &str, prefixed: bool) -> String {
    let prefix = match namespace {
        Some(XML_NAMESPACE) => Some("xml"),
        Some(uri) => node
            .namespaces()
            .find(|ns| ns.uri() == uri && (!prefixed || ns.name().is_some()))
            .and_then(|ns| ns.name()),
        None => None,
    };

    match prefix {
        Some(prefix) => format!("{prefix}:{local}"),
        None => local.to_string(),
    }
}

/// Returns the namespaces in scope at `node` but not at its parent element.
fn introduced_namespaces<'a>(node: Node<'a, '_>) -> Vec<(Option<&'a str>, &'a str)> {
    let inherited: Vec<(Option<&str>, &str)> = node
        .parent_element()
        .map(|parent| parent.namespaces().map(|ns| (ns.name(), ns.uri())).collect())
        .unwrap_or_default();

    node.namespaces()
        .map(|ns| (ns.name(), ns.uri()))
        .filter(|decl| decl.0 != Some("xml") && !inherited.contains(decl))
        .collect()
}

/// Re-indents a complete XML document.
///
/// Whitespace-only text is dropped and every element starts on its own line,
/// indented by `indent` spaces per level.
///
/// # Errors
///
/// Returns [`Error::Format`] when the document cannot be read back, for
/// example on mismatched tags.
pub fn prettify(raw: &str, indent: usize) -> Result<String, Error> {
    let mut reader = Reader::from_str(raw);
    reader.trim_text(true);

    let mut writer = Writer::new_with_indent(Vec::new(), b' ', indent);
    loop {
        let event = reader
            .read_event()
            .map_err(|err| Error::Format(err.to_string()))?;
        if let Event::Eof = event {
            break;
        }
        writer
            .write_event(event)
            .map_err(|err| Error::Format(err.to_string()))?;
    }

    let mut pretty =
        String::from_utf8(writer.into_inner()).map_err(|err| Error::Format(err.to_string()))?;
    pretty.push('\n');
    Ok(pretty)
}

/// Pretty-prints `raw`, falling back to `raw` itself when that fails.
pub fn finish(raw: &str, indent: usize) -> String {
    match prettify(raw, indent) {
        Ok(pretty) => pretty,
        Err(err) => {
            warn!(err:% = err; "Pretty-printing failed, writing unformatted output");
            raw.to_string()
        }
    }
}
