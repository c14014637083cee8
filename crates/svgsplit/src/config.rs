//! Configuration types for component extraction.
//!
//! This module provides configuration structures that control how component
//! geometry is estimated and how output documents are written. All types
//! implement [`serde::Deserialize`] for loading from external sources, and
//! every field falls back to its default when omitted.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining geometry and output settings.
//! - [`GeometryConfig`] - Padding and the fallback box for components without recognized shapes.
//! - [`OutputConfig`] - Output directory, indentation and namespace settings.
//!
//! # Example
//!
//! ```
//! # use svgsplit::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.geometry().padding(), 5.0);
//! assert_eq!(config.output().directory(), "extracted_components");
//! ```

use serde::Deserialize;

use svgsplit_core::geometry::{Bounds, Point, Size};

/// Output directory used when neither the command line nor the configuration names one.
pub const DEFAULT_OUTPUT_DIR: &str = "extracted_components";

/// The XLink namespace declared on every output document by default.
pub const XLINK_NAMESPACE: &str = "http://www.w3.org/1999/xlink";

/// Top-level configuration combining geometry and output settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Geometry estimation section.
    #[serde(default)]
    geometry: GeometryConfig,

    /// Output document section.
    #[serde(default)]
    output: OutputConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified sections.
    ///
    /// # Arguments
    ///
    /// * `geometry` - Bounding box estimation settings.
    /// * `output` - Output document settings.
    pub fn new(geometry: GeometryConfig, output: OutputConfig) -> Self {
        Self { geometry, output }
    }

    /// Returns the geometry configuration.
    pub fn geometry(&self) -> &GeometryConfig {
        &self.geometry
    }

    /// Returns the output configuration.
    pub fn output(&self) -> &OutputConfig {
        &self.output
    }
}

/// Bounding box estimation settings.
#[derive(Debug, Clone, Deserialize)]
pub struct GeometryConfig {
    /// Padding added on every side of an estimated box.
    #[serde(default = "default_padding")]
    padding: f64,

    /// Box used when a component has no recognized shapes.
    #[serde(default)]
    fallback: FallbackBox,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            padding: default_padding(),
            fallback: FallbackBox::default(),
        }
    }
}

impl GeometryConfig {
    /// Creates a new [`GeometryConfig`].
    pub fn new(padding: f64, fallback: FallbackBox) -> Self {
        Self { padding, fallback }
    }

    /// Returns the padding added on every side of an estimated box.
    pub fn padding(&self) -> f64 {
        self.padding
    }

    /// Returns the fallback box as [`Bounds`].
    pub fn fallback(&self) -> Bounds {
        self.fallback.to_bounds()
    }
}

/// A box given by its origin and size, as written in a configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct FallbackBox {
    #[serde(default)]
    x: f64,
    #[serde(default)]
    y: f64,
    #[serde(default = "default_fallback_extent")]
    width: f64,
    #[serde(default = "default_fallback_extent")]
    height: f64,
}

impl Default for FallbackBox {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: default_fallback_extent(),
            height: default_fallback_extent(),
        }
    }
}

impl FallbackBox {
    /// Creates a new fallback box from its origin and size.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Converts the box into [`Bounds`].
    pub fn to_bounds(self) -> Bounds {
        Bounds::new_from_top_left(Point::new(self.x, self.y), Size::new(self.width, self.height))
    }
}

/// Output document settings.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory the component files are written to.
    #[serde(default = "default_directory")]
    directory: String,

    /// Number of spaces per indentation level in pretty-printed output.
    #[serde(default = "default_indent")]
    indent: usize,

    /// XLink namespace URI; an empty string omits the declaration.
    #[serde(default = "default_xlink_namespace")]
    xlink_namespace: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            indent: default_indent(),
            xlink_namespace: default_xlink_namespace(),
        }
    }
}

impl OutputConfig {
    /// Creates a new [`OutputConfig`].
    ///
    /// # Arguments
    ///
    /// * `directory` - Directory the component files are written to.
    /// * `indent` - Spaces per indentation level.
    /// * `xlink_namespace` - XLink namespace URI, or an empty string to omit it.
    pub fn new(
        directory: impl Into<String>,
        indent: usize,
        xlink_namespace: impl Into<String>,
    ) -> Self {
        Self {
            directory: directory.into(),
            indent,
            xlink_namespace: xlink_namespace.into(),
        }
    }

    /// Returns the output directory.
    pub fn directory(&self) -> &str {
        &self.directory
    }

    /// Returns the number of spaces per indentation level.
    pub fn indent(&self) -> usize {
        self.indent
    }

    /// Returns the XLink namespace to declare, or `None` when it is disabled.
    pub fn xlink_namespace(&self) -> Option<&str> {
        Some(self.xlink_namespace.as_str()).filter(|ns| !ns.is_empty())
    }
}

fn default_padding() -> f64 {
    5.0
}

fn default_fallback_extent() -> f64 {
    100.0
}

fn default_directory() -> String {
    DEFAULT_OUTPUT_DIR.to_string()
}

fn default_indent() -> usize {
    2
}

fn default_xlink_namespace() -> String {
    XLINK_NAMESPACE.to_string()
}
