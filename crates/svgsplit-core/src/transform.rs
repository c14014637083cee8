//! Reading the translation out of a `transform` attribute.
//!
//! Only `translate(tx[, ty])` is understood. The first `translate(...)`
//! found anywhere in the attribute wins; any other transform functions
//! around it (`rotate`, `scale`, `matrix`, ...) are ignored.

use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::{geometry::Point, number::parse_number};

static TRANSLATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"translate\s*\(\s*([-\d.]+)(?:[,\s]+([-\d.]+))?\s*\)")
        .expect("translate pattern is valid")
});

/// A translation offset parsed from a `transform` attribute.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Translation {
    offset: Point,
}

impl Translation {
    /// Creates a translation by `(tx, ty)`.
    pub fn new(tx: f64, ty: f64) -> Self {
        Self {
            offset: Point::new(tx, ty),
        }
    }

    /// Reads the translation from a `transform` attribute value.
    ///
    /// Returns the identity translation when the attribute contains no
    /// `translate(...)` or its numbers do not parse. A missing `ty` is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// # use svgsplit_core::transform::Translation;
    /// assert_eq!(Translation::parse("translate(5, 7)"), Translation::new(5.0, 7.0));
    /// assert_eq!(Translation::parse("translate(12)"), Translation::new(12.0, 0.0));
    /// assert_eq!(Translation::parse("scale(2)"), Translation::default());
    /// ```
    pub fn parse(transform: &str) -> Self {
        let Some(caps) = TRANSLATE.captures(transform) else {
            return Self::default();
        };

        let tx = caps.get(1).and_then(|m| parse_number(m.as_str()));
        let ty = match caps.get(2) {
            Some(m) => parse_number(m.as_str()),
            None => Some(0.0),
        };

        match (tx, ty) {
            (Some(tx), Some(ty)) => Self::new(tx, ty),
            _ => {
                debug!(transform = transform; "Unparsable translate(), ignoring");
                Self::default()
            }
        }
    }

    /// Returns the offset as a point
    pub fn offset(self) -> Point {
        self.offset
    }

    /// Returns true when this translation does not move anything
    pub fn is_identity(self) -> bool {
        self.offset.is_zero()
    }

    /// Applies the translation to `point`.
    pub fn apply(self, point: Point) -> Point {
        point.add_point(self.offset)
    }
}
