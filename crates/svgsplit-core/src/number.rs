//! Numeric attribute reading.

use log::trace;

/// Parses a numeric SVG attribute value.
///
/// Surrounding whitespace is ignored. Units, percentages and other suffixes
/// are not understood and make the value unparsable.
pub fn parse_number(value: &str) -> Option<f64> {
    value.trim().parse().ok()
}

/// Reads an optional numeric attribute, treating a missing or unparsable
/// value as `0`.
///
/// # Examples
///
/// ```
/// # use svgsplit_core::number::number_or_zero;
/// assert_eq!(number_or_zero(Some(" 12.5 ")), 12.5);
/// assert_eq!(number_or_zero(Some("10px")), 0.0);
/// assert_eq!(number_or_zero(None), 0.0);
/// ```
pub fn number_or_zero(value: Option<&str>) -> f64 {
    match value {
        Some(raw) => parse_number(raw).unwrap_or_else(|| {
            trace!(value = raw; "Unparsable numeric attribute, using 0");
            0.0
        }),
        None => 0.0,
    }
}
