//! Partial reader for path `d` attributes.
//!
//! Only absolute move-to and line-to commands followed by a single
//! coordinate pair are read. Curves, arcs, relative commands and the
//! implicit repeats after the first pair are skipped, so the points
//! returned are a sample of the path, not its outline.

use std::sync::LazyLock;

use log::trace;
use regex::Regex;

use crate::{geometry::Point, number::parse_number};

static MOVE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[ML]\s*([-\d.]+)[,\s]+([-\d.]+)").expect("move/line pattern is valid")
});

/// Returns the coordinate pair following every `M` and `L` command in `d`,
/// in the order they appear.
///
/// # Examples
///
/// ```
/// # use svgsplit_core::{geometry::Point, path_data::move_line_points};
/// let points = move_line_points("M 0,0 L 10 20 C 1 2 3 4 5 6 l 5 5");
/// assert_eq!(points, vec![Point::new(0.0, 0.0), Point::new(10.0, 20.0)]);
/// ```
pub fn move_line_points(d: &str) -> Vec<Point> {
    MOVE_LINE
        .captures_iter(d)
        .filter_map(|caps| {
            let x = parse_number(&caps[1]);
            let y = parse_number(&caps[2]);
            match (x, y) {
                (Some(x), Some(y)) => Some(Point::new(x, y)),
                _ => {
                    trace!(pair = &caps[0]; "Skipping unparsable path coordinate");
                    None
                }
            }
        })
        .collect()
}
