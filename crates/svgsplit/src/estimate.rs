//! Bounding box estimation for a component.
//!
//! The estimate is a heuristic over three shape kinds (`rect`, `circle` and
//! `path` move/line coordinates) found anywhere below the group. Only the
//! group's own `translate(...)` is applied; transforms on nested groups are
//! not composed in, and stroke widths are not accounted for.

use log::{debug, trace};
use roxmltree::Node;

use svgsplit_core::{
    geometry::{Bounds, Insets, Point},
    number::number_or_zero,
    path_data::move_line_points,
    transform::Translation,
};

/// Estimates the padded bounding box of `group`.
///
/// Returns `None` when no recognized shape contributed a point.
///
/// # Arguments
///
/// * `group` - The component group node.
/// * `padding` - Padding added on every side of the shapes' extent.
pub fn estimate_bounds(group: Node<'_, '_>, padding: f64) -> Option<Bounds> {
    let translation = Translation::parse(group.attribute("transform").unwrap_or(""));
    if !translation.is_identity() {
        trace!(offset:? = translation.offset(); "Applying group translation");
    }

    let extent = group
        .descendants()
        .filter(Node::is_element)
        .flat_map(shape_points)
        .map(|point| translation.apply(point))
        .fold(None, |bounds: Option<Bounds>, point| {
            Some(match bounds {
                Some(bounds) => bounds.include_point(point),
                None => Bounds::from_point(point),
            })
        });

    match extent {
        Some(extent) => {
            let padded = extent.add_padding(Insets::uniform(padding));
            debug!(
                x = padded.min_x(),
                y = padded.min_y(),
                width = padded.width(),
                height = padded.height();
                "Estimated component bounds"
            );
            Some(padded)
        }
        None => None,
    }
}

/// Returns the points a single element contributes, before translation.
fn shape_points(node: Node<'_, '_>) -> Vec<Point> {
    match node.tag_name().name() {
        "rect" => {
            let x = number_or_zero(node.attribute("x"));
            let y = number_or_zero(node.attribute("y"));
            let width = number_or_zero(node.attribute("width"));
            let height = number_or_zero(node.attribute("height"));
            vec![Point::new(x, y), Point::new(x + width, y + height)]
        }
        "circle" => {
            let cx = number_or_zero(node.attribute("cx"));
            let cy = number_or_zero(node.attribute("cy"));
            let r = number_or_zero(node.attribute("r"));
            vec![Point::new(cx - r, cy - r), Point::new(cx + r, cy + r)]
        }
        "path" => move_line_points(node.attribute("d").unwrap_or("")),
        _ => Vec::new(),
    }
}
