//! Geometric primitives for component bounding boxes.
//!
//! This module provides the small set of geometric types svgsplit needs to
//! estimate where a component sits inside its source document.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in user space
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - An axis-aligned box defined by minimum and maximum coordinates
//! - [`Insets`] - Padding values for four sides
//!
//! # Coordinate System
//!
//! Coordinates are SVG user units:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! Values are `f64` so that a `viewBox` computed from the source keeps the
//! precision the source was written with.

/// A 2D point in SVG user space.
///
/// # Examples
///
/// ```
/// # use svgsplit_core::geometry::Point;
/// let corner = Point::new(10.0, 20.0);
/// let moved = corner.add_point(Point::new(5.0, -5.0));
/// assert_eq!(moved.x(), 15.0);
/// assert_eq!(moved.y(), 15.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f64 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f64 {
        self.y
    }

    /// Checks if both x and y coordinates are zero
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Adds another point to this point, returning a new point.
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

/// Width and height of a box
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f64,
    height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f64 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f64 {
        self.height
    }
}

/// An axis-aligned bounding box with minimum and maximum coordinates.
///
/// A `Bounds` is usually grown point by point with [`Bounds::include_point`]
/// starting from [`Bounds::from_point`]; a degenerate box (zero width or
/// height) is valid.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl Bounds {
    /// Creates a zero-sized bounds located at `point`
    pub fn from_point(point: Point) -> Self {
        Self {
            min_x: point.x,
            min_y: point.y,
            max_x: point.x,
            max_y: point.y,
        }
    }

    /// Creates a new bounds from a top-left point and a size
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self {
            min_x: top_left.x,
            min_y: top_left.y,
            max_x: top_left.x + size.width,
            max_y: top_left.y + size.height,
        }
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f64 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f64 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f64 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f64 {
        self.max_y
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f64 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f64 {
        self.max_y - self.min_y
    }

    /// Grows the bounds so that it contains `point`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use svgsplit_core::geometry::{Bounds, Point};
    /// let bounds = Bounds::from_point(Point::new(10.0, 10.0))
    ///     .include_point(Point::new(30.0, 40.0))
    ///     .include_point(Point::new(20.0, 0.0));
    ///
    /// assert_eq!(bounds.min_y(), 0.0);
    /// assert_eq!(bounds.width(), 20.0);
    /// assert_eq!(bounds.height(), 40.0);
    /// ```
    pub fn include_point(self, point: Point) -> Self {
        Self {
            min_x: self.min_x.min(point.x),
            min_y: self.min_y.min(point.y),
            max_x: self.max_x.max(point.x),
            max_y: self.max_y.max(point.y),
        }
    }

    /// Expands the bounds by adding insets.
    ///
    /// This decreases the minimum coordinates by left/top insets and increases
    /// the maximum coordinates by right/bottom insets.
    ///
    /// # Examples
    ///
    /// ```
    /// # use svgsplit_core::geometry::{Bounds, Insets, Point, Size};
    /// let rect = Bounds::new_from_top_left(Point::new(10.0, 10.0), Size::new(20.0, 30.0));
    /// let padded = rect.add_padding(Insets::uniform(5.0));
    ///
    /// assert_eq!(padded.min_x(), 5.0);
    /// assert_eq!(padded.min_y(), 5.0);
    /// assert_eq!(padded.width(), 30.0);
    /// assert_eq!(padded.height(), 40.0);
    /// ```
    pub fn add_padding(&self, insets: Insets) -> Self {
        Self {
            min_x: self.min_x - insets.left(),
            min_y: self.min_y - insets.top(),
            max_x: self.max_x + insets.right(),
            max_y: self.max_y + insets.bottom(),
        }
    }
}

/// Spacing around a box, with potentially different values for each side
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Insets {
    top: f64,
    right: f64,
    bottom: f64,
    left: f64,
}

impl Insets {
    /// Creates uniform insets with the same value for all sides
    pub fn uniform(value: f64) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Returns the top inset value
    pub fn top(self) -> f64 {
        self.top
    }

    /// Returns the right inset value
    pub fn right(self) -> f64 {
        self.right
    }

    /// Returns the bottom inset value
    pub fn bottom(self) -> f64 {
        self.bottom
    }

    /// Returns the left inset value
    pub fn left(self) -> f64 {
        self.left
    }
}


#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    fn point_strategy() -> impl Strategy<Value = Point> {
        (-1000.0f64..1000.0, -1000.0f64..1000.0).prop_map(|(x, y)| Point::new(x, y))
    }

    fn bounds_from(points: &[Point]) -> Bounds {
        points
            .iter()
            .skip(1)
            .fold(Bounds::from_point(points[0]), |bounds, p| {
                bounds.include_point(*p)
            })
    }

    /// Every point used to build a bounds lies inside it.
    fn check_bounds_contain_points(points: Vec<Point>) -> Result<(), TestCaseError> {
        let bounds = bounds_from(&points);

        for p in &points {
            prop_assert!(p.x() >= bounds.min_x() && p.x() <= bounds.max_x());
            prop_assert!(p.y() >= bounds.min_y() && p.y() <= bounds.max_y());
        }
        Ok(())
    }

    /// The order points are included in does not change the result.
    fn check_include_order_is_irrelevant(points: Vec<Point>) -> Result<(), TestCaseError> {
        let forward = bounds_from(&points);
        let reversed: Vec<Point> = points.iter().rev().copied().collect();
        let backward = bounds_from(&reversed);

        prop_assert_eq!(forward, backward);
        Ok(())
    }

    /// Uniform padding grows each dimension by twice the padding.
    fn check_uniform_padding_growth(points: Vec<Point>, padding: f64) -> Result<(), TestCaseError> {
        let bounds = bounds_from(&points);
        let padded = bounds.add_padding(Insets::uniform(padding));

        prop_assert!(approx_eq!(
            f64,
            padded.width(),
            bounds.width() + 2.0 * padding,
            epsilon = 1e-9
        ));
        prop_assert!(approx_eq!(
            f64,
            padded.height(),
            bounds.height() + 2.0 * padding,
            epsilon = 1e-9
        ));
        prop_assert!(approx_eq!(f64, padded.min_x(), bounds.min_x() - padding));
        Ok(())
    }

    proptest! {
        #[test]
        fn bounds_contain_points(points in prop::collection::vec(point_strategy(), 1..32)) {
            check_bounds_contain_points(points)?;
        }

        #[test]
        fn include_order_is_irrelevant(points in prop::collection::vec(point_strategy(), 1..32)) {
            check_include_order_is_irrelevant(points)?;
        }

        #[test]
        fn uniform_padding_growth(
            points in prop::collection::vec(point_strategy(), 1..16),
            padding in 0.0f64..50.0,
        ) {
            check_uniform_padding_growth(points, padding)?;
        }
    }
}
