//! svgsplit core types and attribute readers
//!
//! This crate provides the building blocks the extraction pipeline uses to
//! estimate component geometry:
//!
//! - **Geometry**: points, sizes, bounding boxes and insets ([`geometry`])
//! - **Numbers**: lenient numeric attribute reading ([`number`])
//! - **Transforms**: the `translate(...)` reader ([`transform`])
//! - **Path data**: the move/line coordinate reader ([`path_data`])

pub mod geometry;
pub mod number;
pub mod path_data;
pub mod transform;
