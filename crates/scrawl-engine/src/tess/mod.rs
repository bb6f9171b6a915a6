//! Shape tessellation: declarative shape descriptions to triangle geometry.
//!
//! Every builder is a pure function writing into a caller-owned [`Geometry`]
//! scratch buffer (cleared by the caller, reused across calls), and follows
//! one shared contract:
//! - degenerate input (non-positive radius/thickness, too few points,
//!   zero-length segments, non-finite coordinates) produces no geometry and
//!   returns `false`;
//! - indices are 0-based within the emitted primitive; the batch rebases
//!   them on append;
//! - curved shapes take a precomputed segment count from [`quality`], which
//!   is derived from the screen-space radius.

mod circle;
mod ellipse;
mod geometry;
mod line;
mod line_string;
mod polygon;
mod quality;
mod rect;
mod round_rect;
mod triangle;
mod vertex;

pub use circle::{build_circle, build_circle_arc, build_circle_frame, build_circle_pie};
pub use ellipse::{build_ellipse, build_ellipse_frame};
pub use geometry::Geometry;
pub use line::{LineCap, build_line};
pub use line_string::{Ring, build_line_string, build_line_string_colored};
pub use polygon::{build_polygon, build_polygon_raw};
pub use quality::{MAX_CIRCLE_SEGMENTS, arc_segments, circle_segments};
pub use rect::{build_quad, build_rect, build_rect_frame};
pub use round_rect::build_round_rect;
pub use triangle::build_triangle;
pub use vertex::{IndexType, MAX_BATCH_VERTICES, TriangleIndex, Vertex2D};
