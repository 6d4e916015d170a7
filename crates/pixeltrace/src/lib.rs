//! Umbrella crate for the `pixeltrace` workspace.
//!
//! Re-exports the pixel-buffer primitives and the contour extraction and
//! analysis API as one surface.

pub use pt_contour::*;
pub use pt_core::{Point, Point2f, Raster};
