//! Foundational primitives for binary-image contour extraction.
//!
//! ## Raster Layout
//! A [`Raster`] is a channel-interleaved grid of 8-bit samples: the sample
//! for `(channel, x, y)` lives at `channel + channels * (x + y * width)`.
//! Single-channel rasters are the common case; the contour algorithms
//! require them.
//!
//! ## Out-of-Range Contract
//! [`Raster::get`] takes signed coordinates and returns a caller-supplied
//! default when the coordinate or channel is out of range; [`Raster::set`]
//! silently ignores out-of-range writes. Boundary-walking code probes one
//! pixel beyond every image edge on purpose, so out-of-range access is part
//! of the contract, not an error.
//!
//! ## Coordinates
//! `x` grows rightward, `y` grows downward, `(0, 0)` is the top-left pixel.

mod error;
mod geom;
mod raster;

pub use error::Error;
pub use geom::{Point, Point2f};
pub use raster::Raster;
