//! Closed-boundary extraction from binary rasters.
//!
//! A contour is the ordered pixel boundary of one connected foreground
//! region, walked with square tracing under 4-connectivity:
//! - The walk starts "up" `(0, -1)` from a border pixel, retries clockwise
//!   on background and advances counter-clockwise on foreground. This fixes
//!   a deterministic counter-clockwise winding in image coordinates (y grows
//!   downward), including which point is emitted first.
//! - A trace that turns in place eight times, or closes with fewer than
//!   eight points, is rejected as noise and leaves no mark behind.
//!
//! [`find_contours`] scans the image on a configurable stride and traces
//! each unvisited border pixel it hits; visited-marking guarantees every
//! region is traced at most once and no two contours share a point. Larger
//! strides skip start candidates, not boundary points: once triggered, the
//! tracer walks the full boundary.
//!
//! Geometric queries over a traced contour live in [`analyze`]: centroid,
//! extreme points, enclosed area, least-squares line fit, and a
//! point-in-region test.

pub mod analyze;
mod contour;
mod error;
mod find;
mod stack;
mod trace;

pub use analyze::{
    ExtremePoints, LineFit, area, centroid, extreme_points, fit_line, is_inside,
};
pub use contour::Contour;
pub use error::Error;
pub use find::{DEFAULT_TRACE_STEP, FindConfig, find_contours};
