//! Geometric queries over one traced contour.
//!
//! Every function is pure with respect to its contour argument; only
//! [`area`] allocates transient scratch state (a bounding-box raster and a
//! point stack), released before it returns.

use pt_core::{Point, Point2f, Raster};

use crate::stack::PointStack;
use crate::{Contour, Error};

/// Two raw ray crossings merge into one when closer than this; denser
/// crossing runs group with it as the tolerance. Protocol constant,
/// compensating for boundaries more than one pixel thick.
const CROSSING_GAP: usize = 2;

/// Extreme member points of a contour, one per compass direction.
///
/// Each field is an actual contour point, not a synthesized bounding-box
/// corner, so `north.x` need not equal `south.x`. Ties go to the point
/// appended first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtremePoints {
    /// Minimal y.
    pub north: Point,
    /// Maximal x.
    pub east: Point,
    /// Maximal y.
    pub south: Point,
    /// Minimal x.
    pub west: Point,
}

/// Coefficients of `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineFit {
    pub slope: f32,
    pub intercept: f32,
}

/// Arithmetic mean of the contour's point coordinates.
pub fn centroid(cnt: &Contour) -> Result<Point2f, Error> {
    if cnt.is_empty() {
        return Err(Error::EmptyContour);
    }

    let mut sum_x = 0.0f32;
    let mut sum_y = 0.0f32;
    for p in cnt.iter() {
        sum_x += p.x as f32;
        sum_y += p.y as f32;
    }

    let n = cnt.len() as f32;
    Ok(Point2f {
        x: sum_x / n,
        y: sum_y / n,
    })
}

/// Extreme points in N, E, S, W order. Comparisons are strict, so the
/// first-appended point wins ties.
pub fn extreme_points(cnt: &Contour) -> Result<ExtremePoints, Error> {
    let first = cnt.get(0).ok_or(Error::EmptyContour)?;

    let mut ext = ExtremePoints {
        north: first,
        east: first,
        south: first,
        west: first,
    };

    for &p in cnt.iter() {
        if ext.north.y > p.y {
            ext.north = p;
        }
        if ext.east.x < p.x {
            ext.east = p;
        }
        if ext.south.y < p.y {
            ext.south = p;
        }
        if ext.west.x > p.x {
            ext.west = p;
        }
    }

    Ok(ext)
}

/// Pixels enclosed by the contour, boundary included.
///
/// Rasterizes the boundary into a scratch buffer sized to the bounding box
/// plus a one-pixel margin, flood-fills the exterior from the margin corner,
/// and subtracts the exterior count from the scratch pixel count. Exterior
/// filling handles concave and self-touching boundaries without
/// special-casing; the margin guarantees the seed is reachable background.
/// Results on self-intersecting contours are unspecified.
pub fn area(cnt: &Contour) -> Result<usize, Error> {
    let ext = extreme_points(cnt)?;

    let w = ext.east.x - ext.west.x + 1;
    let h = ext.south.y - ext.north.y + 1;

    let mut scratch = Raster::new(1, w + 2, h + 2);
    let mut area = (w + 2) * (h + 2);

    // boundary = 1, offset by the margin
    for p in cnt.iter() {
        let sx = (p.x - ext.west.x + 1) as i64;
        let sy = (p.y - ext.north.y + 1) as i64;
        scratch.set(0, sx, sy, 1);
    }

    // out-of-range reads default to 1, so the fill needs no bounds checks
    let mut stk = PointStack::with_capacity(area);
    stk.push(0, 0);

    while !stk.is_empty() {
        let (x, y) = stk.pop();

        if scratch.get(0, x, y, 1) == 0 {
            scratch.set(0, x, y, 2);
            area -= 1;

            stk.push(x + 1, y);
            stk.push(x - 1, y);
            stk.push(x, y + 1);
            stk.push(x, y - 1);
        }
    }

    Ok(area)
}

/// Ordinary least-squares fit of `y = m * x + b` over all contour points.
pub fn fit_line(cnt: &Contour) -> Result<LineFit, Error> {
    if cnt.is_empty() {
        return Err(Error::EmptyContour);
    }

    let mut sum_x = 0.0f32;
    let mut sum_y = 0.0f32;
    let mut sum_xy = 0.0f32;
    let mut sum_x2 = 0.0f32;

    for p in cnt.iter() {
        let (x, y) = (p.x as f32, p.y as f32);
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_x2 += x * x;
    }

    let n = cnt.len() as f32;
    let denom = n * sum_x2 - sum_x * sum_x;
    if denom == 0.0 {
        return Err(Error::DegenerateFit);
    }

    let slope = (n * sum_xy - sum_x * sum_y) / denom;
    let intercept = (sum_y - slope * sum_x) / n;

    Ok(LineFit { slope, intercept })
}

/// Ray-cast point-in-region test, boundary inclusive.
///
/// Casts a horizontal ray rightward from `(x, y)` and collects contour
/// points on the same row at or right of `x`. A point coinciding with the
/// query is inside immediately. Zero or one raw crossings decide by parity;
/// exactly two merge into one crossing only when nearly coincident (gap
/// under two pixels); longer runs group under the two-pixel tolerance and
/// the group-count parity decides.
pub fn is_inside(cnt: &Contour, x: usize, y: usize) -> bool {
    let mut crossings: Vec<usize> = Vec::new();

    for p in cnt.iter() {
        if p.y == y && p.x >= x {
            if p.x == x {
                return true;
            }
            crossings.push(p.x);
        }
    }

    match crossings.len() {
        0 => false,
        1 => true,
        2 => {
            crossings.sort_unstable();
            crossings[1] - crossings[0] < CROSSING_GAP
        }
        _ => {
            crossings.sort_unstable();

            let mut groups = 1;
            for pair in crossings.windows(2) {
                if pair[1] - pair[0] > CROSSING_GAP {
                    groups += 1;
                }
            }
            groups % 2 == 1
        }
    }
}
