use pt_core::{Point, Raster};

use crate::Contour;

/// Turn budget for one position and the minimum viable boundary length.
/// Protocol constant; changing it changes which specks survive tracing.
pub(crate) const NOISE_LIMIT: usize = 8;

/// A border pixel has at least one background or out-of-range axis neighbor.
#[inline]
pub(crate) fn is_border(img: &Raster, x: i64, y: i64) -> bool {
    !(img.get(0, x + 1, y, 0) != 0
        && img.get(0, x, y + 1, 0) != 0
        && img.get(0, x - 1, y, 0) != 0
        && img.get(0, x, y - 1, 0) != 0)
}

/// Walk the 4-connected boundary starting at `(start_x, start_y)`, which must
/// be a foreground border pixel of `img`.
///
/// The step vector starts "up" `(0, -1)`; a background candidate rotates the
/// step clockwise in place, a foreground candidate is appended, marked in
/// `visited`, and rotates the step counter-clockwise before advancing. The
/// walk closes when the candidate returns to the start.
///
/// Returns `None` for noise: a trace that turns in place [`NOISE_LIMIT`]
/// times, or closes with fewer than [`NOISE_LIMIT`] points. Rejected traces
/// erase their own marks from `visited`.
pub(crate) fn square_trace(
    start_x: usize,
    start_y: usize,
    img: &Raster,
    visited: &mut Raster,
) -> Option<Contour> {
    let mut cnt = Contour::new();

    cnt.push(Point::new(start_x, start_y));
    visited.set(0, start_x as i64, start_y as i64, 1);

    // go up
    let mut step_x: i64 = 0;
    let mut step_y: i64 = -1;

    let mut nx = start_x as i64 + step_x;
    let mut ny = start_y as i64 + step_y;

    let mut turns = 0;

    while !(nx == start_x as i64 && ny == start_y as i64) && turns < NOISE_LIMIT {
        if img.get(0, nx, ny, 0) == 0 {
            // retry from the same position, one quarter-turn clockwise
            nx -= step_x;
            ny -= step_y;

            let tmp = step_x;
            step_x = -step_y;
            step_y = tmp;

            nx += step_x;
            ny += step_y;

            turns += 1;
        } else {
            cnt.push(Point::new(nx as usize, ny as usize));
            visited.set(0, nx, ny, 1);

            // advance, one quarter-turn counter-clockwise
            let tmp = step_x;
            step_x = step_y;
            step_y = -tmp;

            nx += step_x;
            ny += step_y;

            turns = 0;
        }
    }

    if cnt.len() >= NOISE_LIMIT {
        Some(cnt)
    } else {
        for p in cnt.iter() {
            visited.set(0, p.x as i64, p.y as i64, 0);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use pt_core::{Point, Raster};

    use super::{is_border, square_trace};

    fn filled_rect(w: usize, h: usize, x0: usize, y0: usize, rw: usize, rh: usize) -> Raster {
        let mut img = Raster::new(1, w, h);
        for y in y0..y0 + rh {
            for x in x0..x0 + rw {
                img.set(0, x as i64, y as i64, 255);
            }
        }
        img
    }

    #[test]
    fn border_predicate() {
        let img = filled_rect(12, 12, 2, 2, 8, 8);

        assert!(is_border(&img, 2, 2));
        assert!(is_border(&img, 9, 5));
        assert!(!is_border(&img, 5, 5));
    }

    #[test]
    fn border_predicate_at_image_edge() {
        // foreground touching the raster edge: the out-of-range neighbor
        // reads as background
        let img = filled_rect(4, 4, 0, 0, 4, 4);
        assert!(is_border(&img, 0, 0));
        assert!(is_border(&img, 3, 2));
    }

    #[test]
    fn solid_square_boundary_length() {
        let n = 8;
        let img = filled_rect(12, 12, 2, 2, n, n);
        let mut visited = Raster::new(1, 12, 12);

        let cnt = square_trace(2, 2, &img, &mut visited).expect("square is traceable");

        assert_eq!(cnt.len(), 4 * (n - 1));
        assert_eq!(cnt.get(0), Some(Point::new(2, 2)));

        // every traced point is marked
        for p in cnt.iter() {
            assert_eq!(visited.get(0, p.x as i64, p.y as i64, 0), 1);
        }
    }

    #[test]
    fn winding_starts_along_the_top_edge() {
        let img = filled_rect(12, 12, 2, 2, 8, 8);
        let mut visited = Raster::new(1, 12, 12);

        let cnt = square_trace(2, 2, &img, &mut visited).expect("square is traceable");

        // up is background, so the first clockwise retry walks rightward
        assert_eq!(cnt.get(1), Some(Point::new(3, 2)));
        assert_eq!(cnt.get(2), Some(Point::new(4, 2)));
    }

    #[test]
    fn isolated_pixel_is_rejected_and_unmarked() {
        let mut img = Raster::new(1, 8, 8);
        img.set(0, 4, 4, 255);
        let mut visited = Raster::new(1, 8, 8);

        assert!(square_trace(4, 4, &img, &mut visited).is_none());
        assert!(visited.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn tiny_blob_is_rejected_and_unmarked() {
        // a 2x2 blob closes after 4 points, under the viability minimum
        let img = filled_rect(8, 8, 3, 3, 2, 2);
        let mut visited = Raster::new(1, 8, 8);

        assert!(square_trace(3, 3, &img, &mut visited).is_none());
        assert!(visited.data().iter().all(|&v| v == 0));
    }
}
