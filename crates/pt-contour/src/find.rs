use pt_core::Raster;

use crate::trace::{is_border, square_trace};
use crate::{Contour, Error};

/// Default scan stride in both axes. Stride 1 visits every pixel; the
/// default trades start-candidate density for speed and relies on the tracer
/// to walk the full boundary once triggered.
pub const DEFAULT_TRACE_STEP: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FindConfig {
    pub step_x: usize,
    pub step_y: usize,
}

impl Default for FindConfig {
    fn default() -> Self {
        Self {
            step_x: DEFAULT_TRACE_STEP,
            step_y: DEFAULT_TRACE_STEP,
        }
    }
}

/// Find the closed boundaries of a single-channel binary raster.
///
/// Scans row-major on the configured stride and traces every foreground
/// border pixel not yet claimed by an earlier trace. Output order follows
/// scan order, which makes results on identical input and stride
/// reproducible point for point.
pub fn find_contours(img: &Raster, cfg: &FindConfig) -> Result<Vec<Contour>, Error> {
    if cfg.step_x < 1 || cfg.step_y < 1 {
        return Err(Error::InvalidStep {
            step_x: cfg.step_x,
            step_y: cfg.step_y,
        });
    }

    if img.channels() != 1 {
        return Err(Error::ChannelCount {
            actual: img.channels(),
        });
    }

    let mut visited = Raster::new(1, img.width(), img.height());
    let mut out = Vec::new();

    for y in (0..img.height()).step_by(cfg.step_y) {
        for x in (0..img.width()).step_by(cfg.step_x) {
            let (xi, yi) = (x as i64, y as i64);

            if img.get(0, xi, yi, 0) != 0
                && visited.get(0, xi, yi, 0) == 0
                && is_border(img, xi, yi)
            {
                if let Some(cnt) = square_trace(x, y, img, &mut visited) {
                    out.push(cnt);
                }
            }
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pt_core::{Point, Raster};

    use super::{FindConfig, find_contours};
    use crate::Error;

    fn fill_rect(img: &mut Raster, x0: usize, y0: usize, w: usize, h: usize) {
        for y in y0..y0 + h {
            for x in x0..x0 + w {
                img.set(0, x as i64, y as i64, 255);
            }
        }
    }

    fn stride(step: usize) -> FindConfig {
        FindConfig {
            step_x: step,
            step_y: step,
        }
    }

    #[test]
    fn rejects_zero_stride() {
        let img = Raster::new(1, 8, 8);

        let err = find_contours(&img, &stride(0)).expect_err("stride 0 is invalid");
        assert_eq!(err, Error::InvalidStep { step_x: 0, step_y: 0 });
    }

    #[test]
    fn rejects_multi_channel_input() {
        let img = Raster::new(3, 8, 8);

        let err = find_contours(&img, &stride(1)).expect_err("3 channels are invalid");
        assert_eq!(err, Error::ChannelCount { actual: 3 });
    }

    #[test]
    fn empty_image_has_no_contours() {
        let img = Raster::new(1, 16, 16);

        let cnts = find_contours(&img, &FindConfig::default()).expect("valid input");
        assert!(cnts.is_empty());
    }

    #[test]
    fn two_squares_two_disjoint_contours() {
        let mut img = Raster::new(1, 24, 12);
        fill_rect(&mut img, 1, 1, 8, 8);
        fill_rect(&mut img, 12, 1, 8, 8);

        let cnts = find_contours(&img, &stride(1)).expect("valid input");
        assert_eq!(cnts.len(), 2);

        // scan order: the left square is discovered first
        assert_eq!(cnts[0].get(0), Some(Point::new(1, 1)));
        assert_eq!(cnts[1].get(0), Some(Point::new(12, 1)));
        assert_eq!(cnts[0].len(), 4 * 7);
        assert_eq!(cnts[1].len(), 4 * 7);

        // all points are foreground, and no point belongs to both contours
        let mut seen: HashSet<Point> = HashSet::new();
        for cnt in &cnts {
            for &p in cnt.iter() {
                assert_ne!(img.get(0, p.x as i64, p.y as i64, 0), 0);
                assert!(seen.insert(p), "contours share point {p:?}");
            }
        }
    }

    #[test]
    fn strided_scan_still_traces_the_full_boundary() {
        // top-left corner lies on the stride-3 grid, so the sparse scan
        // starts the trace there and walks the whole ring
        let mut img = Raster::new(1, 16, 16);
        fill_rect(&mut img, 3, 3, 10, 10);

        let cnts = find_contours(&img, &stride(3)).expect("valid input");
        assert_eq!(cnts.len(), 1);
        assert_eq!(cnts[0].len(), 4 * 9);
    }

    #[test]
    fn repeated_runs_are_identical() {
        let mut img = Raster::new(1, 24, 16);
        fill_rect(&mut img, 2, 2, 9, 9);
        fill_rect(&mut img, 13, 4, 8, 8);

        let cfg = stride(1);
        let first = find_contours(&img, &cfg).expect("valid input");
        let second = find_contours(&img, &cfg).expect("valid input");

        assert_eq!(first, second);
    }

    #[test]
    fn speck_noise_is_ignored() {
        let mut img = Raster::new(1, 16, 16);
        fill_rect(&mut img, 2, 2, 8, 8);
        img.set(0, 13, 13, 255);
        img.set(0, 13, 1, 255);

        let cnts = find_contours(&img, &stride(1)).expect("valid input");
        assert_eq!(cnts.len(), 1);
        assert_eq!(cnts[0].len(), 4 * 7);
    }
}
