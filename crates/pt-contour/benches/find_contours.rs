use criterion::{Criterion, black_box, criterion_group, criterion_main};
use pt_contour::{FindConfig, find_contours};
use pt_core::Raster;

/// Grid of solid squares, every one large enough to survive noise rejection.
fn synthetic_blobs(width: usize, height: usize, side: usize, pitch: usize) -> Raster {
    let mut img = Raster::new(1, width, height);

    for by in (4..height.saturating_sub(side + 4)).step_by(pitch) {
        for bx in (4..width.saturating_sub(side + 4)).step_by(pitch) {
            for y in by..by + side {
                for x in bx..bx + side {
                    img.set(0, x as i64, y as i64, 255);
                }
            }
        }
    }

    img
}

fn bench_find_contours(c: &mut Criterion) {
    let img = synthetic_blobs(1280, 1024, 24, 64);

    let dense = FindConfig {
        step_x: 1,
        step_y: 1,
    };
    c.bench_function("find_contours_1280x1024_stride1", |b| {
        b.iter(|| {
            let cnts = find_contours(black_box(&img), black_box(&dense)).expect("valid input");
            black_box(cnts.len());
        });
    });

    let sparse = FindConfig::default();
    c.bench_function("find_contours_1280x1024_stride3", |b| {
        b.iter(|| {
            let cnts = find_contours(black_box(&img), black_box(&sparse)).expect("valid input");
            black_box(cnts.len());
        });
    });
}

criterion_group!(benches, bench_find_contours);
criterion_main!(benches);
