//! Example: blob boundary extraction on a thresholded image.
//!
//! Loads an image, binarizes it with a fixed intensity threshold, traces the
//! closed boundaries of every foreground region, and derives per-contour
//! analytics (centroid, extreme points, enclosed area, line fit).
//!
//! Results are written to a JSON file next to the input image.
//! Per-stage timing is printed to stdout.
//!
//! Run from the workspace root:
//!   cargo run -p pixeltrace --example blobs -- --help
//!   cargo run -p pixeltrace --example blobs -- --input data/blobs.png

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use image::ImageReader;
use pixeltrace::{FindConfig, Raster, area, centroid, extreme_points, find_contours, fit_line};
use serde::Serialize;

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(about = "Trace blob boundaries in a thresholded image")]
struct Args {
    /// Path to the input image (decoded to 8-bit grayscale)
    #[arg(long)]
    input: String,

    /// Foreground threshold: pixels at or above become foreground
    #[arg(long, default_value_t = 128)]
    threshold: u8,

    /// Scan stride in both axes (1 = every pixel)
    #[arg(long, default_value_t = 3)]
    step: usize,

    /// Output JSON path (default: <input stem>_contours.json next to input)
    #[arg(long)]
    out: Option<String>,
}

// ── JSON DTOs ─────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct PointDto {
    x: usize,
    y: usize,
}

#[derive(Serialize)]
struct LineFitDto {
    slope: f32,
    intercept: f32,
}

#[derive(Serialize)]
struct ContourDto {
    id: usize,
    len: usize,
    start: PointDto,
    centroid_x: f32,
    centroid_y: f32,
    north: PointDto,
    east: PointDto,
    south: PointDto,
    west: PointDto,
    area: usize,
    /// Absent when the boundary is vertical.
    fit: Option<LineFitDto>,
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();

    let img_path = &args.input;
    let out_path = args.out.unwrap_or_else(|| {
        let p = std::path::Path::new(img_path);
        let stem = p.file_stem().unwrap_or_default().to_string_lossy();
        let dir = p.parent().unwrap_or(std::path::Path::new("."));
        dir.join(format!("{stem}_contours.json"))
            .to_string_lossy()
            .into_owned()
    });

    // Load as 8-bit grayscale and binarize.
    let gray = ImageReader::open(img_path)
        .with_context(|| format!("opening {img_path}"))?
        .decode()
        .with_context(|| format!("decoding {img_path}"))?
        .into_luma8();

    let width = gray.width() as usize;
    let height = gray.height() as usize;

    let binary: Vec<u8> = gray
        .as_raw()
        .iter()
        .map(|&v| if v >= args.threshold { 255 } else { 0 })
        .collect();
    let raster = Raster::from_vec(1, width, height, binary).context("building binary raster")?;

    println!(
        "loaded {img_path}: {width}x{height}, threshold={}, step={}",
        args.threshold, args.step
    );

    let cfg = FindConfig {
        step_x: args.step,
        step_y: args.step,
    };

    let t0 = Instant::now();
    let contours = find_contours(&raster, &cfg).context("finding contours")?;
    let trace_ms = t0.elapsed().as_secs_f64() * 1e3;
    println!("traced {} contours  ({trace_ms:.2} ms)", contours.len());

    let t1 = Instant::now();
    let mut results: Vec<ContourDto> = Vec::with_capacity(contours.len());
    for (id, cnt) in contours.iter().enumerate() {
        let c = centroid(cnt).context("centroid")?;
        let ext = extreme_points(cnt).context("extreme points")?;
        let enclosed = area(cnt).context("area")?;
        let fit = fit_line(cnt).ok();

        let start = cnt.get(0).context("contour start point")?;

        results.push(ContourDto {
            id,
            len: cnt.len(),
            start: PointDto {
                x: start.x,
                y: start.y,
            },
            centroid_x: c.x,
            centroid_y: c.y,
            north: PointDto {
                x: ext.north.x,
                y: ext.north.y,
            },
            east: PointDto {
                x: ext.east.x,
                y: ext.east.y,
            },
            south: PointDto {
                x: ext.south.x,
                y: ext.south.y,
            },
            west: PointDto {
                x: ext.west.x,
                y: ext.west.y,
            },
            area: enclosed,
            fit: fit.map(|f| LineFitDto {
                slope: f.slope,
                intercept: f.intercept,
            }),
        });
    }
    let analyze_ms = t1.elapsed().as_secs_f64() * 1e3;
    println!("analyzed {} contours  ({analyze_ms:.2} ms)", results.len());

    let out_file =
        std::fs::File::create(&out_path).with_context(|| format!("creating {out_path}"))?;
    serde_json::to_writer_pretty(out_file, &results)
        .with_context(|| format!("writing JSON to {out_path}"))?;

    println!("results written to {out_path}");
    Ok(())
}
