use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use image::{GrayImage, Rgb, RgbImage};
use pt_contour::{Contour, FindConfig, DEFAULT_TRACE_STEP};
use pt_core::Raster;
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "pt_gallery")]
#[command(about = "Run pixeltrace contour extraction on image fixtures")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Trace contours and write per-contour analytics as JSON
    #[command(name = "contours")]
    Contours(ContoursArgs),
    /// Trace contours and render them into an RGB overlay image
    #[command(name = "overlay")]
    Overlay(OverlayArgs),
    /// Report which contours contain a query point
    #[command(name = "inside")]
    Inside(InsideArgs),
}

#[derive(Args, Debug, Clone)]
struct CommonArgs {
    #[arg(long, required = true)]
    input: PathBuf,
    #[arg(long, default_value = "out")]
    out: PathBuf,
    /// Foreground threshold: pixels at or above become foreground
    #[arg(long, default_value_t = 128)]
    threshold: u8,
    #[arg(long, default_value_t = DEFAULT_TRACE_STEP)]
    step_x: usize,
    #[arg(long, default_value_t = DEFAULT_TRACE_STEP)]
    step_y: usize,
}

#[derive(Args, Debug, Clone)]
struct ContoursArgs {
    #[command(flatten)]
    common: CommonArgs,
    /// Also dump every contour's point list
    #[arg(long, default_value_t = false)]
    points: bool,
}

#[derive(Args, Debug, Clone)]
struct OverlayArgs {
    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Args, Debug, Clone)]
struct InsideArgs {
    #[command(flatten)]
    common: CommonArgs,
    #[arg(long)]
    x: usize,
    #[arg(long)]
    y: usize,
}

#[derive(Debug, Clone, Serialize)]
struct PointDto {
    x: usize,
    y: usize,
}

#[derive(Debug, Clone, Serialize)]
struct LineFitDto {
    slope: f32,
    intercept: f32,
}

#[derive(Debug, Clone, Serialize)]
struct ContourDto {
    id: usize,
    len: usize,
    start: PointDto,
    centroid: [f32; 2],
    north: PointDto,
    east: PointDto,
    south: PointDto,
    west: PointDto,
    area: usize,
    fit: Option<LineFitDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    points: Option<Vec<[usize; 2]>>,
}

#[derive(Debug, Clone, Serialize)]
struct MetaContours {
    threshold: u8,
    step_x: usize,
    step_y: usize,
    foreground_rule: &'static str,
    contour_count: usize,
}

#[derive(Debug, Clone, Serialize)]
struct InsideResult {
    x: usize,
    y: usize,
    containing: Vec<usize>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Command::Contours(args) => run_contours(args),
        Command::Overlay(args) => run_overlay(args),
        Command::Inside(args) => run_inside(args),
    }
}

fn run_contours(args: ContoursArgs) -> Result<()> {
    let case_dir = prepare_case(&args.common, "contours")?;
    let binary = load_binary_u8(&args.common.input, args.common.threshold)?;
    let contours = trace(&binary, &args.common)?;

    save_raster(case_dir.join("binary.png"), &binary)?;

    let mut dtos = Vec::with_capacity(contours.len());
    for (id, cnt) in contours.iter().enumerate() {
        dtos.push(contour_dto(id, cnt, args.points)?);
    }

    write_json(case_dir.join("contours.json"), &dtos)?;
    write_json(
        case_dir.join("meta.json"),
        &MetaContours {
            threshold: args.common.threshold,
            step_x: args.common.step_x,
            step_y: args.common.step_y,
            foreground_rule: "foreground iff value >= threshold",
            contour_count: contours.len(),
        },
    )?;

    println!("{} contours -> {}", contours.len(), case_dir.display());
    Ok(())
}

fn run_overlay(args: OverlayArgs) -> Result<()> {
    let case_dir = prepare_case(&args.common, "overlay")?;
    let binary = load_binary_u8(&args.common.input, args.common.threshold)?;
    let contours = trace(&binary, &args.common)?;

    let mut canvas = raster_to_rgb(&binary);

    for cnt in &contours {
        for p in cnt.iter() {
            put_px(&mut canvas, p.x, p.y, Rgb([220, 40, 40]));
        }

        let ext = pt_contour::extreme_points(cnt).context("extreme points")?;
        for p in [ext.north, ext.east, ext.south, ext.west] {
            put_px(&mut canvas, p.x, p.y, Rgb([40, 200, 40]));
        }

        let c = pt_contour::centroid(cnt).context("centroid")?;
        put_px(&mut canvas, c.x.round() as usize, c.y.round() as usize, Rgb([60, 60, 230]));
    }

    let path = case_dir.join("overlay.png");
    canvas
        .save(&path)
        .with_context(|| format!("saving image {}", path.display()))?;

    println!("{} contours -> {}", contours.len(), path.display());
    Ok(())
}

fn run_inside(args: InsideArgs) -> Result<()> {
    let case_dir = prepare_case(&args.common, "inside")?;
    let binary = load_binary_u8(&args.common.input, args.common.threshold)?;
    let contours = trace(&binary, &args.common)?;

    let containing: Vec<usize> = contours
        .iter()
        .enumerate()
        .filter(|(_, cnt)| pt_contour::is_inside(cnt, args.x, args.y))
        .map(|(id, _)| id)
        .collect();

    let result = InsideResult {
        x: args.x,
        y: args.y,
        containing,
    };
    write_json(case_dir.join("inside.json"), &result)?;

    println!(
        "({}, {}) inside {} of {} contours",
        args.x,
        args.y,
        result.containing.len(),
        contours.len()
    );
    Ok(())
}

fn trace(binary: &Raster, common: &CommonArgs) -> Result<Vec<Contour>> {
    let cfg = FindConfig {
        step_x: common.step_x,
        step_y: common.step_y,
    };
    pt_contour::find_contours(binary, &cfg).context("finding contours")
}

fn contour_dto(id: usize, cnt: &Contour, with_points: bool) -> Result<ContourDto> {
    let c = pt_contour::centroid(cnt).context("centroid")?;
    let ext = pt_contour::extreme_points(cnt).context("extreme points")?;
    let enclosed = pt_contour::area(cnt).context("area")?;
    let start = cnt.get(0).context("contour start point")?;

    Ok(ContourDto {
        id,
        len: cnt.len(),
        start: PointDto {
            x: start.x,
            y: start.y,
        },
        centroid: [c.x, c.y],
        north: point_dto(ext.north),
        east: point_dto(ext.east),
        south: point_dto(ext.south),
        west: point_dto(ext.west),
        area: enclosed,
        fit: pt_contour::fit_line(cnt).ok().map(|f| LineFitDto {
            slope: f.slope,
            intercept: f.intercept,
        }),
        points: with_points.then(|| cnt.iter().map(|p| [p.x, p.y]).collect()),
    })
}

fn point_dto(p: pt_core::Point) -> PointDto {
    PointDto { x: p.x, y: p.y }
}

fn prepare_case(common: &CommonArgs, case_name: &str) -> Result<PathBuf> {
    if !common.input.exists() {
        anyhow::bail!("input path {} does not exist", common.input.display());
    }

    let case_dir = common.out.join(case_name);
    fs::create_dir_all(&case_dir)
        .with_context(|| format!("creating output directory {}", case_dir.display()))?;

    Ok(case_dir)
}

/// Load any supported image as grayscale and binarize to 0/255.
fn load_binary_u8(path: &Path, threshold: u8) -> Result<Raster> {
    let dyn_img =
        image::open(path).with_context(|| format!("opening input image {}", path.display()))?;
    let luma = dyn_img.to_luma8();
    let (w, h) = luma.dimensions();

    let data: Vec<u8> = luma
        .into_raw()
        .iter()
        .map(|&v| if v >= threshold { 255 } else { 0 })
        .collect();

    Raster::from_vec(1, w as usize, h as usize, data)
        .with_context(|| format!("constructing raster from {}", path.display()))
}

fn save_raster(path: PathBuf, img: &Raster) -> Result<()> {
    let gray = GrayImage::from_raw(img.width() as u32, img.height() as u32, img.data().to_vec())
        .context("constructing GrayImage from raw bytes")?;
    gray.save(&path)
        .with_context(|| format!("saving image {}", path.display()))
}

fn raster_to_rgb(img: &Raster) -> RgbImage {
    let mut out = RgbImage::new(img.width() as u32, img.height() as u32);
    for y in 0..img.height() {
        for x in 0..img.width() {
            let v = img.get(0, x as i64, y as i64, 0);
            out.put_pixel(x as u32, y as u32, Rgb([v, v, v]));
        }
    }
    out
}

fn put_px(canvas: &mut RgbImage, x: usize, y: usize, color: Rgb<u8>) {
    if (x as u32) < canvas.width() && (y as u32) < canvas.height() {
        canvas.put_pixel(x as u32, y as u32, color);
    }
}

fn write_json<T: Serialize>(path: PathBuf, value: &T) -> Result<()> {
    let file = fs::File::create(&path)
        .with_context(|| format!("creating json file {}", path.display()))?;
    serde_json::to_writer_pretty(file, value)
        .with_context(|| format!("writing json to {}", path.display()))
}
