use clap::Parser;
use csv::ReaderBuilder;
use plotters::prelude::*;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Render a radiation pressure sweep CSV as a line chart"
)]
struct Cli {
    #[arg(long)]
    input: String,
    #[arg(long, default_value = "artifacts/sweep.png")]
    output: PathBuf,
    #[arg(long, default_value_t = 1200)]
    width: u32,
    #[arg(long, default_value_t = 900)]
    height: u32,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let points = read_points(&cli.input)?;
    if points.len() < 2 {
        return Err(anyhow::anyhow!("Sweep CSV holds fewer than two samples"));
    }

    if let Some(parent) = cli.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let output_str = cli
        .output
        .to_str()
        .ok_or_else(|| anyhow::anyhow!("Output path contains invalid UTF-8"))?;
    let root = BitMapBackend::new(output_str, (cli.width, cli.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let x_min = points.first().map(|p| p.0).unwrap_or(0.0);
    let x_max = points.last().map(|p| p.0).unwrap_or(1.0);
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for &(_, y) in &points {
        if y > 0.0 && y < y_min {
            y_min = y;
        }
        if y > y_max {
            y_max = y;
        }
    }
    if !(y_min.is_finite() && y_max.is_finite()) {
        return Err(anyhow::anyhow!("Sweep CSV holds no positive magnitudes"));
    }

    let font_family = select_font_family();
    let caption_font = FontDesc::new(font_family, 24.0, FontStyle::Bold);
    let label_font = FontDesc::new(font_family, 18.0, FontStyle::Normal);

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Radiation pressure magnitude", caption_font)
        .x_label_area_size(60)
        .y_label_area_size(110)
        .build_cartesian_2d(x_min..x_max, (y_min..y_max).log_scale())?;

    chart
        .configure_mesh()
        .x_desc("Distance (AU)")
        .y_desc("Acceleration (m/s^2)")
        .label_style(label_font.clone())
        .x_labels(8)
        .y_labels(8)
        .y_label_formatter(&|v| format!("{v:.2e}"))
        .draw()?;

    chart.draw_series(LineSeries::new(
        points.iter().copied(),
        ShapeStyle::from(&RGBColor(210, 100, 20)).stroke_width(2),
    ))?;

    root.present()?;
    Ok(())
}

fn select_font_family() -> FontFamily<'static> {
    if cfg!(target_os = "macos") {
        FontFamily::Name("Helvetica")
    } else if cfg!(target_os = "windows") {
        FontFamily::Name("Arial")
    } else {
        FontFamily::Name("DejaVu Sans")
    }
}

fn read_points(path: &str) -> anyhow::Result<Vec<(f64, f64)>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let headers = rdr.headers()?.clone();
    let distance_idx = headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case("distance_au"))
        .ok_or_else(|| anyhow::anyhow!("CSV missing 'distance_au' column"))?;
    let accel_idx = headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case("acceleration_m_s2"))
        .ok_or_else(|| anyhow::anyhow!("CSV missing 'acceleration_m_s2' column"))?;

    let mut points = Vec::new();
    for rec in rdr.records() {
        let r = rec?;
        let distance: f64 = r.get(distance_idx).unwrap_or("").parse().unwrap_or(f64::NAN);
        let accel: f64 = r.get(accel_idx).unwrap_or("").parse().unwrap_or(f64::NAN);
        if distance.is_finite() && accel.is_finite() {
            points.push((distance, accel));
        }
    }
    points.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());
    Ok(points)
}
