use clap::Parser;
use csv::ReaderBuilder;
use plotters::prelude::*;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Scatter predicted against installed power from a predictions CSV"
)]
struct Cli {
    #[arg(long)]
    input: String,
    #[arg(long, default_value = "artifacts/power.png")]
    output: PathBuf,
    /// Plot only this formula (default: all formulas in the file)
    #[arg(long)]
    formula: Option<String>,
    #[arg(long, default_value_t = 1200)]
    width: u32,
    #[arg(long, default_value_t = 900)]
    height: u32,
    /// Skip captions, axis text and legend (no system fonts required)
    #[arg(long, default_value_t = false)]
    no_labels: bool,
}

const SERIES_COLORS: [RGBColor; 6] = [
    RGBColor(31, 119, 180),
    RGBColor(214, 39, 40),
    RGBColor(44, 160, 44),
    RGBColor(255, 127, 14),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
];

#[derive(Debug, Clone, Copy)]
struct Point {
    actual_hp: f64,
    predicted_hp: f64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let series = read_series(&cli.input, cli.formula.as_deref())?;
    if series.is_empty() {
        return Err(anyhow::anyhow!(
            "No usable predictions in the provided CSV"
        ));
    }

    let upper = series
        .values()
        .flatten()
        .map(|p| p.actual_hp.max(p.predicted_hp))
        .fold(0.0_f64, f64::max)
        * 1.05;
    let upper = if upper > 0.0 { upper } else { 1.0 };

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

    let mut builder = ChartBuilder::on(&root);
    builder.margin(20);
    if !cli.no_labels {
        let font_family = select_font_family();
        builder
            .caption(
                "Predicted vs installed power",
                FontDesc::new(font_family, 24.0, FontStyle::Bold),
            )
            .x_label_area_size(60)
            .y_label_area_size(90);
    }
    let mut chart = builder.build_cartesian_2d(0.0..upper, 0.0..upper)?;

    if cli.no_labels {
        chart
            .configure_mesh()
            .x_labels(0)
            .y_labels(0)
            .draw()?;
    } else {
        let label_font = FontDesc::new(select_font_family(), 18.0, FontStyle::Normal);
        chart
            .configure_mesh()
            .x_desc("Installed power (hp)")
            .y_desc("Predicted power (hp)")
            .label_style(label_font)
            .x_labels(6)
            .y_labels(6)
            .x_label_formatter(&|v| format!("{:.0}k", v / 1000.0))
            .y_label_formatter(&|v| format!("{:.0}k", v / 1000.0))
            .draw()?;
    }

    chart.draw_series(std::iter::once(PathElement::new(
        vec![(0.0, 0.0), (upper, upper)],
        ShapeStyle::from(&BLACK.mix(0.5)).stroke_width(1),
    )))?;

    for (idx, (formula, points)) in series.iter().enumerate() {
        let color = SERIES_COLORS[idx % SERIES_COLORS.len()];
        let drawn = chart.draw_series(points.iter().map(|p| {
            Circle::new((p.actual_hp, p.predicted_hp), 4, color.filled())
        }))?;
        if !cli.no_labels {
            drawn
                .label(formula.as_str())
                .legend(move |(x, y)| Circle::new((x + 10, y), 4, color.filled()));
        }
    }

    if !cli.no_labels {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .label_font(FontDesc::new(select_font_family(), 16.0, FontStyle::Normal))
            .draw()?;
    }

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

fn read_series(
    path: &str,
    formula_filter: Option<&str>,
) -> anyhow::Result<BTreeMap<String, Vec<Point>>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let headers = rdr.headers()?.clone();
    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name))
            .ok_or_else(|| anyhow::anyhow!("CSV missing '{}' column", name))
    };
    let formula_idx = column("formula")?;
    let actual_idx = column("actual_hp")?;
    let predicted_idx = column("predicted_hp")?;

    let mut series: BTreeMap<String, Vec<Point>> = BTreeMap::new();
    for rec in rdr.records() {
        let r = rec?;
        let formula = r.get(formula_idx).unwrap_or("");
        if formula_filter.is_some_and(|f| !f.eq_ignore_ascii_case(formula)) {
            continue;
        }
        let actual_hp: f64 = r.get(actual_idx).unwrap_or("").parse().unwrap_or(f64::NAN);
        let predicted_hp: f64 = r.get(predicted_idx).unwrap_or("").parse().unwrap_or(f64::NAN);
        if actual_hp.is_finite() && predicted_hp.is_finite() {
            series.entry(formula.to_string()).or_default().push(Point {
                actual_hp,
                predicted_hp,
            });
        }
    }
    Ok(series)
}
