// File: crates/plot-demo/src/main.rs
// Summary: Demo loads a CSV (label column + up to six value columns) and renders it as a plot PNG.
// Usage: plot-demo [data.csv] [dpi]
// - Without a CSV, three synthetic series are plotted.
// - Empty cells are gaps; min/max per series are the floor/ceil of its data.

use anyhow::{Context, Result};
use log::{info, warn};
use plot_core::{NullHost, Plot, PlotOptions, SeriesSpec, MAX_SERIES};
use plot_render_skia::export_png;
use std::path::{Path, PathBuf};

struct Column {
    name: String,
    values: Vec<Option<f64>>,
}

fn main() -> Result<()> {
    env_logger::init();

    let input = std::env::args().nth(1);
    let dpi = match std::env::args().nth(2) {
        Some(s) => s.parse::<f32>().with_context(|| format!("bad dpi '{s}'"))?,
        None => 90.0,
    };

    let (title, labels, columns) = match &input {
        Some(raw) => {
            let path = Path::new(raw);
            let (labels, columns) = load_csv(path)
                .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
            let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("data").to_string();
            (stem, labels, columns)
        }
        None => {
            let (labels, columns) = synthetic(60);
            ("Synthetic waves".to_string(), labels, columns)
        }
    };
    if columns.is_empty() {
        anyhow::bail!("no value columns found; expected a label column followed by numbers");
    }
    info!("loaded {} series x {} samples", columns.len(), labels.len());

    let options = PlotOptions {
        title,
        caption: format!("{} samples", labels.len()),
        auto_grid: true,
        ..Default::default()
    };
    let mut plot = Plot::new(NullHost, 600, 400, options)?;
    for col in columns {
        let Some((min, max)) = value_range(&col.values) else {
            warn!("column '{}' has no numeric values; skipped", col.name);
            continue;
        };
        let spec = SeriesSpec::new(col.name.clone(), col.values, min, max)
            .with_labels(labels.iter().cloned())
            .with_long_name(col.name);
        plot.add(spec)?;
    }

    let out = PathBuf::from("target/out/plot_demo.png");
    export_png(&plot, &out, dpi)?;
    println!("Wrote {}", out.display());
    Ok(())
}

/// First column holds x labels; the header row names the series.
fn load_csv(path: &Path) -> Result<(Vec<String>, Vec<Column>)> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.clone();
    if headers.len() > MAX_SERIES + 1 {
        warn!("{} value columns; only the first {MAX_SERIES} are plotted", headers.len() - 1);
    }
    let mut columns: Vec<Column> = headers
        .iter()
        .skip(1)
        .take(MAX_SERIES)
        .map(|h| Column { name: h.trim().to_string(), values: Vec::new() })
        .collect();

    let mut labels = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        labels.push(rec.get(0).unwrap_or("").trim().to_string());
        for (i, col) in columns.iter_mut().enumerate() {
            let v = rec.get(i + 1).and_then(|s| s.trim().parse::<f64>().ok());
            col.values.push(v);
        }
    }
    Ok((labels, columns))
}

fn synthetic(n: usize) -> (Vec<String>, Vec<Column>) {
    let labels = (1..=n).map(|i| i.to_string()).collect();
    let wave = |name: &str, f: &dyn Fn(f64) -> f64| Column {
        name: name.to_string(),
        values: (0..n)
            .map(|i| if i % 17 == 16 { None } else { Some(f(i as f64)) })
            .collect(),
    };
    let columns = vec![
        wave("sine", &|x| (x * 0.2).sin() * 10.0 + 10.0),
        wave("ramp", &|x| x * 0.5),
        wave("cosine", &|x| (x * 0.15).cos() * 5.0 + 12.0),
    ];
    (labels, columns)
}

/// Integer-aligned range covering every present value.
fn value_range(values: &[Option<f64>]) -> Option<(f64, f64)> {
    let mut present = values.iter().flatten().copied().filter(|v| v.is_finite());
    let first = present.next()?;
    let (lo, hi) = present.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
    let (lo, hi) = (lo.floor(), hi.ceil());
    Some(if hi > lo { (lo, hi) } else { (lo, lo + 1.0) })
}
