// File: crates/demo/src/main.rs
// Summary: Demo loads the glacier CSV, applies toggle state, and writes SVG/PNG charts.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use lakechart_core::{
    dataset, theme, Chart, RenderOptions, Series, ToggleControl, VisibilityController,
};
use lakechart_svg::SvgRenderer;

const SERIES_ID: &str = "glacier_712529";
const DEFAULT_INPUT: &str = "crates/demo/data/US_glacier_712529.csv";

fn main() -> Result<()> {
    // Args: [csv] [--hide <series-id>]... [--out <dir>] [--theme <name>]
    let mut input: Option<PathBuf> = None;
    let mut hidden: Vec<String> = Vec::new();
    let mut out_dir = PathBuf::from("target/out");
    let mut theme_name = "light".to_string();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--hide" => {
                i += 1;
                let id = args.get(i).context("--hide needs a series id")?;
                hidden.push(id.clone());
            }
            "--out" => {
                i += 1;
                out_dir = PathBuf::from(args.get(i).context("--out needs a directory")?);
            }
            "--theme" => {
                i += 1;
                theme_name = args.get(i).context("--theme needs a name")?.clone();
            }
            other => input = Some(PathBuf::from(other)),
        }
        i += 1;
    }
    let path = input.unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT));
    println!("Using input file: {}", path.display());

    let records = dataset::load_records(&path)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    println!("Loaded {} records", records.len());
    if records.is_empty() {
        anyhow::bail!("no records loaded - check headers/delimiter.");
    }

    let mut chart = Chart::new("Glacier Lake Area (1985-2020)");
    chart.y_axis.label = "Area".to_string();
    chart.theme = theme::find(&theme_name);
    chart.add_series(Series::new(SERIES_ID, records));

    let opts = RenderOptions::default();
    let mut scene = chart.build_scene(&opts)?;

    // Each --hide is an uncheck click, fast-forwarded to its terminal state.
    let mut controller = VisibilityController::new();
    for id in &hidden {
        let matched = controller.click(&scene, &ToggleControl::new(id.clone(), false));
        if matched == 0 {
            eprintln!("Warning: toggle '{}' matched no marks", id);
        }
    }
    controller.finish(&mut scene);

    let renderer = SvgRenderer::new();
    let out_svg = out_name(&path, &out_dir, "svg");
    renderer.write_svg(&scene, &opts, &out_svg)?;
    println!("Wrote {}", out_svg.display());

    let out_png = out_name(&path, &out_dir, "png");
    renderer.write_png(&scene, &opts, &out_png)?;
    println!("Wrote {}", out_png.display());

    Ok(())
}

/// Output file name like <out_dir>/glacier_<stem>.<ext>.
fn out_name(input: &Path, out_dir: &Path, ext: &str) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    out_dir.join(format!("glacier_{stem}.{ext}"))
}
