use std::env;
use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use mosaic_core::{LayoutSpec, OutputFormat, compose, encode_rgba_to_png_bytes};

mod loader;

/// Run configuration read from an optional JSON file: the layout spec plus
/// an output format override. When `format` is absent the output file
/// extension decides.
#[derive(Debug, Default, Deserialize)]
struct RunConfig {
    #[serde(flatten)]
    layout: LayoutSpec,
    #[serde(default)]
    format: Option<OutputFormat>,
}

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: mosaic <icons-dir> <output.(png|svg)> [config.json] [output_px]");
        std::process::exit(2);
    }
    let icons_dir = &args[1];
    let output = &args[2];

    let mut config = RunConfig::default();
    let mut output_px: Option<u32> = None;
    for arg in &args[3..] {
        if let Ok(px) = arg.parse::<u32>() {
            output_px = Some(px);
        } else {
            let txt = fs::read_to_string(arg)
                .map_err(|e| format!("cannot read config {arg}: {e}"))?;
            config = serde_json::from_str(&txt)
                .map_err(|e| format!("invalid config {arg}: {e}"))?;
        }
    }

    let sources = loader::load_dir(Path::new(icons_dir))?;
    info!(count = sources.len(), dir = %icons_dir, "loaded icon sources");

    let composite = compose(&sources, &config.layout)?;

    let format = config.format.unwrap_or_else(|| {
        if output.to_ascii_lowercase().ends_with(".svg") {
            OutputFormat::Vector
        } else {
            OutputFormat::Raster
        }
    });
    match format {
        OutputFormat::Vector => {
            fs::write(output, composite.svg.as_bytes())?;
        }
        OutputFormat::Raster => {
            let opt = usvg::Options::default();
            let tree = usvg::Tree::from_str(&composite.svg, &opt)
                .map_err(|e| format!("SVG parse error: {e:?}"))?;
            let side = output_px.unwrap_or(composite.canvas_size);
            let mut pixmap = tiny_skia::Pixmap::new(side, side).ok_or("pixmap alloc failed")?;
            let k = side as f32 / composite.canvas_size as f32;
            let mut pm = pixmap.as_mut();
            resvg::render(&tree, tiny_skia::Transform::from_scale(k, k), &mut pm);
            let bytes = encode_rgba_to_png_bytes(side, side, pixmap.data())?;
            fs::write(output, bytes)?;
        }
    }

    info!(
        canvas = composite.canvas_size,
        grid = composite.grid_size,
        placed = composite.placed,
        skipped = composite.warnings.len(),
        output = %output,
        "mosaic written"
    );
    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = fmt().with_env_filter(filter);
    if subscriber.try_init().is_err() {
        // already initialized
    }
}
