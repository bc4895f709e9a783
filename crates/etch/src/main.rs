//! etch: render an image as axis-aligned pen strokes.
//!
//! Binarizes the input image, plans the strokes with the chosen strategy,
//! and replays them on a raster canvas. Prints a short report of the plan,
//! or the full command list with `--json`.
//!
//! # Usage
//!
//! ```text
//! cargo run --release --bin etch -- [OPTIONS] <IMAGE_PATH>
//! ```

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use etch_pipeline::{Dimensions, GapPolicy, PlannerKind, ResizeFilter, Sketch, SketchConfig};
use etch_render::{Canvas, CanvasStyle, Rgb};
use tracing_subscriber::EnvFilter;

/// Render an image as the line art of a mechanical sketching toy.
///
/// Every stroke is horizontal or vertical. The default mode draws each
/// horizontal run of dark pixels separately; `--continuous` draws the
/// whole picture as one snaking line.
#[derive(Parser)]
#[command(name = "etch", version)]
struct Cli {
    /// Path to the input image (PNG, JPEG, BMP, WebP).
    image_path: PathBuf,

    /// Grid columns (more = more detail = more strokes).
    #[arg(long, default_value_t = SketchConfig::DEFAULT_TARGET_WIDTH, value_parser = clap::value_parser!(u32).range(1..))]
    width: u32,

    /// Grid rows.
    #[arg(long, default_value_t = SketchConfig::DEFAULT_TARGET_HEIGHT, value_parser = clap::value_parser!(u32).range(1..))]
    height: u32,

    /// Ink threshold, 0-255 (lower = darker pixels only = fewer lines).
    #[arg(long, default_value_t = SketchConfig::DEFAULT_THRESHOLD)]
    threshold: u8,

    /// Weight of the edge map when blending it into the image (0-1).
    #[arg(long, default_value_t = SketchConfig::DEFAULT_EDGE_BLEND)]
    edge_blend: f32,

    /// Percent of edge-map pixels clipped at each end before stretching.
    #[arg(long, default_value_t = SketchConfig::DEFAULT_AUTOCONTRAST_CUTOFF)]
    autocontrast_cutoff: f32,

    /// Resampling filter used to fit the image to the grid.
    #[arg(long, value_enum, default_value_t = Filter::CatmullRom)]
    resize_filter: Filter,

    /// Pen width in surface pixels.
    #[arg(long, default_value_t = SketchConfig::DEFAULT_LINE_WIDTH)]
    line_width: f64,

    /// Blank border around the drawing, in surface pixels.
    #[arg(long, default_value_t = SketchConfig::DEFAULT_PADDING)]
    padding: f64,

    /// Surface width in pixels.
    #[arg(long, default_value_t = SketchConfig::DEFAULT_SURFACE_SIZE)]
    surface_width: u32,

    /// Surface height in pixels.
    #[arg(long, default_value_t = SketchConfig::DEFAULT_SURFACE_SIZE)]
    surface_height: u32,

    /// Draw one continuous serpentine line with border connectors.
    #[arg(long)]
    continuous: bool,

    /// In continuous mode, lift the pen across blank gaps.
    #[arg(long, requires = "continuous")]
    lift_gaps: bool,

    /// JSON file with a full or partial `SketchConfig`.
    ///
    /// When provided, all other pipeline parameter flags are ignored.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Background color.
    #[arg(long, default_value_t = Rgb::SAND)]
    background: Rgb,

    /// Pen color.
    #[arg(long, default_value_t = Rgb::GRAPHITE)]
    pen_color: Rgb,

    /// Print the stroke commands as JSON instead of the report.
    #[arg(long)]
    json: bool,

    /// Save a PNG snapshot of the finished canvas.
    #[arg(long)]
    preview: Option<PathBuf>,

    /// Log every pipeline stage.
    #[arg(short, long)]
    verbose: bool,
}

/// Resize filter selection.
#[derive(Clone, Copy, ValueEnum)]
enum Filter {
    /// Nearest-neighbor (fastest, blocky).
    Nearest,
    /// Bilinear interpolation.
    Triangle,
    /// Bicubic Catmull-Rom.
    CatmullRom,
    /// Gaussian (smooth).
    Gaussian,
    /// Lanczos with 3 lobes (sharpest).
    Lanczos3,
}

impl From<Filter> for ResizeFilter {
    fn from(f: Filter) -> Self {
        match f {
            Filter::Nearest => Self::Nearest,
            Filter::Triangle => Self::Triangle,
            Filter::CatmullRom => Self::CatmullRom,
            Filter::Gaussian => Self::Gaussian,
            Filter::Lanczos3 => Self::Lanczos3,
        }
    }
}

/// Build a [`SketchConfig`] from CLI arguments.
///
/// If `--config` is provided, the file is parsed and all individual
/// parameter flags are ignored. Otherwise a config is assembled from the
/// flags.
fn config_from_cli(cli: &Cli) -> Result<SketchConfig, String> {
    if let Some(ref path) = cli.config {
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("Error reading {}: {e}", path.display()))?;
        return serde_json::from_str(&text)
            .map_err(|e| format!("Error parsing {}: {e}", path.display()));
    }

    let planner = if cli.continuous {
        PlannerKind::Serpentine {
            gap_policy: if cli.lift_gaps {
                GapPolicy::Lift
            } else {
                GapPolicy::Bridge
            },
        }
    } else {
        PlannerKind::Segments
    };

    Ok(SketchConfig {
        target_width: cli.width,
        target_height: cli.height,
        threshold: cli.threshold,
        edge_blend: cli.edge_blend,
        autocontrast_cutoff: cli.autocontrast_cutoff,
        resize_filter: cli.resize_filter.into(),
        line_width: cli.line_width,
        padding: cli.padding,
        surface: Dimensions::new(cli.surface_width, cli.surface_height),
        planner,
    })
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match config_from_cli(&cli) {
        Ok(c) => c,
        Err(msg) => {
            tracing::error!("{msg}");
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!("Config: {config:?}");

    let sketch = match etch_pipeline::sketch(&cli.image_path, &config) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Pipeline error: {e}");
            return ExitCode::FAILURE;
        }
    };

    #[allow(clippy::cast_possible_truncation)]
    let style = CanvasStyle {
        background: cli.background,
        pen: cli.pen_color,
        line_width: config.line_width as f32,
    };
    let mut canvas = match Canvas::new(config.surface, style) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::FAILURE;
        }
    };
    etch_render::replay(&sketch.commands, &mut canvas);
    tracing::info!(lines = canvas.lines_drawn(), "canvas rendered");

    if cli.json {
        match serde_json::to_string_pretty(&sketch.commands) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                tracing::error!("Error serializing commands: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!("{}", report(&cli.image_path, &config, &sketch));
    }

    if let Some(ref path) = cli.preview {
        match canvas.to_rgba_image().save(path) {
            Ok(()) => tracing::info!("Preview written to {}", path.display()),
            Err(e) => {
                tracing::error!("Error writing preview to {}: {e}", path.display());
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}

/// Human-readable summary of a planned sketch.
fn report(image_path: &Path, config: &SketchConfig, sketch: &Sketch) -> String {
    let stats = sketch.stats();
    let mode = match config.planner {
        PlannerKind::Segments => "segments",
        PlannerKind::Serpentine {
            gap_policy: GapPolicy::Bridge,
        } => "serpentine",
        PlannerKind::Serpentine {
            gap_policy: GapPolicy::Lift,
        } => "serpentine (lifted gaps)",
    };
    format!(
        "Image:          {}\n\
         Grid:           {}x{} ({} ink cells)\n\
         Mode:           {mode}\n\
         Pen lifts:      {}\n\
         Lines:          {}\n\
         Drawn length:   {:.1}\n\
         Travel length:  {:.1}",
        image_path.display(),
        sketch.grid.width(),
        sketch.grid.height(),
        sketch.grid.ink_count(),
        stats.moves,
        stats.draws,
        stats.drawn_length,
        stats.travel_length,
    )
}
