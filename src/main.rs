use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;

use polyraster::config::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use polyraster::prelude::*;
use polyraster::scene;

/// Polygon count used when no input file is given.
const DEFAULT_RANDOM_POLYGONS: usize = 6;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    Wireframe,
    Filled,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Algorithm {
    Scanline,
    EdgeFunction,
}

#[derive(Parser)]
#[command(name = "polyraster", version, about = "Z-buffered polygon rasterizer")]
struct Args {
    /// Polygon file, one `{x y; x y; x y; depth}` polygon per line
    input: Option<PathBuf>,

    /// Generate this many random polygons instead of reading a file
    #[arg(long, conflicts_with = "input")]
    random: Option<usize>,

    /// Seed for random polygons and loaded polygon colors
    #[arg(long, default_value_t = 1)]
    seed: u64,

    #[arg(short, long, value_enum, default_value_t = Mode::Filled)]
    mode: Mode,

    #[arg(long, value_enum, default_value_t = Algorithm::Scanline)]
    rasterizer: Algorithm,

    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: u32,

    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: u32,

    /// Print vertex coordinate labels after a fill pass
    #[arg(long, default_value_t = false)]
    labels: bool,

    /// Trace only this many wireframe steps instead of a full pass
    #[arg(long)]
    steps: Option<usize>,

    /// Where to write the rendered PNG
    #[arg(short, long, default_value = "render.png")]
    output: PathBuf,
}

impl Args {
    fn config(&self) -> RenderConfig {
        RenderConfig {
            width: self.width,
            height: self.height,
            mode: match self.mode {
                Mode::Wireframe => RenderMode::Wireframe,
                Mode::Filled => RenderMode::Filled,
            },
            rasterizer: match self.rasterizer {
                Algorithm::Scanline => RasterizerType::Scanline,
                Algorithm::EdgeFunction => RasterizerType::EdgeFunction,
            },
            label_vertices: self.labels,
            ..RenderConfig::default()
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = args.config();
    let mut rng = StdRng::seed_from_u64(args.seed);

    let polygons = match &args.input {
        Some(path) => scene::load_polygons(path, &mut rng)
            .with_context(|| format!("loading {}", path.display()))?,
        None => {
            let count = args.random.unwrap_or(DEFAULT_RANDOM_POLYGONS);
            scene::random_polygons(count, config.width, config.height, &mut rng)
        }
    };
    log::info!("loaded {} polygons", polygons.len());

    let mut pipeline = RenderPipeline::from_config(&config)?;
    let mut surface = ColorBuffer::new(config.width, config.height, config.background)?;

    match args.steps {
        Some(steps) => run_steps(&mut pipeline, &polygons, &mut surface, steps),
        None => {
            let report = pipeline.render(&polygons, &mut surface);
            log::info!(
                "{} pass: {} polygons ({} skipped), {} triangles, {} edges, {} pixels",
                pipeline.render_mode(),
                report.polygons,
                report.skipped,
                report.triangles,
                report.edges,
                report.pixels
            );
            for label in &report.labels {
                println!("{}", label.text);
            }
        }
    }

    surface
        .save_png(&args.output)
        .with_context(|| format!("writing {}", args.output.display()))?;
    log::info!("wrote {}", args.output.display());
    Ok(())
}

fn run_steps(
    pipeline: &mut RenderPipeline,
    polygons: &[Polygon],
    surface: &mut ColorBuffer,
    steps: usize,
) {
    surface.clear();
    let mut stepper = WireframeStepper::new();
    stepper.reset(pipeline);

    for _ in 0..steps {
        match stepper.step(pipeline, polygons, surface) {
            StepOutcome::Empty => {
                log::warn!("no polygons to trace");
                break;
            }
            StepOutcome::Drew {
                polygon,
                edge,
                edges,
                pixels,
            } => log::info!(
                "polygon {polygon}: edge {} of {edges} ({pixels} pixels)",
                edge + 1
            ),
            StepOutcome::PolygonComplete { polygon } => {
                log::info!("polygon {polygon}: all edges drawn")
            }
            StepOutcome::Finished => {
                log::info!("all polygons drawn");
                break;
            }
        }
    }
}
