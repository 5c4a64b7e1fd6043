//! Command-line driver: draw the built-in compositions or a random batch.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;

use rosette::batch::{BatchOptions, BatchRunner, DEFAULT_IMAGE_COUNT, DEFAULT_OUT_DIR};
use rosette::export::{ExportOutcome, ExportPipeline};
use rosette::fixed::{draw_fixed, FIXED_COMPOSITIONS};
use rosette::sampler::CompositionSampler;
use rosette::session::DrawingSession;

const DEFAULT_FIXED_OUTPUT: &str = "out/fixed/screenshot.png";

/// Draw rosettes and export them as images
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Write SVG even when a raster encoder is available
    #[arg(long, global = true)]
    vector_only: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Draw the three built-in compositions onto one canvas
    Fixed {
        /// Output image path
        #[arg(short, long, default_value = DEFAULT_FIXED_OUTPUT)]
        output: PathBuf,
    },
    /// Draw a batch of random compositions, one image each
    Batch {
        /// Seed for a reproducible run; omit for a random one
        #[arg(short, long)]
        seed: Option<u64>,

        /// Number of images
        #[arg(short, long, default_value_t = DEFAULT_IMAGE_COUNT)]
        count: usize,

        /// Directory for img_NNN files
        #[arg(long, default_value = DEFAULT_OUT_DIR)]
        out_dir: PathBuf,

        /// Where to save the last composition again; defaults to
        /// <out-dir>/screenshot.png
        #[arg(long)]
        screenshot: Option<PathBuf>,
    },
}

fn pipeline(vector_only: bool) -> ExportPipeline {
    if vector_only {
        ExportPipeline::vector_only()
    } else {
        ExportPipeline::default()
    }
}

fn describe(outcome: &ExportOutcome) -> String {
    match outcome {
        ExportOutcome::Raster {
            path,
            width,
            height,
        } => format!("{} ({width}x{height})", path.display()),
        ExportOutcome::VectorFallback { path } => format!("{} (svg)", path.display()),
    }
}

fn run_fixed(session: &DrawingSession, export: &ExportPipeline, output: PathBuf) -> Result<()> {
    let mut canvas = session.open_canvas();
    draw_fixed(&mut canvas, &FIXED_COMPOSITIONS).context("drawing the built-in compositions")?;
    let outcome = export
        .export(canvas.drawing(), &output)
        .with_context(|| format!("exporting {}", output.display()))?;
    info!("saved {}", describe(&outcome));
    Ok(())
}

fn run_batch(session: &DrawingSession, export: ExportPipeline, options: BatchOptions) -> Result<()> {
    let mut canvas = session.open_canvas();
    let runner = BatchRunner::new(CompositionSampler::default(), export);
    let report = runner
        .run(&mut canvas, &options)
        .with_context(|| format!("running batch into {}", options.out_dir.display()))?;
    info!(
        "wrote {} images to {}",
        report.items.len(),
        options.out_dir.display()
    );
    if let Some(shot) = &report.screenshot {
        info!("screenshot {}", describe(shot));
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let session = DrawingSession::default();
    session.ensure_color_mode();
    let export = pipeline(args.vector_only);
    if !export.has_encoder() {
        info!("raster encoding disabled; exporting SVG");
    }

    match args.command {
        Command::Fixed { output } => run_fixed(&session, &export, output),
        Command::Batch {
            seed,
            count,
            out_dir,
            screenshot,
        } => {
            let screenshot = screenshot.unwrap_or_else(|| out_dir.join("screenshot.png"));
            let options = BatchOptions {
                count,
                seed,
                out_dir,
                screenshot: Some(screenshot),
            };
            run_batch(&session, export, options)
        }
    }
}
