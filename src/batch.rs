//! Batch generation of random rosettes.
//!
//! Each iteration starts from a blank canvas with the pen at home, samples
//! one configuration, draws it, and exports it as `img_NNN.png` in the
//! output directory. A seeded run is fully reproducible: the same seed
//! gives the same configurations and the same output bytes.

use std::ops::ControlFlow;
use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::Result;
use crate::export::{ExportOutcome, ExportPipeline};
use crate::pen::{Canvas, PenSurface};
use crate::rosette::{draw, CompositionConfig};
use crate::sampler::CompositionSampler;

/// Number of images a batch produces unless told otherwise.
pub const DEFAULT_IMAGE_COUNT: usize = 100;
/// Default directory for per-composition images.
pub const DEFAULT_OUT_DIR: &str = "out/batch";
/// Default path of the closing screenshot.
pub const DEFAULT_SCREENSHOT: &str = "out/batch/screenshot.png";

/// File name of the `index`-th (1-based) image.
pub fn image_file_name(index: usize) -> String {
    format!("img_{index:03}.png")
}

/// The random source for a run: seeded when `seed` is given.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    }
}

/// Batch settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOptions {
    pub count: usize,
    pub seed: Option<u64>,
    pub out_dir: PathBuf,
    /// Where to re-export the last composition after the loop, if anywhere.
    pub screenshot: Option<PathBuf>,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            count: DEFAULT_IMAGE_COUNT,
            seed: None,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            screenshot: Some(PathBuf::from(DEFAULT_SCREENSHOT)),
        }
    }
}

/// One finished iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchItem {
    /// 1-based iteration number.
    pub index: usize,
    pub config: CompositionConfig,
    pub outcome: ExportOutcome,
}

/// Everything a batch run produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    pub items: Vec<BatchItem>,
    pub screenshot: Option<ExportOutcome>,
    /// The observer asked to stop before `count` was reached.
    pub stopped_early: bool,
}

impl BatchReport {
    pub fn configs(&self) -> impl Iterator<Item = &CompositionConfig> {
        self.items.iter().map(|item| &item.config)
    }
}

/// Runs batches of random compositions.
#[derive(Debug)]
pub struct BatchRunner {
    sampler: CompositionSampler,
    export: ExportPipeline,
}

impl BatchRunner {
    pub fn new(sampler: CompositionSampler, export: ExportPipeline) -> Self {
        Self { sampler, export }
    }

    pub fn sampler(&self) -> &CompositionSampler {
        &self.sampler
    }

    pub fn export(&self) -> &ExportPipeline {
        &self.export
    }

    /// Run the whole batch.
    pub fn run(&self, canvas: &mut Canvas, options: &BatchOptions) -> Result<BatchReport> {
        self.run_with(canvas, options, |_| ControlFlow::Continue(()))
    }

    /// Run the batch, calling `observer` after every iteration. Returning
    /// `ControlFlow::Break` stops before the next one starts.
    pub fn run_with<F>(
        &self,
        canvas: &mut Canvas,
        options: &BatchOptions,
        mut observer: F,
    ) -> Result<BatchReport>
    where
        F: FnMut(&BatchItem) -> ControlFlow<()>,
    {
        let mut rng = make_rng(options.seed);
        let mut report = BatchReport::default();
        log::debug!(
            "starting batch of {} into {} (seed {:?})",
            options.count,
            options.out_dir.display(),
            options.seed
        );

        for index in 1..=options.count {
            canvas.clear();
            canvas.set_pen_down(false);
            canvas.home();
            canvas.set_pen_down(true);

            let config = self.sampler.sample(&mut rng);
            log::info!("[{index:03}] {config}");
            draw(canvas, &config)?;

            let path = options.out_dir.join(image_file_name(index));
            let outcome = self.export.export(canvas.drawing(), &path)?;
            report.items.push(BatchItem {
                index,
                config,
                outcome,
            });

            if let Some(item) = report.items.last() {
                if observer(item).is_break() {
                    if index < options.count {
                        log::info!("batch stopped after {index} of {}", options.count);
                        report.stopped_early = true;
                    }
                    break;
                }
            }
        }

        if let Some(path) = options.screenshot.as_deref() {
            report.screenshot = self.screenshot(canvas, &report, path)?;
        }
        Ok(report)
    }

    fn screenshot(
        &self,
        canvas: &Canvas,
        report: &BatchReport,
        path: &Path,
    ) -> Result<Option<ExportOutcome>> {
        if report.items.is_empty() {
            return Ok(None);
        }
        let outcome = self.export.export(canvas.drawing(), path)?;
        log::info!("saved last composition to {}", outcome.path().display());
        Ok(Some(outcome))
    }
}

impl Default for BatchRunner {
    fn default() -> Self {
        Self::new(CompositionSampler::default(), ExportPipeline::default())
    }
}
