use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use std::sync::mpsc;

use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};

use covdx_core::errors::{CovdxError, Result};
use covdx_core::models::{RegionSet, sample_id_from_path};
use covdx_core::utils::default_workers;

use crate::aggregate::AggregateMatrix;
use crate::compute::compute_file_stats;
use crate::reader::AlignmentOpener;
use crate::summary::SampleStats;

#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Size of the worker pool, fixed for the whole batch.
    pub workers: usize,
    /// Draw a progress bar while files complete.
    pub progress: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        BatchOptions {
            workers: default_workers(),
            progress: true,
        }
    }
}

///
/// Outcome of one file: its statistics, or the reason it failed. Never partial.
///
#[derive(Debug)]
pub struct SampleResult {
    pub sample_id: String,
    pub path: PathBuf,
    pub outcome: Result<SampleStats>,
}

///
/// The frozen result of a batch: the aggregate matrix plus success and failure counts.
///
/// `processed` counts distinct samples in the matrix. A file whose sample id was already
/// merged replaces the earlier entries and is counted in `replaced` instead, so
/// `processed + replaced + failed() == total`.
///
#[derive(Debug)]
pub struct BatchSummary {
    pub matrix: AggregateMatrix,
    pub total: usize,
    pub processed: usize,
    pub replaced: usize,
    pub failures: Vec<(String, String)>,
}

impl BatchSummary {
    fn new(regions: &RegionSet, total: usize) -> Self {
        BatchSummary {
            matrix: AggregateMatrix::new(regions),
            total,
            processed: 0,
            replaced: 0,
            failures: Vec::new(),
        }
    }

    fn record(&mut self, result: SampleResult) {
        match result.outcome {
            Ok(stats) => {
                if self.matrix.merge(&result.sample_id, stats) {
                    warn!(
                        "Sample {} was already processed from another file, keeping {} (counted once)",
                        result.sample_id,
                        result.path.display()
                    );
                    self.replaced += 1;
                } else {
                    self.processed += 1;
                }
            }
            Err(err) => self.failures.push((result.sample_id, err.to_string())),
        }
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }
}

///
/// Run the statistics computation for every file on a fixed-size worker pool.
///
/// Each file is one task that owns its reader from open to close. Results travel back
/// over a channel and `on_result` is called on the calling thread, once per file, in
/// completion order. Returns once every task has finished. A failing file is logged and
/// reported through `on_result`; it never stops the other tasks.
///
/// # Arguments
///
/// - files: alignment files to process
/// - regions: regions to evaluate in every file
/// - opener: opens one file per task
/// - options: pool size and progress display
/// - on_result: consumer of finished results
///
pub fn run_batch<O, F>(
    files: &[PathBuf],
    regions: &RegionSet,
    opener: &O,
    options: &BatchOptions,
    mut on_result: F,
) -> Result<()>
where
    O: AlignmentOpener,
    F: FnMut(SampleResult),
{
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(options.workers.max(1))
        .build()
        .map_err(|err| CovdxError::ThreadPool(err.to_string()))?;

    let bar = progress_bar(files.len(), options.progress);
    let (tx, rx) = mpsc::channel::<SampleResult>();

    pool.in_place_scope(|scope| {
        for path in files {
            let tx = tx.clone();
            scope.spawn(move |_| {
                let result = process_file(opener, path, regions);
                // the receiver is drained until every sender is gone, so this can't fail
                let _ = tx.send(result);
            });
        }
        drop(tx);

        for result in rx {
            match &result.outcome {
                Ok(_) => bar.suspend(|| debug!("Finished: {}", result.sample_id)),
                Err(err) => bar.suspend(|| warn!("Failed: {} - {}", result.sample_id, err)),
            }
            bar.inc(1);
            on_result(result);
        }
    });

    bar.finish_and_clear();
    Ok(())
}

///
/// Run a batch and fold every successful sample into an [AggregateMatrix].
///
/// The matrix is only touched here, on the calling thread, as results arrive.
///
pub fn collect_batch<O>(
    files: &[PathBuf],
    regions: &RegionSet,
    opener: &O,
    options: &BatchOptions,
) -> Result<BatchSummary>
where
    O: AlignmentOpener,
{
    info!(
        "Processing {} BAMs over {} regions with {} threads...",
        files.len(),
        regions.len(),
        options.workers.max(1)
    );

    let mut summary = BatchSummary::new(regions, files.len());
    run_batch(files, regions, opener, options, |result| summary.record(result))?;

    info!(
        "Processed {} samples from {} files ({} failed, {} replaced by a later file)",
        summary.processed,
        summary.total,
        summary.failed(),
        summary.replaced
    );

    Ok(summary)
}

fn process_file<O>(opener: &O, path: &Path, regions: &RegionSet) -> SampleResult
where
    O: AlignmentOpener,
{
    let sample_id = sample_id_from_path(path);

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        compute_file_stats(opener, path, regions)
    }))
    .unwrap_or_else(|payload| {
        Err(CovdxError::FileReadError(format!(
            "{}: reader panicked: {}",
            path.display(),
            panic_message(payload.as_ref())
        )))
    });

    SampleResult {
        sample_id,
        path: path.to_path_buf(),
        outcome,
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "unknown cause"
    }
}

fn progress_bar(len: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let bar = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::with_template(
        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({eta})",
    ) {
        bar.set_style(style.progress_chars("#>-"));
    }
    bar
}
