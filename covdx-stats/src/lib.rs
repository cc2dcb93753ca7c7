//! # Coverage and read-length statistics over fixed genomic regions.
//!
//! For every alignment file of a batch and every configured region this crate computes
//! the per-base depth profile (with its mean and population standard deviation), the
//! running mean and sample standard deviation of read lengths, and the five largest read
//! lengths. Files are processed in parallel on a fixed-size worker pool; a file that
//! can't be read is reported and skipped without stopping the batch.
//!
//! ```no_run
//! use std::path::Path;
//!
//! use covdx_core::load_region_set;
//! use covdx_stats::{BamFileGlob, BamOpener, BatchOptions, collect_batch};
//!
//! let regions = load_region_set(None).unwrap();
//! let files = BamFileGlob::new(Path::new("bams/")).unwrap();
//! let summary = collect_batch(files.files(), &regions, &BamOpener::default(), &BatchOptions::default()).unwrap();
//! println!("{} samples", summary.matrix.n_samples());
//! ```
pub mod aggregate;
pub mod compute;
pub mod consts;
pub mod discovery;
pub mod moments;
pub mod orchestrator;
pub mod reader;
pub mod summary;
pub mod topk;

// re-exports
pub use aggregate::AggregateMatrix;
pub use compute::{compute_file_stats, compute_sample_stats};
pub use discovery::BamFileGlob;
pub use orchestrator::{BatchOptions, BatchSummary, SampleResult, collect_batch, run_batch};
pub use reader::{AlignmentOpener, AlignmentSource, BamOpener, BamSource, ReadLengths};
pub use summary::{DepthSummary, LengthSummary, RegionStats, SampleStats};
