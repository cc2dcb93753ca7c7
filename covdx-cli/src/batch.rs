use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, value_parser};
use log::warn;

use covdx_core::models::RegionSet;
use covdx_core::{load_region_set, utils::default_workers};
use covdx_stats::consts::DEFAULT_MIN_BASE_QUALITY;
use covdx_stats::{BamFileGlob, BamOpener, BatchOptions, BatchSummary, collect_batch};

///
/// Arguments shared by every subcommand that processes a directory of BAM files.
///
pub fn batch_args() -> Vec<Arg> {
    vec![
        Arg::new("input")
            .long("input")
            .short('i')
            .required(true)
            .help("Directory containing the indexed BAM files"),
        Arg::new("workers")
            .long("workers")
            .short('w')
            .value_parser(value_parser!(usize))
            .help("Number of files processed in parallel (defaults to the number of CPUs)"),
        Arg::new("regions")
            .long("regions")
            .short('r')
            .help("TOML file with a [regions] table of name = \"chr:start-end\""),
        Arg::new("min-bq")
            .long("min-bq")
            .value_parser(value_parser!(u8))
            .help(format!(
                "Minimum base quality for a base to count towards depth [default: {}]",
                DEFAULT_MIN_BASE_QUALITY
            )),
    ]
}

/// The resolved form of [batch_args].
#[derive(Debug)]
pub struct BatchInputs {
    pub input: PathBuf,
    pub regions: Option<PathBuf>,
    pub workers: usize,
    pub min_base_quality: u8,
}

impl BatchInputs {
    pub fn from_matches(matches: &ArgMatches) -> Result<Self> {
        let input = matches
            .get_one::<String>("input")
            .context("An input directory is required.")?;

        Ok(BatchInputs {
            input: PathBuf::from(input),
            regions: matches.get_one::<String>("regions").map(PathBuf::from),
            workers: matches
                .get_one::<usize>("workers")
                .copied()
                .unwrap_or_else(default_workers)
                .max(1),
            min_base_quality: matches
                .get_one::<u8>("min-bq")
                .copied()
                .unwrap_or(DEFAULT_MIN_BASE_QUALITY),
        })
    }

    /// Load the region set. Any problem here stops the run before a file is opened.
    pub fn load_regions(&self) -> Result<RegionSet> {
        load_region_set(self.regions.as_deref()).with_context(|| match &self.regions {
            Some(path) => format!("Failed to load regions from {}", path.display()),
            None => "Failed to build the default region set".to_string(),
        })
    }

    ///
    /// Discover every BAM in the input directory and process the batch.
    ///
    pub fn run(&self, regions: &RegionSet) -> Result<BatchSummary> {
        let files = discover(&self.input)?;

        let opener = BamOpener {
            min_base_quality: self.min_base_quality,
        };
        let options = BatchOptions {
            workers: self.workers,
            progress: true,
        };

        Ok(collect_batch(files.files(), regions, &opener, &options)?)
    }
}

fn discover(input: &Path) -> Result<BamFileGlob> {
    let files = BamFileGlob::new(input)
        .with_context(|| format!("Can't list BAM files in {}", input.display()))?;
    if files.is_empty() {
        warn!("No .bam files found in {}", input.display());
    }
    Ok(files)
}
