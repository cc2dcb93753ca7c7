use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use crate::batch::BatchInputs;
use crate::stats::cli::DEFAULT_STATS_FILE;

pub fn run_stats(matches: &ArgMatches) -> Result<()> {
    let inputs = BatchInputs::from_matches(matches)?;

    let default_out = DEFAULT_STATS_FILE.to_string();
    let output = PathBuf::from(matches.get_one::<String>("output").unwrap_or(&default_out));

    let regions = inputs.load_regions()?;
    let summary = inputs.run(&regions)?;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    summary
        .matrix
        .write_json(&output)
        .with_context(|| format!("Failed to write statistics to {}", output.display()))?;

    info!("Done: {}", output.display());
    Ok(())
}
