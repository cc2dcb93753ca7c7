use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use covdx_report::{DEFAULT_REPORT_FILE, ReportAssets, ReportData, assemble, write_report};

use crate::batch::BatchInputs;

pub fn run_report(matches: &ArgMatches) -> Result<()> {
    let inputs = BatchInputs::from_matches(matches)?;

    let default_out = DEFAULT_REPORT_FILE.to_string();
    let output = PathBuf::from(matches.get_one::<String>("output").unwrap_or(&default_out));
    let assets_dir = matches.get_one::<String>("assets").map(Path::new);

    // configuration and assets first: nothing is processed if either is broken
    let regions = inputs.load_regions()?;
    let assets = ReportAssets::load(assets_dir).context("Failed to load report assets")?;

    let summary = inputs.run(&regions)?;

    let data = ReportData::from_summary(&summary, &regions);
    let html = assemble(&assets, &data).context("Failed to assemble the report")?;
    write_report(&output, &html)
        .with_context(|| format!("Failed to write the report to {}", output.display()))?;

    info!("Done: {}", output.display());
    Ok(())
}
