use clap::{Arg, Command};

use crate::batch::batch_args;

pub const STATS_CMD: &str = "stats";
pub const DEFAULT_STATS_FILE: &str = "covdx_stats.json";

pub fn create_stats_cli() -> Command {
    Command::new(STATS_CMD)
        .about("Compute coverage and read-length statistics for a directory of BAM files and write them as JSON.")
        .args(batch_args())
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .default_value(DEFAULT_STATS_FILE)
                .help("Path of the JSON file (region -> sample -> statistics)"),
        )
}
