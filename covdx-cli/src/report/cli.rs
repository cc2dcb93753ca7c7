use clap::{Arg, Command};

use covdx_report::DEFAULT_REPORT_FILE;

use crate::batch::batch_args;

pub const REPORT_CMD: &str = "report";

pub fn create_report_cli() -> Command {
    Command::new(REPORT_CMD)
        .about("Compute coverage and read-length statistics for a directory of BAM files and render them as a single HTML report.")
        .args(batch_args())
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .default_value(DEFAULT_REPORT_FILE)
                .help("Path of the HTML report"),
        )
        .arg(
            Arg::new("assets")
                .long("assets")
                .short('a')
                .help("Directory with template.html, style.css and script.js (the bundled copies are used otherwise)"),
        )
}
