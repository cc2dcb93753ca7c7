use std::fs;
use std::path::Path;

use log::info;

use crate::assets::ReportAssets;
use crate::consts::{CSS_MARKER, DATA_MARKER, JS_MARKER};
use crate::data::ReportData;
use crate::error::Result;

///
/// Build the self-contained report document.
///
/// The stylesheet replaces `/*INJECT_CSS*/` and the script replaces `//INJECT_JS` in the
/// template. The data marker lives in the script, so the payload is injected last.
///
pub fn assemble(assets: &ReportAssets, data: &ReportData) -> Result<String> {
    let payload = data.to_script_json()?;

    let html = assets
        .template
        .replace(CSS_MARKER, &assets.style)
        .replace(JS_MARKER, &assets.script)
        .replace(DATA_MARKER, &payload);

    Ok(html)
}

///
/// Write an assembled report, creating missing parent directories first.
///
pub fn write_report(path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, html)?;
    info!("Report written to {}", path.display());
    Ok(())
}
