use std::collections::BTreeMap;

use serde::Serialize;

use covdx_core::models::RegionSet;
use covdx_stats::{AggregateMatrix, BatchSummary};

/// Batch-level facts shown alongside the per-region statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportMeta {
    /// Number of alignment files discovered.
    pub count: usize,
    pub processed: usize,
    pub failed: usize,
    /// Region id to its 1-based `chr:start-end` coordinates.
    pub coordinates: BTreeMap<String, String>,
    pub version: String,
}

///
/// The JSON payload embedded in the report: `{ "regions": matrix, "meta": {...} }`.
///
#[derive(Debug, Clone, Serialize)]
pub struct ReportData<'a> {
    pub regions: &'a AggregateMatrix,
    pub meta: ReportMeta,
}

impl<'a> ReportData<'a> {
    pub fn from_summary(summary: &'a BatchSummary, regions: &RegionSet) -> Self {
        ReportData {
            regions: &summary.matrix,
            meta: ReportMeta {
                count: summary.total,
                processed: summary.processed,
                failed: summary.failed(),
                coordinates: regions
                    .iter()
                    .map(|region| (region.id.clone(), region.as_string()))
                    .collect(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }

    ///
    /// Serialize the payload so it can sit inside a `<script>` element. A `</` sequence
    /// would end the element early, so it is written as `<\/`, which JSON reads back
    /// unchanged.
    ///
    pub fn to_script_json(&self) -> serde_json::Result<String> {
        Ok(serde_json::to_string(self)?.replace("</", "<\\/"))
    }
}
