use std::collections::BTreeMap;

use serde::Serialize;

use covdx_core::utils::round_to;

use crate::consts::{REPORT_DECIMALS, TOP_K};
use crate::moments::RunningMoments;
use crate::topk::TopK;

///
/// Per-base depth across one region plus its mean and population standard deviation.
///
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DepthSummary {
    pub trace: Vec<u32>,
    #[serde(rename = "cov_mean")]
    pub mean: f64,
    #[serde(rename = "cov_sd")]
    pub sd: f64,
}

impl DepthSummary {
    ///
    /// Summarize a depth trace. An empty trace gives `(0.0, 0.0)`.
    ///
    /// The trace is already in memory, so the mean is the exact integer sum divided once by
    /// the width and the deviation is taken around that mean in a second pass. A mean that
    /// is an exact multiple of `0.005` therefore stays exact before rounding.
    ///
    pub fn from_trace(trace: Vec<u32>) -> Self {
        if trace.is_empty() {
            return DepthSummary::default();
        }

        let n = trace.len() as f64;
        let mean = trace.iter().map(|&depth| depth as u64).sum::<u64>() as f64 / n;
        let ss = trace
            .iter()
            .map(|&depth| (depth as f64 - mean).powi(2))
            .sum::<f64>();

        DepthSummary {
            mean: round_to(mean, REPORT_DECIMALS),
            sd: round_to((ss / n).sqrt(), REPORT_DECIMALS),
            trace,
        }
    }
}

///
/// Read-length moments and the largest read lengths observed in one region.
///
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LengthSummary {
    pub reads: u64,
    #[serde(rename = "len_mean")]
    pub mean: f64,
    #[serde(rename = "len_sd")]
    pub sd: f64,
    #[serde(rename = "top5")]
    pub top: Vec<u32>,
}

impl Default for LengthSummary {
    fn default() -> Self {
        LengthAccumulator::default().finish()
    }
}

///
/// Streaming accumulator behind [LengthSummary]: one `push` per alignment record.
///
#[derive(Debug, Clone)]
pub struct LengthAccumulator {
    moments: RunningMoments,
    top: TopK<u32>,
}

impl Default for LengthAccumulator {
    fn default() -> Self {
        Self {
            moments: RunningMoments::new(),
            top: TopK::new(TOP_K),
        }
    }
}

impl LengthAccumulator {
    pub fn push(&mut self, length: u32) {
        self.moments.push(length as f64);
        self.top.push(length);
    }

    pub fn finish(self) -> LengthSummary {
        LengthSummary {
            reads: self.moments.count(),
            mean: round_to(self.moments.mean(), REPORT_DECIMALS),
            sd: round_to(self.moments.sample_std(), REPORT_DECIMALS),
            top: self.top.into_sorted_desc(),
        }
    }
}

/// Everything computed for one (region, sample) cell.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RegionStats {
    #[serde(flatten)]
    pub depth: DepthSummary,
    #[serde(flatten)]
    pub lengths: LengthSummary,
}

/// Statistics of one sample, keyed by region identifier.
pub type SampleStats = BTreeMap<String, RegionStats>;
