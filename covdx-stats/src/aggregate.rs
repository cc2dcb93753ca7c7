use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use covdx_core::models::RegionSet;

use crate::summary::{RegionStats, SampleStats};

///
/// Region × sample matrix of statistics: `matrix[region][sample]`.
///
/// Every configured region has an entry from the start, even when no sample succeeded.
/// Keys are ordered, so the serialized matrix doesn't depend on the order results arrive in.
///
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AggregateMatrix {
    regions: BTreeMap<String, BTreeMap<String, RegionStats>>,
}

impl AggregateMatrix {
    pub fn new(regions: &RegionSet) -> Self {
        AggregateMatrix {
            regions: regions
                .ids()
                .map(|id| (id.to_string(), BTreeMap::new()))
                .collect(),
        }
    }

    ///
    /// Fold one sample's per-region statistics into the matrix.
    ///
    /// Returns `true` when the sample was already present, in which case its previous
    /// entries are replaced.
    ///
    pub fn merge(&mut self, sample_id: &str, stats: SampleStats) -> bool {
        let mut replaced = false;
        for (region_id, region_stats) in stats {
            replaced |= self
                .regions
                .entry(region_id)
                .or_default()
                .insert(sample_id.to_string(), region_stats)
                .is_some();
        }
        replaced
    }

    pub fn get(&self, region_id: &str, sample_id: &str) -> Option<&RegionStats> {
        self.regions.get(region_id)?.get(sample_id)
    }

    pub fn region(&self, region_id: &str) -> Option<&BTreeMap<String, RegionStats>> {
        self.regions.get(region_id)
    }

    pub fn regions(&self) -> impl Iterator<Item = &str> {
        self.regions.keys().map(String::as_str)
    }

    /// Distinct sample identifiers across all regions, sorted.
    pub fn samples(&self) -> Vec<&str> {
        let mut samples: Vec<&str> = self
            .regions
            .values()
            .flat_map(|row| row.keys().map(String::as_str))
            .collect();
        samples.sort_unstable();
        samples.dedup();
        samples
    }

    pub fn n_samples(&self) -> usize {
        self.samples().len()
    }

    ///
    /// Dump the matrix as pretty-printed JSON.
    ///
    pub fn write_json(&self, path: &Path) -> io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    use crate::summary::DepthSummary;

    #[fixture]
    fn regions() -> RegionSet {
        RegionSet::from_pairs([("GENE1", "chr1:1-5"), ("GENE2", "chr2:1-5")]).unwrap()
    }

    fn sample(trace: Vec<u32>) -> SampleStats {
        let stats = RegionStats {
            depth: DepthSummary::from_trace(trace),
            ..Default::default()
        };
        [("GENE1".to_string(), stats.clone()), ("GENE2".to_string(), stats)]
            .into_iter()
            .collect()
    }

    #[rstest]
    fn test_new_matrix_has_every_region(regions: RegionSet) {
        let matrix = AggregateMatrix::new(&regions);
        assert_eq!(matrix.regions().collect::<Vec<_>>(), vec!["GENE1", "GENE2"]);
        assert_eq!(matrix.n_samples(), 0);
    }

    #[rstest]
    fn test_merge(regions: RegionSet) {
        let mut matrix = AggregateMatrix::new(&regions);
        assert!(!matrix.merge("S2", sample(vec![1, 1])));
        assert!(!matrix.merge("S1", sample(vec![3, 3])));

        assert_eq!(matrix.samples(), vec!["S1", "S2"]);
        assert_eq!(matrix.get("GENE1", "S1").unwrap().depth.mean, 3.0);
        assert_eq!(matrix.get("GENE2", "S2").unwrap().depth.mean, 1.0);
        assert!(matrix.get("GENE3", "S1").is_none());
    }

    #[rstest]
    fn test_merge_order_does_not_matter(regions: RegionSet) {
        let mut forward = AggregateMatrix::new(&regions);
        forward.merge("S1", sample(vec![1]));
        forward.merge("S2", sample(vec![2]));

        let mut backward = AggregateMatrix::new(&regions);
        backward.merge("S2", sample(vec![2]));
        backward.merge("S1", sample(vec![1]));

        assert_eq!(forward, backward);
        assert_eq!(
            serde_json::to_string(&forward).unwrap(),
            serde_json::to_string(&backward).unwrap()
        );
    }

    #[rstest]
    fn test_merge_replaces_duplicate_sample(regions: RegionSet) {
        let mut matrix = AggregateMatrix::new(&regions);
        matrix.merge("S1", sample(vec![1]));
        assert!(matrix.merge("S1", sample(vec![5])));
        assert_eq!(matrix.get("GENE1", "S1").unwrap().depth.mean, 5.0);
        assert_eq!(matrix.n_samples(), 1);
    }

    #[rstest]
    fn test_write_json(regions: RegionSet) {
        let mut matrix = AggregateMatrix::new(&regions);
        matrix.merge("S1", sample(vec![2, 4, 6, 4, 2]));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.json");
        matrix.write_json(&path).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["GENE1"]["S1"]["cov_mean"], 3.6);
        assert_eq!(json["GENE2"]["S1"]["trace"].as_array().unwrap().len(), 5);
    }
}
