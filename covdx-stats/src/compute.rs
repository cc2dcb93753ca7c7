use std::io;
use std::path::Path;

use covdx_core::errors::{CovdxError, Result};
use covdx_core::models::{Region, RegionSet};

use crate::reader::{AlignmentOpener, AlignmentSource};
use crate::summary::{DepthSummary, LengthAccumulator, RegionStats, SampleStats};

///
/// Compute depth and read-length statistics of one opened file for every region.
///
/// Any read failure, in any region, fails the whole file: a partially computed sample
/// is never returned.
///
/// # Arguments
///
/// - source: the opened alignment file
/// - regions: regions to evaluate
///
pub fn compute_sample_stats<S>(source: &mut S, regions: &RegionSet) -> Result<SampleStats>
where
    S: AlignmentSource + ?Sized,
{
    regions
        .iter()
        .map(|region| {
            let stats = compute_region_stats(source, region).map_err(|err| {
                CovdxError::FileReadError(format!("{}: {}", region.as_string(), err))
            })?;
            Ok::<_, CovdxError>((region.id.clone(), stats))
        })
        .collect()
}

///
/// Open `path`, compute its statistics and close it again, on success and failure alike.
///
pub fn compute_file_stats<O>(opener: &O, path: &Path, regions: &RegionSet) -> Result<SampleStats>
where
    O: AlignmentOpener + ?Sized,
{
    let mut source = opener
        .open(path)
        .map_err(|err| CovdxError::FileReadError(format!("{}: {}", path.display(), err)))?;
    compute_sample_stats(&mut source, regions)
}

fn compute_region_stats<S>(source: &mut S, region: &Region) -> io::Result<RegionStats>
where
    S: AlignmentSource + ?Sized,
{
    let depth = if region.is_empty() {
        DepthSummary::default()
    } else {
        DepthSummary::from_trace(source.depth(region)?)
    };

    let mut lengths = LengthAccumulator::default();
    if !region.is_empty() {
        for length in source.read_lengths(region)? {
            lengths.push(length?);
        }
    }

    Ok(RegionStats {
        depth,
        lengths: lengths.finish(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashMap;

    use pretty_assertions::assert_eq;
    use rstest::*;

    use crate::reader::ReadLengths;

    /// In-memory source: per-contig depth traces and read lengths.
    #[derive(Default)]
    struct MemorySource {
        depth: HashMap<String, Vec<u32>>,
        lengths: HashMap<String, Vec<u32>>,
        failing_contig: Option<String>,
    }

    impl MemorySource {
        fn check(&self, region: &Region) -> io::Result<()> {
            if self.failing_contig.as_deref() == Some(region.chr.as_str()) {
                return Err(io::Error::new(io::ErrorKind::InvalidData, "truncated block"));
            }
            Ok(())
        }
    }

    impl AlignmentSource for MemorySource {
        fn depth(&mut self, region: &Region) -> io::Result<Vec<u32>> {
            self.check(region)?;
            Ok(self
                .depth
                .get(&region.chr)
                .cloned()
                .unwrap_or_else(|| vec![0; region.width() as usize]))
        }

        fn read_lengths<'a>(&'a mut self, region: &Region) -> io::Result<ReadLengths<'a>> {
            self.check(region)?;
            let lengths = self.lengths.get(&region.chr).cloned().unwrap_or_default();
            Ok(Box::new(lengths.into_iter().map(Ok)))
        }
    }

    #[fixture]
    fn regions() -> RegionSet {
        RegionSet::from_pairs([("GENE1", "chr1:1-5"), ("GENE2", "chr2:11-15")]).unwrap()
    }

    #[rstest]
    fn test_compute_sample_stats(regions: RegionSet) {
        let mut source = MemorySource::default();
        source.depth.insert("chr1".into(), vec![2, 4, 6, 4, 2]);
        source.lengths.insert("chr1".into(), vec![100, 150, 120]);

        let stats = compute_sample_stats(&mut source, &regions).unwrap();
        assert_eq!(stats.len(), 2);

        let gene1 = &stats["GENE1"];
        assert_eq!(gene1.depth.mean, 3.6);
        assert_eq!(gene1.depth.trace, vec![2, 4, 6, 4, 2]);
        assert_eq!(gene1.lengths.mean, 123.33);
        assert_eq!(gene1.lengths.sd, 25.17);
        assert_eq!(gene1.lengths.top, vec![150, 120, 100]);

        let gene2 = &stats["GENE2"];
        assert_eq!(gene2.depth.trace, vec![0; 5]);
        assert_eq!(gene2.lengths.reads, 0);
        assert_eq!(gene2.lengths.sd, 0.0);
    }

    #[rstest]
    fn test_empty_region_is_not_queried() {
        let regions = RegionSet::from_pairs([("EMPTY", "chr1:11-10")]).unwrap();
        // any query would fail, so success proves the reader was never touched
        let mut source = MemorySource {
            failing_contig: Some("chr1".into()),
            ..Default::default()
        };

        let stats = compute_sample_stats(&mut source, &regions).unwrap();
        let empty = &stats["EMPTY"];
        assert!(empty.depth.trace.is_empty());
        assert_eq!((empty.depth.mean, empty.depth.sd), (0.0, 0.0));
        assert!(empty.lengths.top.is_empty());
    }

    #[rstest]
    fn test_one_failing_region_fails_the_file(regions: RegionSet) {
        let mut source = MemorySource {
            failing_contig: Some("chr2".into()),
            ..Default::default()
        };

        let result = compute_sample_stats(&mut source, &regions);
        match result {
            Err(CovdxError::FileReadError(reason)) => {
                assert!(reason.contains("chr2:11-15"));
                assert!(reason.contains("truncated block"));
            }
            other => panic!("expected a file read error, got {other:?}"),
        }
    }
}
