use std::fs::File;
use std::io;
use std::path::Path;

use noodles::bam;
use noodles::bgzf::Reader;
use noodles::sam;
use noodles::sam::alignment::record::cigar::Op;
use noodles::sam::alignment::record::cigar::op::Kind;

use covdx_core::models::Region;

use crate::consts::DEFAULT_MIN_BASE_QUALITY;

/// Read lengths of the records overlapping one region, in file order.
pub type ReadLengths<'a> = Box<dyn Iterator<Item = io::Result<u32>> + 'a>;

///
/// An opened alignment file that can be queried region by region.
///
pub trait AlignmentSource {
    /// Total per-base depth across `[region.start, region.end)`, one entry per base.
    fn depth(&mut self, region: &Region) -> io::Result<Vec<u32>>;

    /// Length of every alignment record overlapping the region, each record exactly once.
    fn read_lengths<'a>(&'a mut self, region: &Region) -> io::Result<ReadLengths<'a>>;
}

///
/// Opens alignment files by path. Shared by every worker of a batch, so it must be `Sync`;
/// each opened source belongs to the task that opened it.
///
pub trait AlignmentOpener: Sync {
    type Source: AlignmentSource;

    fn open(&self, path: &Path) -> io::Result<Self::Source>;
}

///
/// Opens coordinate-sorted, indexed BAM files. A `.bai` index must sit next to each file
/// (create one with `samtools index your_file.bam`).
///
#[derive(Debug, Clone, Copy)]
pub struct BamOpener {
    pub min_base_quality: u8,
}

impl Default for BamOpener {
    fn default() -> Self {
        BamOpener {
            min_base_quality: DEFAULT_MIN_BASE_QUALITY,
        }
    }
}

impl AlignmentOpener for BamOpener {
    type Source = BamSource;

    fn open(&self, path: &Path) -> io::Result<BamSource> {
        let mut reader = bam::io::indexed_reader::Builder::default().build_from_path(path)?;
        let header = reader.read_header()?;

        Ok(BamSource {
            reader,
            header,
            min_base_quality: self.min_base_quality,
        })
    }
}

/// An indexed BAM file opened by [BamOpener]. Dropping it closes the file.
pub struct BamSource {
    reader: bam::io::IndexedReader<Reader<File>>,
    header: sam::Header,
    min_base_quality: u8,
}

impl AlignmentSource for BamSource {
    fn depth(&mut self, region: &Region) -> io::Result<Vec<u32>> {
        let mut depth = vec![0u32; region.width() as usize];
        if depth.is_empty() {
            return Ok(depth);
        }

        let query_region = to_query_region(region)?;
        let records = self.reader.query(&self.header, &query_region)?;

        for result in records {
            let record = result?;

            let flags = record.flags();
            if flags.is_unmapped()
                || flags.is_secondary()
                || flags.is_qc_fail()
                || flags.is_duplicate()
            {
                continue;
            }

            let Some(alignment_start) = record.alignment_start().transpose()? else {
                continue;
            };

            let ops = record.cigar().iter().collect::<io::Result<Vec<Op>>>()?;
            let bases: Vec<u8> = record.sequence().iter().collect();
            let qualities = record.quality_scores();

            add_record_depth(
                &mut depth,
                region.start,
                (alignment_start.get() - 1) as u64,
                &ops,
                &bases,
                qualities.as_ref(),
                self.min_base_quality,
            );
        }

        Ok(depth)
    }

    fn read_lengths<'a>(&'a mut self, region: &Region) -> io::Result<ReadLengths<'a>> {
        if region.is_empty() {
            return Ok(Box::new(std::iter::empty()));
        }

        let query_region = to_query_region(region)?;
        let records = self.reader.query(&self.header, &query_region)?;

        Ok(Box::new(records.map(|result| {
            result.map(|record| record.sequence().len() as u32)
        })))
    }
}

fn to_query_region(region: &Region) -> io::Result<noodles::core::Region> {
    region
        .as_string()
        .parse()
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))
}

///
/// Add one record's aligned bases to a depth trace.
///
/// Only bases on `M`, `=` and `X` operations count, and only when the base is one of
/// `ACGT` with quality at or above `min_base_quality` (missing qualities pass).
/// Insertions and soft clips consume the read only, deletions and skips the reference only.
///
/// # Arguments
///
/// - depth: trace covering `[trace_start, trace_start + depth.len())`
/// - trace_start: zero-based reference position of `depth[0]`
/// - alignment_start: zero-based reference position of the first aligned base
/// - ops: CIGAR operations of the record
/// - bases: read bases
/// - qualities: base qualities, empty if absent
/// - min_base_quality: quality threshold
///
pub fn add_record_depth(
    depth: &mut [u32],
    trace_start: u64,
    alignment_start: u64,
    ops: &[Op],
    bases: &[u8],
    qualities: &[u8],
    min_base_quality: u8,
) {
    let trace_end = trace_start + depth.len() as u64;
    let mut ref_pos = alignment_start;
    let mut read_pos = 0usize;

    for op in ops {
        let len = op.len();
        match op.kind() {
            Kind::Match | Kind::SequenceMatch | Kind::SequenceMismatch => {
                for i in 0..len {
                    let pos = ref_pos + i as u64;
                    if pos < trace_start {
                        continue;
                    }
                    if pos >= trace_end {
                        break;
                    }
                    let offset = read_pos + i;
                    let base_ok = matches!(bases.get(offset), Some(b'A' | b'C' | b'G' | b'T'));
                    let quality_ok = qualities
                        .get(offset)
                        .is_none_or(|q| *q >= min_base_quality);
                    if base_ok && quality_ok {
                        depth[(pos - trace_start) as usize] += 1;
                    }
                }
                ref_pos += len as u64;
                read_pos += len;
            }
            Kind::Insertion | Kind::SoftClip => read_pos += len,
            Kind::Deletion | Kind::Skip => ref_pos += len as u64,
            Kind::HardClip | Kind::Pad => {}
        }

        if ref_pos >= trace_end {
            break;
        }
    }
}
