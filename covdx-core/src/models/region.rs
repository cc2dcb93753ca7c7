use std::fmt::{self, Display};

use serde::Serialize;

use crate::errors::{CovdxError, Result};

///
/// Region struct, one named genomic interval statistics are computed over.
///
/// Coordinates are zero-based and half-open: `[start, end)`.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone, Serialize)]
pub struct Region {
    pub id: String,
    pub chr: String,
    pub start: u64,
    pub end: u64,
}

impl Region {
    ///
    /// Create a new [Region], validating that `start <= end`.
    ///
    pub fn new(id: &str, chr: &str, start: u64, end: u64) -> Result<Self> {
        if start > end {
            return Err(CovdxError::MalformedRegion(format!(
                "{id}: start {start} is past end {end}"
            )));
        }
        Ok(Region {
            id: id.to_string(),
            chr: chr.to_string(),
            start,
            end,
        })
    }

    ///
    /// Create a new [Region] from a 1-based, inclusive `chr:start-end` string.
    ///
    /// # Arguments:
    /// - id: identifier of the region (e.g. a gene name)
    /// - text: region string, e.g. `chr22:42126499-42130810`
    pub fn from_region_str(id: &str, text: &str) -> Result<Self> {
        let (chr, start, end) = parse_region(text)?;
        Region::new(id, &chr, start, end)
    }

    ///
    /// Get width of the region
    ///
    pub fn width(&self) -> u64 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0
    }

    ///
    /// Region string in the 1-based, inclusive convention it was parsed from.
    ///
    pub fn as_string(&self) -> String {
        format!("{}:{}-{}", self.chr, self.start + 1, self.end)
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.id, self.as_string())
    }
}

///
/// Parse a `chr:start-end` region string into a zero-based, half-open triple.
///
/// The input is 1-based and inclusive, so the start is decremented by one. Thousands
/// separators inside the numbers are ignored (`chr1:1,000-2,000`).
///
/// # Arguments:
/// - text: region string
pub fn parse_region(text: &str) -> Result<(String, u64, u64)> {
    let malformed = |reason: &str| CovdxError::MalformedRegion(format!("{text:?}: {reason}"));

    let (chr, span) = text
        .trim()
        .rsplit_once(':')
        .ok_or_else(|| malformed("missing ':' separator"))?;

    if chr.is_empty() {
        return Err(malformed("empty contig name"));
    }

    let (start, end) = span
        .split_once('-')
        .ok_or_else(|| malformed("missing '-' separator"))?;

    let parse_bound = |bound: &str| {
        bound
            .trim()
            .replace(',', "")
            .parse::<u64>()
            .map_err(|_| malformed(&format!("{bound:?} is not a positive integer")))
    };

    let start = parse_bound(start)?;
    let end = parse_bound(end)?;

    let start = start
        .checked_sub(1)
        .ok_or_else(|| malformed("1-based start must be at least 1"))?;

    if start > end {
        return Err(malformed("start is past end"));
    }

    Ok((chr.to_string(), start, end))
}
