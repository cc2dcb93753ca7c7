use std::collections::HashSet;
use std::slice::Iter;

use crate::errors::{CovdxError, Result};
use crate::models::Region;

///
/// RegionSet struct, the immutable set of named regions every sample is evaluated over.
///
/// Regions are kept ordered by identifier so that anything derived from the set
/// (statistics maps, reports) comes out in a stable order.
///
#[derive(Clone, Debug, PartialEq)]
pub struct RegionSet {
    regions: Vec<Region>,
}

impl RegionSet {
    ///
    /// Create a new [RegionSet], rejecting duplicate identifiers.
    ///
    pub fn new(mut regions: Vec<Region>) -> Result<Self> {
        let mut seen: HashSet<&str> = HashSet::new();
        for region in regions.iter() {
            if !seen.insert(region.id.as_str()) {
                return Err(CovdxError::DuplicateRegion(region.id.clone()));
            }
        }

        regions.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(RegionSet { regions })
    }

    ///
    /// Build a [RegionSet] from `(identifier, "chr:start-end")` pairs.
    ///
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let regions = pairs
            .into_iter()
            .map(|(id, text)| Region::from_region_str(id.as_ref(), text.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        RegionSet::new(regions)
    }

    pub fn get(&self, id: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.id == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.regions.iter().map(|r| r.id.as_str())
    }

    pub fn iter(&self) -> Iter<'_, Region> {
        self.regions.iter()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

impl<'a> IntoIterator for &'a RegionSet {
    type Item = &'a Region;
    type IntoIter = Iter<'a, Region>;

    fn into_iter(self) -> Self::IntoIter {
        self.regions.iter()
    }
}
