use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::fs::read_to_string;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{CovdxError, Result};
use crate::models::RegionSet;

/// Regions evaluated when no region config is supplied (GRCh38 coordinates).
pub const DEFAULT_REGIONS: [(&str, &str); 3] = [
    ("CYP2D6", "chr22:42126499-42130810"),
    ("CYP2D7", "chr22:42140203-42144577"),
    ("CYP2D8", "chr22:42149886-42155001"),
];

///
/// Region configuration as read from a TOML file:
///
/// ```toml
/// [regions]
/// CYP2D6 = "chr22:42126499-42130810"
/// CYP2D7 = "chr22:42140203-42144577"
/// ```
///
#[derive(Deserialize, Serialize, Debug, PartialEq)]
pub struct RegionConfig {
    pub regions: BTreeMap<String, String>,
}

impl Default for RegionConfig {
    fn default() -> Self {
        RegionConfig {
            regions: DEFAULT_REGIONS
                .iter()
                .map(|(id, text)| (id.to_string(), text.to_string()))
                .collect(),
        }
    }
}

impl RegionConfig {
    ///
    /// Validate every region string and build the immutable [RegionSet].
    ///
    pub fn into_region_set(self) -> Result<RegionSet> {
        if self.regions.is_empty() {
            return Err(CovdxError::InvalidConfig(
                "the [regions] table is empty".to_string(),
            ));
        }
        RegionSet::from_pairs(self.regions)
    }
}

impl TryFrom<&Path> for RegionConfig {
    type Error = CovdxError;

    fn try_from(path: &Path) -> Result<Self> {
        if path.extension().and_then(OsStr::to_str) != Some("toml") {
            return Err(CovdxError::InvalidConfig(format!(
                "region config must be a .toml file: {}",
                path.display()
            )));
        }
        let toml_str = read_to_string(path)?;
        let config = toml::from_str(&toml_str)?;
        Ok(config)
    }
}

///
/// Load the region set from an optional config file, falling back to [DEFAULT_REGIONS].
///
pub fn load_region_set(path: Option<&Path>) -> Result<RegionSet> {
    let config = match path {
        Some(path) => RegionConfig::try_from(path)?,
        None => RegionConfig::default(),
    };
    config.into_region_set()
}
