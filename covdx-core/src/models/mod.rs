pub mod region;
pub mod region_set;
pub mod sample;

// re-export for cleaner imports
pub use self::region::{Region, parse_region};
pub use self::region_set::RegionSet;
pub use self::sample::sample_id_from_path;
