/// Number of largest read lengths kept per region.
pub const TOP_K: usize = 5;

/// Bases below this quality don't count towards depth.
pub const DEFAULT_MIN_BASE_QUALITY: u8 = 15;

/// Decimal digits kept for every reported moment.
pub const REPORT_DECIMALS: usize = 2;
