use std::num::NonZeroUsize;
use std::thread::available_parallelism;

///
/// Round a value to a fixed number of decimal digits, the precision the report displays.
///
/// Works on the exact decimal expansion of `value`, so a value sitting exactly halfway
/// rounds to the even digit (`0.125` gives `0.12`) while `2.675`, stored just below the
/// tie, gives `2.67`.
///
/// # Arguments
///
/// - value: value to round
/// - decimals: number of digits after the decimal point
///
pub fn round_to(value: f64, decimals: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{value:.decimals$}").parse().unwrap_or(value)
}

///
/// Number of worker threads to use when the user doesn't ask for a specific count.
///
pub fn default_workers() -> usize {
    available_parallelism().map(NonZeroUsize::get).unwrap_or(1)
}
