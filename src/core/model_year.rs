//! Model year decoding from the 10th VIN character.
//!
//! The year code cycles through 30 symbols, starting with `A` for 1980, so
//! every code maps to a series of years 30 years apart.

use chrono::{DateTime, Utc};

/// Year codes in cycle order. `I`, `O`, `Q`, `U`, `Z` and `0` are never used.
pub const YEAR_CODES: &str = "ABCDEFGHJKLMNPRSTVWXY123456789";

/// Model year encoded by the first symbol of the cycle.
pub const FIRST_MODEL_YEAR: i32 = 1980;

const CYCLE_YEARS: i32 = 30;

const SECONDS_PER_YEAR: f64 = 86_400.0 * 365.25;

/// All model years up to and including `last_year` that `code` can stand for.
///
/// Returns an empty list for characters that are not year codes or when
/// `last_year` precedes the first cycle.
pub fn model_years_through(code: char, last_year: i32) -> Vec<i32> {
    let Some(position) = YEAR_CODES.find(code) else {
        return Vec::new();
    };
    // YEAR_CODES is ASCII and 30 long, the byte offset is the cycle position
    let first = FIRST_MODEL_YEAR + position as i32;

    (first..=last_year)
        .step_by(CYCLE_YEARS as usize)
        .collect()
}

/// Latest model year considered plausible at `now`.
///
/// Computed as the current year rounded to the nearest whole year (in
/// 365.25-day years since the Unix epoch) plus two, since vehicles are
/// sold ahead of their model year.
pub fn model_year_horizon(now: DateTime<Utc>) -> i32 {
    let seconds = now.timestamp_millis() as f64 / 1000.0;
    let year = seconds / SECONDS_PER_YEAR + 1970.0;
    year.round() as i32 + 2
}
