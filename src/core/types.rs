use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::alphabet::CHECK_DIGIT_INDEX;
use super::decode::get_info;
use super::error::VinError;
use super::model_year::{model_year_horizon, model_years_through};
use super::regions::Region;

/// A validated and decoded Vehicle Identification Number.
///
/// Obtained from [`get_info`] (or [`str::parse`]). The VIN is stored in
/// normalized uppercase form and is always 17 characters from the VIN
/// alphabet, so the section accessors never fail.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Vin {
    vin: String,
    country: &'static str,
    manufacturer: &'static str,
    region: Option<Region>,
}

impl Vin {
    pub(crate) fn new(
        vin: String,
        country: &'static str,
        manufacturer: &'static str,
        region: Option<Region>,
    ) -> Self {
        Self {
            vin,
            country,
            manufacturer,
            region,
        }
    }

    /// The normalized 17-character VIN.
    pub fn as_str(&self) -> &str {
        &self.vin
    }

    /// Country name resolved from the first two characters.
    pub fn country(&self) -> &'static str {
        self.country
    }

    /// Manufacturer name resolved from the WMI.
    pub fn manufacturer(&self) -> &'static str {
        self.manufacturer
    }

    /// Region resolved from the first character, if it belongs to one.
    pub fn region(&self) -> Option<Region> {
        self.region
    }

    /// Region name, or `"Unknown"` when the first character has no region.
    pub fn region_name(&self) -> &'static str {
        self.region.map_or("Unknown", Region::name)
    }

    /// World Manufacturer Identifier (characters 1-3).
    pub fn wmi(&self) -> &str {
        &self.vin[..3]
    }

    /// Vehicle Descriptor Section (characters 4-9, including the check digit).
    pub fn vds(&self) -> &str {
        &self.vin[3..9]
    }

    /// Vehicle Identifier Section (characters 10-17).
    pub fn vis(&self) -> &str {
        &self.vin[9..]
    }

    /// Whether the WMI marks a small manufacturer (third character `9`).
    pub fn is_small_manufacturer(&self) -> bool {
        self.char_at(2) == '9'
    }

    /// Region code (first character).
    pub fn region_code(&self) -> &str {
        &self.vin[..1]
    }

    /// Country code (first two characters).
    pub fn country_code(&self) -> &str {
        &self.vin[..2]
    }

    /// Check digit as written in the VIN (character 9).
    ///
    /// Use [`check_digit`](super::check_digit) for the digit it should carry.
    /// Only verified for regions that enforce it, see [`Region::enforces_check_digit`].
    pub fn embedded_check_digit(&self) -> char {
        self.char_at(CHECK_DIGIT_INDEX)
    }

    /// Model year code (character 10).
    pub fn year_code(&self) -> char {
        self.char_at(9)
    }

    /// Plausible model years, judged against the current system time.
    pub fn model_years(&self) -> Vec<i32> {
        self.model_years_at(Utc::now())
    }

    /// Plausible model years as of `now`: every year matching the year code
    /// from 1980 up to two years after the (rounded) current year.
    pub fn model_years_at(&self, now: DateTime<Utc>) -> Vec<i32> {
        self.model_years_through(model_year_horizon(now))
    }

    /// Model years matching the year code from 1980 up to `last_year` inclusive.
    pub fn model_years_through(&self, last_year: i32) -> Vec<i32> {
        model_years_through(self.year_code(), last_year)
    }

    fn char_at(&self, idx: usize) -> char {
        // ASCII only, guaranteed by validation
        char::from(self.vin.as_bytes()[idx])
    }
}

impl fmt::Display for Vin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.vin)
    }
}

impl FromStr for Vin {
    type Err = VinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        get_info(s)
    }
}

impl AsRef<str> for Vin {
    fn as_ref(&self) -> &str {
        &self.vin
    }
}
