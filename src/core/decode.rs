use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::checksum::verify_checksum;
use super::countries::country_for;
use super::error::VinError;
use super::manufacturers::manufacturer_for;
use super::regions::{Region, region_for};
use super::types::Vin;
use super::validation::{check_validity, normalize};

/// When [`get_info_with`] verifies the check digit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChecksumPolicy {
    /// Only for regions that mandate a check digit (North America).
    #[default]
    RegionDefault,
    /// For every VIN.
    Always,
    /// Never.
    Never,
}

impl ChecksumPolicy {
    fn applies_to(self, region: Option<Region>) -> bool {
        match self {
            Self::RegionDefault => region.is_some_and(Region::enforces_check_digit),
            Self::Always => true,
            Self::Never => false,
        }
    }
}

/// Options controlling how a VIN is decoded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeOptions {
    /// Check digit enforcement (default: [`ChecksumPolicy::RegionDefault`]).
    pub checksum: ChecksumPolicy,
}

impl DecodeOptions {
    /// Default options: check digit enforced for North American VINs only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the check digit policy.
    pub fn checksum(mut self, policy: ChecksumPolicy) -> Self {
        self.checksum = policy;
        self
    }
}

/// Validate and decode a VIN with the default [`DecodeOptions`].
///
/// Steps, each failing fast:
/// 1. structural validation (length, alphabet)
/// 2. check digit, for North American VINs only
/// 3. country lookup from the first two characters
/// 4. manufacturer lookup from the WMI, with a 2-character fallback
pub fn get_info(vin: &str) -> Result<Vin, VinError> {
    get_info_with(vin, &DecodeOptions::default())
}

/// Validate and decode a VIN.
pub fn get_info_with(vin: &str, options: &DecodeOptions) -> Result<Vin, VinError> {
    let vin = normalize(vin);
    let span = tracing::debug_span!("get_info", vin = %vin);
    let _enter = span.enter();

    check_validity(&vin).inspect_err(|err| debug!(%err, "rejected VIN"))?;

    let region = region_for(first_char(&vin));
    if options.checksum.applies_to(region) {
        verify_checksum(&vin).inspect_err(|err| debug!(%err, "check digit mismatch"))?;
    } else {
        trace!(?region, policy = ?options.checksum, "check digit not verified");
    }

    let country_code = &vin[..2];
    let Some(country) = country_for(country_code) else {
        debug!(country_code, "unknown country");
        return Err(VinError::UnknownCountry(country_code.into()));
    };

    let manufacturer_code = &vin[..3];
    let Some(manufacturer) = manufacturer_for(manufacturer_code, country_code) else {
        debug!(manufacturer_code, "unknown manufacturer");
        return Err(VinError::UnknownManufacturer(manufacturer_code.into()));
    };

    debug!(country, manufacturer, ?region, "decoded VIN");
    Ok(Vin::new(vin, country, manufacturer, region))
}

fn first_char(vin: &str) -> char {
    vin.chars().next().unwrap_or_default()
}
