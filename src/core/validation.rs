use std::collections::BTreeSet;

use super::alphabet::{VIN_LENGTH, is_vin_char};
use super::error::ValidationError;

/// Normalize a raw VIN candidate to the canonical uppercase form.
pub fn normalize(vin: &str) -> String {
    vin.to_uppercase()
}

/// Check that a VIN candidate is structurally valid.
///
/// The input is uppercased first, so `"wba..."` and `"WBA..."` are treated
/// the same. Length is checked before the alphabet; all offending
/// characters are reported, not just the first one.
pub fn check_validity(vin: &str) -> Result<(), ValidationError> {
    let vin = normalize(vin);

    let length = vin.chars().count();
    if length != VIN_LENGTH {
        return Err(ValidationError::IncorrectLength { length });
    }

    let invalid: BTreeSet<char> = vin.chars().filter(|&c| !is_vin_char(c)).collect();
    if !invalid.is_empty() {
        return Err(ValidationError::InvalidCharacters(invalid));
    }

    Ok(())
}
