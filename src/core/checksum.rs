//! Check digit computation and verification.
//!
//! The check digit is the weighted sum of the transliterated characters
//! modulo 11, written as `0`-`9` or `X` for 10.

use super::alphabet::{CHECK_DIGIT_INDEX, WEIGHTS, transliterate};
use super::error::{ChecksumError, ValidationError};
use super::validation::{check_validity, normalize};

/// Verify the check digit of a VIN.
///
/// The input is uppercased but not re-validated: call
/// [`check_validity`] first. Malformed input never panics; characters
/// outside the alphabet contribute nothing to the sum and a missing check
/// digit is reported as `' '`.
pub fn verify_checksum(vin: &str) -> Result<(), ChecksumError> {
    let vin = normalize(vin);
    let expected = expected_check_digit(&vin);
    let received = vin.chars().nth(CHECK_DIGIT_INDEX).unwrap_or(' ');

    if expected == received {
        Ok(())
    } else {
        Err(ChecksumError { expected, received })
    }
}

/// Compute the check digit a VIN should carry at position 9.
///
/// Unlike [`verify_checksum`] this validates the input first. The
/// character currently at the check digit position is ignored.
pub fn check_digit(vin: &str) -> Result<char, ValidationError> {
    check_validity(vin)?;
    Ok(expected_check_digit(&normalize(vin)))
}

fn expected_check_digit(vin: &str) -> char {
    let sum: u32 = vin
        .chars()
        .zip(WEIGHTS)
        .map(|(c, weight)| transliterate(c).unwrap_or(0) * weight)
        .sum();

    match sum % 11 {
        10 => 'X',
        n => char::from(b'0' + n as u8),
    }
}
