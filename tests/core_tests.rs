#![cfg(feature = "core")]

use std::collections::BTreeSet;

use chrono::{TimeZone, Utc};
use vinparse::*;

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[test]
fn empty_input_has_incorrect_length() {
    assert_eq!(
        check_validity(""),
        Err(ValidationError::IncorrectLength { length: 0 })
    );
}

#[test]
fn all_zeros_is_structurally_valid() {
    assert_eq!(check_validity("00000000000000000"), Ok(()));
}

#[test]
fn forbidden_letters_reported_together() {
    assert_eq!(
        check_validity("0000O000I000Q0000"),
        Err(ValidationError::InvalidCharacters(BTreeSet::from([
            'O', 'I', 'Q'
        ])))
    );
}

#[test]
fn punctuation_rejected() {
    let Err(ValidationError::InvalidCharacters(chars)) = check_validity("WBA-8H81080A85757")
    else {
        panic!("expected invalid characters");
    };
    assert_eq!(chars, BTreeSet::from(['-']));
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

#[test]
fn decode_bmw() {
    let vin = get_info("WBA8H81080A857577").unwrap();
    assert_eq!(vin.as_str(), "WBA8H81080A857577");
    assert_eq!(vin.country(), "Germany/West Germany");
    assert_eq!(vin.manufacturer(), "BMW");
    assert_eq!(vin.region(), Some(Region::Europe));
    assert_eq!(vin.region_name(), "Europe");
}

#[test]
fn bmw_sections() {
    let vin = get_info("WBA8H8108JA857577").unwrap();
    assert_eq!(vin.wmi(), "WBA");
    assert_eq!(vin.vds(), "8H8108");
    assert_eq!(vin.vis(), "JA857577");
    assert!(!vin.is_small_manufacturer());
    assert_eq!(vin.region_code(), "W");
    assert_eq!(vin.country_code(), "WB");

    let now = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
    assert_eq!(vin.model_years_at(now), vec![1988, 2018]);
}

#[test]
fn model_years_grow_with_the_clock() {
    let vin = get_info("WBA8H8108JA857577").unwrap();

    // the horizon reaches 2048 once the rounded year is 2046
    let before = Utc.with_ymd_and_hms(2045, 6, 1, 0, 0, 0).unwrap();
    let after = Utc.with_ymd_and_hms(2045, 8, 1, 0, 0, 0).unwrap();
    assert_eq!(vin.model_years_at(before), vec![1988, 2018]);
    assert_eq!(vin.model_years_at(after), vec![1988, 2018, 2048]);
}

#[test]
fn embedded_and_computed_check_digit_differ_when_wrong() {
    let vin = get_info("WBA8H81080A857577").unwrap();
    assert_eq!(vin.embedded_check_digit(), '8');
    assert_eq!(check_digit(vin.as_str()), Ok('9'));
}

#[test]
fn decode_north_american_vins() {
    let mci = get_info("1M8GDM9AXKP042788").unwrap();
    assert_eq!(mci.country(), "United States");
    assert_eq!(mci.manufacturer(), "Motor Coach Industries");
    assert_eq!(mci.region(), Some(Region::NorthAmerica));
    assert_eq!(mci.embedded_check_digit(), 'X');
    assert_eq!(mci.model_years_through(2030), vec![1989, 2019]);

    let honda = get_info("1HGCM82633A004352").unwrap();
    assert_eq!(honda.manufacturer(), "Honda USA");
    assert_eq!(honda.model_years_through(2030), vec![2003]);

    let vw = get_info("3VWFE21C04M000001").unwrap();
    assert_eq!(vw.country(), "Mexico");
    assert_eq!(vw.manufacturer(), "Volkswagen Mexico");
}

#[test]
fn decode_asian_vin() {
    let vin = get_info("JHMCM56557C404453").unwrap();
    assert_eq!(vin.country(), "Japan");
    assert_eq!(vin.manufacturer(), "Honda");
    assert_eq!(vin.region(), Some(Region::Asia));
    assert_eq!(vin.model_years_through(2030), vec![2007]);
}

#[test]
fn small_manufacturer_uses_prefix() {
    let vin = get_info("JT9AA11A0AA000000").unwrap();
    assert!(vin.is_small_manufacturer());
    assert_eq!(vin.manufacturer(), "Toyota");
}

#[test]
fn bad_check_digit_in_north_america() {
    assert_eq!(
        get_info("1HGCM82643A004352"),
        Err(VinError::Checksum(ChecksumError {
            expected: '3',
            received: '4',
        }))
    );
}

#[test]
fn unknown_country_code() {
    assert_eq!(
        get_info("00000000000000000"),
        Err(VinError::UnknownCountry("00".into()))
    );
    assert_eq!(
        get_info("AZ000000000000000"),
        Err(VinError::UnknownCountry("AZ".into()))
    );
}

#[test]
fn unknown_manufacturer_code() {
    assert_eq!(
        get_info("WZZ00000000000000"),
        Err(VinError::UnknownManufacturer("WZZ".into()))
    );
}

#[test]
fn parse_via_from_str() {
    let vin: Vin = "wba8h81080a857577".parse().unwrap();
    assert_eq!(vin.to_string(), "WBA8H81080A857577");

    let err = "short".parse::<Vin>().unwrap_err();
    assert_eq!(err, VinError::IncorrectLength { length: 5 });
}

#[test]
fn decoding_is_idempotent() {
    let a = get_info("WBA8H81080A857577").unwrap();
    let b = get_info("WBA8H81080A857577").unwrap();
    assert_eq!(a, b);
    assert_eq!(get_info(a.as_str()).unwrap(), a);
}

// ---------------------------------------------------------------------------
// Check digit
// ---------------------------------------------------------------------------

#[test]
fn computed_check_digit_matches_embedded() {
    for vin in ["1M8GDM9AXKP042788", "1HGCM82633A004352", "JHMCM56557C404453"] {
        let digit = check_digit(vin).unwrap();
        assert_eq!(digit, vin.as_bytes()[CHECK_DIGIT_INDEX] as char, "{vin}");
    }
}

#[test]
fn check_digit_rejects_invalid_input() {
    assert!(matches!(
        check_digit("IIIIIIIIIIIIIIIII"),
        Err(ValidationError::InvalidCharacters(_))
    ));
}

// ---------------------------------------------------------------------------
// Serialization
// ---------------------------------------------------------------------------

#[test]
fn decoded_vin_serializes() {
    let vin = get_info("WBA8H81080A857577").unwrap();
    let json = serde_json::to_value(&vin).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "vin": "WBA8H81080A857577",
            "country": "Germany/West Germany",
            "manufacturer": "BMW",
            "region": "Europe",
        })
    );
}

#[test]
fn errors_roundtrip_through_json() {
    let err = get_info("1HGCM82643A004352").unwrap_err();
    let json = serde_json::to_string(&err).unwrap();
    let back: VinError = serde_json::from_str(&json).unwrap();
    assert_eq!(back, err);
}

#[test]
fn error_messages() {
    assert_eq!(
        VinError::UnknownCountry("00".into()).to_string(),
        "unknown country code '00'"
    );
    assert_eq!(
        VinError::IncorrectLength { length: 4 }.to_string(),
        "VIN must be 17 characters long, got 4"
    );
}
