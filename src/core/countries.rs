//! Country codes encoded by the first two VIN characters.
//!
//! Assignments are stored as compact ranges: a first character plus an
//! inclusive range of second characters, ordered as in [`RANGE_ORDER`].
//! The ranges are expanded into a flat map once, on first lookup.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::alphabet::RANGE_ORDER;

/// A block of consecutive country codes sharing a first character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryRange {
    /// First VIN character shared by the whole block.
    pub prefix: char,
    /// First second-position character of the block (inclusive).
    pub from: char,
    /// Last second-position character of the block (inclusive).
    pub to: char,
    /// Country name.
    pub name: &'static str,
}

const fn range(prefix: char, from: char, to: char, name: &'static str) -> CountryRange {
    CountryRange {
        prefix,
        from,
        to,
        name,
    }
}

/// Look up the country for a 2-character code such as `"WB"`.
pub fn country_for(code: &str) -> Option<&'static str> {
    COUNTRIES.get(code).copied()
}

/// Expand compact country ranges into a flat `code -> name` map.
///
/// Ranges whose bounds are not in [`RANGE_ORDER`], or whose `from` comes
/// after `to`, expand to nothing. Later ranges overwrite earlier ones.
pub fn expand_country_ranges(ranges: &[CountryRange]) -> HashMap<String, &'static str> {
    let mut countries = HashMap::new();

    for r in ranges {
        let (Some(start), Some(end)) = (RANGE_ORDER.find(r.from), RANGE_ORDER.find(r.to)) else {
            continue;
        };
        if start > end {
            continue;
        }
        // RANGE_ORDER is ASCII, so byte offsets are char offsets
        for second in RANGE_ORDER[start..=end].chars() {
            countries.insert(format!("{}{second}", r.prefix), r.name);
        }
    }

    countries
}

static COUNTRIES: LazyLock<HashMap<String, &'static str>> =
    LazyLock::new(|| expand_country_ranges(COUNTRY_RANGES));

/// Country code assignments (ISO 3780 WMI table).
pub static COUNTRY_RANGES: &[CountryRange] = &[
    // Africa
    range('A', 'A', 'H', "South Africa"),
    range('A', 'J', 'N', "Ivory Coast"),
    range('B', 'A', 'E', "Angola"),
    range('B', 'F', 'K', "Kenya"),
    range('B', 'L', 'R', "Tanzania"),
    range('C', 'A', 'E', "Benin"),
    range('C', 'F', 'K', "Madagascar"),
    range('C', 'L', 'R', "Tunisia"),
    range('D', 'A', 'E', "Egypt"),
    range('D', 'F', 'K', "Morocco"),
    range('D', 'L', 'R', "Zambia"),
    range('E', 'A', 'E', "Ethiopia"),
    range('E', 'F', 'K', "Mozambique"),
    range('F', 'A', 'E', "Ghana"),
    range('F', 'F', 'K', "Nigeria"),
    // Asia
    range('J', 'A', 'T', "Japan"),
    range('K', 'A', 'E', "Sri Lanka"),
    range('K', 'F', 'K', "Israel"),
    range('K', 'L', 'R', "Korea (South)"),
    range('K', 'S', '0', "Kazakhstan"),
    range('L', 'A', '0', "China"),
    range('M', 'A', 'E', "India"),
    range('M', 'F', 'K', "Indonesia"),
    range('M', 'L', 'R', "Thailand"),
    range('N', 'F', 'K', "Pakistan"),
    range('N', 'L', 'R', "Turkey"),
    range('P', 'A', 'E', "Philippines"),
    range('P', 'F', 'K', "Singapore"),
    range('P', 'L', 'R', "Malaysia"),
    range('R', 'A', 'E', "United Arab Emirates"),
    range('R', 'F', 'K', "Taiwan"),
    range('R', 'L', 'R', "Vietnam"),
    range('R', 'S', '0', "Saudi Arabia"),
    // Europe
    range('S', 'A', 'M', "United Kingdom"),
    range('S', 'N', 'T', "Germany/East Germany"),
    range('S', 'U', 'Z', "Poland"),
    range('S', '1', '4', "Latvia"),
    range('T', 'A', 'H', "Switzerland"),
    range('T', 'J', 'P', "Czech Republic"),
    range('T', 'R', 'V', "Hungary"),
    range('T', 'W', '1', "Portugal"),
    range('U', 'H', 'M', "Denmark"),
    range('U', 'N', 'T', "Ireland"),
    range('U', 'U', 'Z', "Romania"),
    range('U', '5', '7', "Slovakia"),
    range('V', 'A', 'E', "Austria"),
    range('V', 'F', 'R', "France"),
    range('V', 'S', 'W', "Spain"),
    range('V', 'X', '2', "Serbia"),
    range('V', '3', '5', "Croatia"),
    range('V', '6', '0', "Estonia"),
    range('W', 'A', '0', "Germany/West Germany"),
    range('X', 'A', 'E', "Bulgaria"),
    range('X', 'F', 'K', "Greece"),
    range('X', 'L', 'R', "Netherlands"),
    range('X', 'S', 'W', "Russia/USSR"),
    range('X', 'X', '2', "Luxembourg"),
    range('X', '3', '0', "Russia"),
    range('Y', 'A', 'E', "Belgium"),
    range('Y', 'F', 'K', "Finland"),
    range('Y', 'L', 'R', "Malta"),
    range('Y', 'S', 'W', "Sweden"),
    range('Y', 'X', '2', "Norway"),
    range('Y', '3', '5', "Belarus"),
    range('Y', '6', '0', "Ukraine"),
    range('Z', 'A', 'R', "Italy"),
    range('Z', 'X', '2', "Slovenia"),
    range('Z', '3', '5', "Lithuania"),
    // North America
    range('1', 'A', '0', "United States"),
    range('2', 'A', '0', "Canada"),
    range('3', 'A', 'W', "Mexico"),
    range('3', 'X', '7', "Costa Rica"),
    range('3', '8', '0', "Cayman Islands"),
    range('4', 'A', '0', "United States"),
    range('5', 'A', '0', "United States"),
    // Oceania
    range('6', 'A', 'W', "Australia"),
    range('7', 'A', 'E', "New Zealand"),
    // South America
    range('8', 'A', 'E', "Argentina"),
    range('8', 'F', 'K', "Chile"),
    range('8', 'L', 'R', "Ecuador"),
    range('8', 'S', 'W', "Peru"),
    range('8', 'X', '2', "Venezuela"),
    range('9', 'A', 'E', "Brazil"),
    range('9', 'F', 'K', "Colombia"),
    range('9', 'L', 'R', "Paraguay"),
    range('9', 'S', 'W', "Uruguay"),
    range('9', 'X', '2', "Trinidad & Tobago"),
    range('9', '3', '9', "Brazil"),
];
