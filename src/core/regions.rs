//! Geographic regions encoded by the first VIN character.

use std::fmt;

use serde::{Deserialize, Serialize};

/// World region assigned to the first character of a WMI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    /// First character `A`-`H`.
    Africa,
    /// First character `J`-`R`.
    Asia,
    /// First character `S`-`Z`.
    Europe,
    /// First character `1`-`5`; the check digit is mandatory.
    NorthAmerica,
    /// First character `6` or `7`.
    Oceania,
    /// First character `8` or `9`.
    SouthAmerica,
}

impl Region {
    /// All regions, in table order.
    pub const ALL: [Self; 6] = [
        Self::Africa,
        Self::Asia,
        Self::Europe,
        Self::NorthAmerica,
        Self::Oceania,
        Self::SouthAmerica,
    ];

    /// Human-readable region name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Africa => "Africa",
            Self::Asia => "Asia",
            Self::Europe => "Europe",
            Self::NorthAmerica => "North America",
            Self::Oceania => "Oceania",
            Self::SouthAmerica => "South America",
        }
    }

    /// First characters that map to this region.
    pub const fn codes(self) -> &'static [char] {
        match self {
            Self::Africa => &['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H'],
            Self::Asia => &['J', 'K', 'L', 'M', 'N', 'P', 'R'],
            Self::Europe => &['S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z'],
            Self::NorthAmerica => &['1', '2', '3', '4', '5'],
            Self::Oceania => &['6', '7'],
            Self::SouthAmerica => &['8', '9'],
        }
    }

    /// Whether VINs from this region must carry a correct check digit.
    pub const fn enforces_check_digit(self) -> bool {
        matches!(self, Self::NorthAmerica)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Look up the region for the first character of a VIN.
///
/// Expects an uppercase character; anything outside the region table,
/// including `I`, `O`, `Q` and `0`, yields `None`.
pub fn region_for(code: char) -> Option<Region> {
    Region::ALL
        .into_iter()
        .find(|region| region.codes().contains(&code))
}
