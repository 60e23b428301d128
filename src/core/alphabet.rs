//! VIN alphabet and the numeric tables behind the check digit.
//!
//! The alphabet is the digits plus the Latin capitals without `I`, `O` and
//! `Q`, which are excluded to avoid confusion with `1` and `0`.

/// Length of every VIN.
pub const VIN_LENGTH: usize = 17;

/// Index of the check digit within the VIN.
pub const CHECK_DIGIT_INDEX: usize = 8;

/// Positional weights for the check digit sum.
///
/// The check digit position itself carries weight 0.
pub const WEIGHTS: [u32; VIN_LENGTH] = [8, 7, 6, 5, 4, 3, 2, 10, 0, 9, 8, 7, 6, 5, 4, 3, 2];

/// Check digit value of an (uppercase) character, or `None` if it is not
/// part of the VIN alphabet.
pub const fn transliterate(c: char) -> Option<u32> {
    let value = match c {
        '0'..='9' => c as u32 - '0' as u32,
        'A' | 'J' => 1,
        'B' | 'K' | 'S' => 2,
        'C' | 'L' | 'T' => 3,
        'D' | 'M' | 'U' => 4,
        'E' | 'N' | 'V' => 5,
        'F' | 'W' => 6,
        'G' | 'P' | 'X' => 7,
        'H' | 'Y' => 8,
        'R' | 'Z' => 9,
        _ => return None,
    };
    Some(value)
}

/// Whether `c` belongs to the 33-symbol VIN alphabet.
pub const fn is_vin_char(c: char) -> bool {
    transliterate(c).is_some()
}

/// The VIN alphabet in the order used for country code ranges.
pub const RANGE_ORDER: &str = "ABCDEFGHJKLMNPRSTUVWXYZ1234567890";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_has_33_symbols() {
        let count = ('0'..='9')
            .chain('A'..='Z')
            .filter(|&c| is_vin_char(c))
            .count();
        assert_eq!(count, 33);
    }

    #[test]
    fn excluded_letters() {
        for c in ['I', 'O', 'Q'] {
            assert!(!is_vin_char(c), "{c} must not be a VIN character");
        }
        assert!(!is_vin_char('a'));
        assert!(!is_vin_char('-'));
    }

    #[test]
    fn range_order_covers_alphabet() {
        assert_eq!(RANGE_ORDER.len(), 33);
        assert!(RANGE_ORDER.chars().all(is_vin_char));
    }

    #[test]
    fn known_values() {
        assert_eq!(transliterate('A'), Some(1));
        assert_eq!(transliterate('P'), Some(7));
        assert_eq!(transliterate('R'), Some(9));
        assert_eq!(transliterate('S'), Some(2));
        assert_eq!(transliterate('Z'), Some(9));
        assert_eq!(transliterate('0'), Some(0));
        assert_eq!(transliterate('9'), Some(9));
    }

    #[test]
    fn check_digit_position_is_unweighted() {
        assert_eq!(WEIGHTS[CHECK_DIGIT_INDEX], 0);
    }
}
