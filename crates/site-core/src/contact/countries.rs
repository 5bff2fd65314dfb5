//! Phone country codes offered by the phone input

/// Dial prefix and the country it belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountryCode {
    pub code: &'static str,
    pub country: &'static str,
}

const fn cc(code: &'static str, country: &'static str) -> CountryCode {
    CountryCode { code, country }
}

/// Selectable prefixes, DACH region first
pub static COUNTRY_CODES: &[CountryCode] = &[
    cc("+49", "Germany"),
    cc("+43", "Austria"),
    cc("+41", "Switzerland"),
    cc("+44", "United Kingdom"),
    cc("+1", "United States"),
    cc("+33", "France"),
    cc("+39", "Italy"),
    cc("+34", "Spain"),
    cc("+31", "Netherlands"),
    cc("+32", "Belgium"),
    cc("+352", "Luxembourg"),
    cc("+45", "Denmark"),
    cc("+46", "Sweden"),
    cc("+47", "Norway"),
    cc("+358", "Finland"),
    cc("+48", "Poland"),
    cc("+420", "Czech Republic"),
    cc("+36", "Hungary"),
    cc("+351", "Portugal"),
    cc("+30", "Greece"),
    cc("+353", "Ireland"),
    cc("+380", "Ukraine"),
    cc("+90", "Turkey"),
    cc("+971", "United Arab Emirates"),
    cc("+91", "India"),
    cc("+61", "Australia"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_prefix_listed_first() {
        assert_eq!(COUNTRY_CODES[0].code, "+49");
    }

    #[test]
    fn test_codes_unique_and_well_formed() {
        let mut seen = HashSet::new();
        for entry in COUNTRY_CODES {
            assert!(entry.code.starts_with('+'), "{}", entry.code);
            assert!(entry.code[1..].chars().all(|c| c.is_ascii_digit()));
            assert!(seen.insert(entry.code), "duplicate {}", entry.code);
        }
    }
}
