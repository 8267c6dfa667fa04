use std::fmt;
use std::str::FromStr;

/// Sub-event codes used by the WTT CMS
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubEventCode {
    All,
    MenSingles,
    WomenSingles,
    MenDoubles,
    WomenDoubles,
    MixedDoubles,
}

impl SubEventCode {
    pub const ALL_CODES: [SubEventCode; 6] = [
        SubEventCode::All,
        SubEventCode::MenSingles,
        SubEventCode::WomenSingles,
        SubEventCode::MenDoubles,
        SubEventCode::WomenDoubles,
        SubEventCode::MixedDoubles,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SubEventCode::All => "ALL",
            SubEventCode::MenSingles => "MS",
            SubEventCode::WomenSingles => "WS",
            SubEventCode::MenDoubles => "MD",
            SubEventCode::WomenDoubles => "WD",
            SubEventCode::MixedDoubles => "XD",
        }
    }

    pub fn is_doubles(&self) -> bool {
        matches!(
            self,
            SubEventCode::MenDoubles | SubEventCode::WomenDoubles | SubEventCode::MixedDoubles
        )
    }
}

impl fmt::Display for SubEventCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubEventCode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL_CODES
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| anyhow::anyhow!("Unknown sub-event code: {}", s))
    }
}

/// Whether a raw sub-event code names a doubles category (MD, WD or XD).
///
/// Codes outside the known set are treated as singles.
pub fn is_doubles_sub_event(code: &str) -> bool {
    code.parse::<SubEventCode>()
        .map(|code| code.is_doubles())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doubles_classification() {
        assert!(is_doubles_sub_event("MD"));
        assert!(is_doubles_sub_event("WD"));
        assert!(is_doubles_sub_event("XD"));
        assert!(!is_doubles_sub_event("MS"));
        assert!(!is_doubles_sub_event("WS"));
        assert!(!is_doubles_sub_event("ALL"));
    }

    #[test]
    fn test_unknown_codes_are_singles() {
        assert!(!is_doubles_sub_event(""));
        assert!(!is_doubles_sub_event("md"));
        assert!(!is_doubles_sub_event("MXD"));
    }

    #[test]
    fn test_code_round_trips_through_str() {
        for code in SubEventCode::ALL_CODES {
            assert_eq!(code.as_str().parse::<SubEventCode>().unwrap(), code);
        }
    }
}
