use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DialingCode {
    pub name: &'static str,
    pub code: &'static str,
}

impl DialingCode {
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.code)
    }
}

/// Selector order. The first entry is the default code.
pub const DIALING_CODES: &[DialingCode] = &[
    DialingCode { name: "India (IN)", code: "+91" },
    DialingCode { name: "USA (US)", code: "+1" },
    DialingCode { name: "UK (GB)", code: "+44" },
    DialingCode { name: "Australia (AU)", code: "+61" },
    DialingCode { name: "Canada (CA)", code: "+1" },
    DialingCode { name: "Germany (DE)", code: "+49" },
    DialingCode { name: "France (FR)", code: "+33" },
    DialingCode { name: "Japan (JP)", code: "+81" },
    DialingCode { name: "China (CN)", code: "+86" },
    DialingCode { name: "Brazil (BR)", code: "+55" },
    DialingCode { name: "South Africa (ZA)", code: "+27" },
    DialingCode { name: "Singapore (SG)", code: "+65" },
    DialingCode { name: "UAE (AE)", code: "+971" },
];

pub const DIALING_CODE_MARKER: char = '+';

pub fn default_dialing_code() -> &'static DialingCode {
    &DIALING_CODES[0]
}

pub fn dialing_codes() -> &'static [DialingCode] {
    DIALING_CODES
}

/// Index of the first table entry carrying `code`.
pub fn dialing_code_index(code: &str) -> Option<usize> {
    DIALING_CODES.iter().position(|entry| entry.code == code)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplitPhone {
    pub code: String,
    pub number: String,
}

impl SplitPhone {
    fn new(code: &str, number: &str) -> Self {
        Self {
            code: code.to_string(),
            number: number.to_string(),
        }
    }

    pub fn join(&self) -> String {
        join_phone(&self.code, &self.number)
    }
}

/// Splits a stored phone string into a dialing code and a local number.
///
/// Never fails. When nothing looks like a dialing code the default code is
/// returned with the whole input as the local number; joining that result
/// back does not reproduce the input.
pub fn split_phone(raw: &str) -> SplitPhone {
    let default = default_dialing_code().code;
    if raw.is_empty() {
        return SplitPhone::new(default, "");
    }

    let best = DIALING_CODES
        .iter()
        .filter(|entry| raw.starts_with(entry.code))
        .fold(None::<&DialingCode>, |best, entry| match best {
            Some(current) if current.code.len() >= entry.code.len() => Some(current),
            _ => Some(entry),
        });
    if let Some(entry) = best {
        return SplitPhone::new(entry.code, raw[entry.code.len()..].trim());
    }

    if let Some((first, rest)) = raw.split_once(' ') {
        if first.starts_with(DIALING_CODE_MARKER) {
            return SplitPhone::new(first, rest);
        }
    }

    SplitPhone::new(default, raw)
}

pub fn split_optional_phone(raw: Option<&str>) -> SplitPhone {
    split_phone(raw.unwrap_or_default())
}

pub fn join_phone(code: &str, number: &str) -> String {
    format!("{} {}", code, number)
}

pub fn is_local_number_char(ch: char) -> bool {
    ch.is_ascii_digit() || ch.is_whitespace() || matches!(ch, '-' | '(' | ')' | '.' | 'x')
}

/// Drops every character that cannot appear in a local number. `x` is kept
/// for extensions such as `x140`.
pub fn filter_local_number(input: &str) -> String {
    input.chars().filter(|ch| is_local_number_char(*ch)).collect()
}

#[cfg(test)]
mod tests {
    use super::{
        dialing_code_index, filter_local_number, join_phone, split_optional_phone, split_phone,
        SplitPhone, DIALING_CODES,
    };

    fn split(code: &str, number: &str) -> SplitPhone {
        SplitPhone {
            code: code.to_string(),
            number: number.to_string(),
        }
    }

    #[test]
    fn empty_and_missing_use_default_code() {
        assert_eq!(split_phone(""), split("+91", ""));
        assert_eq!(split_optional_phone(None), split("+91", ""));
    }

    #[test]
    fn table_code_is_stripped_and_trimmed() {
        assert_eq!(split_phone("+91 9876543210"), split("+91", "9876543210"));
        assert_eq!(split_phone("+44   20 7946 0000 "), split("+44", "20 7946 0000"));
    }

    #[test]
    fn shorter_code_wins_when_longer_code_does_not_match() {
        assert_eq!(split_phone("+1 123 456"), split("+1", "123 456"));
    }

    #[test]
    fn longest_matching_code_wins() {
        assert_eq!(split_phone("+971 50 123 4567"), split("+971", "50 123 4567"));
    }

    #[test]
    fn unknown_marker_code_is_kept_as_ad_hoc_code() {
        assert_eq!(split_phone("+7 495 123-45-67"), split("+7", "495 123-45-67"));
    }

    #[test]
    fn unrecognized_format_falls_back_to_default_code() {
        assert_eq!(
            split_phone("586.493.6943 x140"),
            split("+91", "586.493.6943 x140")
        );
        assert_eq!(split_phone("+7001234"), split("+91", "+7001234"));
    }

    #[test]
    fn fallback_is_not_a_round_trip() {
        let original = "586.493.6943 x140";
        let parts = split_phone(original);
        assert_ne!(parts.join(), original);
        assert_eq!(parts.join(), "+91 586.493.6943 x140");
    }

    #[test]
    fn split_inverts_join_for_every_table_code() {
        for entry in DIALING_CODES {
            for number in ["555-0100", "(020) 7946 0000", "12 34 x5"] {
                let joined = join_phone(entry.code, number);
                assert_eq!(split_phone(&joined), split(entry.code, number));
            }
        }
    }

    #[test]
    fn filter_keeps_only_local_number_characters() {
        assert_eq!(
            filter_local_number("+91 (555) abc-12.3 x4"),
            "91 (555) -12.3 x4"
        );
        assert_eq!(filter_local_number("X140"), "140");
    }

    #[test]
    fn code_index_prefers_first_entry() {
        assert_eq!(dialing_code_index("+91"), Some(0));
        assert_eq!(dialing_code_index("+1"), Some(1));
        assert_eq!(dialing_code_index("+7"), None);
    }
}
