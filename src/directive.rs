//! Mask directive parsing.
//!
//! A directive is `pattern[;pad[;rtl]]`. A `;` preceded by a backslash
//! belongs to the pattern rather than separating fields.

use std::convert::Infallible;
use std::str::FromStr;

/// Field separator inside a directive string.
const SEPARATOR: char = ';';

/// Default pad character when the directive does not name one.
pub const DEFAULT_PAD: char = ' ';

/// A parsed mask directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskDirective {
    /// The mask pattern, with any escaped separators kept escaped.
    pub pattern: String,
    /// Substitute emitted when a required class is unmet.
    pub pad: char,
    /// Process right-to-left.
    pub rtl: bool,
}

impl Default for MaskDirective {
    fn default() -> Self {
        Self {
            pattern: String::new(),
            pad: DEFAULT_PAD,
            rtl: false,
        }
    }
}

impl MaskDirective {
    /// Parse a raw directive. Never fails: missing or empty trailing fields
    /// fall back to their defaults.
    pub fn parse(raw: &str) -> Self {
        let mut fields = raw.split(SEPARATOR);
        // split always yields at least one fragment
        let mut pattern = fields.next().unwrap_or_default().to_string();
        let mut rest: Vec<&str> = fields.collect();

        // Re-join fragments split on an escaped separator.
        while pattern.ends_with('\\') && !rest.is_empty() {
            pattern.push(SEPARATOR);
            pattern.push_str(rest.remove(0));
        }

        let pad = rest
            .first()
            .and_then(|field| field.chars().next())
            .unwrap_or(DEFAULT_PAD);
        let rtl = rest.get(1).is_some_and(|field| *field == "1");

        Self { pattern, pad, rtl }
    }
}

impl FromStr for MaskDirective {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directive(pattern: &str, pad: char, rtl: bool) -> MaskDirective {
        MaskDirective {
            pattern: pattern.to_string(),
            pad,
            rtl,
        }
    }

    #[test]
    fn pattern_only() {
        assert_eq!(MaskDirective::parse("LLL-0000"), directive("LLL-0000", ' ', false));
    }

    #[test]
    fn all_three_fields() {
        assert_eq!(
            MaskDirective::parse("00.000.000/0000-00;0;1"),
            directive("00.000.000/0000-00", '0', true)
        );
    }

    #[test]
    fn rtl_flag_must_be_exactly_one() {
        assert!(!MaskDirective::parse("000;_;0").rtl);
        assert!(!MaskDirective::parse("000;_;true").rtl);
        assert!(!MaskDirective::parse("000;_;11").rtl);
        assert!(MaskDirective::parse("000;_;1").rtl);
    }

    #[test]
    fn pad_takes_first_code_point() {
        assert_eq!(MaskDirective::parse("000;*").pad, '*');
        assert_eq!(MaskDirective::parse("000;·x").pad, '·');
    }

    #[test]
    fn empty_pad_field_uses_default() {
        assert_eq!(MaskDirective::parse("000;;1"), directive("000", ' ', true));
    }

    #[test]
    fn empty_directive() {
        assert_eq!(MaskDirective::parse(""), MaskDirective::default());
    }

    #[test]
    fn escaped_separator_stays_in_pattern() {
        assert_eq!(MaskDirective::parse(r"00\;00;_"), directive(r"00\;00", '_', false));
    }

    #[test]
    fn multiple_escaped_separators() {
        assert_eq!(
            MaskDirective::parse(r"0\;0\;0;#;1"),
            directive(r"0\;0\;0", '#', true)
        );
    }

    #[test]
    fn trailing_escape_without_more_fields() {
        assert_eq!(MaskDirective::parse(r"00\"), directive(r"00\", ' ', false));
    }

    #[test]
    fn extra_fields_are_ignored() {
        assert_eq!(MaskDirective::parse("0;x;1;junk"), directive("0", 'x', true));
    }

    #[test]
    fn from_str_matches_parse() {
        let parsed: MaskDirective = "AA;-".parse().unwrap();
        assert_eq!(parsed, MaskDirective::parse("AA;-"));
    }
}
