//! Character class membership tests and case transforms.

use std::fmt;

use unicode_general_category::{GeneralCategory, get_general_category};

use super::symbol::{CaseMode, CharClass};

impl CharClass {
    /// Test whether `ch` belongs to this class.
    pub fn matches(self, ch: char) -> bool {
        match self {
            CharClass::Digit => is_decimal_digit(ch),
            CharClass::AsciiLetter => ch.is_ascii_alphabetic(),
            CharClass::AsciiAlnum => ch.is_ascii_alphabetic() || is_decimal_digit(ch),
            CharClass::Letter => is_letter(ch),
            CharClass::Any => true,
        }
    }

    /// Phrase used in diagnostics, e.g. "expected a digit".
    pub fn description(self) -> &'static str {
        match self {
            CharClass::Digit => "a digit",
            CharClass::AsciiLetter => "an ascii letter",
            CharClass::AsciiAlnum => "an ascii letter or a digit",
            CharClass::Letter => "an unicode letter",
            CharClass::Any => "any character",
        }
    }
}

/// Decimal digit in any script (category Nd).
fn is_decimal_digit(ch: char) -> bool {
    ch.is_ascii_digit() || get_general_category(ch) == GeneralCategory::DecimalNumber
}

/// Letter in any script (category L). Narrower than `char::is_alphabetic`,
/// which also admits letter numbers and combining vowel signs.
fn is_letter(ch: char) -> bool {
    matches!(
        get_general_category(ch),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl CaseMode {
    /// Map `ch` to exactly one code point. A character whose case mapping
    /// expands to several code points is left as is.
    pub fn apply(self, ch: char) -> char {
        match self {
            CaseMode::Normal => ch,
            CaseMode::Upper => single(ch.to_uppercase()).unwrap_or(ch),
            CaseMode::Lower => single(ch.to_lowercase()).unwrap_or(ch),
        }
    }
}

fn single(mut mapped: impl Iterator<Item = char>) -> Option<char> {
    let first = mapped.next()?;
    mapped.next().is_none().then_some(first)
}
