//! Mask symbols and pattern compilation.

use phf::{Map, phf_map};

/// Escapes the following pattern code point.
pub const ESCAPE: char = '\\';

/// Case transform applied to class matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseMode {
    #[default]
    Normal,
    Upper,
    Lower,
}

/// A character class tested against one input code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Digit,       // 0 9
    AsciiLetter, // L l
    AsciiAlnum,  // A a
    Letter,      // W w
    Any,         // C c
}

/// Whether an unmet class pads and reports, or is skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Required,
    Optional,
}

/// One compiled mask symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    Class(CharClass, Requirement),
    SetCase(CaseMode),
    /// Emitted verbatim; absorbs a matching input code point.
    Literal(char),
}

/// Every pattern code point with a meaning other than "literal".
/// Keep sorted by class for readability.
const SYMBOL_MAP: Map<char, Symbol> = phf_map! {
    '0' => Symbol::Class(CharClass::Digit, Requirement::Required),
    '9' => Symbol::Class(CharClass::Digit, Requirement::Optional),
    'L' => Symbol::Class(CharClass::AsciiLetter, Requirement::Required),
    'l' => Symbol::Class(CharClass::AsciiLetter, Requirement::Optional),
    'A' => Symbol::Class(CharClass::AsciiAlnum, Requirement::Required),
    'a' => Symbol::Class(CharClass::AsciiAlnum, Requirement::Optional),
    'W' => Symbol::Class(CharClass::Letter, Requirement::Required),
    'w' => Symbol::Class(CharClass::Letter, Requirement::Optional),
    'C' => Symbol::Class(CharClass::Any, Requirement::Required),
    'c' => Symbol::Class(CharClass::Any, Requirement::Optional),
    '>' => Symbol::SetCase(CaseMode::Upper),
    '<' => Symbol::SetCase(CaseMode::Lower),
    '=' => Symbol::SetCase(CaseMode::Normal),
};

/// Classify a single unescaped pattern code point.
pub fn classify(ch: char) -> Symbol {
    SYMBOL_MAP.get(&ch).copied().unwrap_or(Symbol::Literal(ch))
}

/// Compile a pattern into symbols.
///
/// An escaped code point always becomes a [`Symbol::Literal`]. A trailing
/// lone backslash escapes nothing and is dropped.
pub fn compile(pattern: &str) -> Vec<Symbol> {
    let mut symbols = Vec::with_capacity(pattern.len());
    let mut chars = pattern.chars();
    while let Some(ch) = chars.next() {
        if ch == ESCAPE {
            if let Some(escaped) = chars.next() {
                symbols.push(Symbol::Literal(escaped));
            }
        } else {
            symbols.push(classify(ch));
        }
    }
    symbols
}
