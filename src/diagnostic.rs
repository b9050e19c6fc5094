//! Positional diagnostics for unmet required classes.

use std::fmt;

use itertools::Itertools;

use crate::mask::CharClass;

/// What the scanner found where a required class was expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Found {
    Char(char),
    EndOfInput,
}

/// A required class that the input did not satisfy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Code point index into the scanned input. This is not a UTF-8 byte
    /// offset: for non-ASCII input the two differ.
    pub position: usize,
    pub expected: CharClass,
    pub found: Found,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.found {
            Found::Char(ch) => write!(
                f,
                "invalid character \"{ch}\" (expected {}) at position {}",
                self.expected, self.position
            ),
            Found::EndOfInput => write!(
                f,
                "expected {} at position {}, but end of string found",
                self.expected, self.position
            ),
        }
    }
}

/// Combined error for an input that failed one or more required classes.
///
/// Carries the best-effort formatted text alongside the diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidInput {
    pub text: String,
    pub diagnostics: Vec<Diagnostic>,
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.diagnostics.iter().join("\n"))
    }
}

impl std::error::Error for InvalidInput {}
