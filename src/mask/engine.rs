//! Single-pass scanner that walks the compiled mask and the input together.
//!
//! All positions are **code point** (not byte) indices into the input as
//! scanned, which under right-to-left processing is the reversed input.

use crate::diagnostic::{Diagnostic, Found};

use super::symbol::{CaseMode, CharClass, Requirement, Symbol};

/// Text and diagnostics produced by one [`scan`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScanOutput {
    pub text: String,
    pub diagnostics: Vec<Diagnostic>,
}

/// Run `symbols` over `input`, padding unmet required classes with `pad`.
pub fn scan(symbols: &[Symbol], input: &[char], pad: char) -> ScanOutput {
    let mut state = ScanState::new(input, pad);
    for symbol in symbols {
        state.step(*symbol);
    }
    state.finish()
}

/// Mutable state of a single scan. Lives only for one call.
struct ScanState<'a> {
    input: &'a [char],
    pad: char,
    cursor: usize,
    case: CaseMode,
    output: String,
    diagnostics: Vec<Diagnostic>,
    last_diagnostic: Option<usize>,
}

impl<'a> ScanState<'a> {
    fn new(input: &'a [char], pad: char) -> Self {
        Self {
            input,
            pad,
            cursor: 0,
            case: CaseMode::Normal,
            output: String::with_capacity(input.len()),
            diagnostics: Vec::new(),
            last_diagnostic: None,
        }
    }

    fn current(&self) -> Option<char> {
        self.input.get(self.cursor).copied()
    }

    fn step(&mut self, symbol: Symbol) {
        match symbol {
            Symbol::SetCase(mode) => self.case = mode,
            Symbol::Literal(ch) => {
                self.output.push(ch);
                if self.current() == Some(ch) {
                    self.cursor += 1;
                }
            }
            Symbol::Class(class, requirement) => self.match_class(class, requirement),
        }
    }

    fn match_class(&mut self, class: CharClass, requirement: Requirement) {
        let current = self.current();
        match current {
            Some(ch) if class.matches(ch) => {
                self.output.push(self.case.apply(ch));
                self.cursor += 1;
            }
            // The wildcard never pads, even at end of input.
            _ if class == CharClass::Any => {}
            _ if requirement == Requirement::Optional => {}
            _ => {
                let found = current.map_or(Found::EndOfInput, Found::Char);
                self.report(class, found);
                self.output.push(self.pad);
            }
        }
    }

    /// Record a diagnostic unless one was already recorded at this cursor.
    fn report(&mut self, expected: CharClass, found: Found) {
        if self.last_diagnostic.is_some_and(|last| last >= self.cursor) {
            return;
        }
        let diagnostic = Diagnostic {
            position: self.cursor,
            expected,
            found,
        };
        log::trace!("{diagnostic}");
        self.diagnostics.push(diagnostic);
        self.last_diagnostic = Some(self.cursor);
    }

    fn finish(mut self) -> ScanOutput {
        if let Some(rest) = self.input.get(self.cursor..) {
            self.output.extend(rest);
        }
        ScanOutput {
            text: self.output,
            diagnostics: self.diagnostics,
        }
    }
}
