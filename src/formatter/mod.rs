//! Entry points: parse a directive, run the mask, undo RTL reversal.

use crate::diagnostic::{Diagnostic, InvalidInput};
use crate::directive::MaskDirective;
use crate::mask::{ScanOutput, Symbol, compile, scan};
use crate::reverse::{reverse_codepoints, reverse_pattern};


/// A compiled mask, ready to be applied to any number of inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    symbols: Vec<Symbol>,
    pad: char,
    rtl: bool,
}

/// The outcome of applying a [`Mask`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatted {
    /// Best-effort formatted text, always produced.
    pub text: String,
    /// Unmet required classes, in scan order. Empty on success.
    pub diagnostics: Vec<Diagnostic>,
}

impl Formatted {
    pub fn is_valid(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Convert into a `Result`, failing when any diagnostic was recorded.
    pub fn into_result(self) -> Result<String, InvalidInput> {
        if self.diagnostics.is_empty() {
            Ok(self.text)
        } else {
            Err(InvalidInput {
                text: self.text,
                diagnostics: self.diagnostics,
            })
        }
    }
}

impl Mask {
    /// Parse and compile a raw directive (`pattern[;pad[;rtl]]`).
    pub fn new(directive: &str) -> Self {
        Self::from_directive(MaskDirective::parse(directive))
    }

    pub fn from_directive(directive: MaskDirective) -> Self {
        log::debug!(
            "mask {:?}: pad {:?}, rtl {}",
            directive.pattern,
            directive.pad,
            directive.rtl
        );
        let pattern = if directive.rtl {
            reverse_pattern(&directive.pattern)
        } else {
            directive.pattern
        };
        Self {
            symbols: compile(&pattern),
            pad: directive.pad,
            rtl: directive.rtl,
        }
    }

    pub fn pad(&self) -> char {
        self.pad
    }

    pub fn is_rtl(&self) -> bool {
        self.rtl
    }

    /// Format `input`, collecting a diagnostic for each unmet required
    /// class.
    ///
    /// Under RTL the input is reversed before scanning and the text is
    /// reversed back afterwards; diagnostic positions index the reversed
    /// input.
    pub fn apply(&self, input: &str) -> Formatted {
        let chars: Vec<char> = if self.rtl {
            reverse_codepoints(input).chars().collect()
        } else {
            input.chars().collect()
        };

        let ScanOutput { text, diagnostics } = scan(&self.symbols, &chars, self.pad);

        let text = if self.rtl {
            reverse_codepoints(&text)
        } else {
            text
        };
        Formatted { text, diagnostics }
    }

    /// Format `input`, discarding diagnostics.
    pub fn format(&self, input: &str) -> String {
        self.apply(input).text
    }
}

impl From<MaskDirective> for Mask {
    fn from(directive: MaskDirective) -> Self {
        Self::from_directive(directive)
    }
}

/// Validate `input` against `directive` and format it.
pub fn validate_and_format(directive: &str, input: &str) -> Formatted {
    Mask::new(directive).apply(input)
}

/// Format `input` against `directive`, ignoring validation failures.
pub fn format(directive: &str, input: &str) -> String {
    Mask::new(directive).format(input)
}
