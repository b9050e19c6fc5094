//! Mask interpreter.
//!
//! # Pattern syntax
//!
//! | Symbol      | Meaning                                         |
//! |-------------|-------------------------------------------------|
//! | `0` / `9`   | Digit, required / optional                      |
//! | `L` / `l`   | ASCII letter, required / optional               |
//! | `A` / `a`   | ASCII letter or digit, required / optional      |
//! | `W` / `w`   | Unicode letter, required / optional             |
//! | `C` / `c`   | Any character                                   |
//! | `>`         | Upper-case following matches                    |
//! | `<`         | Lower-case following matches                    |
//! | `=`         | Stop changing case                              |
//! | `\X`        | `X` as a literal                                |
//! | other       | Literal, absorbs an identical input character   |
//!
//! A required class that cannot be matched emits the pad character and
//! records a [`Diagnostic`](crate::Diagnostic); the unmatched input
//! character stays available to the next symbol. An optional class is
//! skipped. Input left over once the pattern is exhausted is appended
//! unchanged.

pub mod char_class;
pub mod engine;
pub mod symbol;

pub use engine::{ScanOutput, scan};
pub use symbol::{CaseMode, CharClass, Requirement, Symbol, compile};
