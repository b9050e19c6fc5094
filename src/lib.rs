//! Validate and format strings against a declarative character mask.
//!
//! A directive is `pattern[;pad[;rtl]]`: the mask pattern, an optional pad
//! character (default space) and an optional right-to-left flag (`1`).
//! See [`mask`] for the pattern symbols.
//!
//! # Example
//!
//! ```rust
//! use strmask::{format, validate_and_format};
//!
//! // Pad with zeroes, process right to left
//! assert_eq!(
//!     format("00.000.000/0000-00;0;1", "12520501000188"),
//!     "12.520.501/0001-88"
//! );
//!
//! // A digit where a letter is required
//! let result = validate_and_format("LLL-0000", "OL4508");
//! assert_eq!(result.text, "OL -4508");
//! assert_eq!(
//!     result.into_result().unwrap_err().to_string(),
//!     "invalid character \"4\" (expected an ascii letter) at position 2"
//! );
//! ```

mod diagnostic;
pub mod directive;
mod formatter;
pub mod mask;
pub mod reverse;

pub use diagnostic::{Diagnostic, Found, InvalidInput};
pub use directive::MaskDirective;
pub use formatter::{Formatted, Mask, format, validate_and_format};
