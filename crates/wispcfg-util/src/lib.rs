//! wispcfg-util - Diagnostic infrastructure for the wisp config parser.
//!
//! This crate holds the pieces of error reporting that are independent of
//! the parser itself: severity levels, the machine-readable error record
//! emitted for every syntax error, and source-context snippet rendering
//! (the offending line with a caret underline plus up to two lines of
//! context on either side).

pub mod diagnostic;

pub use diagnostic::{Level, ParseError, Snippet};
pub use diagnostic::snippet::{caret_line, line_at, start_of_line};
