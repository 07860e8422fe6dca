//! wispcfg-lex - Token recognizers for the wisp config parser.
//!
//! The configuration language is line-oriented: directives are separated
//! by newlines, tokens within a line by spaces and tabs. There is no
//! fixed token stream; the parser driver decides which recognizer to try
//! at the current position based on its grammar state. This crate
//! provides the [`Cursor`] over the raw input and the [`Scanner`] with
//! one recognizer per token kind (literal, number, string, word, line,
//! end).
//!
//! Every recognizer either consumes input and reports a match, or leaves
//! the cursor untouched, so the driver can try candidates in table order
//! without any backtracking bookkeeping.

pub mod cursor;
pub mod scan;

pub use cursor::Cursor;
pub use scan::Scanner;
