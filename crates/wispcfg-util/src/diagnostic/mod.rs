//! Diagnostic module - error records and severity levels.
//!
//! The parser never aborts on malformed input; instead it emits one
//! [`ParseError`] record per offending line. The record is shaped for
//! machine consumption (IPC clients, `wispcheck --json`) and mirrors the
//! fields the window manager reports over its control socket.

pub mod snippet;

pub use snippet::Snippet;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Diagnostic severity level.
///
/// # Examples
///
/// ```
/// use wispcfg_util::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// assert_eq!(format!("{}", Level::Warning), "warning");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// A problem that makes (part of) the configuration unusable.
    Error,
    /// A problem the parser can work around.
    Warning,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
        }
    }
}

/// Machine-readable record for a single syntax error.
///
/// One record is emitted per line the parser could not recognize. The
/// field names are part of the wire format and must not be renamed:
///
/// - `success` is always `false`,
/// - `parse_error` is always `true`,
/// - `error` is the human-readable message ("Expected one of these
///   tokens: ..."),
/// - `input` is the complete configuration text that was parsed,
/// - `errorposition` is a caret underline for the offending line (see
///   [`snippet::caret_line`]).
///
/// # Examples
///
/// ```
/// use wispcfg_util::ParseError;
///
/// let record = ParseError::new("Expected one of these tokens: <end>", "bogus\n", "^^^^^");
/// assert!(!record.success);
/// assert!(record.parse_error);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParseError {
    pub success: bool,
    pub parse_error: bool,
    pub error: String,
    pub input: String,
    pub errorposition: String,
}

impl ParseError {
    /// Creates a record with the fixed `success`/`parse_error` markers set.
    pub fn new(
        error: impl Into<String>,
        input: impl Into<String>,
        errorposition: impl Into<String>,
    ) -> Self {
        Self {
            success: false,
            parse_error: true,
            error: error.into(),
            input: input.into(),
            errorposition: errorposition.into(),
        }
    }
}
