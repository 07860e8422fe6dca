//! Caller-supplied parse context and the per-parse result.

use wispcfg_util::ParseError;

/// Mutable context owned by the caller of [`crate::parse`].
///
/// The parser only writes to it: the error flag accumulates across the
/// whole parse and tells the caller whether a post-parse reaction (for
/// wisp, the interactive error bar) is warranted.
#[derive(Clone, Debug, Default)]
pub struct ParseContext {
    /// Source filename, for diagnostics. `None` for in-memory input.
    pub filename: Option<String>,
    /// True once any diagnostic has been reported.
    pub has_errors: bool,
    /// Snapshot of the most recent offending line.
    pub last_line: Option<String>,
}

impl ParseContext {
    /// Context for input that did not come from a file.
    pub fn new() -> Self {
        Self::default()
    }

    /// Context for input read from the named file.
    pub fn for_file(filename: impl Into<String>) -> Self {
        Self {
            filename: Some(filename.into()),
            ..Self::default()
        }
    }

    /// The filename shown in diagnostics.
    pub fn display_filename(&self) -> &str {
        self.filename.as_deref().unwrap_or("<config>")
    }
}

/// Everything a single parse produced besides handler side effects.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParseOutput {
    /// One record per syntax error, in source order.
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    /// True when the parse produced no diagnostics.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}
