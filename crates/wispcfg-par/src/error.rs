//! Fatal parser errors.
//!
//! Malformed *input* never produces these: syntax errors are reported
//! and recovered from line by line. A [`FatalError`] means the grammar
//! tables themselves are inconsistent, which can only happen when the
//! generated tables are edited by hand.

use thiserror::Error;

/// Unrecoverable condition caused by broken grammar tables.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FatalError {
    /// A single directive captured more identified values than the
    /// fixed-size stack holds.
    #[error("captured-value stack full while capturing `{identifier}`; this is a bug in the grammar tables")]
    StackFull { identifier: &'static str },

    /// Grammar nesting exceeded the fixed-size state trail.
    #[error("state trail full while entering `{state}`; this is a bug in the grammar tables")]
    TrailOverflow { state: &'static str },

    /// Recovery walked the whole state trail without finding an
    /// `<error>` descriptor. The start state is required to carry one.
    #[error("no <error> token reachable from any enclosing state; this is a bug in the grammar tables")]
    NoErrorToken,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_grammar_bug() {
        let err = FatalError::StackFull { identifier: "num" };
        assert!(err.to_string().contains("`num`"));
        assert!(err.to_string().contains("bug in the grammar tables"));

        let err = FatalError::TrailOverflow { state: "MODE" };
        assert!(err.to_string().contains("`MODE`"));

        assert!(FatalError::NoErrorToken
            .to_string()
            .contains("<error>"));
    }
}
