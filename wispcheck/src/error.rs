//! Error handling for the wispcheck CLI.

use thiserror::Error;

/// Errors that stop wispcheck before a verdict on the configuration.
///
/// Syntax errors in the checked file are not errors of this type: they
/// are the program's normal output and only affect the exit code.
#[derive(Error, Debug)]
pub enum WispcheckError {
    /// The configuration file could not be read.
    #[error("cannot read {path}: {source}")]
    ReadConfig {
        path: String,
        source: std::io::Error,
    },

    /// Logging setup failed.
    #[error("failed to initialize logging: {0}")]
    Logging(String),

    /// JSON output could not be produced.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The grammar tables are inconsistent. Not reachable from input;
    /// indicates a broken build.
    #[error(transparent)]
    Parser(#[from] wispcfg_par::FatalError),
}

/// Result type alias using WispcheckError.
pub type Result<T> = std::result::Result<T, WispcheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_config_display() {
        let err = WispcheckError::ReadConfig {
            path: "/etc/wisp/config".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        let text = err.to_string();
        assert!(text.contains("/etc/wisp/config"));
        assert!(text.contains("no such file"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: WispcheckError = json_err.into();
        assert!(matches!(err, WispcheckError::Json(_)));
    }

    #[test]
    fn test_parser_error_conversion() {
        let err: WispcheckError = wispcfg_par::FatalError::NoErrorToken.into();
        assert!(matches!(err, WispcheckError::Parser(_)));
    }
}
