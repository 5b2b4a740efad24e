use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::core::Phase;

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid TOML syntax in '{file}'")]
#[diagnostic(
    code(tortoise_hare::toml_parse_error),
    help("Check the TOML syntax near the highlighted position")
)]
pub struct TomlParseError {
    pub file: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("syntax error here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: toml::de::Error,
}

#[derive(Error, Debug, Diagnostic)]
pub enum TortoiseHareError {
    #[error("Cycle detector has not been configured")]
    #[diagnostic(
        code(tortoise_hare::not_configured),
        help("Call configure() with a successor function and start position before stepping")
    )]
    NotConfigured,

    #[error("Step limit of {limit} reached while still in the {phase} phase")]
    #[diagnostic(
        code(tortoise_hare::step_limit_exceeded),
        help(
            "The successor function may never enter a cycle from this start; raise --max-steps \
             if the graph is simply large"
        )
    )]
    StepLimitExceeded { limit: usize, phase: Phase },

    #[error("Invalid graph shape: {message}")]
    #[diagnostic(
        code(tortoise_hare::invalid_shape),
        help("The cycle must contain at least one node; the tail may be empty")
    )]
    InvalidShape { message: String },

    #[error("Invalid successor table: {message}")]
    #[diagnostic(
        code(tortoise_hare::invalid_successor_table),
        help("Every entry must name a node index smaller than the table length")
    )]
    InvalidSuccessorTable { message: String },

    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(tortoise_hare::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    TomlParseError(Box<TomlParseError>),

    #[error("JSON serialization error")]
    #[diagnostic(
        code(tortoise_hare::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(tortoise_hare::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(tortoise_hare::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Detector result for {label} disagrees with the graph: {details}")]
    #[diagnostic(
        code(tortoise_hare::verification_failed),
        help("This is a bug in the detector - please report it with the graph that triggered it")
    )]
    VerificationFailed { label: String, details: String },

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(tortoise_hare::config_error),
        help("Check your command arguments and scenario file")
    )]
    ConfigurationError { message: String },
}

#[cfg(test)]
mod tests {
    use std::io;

    use miette::NamedSource;

    use super::*;

    #[test]
    fn test_toml_parse_error_display() {
        let source_code = "tail_length = = 3";
        let toml_err = toml::from_str::<toml::Value>(source_code).unwrap_err();

        let error = TomlParseError {
            file: "scenario.toml".to_string(),
            source_code: NamedSource::new("scenario.toml", source_code.to_string()),
            span: Some((14, 1).into()),
            source: toml_err,
        };

        assert_eq!(error.to_string(), "Invalid TOML syntax in 'scenario.toml'");
    }

    #[test]
    fn test_not_configured_display() {
        let error = TortoiseHareError::NotConfigured;
        assert_eq!(error.to_string(), "Cycle detector has not been configured");
    }

    #[test]
    fn test_step_limit_display() {
        let error = TortoiseHareError::StepLimitExceeded {
            limit: 64,
            phase: Phase::Detecting,
        };

        assert_eq!(
            error.to_string(),
            "Step limit of 64 reached while still in the detecting phase"
        );
    }

    #[test]
    fn test_invalid_shape_display() {
        let error = TortoiseHareError::InvalidShape {
            message: "cycle length must be at least 1".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "Invalid graph shape: cycle length must be at least 1"
        );
    }

    #[test]
    fn test_file_read_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error = TortoiseHareError::FileReadError {
            path: PathBuf::from("/tmp/missing.toml"),
            source: io_err,
        };

        assert_eq!(error.to_string(), "Failed to read file '/tmp/missing.toml'");
    }

    #[test]
    fn test_error_codes() {
        use miette::Diagnostic;

        for error in [
            TortoiseHareError::NotConfigured,
            TortoiseHareError::InvalidSuccessorTable {
                message: "empty".to_string(),
            },
            TortoiseHareError::ConfigurationError {
                message: "bad".to_string(),
            },
        ] {
            assert!(error.code().is_some());
            assert!(error.help().is_some());
        }
    }

    #[test]
    fn test_error_conversion_from_io() {
        let io_err = io::Error::other("some io error");
        let err: TortoiseHareError = io_err.into();

        match err {
            TortoiseHareError::Io(_) => {}
            _ => panic!("Expected Io variant"),
        }
    }

    #[test]
    fn test_error_conversion_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{invalid json}").unwrap_err();
        let err: TortoiseHareError = json_err.into();

        match err {
            TortoiseHareError::Json(_) => {}
            _ => panic!("Expected Json variant"),
        }
    }
}
