use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for config loading (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to {action} '{path}'")]
    #[diagnostic(code(svgjsx::config::io))]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{path}' already exists")]
    #[diagnostic(
        code(svgjsx::config::exists),
        help("pass --force to overwrite it")
    )]
    AlreadyExists { path: PathBuf },

    #[error("failed to parse svgjsx.toml")]
    #[diagnostic(code(svgjsx::config::parse))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(svgjsx::config::validation), help("{hint}"))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
        hint: String,
    },
}

impl Error {
    pub(crate) fn io(
        action: &'static str,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Box<Self> {
        Box::new(Error::Io {
            action,
            path: path.into(),
            source,
        })
    }

    /// Create a parse error from a toml error with source context
    pub(crate) fn parse(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Create a validation error, labeled at `span` when known
    pub(crate) fn validation(
        message: impl Into<String>,
        hint: impl Into<String>,
        src: &str,
        filename: &str,
        span: Option<SourceSpan>,
    ) -> Box<Self> {
        Box::new(Error::Validation {
            src: NamedSource::new(filename, src.to_string()),
            span,
            message: message.into(),
            hint: hint.into(),
        })
    }
}
