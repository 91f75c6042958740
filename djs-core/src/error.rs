use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for djscaffold operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("app '{name}' does not exist at '{}'", .path.display())]
    #[diagnostic(
        code(djs::target_not_found),
        help("run 'djs start-app {name}' to create it")
    )]
    TargetNotFound { name: String, path: PathBuf },

    #[error("failed to {action} '{}'", .path.display())]
    #[diagnostic(code(djs::storage))]
    Storage {
        action: StorageAction,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse djscaffold.toml")]
    #[diagnostic(code(djs::config))]
    Config {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(
        code(djs::settings),
        help("pass --settings <path> or set project.settings in djscaffold.toml")
    )]
    Settings { message: String },
}

/// Which side of a whole-file round trip failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageAction {
    Read,
    Write,
}

impl std::fmt::Display for StorageAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageAction::Read => f.write_str("read"),
            StorageAction::Write => f.write_str("write"),
        }
    }
}

impl Error {
    /// Create a storage error for a failed read
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Storage {
            action: StorageAction::Read,
            path: path.into(),
            source,
        })
    }

    /// Create a storage error for a failed write
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Storage {
            action: StorageAction::Write,
            path: path.into(),
            source,
        })
    }

    /// Create a config parse error from a toml error with source context
    pub fn config(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Config {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Create a settings resolution error
    pub fn settings(message: impl Into<String>) -> Box<Self> {
        Box::new(Error::Settings {
            message: message.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_message() {
        let err = Error::write(
            "shop/models.py",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "failed to write 'shop/models.py'");
    }

    #[test]
    fn test_config_error_has_span() {
        let src = "[router]\nkind = \n";
        let source = toml::from_str::<toml::Value>(src).unwrap_err();
        let err = Error::config(source, src, "djscaffold.toml");
        match *err {
            Error::Config { span, .. } => assert!(span.is_some()),
            _ => panic!("expected config error"),
        }
    }
}
