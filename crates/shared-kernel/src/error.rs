// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum GlocError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<GlocError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

impl GlocError {
    /// Shorthand for a configuration failure raised by the domain layer.
    pub fn configuration(reason: impl Into<String>) -> Self {
        DomainError::InvalidConfiguration { reason: reason.into() }.into()
    }

    /// Strips `Context` and `AggregationFailed` wrappers down to the error that was raised first.
    pub fn root_cause(&self) -> &GlocError {
        match self {
            Self::Context { source, .. } => source.root_cause(),
            Self::Application(ApplicationError::AggregationFailed { source, .. }) => source.root_cause(),
            other => other,
        }
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self.root_cause(), Self::Domain(DomainError::InvalidConfiguration { .. }))
    }
}

pub type Result<T> = std::result::Result<T, GlocError>;

/// Domain-layer specific errors.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Application-layer errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Failed to aggregate directory '{root}': {source}")]
    AggregationFailed {
        root: PathBuf,
        #[source]
        source: Box<GlocError>,
    },
}

pub type ApplicationResult<T> = std::result::Result<T, ApplicationError>;

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("'{path}' should be a directory, not a file")]
    NotADirectory { path: PathBuf },

    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk '{root}': {details}")]
    Walk { root: PathBuf, details: String },

    #[error("Failed to parse {format} input: {details}")]
    SerializationError { format: String, details: String },

    #[error("File system operation failed: {operation} on '{path}': {source}")]
    FileSystemOperation {
        operation: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

impl From<serde_json::Error> for InfrastructureError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for GlocError {
    fn from(err: serde_json::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for InfrastructureError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::SerializationError {
            format: "YAML".to_string(),
            details: err.to_string(),
        }
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for GlocError {
    fn from(err: serde_yaml::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<GlocError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| GlocError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| GlocError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
