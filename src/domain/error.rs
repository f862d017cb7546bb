use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for buildpin operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Project file already exists at the target location.
    #[error("buildpin.toml already exists at {0}")]
    ProjectConfigExists(String),

    /// No project file found in the project directory.
    #[error("No buildpin.toml found in {0}. Run 'buildpin init' first.")]
    ProjectConfigMissing(String),

    /// Host did not provide a default output root.
    #[error("Default output root is unavailable; the host has not provided a build directory")]
    OutputRootUnavailable,

    /// Output offset must be relative to the default output root.
    #[error("Output offset '{0}' must be a relative path")]
    InvalidOutputOffset(String),

    /// Module identifier is invalid.
    #[error(
        "Invalid module name '{0}': must be alphanumeric with hyphens, underscores, or periods"
    )]
    InvalidModuleName(String),

    /// Module declared more than once.
    #[error("Module '{0}' is declared more than once")]
    DuplicateModule(String),

    /// Module not present in the project tree.
    #[error("Module '{name}' not found. Available: {available}")]
    ModuleNotFound { name: String, available: String },

    /// Module output directory was already relocated elsewhere.
    #[error("Module '{module}' output directory already set to {}", .current.display())]
    ModuleAlreadyRelocated { module: String, current: PathBuf },

    /// Package coordinate is invalid.
    #[error("Invalid coordinate '{0}': expected 'group:artifact'")]
    InvalidCoordinate(String),

    /// Dependency notation is invalid.
    #[error("Invalid dependency '{0}': expected 'group:artifact:version'")]
    InvalidDependency(String),

    /// Version string is invalid.
    #[error("Invalid version '{0}'")]
    InvalidVersion(String),

    /// Repository location cannot be used as a package source.
    #[error("Unsupported repository '{name}': {reason}")]
    UnsupportedRepository { name: String, reason: String },

    /// Selected version does not exist in any configured source.
    #[error("Could not find {coordinate}:{version}. Searched in: {searched}")]
    VersionNotFound { coordinate: String, version: String, searched: String },

    /// Resolution kept changing its selection.
    #[error("Dependency resolution for module '{module}' did not settle after {passes} passes")]
    ResolutionDidNotConverge { module: String, passes: usize },

    /// Task name is not registered.
    #[error("Task '{name}' not found. Available: {available}")]
    TaskNotFound { name: String, available: String },

    /// Deletion of build outputs failed.
    #[error("Failed to delete {}: {source}", .path.display())]
    Cleanup {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind` view of the failure.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Cleanup { source, .. } => source.kind(),
            AppError::Configuration(_)
            | AppError::OutputRootUnavailable
            | AppError::InvalidOutputOffset(_)
            | AppError::InvalidModuleName(_)
            | AppError::DuplicateModule(_)
            | AppError::ModuleAlreadyRelocated { .. }
            | AppError::InvalidCoordinate(_)
            | AppError::InvalidDependency(_)
            | AppError::InvalidVersion(_)
            | AppError::UnsupportedRepository { .. }
            | AppError::ResolutionDidNotConverge { .. }
            | AppError::ParseError { .. }
            | AppError::TomlParseError(_)
            | AppError::Json(_) => io::ErrorKind::InvalidInput,
            AppError::ProjectConfigMissing(_)
            | AppError::ModuleNotFound { .. }
            | AppError::VersionNotFound { .. }
            | AppError::TaskNotFound { .. } => io::ErrorKind::NotFound,
            AppError::ProjectConfigExists(_) => io::ErrorKind::AlreadyExists,
        }
    }
}
