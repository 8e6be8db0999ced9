use std::path::PathBuf;

use config::ConfigError as ConfigLoaderError;
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while loading or validating configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to build (read) the configuration file.
    #[error("Failed to read configuration file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Failed to deserialize TOML into a struct.
    #[error("Failed to parse configuration file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Field failed validation.
    #[error("Configuration file {path} has invalid `{field}`: {message}")]
    InvalidField {
        path: PathBuf,
        field: &'static str,
        message: String,
    },
}

impl ConfigError {
    /// Helper to wrap `config::ConfigError` as a read failure.
    pub fn from_read_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::FileRead { path, source }
    }

    /// Helper to wrap `config::ConfigError` as a parse failure.
    pub fn from_parse_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::Parse { path, source }
    }
}

/// Reasons a deployment path is rejected.
///
/// `shown` carries the path exactly as the user sees it (humanized and
/// quoted), so the display text is the whole message after `Error!`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathRejection {
    #[error("Can't deploy more than one path.")]
    TooManyPaths,
    #[error("No path to deploy was provided.")]
    NoPaths,
    #[error("Could not find {shown}")]
    NotFound { shown: String },
    #[error("The provided path {shown} does not exist.")]
    RootNotFound { shown: String },
    #[error("The provided path {shown} is a file, but expected a directory.")]
    NotADirectory { shown: String },
    #[error("{}", SINGLE_FILE_DEPLOYMENT_ERROR.message)]
    SingleFileUnsupported,
    #[error("The provided path {shown} is outside of the project.")]
    OutsideProject { shown: String },
}

impl PathRejection {
    /// Process exit code the dispatcher should use for this rejection.
    pub const fn exit_code(&self) -> u8 {
        1
    }

    /// Short machine-readable name used in logs.
    pub const fn code(&self) -> &'static str {
        match self {
            PathRejection::TooManyPaths => "too_many_paths",
            PathRejection::NoPaths => "no_paths",
            PathRejection::NotFound { .. } | PathRejection::RootNotFound { .. } => "not_found",
            PathRejection::NotADirectory { .. } => "not_a_directory",
            PathRejection::SingleFileUnsupported => "single_file_unsupported",
            PathRejection::OutsideProject { .. } => "outside_project",
        }
    }
}

/// Structured error rendered with a documentation link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrettyError {
    /// User-facing message.
    pub message: &'static str,
    /// Documentation that explains the error.
    pub link: &'static str,
}

impl PrettyError {
    /// Simple constructor.
    pub const fn new(message: &'static str, link: &'static str) -> Self {
        Self { message, link }
    }
}

/// Emitted when a single file is passed where a directory is required.
pub const SINGLE_FILE_DEPLOYMENT_ERROR: PrettyError = PrettyError::new(
    "Support for single file deployments has been removed.",
    "https://vercel.link/no-single-file-deployments",
);
