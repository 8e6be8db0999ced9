//! Load and validate the optional `deploy.toml` settings file.
use std::path::PathBuf;

use config::FileFormat;
use serde::Deserialize;
use tracing::{debug, error, info};

use crate::lib::errors::ConfigError;

pub mod output;
pub mod project;

pub use output::{parse_output_section, ColorMode, OutputSection, RawOutputSection};
pub use project::{parse_project_section, ProjectSection, RawProjectSection};

/// Environment variable that points at an alternative settings file.
pub const CONFIG_ENV_KEY: &str = "DEPLOY_GUARD_CONFIG";
/// Settings file name looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "deploy.toml";

/// Top-level settings container.
#[derive(Debug, Clone)]
pub struct GuardSettings {
    pub project: ProjectSection,
    pub output: OutputSection,
    pub source_path: PathBuf,
}

#[derive(Debug, Deserialize)]
struct RawGuardSettings {
    project: Option<RawProjectSection>,
    output: Option<RawOutputSection>,
}

impl GuardSettings {
    /// Load settings from `path`. A missing file yields defaults unless `required` is set.
    pub fn load_from_path(path: PathBuf, required: bool) -> Result<Self, ConfigError> {
        if !required && !path.exists() {
            debug!(
                target: "deploy_path_guard::config",
                path = %path.display(),
                "Settings file not found; using defaults"
            );
        }

        let builder = config::Config::builder().add_source(
            config::File::from(path.as_path())
                .format(FileFormat::Toml)
                .required(required),
        );
        let document = builder.build().map_err(|err| {
            let error = ConfigError::from_read_error(path.clone(), err);
            error!(
                target: "deploy_path_guard::config",
                path = %path.display(),
                reason = %error,
                "Failed to read settings file"
            );
            error
        })?;

        let raw: RawGuardSettings = document.try_deserialize().map_err(|err| {
            let error = ConfigError::from_parse_error(path.clone(), err);
            error!(
                target: "deploy_path_guard::config",
                path = %path.display(),
                reason = %error,
                "Failed to parse settings file"
            );
            error
        })?;

        let settings = Self::from_raw(raw, path.clone()).map_err(|err| {
            error!(
                target: "deploy_path_guard::config",
                path = %path.display(),
                reason = %err,
                "Failed to validate settings file"
            );
            err
        })?;

        info!(
            target: "deploy_path_guard::config",
            path = %settings.source_path.display(),
            root_directory = ?settings.project.root_directory,
            color = settings.output.color.as_str(),
            "Settings loaded"
        );
        Ok(settings)
    }

    fn from_raw(raw: RawGuardSettings, path: PathBuf) -> Result<Self, ConfigError> {
        let project = parse_project_section(raw.project, &path)?;
        let output = parse_output_section(raw.output, &path)?;

        Ok(Self {
            project,
            output,
            source_path: path,
        })
    }
}
