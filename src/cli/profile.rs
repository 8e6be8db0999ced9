//! DeployProfile and working-directory/config resolution.
use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Context, Result};

use crate::{
    lib::paths::{is_nonempty_absolute, resolve_lexically},
    settings::{ColorMode, GuardSettings, CONFIG_ENV_KEY, DEFAULT_CONFIG_FILE},
};

/// Where the effective root directory came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingSource {
    Flag,
    ConfigFile,
}

/// Where the settings file path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigLocation {
    Flag,
    Env,
    /// `<working_dir>/deploy.toml`; the only location allowed to be absent.
    Default,
}

impl ConfigLocation {
    pub const fn is_required(&self) -> bool {
        !matches!(self, ConfigLocation::Default)
    }
}

/// Resolved invocation profile.
#[derive(Debug, Clone)]
pub struct DeployProfile {
    pub working_dir: PathBuf,
    pub home_dir: PathBuf,
    pub config_path: PathBuf,
    pub config_location: ConfigLocation,
    /// Candidate deploy paths, already absolute and lexically normalized.
    pub candidates: Vec<PathBuf>,
    pub root_directory_override: Option<PathBuf>,
    pub color_override: Option<ColorMode>,
}

impl DeployProfile {
    /// Effective root directory: the flag wins over the settings file.
    pub fn root_directory<'a>(
        &'a self,
        settings: &'a GuardSettings,
    ) -> Option<(&'a Path, SettingSource)> {
        self.root_directory_override
            .as_deref()
            .map(|path| (path, SettingSource::Flag))
            .or_else(|| {
                settings
                    .project
                    .root_directory
                    .as_deref()
                    .map(|path| (path, SettingSource::ConfigFile))
            })
    }

    /// Effective color mode: the flag wins over the settings file.
    pub fn color_mode(&self, settings: &GuardSettings) -> ColorMode {
        self.color_override.unwrap_or(settings.output.color)
    }
}

/// Resolve the working directory: explicit override, else the process cwd.
pub fn resolve_working_dir(override_dir: Option<PathBuf>) -> Result<PathBuf> {
    let cwd = env::current_dir().context("failed to obtain current directory")?;
    let working_dir = match override_dir {
        Some(dir) => resolve_lexically(&cwd, &dir),
        None => cwd,
    };

    if !is_nonempty_absolute(&working_dir) {
        return Err(anyhow!(
            "working directory must be absolute: {}",
            working_dir.display()
        ));
    }
    Ok(working_dir)
}

/// Resolve config path in the order: CLI override → env var → `<working_dir>/deploy.toml`.
pub fn resolve_config_path(
    override_path: Option<PathBuf>,
    working_dir: &Path,
) -> (PathBuf, ConfigLocation) {
    let (path, location) = override_path
        .map(|path| (path, ConfigLocation::Flag))
        .or_else(|| {
            env::var_os(CONFIG_ENV_KEY)
                .filter(|value| !value.is_empty())
                .map(|value| (PathBuf::from(value), ConfigLocation::Env))
        })
        .unwrap_or_else(|| (PathBuf::from(DEFAULT_CONFIG_FILE), ConfigLocation::Default));

    (resolve_lexically(working_dir, &path), location)
}

/// Make every candidate absolute; no candidates means the working directory.
pub fn resolve_candidates(paths: &[PathBuf], working_dir: &Path) -> Vec<PathBuf> {
    if paths.is_empty() {
        return vec![working_dir.to_path_buf()];
    }
    paths
        .iter()
        .map(|path| resolve_lexically(working_dir, path))
        .collect()
}
