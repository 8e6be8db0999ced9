//! CLI argument definitions and `DeployProfile` construction.
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;

use super::{resolve_candidates, resolve_config_path, resolve_working_dir, DeployProfile};
use crate::{lib::paths::resolve_home_dir, settings::ColorMode};

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    author,
    version,
    about = "Check deployment paths before a deploy proceeds",
    long_about = "Check deployment paths before a deploy proceeds.\n\nExactly one directory may be deployed. Deploying the home directory asks for confirmation first. On success the resolved paths are printed as JSON on stdout.",
    after_help = "Exit codes: 0 = valid or cancelled by the user, 1 = rejected."
)]
pub struct DeployArgs {
    /// Path to deploy (defaults to the working directory).
    pub paths: Vec<PathBuf>,
    /// Working directory used to resolve relative paths.
    #[arg(long)]
    pub cwd: Option<PathBuf>,
    /// Root directory inside the deploy path (overrides `project.root_directory`).
    #[arg(long = "root-directory")]
    pub root_directory: Option<PathBuf>,
    /// Path to deploy.toml (overrides DEPLOY_GUARD_CONFIG).
    #[arg(long = "config")]
    pub config_override: Option<PathBuf>,
    /// Colorize messages (overrides `output.color`).
    #[arg(long, value_enum)]
    pub color: Option<ColorMode>,
}

impl DeployArgs {
    /// Build a `DeployProfile` from CLI args and environment variables.
    pub fn build(self) -> Result<DeployProfile> {
        let working_dir = resolve_working_dir(self.cwd)?;
        let home_dir = resolve_home_dir().map_err(|message| anyhow!(message))?;
        let (config_path, config_location) =
            resolve_config_path(self.config_override, &working_dir);
        let candidates = resolve_candidates(&self.paths, &working_dir);

        Ok(DeployProfile {
            working_dir,
            home_dir,
            config_path,
            config_location,
            candidates,
            root_directory_override: self.root_directory,
            color_override: self.color,
        })
    }
}
