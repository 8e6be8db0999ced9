//! Command dispatch and exit-code reporting.
mod deploy;
mod exit;

pub use deploy::{run_deploy, DeployOutcome};
pub use exit::CommandExit;

use crate::{cli::DeployProfile, settings::GuardSettings, validate::TerminalValidator};

/// Run the deploy check against the real terminal and return the JSON payload for stdout.
pub async fn execute(profile: DeployProfile) -> Result<String, CommandExit> {
    let settings = GuardSettings::load_from_path(
        profile.config_path.clone(),
        profile.config_location.is_required(),
    )
    .map_err(CommandExit::from_error)?;
    profile.color_mode(&settings).apply();

    let validator = TerminalValidator::for_terminal(profile.home_dir.clone());
    let outcome = run_deploy(&profile, &settings, &validator).await?;

    serde_json::to_string_pretty(&outcome).map_err(CommandExit::from_error)
}
