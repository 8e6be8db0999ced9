use std::path::{Path, PathBuf};

use serde::{Serialize, Serializer};
use tracing::info;

use super::CommandExit;
use crate::{
    cli::{DeployProfile, SettingSource},
    lib::{
        output::Output,
        paths::{humanize_path, resolve_lexically},
        prompt::ConfirmPrompt,
    },
    settings::GuardSettings,
    validate::{PathProbe, PathValidator, Verdict},
};

/// Paths a deploy may proceed with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeployOutcome {
    pub status: &'static str,
    #[serde(serialize_with = "serialize_lossy")]
    pub path: PathBuf,
    #[serde(serialize_with = "serialize_lossy_option")]
    pub root_directory: Option<PathBuf>,
}

// Paths need not be UTF-8; invalid sequences become U+FFFD in the payload.
fn serialize_lossy<S: Serializer>(path: &Path, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&path.to_string_lossy())
}

fn serialize_lossy_option<S: Serializer>(
    path: &Option<PathBuf>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match path {
        Some(path) => serialize_lossy(path, serializer),
        None => serializer.serialize_none(),
    }
}

/// Validate the deploy path and, when configured, its root directory.
pub async fn run_deploy<P, O, C>(
    profile: &DeployProfile,
    settings: &GuardSettings,
    validator: &PathValidator<P, O, C>,
) -> Result<DeployOutcome, CommandExit>
where
    P: PathProbe,
    O: Output,
    C: ConfirmPrompt,
{
    let path = match validator.validate_paths(&profile.candidates).await {
        Verdict::Valid { resolved_path } => resolved_path,
        Verdict::Invalid { exit_code } => return Err(CommandExit::silent(exit_code)),
    };

    let root_directory = match profile.root_directory(settings) {
        Some((root, source)) => {
            let resolved = resolve_lexically(&path, root);
            let suffix = root_directory_hint(source, settings, &profile.home_dir);
            if !validator
                .validate_root_directory(&path, &resolved, Some(&suffix))
                .await
            {
                return Err(CommandExit::silent(1));
            }
            Some(resolved)
        }
        None => None,
    };

    info!(
        target: "deploy_path_guard::runtime",
        path = %path.display(),
        root_directory = ?root_directory,
        "Deploy paths validated"
    );
    Ok(DeployOutcome {
        status: "valid",
        path,
        root_directory,
    })
}

fn root_directory_hint(
    source: SettingSource,
    settings: &GuardSettings,
    home_dir: &Path,
) -> String {
    match source {
        SettingSource::Flag => "Check the `--root-directory` option.".to_string(),
        SettingSource::ConfigFile => format!(
            "Check `project.root_directory` in {}.",
            humanize_path(&settings.source_path, home_dir)
        ),
    }
}
