//! Deployment path validation.
//!
//! `PathValidator` decides whether a deploy may proceed. Every rejection is
//! rendered to the `Output` sink immediately and surfaced to the caller only
//! as a `bool` or a `Verdict`.
mod probe;
mod verdict;

use std::path::{Path, PathBuf};

use colored::Colorize;
use tracing::info;

use crate::lib::{
    errors::{PathRejection, SINGLE_FILE_DEPLOYMENT_ERROR},
    output::{Output, TerminalOutput},
    paths::{has_string_prefix, humanize_path, is_same_path_string},
    prompt::{ConfirmPrompt, DialoguerPrompt},
    telemetry::ValidationSpan,
};

pub use probe::{PathProbe, PathStatus, TokioPathProbe};
pub use verdict::Verdict;

/// Question asked before deploying the home directory.
pub const HOME_DIRECTORY_PROMPT: &str =
    "You are deploying your home directory. Do you want to continue?";

/// Validator wired to the real filesystem, stderr, and an interactive prompt.
pub type TerminalValidator = PathValidator<TokioPathProbe, TerminalOutput, DialoguerPrompt>;

/// Validates deployment path arguments against the filesystem.
#[derive(Debug)]
pub struct PathValidator<P, O, C> {
    probe: P,
    output: O,
    prompt: C,
    home_dir: PathBuf,
}

impl TerminalValidator {
    pub fn for_terminal(home_dir: PathBuf) -> Self {
        Self::new(TokioPathProbe, TerminalOutput, DialoguerPrompt, home_dir)
    }
}

impl<P, O, C> PathValidator<P, O, C>
where
    P: PathProbe,
    O: Output,
    C: ConfirmPrompt,
{
    pub fn new(probe: P, output: O, prompt: C, home_dir: PathBuf) -> Self {
        Self {
            probe,
            output,
            prompt,
            home_dir,
        }
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    /// Check that a configured root directory exists, is a directory, and
    /// sits under `working_dir`.
    ///
    /// Containment is a literal string-prefix test; callers must normalize
    /// both paths beforehand if they need more. `error_suffix` is appended
    /// to the message on failure.
    pub async fn validate_root_directory(
        &self,
        working_dir: &Path,
        path: &Path,
        error_suffix: Option<&str>,
    ) -> bool {
        let span = ValidationSpan::start("root_directory", &path.to_string_lossy());
        let suffix = match error_suffix {
            Some(suffix) if !suffix.is_empty() => format!(" {suffix}"),
            _ => String::new(),
        };

        span.step("stat");
        let rejection = match self.probe.status(path).await {
            PathStatus::Missing => Some(PathRejection::RootNotFound {
                shown: self.quoted(path),
            }),
            PathStatus::File => Some(PathRejection::NotADirectory {
                shown: self.quoted(path),
            }),
            PathStatus::Directory => {
                span.step("containment");
                (!has_string_prefix(path, working_dir)).then(|| PathRejection::OutsideProject {
                    shown: self.quoted(path),
                })
            }
        };

        match rejection {
            Some(rejection) => {
                self.reject(&rejection, &suffix);
                span.finish(rejection.code(), Some(rejection.exit_code()));
                false
            }
            None => {
                span.finish("valid", None);
                true
            }
        }
    }

    /// Pick the single deployment path out of `candidates` and validate it.
    pub async fn validate_paths(&self, candidates: &[PathBuf]) -> Verdict {
        let first = candidates
            .first()
            .map(|path| path.to_string_lossy().into_owned())
            .unwrap_or_default();
        let span = ValidationSpan::start("paths", &first);

        let verdict = self.run_path_checks(candidates, &span).await;
        span.finish(
            verdict.outcome(),
            (!verdict.is_valid()).then(|| verdict.exit_code()),
        );
        verdict
    }

    async fn run_path_checks(&self, candidates: &[PathBuf], span: &ValidationSpan) -> Verdict {
        span.step("arity");
        let path = match candidates {
            [single] => single,
            [] => return self.reject_with_verdict(PathRejection::NoPaths),
            _ => return self.reject_with_verdict(PathRejection::TooManyPaths),
        };

        span.step("stat");
        match self.probe.status(path).await {
            PathStatus::Missing => {
                return self.reject_with_verdict(PathRejection::NotFound {
                    shown: self.quoted(path),
                })
            }
            PathStatus::File => return self.reject_with_verdict(PathRejection::SingleFileUnsupported),
            PathStatus::Directory => {}
        }

        span.step("home_guard");
        if is_same_path_string(path, &self.home_dir) {
            let proceed = self.prompt.confirm(HOME_DIRECTORY_PROMPT, false).await;
            if !proceed {
                info!(
                    target: "deploy_path_guard::validate",
                    path = %path.display(),
                    "User declined to deploy the home directory"
                );
                self.output.print("Aborted\n");
                return Verdict::Invalid { exit_code: 0 };
            }
        }

        Verdict::Valid {
            resolved_path: path.clone(),
        }
    }

    fn reject_with_verdict(&self, rejection: PathRejection) -> Verdict {
        self.reject(&rejection, "");
        Verdict::Invalid {
            exit_code: rejection.exit_code(),
        }
    }

    /// Emit exactly one message for `rejection`.
    fn reject(&self, rejection: &PathRejection, suffix: &str) {
        match rejection {
            PathRejection::SingleFileUnsupported => {
                self.output.pretty_error(&SINGLE_FILE_DEPLOYMENT_ERROR);
            }
            _ => {
                let prefix = "Error!".red();
                self.output.print(&format!("{prefix} {rejection}{suffix}\n"));
            }
        }
    }

    fn quoted(&self, path: &Path) -> String {
        format!("“{}”", humanize_path(path, &self.home_dir))
            .cyan()
            .to_string()
    }
}
