//! Yes/no confirmation prompts.

use std::{future::Future, io::ErrorKind};

use dialoguer::{Confirm, Error as DialoguerError};
use tracing::warn;

/// Asks the user a yes/no question.
pub trait ConfirmPrompt {
    /// Resolve to the user's answer; `default` is preselected.
    fn confirm(&self, message: &str, default: bool) -> impl Future<Output = bool> + Send;
}

/// Interactive prompt on the controlling terminal.
///
/// Prompt failures (no TTY, interrupted input) count as a decline.
#[derive(Debug, Default, Clone, Copy)]
pub struct DialoguerPrompt;

impl ConfirmPrompt for DialoguerPrompt {
    async fn confirm(&self, message: &str, default: bool) -> bool {
        let prompt = message.to_string();
        let answer = tokio::task::spawn_blocking(move || {
            Confirm::new()
                .with_prompt(prompt)
                .default(default)
                .interact()
        })
        .await;

        match answer {
            Ok(Ok(value)) => value,
            Ok(Err(DialoguerError::IO(err))) if err.kind() == ErrorKind::Interrupted => false,
            Ok(Err(err)) => {
                warn!(
                    target: "deploy_path_guard::prompt",
                    reason = %err,
                    "Confirmation prompt failed; treating as decline"
                );
                false
            }
            Err(err) => {
                warn!(
                    target: "deploy_path_guard::prompt",
                    reason = %err,
                    "Confirmation prompt task failed; treating as decline"
                );
                false
            }
        }
    }
}

/// Prompt that always gives the same answer without asking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedAnswer(pub bool);

impl ConfirmPrompt for FixedAnswer {
    async fn confirm(&self, _message: &str, _default: bool) -> bool {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixed_answer_ignores_default() {
        assert!(FixedAnswer(true).confirm("continue?", false).await);
        assert!(!FixedAnswer(false).confirm("continue?", true).await);
    }
}
