use std::process::ExitCode;

use anyhow::Error;

/// Bundles an optional error message with the process exit code.
#[derive(Debug)]
pub struct CommandExit {
    message: Option<String>,
    exit_code: u8,
}

impl CommandExit {
    /// Exit without printing anything; the validator already told the user why.
    pub fn silent(exit_code: u8) -> Self {
        Self {
            message: None,
            exit_code,
        }
    }

    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: Some(format!("{err:?}")),
            exit_code: 1,
        }
    }

    pub fn report(self) -> ExitCode {
        if let Some(message) = self.message {
            eprintln!("{message}");
        }
        ExitCode::from(self.exit_code)
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
