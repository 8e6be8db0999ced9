use std::path::{Path, PathBuf};

/// Outcome of `validate_paths`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Deployment may proceed with this path.
    Valid { resolved_path: PathBuf },
    /// Deployment must stop; the process should exit with `exit_code`.
    Invalid { exit_code: u8 },
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid { .. })
    }

    pub fn resolved_path(&self) -> Option<&Path> {
        match self {
            Verdict::Valid { resolved_path } => Some(resolved_path),
            Verdict::Invalid { .. } => None,
        }
    }

    /// Exit code for the process; `0` for valid verdicts.
    pub fn exit_code(&self) -> u8 {
        match self {
            Verdict::Valid { .. } => 0,
            Verdict::Invalid { exit_code } => *exit_code,
        }
    }

    pub(crate) fn outcome(&self) -> &'static str {
        match self {
            Verdict::Valid { .. } => "valid",
            Verdict::Invalid { exit_code: 0 } => "cancelled",
            Verdict::Invalid { .. } => "invalid",
        }
    }
}
