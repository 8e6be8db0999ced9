use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::lib::errors::ConfigError;

/// Project layout settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectSection {
    /// Subdirectory of the deploy path that deployment is scoped to.
    pub root_directory: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default)]
pub struct RawProjectSection {
    pub root_directory: Option<String>,
}

pub fn parse_project_section(
    raw: Option<RawProjectSection>,
    path: &Path,
) -> Result<ProjectSection, ConfigError> {
    let project_raw = raw.unwrap_or_default();
    let root_directory = match project_raw.root_directory {
        Some(value) if value.trim().is_empty() => {
            return Err(ConfigError::InvalidField {
                path: path.to_path_buf(),
                field: "project.root_directory",
                message: "Remove the key or set it to a directory inside the project".into(),
            })
        }
        Some(value) => Some(PathBuf::from(value)),
        None => None,
    };

    Ok(ProjectSection { root_directory })
}
