use std::path::Path;

use clap::ValueEnum;
use serde::Deserialize;

use crate::lib::errors::ConfigError;

/// When to emit ANSI colors in user-facing messages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ColorMode::Auto => "auto",
            ColorMode::Always => "always",
            ColorMode::Never => "never",
        }
    }

    /// Apply the mode to the process-wide `colored` switch.
    pub fn apply(self) {
        match self {
            ColorMode::Auto => colored::control::unset_override(),
            ColorMode::Always => colored::control::set_override(true),
            ColorMode::Never => colored::control::set_override(false),
        }
    }
}

/// Terminal output settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputSection {
    pub color: ColorMode,
}

#[derive(Debug, Deserialize, Default)]
pub struct RawOutputSection {
    pub color: Option<String>,
}

pub fn parse_output_section(
    raw: Option<RawOutputSection>,
    path: &Path,
) -> Result<OutputSection, ConfigError> {
    let output_raw = raw.unwrap_or_default();
    let color = match output_raw.color.as_deref().map(str::trim) {
        None => ColorMode::default(),
        Some(value) => ColorMode::from_str(value, true).map_err(|_| ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "output.color",
            message: format!("Use one of auto, always, never (got `{value}`)"),
        })?,
    };

    Ok(OutputSection { color })
}
