//! CLI entrypoint module structure.
pub mod args;
pub mod profile;

pub use args::DeployArgs;
pub use profile::{
    resolve_candidates, resolve_config_path, resolve_working_dir, ConfigLocation, DeployProfile,
    SettingSource,
};
