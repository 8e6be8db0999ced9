use std::{path::Path, process::Stdio};

use anyhow::{Context, Result};
use tokio::process::Command;

pub const BINARY_PATH: &str = env!("CARGO_BIN_EXE_deploy-path-guard");

/// Captured result of one CLI run.
#[derive(Debug)]
pub struct CliRun {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

/// Run the binary with `home` as the home directory and `cwd` as working directory.
pub async fn run_cli(home: &Path, cwd: &Path, args: &[&str]) -> Result<CliRun> {
    run_cli_with_config_env(home, cwd, args, None).await
}

/// Same as [`run_cli`], optionally pointing `DEPLOY_GUARD_CONFIG` at `config`.
pub async fn run_cli_with_config_env(
    home: &Path,
    cwd: &Path,
    args: &[&str],
    config: Option<&Path>,
) -> Result<CliRun> {
    let mut command = Command::new(BINARY_PATH);
    command
        .args(args)
        .arg("--color")
        .arg("never")
        .current_dir(cwd)
        .env("HOME", home)
        .env_remove("RUST_LOG")
        .env_remove("DEPLOY_GUARD_CONFIG");
    if let Some(config) = config {
        command.env("DEPLOY_GUARD_CONFIG", config);
    }

    let output = command
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await
        .context("failed to run deploy-path-guard")?;

    Ok(CliRun {
        code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

pub fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
