use std::fs;

use anyhow::Result;
use serde_json::Value;
use tempfile::tempdir;

use crate::common::{path_arg, run_cli, run_cli_with_config_env};

#[tokio::test]
async fn root_directory_from_settings_file_is_validated() -> Result<()> {
    let home = tempdir()?;
    let work = tempdir()?;
    fs::create_dir_all(work.path().join("apps/web"))?;
    fs::write(
        work.path().join("deploy.toml"),
        "[project]\nroot_directory = \"apps/web\"\n",
    )?;

    let run = run_cli(home.path(), work.path(), &["--cwd", &path_arg(work.path())]).await?;

    assert_eq!(run.code, Some(0), "{run:?}");
    let payload: Value = serde_json::from_str(&run.stdout)?;
    assert_eq!(
        payload["root_directory"].as_str(),
        Some(path_arg(&work.path().join("apps/web")).as_str())
    );
    Ok(())
}

#[tokio::test]
async fn root_directory_flag_outside_project_is_rejected() -> Result<()> {
    let home = tempdir()?;
    let work = tempdir()?;
    let project = work.path().join("project");
    fs::create_dir_all(&project)?;
    fs::create_dir_all(work.path().join("shared"))?;

    let run = run_cli(
        home.path(),
        work.path(),
        &[&path_arg(&project), "--root-directory", "../shared"],
    )
    .await?;

    assert_eq!(run.code, Some(1), "{run:?}");
    assert!(run.stderr.contains("is outside of the project."), "{run:?}");
    assert!(run.stderr.contains("--root-directory"), "{run:?}");
    Ok(())
}

#[tokio::test]
async fn root_directory_pointing_at_file_is_rejected() -> Result<()> {
    let home = tempdir()?;
    let work = tempdir()?;
    fs::write(work.path().join("package.json"), "{}")?;

    let run = run_cli(
        home.path(),
        work.path(),
        &[&path_arg(work.path()), "--root-directory", "package.json"],
    )
    .await?;

    assert_eq!(run.code, Some(1), "{run:?}");
    assert!(
        run.stderr.contains("is a file, but expected a directory."),
        "{run:?}"
    );
    Ok(())
}

#[tokio::test]
async fn malformed_settings_file_fails_before_validation() -> Result<()> {
    let home = tempdir()?;
    let work = tempdir()?;
    fs::write(work.path().join("deploy.toml"), "[project\n")?;

    let run = run_cli(home.path(), work.path(), &["--cwd", &path_arg(work.path())]).await?;

    assert_eq!(run.code, Some(1), "{run:?}");
    assert!(
        run.stderr.contains("Failed to read configuration file"),
        "{run:?}"
    );
    Ok(())
}

#[tokio::test]
async fn missing_config_flag_file_is_an_error() -> Result<()> {
    let home = tempdir()?;
    let work = tempdir()?;
    let missing = work.path().join("nowhere/deploy.toml");

    let run = run_cli(
        home.path(),
        work.path(),
        &[&path_arg(work.path()), "--config", &path_arg(&missing)],
    )
    .await?;

    assert_eq!(run.code, Some(1), "{run:?}");
    assert!(run.stdout.is_empty(), "{run:?}");
    assert!(
        run.stderr.contains("Failed to read configuration file"),
        "{run:?}"
    );
    Ok(())
}

#[tokio::test]
async fn missing_config_env_file_is_an_error() -> Result<()> {
    let home = tempdir()?;
    let work = tempdir()?;
    let missing = work.path().join("nowhere/deploy.toml");

    let run = run_cli_with_config_env(
        home.path(),
        work.path(),
        &[&path_arg(work.path())],
        Some(&missing),
    )
    .await?;

    assert_eq!(run.code, Some(1), "{run:?}");
    assert!(
        run.stderr.contains("Failed to read configuration file"),
        "{run:?}"
    );
    Ok(())
}

#[tokio::test]
async fn missing_default_config_file_uses_defaults() -> Result<()> {
    let home = tempdir()?;
    let work = tempdir()?;

    let run = run_cli(home.path(), work.path(), &[&path_arg(work.path())]).await?;

    assert_eq!(run.code, Some(0), "{run:?}");
    let payload: Value = serde_json::from_str(&run.stdout)?;
    assert!(payload["root_directory"].is_null(), "{run:?}");
    Ok(())
}
