use std::fs;

use anyhow::Result;
use serde_json::Value;
use tempfile::tempdir;

use crate::common::{path_arg, run_cli};

#[tokio::test]
async fn more_than_one_path_exits_with_one() -> Result<()> {
    let home = tempdir()?;
    let work = tempdir()?;

    let run = run_cli(home.path(), work.path(), &["/tmp/proj", "/tmp/other"]).await?;

    assert_eq!(run.code, Some(1), "{run:?}");
    assert!(run.stderr.contains("more than one path"), "{run:?}");
    assert!(run.stdout.is_empty(), "{run:?}");
    Ok(())
}

#[tokio::test]
async fn missing_path_exits_with_one() -> Result<()> {
    let home = tempdir()?;
    let work = tempdir()?;
    let missing = work.path().join("nonexistent");

    let run = run_cli(home.path(), work.path(), &[&path_arg(&missing)]).await?;

    assert_eq!(run.code, Some(1), "{run:?}");
    assert!(run.stderr.contains("Could not find"), "{run:?}");
    Ok(())
}

#[tokio::test]
async fn single_file_points_to_documentation() -> Result<()> {
    let home = tempdir()?;
    let work = tempdir()?;
    let file = work.path().join("hosts");
    fs::write(&file, "127.0.0.1 localhost\n")?;

    let run = run_cli(home.path(), work.path(), &[&path_arg(&file)]).await?;

    assert_eq!(run.code, Some(1), "{run:?}");
    assert!(
        run.stderr
            .contains("Support for single file deployments has been removed."),
        "{run:?}"
    );
    assert!(
        run.stderr
            .contains("https://vercel.link/no-single-file-deployments"),
        "{run:?}"
    );
    Ok(())
}

#[tokio::test]
async fn directory_is_printed_as_json() -> Result<()> {
    let home = tempdir()?;
    let work = tempdir()?;
    fs::create_dir(work.path().join("site"))?;

    let run = run_cli(home.path(), work.path(), &["--cwd", &path_arg(work.path()), "site"]).await?;

    assert_eq!(run.code, Some(0), "{run:?}");
    let payload: Value = serde_json::from_str(&run.stdout)?;
    assert_eq!(payload["status"], "valid");
    assert_eq!(
        payload["path"].as_str(),
        Some(path_arg(&work.path().join("site")).as_str())
    );
    assert!(payload["root_directory"].is_null());
    Ok(())
}

#[tokio::test]
async fn no_paths_defaults_to_working_directory() -> Result<()> {
    let home = tempdir()?;
    let work = tempdir()?;

    let run = run_cli(home.path(), work.path(), &["--cwd", &path_arg(work.path())]).await?;

    assert_eq!(run.code, Some(0), "{run:?}");
    let payload: Value = serde_json::from_str(&run.stdout)?;
    assert_eq!(payload["path"].as_str(), Some(path_arg(work.path()).as_str()));
    Ok(())
}

#[tokio::test]
async fn home_directory_without_terminal_is_aborted() -> Result<()> {
    let home = tempdir()?;

    let run = run_cli(home.path(), home.path(), &[&path_arg(home.path())]).await?;

    assert_eq!(run.code, Some(0), "{run:?}");
    assert!(run.stderr.contains("Aborted"), "{run:?}");
    assert!(run.stdout.is_empty(), "{run:?}");
    Ok(())
}
