//! Shared path helpers: home resolution, display formatting, and prefix checks.

use std::{
    env,
    ffi::OsString,
    path::{Component, Path, PathBuf},
};

/// Environment variable name for user home directory.
const HOME_ENV: &str = "HOME";
/// Fallback used on Windows hosts.
const USERPROFILE_ENV: &str = "USERPROFILE";

/// Returns true if the path is non-empty and absolute.
pub fn is_nonempty_absolute(path: &Path) -> bool {
    !path.as_os_str().is_empty() && path.is_absolute()
}

/// Resolve the current user's home directory.
///
/// Resolution order:
/// 1. `$HOME` when set and non-empty.
/// 2. `$USERPROFILE` otherwise.
pub fn resolve_home_dir() -> Result<PathBuf, &'static str> {
    resolve_home_dir_from(env::var_os(HOME_ENV), env::var_os(USERPROFILE_ENV))
}

/// Resolve home from explicit environment values (testable helper).
fn resolve_home_dir_from(
    home: Option<OsString>,
    user_profile: Option<OsString>,
) -> Result<PathBuf, &'static str> {
    [home, user_profile]
        .into_iter()
        .flatten()
        .find(|value| !value.is_empty())
        .map(PathBuf::from)
        .ok_or("HOME and USERPROFILE are both unset")
}

/// Render `path` for humans, shortening a leading home directory to `~`.
pub fn humanize_path(path: &Path, home: &Path) -> String {
    let rendered = path.to_string_lossy();
    let home = home.to_string_lossy();
    if home.is_empty() {
        return rendered.into_owned();
    }
    match rendered.strip_prefix(home.as_ref()) {
        Some(rest) if rest.is_empty() || rest.starts_with(std::path::MAIN_SEPARATOR) => {
            format!("~{rest}")
        }
        _ => rendered.into_owned(),
    }
}

/// Join `path` onto `base` and fold `.` and `..` lexically, without touching
/// the filesystem. Absolute `path` values replace `base`.
pub fn resolve_lexically(base: &Path, path: &Path) -> PathBuf {
    let mut resolved = PathBuf::new();
    for component in base.join(path).components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match resolved.components().next_back() {
                Some(Component::Normal(_)) => {
                    resolved.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => resolved.push(component),
            },
            other => resolved.push(other),
        }
    }
    resolved
}

/// Literal string-prefix containment: `/proj-2` counts as inside `/proj`.
///
/// No canonicalization happens here; `..` segments and symlinks are compared
/// as written.
pub fn has_string_prefix(path: &Path, prefix: &Path) -> bool {
    path.as_os_str()
        .as_encoded_bytes()
        .starts_with(prefix.as_os_str().as_encoded_bytes())
}

/// Byte-for-byte path equality, without `Path`'s component normalization.
pub fn is_same_path_string(left: &Path, right: &Path) -> bool {
    left.as_os_str() == right.as_os_str()
}
