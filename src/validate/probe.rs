use std::{future::Future, path::Path};

use tracing::debug;

/// What the filesystem reports for a candidate path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathStatus {
    /// Metadata could not be read, for any reason.
    Missing,
    /// Anything that is not a directory, symlinks included.
    File,
    Directory,
}

/// Abstraction for filesystem access during path validation.
pub trait PathProbe {
    fn status(&self, path: &Path) -> impl Future<Output = PathStatus> + Send;
}

/// Probe that reads metadata from the real filesystem without following symlinks.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioPathProbe;

impl PathProbe for TokioPathProbe {
    async fn status(&self, path: &Path) -> PathStatus {
        match tokio::fs::symlink_metadata(path).await {
            Ok(metadata) if metadata.is_dir() => PathStatus::Directory,
            Ok(_) => PathStatus::File,
            Err(err) => {
                debug!(
                    target: "deploy_path_guard::validate",
                    path = %path.display(),
                    reason = %err,
                    "Metadata lookup failed; treating path as missing"
                );
                PathStatus::Missing
            }
        }
    }
}
