//! Unguarded file primitives.
//!
//! These functions do no locking. Two callers running read-modify-write
//! cycles on the same path through them can interleave and lose an update;
//! use [`crate::EnvironmentStore`] when more than one writer is possible.

use std::path::{Path, PathBuf};

use reelmock_core::environment::Environment;
use tokio::io::AsyncWriteExt;

use crate::error::StoreError;
use crate::Timestamp;

/// Read and validate the environment document at `path`.
pub async fn read_environment(path: &Path) -> Result<Environment, StoreError> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(StoreError::io(path))?;

    Environment::from_json_str(&text).map_err(|e| StoreError::from_core(path, e))
}

/// Replace the file at `path` with `env`, serialized with two-space
/// indentation and a trailing newline.
///
/// The document is written to a sibling temp file, synced to disk, then
/// renamed over `path`, so readers never observe a half-written file.
pub async fn write_environment(path: &Path, env: &Environment) -> Result<(), StoreError> {
    let mut text = env.to_pretty_json().map_err(|e| StoreError::Malformed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    text.push('\n');

    let tmp_path = temp_path_for(path);
    {
        let mut file = tokio::fs::File::create(&tmp_path)
            .await
            .map_err(StoreError::io(&tmp_path))?;
        file.write_all(text.as_bytes())
            .await
            .map_err(StoreError::io(&tmp_path))?;
        file.flush().await.map_err(StoreError::io(&tmp_path))?;
        file.sync_all().await.map_err(StoreError::io(&tmp_path))?;
    }

    if let Err(e) = tokio::fs::rename(&tmp_path, path).await {
        let _ = tokio::fs::remove_file(&tmp_path).await;
        return Err(StoreError::Io {
            path: path.to_path_buf(),
            source: e,
        });
    }

    // Best-effort fsync of the directory so the rename itself is durable.
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Ok(dir) = tokio::fs::File::open(parent).await {
            let _ = dir.sync_all().await;
        }
    }

    tracing::debug!(path = %path.display(), bytes = text.len(), "Environment file written");
    Ok(())
}

/// Last-modified time of the file at `path`.
///
/// Opens the file rather than only stat-ing it, so a file that exists but is
/// not readable is reported as an error.
pub async fn modified_at(path: &Path) -> Result<Timestamp, StoreError> {
    let file = tokio::fs::File::open(path)
        .await
        .map_err(StoreError::io(path))?;
    let modified = file
        .metadata()
        .await
        .and_then(|meta| meta.modified())
        .map_err(StoreError::io(path))?;

    Ok(Timestamp::from(modified))
}

/// Unique temp file next to `path` (same directory, so `rename` stays on one
/// filesystem).
fn temp_path_for(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "environment.json".to_string());
    path.with_file_name(format!(".{name}.{}.tmp", uuid::Uuid::new_v4()))
}
