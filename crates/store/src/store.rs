//! Single-writer access to one environment file.

use std::path::{Path, PathBuf};

use reelmock_core::environment::{Environment, Route};
use reelmock_core::error::CoreError;
use reelmock_core::upsert::{self, UpsertOutcome};
use serde::Serialize;
use tokio::sync::Mutex;

use crate::error::StoreError;
use crate::file::{modified_at, read_environment, write_environment};
use crate::Timestamp;

/// Result of a persisted movies-route upsert.
#[derive(Debug, Clone, Serialize)]
pub struct UpsertReport {
    pub outcome: UpsertOutcome,
    /// Modification time of the file after the write.
    pub modified_at: Timestamp,
}

/// Value returned by a mutation plus the file's modification time, read
/// before the write lock was released.
#[derive(Debug, Clone)]
pub struct Updated<T> {
    pub value: T,
    pub modified_at: Timestamp,
}

/// Readability probe result.
#[derive(Debug, Clone, Serialize)]
pub struct FileStatus {
    pub modified_at: Timestamp,
}

/// Owns every read-modify-write of one environment file.
///
/// All mutations take the same async mutex for the whole
/// read → mutate → write → fsync cycle, so concurrent callers in this process
/// are applied one after another instead of overwriting each other.
#[derive(Debug)]
pub struct EnvironmentStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl EnvironmentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the current document without taking the write lock.
    pub async fn load(&self) -> Result<Environment, StoreError> {
        read_environment(&self.path).await
    }

    /// Confirm the file can be opened and report its modification time.
    pub async fn status(&self) -> Result<FileStatus, StoreError> {
        let modified_at = modified_at(&self.path).await?;
        Ok(FileStatus { modified_at })
    }

    /// Run `mutate` against the current document and persist the result.
    ///
    /// If `mutate` fails nothing is written. The reported mtime is that of
    /// this write, never a later writer's.
    pub async fn update<T, F>(&self, mutate: F) -> Result<Updated<T>, StoreError>
    where
        F: FnOnce(&mut Environment) -> Result<T, CoreError>,
    {
        let _guard = self.write_lock.lock().await;

        let mut env = read_environment(&self.path).await?;
        let value = mutate(&mut env).map_err(|e| StoreError::from_core(&self.path, e))?;
        write_environment(&self.path, &env).await?;
        let modified_at = modified_at(&self.path).await?;

        Ok(Updated { value, modified_at })
    }

    /// Write `payload` into the movies route and persist the file.
    pub async fn upsert_movies<P: Serialize + ?Sized>(
        &self,
        payload: &P,
    ) -> Result<UpsertReport, StoreError> {
        let Updated {
            value: outcome,
            modified_at,
        } = self
            .update(|env| upsert::upsert_movies_route(env, payload))
            .await?;

        tracing::info!(
            path = %self.path.display(),
            route_uuid = %outcome.route_uuid,
            created = outcome.created,
            encoding = ?outcome.encoding,
            "Movies route updated",
        );

        Ok(UpsertReport {
            outcome,
            modified_at,
        })
    }

    /// Append `route` to the document and persist the file.
    pub async fn add_route(&self, route: serde_json::Value) -> Result<Route, StoreError> {
        let route = self
            .update(|env| upsert::add_route(env, route).cloned())
            .await?
            .value;

        tracing::info!(
            path = %self.path.display(),
            route_uuid = %route.uuid,
            endpoint = %route.endpoint,
            "Route appended",
        );

        Ok(route)
    }
}
