//! Persistence for the mock-server environment file.
//!
//! The environment file is the only shared state in the workspace. This crate
//! owns reading it (with schema validation), writing it back in full with an
//! fsync, and serializing read-modify-write cycles through [`EnvironmentStore`].

pub mod error;
pub mod file;
pub mod store;

pub use error::StoreError;
pub use file::{modified_at, read_environment, write_environment};
pub use store::{EnvironmentStore, FileStatus, Updated, UpsertReport};

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
