use std::path::PathBuf;

use reelmock_core::error::CoreError;

/// Errors from loading, mutating or persisting the environment file.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The file could not be opened, read, written or synced.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file content is not a valid environment document.
    #[error("Malformed environment file {}: {reason}", path.display())]
    Malformed { path: PathBuf, reason: String },

    /// A mutation refused its input; the file was left untouched.
    #[error("Rejected update: {0}")]
    Rejected(String),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io { path, source }
    }

    /// Attach `path` to a domain error raised while handling that file.
    pub(crate) fn from_core(path: impl Into<PathBuf>, err: CoreError) -> Self {
        match err {
            CoreError::MalformedDocument(reason) => Self::Malformed {
                path: path.into(),
                reason,
            },
            CoreError::Validation(msg) => Self::Rejected(msg),
        }
    }
}
