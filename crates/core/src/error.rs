/// Errors raised by the pure domain layer.
///
/// Nothing in `reelmock_core` performs I/O, so these only describe shape
/// problems with data handed in by callers.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The environment document does not match the expected schema.
    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    #[error("Validation failed: {0}")]
    Validation(String),
}
