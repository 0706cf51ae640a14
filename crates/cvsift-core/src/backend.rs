use std::path::Path;

use thiserror::Error;

/// Error raised by a single extraction backend.
///
/// The fallback chain handles every variant the same way: record it and
/// move on to the next backend. A missing library or tool is reported
/// through [`BackendError::Unavailable`] rather than panicking, so an
/// incomplete environment degrades instead of crashing.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("backend unavailable: {0}")]
    Unavailable(String),
    #[error("failed to open document: {0}")]
    Open(String),
    #[error("failed to extract text: {0}")]
    Extraction(String),
    #[error("external tool failed: {0}")]
    Tool(String),
    #[error("external tool timed out after {0}s")]
    Timeout(u64),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// One concrete technique for turning a document into plain text.
///
/// Implementations convert every internal fault into [`BackendError`];
/// nothing unwinds across this boundary, and any opened file or spawned
/// process is released before returning, success or not.
pub trait TextBackend: Send + Sync {
    /// Stable identifier used in diagnostics and the final record.
    fn name(&self) -> &'static str;

    /// Whether the underlying library or tool is present in this
    /// environment. Advisory only: the chain invokes backends whose probe
    /// returned false and lets `extract` report the actual failure.
    fn probe(&self) -> bool {
        true
    }

    /// Extract the full text content of the document at `path`.
    fn extract(&self, path: &Path) -> Result<String, BackendError>;
}
