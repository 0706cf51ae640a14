pub mod chain;
pub mod detect;
pub mod pdf;
pub mod plain;
pub mod tool;
pub mod word;

pub use chain::FallbackChain;
pub use detect::detect_file_kind;
pub use pdf::{LopdfBackend, PdfExtractBackend};
pub use plain::PlainTextBackend;
pub use tool::{DEFAULT_TOOL_TIMEOUT, ToolBackend, find_in_path};
pub use word::DocxBackend;
// Re-export the backend contract from core (canonical definitions live there)
pub use cvsift_core::{BackendError, TextBackend};
