use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub mod backend;
pub mod render;

pub use backend::{BackendError, TextBackend};
pub use render::{HtmlRenderer, ParserError, RenderError, ResumeParser};

/// Backend identifier reported when no backend produced any text.
pub const NO_BACKEND: &str = "none";

/// Detected input format, inferred from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    PlainText,
    Pdf,
    /// Both modern `.docx` and legacy binary `.doc`.
    WordDoc,
}

/// An input file queued for extraction. Built once per invocation.
#[derive(Debug, Clone)]
pub struct RawDocument {
    pub path: PathBuf,
    pub kind: FileKind,
}

impl RawDocument {
    pub fn new(path: impl Into<PathBuf>, kind: FileKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }
}

/// Outcome of a single backend invocation.
#[derive(Debug, Clone)]
pub enum AttemptOutcome {
    /// The backend produced text that is non-blank after trimming.
    Success(String),
    /// The backend ran but produced only blank text.
    Empty,
    /// The backend reported a failure.
    Failed(String),
}

/// One backend invocation and its outcome. Kept only for diagnostics.
#[derive(Debug, Clone)]
pub struct ExtractionAttempt {
    pub backend: String,
    pub outcome: AttemptOutcome,
}

/// Final outcome of the fallback chain for one document.
///
/// `text` is empty exactly when every backend failed or came up empty;
/// it is never assembled from more than one backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionResult {
    pub text: String,
    /// Name of the backend that produced `text`, or [`NO_BACKEND`].
    pub backend: String,
}

impl ExtractionResult {
    /// The unanimous-failure result: empty text, backend "none".
    pub fn none() -> Self {
        Self {
            text: String::new(),
            backend: NO_BACKEND.to_string(),
        }
    }

    /// Whether the extracted text is blank after trimming.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Section key to accumulated section text, in first-use order.
pub type SectionMap = IndexMap<String, String>;

/// Contact fields matched over the full normalized text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// The one record produced per invocation.
///
/// `email` and `phone` serialize as empty strings when absent; `error` is
/// omitted entirely unless extraction produced no text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeExtraction {
    pub raw_text: String,
    pub email: String,
    pub phone: String,
    pub sections: SectionMap,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
}

/// Diagnostic events emitted while the fallback chain runs.
///
/// Delivered through a caller-supplied sink; library code never prints
/// and holds no global diagnostic state.
#[derive(Debug, Clone)]
pub enum DiagnosticEvent {
    /// A backend is about to run. `available` is its probe result; the
    /// chain runs the backend either way.
    BackendStarted { backend: String, available: bool },
    /// A backend finished with the given outcome.
    BackendFinished(ExtractionAttempt),
    /// Every backend failed or produced blank text.
    ChainExhausted { attempts: usize },
}
