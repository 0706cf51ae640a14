use std::path::Path;
use std::time::Duration;

use cvsift_core::{
    AttemptOutcome, DiagnosticEvent, ExtractionAttempt, ExtractionResult, FileKind, TextBackend,
};

use crate::pdf::{LopdfBackend, PdfExtractBackend};
use crate::plain::PlainTextBackend;
use crate::tool::ToolBackend;
use crate::word::DocxBackend;

/// An ordered list of backends tried until one yields usable text.
///
/// Usable means non-blank after trimming. A failing or empty backend is
/// reported to the diagnostic sink and the chain moves to the next one;
/// nothing propagates to the caller as an error. The first success wins
/// unconditionally, so results are never blended across backends.
pub struct FallbackChain {
    backends: Vec<Box<dyn TextBackend>>,
}

impl FallbackChain {
    pub fn new(backends: Vec<Box<dyn TextBackend>>) -> Self {
        Self { backends }
    }

    /// The standard chain for a detected file kind, best fidelity first.
    ///
    /// PDF goes from structured library parsers to the external
    /// `pdftotext` as last resort; word-processor files go from the
    /// document-model reader to progressively cruder converters that
    /// still handle legacy binary `.doc`.
    pub fn for_kind(kind: FileKind, tool_timeout: Duration) -> Self {
        let backends: Vec<Box<dyn TextBackend>> = match kind {
            FileKind::PlainText => vec![Box::new(PlainTextBackend)],
            FileKind::Pdf => vec![
                Box::new(PdfExtractBackend),
                Box::new(LopdfBackend),
                Box::new(ToolBackend::pdftotext().with_timeout(tool_timeout)),
            ],
            FileKind::WordDoc => vec![
                Box::new(DocxBackend),
                Box::new(ToolBackend::pandoc().with_timeout(tool_timeout)),
                Box::new(ToolBackend::antiword().with_timeout(tool_timeout)),
                Box::new(ToolBackend::catdoc().with_timeout(tool_timeout)),
            ],
        };
        Self::new(backends)
    }

    /// Backend names in invocation order.
    pub fn backend_names(&self) -> Vec<&'static str> {
        self.backends.iter().map(|b| b.name()).collect()
    }

    /// Run the chain against one document.
    ///
    /// Always returns a result: when every backend fails or comes up
    /// empty, the result carries empty text and the backend id "none".
    pub fn run(&self, path: &Path, sink: &mut dyn FnMut(DiagnosticEvent)) -> ExtractionResult {
        let mut attempts = 0;

        for backend in &self.backends {
            let name = backend.name();
            sink(DiagnosticEvent::BackendStarted {
                backend: name.to_string(),
                available: backend.probe(),
            });

            let attempt = match backend.extract(path) {
                Ok(text) if !text.trim().is_empty() => ExtractionAttempt {
                    backend: name.to_string(),
                    outcome: AttemptOutcome::Success(text),
                },
                Ok(_) => ExtractionAttempt {
                    backend: name.to_string(),
                    outcome: AttemptOutcome::Empty,
                },
                Err(err) => {
                    tracing::debug!(backend = name, error = %err, "backend failed");
                    ExtractionAttempt {
                        backend: name.to_string(),
                        outcome: AttemptOutcome::Failed(err.to_string()),
                    }
                }
            };
            sink(DiagnosticEvent::BackendFinished(attempt.clone()));

            if let AttemptOutcome::Success(text) = attempt.outcome {
                tracing::debug!(backend = name, "extraction succeeded");
                return ExtractionResult {
                    text,
                    backend: name.to_string(),
                };
            }
            attempts += 1;
        }

        sink(DiagnosticEvent::ChainExhausted { attempts });
        tracing::warn!(attempts, "no backend produced text");
        ExtractionResult::none()
    }
}
