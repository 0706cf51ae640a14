use std::panic;
use std::path::Path;

use cvsift_core::{BackendError, TextBackend};

/// Library-based PDF extraction via `pdf_extract`.
///
/// The decoder can panic on malformed font streams, so the call runs
/// behind `catch_unwind` and a panic surfaces as an ordinary extraction
/// failure for the chain to skip past.
#[derive(Debug, Default)]
pub struct PdfExtractBackend;

impl TextBackend for PdfExtractBackend {
    fn name(&self) -> &'static str {
        "pdf-extract"
    }

    fn extract(&self, path: &Path) -> Result<String, BackendError> {
        let owned = path.to_path_buf();
        let result = panic::catch_unwind(panic::AssertUnwindSafe(|| {
            pdf_extract::extract_text(&owned)
        }));

        match result {
            Ok(Ok(text)) => Ok(text),
            Ok(Err(e)) => Err(BackendError::Extraction(e.to_string())),
            Err(_) => Err(BackendError::Extraction(
                "text decoder panicked".to_string(),
            )),
        }
    }
}

/// Page-by-page extraction via `lopdf`.
///
/// A second, independent PDF implementation: its content-stream handling
/// differs enough from `pdf_extract` that one regularly succeeds where
/// the other fails. Pages that cannot be decoded are skipped; an empty
/// total is reported as an empty result, not an error.
#[derive(Debug, Default)]
pub struct LopdfBackend;

impl TextBackend for LopdfBackend {
    fn name(&self) -> &'static str {
        "lopdf"
    }

    fn extract(&self, path: &Path) -> Result<String, BackendError> {
        let doc = lopdf::Document::load(path).map_err(|e| BackendError::Open(e.to_string()))?;

        let mut pages_text = Vec::new();
        for (page_num, _) in doc.get_pages() {
            match doc.extract_text(&[page_num]) {
                Ok(text) => pages_text.push(text),
                Err(e) => {
                    tracing::debug!(page = page_num, error = %e, "page extraction failed");
                }
            }
        }
        Ok(pages_text.join("\n"))
    }
}
