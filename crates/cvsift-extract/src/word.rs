use std::fs;
use std::path::Path;

use docx_rs::{DocumentChild, ParagraphChild, RunChild};

use cvsift_core::{BackendError, TextBackend};

/// Document-model DOCX extraction via `docx-rs`.
///
/// Walks every top-level paragraph and concatenates its text runs, one
/// line per paragraph. Legacy binary `.doc` files are not a zip container
/// and fail to open here; the chain then falls through to the external
/// word-processor tools.
#[derive(Debug, Default)]
pub struct DocxBackend;

impl TextBackend for DocxBackend {
    fn name(&self) -> &'static str {
        "docx"
    }

    fn extract(&self, path: &Path) -> Result<String, BackendError> {
        let bytes = fs::read(path)?;
        let docx =
            docx_rs::read_docx(&bytes).map_err(|e| BackendError::Open(e.to_string()))?;

        let mut paragraphs = Vec::new();
        for child in &docx.document.children {
            if let DocumentChild::Paragraph(paragraph) = child {
                let mut line = String::new();
                for para_child in &paragraph.children {
                    if let ParagraphChild::Run(run) = para_child {
                        for run_child in &run.children {
                            if let RunChild::Text(text) = run_child {
                                line.push_str(&text.text);
                            }
                        }
                    }
                }
                paragraphs.push(line);
            }
        }
        Ok(paragraphs.join("\n"))
    }
}
