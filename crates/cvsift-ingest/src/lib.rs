//! The path-to-record pipeline: detect the file kind, run the extraction
//! fallback chain, then normalize, segment, and assemble the final record.
//!
//! The pipeline never fails. A file no backend can read still yields a
//! well-formed record with empty text and the `error` field set, so batch
//! callers can keep going without wrapping every call in recovery logic.

use std::path::Path;
use std::time::Duration;

use cvsift_core::{
    DiagnosticEvent, ExtractionResult, ParserError, RawDocument, ResumeExtraction, ResumeParser,
};
use cvsift_extract::{DEFAULT_TOOL_TIMEOUT, FallbackChain, detect_file_kind};
use cvsift_parsing::{ParseConfig, ResumeTextParser};

/// Message recorded in the record's `error` field when extraction
/// produced no text.
pub const EXTRACTION_FAILED: &str = "could not extract text from file";

/// One-file-in, one-record-out ingestion pipeline.
pub struct ResumePipeline {
    parser: ResumeTextParser,
    tool_timeout: Duration,
}

impl Default for ResumePipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl ResumePipeline {
    /// Create a pipeline with default parsing heuristics and the
    /// standard external-tool timeout.
    pub fn new() -> Self {
        Self {
            parser: ResumeTextParser::new(),
            tool_timeout: DEFAULT_TOOL_TIMEOUT,
        }
    }

    /// Replace the parsing configuration (thresholds, keywords, contact
    /// patterns).
    pub fn with_config(mut self, config: ParseConfig) -> Self {
        self.parser = ResumeTextParser::with_config(config);
        self
    }

    /// Replace the timeout applied to each external conversion tool.
    pub fn with_tool_timeout(mut self, timeout: Duration) -> Self {
        self.tool_timeout = timeout;
        self
    }

    /// Process one file into a resume record.
    ///
    /// Diagnostic events stream to `sink` as the fallback chain runs;
    /// pass a no-op closure to discard them.
    pub fn run(&self, path: &Path, sink: &mut dyn FnMut(DiagnosticEvent)) -> ResumeExtraction {
        let document = RawDocument::new(path, detect_file_kind(path));
        tracing::debug!(
            path = %document.path.display(),
            kind = ?document.kind,
            "ingesting file"
        );

        let chain = FallbackChain::for_kind(document.kind, self.tool_timeout);
        let extraction = chain.run(&document.path, sink);
        tracing::debug!(backend = %extraction.backend, "extraction finished");

        self.assemble(extraction)
    }

    /// Build the final record from a chain result.
    fn assemble(&self, extraction: ExtractionResult) -> ResumeExtraction {
        let normalized = self.parser.normalize(&extraction.text).join("\n");
        let contacts = self.parser.extract_contacts(&normalized);
        let sections = self.parser.split_sections(&normalized);
        let error = extraction
            .is_empty()
            .then(|| EXTRACTION_FAILED.to_string());

        ResumeExtraction {
            raw_text: extraction.text,
            email: contacts.email.unwrap_or_default(),
            phone: contacts.phone.unwrap_or_default(),
            sections,
            error,
        }
    }
}

impl ResumeParser for ResumePipeline {
    fn parse(&self, path: &Path) -> Result<ResumeExtraction, ParserError> {
        Ok(self.run(path, &mut |_| {}))
    }
}
