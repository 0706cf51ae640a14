use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::ResumeExtraction;

/// Error from the downstream HTML-to-document renderer.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("renderer failed: {0}")]
    Failed(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Boundary to the external document renderer: a finished HTML string
/// goes in, the path of the rendered artifact comes out. Implementations
/// live outside this workspace.
pub trait HtmlRenderer {
    fn render(&self, html: &str, dest: &Path) -> Result<PathBuf, RenderError>;
}

/// Error from a whole-pipeline resume parser.
#[derive(Error, Debug)]
pub enum ParserError {
    #[error("parse failed: {0}")]
    Failed(String),
}

/// Anything that can turn a resume file into a [`ResumeExtraction`].
///
/// The built-in pipeline implements this; an NLP-based service can be
/// dropped in behind the same signature without touching callers.
pub trait ResumeParser {
    fn parse(&self, path: &Path) -> Result<ResumeExtraction, ParserError>;
}
