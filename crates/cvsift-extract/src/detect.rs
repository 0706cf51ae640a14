use std::path::Path;

use cvsift_core::FileKind;

/// Infer the document format from the file extension.
///
/// Everything that is not `.pdf`, `.doc`, or `.docx` is treated as plain
/// text; the plain-text backend copes with whatever bytes it finds.
pub fn detect_file_kind(path: &Path) -> FileKind {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "pdf" => FileKind::Pdf,
        "doc" | "docx" => FileKind::WordDoc,
        _ => FileKind::PlainText,
    }
}
