use std::fs;
use std::path::Path;

use cvsift_core::{BackendError, TextBackend};

/// Direct file read for plain-text resumes.
///
/// Invalid UTF-8 sequences are replaced rather than rejected; resumes
/// saved with odd encodings still yield their readable majority.
#[derive(Debug, Default)]
pub struct PlainTextBackend;

impl TextBackend for PlainTextBackend {
    fn name(&self) -> &'static str {
        "plain-text"
    }

    fn extract(&self, path: &Path) -> Result<String, BackendError> {
        let bytes = fs::read(path)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_reads_utf8_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Jane Doe\nEngineer").unwrap();
        let text = PlainTextBackend.extract(file.path()).unwrap();
        assert_eq!(text, "Jane Doe\nEngineer");
    }

    #[test]
    fn test_invalid_utf8_is_replaced_not_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"caf\xe9 experience").unwrap();
        let text = PlainTextBackend.extract(file.path()).unwrap();
        assert!(text.contains("experience"));
        assert!(text.contains('\u{FFFD}'));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = PlainTextBackend
            .extract(Path::new("/definitely/not/here.txt"))
            .unwrap_err();
        assert!(matches!(err, BackendError::Io(_)));
    }

    #[test]
    fn test_probe_is_always_positive() {
        assert!(PlainTextBackend.probe());
    }
}
