//! Integration tests for the [`ResumePipeline`].
//!
//! These tests drive the full path-to-record flow against real temp
//! files. Plain-text fixtures exercise the happy path deterministically;
//! the PDF fixture is deliberately unreadable so the test holds whether
//! or not external conversion tools are installed on the host.

use std::io::Write;

use cvsift_core::{AttemptOutcome, DiagnosticEvent, ExtractionAttempt, ResumeParser};
use cvsift_ingest::{EXTRACTION_FAILED, ResumePipeline};
use tempfile::NamedTempFile;

const RESUME_TXT: &str = "\
Jane Doe
jane.doe@example.com
(555) 123-4567

Summary
Systems engineer focused on reliable data plumbing.

Experience
Acme Corp, Senior Engineer, 2019-2024
BigCo, Engineer, 2015-2019

Education
B.S. Computer Science, MIT, 2015

Skills
Rust, Python, SQL
";

/// Write `content` to a temp file with the given suffix.
fn fixture(suffix: &str, content: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(suffix).expect("create temp file");
    file.write_all(content).expect("write fixture");
    file
}

#[test]
fn plain_text_resume_end_to_end() {
    let file = fixture(".txt", RESUME_TXT.as_bytes());
    let pipeline = ResumePipeline::new();
    let record = pipeline.run(file.path(), &mut |_| {});

    assert_eq!(record.raw_text, RESUME_TXT);
    assert_eq!(record.email, "jane.doe@example.com");
    // The leading paren falls outside the phone match.
    assert_eq!(record.phone, "555) 123-4567");
    assert!(record.error.is_none());

    let keys: Vec<&str> = record.sections.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["summary", "experience", "education", "skills"]);
    assert_eq!(
        record.sections.get("experience").map(String::as_str),
        Some("Acme Corp, Senior Engineer, 2019-2024\nBigCo, Engineer, 2015-2019")
    );
    assert_eq!(
        record.sections.get("skills").map(String::as_str),
        Some("Rust, Python, SQL")
    );
}

#[test]
fn success_event_sequence_stops_at_first_backend() {
    let file = fixture(".txt", RESUME_TXT.as_bytes());
    let mut events = Vec::new();
    ResumePipeline::new().run(file.path(), &mut |e| events.push(e));

    assert_eq!(events.len(), 2);
    assert!(matches!(
        &events[0],
        DiagnosticEvent::BackendStarted { available: true, .. }
    ));
    assert!(matches!(
        &events[1],
        DiagnosticEvent::BackendFinished(ExtractionAttempt {
            outcome: AttemptOutcome::Success(_),
            ..
        })
    ));
}

#[test]
fn missing_file_yields_degraded_record() {
    let pipeline = ResumePipeline::new();
    let record = pipeline.run(
        std::path::Path::new("/definitely/not/here/resume.txt"),
        &mut |_| {},
    );

    assert_eq!(record.raw_text, "");
    assert_eq!(record.email, "");
    assert_eq!(record.phone, "");
    assert!(record.sections.is_empty());
    assert_eq!(record.error.as_deref(), Some(EXTRACTION_FAILED));
}

#[test]
fn unreadable_pdf_exhausts_chain_without_crashing() {
    let file = fixture(".pdf", b"this is not a pdf at all");
    let mut events = Vec::new();
    let record = ResumePipeline::new().run(file.path(), &mut |e| events.push(e));

    assert_eq!(record.raw_text, "");
    assert!(record.sections.is_empty());
    assert_eq!(record.error.as_deref(), Some(EXTRACTION_FAILED));

    // No backend may claim success on garbage bytes.
    for event in &events {
        if let DiagnosticEvent::BackendFinished(attempt) = event {
            assert!(
                !matches!(attempt.outcome, AttemptOutcome::Success(_)),
                "backend {} claimed success on garbage input",
                attempt.backend
            );
        }
    }
    assert!(matches!(
        events.last(),
        Some(DiagnosticEvent::ChainExhausted { attempts: 3 })
    ));
}

#[test]
fn no_header_text_all_lands_in_summary() {
    let content = "just a line\nand another line\n";
    let file = fixture(".txt", content.as_bytes());
    let record = ResumePipeline::new().run(file.path(), &mut |_| {});

    assert_eq!(record.sections.len(), 1);
    assert_eq!(
        record.sections.get("summary").map(String::as_str),
        Some("just a line\nand another line")
    );
}

#[test]
fn unknown_extension_treated_as_plain_text() {
    let file = fixture(".resume", RESUME_TXT.as_bytes());
    let record = ResumePipeline::new().run(file.path(), &mut |_| {});
    assert_eq!(record.raw_text, RESUME_TXT);
    assert!(record.error.is_none());
}

#[test]
fn repeated_runs_produce_identical_records() {
    let file = fixture(".txt", RESUME_TXT.as_bytes());
    let pipeline = ResumePipeline::new();
    let first = pipeline.run(file.path(), &mut |_| {});
    let second = pipeline.run(file.path(), &mut |_| {});
    assert_eq!(first, second);
}

#[test]
fn pipeline_works_behind_parser_trait() {
    let file = fixture(".txt", RESUME_TXT.as_bytes());
    let parser: &dyn ResumeParser = &ResumePipeline::new();
    let record = parser.parse(file.path()).expect("pipeline parse is infallible");
    assert_eq!(record.email, "jane.doe@example.com");
}

#[test]
fn record_serializes_to_single_line_json() {
    let file = fixture(".txt", RESUME_TXT.as_bytes());
    let record = ResumePipeline::new().run(file.path(), &mut |_| {});
    let json = serde_json::to_string(&record).expect("serialize record");

    assert!(!json.contains('\n'));
    assert!(json.contains(r#""email":"jane.doe@example.com""#));
    // A successful record carries no error key at all.
    assert!(!json.contains(r#""error""#));
}
