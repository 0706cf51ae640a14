/// Split extracted text into trimmed lines.
///
/// Blank lines are kept: they separate paragraphs inside a section but
/// never start one. Order and content case are untouched; lowercasing for
/// header detection happens transiently in the segmenter.
pub fn normalize_lines(text: &str) -> Vec<String> {
    text.lines().map(|line| line.trim().to_string()).collect()
}
