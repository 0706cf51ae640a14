use indexmap::IndexMap;

use cvsift_core::SectionMap;

use crate::config::ParseConfig;
use crate::normalize::normalize_lines;

/// Keywords whose presence marks a short line as a section header.
pub(crate) const DEFAULT_SECTION_KEYWORDS: &[&str] = &[
    "experience",
    "work experience",
    "professional experience",
    "education",
    "skills",
    "summary",
    "objective",
    "projects",
];

/// Section that collects everything before the first recognized header.
const INITIAL_SECTION: &str = "summary";

/// Partition resume text into labeled sections.
///
/// Single forward pass over the trimmed lines. A line is a header iff it
/// is shorter than the configured threshold and its lowercase form
/// contains a configured keyword; the header switches the active section
/// and is consumed, every other line accrues to the active section.
/// Misclassified headers corrupt everything up to the next header; the
/// pass never backtracks to repair that.
///
/// Sections whose accumulated text is entirely blank are dropped from the
/// returned map. Key order is first-activation order, starting with
/// `summary`.
pub fn split_sections_with_config(text: &str, config: &ParseConfig) -> SectionMap {
    let keywords = config.section_keywords();
    let max_len = config.header_max_len();

    let mut accumulator: IndexMap<String, Vec<String>> = IndexMap::new();
    let mut current = INITIAL_SECTION.to_string();
    accumulator.entry(current.clone()).or_default();

    for line in normalize_lines(text) {
        let lower = line.to_lowercase();
        let is_header = line.chars().count() < max_len
            && keywords.iter().any(|k| lower.contains(k.as_str()));

        if is_header {
            current = resolve_section_key(&lower);
            accumulator.entry(current.clone()).or_default();
            continue;
        }
        accumulator.entry(current.clone()).or_default().push(line);
    }

    let mut sections = SectionMap::new();
    for (key, lines) in accumulator {
        let joined = lines.join("\n");
        let trimmed = joined.trim();
        if !trimmed.is_empty() {
            sections.insert(key, trimmed.to_string());
        }
    }
    sections
}

/// Map a recognized header line to its canonical section key.
///
/// Priority order matters: "Education and Work Experience" resolves to
/// `education`, not `experience`. Lines that match a configured keyword
/// but none of the canonical checks become ad hoc keys verbatim.
fn resolve_section_key(lower: &str) -> String {
    if lower.starts_with("education") {
        "education".to_string()
    } else if lower.contains("experience") {
        "experience".to_string()
    } else if lower.contains("skill") {
        "skills".to_string()
    } else if lower.contains("project") {
        "projects".to_string()
    } else if lower.contains("summary") || lower.contains("objective") {
        "summary".to_string()
    } else {
        lower.to_string()
    }
}
