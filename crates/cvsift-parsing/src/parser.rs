use cvsift_core::{ContactFields, SectionMap};

use crate::config::ParseConfig;
use crate::{contact, normalize, section};

/// A configurable parser for extracted resume text.
///
/// Holds a [`ParseConfig`] and exposes each stage as a method. The default
/// constructor uses built-in heuristics; use [`ResumeTextParser::with_config`]
/// to supply custom thresholds, keywords, or contact patterns.
pub struct ResumeTextParser {
    config: ParseConfig,
}

impl Default for ResumeTextParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ResumeTextParser {
    /// Create a parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParseConfig::default(),
        }
    }

    /// Create a parser with a custom configuration.
    pub fn with_config(config: ParseConfig) -> Self {
        Self { config }
    }

    /// Get a reference to the current config.
    pub fn config(&self) -> &ParseConfig {
        &self.config
    }

    /// Split raw text into trimmed lines, blank lines included.
    pub fn normalize(&self, text: &str) -> Vec<String> {
        normalize::normalize_lines(text)
    }

    /// Partition text into labeled sections.
    pub fn split_sections(&self, text: &str) -> SectionMap {
        section::split_sections_with_config(text, &self.config)
    }

    /// Find the first email and phone match in the text.
    pub fn extract_contacts(&self, text: &str) -> ContactFields {
        contact::extract_contacts_with_config(text, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stages_share_one_config() {
        let config = crate::ParseConfigBuilder::new()
            .header_max_len(5)
            .email_pattern(r"[a-z]+@test\.dev")
            .build()
            .unwrap();
        let parser = ResumeTextParser::with_config(config);

        // Threshold 5 rejects the ten-character header.
        let sections = parser.split_sections("Experience\nAcme");
        assert!(!sections.contains_key("experience"));

        let contacts = parser.extract_contacts("jane@test.dev jane@other.org");
        assert_eq!(contacts.email.as_deref(), Some("jane@test.dev"));
    }

    #[test]
    fn test_default_parser_full_pass() {
        let parser = ResumeTextParser::new();
        let text = "Jane Doe\njane.doe@example.com\n\nSkills\nRust";

        let lines = parser.normalize(text);
        assert_eq!(lines.len(), 5);

        let sections = parser.split_sections(text);
        assert_eq!(sections.get("skills").map(String::as_str), Some("Rust"));

        let contacts = parser.extract_contacts(text);
        assert_eq!(contacts.email.as_deref(), Some("jane.doe@example.com"));
    }
}
