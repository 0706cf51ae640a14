use regex::Regex;

use crate::section::DEFAULT_SECTION_KEYWORDS;

/// Controls how a list of values is overridden from its defaults.
#[derive(Debug, Clone, Default)]
pub enum ListOverride<T> {
    /// Use the built-in defaults.
    #[default]
    Default,
    /// Completely replace the defaults with these values.
    Replace(Vec<T>),
    /// Append these values to the defaults.
    Extend(Vec<T>),
}

impl<T: Clone> ListOverride<T> {
    /// Resolve this override against the given defaults.
    pub fn resolve(&self, defaults: &[T]) -> Vec<T> {
        match self {
            ListOverride::Default => defaults.to_vec(),
            ListOverride::Replace(v) => v.clone(),
            ListOverride::Extend(v) => {
                let mut result = defaults.to_vec();
                result.extend(v.iter().cloned());
                result
            }
        }
    }
}

/// Configuration for the resume text parsing stages.
///
/// The regex fields are `Option<Regex>`, where `None` means "use the
/// built-in default". Use [`ParseConfigBuilder`] to construct with string
/// patterns.
#[derive(Debug, Clone)]
pub struct ParseConfig {
    // ── section.rs ──
    /// A line qualifies as a section header only below this many characters.
    pub(crate) header_max_len: usize,
    /// Keywords that mark a short line as a section header.
    pub(crate) section_keywords: ListOverride<String>,

    // ── contact.rs ──
    /// Override for the email pattern.
    pub(crate) email_re: Option<Regex>,
    /// Override for the phone pattern.
    pub(crate) phone_re: Option<Regex>,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            header_max_len: 60,
            section_keywords: ListOverride::Default,
            email_re: None,
            phone_re: None,
        }
    }
}

impl ParseConfig {
    /// Get the header length threshold.
    pub fn header_max_len(&self) -> usize {
        self.header_max_len
    }

    /// The effective keyword list, lowercased for matching.
    pub(crate) fn section_keywords(&self) -> Vec<String> {
        let defaults: Vec<String> = DEFAULT_SECTION_KEYWORDS
            .iter()
            .map(|k| k.to_string())
            .collect();
        self.section_keywords
            .resolve(&defaults)
            .into_iter()
            .map(|k| k.to_lowercase())
            .collect()
    }
}

/// Builder for [`ParseConfig`].
///
/// Accepts string patterns that are compiled to `Regex` in [`build()`](Self::build).
/// Fails fast with `regex::Error` if a pattern is invalid.
#[derive(Debug, Clone, Default)]
pub struct ParseConfigBuilder {
    header_max_len: Option<usize>,
    section_keywords: ListOverride<String>,
    email_pattern: Option<String>,
    phone_pattern: Option<String>,
}

impl ParseConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the header length threshold (characters, not bytes).
    pub fn header_max_len(mut self, n: usize) -> Self {
        self.header_max_len = Some(n);
        self
    }

    /// Replace the built-in section keywords.
    pub fn set_section_keywords(mut self, keywords: Vec<String>) -> Self {
        self.section_keywords = ListOverride::Replace(keywords);
        self
    }

    /// Add a section keyword on top of the defaults.
    pub fn add_section_keyword(mut self, keyword: String) -> Self {
        match &mut self.section_keywords {
            ListOverride::Extend(v) => v.push(keyword),
            _ => self.section_keywords = ListOverride::Extend(vec![keyword]),
        }
        self
    }

    pub fn email_pattern(mut self, pattern: &str) -> Self {
        self.email_pattern = Some(pattern.to_string());
        self
    }

    pub fn phone_pattern(mut self, pattern: &str) -> Self {
        self.phone_pattern = Some(pattern.to_string());
        self
    }

    /// Compile the string patterns and produce a [`ParseConfig`].
    pub fn build(self) -> Result<ParseConfig, regex::Error> {
        let compile = |opt: Option<String>| -> Result<Option<Regex>, regex::Error> {
            opt.map(|p| Regex::new(&p)).transpose()
        };

        Ok(ParseConfig {
            header_max_len: self.header_max_len.unwrap_or(60),
            section_keywords: self.section_keywords,
            email_re: compile(self.email_pattern)?,
            phone_re: compile(self.phone_pattern)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ParseConfig::default();
        assert_eq!(config.header_max_len, 60);
        assert!(config.email_re.is_none());
        assert!(config.phone_re.is_none());
        assert_eq!(config.section_keywords().len(), 8);
    }

    #[test]
    fn test_builder_basic() {
        let config = ParseConfigBuilder::new()
            .header_max_len(40)
            .build()
            .unwrap();
        assert_eq!(config.header_max_len, 40);
    }

    #[test]
    fn test_builder_custom_patterns() {
        let config = ParseConfigBuilder::new()
            .email_pattern(r"\S+@\S+")
            .phone_pattern(r"\d{10}")
            .build()
            .unwrap();
        assert!(config.email_re.is_some());
        assert!(config.phone_re.is_some());
    }

    #[test]
    fn test_builder_invalid_pattern() {
        let result = ParseConfigBuilder::new().email_pattern(r"[invalid").build();
        assert!(result.is_err());
    }

    #[test]
    fn test_keywords_replace() {
        let config = ParseConfigBuilder::new()
            .set_section_keywords(vec!["publications".to_string()])
            .build()
            .unwrap();
        assert_eq!(config.section_keywords(), vec!["publications".to_string()]);
    }

    #[test]
    fn test_keywords_extend_lowercases() {
        let config = ParseConfigBuilder::new()
            .add_section_keyword("Certifications".to_string())
            .build()
            .unwrap();
        let keywords = config.section_keywords();
        assert_eq!(keywords.len(), 9);
        assert!(keywords.contains(&"certifications".to_string()));
        assert!(keywords.contains(&"experience".to_string()));
    }

    #[test]
    fn test_list_override_resolve() {
        let defaults = vec!["a".to_string(), "b".to_string()];

        let d: ListOverride<String> = ListOverride::Default;
        assert_eq!(d.resolve(&defaults), defaults);

        let r: ListOverride<String> = ListOverride::Replace(vec!["x".to_string()]);
        assert_eq!(r.resolve(&defaults), vec!["x".to_string()]);

        let e: ListOverride<String> = ListOverride::Extend(vec!["c".to_string()]);
        assert_eq!(
            e.resolve(&defaults),
            vec!["a".to_string(), "b".to_string(), "c".to_string()]
        );
    }
}
