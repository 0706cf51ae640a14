pub mod config;
pub mod contact;
pub mod normalize;
pub mod parser;
pub mod section;

pub use config::{ListOverride, ParseConfig, ParseConfigBuilder};
pub use contact::extract_contacts_with_config;
pub use normalize::normalize_lines;
pub use parser::ResumeTextParser;
pub use section::split_sections_with_config;
// Re-export domain types from core (canonical definitions live there)
pub use cvsift_core::{ContactFields, SectionMap};
