use once_cell::sync::Lazy;
use regex::Regex;

use cvsift_core::ContactFields;

use crate::config::ParseConfig;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap());

// Optional leading +, then digits with dash/space/paren separators, at
// least 9 characters end to end, bounded by digits.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\+?\d[\d\-\s()]{7,}\d").unwrap());

/// Find the first email and phone match over the full normalized text.
///
/// Matching ignores section boundaries. A missing match leaves the field
/// as `None`; this never fails.
pub fn extract_contacts_with_config(text: &str, config: &ParseConfig) -> ContactFields {
    let email_re = config.email_re.as_ref().unwrap_or(&EMAIL_RE);
    let phone_re = config.phone_re.as_ref().unwrap_or(&PHONE_RE);

    ContactFields {
        email: email_re.find(text).map(|m| m.as_str().to_string()),
        phone: phone_re.find(text).map(|m| m.as_str().to_string()),
    }
}
