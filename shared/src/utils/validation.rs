//! Input validation utilities

use once_cell::sync::Lazy;
use regex::Regex;

/// Pragmatic email shape check: local part, `@`, domain with a dot.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("email regex must compile")
});

/// Whether the string looks like a deliverable email address
pub fn is_valid_email(email: &str) -> bool {
    !email.is_empty() && email.len() <= 255 && EMAIL_REGEX.is_match(email)
}
