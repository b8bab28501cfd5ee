use regex::Regex;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// Validates an email address against a simple anchored pattern.
///
/// This check is deliberately permissive: one or more local-part characters
/// from `[A-Za-z0-9._%+-]`, an `@`, a domain from `[A-Za-z0-9.-]`, and a
/// dotted alphabetic suffix of at least two letters. No Unicode domains, no
/// quoted local parts, no length constraints.
///
/// # Examples
/// ```
/// use email_list_cleaner::validation::syntax::is_valid_email;
///
/// assert!(is_valid_email("user.name+tag@example.com"));
/// assert!(!is_valid_email("missing-at-sign.com"));
/// ```
///
/// # Arguments
/// * `email` - A string slice containing the email address to validate
///
/// # Returns
/// `true` if the address matches the pattern, `false` otherwise
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}
