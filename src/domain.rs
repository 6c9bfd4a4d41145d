use regex::Regex;
use std::sync::LazyLock;

// Lowercase only: "Host@Net.COM" is rejected.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9._%+\-]+@[a-z0-9.\-]+\.[a-z]{2,4}$")
        .expect("email pattern is a valid regex")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Returns everything after the first `@`, or `None` if there is no `@`.
pub fn extract_domain(email: &str) -> Option<&str> {
    email.split_once('@').map(|(_, domain)| domain)
}
