//! Email shape validation

use once_cell::sync::Lazy;
use regex::Regex;

/// RFC-lite email shape: local part, exactly one '@', domain with at least
/// one dot and a 2+ character alphabetic TLD.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$").unwrap()
});

/// Validates basic email format
///
/// Checks for:
/// - Content before and after a single '@' symbol
/// - At least one '.' in the domain part
/// - TLD of at least 2 characters
/// - No consecutive dots anywhere in the address
pub fn is_valid_email(email: &str) -> bool {
    if email.contains("..") {
        return false;
    }

    EMAIL_RE.is_match(email)
}
