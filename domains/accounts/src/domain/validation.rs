//! Validation helpers for account credentials

use regex::Regex;
use validator::ValidationError;

lazy_static::lazy_static! {
    /// Dotted domain ending in an alphabetic TLD of at least two letters
    pub static ref EMAIL_DOMAIN_REGEX: Regex = Regex::new(
        r"^([A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?\.)+[A-Za-z]{2,}$"
    )
    .unwrap();
}

/// Require a fully qualified domain after the `@`.
///
/// Runs alongside `validator`'s `email` check, which also accepts
/// single-label domains such as `a@bc`.
pub fn validate_email_domain(email: &str) -> Result<(), ValidationError> {
    let domain = email.rsplit_once('@').map(|(_, domain)| domain);

    match domain {
        Some(domain) if EMAIL_DOMAIN_REGEX.is_match(domain) => Ok(()),
        _ => Err(ValidationError::new("email_domain")),
    }
}
