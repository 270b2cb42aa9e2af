//! Credential validation - pre-flight email and password rules.
//!
//! Pure domain logic: deterministic, synchronous, no I/O. A failed
//! validation means the authentication service is never invoked.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::ValidationError;

/// Basic `local@domain.tld` shape: exactly one `@` (enforced by the
/// character classes), a non-empty local part, and a domain with at
/// least one `.` followed by a non-empty segment.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s.]+$").expect("email pattern compiles"));

/// Validate login credentials.
///
/// Rules are evaluated in a fixed precedence order; the first match
/// wins. An all-empty attempt therefore reports the email error, and a
/// single-space password is a whitespace error, not an empty one.
pub fn validate(email: &str, password: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::EmptyEmail);
    }
    if !EMAIL_PATTERN.is_match(email) {
        return Err(ValidationError::InvalidEmail);
    }
    if password.is_empty() {
        return Err(ValidationError::EmptyPassword);
    }
    if password.contains(char::is_whitespace) {
        return Err(ValidationError::PasswordWithWhitespace);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_credentials_pass() {
        assert_eq!(validate("test@test.com", "12341234"), Ok(()));
    }

    #[test]
    fn test_empty_email_takes_precedence_over_empty_password() {
        assert_eq!(validate("", ""), Err(ValidationError::EmptyEmail));
    }

    #[test]
    fn test_empty_email_with_valid_password() {
        assert_eq!(validate("", "12341234"), Err(ValidationError::EmptyEmail));
    }

    #[test]
    fn test_malformed_emails_are_invalid() {
        // Shapes: no @, no TLD dot, trailing dot, empty local part,
        // bare word, bare word with dot, single space.
        for email in ["a.com", "a@test", "a@test.", "@test.", "com", "a.", " "] {
            assert_eq!(
                validate(email, "12341234"),
                Err(ValidationError::InvalidEmail),
                "email {email:?} should be invalid"
            );
        }
    }

    #[test]
    fn test_single_space_email_is_invalid_not_empty() {
        assert_eq!(validate(" ", "12341234"), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn test_empty_password_with_valid_email() {
        assert_eq!(
            validate("test@test.com", ""),
            Err(ValidationError::EmptyPassword)
        );
    }

    #[test]
    fn test_whitespace_password_is_distinct_from_empty() {
        assert_eq!(
            validate("test@test.com", " "),
            Err(ValidationError::PasswordWithWhitespace)
        );
        assert_eq!(
            validate("test@test.com", "with space"),
            Err(ValidationError::PasswordWithWhitespace)
        );
    }

    #[test]
    fn test_subdomains_are_valid() {
        assert_eq!(validate("user@mail.example.com", "12341234"), Ok(()));
    }
}
