use fulfill_domain::validation::{ValidationFailure, ValidationResult};
use regex::Regex;
use std::sync::LazyLock;

const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"));

/// Checks an email address.
///
/// Blank input (after trimming) is [`ValidationFailure::Empty`]. The format check runs on the
/// value as given, so surrounding whitespace is a format failure.
#[must_use]
pub fn validate_email(value: &str) -> ValidationResult {
    if value.trim().is_empty() {
        return ValidationResult::invalid(ValidationFailure::Empty, "Email address is required");
    }

    if !EMAIL_REGEX.is_match(value) {
        return ValidationResult::invalid(
            ValidationFailure::Format,
            "Please enter a valid email address",
        );
    }

    ValidationResult::valid("Email address is valid")
}

/// Looser check of the part after `@`: present, no empty labels at the edges or in the middle,
/// and only `[A-Za-z0-9.-]`.
#[must_use]
pub fn validate_email_domain(value: &str) -> ValidationResult {
    if value.is_empty() {
        return ValidationResult::invalid(ValidationFailure::Empty, "Email is required");
    }

    let Some(domain) = value.split('@').nth(1).filter(|domain| !domain.is_empty()) else {
        return ValidationResult::invalid(ValidationFailure::Format, "Invalid email format");
    };

    if domain.contains("..") || domain.starts_with('.') || domain.ends_with('.') {
        return ValidationResult::invalid(ValidationFailure::Format, "Invalid domain format");
    }

    if !domain.chars().all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-') {
        return ValidationResult::invalid(
            ValidationFailure::Charset,
            "Domain contains invalid characters",
        );
    }

    ValidationResult::valid("Domain is valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_address() {
        assert!(validate_email("a@b.com").is_valid());
        assert!(validate_email("first.last+tag@sub.example.co").is_valid());
    }

    #[test]
    fn blank_is_required() {
        for value in ["", "   ", "\t"] {
            let result = validate_email(value);
            assert_eq!(result.failure(), Some(ValidationFailure::Empty));
            assert!(result.message().contains("required"));
        }
    }

    #[test]
    fn rejects_malformed_addresses() {
        for value in ["a@b", "a@b.c", "@b.com", "a b@c.com", " a@b.com", "a@b.c0m"] {
            assert_eq!(validate_email(value).failure(), Some(ValidationFailure::Format), "{value}");
        }
    }

    #[test]
    fn domain_checks_run_in_order() {
        assert_eq!(validate_email_domain("").failure(), Some(ValidationFailure::Empty));
        assert_eq!(validate_email_domain("user").message(), "Invalid email format");
        assert_eq!(validate_email_domain("user@").message(), "Invalid email format");
        assert_eq!(validate_email_domain("user@a..b").message(), "Invalid domain format");
        assert_eq!(validate_email_domain("user@.ab").message(), "Invalid domain format");
        assert_eq!(validate_email_domain("user@ab_c.io").failure(), Some(ValidationFailure::Charset));
        assert!(validate_email_domain("user@acme-corp.io").is_valid());
    }
}
