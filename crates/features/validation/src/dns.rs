use fulfill_domain::validation::{ValidationFailure, ValidationResult};

/// Names the backend refuses to provision, compared case-insensitively.
pub const RESERVED_NAMES: [&str; 11] = [
    "admin",
    "api",
    "www",
    "mail",
    "ftp",
    "test",
    "staging",
    "prod",
    "production",
    "dev",
    "development",
];

const MIN_LEN: usize = 3;
const MAX_LEN: usize = 50;

/// Checks a portal DNS name.
///
/// Rules apply to the trimmed value in a fixed order and stop at the first failure:
/// empty, length (3..=50 chars), alphanumeric first and last char, `[a-z0-9-]` only,
/// no `--`, not reserved.
#[must_use]
pub fn validate_dns_name(value: &str) -> ValidationResult {
    let name = value.trim();

    if name.is_empty() {
        return ValidationResult::invalid(ValidationFailure::Empty, "Portal name is required");
    }

    let len = name.chars().count();
    if !(MIN_LEN..=MAX_LEN).contains(&len) {
        return ValidationResult::invalid(
            ValidationFailure::Length,
            "Portal name must be 3-50 characters",
        );
    }

    let alphanumeric = |c: Option<char>| c.is_some_and(|c| c.is_ascii_alphanumeric());
    if !alphanumeric(name.chars().next()) || !alphanumeric(name.chars().last()) {
        return ValidationResult::invalid(
            ValidationFailure::Boundary,
            "Portal name must start and end with a letter or number",
        );
    }

    if !name.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-') {
        return ValidationResult::invalid(
            ValidationFailure::Charset,
            "Portal name can only contain lowercase letters, numbers, and hyphens",
        );
    }

    if name.contains("--") {
        return ValidationResult::invalid(
            ValidationFailure::RepeatedHyphen,
            "Portal name cannot contain consecutive hyphens",
        );
    }

    if RESERVED_NAMES.iter().any(|reserved| reserved.eq_ignore_ascii_case(name)) {
        return ValidationResult::invalid(
            ValidationFailure::Reserved,
            format!("'{name}' is a reserved name, please choose another"),
        );
    }

    ValidationResult::valid("Portal name is valid")
}
