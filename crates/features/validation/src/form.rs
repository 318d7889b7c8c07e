use crate::dns::validate_dns_name;
use crate::email::validate_email;
use fulfill_domain::validation::{ValidationFailure, ValidationResult};

/// Validates the provisioning form: email first, then the portal name.
///
/// The first failing field's result is returned unchanged, so an invalid email always wins
/// over an invalid DNS name.
#[must_use]
pub fn validate_form(email: &str, dns_name: &str) -> ValidationResult {
    let email = validate_email(email);
    if !email.is_valid() {
        return email;
    }

    let dns = validate_dns_name(dns_name);
    if !dns.is_valid() {
        return dns;
    }

    ValidationResult::valid("Form validation passed")
}

/// Everything a provisioning request carries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProvisioningParams<'a> {
    pub dns_name: Option<&'a str>,
    pub email: Option<&'a str>,
    pub customer_id: Option<&'a str>,
    pub product_code: Option<&'a str>,
    pub aws_token: Option<&'a str>,
}

impl ProvisioningParams<'_> {
    /// Messages for each absent or empty field, in request order.
    #[must_use]
    pub fn missing(&self) -> Vec<&'static str> {
        let present = |value: Option<&str>| value.is_some_and(|v| !v.is_empty());
        [
            (self.dns_name, "DNS name is required"),
            (self.email, "Customer email is required"),
            (self.customer_id, "Customer ID is required"),
            (self.product_code, "Product code is required"),
            (self.aws_token, "AWS marketplace token is required"),
        ]
        .into_iter()
        .filter(|(value, _)| !present(*value))
        .map(|(_, message)| message)
        .collect()
    }
}

/// Checks that nothing the backend needs is missing.
#[must_use]
pub fn validate_provisioning_params(params: &ProvisioningParams<'_>) -> ValidationResult {
    let missing = params.missing();
    if missing.is_empty() {
        return ValidationResult::valid("Provisioning parameters are complete");
    }
    ValidationResult::invalid(ValidationFailure::MissingParameters, missing.join(", "))
}
