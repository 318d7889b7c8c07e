use super::{exit_code, print_json};
use crate::models::args::ValidateTarget;
use anyhow::Result;
use fulfill::domain::config::FulfillmentConfig;
use fulfill::features::flow::{FulfillmentApi, HttpApi};
use fulfill::features::validation::{
    preview_url_for, validate_dns_name, validate_email, validate_email_domain, validate_form,
};
use serde_json::json;
use std::process::ExitCode;

/// Checks the configured endpoint with `OPTIONS`.
///
/// # Errors
/// Returns an error if the client cannot be built or the output cannot be written.
pub async fn health(config: &FulfillmentConfig) -> Result<ExitCode> {
    let api = HttpApi::new(&config.api)?;
    let report = api.health().await;
    print_json(&report)?;
    Ok(exit_code(report.is_healthy))
}

/// Runs the validators offline. Exits non-zero when the input is rejected.
///
/// # Errors
/// Returns an error if the output cannot be written.
pub fn validate(target: &ValidateTarget) -> Result<ExitCode> {
    let result = match target {
        ValidateTarget::Email { value } => {
            let value = value.trim();
            let format = validate_email(value);
            if !format.is_valid() {
                print_json(&format)?;
                return Ok(ExitCode::FAILURE);
            }
            validate_email_domain(value)
        },
        ValidateTarget::Dns { value } => validate_dns_name(value.trim()),
        ValidateTarget::Form { form } => validate_form(form.email.trim(), form.dns_name.trim()),
    };
    print_json(&result)?;
    Ok(exit_code(result.is_valid()))
}

/// Prints the live preview address for `dns_name`.
///
/// # Errors
/// Returns an error if the output cannot be written.
pub fn preview(config: &FulfillmentConfig, dns_name: &str) -> Result<ExitCode> {
    print_json(&json!({ "preview": preview_url_for(dns_name, &config.portal.hosting_domain) }))?;
    Ok(ExitCode::SUCCESS)
}
