use super::{exit_code, print_json};
use crate::console::ConsoleView;
use crate::models::args::FormArgs;
use anyhow::{Context, Result};
use fulfill::domain::config::FulfillmentConfig;
use fulfill::domain::section::Section;
use fulfill::features::flow::{FulfillmentPage, HttpApi, SubmitOutcome};
use serde_json::{Value, json};
use std::process::ExitCode;
use tracing::info;
use url::Url;

fn open(config: FulfillmentConfig, url: Url) -> Result<FulfillmentPage<HttpApi>> {
    fulfill::open_page(config, url).context("Failed to prepare the fulfillment page")
}

/// Section JSON, with the support contact attached where the page shows it.
fn section_json(page: &FulfillmentPage<HttpApi>, section: &Section) -> Result<Value> {
    let mut value = serde_json::to_value(section)?;
    if matches!(section, Section::Error(_) | Section::NoSubscription) {
        value["support"] = json!({
            "email": page.config().support.email,
            "marketplaceUrl": page.config().support.marketplace_url,
        });
    }
    value["display"] = json!(section.display().as_ref());
    Ok(value)
}

/// Prints the selected section. Fails only when the URL cannot be handled at all.
///
/// # Errors
/// Returns an error if the client cannot be built or the output cannot be written.
pub async fn inspect(config: FulfillmentConfig, url: Url) -> Result<ExitCode> {
    let page = open(config, url)?;
    let section = page.initialize().await;
    print_json(&section_json(&page, section)?)?;
    Ok(ExitCode::SUCCESS)
}

/// Selects the section and, when it hosts the form, submits it once.
///
/// # Errors
/// Returns an error if the client cannot be built or the output cannot be written.
pub async fn submit(config: FulfillmentConfig, url: Url, form: FormArgs) -> Result<ExitCode> {
    let page = open(config, url)?;
    let section = page.initialize().await;
    let mut view = ConsoleView::default();

    let outcome = page.submit(&mut view, &form.email, &form.dns_name).await;
    let (ok, report) = match &outcome {
        SubmitOutcome::Provisioned { redirect, portal_url } => {
            info!(redirect = %redirect, "Follow the redirect to finish");
            let report = json!({
                "outcome": "provisioned",
                "redirect": redirect.as_str(),
                "portalUrl": portal_url,
            });
            (true, report)
        },
        SubmitOutcome::Invalid(validation) => {
            (false, json!({ "outcome": "invalid", "validation": validation }))
        },
        SubmitOutcome::Failed(failure) => {
            let retryable = failure.is_retryable();
            (false, json!({ "outcome": "failed", "failure": failure, "retryable": retryable }))
        },
        SubmitOutcome::Busy => (false, json!({ "outcome": "busy" })),
        SubmitOutcome::Unavailable => (
            false,
            json!({ "outcome": "unavailable", "section": section_json(&page, section)? }),
        ),
    };

    print_json(&report)?;
    Ok(exit_code(ok))
}

/// Registers the subscription named in the landing URL.
///
/// # Errors
/// Returns an error if the identity is incomplete or the backend call fails.
pub async fn register(config: FulfillmentConfig, url: Url) -> Result<ExitCode> {
    let page = open(config, url)?;
    let reply = page.register().await.context("Registration failed")?;
    print_json(&json!({ "success": reply.success, "message": reply.message }))?;
    Ok(exit_code(reply.success))
}
