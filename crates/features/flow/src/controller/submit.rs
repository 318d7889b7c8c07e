use super::FulfillmentPage;
use crate::api::FulfillmentApi;
use crate::classify::ProvisionFailure;
use crate::view::{FormView, MessageKind, SubmitState};
use fulfill_domain::api::ProvisionRequest;
use fulfill_domain::section::Section;
use fulfill_domain::validation::ValidationResult;
use fulfill_parameters::completion_url;
use fulfill_validation::{
    ProvisioningParams, sanitize_dns_name, sanitize_email, validate_form,
    validate_provisioning_params,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};
use url::Url;

const PROVISIONING_MESSAGE: &str = "Provisioning your portal...";
const SUCCESS_MESSAGE: &str = "Portal created successfully! Redirecting...";
const FAILURE_PREFIX: &str = "Error creating portal: ";

/// What happened to one form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Rejected before any request was sent; the message is already on the form.
    Invalid(ValidationResult),
    /// The portal was created and the view has been sent to `redirect`.
    Provisioned { redirect: Url, portal_url: Option<String> },
    /// The backend refused or could not be reached; the form is enabled again.
    Failed(ProvisionFailure),
    /// Another submission is still in flight.
    Busy,
    /// The current section has no provisioning form.
    Unavailable,
}

/// Clears the in-flight flag when the submission ends, however it ends.
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl<A: FulfillmentApi> FulfillmentPage<A> {
    /// Handles a submission of the DNS selection form.
    ///
    /// Inputs are trimmed and validated; failures are shown inline and nothing is sent. A valid
    /// form disables the submit control and calls the backend once. On success the view is
    /// redirected to the completion step after the configured delay. On failure the backend's
    /// message is shown and the control is re-enabled. There is no automatic retry.
    #[instrument(skip_all, fields(dns_name = %dns_name.trim()))]
    pub async fn submit<V: FormView>(
        &self,
        view: &mut V,
        email: &str,
        dns_name: &str,
    ) -> SubmitOutcome {
        if !self.section().is_some_and(Section::accepts_provisioning) {
            warn!(section = self.section().map(Section::id), "Submission outside DNS selection");
            return SubmitOutcome::Unavailable;
        }
        let Some(_in_flight) = InFlight::acquire(&self.submitting) else {
            debug!("Submission ignored, request already in flight");
            return SubmitOutcome::Busy;
        };

        let email = email.trim();
        let dns_name = dns_name.trim();

        let validation = validate_form(email, dns_name);
        if !validation.is_valid() {
            debug!(failure = ?validation.failure(), "Form rejected");
            view.show_form_message(validation.message(), MessageKind::Error);
            return SubmitOutcome::Invalid(validation);
        }

        let params = ProvisioningParams {
            dns_name: Some(dns_name),
            email: Some(email),
            customer_id: self.params.customer_id.as_deref(),
            product_code: self.params.product_code.as_deref(),
            aws_token: self.params.aws_token.as_deref(),
        };
        let completeness = validate_provisioning_params(&params);
        if !completeness.is_valid() {
            warn!(missing = completeness.message(), "Provisioning parameters incomplete");
            let message = format!("{FAILURE_PREFIX}{}", completeness.message());
            view.show_form_message(&message, MessageKind::Error);
            return SubmitOutcome::Invalid(completeness);
        }

        view.set_submit_state(SubmitState::Loading);
        view.show_form_message(PROVISIONING_MESSAGE, MessageKind::Loading);

        let request = ProvisionRequest {
            customer: params.customer_id.unwrap_or_default().to_owned(),
            product: params.product_code.unwrap_or_default().to_owned(),
            dns_name: sanitize_dns_name(dns_name),
            email: sanitize_email(email),
            token: params.aws_token.unwrap_or_default().to_owned(),
        };

        let failure = match self.api.provision(&request).await {
            Ok(reply) if reply.success => {
                let portal_url = reply.portal_url.filter(|url| !url.is_empty());
                let redirect = completion_url(&self.page, &request.dns_name, portal_url.as_deref());
                info!(portal_url = ?portal_url, "Portal provisioned");

                view.show_form_message(SUCCESS_MESSAGE, MessageKind::Success);
                let delay = Duration::from_millis(self.config.portal.redirect_delay_ms);
                tokio::time::sleep(delay).await;
                view.navigate(&redirect);
                return SubmitOutcome::Provisioned { redirect, portal_url };
            },
            Ok(reply) => ProvisionFailure::from_response(&reply),
            Err(error) => {
                warn!(%error, "Provisioning request failed");
                ProvisionFailure::from_api_error(&error)
            },
        };

        warn!(
            kind = failure.kind.as_ref(),
            retryable = failure.is_retryable(),
            http_status = ?failure.http_status,
            message = %failure.message,
            "Provisioning failed"
        );
        view.show_form_message(&format!("{FAILURE_PREFIX}{}", failure.message), MessageKind::Error);
        view.set_submit_state(SubmitState::Enabled);
        SubmitOutcome::Failed(failure)
    }
}
