use super::FulfillmentPage;
use super::error::{STATUS_CHECK_FAILED, StatusCheckError};
use crate::api::FulfillmentApi;
use fulfill_domain::api::StatusResponse;
use fulfill_domain::section::{CustomerSummary, ErrorView, Section};
use fulfill_domain::status::CustomerStatus;
use tracing::{info, warn};

const REGISTERED_RECENTLY: &str = "recently";

impl<A: FulfillmentApi> FulfillmentPage<A> {
    /// Asks the backend for the customer's subscription state.
    ///
    /// # Errors
    /// * [`StatusCheckError::MissingIdentity`] if token, customer or product is missing.
    /// * [`StatusCheckError::Remote`] if the request itself failed.
    /// * [`StatusCheckError::Rejected`] if the backend answered `success: false`.
    pub async fn check_customer_status(&self) -> Result<StatusResponse, StatusCheckError> {
        let subscription =
            self.subscription().ok_or(StatusCheckError::MissingIdentity { context: None })?;

        let reply = self.api.check_status(&subscription).await?;
        if reply.is_failure() {
            let message = reply
                .message
                .filter(|message| !message.is_empty())
                .unwrap_or_else(|| STATUS_CHECK_FAILED.to_owned());
            return Err(StatusCheckError::Rejected { message, context: None });
        }

        info!(status = reply.status.as_deref().unwrap_or_default(), "Customer status received");
        Ok(reply)
    }

    pub(super) async fn status_section(&self) -> Section {
        match self.check_customer_status().await {
            Ok(reply) => self.section_for_status(&reply),
            Err(error) => {
                warn!(%error, "Customer status check failed");
                self.error_section(&error)
            },
        }
    }

    fn section_for_status(&self, reply: &StatusResponse) -> Section {
        let customer = self.customer.clone();

        match reply.customer_status() {
            Some(CustomerStatus::Available | CustomerStatus::StaleRegistration) => {
                self.dns_selection(customer, false)
            },
            Some(CustomerStatus::CreationFailed) => self.dns_selection(customer, true),
            Some(CustomerStatus::Fulfilled) => {
                match reply.portal_url.clone().filter(|url| !url.is_empty()) {
                    Some(portal_url) => Section::FulfilledCustomer { customer, portal_url },
                    None => Section::Completion(self.completion_view()),
                }
            },
            Some(CustomerStatus::Registered) => Section::RegistrationInProgress {
                customer,
                registered: reply
                    .registration_date
                    .clone()
                    .filter(|date| !date.is_empty())
                    .unwrap_or_else(|| REGISTERED_RECENTLY.to_owned()),
            },
            Some(CustomerStatus::Unknown(status)) => {
                let error = StatusCheckError::UnknownStatus { status, context: None };
                warn!(%error, "Unrecognized customer status");
                self.error_section(&error)
            },
            None => {
                let error =
                    StatusCheckError::UnknownStatus { status: "missing".to_owned(), context: None };
                warn!(%error, "Status reply without a status");
                self.error_section(&error)
            },
        }
    }

    fn dns_selection(&self, customer: CustomerSummary, prior_failure: bool) -> Section {
        Section::DnsSelection { customer, prior_failure, preview_url: self.preview_url("") }
    }

    fn error_section(&self, error: &StatusCheckError) -> Section {
        let view = ErrorView::new(error.code(), Some(error.user_message()), self.customer.clone());
        Section::Error(view)
    }
}
