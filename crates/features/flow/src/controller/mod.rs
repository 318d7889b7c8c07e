//! The page controller.
//!
//! [`FulfillmentPage`] owns everything one page view needs: configuration, the parsed landing
//! parameters, the backend client and the selected [`Section`]. The section is chosen once;
//! later calls to [`FulfillmentPage::initialize`] return the stored choice.

mod error;
mod status;
mod submit;

pub use error::StatusCheckError;
pub use submit::SubmitOutcome;

use crate::api::{ApiError, FulfillmentApi};
use fulfill_domain::api::{HealthReport, RegisterResponse, SubscriptionRef};
use fulfill_domain::config::FulfillmentConfig;
use fulfill_domain::parameters::{ParameterSet, Step};
use fulfill_domain::section::{CompletionView, CustomerSummary, ErrorView, Section};
use fulfill_parameters::{decode_component, extract_from_url};
use fulfill_validation::preview_url_for;
use std::sync::OnceLock;
use std::sync::atomic::AtomicBool;
use tracing::{debug, info, warn};
use url::Url;

/// One page view of the fulfillment flow.
#[derive(Debug)]
pub struct FulfillmentPage<A> {
    config: FulfillmentConfig,
    page: Url,
    params: ParameterSet,
    customer: CustomerSummary,
    api: A,
    section: OnceLock<Section>,
    submitting: AtomicBool,
}

impl<A: FulfillmentApi> FulfillmentPage<A> {
    /// Reads the landing parameters from `page`; nothing is fetched yet.
    pub fn new(config: FulfillmentConfig, page: Url, api: A) -> Self {
        let params = extract_from_url(&page);
        let customer = CustomerSummary::from_parameters(&params);
        debug!(step = ?params.step, has_error = params.error_code().is_some(), "Landing parameters parsed");

        Self {
            config,
            page,
            params,
            customer,
            api,
            section: OnceLock::new(),
            submitting: AtomicBool::new(false),
        }
    }

    #[must_use]
    pub const fn config(&self) -> &FulfillmentConfig {
        &self.config
    }

    #[must_use]
    pub const fn page(&self) -> &Url {
        &self.page
    }

    #[must_use]
    pub const fn params(&self) -> &ParameterSet {
        &self.params
    }

    #[must_use]
    pub const fn api(&self) -> &A {
        &self.api
    }

    /// The section chosen by [`Self::initialize`], if it has run.
    #[must_use]
    pub fn section(&self) -> Option<&Section> {
        self.section.get()
    }

    /// Selects and stores the section for this page view.
    pub async fn initialize(&self) -> &Section {
        if let Some(section) = self.section.get() {
            return section;
        }

        let selected = self.select_section().await;
        info!(section = selected.id(), display = selected.display().as_ref(), "Section selected");
        self.section.get_or_init(|| selected)
    }

    /// Decides which section the landing parameters call for, without storing it.
    ///
    /// First match wins: an `error` parameter, then the `step`, then the presence of any
    /// marketplace identity.
    pub async fn select_section(&self) -> Section {
        if let Some(code) = self.params.error_code() {
            let raw = self.params.error_message.as_deref().filter(|message| !message.is_empty());
            let view = ErrorView::new(code, raw.map(decode_component), self.customer.clone())
                .with_detail_message(raw);
            return Section::Error(view);
        }

        match self.params.step {
            Some(Step::RegistrationComplete) => {
                Section::RegistrationComplete { customer: self.customer.clone() }
            },
            Some(Step::DnsSelection) => self.status_section().await,
            Some(Step::Complete) => Section::Completion(self.completion_view()),
            None if !self.params.has_marketplace_identity() => Section::NoSubscription,
            None if self.config.flow.status_check_on_landing
                && self.params.has_complete_marketplace_identity() =>
            {
                self.status_section().await
            },
            None => Section::Completion(self.completion_view()),
        }
    }

    /// Live preview of the portal address for the DNS form.
    #[must_use]
    pub fn preview_url(&self, dns_name: &str) -> String {
        preview_url_for(dns_name, &self.config.portal.hosting_domain)
    }

    /// Registers the subscription with the backend.
    ///
    /// # Errors
    /// [`ApiError::Internal`] when the marketplace identity is incomplete, otherwise whatever
    /// the backend call reports.
    pub async fn register(&self) -> Result<RegisterResponse, ApiError> {
        let subscription = self
            .subscription()
            .ok_or_else(|| ApiError::from("Marketplace identity is incomplete"))?;
        let reply = self.api.register(&subscription).await?;
        if reply.success {
            info!(customer = %subscription.customer, "Subscription registered");
        } else {
            warn!(customer = %subscription.customer, message = ?reply.message, "Registration refused");
        }
        Ok(reply)
    }

    pub async fn check_api_health(&self) -> HealthReport {
        self.api.health().await
    }

    fn subscription(&self) -> Option<SubscriptionRef> {
        if !self.params.has_complete_marketplace_identity() {
            return None;
        }
        Some(SubscriptionRef::new(
            self.params.customer_id.clone().unwrap_or_default(),
            self.params.product_code.clone().unwrap_or_default(),
            self.params.aws_token.clone().unwrap_or_default(),
        ))
    }

    fn completion_view(&self) -> CompletionView {
        let tenant_display = self
            .params
            .portal_url
            .clone()
            .filter(|url| !url.is_empty())
            .or_else(|| {
                self.params
                    .tenant_name
                    .as_deref()
                    .filter(|tenant| !tenant.is_empty())
                    .map(|tenant| format!("{tenant}.{}", self.config.portal.hosting_domain))
            });
        CompletionView { customer: self.customer.clone(), tenant_display }
    }
}
