//! Section view-models.
//!
//! The page shows exactly one [`Section`] at a time. Each variant carries what the
//! presentation layer needs to render it; [`Section::display`] names the physical page block
//! the variant is rendered into.

use crate::constants::TOKEN_NOT_PROVIDED;
use crate::parameters::ParameterSet;
use serde::Serialize;
use strum::AsRefStr;

const DEFAULT_ERROR_MESSAGE: &str =
    "An error occurred while processing your subscription. Please contact support.";
const NO_ADDITIONAL_DETAILS: &str = "No additional details";

/// Customer block shared by most sections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerSummary {
    pub customer_id: Option<String>,
    pub product_code: Option<String>,
    /// Marketplace token as shown in the support panel.
    pub token_display: String,
}

impl CustomerSummary {
    #[must_use]
    pub fn from_parameters(params: &ParameterSet) -> Self {
        Self {
            customer_id: params.customer_id.clone(),
            product_code: params.product_code.clone(),
            token_display: params
                .aws_token
                .clone()
                .filter(|token| !token.is_empty())
                .unwrap_or_else(|| TOKEN_NOT_PROVIDED.to_owned()),
        }
    }
}

/// Error section contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorView {
    /// Machine-readable code (the `error` parameter or a locally synthesized one).
    pub code: String,
    pub message: String,
    /// Text of the expandable details panel.
    pub details: String,
    pub customer: CustomerSummary,
}

impl ErrorView {
    #[must_use]
    pub fn new(code: impl Into<String>, message: Option<String>, customer: CustomerSummary) -> Self {
        let code = code.into();
        let details = details_text(&code, message.as_deref());
        Self {
            code,
            message: message.unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_owned()),
            details,
            customer,
        }
    }

    /// Replaces the message quoted in the details panel, leaving the headline as is.
    #[must_use]
    pub fn with_detail_message(mut self, message: Option<&str>) -> Self {
        self.details = details_text(&self.code, message);
        self
    }
}

fn details_text(code: &str, message: Option<&str>) -> String {
    format!("Error: {code}\nMessage: {}", message.unwrap_or(NO_ADDITIONAL_DETAILS))
}

/// Completion section contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionView {
    pub customer: CustomerSummary,
    /// Portal address: the `portalUrl` parameter, else `<tenant>.<hosting domain>`.
    pub tenant_display: Option<String>,
}

/// The physical page block a [`Section`] is rendered into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum DisplayState {
    Error,
    RegistrationComplete,
    DnsSelection,
    Completion,
    NoSubscription,
}

/// The single section selected for a page view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "section", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum Section {
    Error(ErrorView),
    RegistrationComplete {
        customer: CustomerSummary,
    },
    /// Status `REGISTERED`: portal creation is pending on the backend.
    RegistrationInProgress {
        customer: CustomerSummary,
        /// Registration timestamp as reported, or `"recently"`.
        registered: String,
    },
    DnsSelection {
        customer: CustomerSummary,
        /// Set when a previous creation attempt failed (`CREATION_FAILED`).
        prior_failure: bool,
        preview_url: String,
    },
    /// Status `FULFILLED` with a known portal address.
    FulfilledCustomer {
        customer: CustomerSummary,
        portal_url: String,
    },
    Completion(CompletionView),
    NoSubscription,
}

impl Section {
    /// Stable identifier of the selected view.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Error(_) => "error",
            Self::RegistrationComplete { .. } => "registration-complete",
            Self::RegistrationInProgress { .. } => "registered-customer",
            Self::DnsSelection { prior_failure: true, .. } => "creation-failed",
            Self::DnsSelection { .. } => "dns-selection",
            Self::FulfilledCustomer { .. } => "fulfilled-customer",
            Self::Completion(_) => "completion",
            Self::NoSubscription => "no-subscription",
        }
    }

    #[must_use]
    pub const fn display(&self) -> DisplayState {
        match self {
            Self::Error(_) => DisplayState::Error,
            Self::RegistrationComplete { .. } | Self::RegistrationInProgress { .. } => {
                DisplayState::RegistrationComplete
            },
            Self::DnsSelection { .. } => DisplayState::DnsSelection,
            Self::FulfilledCustomer { .. } | Self::Completion(_) => DisplayState::Completion,
            Self::NoSubscription => DisplayState::NoSubscription,
        }
    }

    /// Whether the section hosts the provisioning form.
    #[must_use]
    pub const fn accepts_provisioning(&self) -> bool {
        matches!(self, Self::DnsSelection { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_view_falls_back_to_default_message() {
        let view = ErrorView::new("BOOM", None, CustomerSummary::default());
        assert_eq!(view.message, DEFAULT_ERROR_MESSAGE);
        assert_eq!(view.details, "Error: BOOM\nMessage: No additional details");
    }

    #[test]
    fn details_can_quote_a_different_message() {
        let headline = Some("Portal is down".to_owned());
        let view = ErrorView::new("BOOM", headline, CustomerSummary::default())
            .with_detail_message(Some("Portal%20is%20down"));
        assert_eq!(view.message, "Portal is down");
        assert_eq!(view.details, "Error: BOOM\nMessage: Portal%20is%20down");
    }

    #[test]
    fn missing_token_is_displayed_as_not_provided() {
        let summary = CustomerSummary::from_parameters(&ParameterSet::default());
        assert_eq!(summary.token_display, TOKEN_NOT_PROVIDED);
        assert!(summary.customer_id.is_none());
    }

    #[test]
    fn retry_form_is_rendered_in_dns_block() {
        let section = Section::DnsSelection {
            customer: CustomerSummary::default(),
            prior_failure: true,
            preview_url: "yourname.example.com".to_owned(),
        };
        assert_eq!(section.id(), "creation-failed");
        assert_eq!(section.display(), DisplayState::DnsSelection);
        assert!(section.accepts_provisioning());
    }

    #[test]
    fn section_serializes_with_tag() {
        let json = serde_json::to_value(Section::NoSubscription).unwrap();
        assert_eq!(json["section"], "no-subscription");

        let json = serde_json::to_value(Section::FulfilledCustomer {
            customer: CustomerSummary::default(),
            portal_url: "https://acme.example.com".to_owned(),
        })
        .unwrap();
        assert_eq!(json["section"], "fulfilled-customer");
        assert_eq!(json["portalUrl"], "https://acme.example.com");
    }
}
