//! Wire types for the fulfillment backend.
//!
//! One endpoint serves everything: `GET` for the status check, `POST` with an `action`
//! discriminator for provisioning and registration, `OPTIONS` as a health check.

use crate::status::CustomerStatus;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Marketplace identity forwarded on every backend call.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionRef {
    pub customer: String,
    pub product: String,
    pub token: String,
}

impl SubscriptionRef {
    pub fn new(
        customer: impl Into<String>,
        product: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self { customer: customer.into(), product: product.into(), token: token.into() }
    }
}

// The marketplace token is a credential; keep it out of logs.
impl fmt::Debug for SubscriptionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubscriptionRef")
            .field("customer", &self.customer)
            .field("product", &self.product)
            .field("token", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvisionRequest {
    pub customer: String,
    pub product: String,
    pub dns_name: String,
    pub email: String,
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub customer: String,
    pub product: String,
    pub token: String,
}

impl From<SubscriptionRef> for RegisterRequest {
    fn from(subscription: SubscriptionRef) -> Self {
        Self {
            customer: subscription.customer,
            product: subscription.product,
            token: subscription.token,
        }
    }
}

/// `POST` body, discriminated by `action`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum ApiAction {
    Provision(ProvisionRequest),
    Register(RegisterRequest),
}

impl ApiAction {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Provision(_) => "provision",
            Self::Register(_) => "register",
        }
    }
}

/// Status check reply. Anything beyond the known fields is kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, alias = "portalUrl")]
    pub portal_url: Option<String>,
    #[serde(default, alias = "registrationDate")]
    pub registration_date: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl StatusResponse {
    /// Only an explicit `success: false` marks the check as failed.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        self.success == Some(false)
    }

    #[must_use]
    pub fn customer_status(&self) -> Option<CustomerStatus> {
        self.status.as_deref().map(CustomerStatus::from_wire)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvisionResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, alias = "portal_url")]
    pub portal_url: Option<String>,
    /// HTTP status of the reply, filled in by the client.
    #[serde(skip)]
    pub http_status: Option<u16>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Result of the `OPTIONS` health check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub is_healthy: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
