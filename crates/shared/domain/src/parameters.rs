use serde::Serialize;
use strum::{AsRefStr, EnumString};

/// Query-string keys understood on the landing page.
pub mod keys {
    pub const MARKETPLACE_TOKEN: &str = "x-amzn-marketplace-token";
    /// Fallback for [`MARKETPLACE_TOKEN`].
    pub const TOKEN: &str = "token";
    pub const CUSTOMER: &str = "customer";
    pub const PRODUCT: &str = "product";
    pub const TENANT: &str = "tenant";
    pub const PORTAL: &str = "portal";
    pub const PORTAL_URL: &str = "portalUrl";
    pub const STEP: &str = "step";
    pub const ERROR: &str = "error";
    pub const MESSAGE: &str = "message";
    pub const REGISTRATION_DATE: &str = "registration_date";
}

/// Flow-control step carried in the `step` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumString, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Step {
    RegistrationComplete,
    DnsSelection,
    Complete,
}

/// Parameters read once from the landing URL.
///
/// `None` means the key was not in the query string; `Some("")` means it was present but empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterSet {
    pub aws_token: Option<String>,
    pub customer_id: Option<String>,
    pub product_code: Option<String>,
    pub tenant_name: Option<String>,
    pub portal: Option<String>,
    pub portal_url: Option<String>,
    pub step: Option<Step>,
    pub error: Option<String>,
    pub error_message: Option<String>,
    pub registration_date: Option<String>,
}

impl ParameterSet {
    /// True when at least one of token, customer or product carries a value.
    #[must_use]
    pub fn has_marketplace_identity(&self) -> bool {
        self.identity().into_iter().any(is_filled)
    }

    /// True when token, customer and product all carry a value.
    #[must_use]
    pub fn has_complete_marketplace_identity(&self) -> bool {
        self.identity().into_iter().all(is_filled)
    }

    fn identity(&self) -> [Option<&str>; 3] {
        [self.aws_token.as_deref(), self.customer_id.as_deref(), self.product_code.as_deref()]
    }

    /// The `error` parameter, unless it is absent or empty.
    #[must_use]
    pub fn error_code(&self) -> Option<&str> {
        self.error.as_deref().filter(|code| !code.is_empty())
    }
}

/// An empty value counts as missing for flow decisions.
fn is_filled(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}
