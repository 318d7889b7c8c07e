use crate::constants::{
    DEFAULT_API_ENDPOINT, DEFAULT_HOSTING_DOMAIN, DEFAULT_MARKETPLACE_URL,
    DEFAULT_REDIRECT_DELAY_MS, DEFAULT_SUPPORT_EMAIL,
};
use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level fulfillment configuration.
#[derive(Default, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FulfillmentConfigInner {
    pub api: ApiConfig,
    pub portal: PortalConfig,
    pub flow: FlowConfig,
    pub support: SupportConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into the controller and the client.
#[derive(Default, Debug, Clone, Deserialize, Serialize)]
pub struct FulfillmentConfig {
    #[serde(flatten, default)]
    inner: Arc<FulfillmentConfigInner>,
}

impl Deref for FulfillmentConfig {
    type Target = FulfillmentConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for FulfillmentConfig {
    fn deref_mut(&mut self) -> &mut FulfillmentConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Backend endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiConfig {
    pub endpoint: String,
    /// Request timeout; the transport default applies when unset.
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PortalConfig {
    pub hosting_domain: String,
    pub redirect_delay_ms: u64,
}

#[derive(Default, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FlowConfig {
    /// Run the remote status check on a bare landing (token, customer and product present,
    /// no `step`). When off, such a landing falls back to the completion section.
    pub status_check_on_landing: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SupportConfig {
    pub email: String,
    pub marketplace_url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
    /// Rolling log directory; console only when unset.
    pub directory: Option<PathBuf>,
}

// --- Default ---

impl Default for ApiConfig {
    fn default() -> Self {
        Self { endpoint: DEFAULT_API_ENDPOINT.to_owned(), timeout_secs: None }
    }
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            hosting_domain: DEFAULT_HOSTING_DOMAIN.to_owned(),
            redirect_delay_ms: DEFAULT_REDIRECT_DELAY_MS,
        }
    }
}

impl Default for SupportConfig {
    fn default() -> Self {
        Self {
            email: DEFAULT_SUPPORT_EMAIL.to_owned(),
            marketplace_url: DEFAULT_MARKETPLACE_URL.to_owned(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), json: false, directory: None }
    }
}
