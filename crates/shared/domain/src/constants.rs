//! Fixed values shared by the validators, the controller and the defaults in [`crate::config`].

/// Hosting domain that tenant DNS names are placed under.
pub const DEFAULT_HOSTING_DOMAIN: &str = "use.azure.cterafs.com";

/// Label shown in the preview URL before the user types a DNS name.
pub const PREVIEW_PLACEHOLDER: &str = "yourname";

/// Backend endpoint serving status checks, provisioning and registration.
pub const DEFAULT_API_ENDPOINT: &str =
    "https://5vrhjgx1a0.execute-api.us-east-1.amazonaws.com/prod/register";

/// Delay between a successful provisioning response and the redirect.
pub const DEFAULT_REDIRECT_DELAY_MS: u64 = 2000;

pub const DEFAULT_SUPPORT_EMAIL: &str = "support@ctera.com";
pub const DEFAULT_MARKETPLACE_URL: &str =
    "https://aws.amazon.com/marketplace/search/results?searchTerms=ctera";

/// Shown wherever the marketplace token would be displayed but none was supplied.
pub const TOKEN_NOT_PROVIDED: &str = "Not provided";
