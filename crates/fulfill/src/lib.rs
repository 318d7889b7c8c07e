//! Facade crate for the fulfillment flow.
//! Re-exports domain/kernel primitives and the three feature slices.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Load settings with [`kernel::config::load_fulfillment_config`].
//! - Call [`open_page`] with the landing URL, then drive the returned page.

pub use fulfill_domain as domain;
pub use fulfill_kernel as kernel;

use fulfill_domain::config::FulfillmentConfig;
use fulfill_flow::{ApiError, FulfillmentPage, HttpApi};
use url::Url;

/// Feature slices composed by this crate.
pub mod features {
    pub use fulfill_flow as flow;
    pub use fulfill_parameters as parameters;
    pub use fulfill_validation as validation;

    pub const ENABLED: &[&str] = &["parameters", "validation", "flow"];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Builds a page controller for `landing` backed by the HTTP client.
///
/// # Errors
/// Returns an error if the configured API endpoint is not a valid URL or the HTTP client
/// cannot be built.
pub fn open_page(
    config: FulfillmentConfig,
    landing: Url,
) -> Result<FulfillmentPage<HttpApi>, ApiError> {
    let api = HttpApi::new(&config.api)?;
    Ok(FulfillmentPage::new(config, landing, api))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_feature_slices() {
        assert!(features::is_enabled("flow"));
        assert!(!features::is_enabled("metering"));
    }

    #[tokio::test]
    async fn opens_page_without_network() {
        let landing = Url::parse("https://fulfill.example.com/?utm_source=mail").unwrap();
        let page = open_page(FulfillmentConfig::default(), landing).unwrap();

        assert_eq!(page.initialize().await, &domain::section::Section::NoSubscription);
    }

    #[test]
    fn rejects_bad_endpoint() {
        let mut config = FulfillmentConfig::default();
        config.api.endpoint = "::nope::".to_owned();
        let landing = Url::parse("https://fulfill.example.com/").unwrap();

        assert!(open_page(config, landing).is_err());
    }
}
