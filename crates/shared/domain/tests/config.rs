use fulfill_domain::config::{FulfillmentConfig, LoggingConfig, PortalConfig};
use fulfill_domain::constants::DEFAULT_HOSTING_DOMAIN;
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let portal = PortalConfig::default();
    assert_eq!(portal.hosting_domain, DEFAULT_HOSTING_DOMAIN);
    assert_eq!(portal.redirect_delay_ms, 2000);

    let logging = LoggingConfig::default();
    assert_eq!(logging.level, "info");
    assert!(logging.directory.is_none());

    let cfg = FulfillmentConfig::default();
    assert!(!cfg.flow.status_check_on_landing);
    assert!(cfg.api.endpoint.starts_with("https://"));
}

#[test]
fn fulfillment_config_deserializes() {
    let raw = json!({
        "api": { "endpoint": "http://127.0.0.1:9000/register" },
        "portal": { "hosting_domain": "portals.example.com", "redirect_delay_ms": 0 },
        "flow": { "status_check_on_landing": true },
        "logging": { "directory": "/tmp/logs" }
    });

    let cfg: FulfillmentConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.api.endpoint, "http://127.0.0.1:9000/register");
    assert_eq!(cfg.api.timeout_secs, None);
    assert_eq!(cfg.portal.hosting_domain, "portals.example.com");
    assert_eq!(cfg.portal.redirect_delay_ms, 0);
    assert!(cfg.flow.status_check_on_landing);
    assert_eq!(cfg.logging.directory, Some(std::path::PathBuf::from("/tmp/logs")));
    assert_eq!(cfg.support.email, "support@ctera.com");
}

#[test]
fn clones_share_until_mutated() {
    let original = FulfillmentConfig::default();
    let mut copy = original.clone();
    copy.portal.redirect_delay_ms = 5;

    assert_eq!(original.portal.redirect_delay_ms, 2000);
    assert_eq!(copy.portal.redirect_delay_ms, 5);
}
