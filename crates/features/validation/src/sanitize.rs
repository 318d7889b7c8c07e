use fulfill_domain::constants::{DEFAULT_HOSTING_DOMAIN, PREVIEW_PLACEHOLDER};

/// Trims and lowercases an email; absent input becomes `""`.
#[must_use]
pub fn sanitize_email<'a>(value: impl Into<Option<&'a str>>) -> String {
    normalize(value.into())
}

/// Trims and lowercases a portal name; absent input becomes `""`.
#[must_use]
pub fn sanitize_dns_name<'a>(value: impl Into<Option<&'a str>>) -> String {
    normalize(value.into())
}

fn normalize(value: Option<&str>) -> String {
    value.map(|v| v.trim().to_lowercase()).unwrap_or_default()
}

/// Preview of the portal address under the default hosting domain.
#[must_use]
pub fn generate_preview_url(dns_name: &str) -> String {
    preview_url_for(dns_name, DEFAULT_HOSTING_DOMAIN)
}

/// Preview of the portal address under `hosting_domain`, with a placeholder label while the
/// name is still blank.
#[must_use]
pub fn preview_url_for(dns_name: &str, hosting_domain: &str) -> String {
    let label = sanitize_dns_name(dns_name);
    let label = if label.is_empty() { PREVIEW_PLACEHOLDER } else { label.as_str() };
    format!("{label}.{hosting_domain}")
}
