use fulfill_domain::parameters::{ParameterSet, Step, keys};
use percent_encoding::percent_decode_str;
use std::borrow::Cow;
use tracing::debug;
use url::{Url, form_urlencoded};

/// Reads the recognised keys from a raw query string (with or without the leading `?`).
///
/// The first occurrence of a key wins. Values are form-decoded; nothing is validated.
#[must_use]
pub fn extract_parameters(query: &str) -> ParameterSet {
    let query = query.strip_prefix('?').unwrap_or(query);
    let pairs: Vec<(Cow<'_, str>, Cow<'_, str>)> = form_urlencoded::parse(query.as_bytes()).collect();
    from_pairs(&pairs)
}

/// Same as [`extract_parameters`] for an already parsed page URL.
#[must_use]
pub fn extract_from_url(url: &Url) -> ParameterSet {
    let pairs: Vec<(Cow<'_, str>, Cow<'_, str>)> = url.query_pairs().collect();
    from_pairs(&pairs)
}

fn from_pairs(pairs: &[(Cow<'_, str>, Cow<'_, str>)]) -> ParameterSet {
    let get = |key: &str| {
        pairs.iter().find(|(k, _)| k == key).map(|(_, value)| value.clone().into_owned())
    };

    let aws_token = match get(keys::MARKETPLACE_TOKEN) {
        Some(token) if !token.is_empty() => Some(token),
        _ => get(keys::TOKEN),
    };

    let step = get(keys::STEP).and_then(|raw| {
        raw.parse::<Step>()
            .inspect_err(|_| debug!(step = %raw, "Ignoring unrecognized step"))
            .ok()
    });

    ParameterSet {
        aws_token,
        customer_id: get(keys::CUSTOMER),
        product_code: get(keys::PRODUCT),
        tenant_name: get(keys::TENANT),
        portal: get(keys::PORTAL),
        portal_url: get(keys::PORTAL_URL),
        step,
        error: get(keys::ERROR),
        error_message: get(keys::MESSAGE),
        registration_date: get(keys::REGISTRATION_DATE),
    }
}

/// Percent-decodes a value that may already have been decoded once.
///
/// Malformed escapes are kept literally and invalid UTF-8 is replaced, so this never fails.
/// `+` is left alone.
#[must_use]
pub fn decode_component(raw: &str) -> String {
    percent_decode_str(raw).decode_utf8_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_occurrence_wins() {
        let params = extract_parameters("customer=first&customer=second");
        assert_eq!(params.customer_id.as_deref(), Some("first"));
    }

    #[test]
    fn empty_marketplace_token_falls_back() {
        let params = extract_parameters("x-amzn-marketplace-token=&token=legacy");
        assert_eq!(params.aws_token.as_deref(), Some("legacy"));

        let params = extract_parameters("x-amzn-marketplace-token=mkt&token=legacy");
        assert_eq!(params.aws_token.as_deref(), Some("mkt"));
    }

    #[test]
    fn unknown_step_is_absent() {
        assert_eq!(extract_parameters("step=somewhere").step, None);
        assert_eq!(extract_parameters("step=complete").step, Some(Step::Complete));
    }

    #[test]
    fn decode_component_is_lenient() {
        assert_eq!(decode_component("DNS%20name%20taken"), "DNS name taken");
        assert_eq!(decode_component("100%"), "100%");
        assert_eq!(decode_component("50%zz off"), "50%zz off");
        assert_eq!(decode_component("a+b"), "a+b");
        assert_eq!(decode_component("caf%C3%A9"), "café");
    }

    #[test]
    fn signed_hex_is_not_an_escape() {
        assert_eq!(decode_component("%+41"), "%+41");
        assert_eq!(decode_component("Code%25%2B41"), "Code%+41");
    }
}
