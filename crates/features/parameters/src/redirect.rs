use fulfill_domain::parameters::{Step, keys};
use url::Url;

/// Sets `key` on the URL query like `URLSearchParams.set`: the first occurrence is replaced in
/// place, later duplicates are dropped, and the pair is appended when the key is absent.
pub fn set_query_param(url: &mut Url, key: &str, value: &str) {
    let mut pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();

    match pairs.iter().position(|(k, _)| k == key) {
        Some(first) => {
            pairs[first].1 = value.to_owned();
            let mut index = 0;
            pairs.retain(|(k, _)| {
                let keep = index <= first || k != key;
                index += 1;
                keep
            });
        },
        None => pairs.push((key.to_owned(), value.to_owned())),
    }

    url.query_pairs_mut().clear().extend_pairs(pairs);
}

/// URL the page navigates to after a successful provisioning call.
///
/// Keeps every other parameter of the current page, so the marketplace identity survives the
/// redirect.
#[must_use]
pub fn completion_url(current: &Url, tenant: &str, portal_url: Option<&str>) -> Url {
    let mut next = current.clone();
    set_query_param(&mut next, keys::STEP, Step::Complete.as_ref());
    set_query_param(&mut next, keys::TENANT, tenant);
    if let Some(portal_url) = portal_url.filter(|url| !url.is_empty()) {
        set_query_param(&mut next, keys::PORTAL_URL, portal_url);
    }
    next
}
