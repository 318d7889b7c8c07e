mod support;

use axum::http::StatusCode;
use fulfill_domain::validation::ValidationFailure;
use fulfill_flow::{ErrorKind, MessageKind, SubmitOutcome, SubmitState};
use serde_json::json;
use support::{FakeBackend, IDENTITY, RecordingView, Reply, Script, Seen};

const DNS_STEP: &str = "step=dns-selection";

async fn ready_page(backend: &FakeBackend) -> fulfill_flow::FulfillmentPage<fulfill_flow::HttpApi> {
    let page = backend.page(&format!("{IDENTITY}&{DNS_STEP}"));
    assert!(page.initialize().await.accepts_provisioning());
    page
}

fn posts(backend: &FakeBackend) -> Vec<serde_json::Value> {
    backend
        .seen()
        .into_iter()
        .filter_map(|seen| match seen {
            Seen::Post(body) => Some(body),
            _ => None,
        })
        .collect()
}

#[tokio::test]
async fn successful_submission_redirects_to_completion() {
    let backend = FakeBackend::spawn(Script::default()).await;
    let page = ready_page(&backend).await;
    let mut view = RecordingView::default();

    let outcome = page.submit(&mut view, "  Ops@Acme.IO ", " acme-files ").await;

    let SubmitOutcome::Provisioned { redirect, portal_url } = outcome else {
        panic!("expected provisioned, got {outcome:?}");
    };
    assert_eq!(portal_url, None);
    let query: Vec<_> = redirect.query_pairs().into_owned().collect();
    assert!(query.contains(&("step".to_owned(), "complete".to_owned())));
    assert!(query.contains(&("tenant".to_owned(), "acme-files".to_owned())));
    assert!(query.contains(&("customer".to_owned(), "c-42".to_owned())));
    assert_eq!(view.navigated.as_ref(), Some(&redirect));

    assert_eq!(view.states, [SubmitState::Loading]);
    assert_eq!(
        view.last_message(),
        Some(&("Portal created successfully! Redirecting...".to_owned(), MessageKind::Success))
    );

    assert_eq!(
        posts(&backend),
        [json!({
            "action": "provision",
            "customer": "c-42",
            "product": "prod-7",
            "dnsName": "acme-files",
            "email": "ops@acme.io",
            "token": "tok-123"
        })]
    );
}

#[tokio::test]
async fn backend_portal_url_is_carried_into_redirect() {
    let backend = FakeBackend::spawn(Script {
        provision: Reply::json(json!({ "success": true, "portalUrl": "https://acme.portal.io" })),
        ..Script::default()
    })
    .await;
    let page = ready_page(&backend).await;
    let mut view = RecordingView::default();

    let outcome = page.submit(&mut view, "ops@acme.io", "acme").await;

    let SubmitOutcome::Provisioned { redirect, portal_url } = outcome else {
        panic!("expected provisioned, got {outcome:?}");
    };
    assert_eq!(portal_url.as_deref(), Some("https://acme.portal.io"));
    assert!(redirect.query_pairs().any(|(key, value)| key == "portalUrl" && value == "https://acme.portal.io"));
}

#[tokio::test]
async fn invalid_email_is_rejected_locally() {
    let backend = FakeBackend::spawn(Script::default()).await;
    let page = ready_page(&backend).await;
    let mut view = RecordingView::default();

    let outcome = page.submit(&mut view, "not-an-email", "acme").await;

    let SubmitOutcome::Invalid(result) = outcome else { panic!("expected invalid") };
    assert_eq!(result.failure(), Some(ValidationFailure::Format));
    assert_eq!(
        view.messages,
        [("Please enter a valid email address".to_owned(), MessageKind::Error)]
    );
    assert!(view.states.is_empty());
    assert!(posts(&backend).is_empty());
}

#[tokio::test]
async fn reserved_name_is_rejected_locally() {
    let backend = FakeBackend::spawn(Script::default()).await;
    let page = ready_page(&backend).await;
    let mut view = RecordingView::default();

    let outcome = page.submit(&mut view, "ops@acme.io", "admin").await;

    assert!(matches!(outcome, SubmitOutcome::Invalid(ref result) if result.failure() == Some(ValidationFailure::Reserved)));
    assert!(posts(&backend).is_empty());
}

#[tokio::test]
async fn taken_name_keeps_the_form_editable() {
    let backend = FakeBackend::spawn(Script {
        provision: Reply::with_status(
            StatusCode::CONFLICT,
            json!({ "success": false, "message": "DNS name 'acme' is already taken" }).to_string(),
        ),
        ..Script::default()
    })
    .await;
    let page = ready_page(&backend).await;
    let mut view = RecordingView::default();

    let outcome = page.submit(&mut view, "ops@acme.io", "acme").await;

    let SubmitOutcome::Failed(failure) = outcome else { panic!("expected failure") };
    assert_eq!(failure.kind, ErrorKind::DnsNameTaken);
    assert_eq!(failure.http_status, Some(409));
    assert!(!failure.is_retryable());

    assert_eq!(view.states, [SubmitState::Loading, SubmitState::Enabled]);
    assert_eq!(
        view.last_message(),
        Some(&(
            "Error creating portal: DNS name 'acme' is already taken".to_owned(),
            MessageKind::Error
        ))
    );
    assert!(view.navigated.is_none());
}

#[tokio::test]
async fn gateway_error_is_retryable() {
    let backend = FakeBackend::spawn(Script {
        provision: Reply::with_status(StatusCode::BAD_GATEWAY, "upstream unavailable"),
        ..Script::default()
    })
    .await;
    let page = ready_page(&backend).await;
    let mut view = RecordingView::default();

    let SubmitOutcome::Failed(failure) = page.submit(&mut view, "ops@acme.io", "acme").await else {
        panic!("expected failure");
    };
    assert_eq!(failure.kind, ErrorKind::Unknown);
    assert_eq!(failure.http_status, Some(502));
    assert!(failure.is_retryable());
    assert_eq!(view.states.last(), Some(&SubmitState::Enabled));
}

#[tokio::test]
async fn submission_outside_dns_selection_is_refused() {
    let backend = FakeBackend::spawn(Script::default()).await;
    let page = backend.page(&format!("{IDENTITY}&step=registration-complete"));
    page.initialize().await;
    let mut view = RecordingView::default();

    let outcome = page.submit(&mut view, "ops@acme.io", "acme").await;

    assert_eq!(outcome, SubmitOutcome::Unavailable);
    assert!(view.messages.is_empty());
}

#[tokio::test]
async fn submission_before_initialize_is_refused() {
    let backend = FakeBackend::spawn(Script::default()).await;
    let page = backend.page(&format!("{IDENTITY}&{DNS_STEP}"));
    let mut view = RecordingView::default();

    assert_eq!(page.submit(&mut view, "ops@acme.io", "acme").await, SubmitOutcome::Unavailable);
}

#[tokio::test]
async fn concurrent_submission_is_ignored() {
    let backend = FakeBackend::spawn(Script::default()).await;
    let page = ready_page(&backend).await;
    let mut first_view = RecordingView::default();
    let mut second_view = RecordingView::default();

    let (first, second) = tokio::join!(
        page.submit(&mut first_view, "ops@acme.io", "acme"),
        page.submit(&mut second_view, "ops@acme.io", "acme"),
    );

    assert!(matches!(first, SubmitOutcome::Provisioned { .. }));
    assert_eq!(second, SubmitOutcome::Busy);
    assert_eq!(posts(&backend).len(), 1);
}

#[tokio::test]
async fn register_posts_the_subscription() {
    let backend = FakeBackend::spawn(Script::default()).await;
    let page = backend.page(IDENTITY);

    let reply = page.register().await.unwrap();

    assert!(reply.success);
    assert_eq!(
        posts(&backend),
        [json!({ "action": "register", "customer": "c-42", "product": "prod-7", "token": "tok-123" })]
    );
}

#[tokio::test]
async fn register_requires_full_identity() {
    let backend = FakeBackend::spawn(Script::default()).await;
    let page = backend.page("customer=c-42");

    assert!(page.register().await.is_err());
    assert!(backend.seen().is_empty());
}

#[tokio::test]
async fn health_check_uses_options() {
    let backend = FakeBackend::spawn(Script::default()).await;
    let page = backend.page("");

    let report = page.check_api_health().await;

    assert!(report.is_healthy);
    assert_eq!(report.status, Some(204));
    assert_eq!(backend.seen(), [Seen::Options]);
}

#[tokio::test]
async fn unhealthy_backend_reports_status() {
    let backend =
        FakeBackend::spawn(Script { options: StatusCode::SERVICE_UNAVAILABLE, ..Script::default() })
            .await;

    let report = backend.page("").check_api_health().await;

    assert!(!report.is_healthy);
    assert_eq!(report.status, Some(503));
}
