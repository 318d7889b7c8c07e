#![allow(dead_code)]

use axum::extract::{Query, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use fulfill_domain::config::FulfillmentConfig;
use fulfill_flow::{FormView, FulfillmentPage, HttpApi, MessageKind, SubmitState};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use url::Url;

pub const PATH: &str = "/prod/register";
pub const LANDING: &str = "https://fulfill.example.com/";

/// Canned reply for one kind of request.
#[derive(Debug, Clone)]
pub struct Reply {
    pub status: StatusCode,
    pub body: String,
}

impl Reply {
    pub fn json(body: Value) -> Self {
        Self { status: StatusCode::OK, body: body.to_string() }
    }

    pub fn with_status(status: StatusCode, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }
}

#[derive(Debug, Clone)]
pub struct Script {
    pub status: Reply,
    pub provision: Reply,
    pub register: Reply,
    pub options: StatusCode,
}

impl Default for Script {
    fn default() -> Self {
        Self {
            status: Reply::json(serde_json::json!({ "success": true, "status": "AVAILABLE" })),
            provision: Reply::json(serde_json::json!({ "success": true })),
            register: Reply::json(serde_json::json!({ "success": true, "message": "Registered" })),
            options: StatusCode::NO_CONTENT,
        }
    }
}

/// Requests the fake backend received, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Seen {
    Status(HashMap<String, String>),
    Post(Value),
    Options,
}

#[derive(Clone)]
struct Shared {
    script: Arc<Script>,
    seen: Arc<Mutex<Vec<Seen>>>,
}

/// In-process stand-in for the fulfillment endpoint.
pub struct FakeBackend {
    pub endpoint: String,
    seen: Arc<Mutex<Vec<Seen>>>,
}

impl FakeBackend {
    pub async fn spawn(script: Script) -> Self {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let state = Shared { script: Arc::new(script), seen: Arc::clone(&seen) };

        let app = Router::new()
            .route(PATH, get(status).post(action).options(options))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { endpoint: format!("http://{addr}{PATH}"), seen }
    }

    pub fn seen(&self) -> Vec<Seen> {
        self.seen.lock().unwrap().clone()
    }

    pub fn page(&self, query: &str) -> FulfillmentPage<HttpApi> {
        page_with(config(&self.endpoint), query)
    }
}

fn reply(reply: &Reply) -> impl IntoResponse + use<> {
    (reply.status, [(header::CONTENT_TYPE, "application/json")], reply.body.clone())
}

async fn status(
    State(state): State<Shared>,
    Query(query): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    state.seen.lock().unwrap().push(Seen::Status(query));
    reply(&state.script.status)
}

async fn action(State(state): State<Shared>, Json(body): Json<Value>) -> impl IntoResponse {
    let scripted = match body["action"].as_str() {
        Some("register") => state.script.register.clone(),
        _ => state.script.provision.clone(),
    };
    state.seen.lock().unwrap().push(Seen::Post(body));
    reply(&scripted)
}

async fn options(State(state): State<Shared>) -> StatusCode {
    state.seen.lock().unwrap().push(Seen::Options);
    state.script.options
}

/// Test config: the given endpoint and no redirect delay.
pub fn config(endpoint: &str) -> FulfillmentConfig {
    let mut config = FulfillmentConfig::default();
    config.api.endpoint = endpoint.to_owned();
    config.portal.redirect_delay_ms = 0;
    config
}

pub fn page_with(config: FulfillmentConfig, query: &str) -> FulfillmentPage<HttpApi> {
    let api = HttpApi::new(&config.api).unwrap();
    let page = Url::parse(&format!("{LANDING}?{query}")).unwrap();
    FulfillmentPage::new(config, page, api)
}

/// An endpoint nothing listens on.
pub async fn dead_endpoint() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}{PATH}")
}

/// Form view that remembers every call.
#[derive(Debug, Default)]
pub struct RecordingView {
    pub messages: Vec<(String, MessageKind)>,
    pub states: Vec<SubmitState>,
    pub navigated: Option<Url>,
}

impl RecordingView {
    pub fn last_message(&self) -> Option<&(String, MessageKind)> {
        self.messages.last()
    }
}

impl FormView for RecordingView {
    fn show_form_message(&mut self, message: &str, kind: MessageKind) {
        self.messages.push((message.to_owned(), kind));
    }

    fn set_submit_state(&mut self, state: SubmitState) {
        self.states.push(state);
    }

    fn navigate(&mut self, url: &Url) {
        self.navigated = Some(url.clone());
    }
}

pub const IDENTITY: &str = "x-amzn-marketplace-token=tok-123&customer=c-42&product=prod-7";
