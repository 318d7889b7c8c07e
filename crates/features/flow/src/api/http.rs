use super::FulfillmentApi;
use super::error::{ApiError, ApiErrorExt};
use fulfill_domain::api::{
    ApiAction, HealthReport, ProvisionRequest, ProvisionResponse, RegisterRequest,
    RegisterResponse, StatusResponse, SubscriptionRef,
};
use fulfill_domain::config::ApiConfig;
use fulfill_domain::parameters::keys;
use fulfill_parameters::set_query_param;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, instrument, warn};
use url::Url;

const JSON: &str = "application/json";

/// `reqwest` client for the single fulfillment endpoint.
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: Client,
    endpoint: Url,
}

impl HttpApi {
    /// Builds a client for `config.endpoint`.
    ///
    /// # Errors
    /// Returns [`ApiError::Endpoint`] for an unparsable endpoint and [`ApiError::Transport`] if
    /// the HTTP client cannot be constructed.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let endpoint = Url::parse(&config.endpoint).context("api.endpoint")?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(JSON));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON));

        let mut builder = Client::builder().default_headers(headers);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().context("Failed to build HTTP client")?;

        Ok(Self { client, endpoint })
    }

    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn post<T: DeserializeOwned>(&self, action: &ApiAction) -> Result<(u16, T), ApiError> {
        debug!(action = action.name(), "Sending backend request");
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(action)
            .send()
            .await
            .context(action.name())?;
        read_json(response, action.name()).await
    }
}

/// Decodes the body even for error statuses; the backend reports failures as JSON.
async fn read_json<T: DeserializeOwned>(
    response: Response,
    action: &'static str,
) -> Result<(u16, T), ApiError> {
    let status = response.status();
    let body = response.bytes().await.context(action)?;
    debug!(action, status = status.as_u16(), bytes = body.len(), "Backend replied");

    match serde_json::from_slice::<T>(&body) {
        Ok(value) => Ok((status.as_u16(), value)),
        Err(_) if !status.is_success() => {
            Err(ApiError::Rejected { status: status.as_u16(), context: Some(action.into()) })
        },
        Err(source) => Err(ApiError::Decode { source, context: Some(action.into()) }),
    }
}

impl FulfillmentApi for HttpApi {
    #[instrument(skip_all, fields(customer = %subscription.customer, product = %subscription.product))]
    async fn check_status(
        &self,
        subscription: &SubscriptionRef,
    ) -> Result<StatusResponse, ApiError> {
        let mut url = self.endpoint.clone();
        set_query_param(&mut url, keys::CUSTOMER, &subscription.customer);
        set_query_param(&mut url, keys::PRODUCT, &subscription.product);
        set_query_param(&mut url, keys::TOKEN, &subscription.token);

        let response = self.client.get(url).send().await.context("status")?;
        let (status, mut reply) = read_json::<StatusResponse>(response, "status").await?;

        // An error status only counts as success if the body says so explicitly.
        if !(200..300).contains(&status) && reply.success.is_none() {
            reply.success = Some(false);
        }
        Ok(reply)
    }

    #[instrument(skip_all, fields(customer = %request.customer, dns_name = %request.dns_name))]
    async fn provision(&self, request: &ProvisionRequest) -> Result<ProvisionResponse, ApiError> {
        let action = ApiAction::Provision(request.clone());
        let (status, mut reply) = self.post::<ProvisionResponse>(&action).await?;
        reply.http_status = Some(status);
        Ok(reply)
    }

    #[instrument(skip_all, fields(customer = %subscription.customer, product = %subscription.product))]
    async fn register(&self, subscription: &SubscriptionRef) -> Result<RegisterResponse, ApiError> {
        let action = ApiAction::Register(RegisterRequest::from(subscription.clone()));
        let (_, reply) = self.post::<RegisterResponse>(&action).await?;
        Ok(reply)
    }

    async fn health(&self) -> HealthReport {
        match self.client.request(Method::OPTIONS, self.endpoint.clone()).send().await {
            Ok(response) => HealthReport {
                is_healthy: response.status().is_success(),
                status: Some(response.status().as_u16()),
                error: None,
            },
            Err(error) => {
                warn!(%error, "API health check failed");
                HealthReport { is_healthy: false, status: None, error: Some(error.to_string()) }
            },
        }
    }
}
