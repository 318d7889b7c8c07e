//! Backend access.

mod error;
mod http;

pub use error::{ApiError, ApiErrorExt};
pub use http::HttpApi;

use fulfill_domain::api::{
    HealthReport, ProvisionRequest, ProvisionResponse, RegisterResponse, StatusResponse,
    SubscriptionRef,
};
use std::future::Future;

/// Operations the fulfillment backend offers.
///
/// A non-success reply that still carries a JSON body is returned as `Ok`; callers inspect
/// `success` themselves. `Err` means nothing usable came back.
pub trait FulfillmentApi: Send + Sync {
    /// Current subscription state for the customer.
    fn check_status(
        &self,
        subscription: &SubscriptionRef,
    ) -> impl Future<Output = Result<StatusResponse, ApiError>> + Send;

    /// Creates the tenant portal.
    fn provision(
        &self,
        request: &ProvisionRequest,
    ) -> impl Future<Output = Result<ProvisionResponse, ApiError>> + Send;

    /// Registers the marketplace subscription without provisioning.
    fn register(
        &self,
        subscription: &SubscriptionRef,
    ) -> impl Future<Output = Result<RegisterResponse, ApiError>> + Send;

    /// Reachability check. Never fails; problems are reported in the [`HealthReport`].
    fn health(&self) -> impl Future<Output = HealthReport> + Send;
}
