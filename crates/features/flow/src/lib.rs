//! # Fulfillment Flow
//!
//! Drives one page view of the marketplace landing page.
//!
//! 1.  **Selection ([`FulfillmentPage::initialize`]):** picks the single [`Section`] to show
//!     from the landing parameters, calling the backend status check when the step asks for it.
//! 2.  **Provisioning ([`FulfillmentPage::submit`]):** validates the DNS form, calls the backend
//!     and redirects to the completion step on success.
//! 3.  **Classification ([`classify`]):** maps provisioning failures to a coarse
//!     [`ErrorKind`] for logging and messaging.
//!
//! The backend is reached through the [`FulfillmentApi`] trait; [`HttpApi`] is the `reqwest`
//! implementation. The page itself is abstracted by [`FormView`].

pub mod api;
pub mod classify;
pub mod controller;
pub mod view;

pub use api::{ApiError, ApiErrorExt, FulfillmentApi, HttpApi};
pub use classify::{ErrorKind, ProvisionFailure, classify_message};
pub use controller::{FulfillmentPage, StatusCheckError, SubmitOutcome};
pub use fulfill_domain::section::{DisplayState, Section};
pub use view::{FormView, MessageKind, SubmitState};
