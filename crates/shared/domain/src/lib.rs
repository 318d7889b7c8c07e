//! # Domain Models
//!
//! Data shared by every fulfillment crate: the landing-page parameter record, the remote
//! customer status, validation results, section view-models, wire DTOs and configuration.
//! Keep it lean: no I/O, networking, or heavy logic.

pub mod api;
pub mod config;
pub mod constants;
pub mod parameters;
pub mod section;
pub mod status;
pub mod validation;
