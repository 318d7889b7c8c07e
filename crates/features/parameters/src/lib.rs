//! # Parameter Extraction
//!
//! Turns the landing URL into a [`ParameterSet`] and builds the URL the page redirects to after
//! a successful provisioning call.
//!
//! ```rust
//! use fulfill_parameters::extract_parameters;
//! use fulfill_domain::parameters::Step;
//!
//! let params = extract_parameters("?customer=c-1&step=dns-selection&token=abc");
//! assert_eq!(params.customer_id.as_deref(), Some("c-1"));
//! assert_eq!(params.step, Some(Step::DnsSelection));
//! ```

mod extract;
mod redirect;

pub use extract::{decode_component, extract_from_url, extract_parameters};
pub use fulfill_domain::parameters::{ParameterSet, Step};
pub use redirect::{completion_url, set_query_param};
