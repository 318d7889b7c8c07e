//! # Form Validators
//!
//! Pure checks run on the provisioning form before anything is sent to the backend.
//!
//! * [`email`]: address format and domain sanity.
//! * [`dns`]: the portal name that becomes `<name>.<hosting domain>`.
//! * [`form`]: combined form check plus the provisioning-parameter completeness check.
//! * [`sanitize`]: normalisation applied to accepted input and the live preview URL.
//!
//! Every validator returns a [`ValidationResult`]; none of them allocate on the happy path
//! beyond the result message.

pub mod dns;
pub mod email;
pub mod form;
pub mod sanitize;

pub use dns::{RESERVED_NAMES, validate_dns_name};
pub use email::{validate_email, validate_email_domain};
pub use form::{ProvisioningParams, validate_form, validate_provisioning_params};
pub use fulfill_domain::validation::{ValidationFailure, ValidationResult};
pub use sanitize::{generate_preview_url, preview_url_for, sanitize_dns_name, sanitize_email};
