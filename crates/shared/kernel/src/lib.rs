//! Kernel utilities shared across slices.
//! Keep this crate lightweight; it owns layered config loading and re-exports the domain.
//!
//! ## Config loading
//! ```rust,no_run
//! use fulfill_kernel::config::load_fulfillment_config;
//!
//! let cfg = load_fulfillment_config(Some("fulfill.toml")).unwrap();
//! println!("{}", cfg.api.endpoint);
//! ```
pub mod config;

pub use fulfill_domain as domain;
