use config::{Config, Environment, File};
use fulfill_domain::config::FulfillmentConfig;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment prefix for overrides, e.g. `FULFILL__API__ENDPOINT`.
pub const ENV_PREFIX: &str = "FULFILL";

/// Base name of the config file looked up when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "fulfill";

/// Custom error type for config loading.
#[fulfill_derive::fulfill_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// Layers, lowest priority first:
/// 1. **Base File**: an explicit `path` must exist. Without one, `fulfill.{toml,json,..}` in the
///    working directory is used when present and skipped otherwise.
/// 2. **Environment Overrides**: variables prefixed with `FULFILL__`. Nested structures are
///    accessed using double underscores (e.g., `FULFILL__PORTAL__HOSTING_DOMAIN` maps to
///    `portal.hosting_domain`).
///
/// # Errors
/// * An explicit `path` does not exist or cannot be parsed.
/// * The merged values do not match the structure of `T`.
///
/// # Example
/// ```rust
/// use fulfill_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let (effective_path, required) = path.map_or_else(
        || (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        |p| (p.as_ref().to_path_buf(), true),
    );

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(required))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true)
                .convert_case(config::Case::Snake),
        );

    if required {
        info!(path = %effective_path.display(), "Loading config");
    } else {
        debug!(path = %effective_path.display(), "Loading optional config");
    }

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}

/// [`load_config`] specialised to the fulfillment settings.
///
/// # Errors
/// Same as [`load_config`].
pub fn load_fulfillment_config(
    path: Option<impl AsRef<Path>>,
) -> Result<FulfillmentConfig, ConfigError> {
    load_config(path)
}
