use anyhow::{Context, Result};
use url::Url;

use super::config_model::{Backend, DotEnvyConfig};

/// Loads configuration from the environment (after `.env`). A base URL
/// passed on the command line takes precedence over `CAMCTL_BACKEND_URL`.
pub fn load(base_url_override: Option<Url>) -> Result<DotEnvyConfig> {
    dotenvy::dotenv().ok();

    let base_url = match base_url_override {
        Some(base_url) => base_url,
        None => std::env::var("CAMCTL_BACKEND_URL")
            .context("CAMCTL_BACKEND_URL is not set and no --backend-url was given")?
            .parse()
            .context("CAMCTL_BACKEND_URL is not a valid URL")?,
    };

    let timeout_secs = match std::env::var("CAMCTL_TIMEOUT_SECS") {
        Ok(raw) => Some(raw.parse().context("CAMCTL_TIMEOUT_SECS is invalid")?),
        Err(_) => None,
    };

    Ok(DotEnvyConfig {
        backend: Backend {
            base_url,
            timeout_secs,
        },
    })
}
