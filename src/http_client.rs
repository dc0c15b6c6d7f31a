use std::time::Duration;

use once_cell::sync::OnceCell;
use reqwest::blocking::Client;

use crate::config;
use crate::error::{FormError, Result};
use crate::fetch::Endpoint;

const USER_AGENT: &str = "Mozilla/5.0 (fpl_form)";

static CLIENT: OnceCell<Client> = OnceCell::new();

/// Shared client; a build failure is reported against the request that needed it.
pub fn http_client(endpoint: Endpoint, url: &str) -> Result<&'static Client> {
    CLIENT.get_or_try_init(|| {
        Client::builder()
            .timeout(Duration::from_secs(config::http_timeout_secs()))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| FormError::network(endpoint, url, format!("failed to build http client: {e}")))
    })
}
