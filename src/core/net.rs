// src/core/net.rs
// Blocking HTTP GET. Non-2xx is a FetchError; the caller decides fatality.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};
use crate::error::{EtlError, Result};

fn client() -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| EtlError::Fetch(e.to_string()))
}

/// GET `url` and return the body as text.
pub fn get_text(url: &str) -> Result<String> {
    let resp = client()?
        .get(url)
        .send()
        .map_err(|e| EtlError::Fetch(format!("{url}: {e}")))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(EtlError::Fetch(format!("HTTP {status} for {url}")));
    }
    resp.text().map_err(|e| EtlError::Fetch(format!("{url}: {e}")))
}
