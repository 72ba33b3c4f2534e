//! HTTP access to the schedule page.

use std::time::Duration;

use anyhow::{Context, Result, bail};

const USER_AGENT: &str = concat!("sis2ics/", env!("CARGO_PKG_VERSION"));

#[derive(Clone)]
pub struct Fetcher {
    http: reqwest::Client,
}

impl Fetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .context("Could not set up HTTP client")?;

        Ok(Fetcher { http })
    }

    /// GET `url` and return the body as text. Anything but 2xx is an error.
    pub async fn fetch_html(&self, url: &str) -> Result<String> {
        tracing::info!(%url, "fetching schedule page");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .with_context(|| format!("Could not reach {}", url))?;

        if !response.status().is_success() {
            bail!("Failed to fetch schedule (HTTP {}) from {}", response.status(), url);
        }

        let body = response
            .text()
            .await
            .with_context(|| format!("Could not read response from {}", url))?;

        tracing::debug!(bytes = body.len(), "schedule page received");
        Ok(body)
    }
}
