//! HTTP client for wishlist pages.

use crate::config::Config;
use crate::error::{ExportError, Result};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;
use wreq::Client;

/// Status and body of a fetched page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResponse {
    pub status: u16,
    pub body: String,
}

impl PageResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Trait for page fetching - enables mocking for tests.
///
/// Non-200 statuses are returned as responses; only transport failures are
/// errors.
#[async_trait]
pub trait WishlistFetch: Send + Sync {
    async fn get(&self, url: &str) -> Result<PageResponse>;
}

/// Wishlist HTTP client.
pub struct WishlistClient {
    client: Client,
}

impl WishlistClient {
    /// Creates a client with the timeouts and proxy from `config`.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        use anyhow::Context;

        let mut builder = Client::builder()
            .cookie_store(true)
            .gzip(true)
            .brotli(true)
            .redirect(wreq::redirect::Policy::limited(10))
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs));

        if let Some(proxy_url) = &config.proxy {
            debug!("Configuring proxy: {}", proxy_url);
            let proxy = wreq::Proxy::all(proxy_url).context("Failed to configure proxy")?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build().context("Failed to build HTTP client")?;

        Ok(Self { client })
    }
}

#[async_trait]
impl WishlistFetch for WishlistClient {
    async fn get(&self, url: &str) -> Result<PageResponse> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header("Accept", "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8")
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()
            .await
            .map_err(|e| ExportError::transport(url, e))?;

        let status = response.status().as_u16();
        debug!("Response status: {}", status);

        let body = response.text().await.map_err(|e| ExportError::transport(url, e))?;

        Ok(PageResponse { status, body })
    }
}
