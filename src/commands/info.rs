//! Info command: show a wishlist's title and owner.

use crate::amazon::{LocaleTable, WishlistClient, WishlistCrawler, WishlistFetch, WishlistSummary};
use crate::config::Config;
use crate::error::Result;
use anyhow::Context;

/// Looks up wishlist heading details without exporting items.
pub struct InfoCommand {
    config: Config,
    locales: LocaleTable,
}

impl InfoCommand {
    pub fn new(config: Config) -> Self {
        let locales = config.locale_table();
        Self { config, locales }
    }

    /// Fetches the summary and returns it formatted for display.
    pub async fn execute(&self, country_code: &str, wishlist_id: &str) -> anyhow::Result<String> {
        let client = WishlistClient::new(&self.config).context("Failed to create HTTP client")?;
        let summary = self.summary_with_client(&client, country_code, wishlist_id).await?;
        Ok(format_summary(&summary))
    }

    /// Fetches the summary with a provided client (for testing).
    pub async fn summary_with_client(
        &self,
        client: &impl WishlistFetch,
        country_code: &str,
        wishlist_id: &str,
    ) -> Result<WishlistSummary> {
        WishlistCrawler::new(client, &self.locales).summary(wishlist_id, country_code).await
    }
}

fn format_summary(summary: &WishlistSummary) -> String {
    let or_unknown = |s: &str| if s.is_empty() { "(unknown)".to_string() } else { s.to_string() };
    format!("Title:  {}\nOwner:  {}", or_unknown(&summary.title), or_unknown(&summary.owner))
}
