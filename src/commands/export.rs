//! Export command: crawl a wishlist and write it to a file.

use crate::amazon::{LocaleTable, StopReason, WishlistClient, WishlistCrawler, WishlistFetch};
use crate::config::{Config, OutputFormat};
use crate::error::Result;
use crate::format::Formatter;
use anyhow::Context;
use std::path::{Path, PathBuf};
use tracing::info;

/// Result of a finished export.
#[derive(Debug, Clone)]
pub struct ExportOutcome {
    pub path: PathBuf,
    pub item_count: usize,
    pub stop_reason: StopReason,
}

/// Crawls a wishlist and writes the items to disk.
pub struct ExportCommand {
    config: Config,
    locales: LocaleTable,
}

impl ExportCommand {
    /// Creates a new export command.
    pub fn new(config: Config) -> Self {
        let locales = config.locale_table();
        Self { config, locales }
    }

    /// Exports `wishlist_id` from the `country_code` storefront to `output_path`.
    pub async fn execute(
        &self,
        country_code: &str,
        wishlist_id: &str,
        output_path: &Path,
    ) -> anyhow::Result<ExportOutcome> {
        let client = WishlistClient::new(&self.config).context("Failed to create HTTP client")?;

        Ok(self.execute_with_client(&client, country_code, wishlist_id, output_path).await?)
    }

    /// Executes the export with a provided client (for testing).
    ///
    /// Nothing is written unless the crawl succeeds.
    pub async fn execute_with_client(
        &self,
        client: &impl WishlistFetch,
        country_code: &str,
        wishlist_id: &str,
        output_path: &Path,
    ) -> Result<ExportOutcome> {
        let report = WishlistCrawler::new(client, &self.locales)
            .with_max_pages(self.config.max_pages)
            .crawl_report(wishlist_id, country_code)
            .await?;

        info!(
            "Collected {} items from {} pages (stopped: {})",
            report.count(),
            report.pages_fetched,
            report.stop_reason
        );

        Formatter::new(self.config.format).write_to_path(output_path, &report.items)?;

        info!("Saved to {}", output_path.display());

        Ok(ExportOutcome {
            path: output_path.to_path_buf(),
            item_count: report.count(),
            stop_reason: report.stop_reason,
        })
    }
}

/// Timestamped file name in the current directory, e.g.
/// `amazon_wishlist_20240131_235959.csv`.
pub fn default_output_path(format: OutputFormat) -> PathBuf {
    let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    PathBuf::from(format!("amazon_wishlist_{}.{}", stamp, format.extension()))
}
