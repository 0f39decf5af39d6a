//! Wishlist pagination: fetch pages in order until the list runs out.

use crate::amazon::client::WishlistFetch;
use crate::amazon::locales::LocaleTable;
use crate::amazon::models::{CrawlReport, PageSignature, StopReason, WishlistItem, WishlistSummary};
use crate::amazon::parser::Parser;
use crate::error::Result;
use tracing::{debug, info, warn};

/// Walks a wishlist page by page.
///
/// Pagination ends on a non-200 status, a page without items, or a page
/// whose items repeat the previous page (Amazon serves the last page again
/// once `page` runs past the end). None of these are errors.
pub struct WishlistCrawler<'a, C: WishlistFetch> {
    client: &'a C,
    locales: &'a LocaleTable,
    max_pages: Option<u32>,
}

impl<'a, C: WishlistFetch> WishlistCrawler<'a, C> {
    pub fn new(client: &'a C, locales: &'a LocaleTable) -> Self {
        Self { client, locales, max_pages: None }
    }

    /// Stops after `max_pages` requests. Unlimited by default.
    pub fn with_max_pages(mut self, max_pages: Option<u32>) -> Self {
        self.max_pages = max_pages.filter(|&n| n > 0);
        self
    }

    /// Crawls every page and returns the items in page order.
    pub async fn crawl(&self, wishlist_id: &str, country_code: &str) -> Result<Vec<WishlistItem>> {
        Ok(self.crawl_report(wishlist_id, country_code).await?.items)
    }

    /// Crawls every page and reports why pagination stopped.
    pub async fn crawl_report(&self, wishlist_id: &str, country_code: &str) -> Result<CrawlReport> {
        let locale = self.locales.resolve(country_code)?;
        let parser = Parser::new(locale, self.locales);
        let wishlist_url = locale.wishlist_url(wishlist_id);

        info!("Exporting: {}", wishlist_url);

        let mut page: u32 = 1;
        let mut last_signature: Option<PageSignature> = None;
        let mut items: Vec<WishlistItem> = Vec::new();

        let stop_reason = loop {
            if self.max_pages.is_some_and(|max| page > max) {
                warn!("Stopping at page limit ({} pages)", page - 1);
                break StopReason::PageLimit;
            }

            let url = format!("{}&page={}", wishlist_url, page);
            let response = self.client.get(&url).await?;

            if !response.is_ok() {
                warn!("Empty content (are you sure that you set your list as public?)");
                debug!("Page {} returned status {}", page, response.status);
                break StopReason::HttpStatus(response.status);
            }

            let parsed = parser.parse_page(&response.body);

            if parsed.is_empty() {
                warn!("Empty content (are you sure that you set your list as public?)");
                break StopReason::EmptyPage;
            }

            if last_signature.as_ref() == Some(&parsed.signature) {
                info!("Current content is repeating last content");
                break StopReason::RepeatedPage;
            }

            debug!("Page {} returned {} items", page, parsed.len());
            items.extend(parsed.items);

            info!("Parsed page {} - Url: {}", page, url);

            last_signature = Some(parsed.signature);
            page += 1;
        };

        info!("Finished");

        Ok(CrawlReport { items, pages_fetched: requests_issued(page, stop_reason), stop_reason })
    }

    /// Fetches the wishlist heading (title and owner).
    pub async fn summary(&self, wishlist_id: &str, country_code: &str) -> Result<WishlistSummary> {
        let locale = self.locales.resolve(country_code)?;
        let parser = Parser::new(locale, self.locales);

        let response = self.client.get(&locale.wishlist_url(wishlist_id)).await?;
        if !response.is_ok() {
            warn!("Wishlist page returned status {}", response.status);
        }

        Ok(parser.parse_summary(&response.body))
    }
}

/// `page` is the page that stopped the loop; a page limit stops before
/// requesting it.
fn requests_issued(page: u32, stop_reason: StopReason) -> u32 {
    match stop_reason {
        StopReason::PageLimit => page - 1,
        _ => page,
    }
}
