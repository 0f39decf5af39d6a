//! Data models for wishlist items, pages and crawl results.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One wishlist entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WishlistItem {
    /// Item title text
    pub name: String,
    /// Locale-normalized price (0.0 when missing or unparseable)
    pub price: f64,
    /// Item link
    pub url: String,
    /// Item image URL
    pub image: String,
}

impl WishlistItem {
    pub fn new(
        name: impl Into<String>,
        price: f64,
        url: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self { name: name.into(), price, url: url.into(), image: image.into() }
    }

    /// Returns the item as an output row: name, price, url, image.
    pub fn to_row(&self) -> [String; 4] {
        [self.name.clone(), self.price.to_string(), self.url.clone(), self.image.clone()]
    }
}

/// Fingerprint of the item text on one page, used to spot a repeated page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageSignature(String);

impl PageSignature {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Items extracted from a single wishlist page.
#[derive(Debug, Clone, Default)]
pub struct WishlistPage {
    pub items: Vec<WishlistItem>,
    pub signature: PageSignature,
}

impl WishlistPage {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// Wishlist heading information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WishlistSummary {
    pub title: String,
    pub owner: String,
}

/// Why pagination ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Server answered with a status other than 200
    HttpStatus(u16),
    /// Page had no wishlist items
    EmptyPage,
    /// Page repeated the previous page's items
    RepeatedPage,
    /// Configured page limit reached
    PageLimit,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::HttpStatus(status) => write!(f, "HTTP status {}", status),
            StopReason::EmptyPage => write!(f, "empty page"),
            StopReason::RepeatedPage => write!(f, "repeated page"),
            StopReason::PageLimit => write!(f, "page limit"),
        }
    }
}

/// Outcome of a full crawl.
#[derive(Debug, Clone)]
pub struct CrawlReport {
    /// Items from every accepted page, in page order
    pub items: Vec<WishlistItem>,
    /// Number of requests issued
    pub pages_fetched: u32,
    pub stop_reason: StopReason,
}

impl CrawlReport {
    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_to_row() {
        let item = WishlistItem::new("Product 1", 1.99, "http://www.amazon.com/p1", "img.png");
        assert_eq!(item.to_row(), ["Product 1", "1.99", "http://www.amazon.com/p1", "img.png"]);
    }

    #[test]
    fn test_item_to_row_whole_price() {
        let item = WishlistItem::new("Book", 3.0, "", "");
        assert_eq!(item.to_row()[1], "3");

        let item = WishlistItem::new("Free", 0.0, "", "");
        assert_eq!(item.to_row()[1], "0");
    }

    #[test]
    fn test_page_signature_equality() {
        assert_eq!(PageSignature::new("a b"), PageSignature::new("a b"));
        assert_ne!(PageSignature::new("a"), PageSignature::new("b"));
        assert_eq!(PageSignature::default().as_str(), "");
    }

    #[test]
    fn test_stop_reason_display() {
        assert_eq!(StopReason::HttpStatus(404).to_string(), "HTTP status 404");
        assert_eq!(StopReason::EmptyPage.to_string(), "empty page");
        assert_eq!(StopReason::RepeatedPage.to_string(), "repeated page");
        assert_eq!(StopReason::PageLimit.to_string(), "page limit");
    }

    #[test]
    fn test_item_serde() {
        let item = WishlistItem::new("Mug", 9.5, "http://x/mug", "http://x/mug.jpg");
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"name\":\"Mug\""));
        assert!(json.contains("\"price\":9.5"));

        let parsed: WishlistItem = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, item);
    }
}
