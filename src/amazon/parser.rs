//! HTML parser for Amazon wishlist pages.

use crate::amazon::locales::{LocaleConfig, LocaleTable};
use crate::amazon::models::{PageSignature, WishlistItem, WishlistPage, WishlistSummary};
use crate::amazon::price::PriceNormalizer;
use crate::amazon::selectors::{header, items};
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, trace};

/// Parser for wishlist pages of a single locale.
pub struct Parser {
    locale: LocaleConfig,
    normalizer: PriceNormalizer,
}

impl Parser {
    /// Creates a parser for `locale`, stripping the currency symbols of every
    /// locale in `table`.
    pub fn new(locale: &LocaleConfig, table: &LocaleTable) -> Self {
        Self { locale: locale.clone(), normalizer: PriceNormalizer::new(table) }
    }

    /// Parses one wishlist page into its items and signature.
    pub fn parse_page(&self, html: &str) -> WishlistPage {
        let document = Html::parse_document(html);

        let mut signature = String::new();
        let mut items = Vec::new();

        for element in document.select(&items::ITEM) {
            signature.extend(element.text());
            let item = self.parse_item(element);
            trace!("Parsed item: {} - {}", item.name, item.price);
            items.push(item);
        }

        debug!("Parsed {} items", items.len());

        WishlistPage { items, signature: PageSignature::new(signature) }
    }

    /// Extracts the items of an already-parsed document, in document order.
    ///
    /// Returns an empty list when the page has no `item_` elements.
    pub fn extract(&self, document: &Html) -> Vec<WishlistItem> {
        document.select(&items::ITEM).map(|element| self.parse_item(element)).collect()
    }

    /// Parses the wishlist title and owner name.
    pub fn parse_summary(&self, html: &str) -> WishlistSummary {
        let document = Html::parse_document(html);

        WishlistSummary {
            title: first_text(document.root_element(), &header::TITLE).trim().to_string(),
            owner: first_text(document.root_element(), &header::OWNER).trim().to_string(),
        }
    }

    fn parse_item(&self, element: ElementRef) -> WishlistItem {
        let name = first_text(element, &items::NAME).trim().to_string();

        let price = self.normalizer.normalize(&first_text(element, &items::PRICE), &self.locale);

        let url = match first_attr(element, &items::NAME, "href") {
            Some(href) if !href.is_empty() => format!("{}{}", self.locale.base_url, href),
            // Fallback links may already be absolute; keep them as found.
            _ => first_attr(element, &items::INFO_LINK, "href").unwrap_or_default().to_string(),
        };

        let image =
            first_attr(element, &items::IMAGE, "src").unwrap_or_default().trim().to_string();

        WishlistItem { name, price, url, image }
    }
}

/// Text of the first match, or an empty string.
fn first_text(element: ElementRef, selector: &Selector) -> String {
    element.select(selector).next().map(|e| e.text().collect::<String>()).unwrap_or_default()
}

/// Attribute of the first match, if both exist.
fn first_attr<'a>(element: ElementRef<'a>, selector: &Selector, attr: &str) -> Option<&'a str> {
    element.select(selector).next().and_then(|e| e.value().attr(attr))
}
