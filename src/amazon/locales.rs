//! Amazon storefront locales: base URL and price formatting per country.

use crate::error::{ExportError, Result};
use serde::Serialize;

/// Storefront settings for one country code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleConfig {
    /// Upper-case two-letter country code
    pub code: String,
    /// Origin used for wishlist requests and relative item links
    pub base_url: String,
    /// Separator between integer and fractional price parts
    pub decimal_delimiter: char,
    /// Currency token stripped from price text
    pub currency_symbol: String,
}

impl LocaleConfig {
    pub fn new(
        code: &str,
        base_url: &str,
        decimal_delimiter: char,
        currency_symbol: &str,
    ) -> Self {
        Self {
            code: code.to_uppercase(),
            base_url: base_url.trim_end_matches('/').to_string(),
            decimal_delimiter,
            currency_symbol: currency_symbol.to_string(),
        }
    }

    /// Returns the wishlist URL for `wishlist_id` without a page parameter.
    pub fn wishlist_url(&self, wishlist_id: &str) -> String {
        format!(
            "{}/registry/wishlist/{}?layout=standard",
            self.base_url,
            urlencoding::encode(wishlist_id)
        )
    }
}

/// Immutable set of supported locales.
///
/// Built once at startup and handed to the crawler and parser; lookups are
/// case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleTable {
    entries: Vec<LocaleConfig>,
}

impl Default for LocaleTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl LocaleTable {
    /// The storefronts the exporter knows about.
    pub fn standard() -> Self {
        Self {
            entries: vec![
                LocaleConfig::new("US", "http://www.amazon.com", '.', "$"),
                LocaleConfig::new("DE", "http://www.amazon.de", ',', "EUR"),
                LocaleConfig::new("UK", "http://www.amazon.co.uk", ',', "£"),
            ],
        }
    }

    /// Returns a copy of the table with `code`'s base URL replaced.
    ///
    /// Unknown codes are left alone; resolution will still reject them.
    pub fn with_base_url(mut self, code: &str, base_url: &str) -> Self {
        let code = normalize_code(code);
        if let Some(entry) = self.entries.iter_mut().find(|e| e.code == code) {
            entry.base_url = base_url.trim_end_matches('/').to_string();
        }
        self
    }

    /// Looks up a country code, ignoring case and surrounding whitespace.
    pub fn resolve(&self, code: &str) -> Result<&LocaleConfig> {
        self.find(code).ok_or_else(|| {
            ExportError::UnsupportedLocale(normalize_code(code), self.codes().join(", "))
        })
    }

    /// Every currency symbol in the table, in table order.
    pub fn currency_symbols(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.currency_symbol.as_str()).collect()
    }

    /// Supported country codes.
    pub fn codes(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.code.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LocaleConfig> {
        self.entries.iter()
    }

    fn find(&self, code: &str) -> Option<&LocaleConfig> {
        let code = normalize_code(code);
        self.entries.iter().find(|e| e.code == code)
    }
}

fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}
