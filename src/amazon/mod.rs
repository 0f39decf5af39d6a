//! Amazon wishlist modules: locales, HTTP client, parsing, and pagination.

pub mod client;
pub mod crawler;
pub mod locales;
pub mod models;
pub mod parser;
pub mod price;
pub mod selectors;

pub use client::{PageResponse, WishlistClient, WishlistFetch};
pub use crawler::WishlistCrawler;
pub use locales::{LocaleConfig, LocaleTable};
pub use models::{CrawlReport, PageSignature, StopReason, WishlistItem, WishlistPage, WishlistSummary};
pub use parser::Parser;
pub use price::PriceNormalizer;
