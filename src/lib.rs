//! amz-wishlist-exporter - Export public Amazon wishlists to CSV
//!
//! Fetches a wishlist page by page, extracts each item's name, price, link
//! and image, and writes the collected rows once pagination ends.

pub mod amazon;
pub mod commands;
pub mod config;
pub mod error;
pub mod format;

pub use amazon::locales::{LocaleConfig, LocaleTable};
pub use amazon::models::{StopReason, WishlistItem};
pub use config::Config;
pub use error::ExportError;
