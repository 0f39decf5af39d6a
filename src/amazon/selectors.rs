//! CSS selectors for Amazon wishlist pages (`layout=standard`).
//!
//! Update this file when Amazon changes the wishlist markup, and add a
//! fixture under `tests/fixtures/` for the new layout.

use scraper::Selector;
use std::sync::LazyLock;

/// Selectors for the item list.
pub mod items {
    use super::*;

    /// Item container; ids look like `item_I2ABC...`.
    pub static ITEM: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("[id^='item_']").unwrap());

    /// Title link inside an item.
    pub static NAME: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("[id^='itemName_']").unwrap());

    /// Price text inside an item.
    pub static PRICE: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("[id^='itemPrice_']").unwrap());

    /// Fallback link when the title has no href.
    pub static INFO_LINK: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("[id^='itemInfo_'] .a-link-normal").unwrap());

    /// Item image.
    pub static IMAGE: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("[id^='itemImage_'] img").unwrap());
}

/// Selectors for the wishlist heading.
pub mod header {
    use super::*;

    /// Wishlist title.
    pub static TITLE: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("span.a-size-extra-large").unwrap());

    /// Owner display name.
    pub static OWNER: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("span.g-profile-name").unwrap());
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn test_selectors_compile() {
        let _ = &*items::ITEM;
        let _ = &*items::NAME;
        let _ = &*items::PRICE;
        let _ = &*items::INFO_LINK;
        let _ = &*items::IMAGE;
        let _ = &*header::TITLE;
        let _ = &*header::OWNER;
    }

    #[test]
    fn test_item_prefix_does_not_match_children() {
        let html = Html::parse_document(
            r#"<div id="item_1">
                <a id="itemName_1" href="/p">Name</a>
                <span id="itemPrice_1">$1.00</span>
            </div>"#,
        );

        let items: Vec<_> = html.select(&items::ITEM).collect();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].value().id(), Some("item_1"));
    }
}
