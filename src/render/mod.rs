// Rendering: a page of products becomes a fresh set of cards, or the empty-result message.

pub mod card;
pub mod content;

pub use card::{CardImage, ProductCard};
pub use content::{NO_PRODUCTS_MESSAGE, PageContent};

use crate::model::Product;

#[derive(Debug, Clone)]
pub struct RenderSettings {
    pub currency: String,
    pub placeholder_image: String,
}

/// Builds the content for one page of items. Nothing from a previous render is reused.
pub fn render_items(items: &[Product], settings: &RenderSettings) -> PageContent {
    if items.is_empty() {
        return PageContent::Empty;
    }
    PageContent::Cards(
        items
            .iter()
            .map(|product| ProductCard::from_product(product, settings))
            .collect(),
    )
}
