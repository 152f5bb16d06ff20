use crate::render::card::ProductCard;
use askama::Template;

pub const NO_PRODUCTS_MESSAGE: &str = "No products found.";

/// What the product container shows after a render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageContent {
    Empty,
    Cards(Vec<ProductCard>),
}

#[derive(Template)]
#[template(path = "products.html")]
struct ProductsTemplate<'a> {
    cards: &'a [ProductCard],
    message: &'a str,
}

impl PageContent {
    pub fn cards(&self) -> &[ProductCard] {
        match self {
            PageContent::Empty => &[],
            PageContent::Cards(cards) => cards,
        }
    }

    /// HTML fragment for the container. Titles and prices are escaped as plain text.
    pub fn to_html(&self) -> Result<String, askama::Error> {
        ProductsTemplate {
            cards: self.cards(),
            message: NO_PRODUCTS_MESSAGE,
        }
        .render()
    }

    pub fn to_text(&self) -> String {
        match self {
            PageContent::Empty => NO_PRODUCTS_MESSAGE.to_string(),
            PageContent::Cards(cards) => cards
                .iter()
                .enumerate()
                .map(|(i, card)| {
                    format!("{:>2}. {} | {} | {}", i + 1, card.title, card.price_label, card.image.src)
                })
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}
