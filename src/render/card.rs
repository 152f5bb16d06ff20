use crate::model::Product;
use crate::render::RenderSettings;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardImage {
    pub src: String,
    pub fell_back: bool,
}

impl CardImage {
    /// Swaps to the placeholder after a failed load. Only the first failure has an effect,
    /// so a broken placeholder does not trigger another swap. Returns whether the swap happened.
    pub fn fail_over(&mut self, placeholder: &str) -> bool {
        if self.fell_back {
            return false;
        }
        self.src = placeholder.to_string();
        self.fell_back = true;
        true
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub image: CardImage,
    pub title: String,
    pub price_label: String,
}

impl ProductCard {
    pub fn from_product(product: &Product, settings: &RenderSettings) -> Self {
        // an absent link cannot load, so it goes straight to the placeholder
        let image = match &product.image_link {
            Some(link) => CardImage { src: link.clone(), fell_back: false },
            None => CardImage { src: settings.placeholder_image.clone(), fell_back: true },
        };

        Self {
            image,
            title: product.name.clone(),
            price_label: format!("{} {}", settings.currency, product.price_text()),
        }
    }
}
