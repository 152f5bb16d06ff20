use crate::model::Product;
use crate::utils::contains_lowercase;

/// The three text queries, as typed. Matching is case-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterQuery {
    pub name: String,
    pub brand: String,
    pub product_type: String,
}

impl FilterQuery {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.brand.is_empty() && self.product_type.is_empty()
    }

    fn lowercased(&self) -> FilterQuery {
        FilterQuery {
            name: self.name.to_lowercase(),
            brand: self.brand.to_lowercase(),
            product_type: self.product_type.to_lowercase(),
        }
    }
}

/// Returns the products matching all three queries, in their original order.
pub fn filter_products(products: &[Product], query: &FilterQuery) -> Vec<Product> {
    let query = query.lowercased();
    products
        .iter()
        .filter(|product| matches(product, &query))
        .cloned()
        .collect()
}

fn matches(product: &Product, query: &FilterQuery) -> bool {
    // a product without a brand only passes an empty brand query
    let brand_matches = match &product.brand {
        Some(brand) => contains_lowercase(brand, &query.brand),
        None => query.brand.is_empty(),
    };

    brand_matches
        && contains_lowercase(&product.name, &query.name)
        && contains_lowercase(&product.product_type, &query.product_type)
}
