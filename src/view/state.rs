use crate::filter::{FilterQuery, filter_products};
use crate::model::Product;
use crate::view::pagination::page_slice;

/// Everything the viewer knows between events. Both collections start empty.
#[derive(Debug, Clone)]
pub struct ViewState {
    data: Vec<Product>,
    filtered: Vec<Product>,
    current_page: usize,
    items_per_page: usize,
}

impl ViewState {
    pub fn new(items_per_page: usize) -> Self {
        Self {
            data: Vec::new(),
            filtered: Vec::new(),
            current_page: 0,
            items_per_page,
        }
    }

    /// Replaces the dataset with a fresh fetch result; the filtered copy starts out identical.
    pub fn load(&mut self, products: Vec<Product>) {
        self.filtered = products.clone();
        self.data = products;
    }

    /// Recomputes the filtered subset from the full dataset and resets to the first page.
    pub fn apply_filter(&mut self, query: &FilterQuery) {
        self.filtered = filter_products(&self.data, query);
        self.current_page = 0;
    }

    pub fn current_items(&self) -> &[Product] {
        page_slice(&self.filtered, self.current_page, self.items_per_page)
    }

    pub fn data(&self) -> &[Product] {
        &self.data
    }

    pub fn filtered(&self) -> &[Product] {
        &self.filtered
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }
}
