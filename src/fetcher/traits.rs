use crate::model::{FetchError, Product};

#[async_trait::async_trait]
pub trait ProductSource: Send + Sync {
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError>;
}
