use crate::fetcher::traits::ProductSource;
use crate::model::{FetchError, Product};
use reqwest::Client;
use tracing::{debug, info};

pub const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) CatalogViewer/0.1";

/// Fetches the whole catalog in a single GET. No auth, no query parameters, no timeout.
pub struct HttpProductSource {
    client: Client,
    url: String,
}

impl HttpProductSource {
    pub fn new(url: impl Into<String>) -> Result<Self, FetchError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client, url: url.into() })
    }
}

#[async_trait::async_trait]
impl ProductSource for HttpProductSource {
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        info!("GET {}", self.url);
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.bytes().await?;
        debug!("Received {} bytes", body.len());
        let products: Vec<Product> = serde_json::from_slice(&body)?;
        Ok(products)
    }
}
