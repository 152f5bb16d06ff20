use crate::render::PageContent;
use futures::future::join_all;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

#[async_trait::async_trait]
pub trait ImageProbe: Send + Sync {
    async fn is_reachable(&self, url: &str) -> bool;
}

pub struct HttpImageProbe {
    client: Client,
}

impl HttpImageProbe {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(super::http::USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl ImageProbe for HttpImageProbe {
    async fn is_reachable(&self, url: &str) -> bool {
        match self.client.get(url).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                debug!("Image {} unreachable: {}", url, e);
                false
            }
        }
    }
}

/// Probes every card image of the page concurrently and swaps unreachable ones to the placeholder.
/// Images already showing the placeholder are not probed again.
pub async fn verify_images(content: &mut PageContent, probe: &dyn ImageProbe, placeholder: &str) {
    let PageContent::Cards(cards) = content else {
        return;
    };

    let checks = cards
        .iter()
        .map(move |card| async move { card.image.fell_back || probe.is_reachable(&card.image.src).await });
    let results = join_all(checks).await;

    for (card, reachable) in cards.iter_mut().zip(results) {
        if !reachable {
            card.image.fail_over(placeholder);
        }
    }
}
