use crate::{CrawlerError, SearchConfig};
use tokio::{
    sync::Mutex,
    time::{Duration, Instant},
};
use tracing::debug;

/// Retrieves the raw HTML behind an upstream search URL.
#[async_trait::async_trait]
pub trait Fetch {
    async fn fetch(&self, url: &str) -> Result<String, CrawlerError>;
}

pub struct HttpFetcher {
    client: reqwest::Client,
    request_delay: Duration,
    last_request: Mutex<Option<Instant>>,
}

impl HttpFetcher {
    pub fn new(config: &SearchConfig) -> Result<Self, CrawlerError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Self {
            client,
            request_delay: config.request_delay,
            last_request: Mutex::new(None),
        })
    }

    async fn wait_turn(&self) {
        let mut last_request_mutex = self.last_request.lock().await;
        if let Some(last_request) = last_request_mutex.take() {
            let duration = Instant::now().duration_since(last_request);
            if duration < self.request_delay {
                tokio::time::sleep(self.request_delay - duration).await;
            }
        }
        last_request_mutex.replace(Instant::now());
    }
}

#[async_trait::async_trait]
impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, CrawlerError> {
        self.wait_turn().await;

        debug!("Visit {}", url);
        let html = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(html)
    }
}
