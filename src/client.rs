use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use crate::constants::USER_AGENT;
use crate::error::ForecastError;

/// Performs the HTTP GET behind every forecast lookup
pub trait ForecastSource: Send + Sync {
    /// Sends `query` to `url` and returns the decoded JSON body
    fn fetch(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> impl Future<Output = Result<Value, ForecastError>> + Send;
}

/// `ForecastSource` backed by reqwest
#[derive(Clone)]
pub struct KmaClient {
    client: Arc<Client>,
}

impl KmaClient {
    /// Creates a client whose requests give up after `timeout`
    pub fn new(timeout: Duration) -> Result<Self, ForecastError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client: Arc::new(client),
        })
    }
}

impl ForecastSource for KmaClient {
    async fn fetch(&self, url: &str, query: &[(&str, String)]) -> Result<Value, ForecastError> {
        // the query carries the service key, keep it out of the logs
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await?
            .error_for_status()?;

        // The portal answers some key errors with XML despite dataType=JSON.
        // Errors from here on pass through `From<reqwest::Error>`, which drops the URL.
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
