use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info, instrument};

use super::{FetchError, RemoteDataPort};

const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpPortConfig {
    pub url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl HttpPortConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Fetches the configured URL with a single GET and returns the body text.
#[derive(Debug, Clone)]
pub struct HttpDataPort {
    client: reqwest::Client,
    config: HttpPortConfig,
}

impl HttpDataPort {
    pub fn new(config: HttpPortConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(FetchError::Client)?;
        info!(url = %config.url, timeout = ?config.timeout, "HTTP data port created");
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &HttpPortConfig {
        &self.config
    }
}

#[async_trait]
impl RemoteDataPort for HttpDataPort {
    #[instrument(name = "http_fetch_data", level = "debug", skip(self), fields(url = %self.config.url))]
    async fn fetch_data(&self) -> Result<String, FetchError> {
        let url = &self.config.url;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            debug!(status = status.as_u16(), "Remote returned non-success status");
            return Err(FetchError::Status {
                url: url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|source| FetchError::Body {
            url: url.clone(),
            source,
        })?;
        debug!(bytes = body.len(), "Fetched remote data");
        Ok(body)
    }
}
