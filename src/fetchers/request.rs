use crate::error::ScrapeError;
use log::debug;
use reqwest::Client;
use std::time::Duration;

/// Fetches recipe pages over HTTP.
pub struct RequestFetcher {
    client: Client,
}

impl RequestFetcher {
    pub fn new(user_agent: &str, timeout: Option<Duration>) -> Result<Self, ScrapeError> {
        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }

    /// GET `url` and return the body as text. Non-success statuses are errors.
    ///
    /// The body is decoded with the charset from `Content-Type` (UTF-8 when
    /// absent); undecodable bytes become U+FFFD rather than failing.
    pub async fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::Status {
                url: url.to_string(),
                status,
            });
        }

        let html = response.text().await?;
        debug!("Fetched {} bytes from {}", html.len(), url);

        Ok(html)
    }
}
