use crate::domain::model::FetchOutcome;
use crate::utils::error::Result;
use reqwest::{Client, StatusCode};
use std::time::Duration;

pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// Issues a single GET. Only `200 OK` counts as success; the body of any
    /// other response is discarded. The body is decoded with the charset the
    /// response declares, falling back to UTF-8.
    pub async fn fetch(&self, url: &str) -> Result<FetchOutcome> {
        tracing::debug!("Requesting {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if status != StatusCode::OK {
            return Ok(FetchOutcome::Failed {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        tracing::debug!("Received {} bytes", body.len());
        Ok(FetchOutcome::Success {
            status: status.as_u16(),
            body,
        })
    }
}
