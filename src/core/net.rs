// src/core/net.rs
// Blocking HTTPS GET. One page per run, so a plain blocking client with a
// fixed timeout is all the pipeline needs.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::{FETCH_TIMEOUT_SECS, USER_AGENT};
use crate::error::ScrapeError;

/// One fetched page: HTTP status plus the raw body text.
pub struct Page {
    pub status: u16,
    pub body: String,
}

/// Page-source seam. The pipeline only sees this trait, so tests feed it
/// fixture HTML instead of the live site.
pub trait Fetcher {
    fn fetch(&self, url: &str) -> Result<Page, ScrapeError>;
}

/// Live fetcher backed by a `reqwest` blocking client.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Page, ScrapeError> {
        let response = self.client.get(url).send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        Ok(Page { status, body })
    }
}
