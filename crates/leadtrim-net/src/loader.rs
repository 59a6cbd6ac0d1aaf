//! Resource Loader
//!
//! Blocking HTTP GET for font files.

use std::time::Duration;

use crate::NetError;

/// HTTP Response
#[derive(Debug)]
pub struct Response {
    pub status: u16,
    pub body: Vec<u8>,
}

impl Response {
    /// Check if response is OK (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Load resources from network
pub struct ResourceLoader {
    client: reqwest::blocking::Client,
}

impl ResourceLoader {
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, NetError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| NetError::unavailable("http client", e))?;

        Ok(Self { client })
    }

    /// Fetch a URL with GET
    pub fn fetch(&self, url: &str) -> Result<Response, NetError> {
        let parsed = url::Url::parse(url).map_err(|e| NetError::unavailable(url, e))?;

        tracing::info!("HTTP GET {}", parsed);

        let response = self
            .client
            .get(parsed)
            .send()
            .map_err(|e| NetError::unavailable(url, e))?;

        let status = response.status().as_u16();

        let body = response
            .bytes()
            .map_err(|e| NetError::unavailable(url, e))?
            .to_vec();

        Ok(Response { status, body })
    }
}
