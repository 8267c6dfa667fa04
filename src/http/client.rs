use crate::rate_limiter::RateLimiter;
use anyhow::{Context, Result};
use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue};
use std::time::Duration;
use tokio::sync::Mutex;

/// HTTP client with built-in rate limiting.
///
/// Shared by reference: only the rate limiter slot is serialized, requests
/// themselves run concurrently.
pub struct RateLimitedClient {
    client: Client,
    rate_limiter: Mutex<RateLimiter>,
}

impl RateLimitedClient {
    pub fn new(user_agent: &str, timeout_secs: u64, rate_limit_ms: u64) -> Result<Self> {
        let client = Self::build_client(user_agent, timeout_secs)?;
        let rate_limiter = Mutex::new(RateLimiter::new(rate_limit_ms));

        Ok(Self {
            client,
            rate_limiter,
        })
    }

    pub async fn get(&self, url: &str) -> Result<reqwest::Response> {
        self.get_with_headers(url, &[]).await
    }

    /// GET with extra headers, e.g. an `ApiKey` header
    pub async fn get_with_headers(
        &self,
        url: &str,
        headers: &[(&str, &str)],
    ) -> Result<reqwest::Response> {
        let headers = Self::build_headers(headers)?;
        self.rate_limiter.lock().await.wait().await;
        self.send_get_request(url, headers).await
    }

    fn build_client(user_agent: &str, timeout_secs: u64) -> Result<Client> {
        Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")
    }

    fn build_headers(headers: &[(&str, &str)]) -> Result<HeaderMap> {
        let mut map = HeaderMap::new();
        map.insert(ACCEPT, HeaderValue::from_static("application/json"));
        for (name, value) in headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .with_context(|| format!("Invalid header name: {}", name))?;
            let value = HeaderValue::from_str(value)
                .with_context(|| format!("Invalid value for header {}", name))?;
            map.insert(name, value);
        }
        Ok(map)
    }

    async fn send_get_request(&self, url: &str, headers: HeaderMap) -> Result<reqwest::Response> {
        self.client
            .get(url)
            .headers(headers)
            .send()
            .await
            .with_context(|| format!("Failed to send GET request to {}", url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_headers_adds_accept_and_custom() {
        let headers = RateLimitedClient::build_headers(&[("ApiKey", "secret")]).unwrap();

        assert_eq!(headers.get(ACCEPT).unwrap(), "application/json");
        assert_eq!(headers.get("apikey").unwrap(), "secret");
    }

    #[test]
    fn test_build_headers_rejects_bad_name() {
        assert!(RateLimitedClient::build_headers(&[("Api Key", "secret")]).is_err());
    }
}
