//! HTTPS transport for JSON DNS queries (`application/dns-json`)
//!
//! Sends one GET per query with the question in the query string. The
//! response body is the provider's JSON document, returned unparsed.
//!
//! Wire format (HTTP):
//! ```text
//! GET /dns-query?ct=application/dns-json&name=example.com&type=AAAA HTTP/1.1
//! Host: cloudflare-dns.com
//! ```

use async_trait::async_trait;
use dohq_application::ports::DohClient;
use dohq_domain::{DohQuery, DomainError, ResolverConfig};
use std::time::Duration;
use tracing::debug;

/// JSON DNS-over-HTTPS client bound to a single endpoint.
pub struct JsonDohClient {
    http: reqwest::Client,
    endpoint: String,
}

impl JsonDohClient {
    /// The timeout covers the whole exchange: connect, request and body.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, DomainError> {
        let http = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_config(config: &ResolverConfig) -> Result<Self, DomainError> {
        Self::new(config.endpoint.clone(), config.timeout())
    }

    /// `<endpoint>?ct=application/dns-json&name=<name>&type=<qtype>`
    pub fn query_url(&self, query: &DohQuery) -> String {
        let params = query
            .query_pairs()
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect::<Vec<_>>()
            .join("&");

        format!("{}?{}", self.endpoint, params)
    }

    async fn execute(&self, url: &str) -> Result<String, DomainError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| map_request_error(&self.endpoint, e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| map_request_error(&self.endpoint, e))?;

        debug!(
            endpoint = %self.endpoint,
            status = status.as_u16(),
            body_len = body.len(),
            "DoH response received"
        );

        Ok(body)
    }
}

#[async_trait]
impl DohClient for JsonDohClient {
    async fn fetch(&self, query: &DohQuery) -> Result<String, DomainError> {
        let url = self.query_url(query);

        debug!(
            endpoint = %self.endpoint,
            name = %query.name,
            qtype = %query.record_type,
            "Sending DoH query"
        );

        self.execute(&url).await
    }
}

fn map_request_error(endpoint: &str, e: reqwest::Error) -> DomainError {
    if e.is_timeout() {
        DomainError::QueryTimeout
    } else {
        DomainError::Transport(format!("DoH request to {} failed: {}", endpoint, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_url_uses_custom_endpoint() {
        let client = JsonDohClient::new("http://127.0.0.1:8053/resolve", Duration::from_secs(1))
            .unwrap();
        let query = DohQuery::parse("example.com", "MX").unwrap();

        assert_eq!(
            client.query_url(&query),
            "http://127.0.0.1:8053/resolve?ct=application/dns-json&name=example.com&type=MX"
        );
    }

    #[test]
    fn test_query_url_matches_template() {
        let client = JsonDohClient::from_config(&ResolverConfig::default()).unwrap();
        let query = DohQuery::parse("example.com", "aaaa").unwrap();

        assert_eq!(
            client.query_url(&query),
            "https://cloudflare-dns.com/dns-query?ct=application/dns-json&name=example.com&type=AAAA"
        );
    }
}
