use async_trait::async_trait;
use dohq_domain::{DohQuery, DomainError};

/// One GET against a JSON DoH endpoint.
#[async_trait]
pub trait DohClient: Send + Sync {
    /// Returns the full response body as text, unparsed.
    ///
    /// Transport failures and timeouts are errors; the HTTP status is not.
    async fn fetch(&self, query: &DohQuery) -> Result<String, DomainError>;
}
