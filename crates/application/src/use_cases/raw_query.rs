use crate::ports::DohClient;
use dohq_domain::{DohQuery, DomainError};
use std::sync::Arc;
use tracing::debug;

pub struct RawQueryUseCase {
    client: Arc<dyn DohClient>,
}

impl RawQueryUseCase {
    pub fn new(client: Arc<dyn DohClient>) -> Self {
        Self { client }
    }

    pub async fn execute(&self, query: &DohQuery) -> Result<String, DomainError> {
        let body = self.client.fetch(query).await?;

        debug!(
            name = %query.name,
            qtype = %query.record_type,
            body_len = body.len(),
            "Raw query completed"
        );

        Ok(body)
    }
}
