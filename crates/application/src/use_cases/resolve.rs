use crate::ports::DohClient;
use dohq_domain::{DohQuery, DohResponse, DomainError};
use std::sync::Arc;
use tracing::debug;

pub struct ResolveUseCase {
    client: Arc<dyn DohClient>,
}

impl ResolveUseCase {
    pub fn new(client: Arc<dyn DohClient>) -> Self {
        Self { client }
    }

    /// Data of the first answer record, in response order.
    pub async fn execute(&self, query: &DohQuery) -> Result<String, DomainError> {
        let body = self.client.fetch(query).await?;

        let response: DohResponse = serde_json::from_str(&body)
            .map_err(|e| DomainError::MalformedResponse(e.to_string()))?;

        match response.first_answer() {
            Some(data) => {
                debug!(
                    name = %query.name,
                    qtype = %query.record_type,
                    answers = response.answer.len(),
                    "Resolved"
                );
                Ok(data.to_string())
            }
            None => {
                let comment = response.comment_text();
                debug!(
                    name = %query.name,
                    qtype = %query.record_type,
                    status = response.status_name(),
                    comment = comment.as_deref().unwrap_or(""),
                    "No answer records in response"
                );
                Err(DomainError::NoAnswer {
                    name: query.name.to_string(),
                    record_type: query.record_type.to_string(),
                })
            }
        }
    }
}
