use dohq_application::ports::DohClient;
use dohq_application::use_cases::{RawQueryUseCase, ResolveUseCase};
use dohq_domain::ResolverConfig;
use dohq_infrastructure::dns::JsonDohClient;
use std::sync::Arc;
use tracing::debug;

pub struct UseCases {
    pub raw_query: RawQueryUseCase,
    pub resolve: ResolveUseCase,
}

impl UseCases {
    pub fn new(config: &ResolverConfig) -> anyhow::Result<Self> {
        let client = JsonDohClient::from_config(config)?;

        debug!(
            endpoint = %config.endpoint,
            timeout_ms = config.timeout_ms,
            "DoH client ready"
        );

        Ok(Self::with_client(Arc::new(client)))
    }

    pub fn with_client(client: Arc<dyn DohClient>) -> Self {
        Self {
            raw_query: RawQueryUseCase::new(client.clone()),
            resolve: ResolveUseCase::new(client),
        }
    }
}
