use async_trait::async_trait;
use dohq_application::ports::DohClient;
use dohq_domain::{DohQuery, DomainError};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

#[derive(Clone)]
pub struct MockDohClient {
    bodies: Arc<RwLock<HashMap<String, String>>>,
    errors: Arc<RwLock<HashMap<String, DomainError>>>,
    queries: Arc<RwLock<Vec<DohQuery>>>,
    calls: Arc<AtomicUsize>,
}

impl MockDohClient {
    pub fn new() -> Self {
        Self {
            bodies: Arc::new(RwLock::new(HashMap::new())),
            errors: Arc::new(RwLock::new(HashMap::new())),
            queries: Arc::new(RwLock::new(Vec::new())),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn set_body(&self, name: &str, body: &str) {
        self.bodies
            .write()
            .unwrap()
            .insert(name.to_string(), body.to_string());
    }

    pub fn set_error(&self, name: &str, error: DomainError) {
        self.errors.write().unwrap().insert(name.to_string(), error);
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn queries(&self) -> Vec<DohQuery> {
        self.queries.read().unwrap().clone()
    }
}

impl Default for MockDohClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DohClient for MockDohClient {
    async fn fetch(&self, query: &DohQuery) -> Result<String, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.queries.write().unwrap().push(query.clone());

        let name = query.name.as_str();
        if let Some(error) = self.errors.read().unwrap().get(name) {
            return Err(error.clone());
        }

        self.bodies
            .read()
            .unwrap()
            .get(name)
            .cloned()
            .ok_or_else(|| DomainError::Transport(format!("no mock body for {}", name)))
    }
}
