mod doh_client;

pub use doh_client::DohClient;

// Re-export for convenience
pub use dohq_domain::DohQuery;
