//! dohq domain layer
pub mod action;
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod doh_response;
pub mod errors;

pub use action::Action;
pub use config::{CliOverrides, Config, ConfigError, LoggingConfig, ResolverConfig};
pub use dns_query::{DohQuery, DomainName, DNS_JSON_CONTENT_TYPE};
pub use dns_record::RecordType;
pub use doh_response::{DohAnswer, DohQuestion, DohResponse};
pub use errors::DomainError;
