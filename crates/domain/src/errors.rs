use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid record type: {0}")]
    InvalidRecordType(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Query timeout")]
    QueryTimeout,

    #[error("Malformed resolver response: {0}")]
    MalformedResponse(String),

    #[error("Unable to resolve {name} ({record_type}): no answer records")]
    NoAnswer { name: String, record_type: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
