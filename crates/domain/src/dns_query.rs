use super::{DomainError, RecordType};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Content type requested from the resolver through the `ct` parameter.
pub const DNS_JSON_CONTENT_TYPE: &str = "application/dns-json";

const MAX_NAME_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// A domain name that can be interpolated into the query string as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DomainName(Arc<str>);

impl DomainName {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let name = raw.trim();

        if name.is_empty() {
            return Err(DomainError::InvalidDomainName(
                "name must not be empty".to_string(),
            ));
        }

        if name.len() > MAX_NAME_LEN {
            return Err(DomainError::InvalidDomainName(format!(
                "{} exceeds {} characters",
                name, MAX_NAME_LEN
            )));
        }

        if let Some(c) = name
            .chars()
            .find(|c| c.is_whitespace() || matches!(c, '&' | '?' | '#' | '/' | '%' | '='))
        {
            return Err(DomainError::InvalidDomainName(format!(
                "{} contains invalid character {:?}",
                name, c
            )));
        }

        // "." is the root zone; otherwise a single trailing dot is allowed.
        if name != "." {
            let labels = name.strip_suffix('.').unwrap_or(name);
            for label in labels.split('.') {
                if label.is_empty() || label.len() > MAX_LABEL_LEN {
                    return Err(DomainError::InvalidDomainName(format!(
                        "{} has an empty or oversized label",
                        name
                    )));
                }
            }
        }

        Ok(Self(Arc::from(name)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for DomainName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DohQuery {
    pub name: DomainName,
    pub record_type: RecordType,
}

impl DohQuery {
    /// Validates both parts before any request is built.
    pub fn parse(name: &str, record_type: &str) -> Result<Self, DomainError> {
        Ok(Self {
            name: DomainName::parse(name)?,
            record_type: record_type.parse()?,
        })
    }

    /// Query-string pairs in template order: `ct`, `name`, `type`.
    pub fn query_pairs(&self) -> [(&'static str, &str); 3] {
        [
            ("ct", DNS_JSON_CONTENT_TYPE),
            ("name", self.name.as_str()),
            ("type", self.record_type.as_str()),
        ]
    }
}
