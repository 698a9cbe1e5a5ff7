use crate::di::UseCases;
use dohq_domain::{Action, DohQuery, DomainError};
use tracing::debug;

#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Raw body for `query`, first answer data for `resolve`.
    Answer(String),
    InvalidOption,
}

/// Name and type are validated only once the action is known, so an
/// unknown action never builds a request.
pub async fn run(
    use_cases: &UseCases,
    action: &str,
    name: &str,
    qtype: &str,
) -> Result<Outcome, DomainError> {
    let Some(action) = Action::parse(action) else {
        return Ok(Outcome::InvalidOption);
    };

    let query = DohQuery::parse(name, qtype)?;
    debug!(%action, name = %query.name, qtype = %query.record_type, "Dispatching");

    let result = match action {
        Action::Query => use_cases.raw_query.execute(&query).await?,
        Action::Resolve => use_cases.resolve.execute(&query).await?,
    };

    Ok(Outcome::Answer(result))
}
