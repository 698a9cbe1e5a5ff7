use std::fmt;

/// What the CLI does with the resolver response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Print the raw JSON body.
    Query,
    /// Print the data of the first answer.
    Resolve,
}

impl Action {
    /// Unknown actions are not an error; the caller decides what to do.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "query" => Some(Action::Query),
            "resolve" => Some(Action::Resolve),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Query => "query",
            Action::Resolve => "resolve",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
