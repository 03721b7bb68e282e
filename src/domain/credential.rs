use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialError {
    Missing {
        field: &'static str,
        env: &'static str,
    },
    Empty {
        field: &'static str,
    },
}

impl fmt::Display for CredentialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field, env } => {
                write!(f, "no {field} supplied and {env} is not set")
            }
            Self::Empty { field } => write!(f, "{field} must not be empty"),
        }
    }
}

impl std::error::Error for CredentialError {}
