use crate::modules::activities::adapters::outbound::registry::RegistryError;
use crate::modules::activities::core::activity::DecideError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error("activity not found: {0}")]
    NotFound(String),

    #[error("domain rejected: {0}")]
    Domain(DecideError),

    #[error("unexpected: {0}")]
    Unexpected(String),
}

impl From<RegistryError> for ApplicationError {
    fn from(error: RegistryError) -> Self {
        match error {
            RegistryError::NotFound(name) => Self::NotFound(name),
            RegistryError::Rejected(reason) => Self::Domain(reason),
            RegistryError::Backend(message) => Self::Unexpected(message),
        }
    }
}
