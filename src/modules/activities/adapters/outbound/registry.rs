use crate::modules::activities::core::activity::{DecideError, SignUpOutcome};
use crate::modules::activities::core::catalog::ActivityCatalog;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("activity not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Rejected(#[from] DecideError),

    #[error("backend error: {0}")]
    Backend(String),
}

/// Store of activities keyed by name. The set of activities is fixed once the
/// registry is built; only participants change.
#[async_trait]
pub trait ActivityRegistry: Send + Sync {
    async fn list(&self) -> Result<ActivityCatalog, RegistryError>;

    async fn sign_up(&self, activity: &str, email: &str) -> Result<SignUpOutcome, RegistryError>;

    async fn unregister(&self, activity: &str, email: &str) -> Result<(), RegistryError>;

    /// Restore every activity's participants to their initial state.
    async fn reset(&self) -> Result<(), RegistryError>;
}
