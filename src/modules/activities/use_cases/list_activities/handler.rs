use crate::modules::activities::adapters::outbound::registry::ActivityRegistry;
use crate::modules::activities::core::catalog::ActivityCatalog;
use crate::modules::activities::use_cases::errors::ApplicationError;
use std::sync::Arc;

pub struct ListActivitiesHandler<TRegistry>
where
    TRegistry: ActivityRegistry + 'static,
{
    registry: Arc<TRegistry>,
}

impl<TRegistry> ListActivitiesHandler<TRegistry>
where
    TRegistry: ActivityRegistry + 'static,
{
    pub fn new(registry: Arc<TRegistry>) -> Self {
        Self { registry }
    }

    pub async fn handle(&self) -> Result<ActivityCatalog, ApplicationError> {
        self.registry.list().await.map_err(|e| {
            tracing::error!(error = %e, "failed to list activities");
            ApplicationError::from(e)
        })
    }
}
