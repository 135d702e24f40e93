use crate::modules::activities::adapters::outbound::registry::{ActivityRegistry, RegistryError};
use crate::modules::activities::use_cases::errors::ApplicationError;
use crate::modules::activities::use_cases::unregister_from_activity::command::UnregisterFromActivity;
use std::sync::Arc;

pub struct UnregisterFromActivityHandler<TRegistry>
where
    TRegistry: ActivityRegistry + 'static,
{
    registry: Arc<TRegistry>,
}

impl<TRegistry> UnregisterFromActivityHandler<TRegistry>
where
    TRegistry: ActivityRegistry + 'static,
{
    pub fn new(registry: Arc<TRegistry>) -> Self {
        Self { registry }
    }

    pub async fn handle(&self, command: UnregisterFromActivity) -> Result<(), ApplicationError> {
        match self
            .registry
            .unregister(&command.activity, &command.email)
            .await
        {
            Ok(()) => {
                tracing::info!(activity = %command.activity, email = %command.email, "unregistered");
                Ok(())
            }
            Err(RegistryError::Backend(message)) => {
                tracing::error!(activity = %command.activity, %message, "unregister failed");
                Err(ApplicationError::Unexpected(message))
            }
            Err(e) => {
                tracing::warn!(
                    activity = %command.activity,
                    email = %command.email,
                    error = %e,
                    "unregister rejected"
                );
                Err(e.into())
            }
        }
    }
}
