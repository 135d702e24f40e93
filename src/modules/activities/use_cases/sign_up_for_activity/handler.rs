use crate::modules::activities::adapters::outbound::registry::{ActivityRegistry, RegistryError};
use crate::modules::activities::core::activity::SignUpOutcome;
use crate::modules::activities::use_cases::errors::ApplicationError;
use crate::modules::activities::use_cases::sign_up_for_activity::command::SignUpForActivity;
use std::sync::Arc;

pub struct SignUpForActivityHandler<TRegistry>
where
    TRegistry: ActivityRegistry + 'static,
{
    registry: Arc<TRegistry>,
}

impl<TRegistry> SignUpForActivityHandler<TRegistry>
where
    TRegistry: ActivityRegistry + 'static,
{
    pub fn new(registry: Arc<TRegistry>) -> Self {
        Self { registry }
    }

    pub async fn handle(&self, command: SignUpForActivity) -> Result<SignUpOutcome, ApplicationError> {
        match self.registry.sign_up(&command.activity, &command.email).await {
            Ok(outcome) => {
                tracing::info!(
                    activity = %command.activity,
                    email = %command.email,
                    ?outcome,
                    "sign-up handled"
                );
                Ok(outcome)
            }
            Err(RegistryError::Backend(message)) => {
                tracing::error!(activity = %command.activity, %message, "sign-up failed");
                Err(ApplicationError::Unexpected(message))
            }
            Err(e) => {
                tracing::warn!(
                    activity = %command.activity,
                    email = %command.email,
                    error = %e,
                    "sign-up rejected"
                );
                Err(e.into())
            }
        }
    }
}
